use dioxus::prelude::*;

use crate::services::leaderboard::LeaderboardEntry;

/// Column headers, in display order
pub const COLUMN_HEADERS: [&str; 5] = [
    "Rank",
    "SKU Count",
    "Pricing Score",
    "Sales Volume",
    "Fulfillment Rate",
];

/// Cell text for one entry, matching [`COLUMN_HEADERS`]. Values are shown
/// as sent; a missing value is a blank cell.
pub fn entry_cells(entry: &LeaderboardEntry) -> [String; 5] {
    [
        &entry.rank,
        &entry.sku_count,
        &entry.competitive_pricing_score,
        &entry.sales_volume,
        &entry.order_fulfillment_rate,
    ]
    .map(|value| value.as_ref().map(ToString::to_string).unwrap_or_default())
}

/// Seller standings table, one body row per entry in the given order
#[component]
pub fn LeaderboardTable(entries: Vec<LeaderboardEntry>) -> Element {
    rsx! {
        div {
            class: "overflow-x-auto",
            table {
                class: "min-w-full table-auto",
                thead {
                    tr {
                        class: "bg-muted",
                        for header in COLUMN_HEADERS {
                            th {
                                key: "{header}",
                                class: "px-4 py-2",
                                "{header}"
                            }
                        }
                    }
                }
                tbody {
                    // Index keys: rank is not guaranteed unique
                    for (index, entry) in entries.iter().enumerate() {
                        tr {
                            key: "{index}",
                            class: "border-b border-border hover:bg-accent",
                            for (column, cell) in entry_cells(entry).into_iter().enumerate() {
                                td {
                                    key: "{column}",
                                    class: "px-4 py-2 text-center",
                                    "{cell}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
