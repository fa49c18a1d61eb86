use dioxus::prelude::*;

use crate::components::LeaderboardTable;
use crate::hooks::{use_leaderboard, LeaderboardState};

pub const LOADING_MESSAGE: &str = "Loading leaderboard data...";
pub const EMPTY_MESSAGE: &str = "No leaderboard data found for your profile.";

/// Single-line text for every state except a loaded table
pub fn status_message(state: &LeaderboardState) -> Option<String> {
    match state {
        LeaderboardState::Loading => Some(LOADING_MESSAGE.to_string()),
        LeaderboardState::Empty => Some(EMPTY_MESSAGE.to_string()),
        LeaderboardState::Error(msg) => Some(msg.clone()),
        LeaderboardState::Loaded(_) => None,
    }
}

/// Leaderboard standings for the given caller.
///
/// The identity is supplied by the caller; a `None` identity renders the
/// missing-identity error without issuing a request.
#[component]
pub fn SellerLeaderboard(user_id: Option<String>) -> Element {
    let state = use_leaderboard(user_id);
    let current = state.read();

    if let LeaderboardState::Loaded(entries) = &*current {
        return rsx! {
            div {
                class: "container mx-auto p-4 bg-card rounded-lg border border-border shadow-md",
                h2 {
                    class: "text-lg font-bold mb-4",
                    "Seller Leaderboard"
                }
                LeaderboardTable { entries: entries.clone() }
            }
        };
    }

    let message = status_message(&current).unwrap_or_default();
    let class = if current.error().is_some() {
        "p-4 text-destructive"
    } else {
        "p-4 text-muted-foreground"
    };

    rsx! {
        p {
            class: "{class}",
            aria_live: "polite",
            "{message}"
        }
    }
}
