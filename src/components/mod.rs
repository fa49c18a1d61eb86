// UI Components
// This module contains all reusable UI components

pub mod leaderboard_table;
pub mod seller_leaderboard;

pub use leaderboard_table::LeaderboardTable;
pub use seller_leaderboard::SellerLeaderboard;
