pub mod use_leaderboard;

pub use use_leaderboard::{use_leaderboard, LeaderboardState};
