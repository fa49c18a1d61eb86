// Remote data services

pub mod leaderboard;
pub mod supabase;
