//! use_leaderboard hook - fetch lifecycle for one caller's leaderboard rows
//!
//! Runs one fetch cycle on mount and on every identity change. Each cycle
//! takes a generation ticket; a response that arrives after a newer cycle has
//! started is dropped instead of overwriting the newer state.

use dioxus::prelude::*;

use crate::services::leaderboard::{
    load_leaderboard, to_view_state, FetchError, LeaderboardEntry, LeaderboardService,
};
use crate::utils::{DataState, RequestGeneration};

pub type LeaderboardState = DataState<Vec<LeaderboardEntry>>;

/// Hook to fetch the leaderboard rows for `user_id`.
/// Requires a [`LeaderboardService`] in context.
pub fn use_leaderboard(user_id: Option<String>) -> Signal<LeaderboardState> {
    let service = use_context::<LeaderboardService>();
    let mut state = use_signal(|| LeaderboardState::Loading);
    let mut generation = use_signal(RequestGeneration::new);

    use_effect(use_reactive(&user_id, move |user_id| {
        let ticket = generation.write().begin();
        state.set(LeaderboardState::Loading);

        let service = service.clone();
        spawn(async move {
            let result = load_leaderboard(service.0.as_ref(), user_id.as_deref()).await;
            match settle(&generation.peek(), ticket, result) {
                Some(next) => state.set(next),
                None => log::info!("Discarding stale leaderboard response (cycle {})", ticket),
            }
        });
    }));

    state
}

/// View state for a finished cycle, or `None` when the ticket is stale
fn settle(
    generation: &RequestGeneration,
    ticket: u64,
    result: Result<Vec<LeaderboardEntry>, FetchError>,
) -> Option<LeaderboardState> {
    if !generation.is_current(ticket) {
        return None;
    }
    Some(to_view_state(result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::leaderboard::tests::{sample_entry, FakeSource};
    use futures::executor::block_on;

    #[test]
    fn test_stale_response_is_discarded() {
        let first_source = FakeSource::new(Ok(vec![sample_entry()]));
        let second_source = FakeSource::new(Ok(vec![]));
        let mut generation = RequestGeneration::new();

        let first = generation.begin();
        let second = generation.begin();

        // Second cycle resolves first, then the superseded one arrives late
        let second_result = block_on(load_leaderboard(&second_source, Some("user-2")));
        let first_result = block_on(load_leaderboard(&first_source, Some("user-1")));

        let applied = settle(&generation, second, second_result);
        assert_eq!(applied, Some(LeaderboardState::Empty));
        assert_eq!(settle(&generation, first, first_result), None);
    }

    #[test]
    fn test_each_identity_change_fetches_once_for_new_identity() {
        let source = FakeSource::new(Ok(vec![sample_entry()]));
        let mut generation = RequestGeneration::new();

        for user in ["user-1", "user-2"] {
            let ticket = generation.begin();
            let result = block_on(load_leaderboard(&source, Some(user)));
            let state = settle(&generation, ticket, result).unwrap();
            assert_eq!(state, LeaderboardState::Loaded(vec![sample_entry()]));
        }

        assert_eq!(*source.calls.borrow(), vec!["user-1".to_string(), "user-2".to_string()]);
    }

    #[test]
    fn test_current_failure_is_applied() {
        let source = FakeSource::new(Err(FetchError::Transport("offline".to_string())));
        let mut generation = RequestGeneration::new();
        let ticket = generation.begin();

        let result = block_on(load_leaderboard(&source, Some("user-42")));
        let state = settle(&generation, ticket, result).unwrap();
        assert_eq!(state.error(), Some("Error fetching leaderboard data: offline"));
    }
}
