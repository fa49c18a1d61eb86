use dioxus::prelude::*;
use gloo_storage::{LocalStorage, Storage};

/// Authentication state
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub user_id: Option<String>,
}

/// Global authentication state
pub static AUTH_STATE: GlobalSignal<AuthState> = Signal::global(AuthState::default);

const STORAGE_KEY_USER_ID: &str = "seller_leaderboard_user_id";

/// Initialize authentication from stored credentials
pub fn init_auth() {
    log::info!("Initializing authentication...");

    match LocalStorage::get::<String>(STORAGE_KEY_USER_ID) {
        Ok(stored) => match normalize_user_id(&stored) {
            Ok(user_id) => {
                log::info!("Restored session for {}", user_id);
                *AUTH_STATE.write() = AuthState { user_id: Some(user_id) };
            }
            Err(_) => {
                log::warn!("Discarding blank stored user id");
                LocalStorage::delete(STORAGE_KEY_USER_ID);
            }
        },
        Err(_) => log::info!("No stored session"),
    }
}

/// Sign in as `user_id` and persist it
pub fn sign_in(user_id: &str) -> Result<(), String> {
    let user_id = normalize_user_id(user_id)?;

    if let Err(e) = LocalStorage::set(STORAGE_KEY_USER_ID, &user_id) {
        // Session still works for this tab
        log::warn!("Failed to persist user id: {}", e);
    }

    log::info!("Signed in as {}", user_id);
    *AUTH_STATE.write() = AuthState { user_id: Some(user_id) };
    Ok(())
}

/// Clear the session
pub fn sign_out() {
    LocalStorage::delete(STORAGE_KEY_USER_ID);
    *AUTH_STATE.write() = AuthState::default();
    log::info!("Signed out");
}

/// Current caller identity, if any
pub fn get_user_id() -> Option<String> {
    AUTH_STATE.read().user_id.clone()
}

fn normalize_user_id(input: &str) -> Result<String, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err("User ID cannot be empty".to_string());
    }
    Ok(trimmed.to_string())
}
