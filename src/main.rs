#![allow(non_snake_case)]

use dioxus::prelude::*;
use stores::auth_store;

// Modules
mod components;
mod config;
mod hooks;
mod routes;
mod services;
mod stores;
mod utils;

use config::SupabaseConfig;
use services::leaderboard::{LeaderboardService, UnconfiguredSource};
use services::supabase::SupabaseClient;

fn main() {
    // Initialize panic hook for better error messages in browser console
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    }

    log::info!("Starting seller leaderboard client");

    dioxus::launch(App);
}

/// Pick the data source from build configuration
fn build_service() -> LeaderboardService {
    match SupabaseConfig::from_build_env() {
        Ok(config) => {
            log::info!("Using Supabase backend at {}", config.url);
            LeaderboardService::new(SupabaseClient::new(config))
        }
        Err(e) => {
            log::error!("Supabase is not configured: {}", e);
            LeaderboardService::new(UnconfiguredSource::new(e.to_string()))
        }
    }
}

#[component]
fn App() -> Element {
    use_context_provider(build_service);

    // Initialize stores on mount
    use_hook(auth_store::init_auth);

    rsx! {
        Router::<routes::Route> {}
    }
}
