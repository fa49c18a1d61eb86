use async_trait::async_trait;
use gloo_net::http::Request;
use serde::Deserialize;

use crate::config::SupabaseConfig;
use crate::services::leaderboard::{FetchError, LeaderboardEntry, LeaderboardSource};

/// Table queried for seller standings
const LEADERBOARD_TABLE: &str = "leaderboard";

/// Error body returned by PostgREST
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PostgrestError {
    pub message: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub hint: Option<String>,
}

/// Supabase REST client for the leaderboard table
pub struct SupabaseClient {
    config: SupabaseConfig,
}

impl SupabaseClient {
    pub fn new(config: SupabaseConfig) -> Self {
        Self { config }
    }

    /// `select * from leaderboard where profile_id = <profile_id>`
    pub fn leaderboard_url(&self, profile_id: &str) -> String {
        format!(
            "{}/rest/v1/{}?select=*&profile_id=eq.{}",
            self.config.url,
            LEADERBOARD_TABLE,
            urlencoding::encode(profile_id)
        )
    }
}

#[async_trait(?Send)]
impl LeaderboardSource for SupabaseClient {
    async fn fetch_leaderboard(&self, profile_id: &str) -> Result<Vec<LeaderboardEntry>, FetchError> {
        let url = self.leaderboard_url(profile_id);
        let bearer = format!("Bearer {}", self.config.anon_key);

        let response = Request::get(&url)
            .header("apikey", &self.config.anon_key)
            .header("Authorization", &bearer)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        if !response.ok() {
            return Err(service_error(response.status(), &response.status_text(), &body));
        }

        parse_rows(&body)
    }
}

/// Decode a successful response body
pub fn parse_rows(body: &str) -> Result<Vec<LeaderboardEntry>, FetchError> {
    serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))
}

/// Build the error for a non-2xx response, preferring the PostgREST message
pub fn service_error(status: u16, status_text: &str, body: &str) -> FetchError {
    match serde_json::from_str::<PostgrestError>(body) {
        Ok(err) => {
            if let Some(details) = &err.details {
                log::warn!("PostgREST details: {}", details);
            }
            if let Some(hint) = &err.hint {
                log::warn!("PostgREST hint: {}", hint);
            }
            FetchError::Service { message: err.message, code: err.code }
        }
        Err(_) => {
            let message = if status_text.is_empty() {
                format!("HTTP {}", status)
            } else {
                format!("HTTP {} {}", status, status_text)
            };
            FetchError::Service { message, code: None }
        }
    }
}
