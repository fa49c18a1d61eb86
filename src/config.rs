//! Build-time configuration for the Supabase backend.
//!
//! Values come from `SUPABASE_URL` and `SUPABASE_ANON_KEY` at compile time,
//! the same way the app version is baked in with `env!`.

use std::fmt;
use url::Url;

/// Connection settings for the Supabase REST endpoint
#[derive(Debug, Clone, PartialEq)]
pub struct SupabaseConfig {
    pub url: String,
    pub anon_key: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    MissingUrl,
    MissingAnonKey,
    InvalidUrl(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::MissingUrl => write!(f, "SUPABASE_URL is not configured"),
            ConfigError::MissingAnonKey => write!(f, "SUPABASE_ANON_KEY is not configured"),
            ConfigError::InvalidUrl(e) => write!(f, "Invalid SUPABASE_URL: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl SupabaseConfig {
    /// Validate and normalize a project URL and anon key
    pub fn new(url: &str, anon_key: &str) -> Result<Self, ConfigError> {
        let url = url.trim();
        if url.is_empty() {
            return Err(ConfigError::MissingUrl);
        }

        let anon_key = anon_key.trim();
        if anon_key.is_empty() {
            return Err(ConfigError::MissingAnonKey);
        }

        let parsed = Url::parse(url).map_err(|e| ConfigError::InvalidUrl(e.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidUrl(format!(
                "unsupported scheme '{}'",
                parsed.scheme()
            )));
        }

        Ok(Self {
            url: url.trim_end_matches('/').to_string(),
            anon_key: anon_key.to_string(),
        })
    }

    /// Read the configuration baked in at build time
    pub fn from_build_env() -> Result<Self, ConfigError> {
        let url = option_env!("SUPABASE_URL").ok_or(ConfigError::MissingUrl)?;
        let anon_key = option_env!("SUPABASE_ANON_KEY").ok_or(ConfigError::MissingAnonKey)?;
        Self::new(url, anon_key)
    }
}
