use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use std::fmt;
use std::rc::Rc;

use crate::utils::DataState;

/// Message shown when no caller identity is available
pub const MISSING_IDENTITY_MESSAGE: &str = "User ID not found.";

/// Prefix for every fetch failure other than a missing identity
pub const FETCH_ERROR_PREFIX: &str = "Error fetching leaderboard data:";

/// A column value exactly as the service sent it.
///
/// Postgres `numeric` columns may arrive as JSON strings, so the raw value
/// is kept and displayed with its own text.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct MetricValue(Value);

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.0 {
            Value::String(s) => write!(f, "{}", s),
            Value::Null => Ok(()),
            other => write!(f, "{}", other),
        }
    }
}

/// One seller's row in the `leaderboard` table.
/// Null or missing columns decode to `None` and render as blank cells.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LeaderboardEntry {
    #[serde(default)]
    pub rank: Option<MetricValue>,
    #[serde(default)]
    pub sku_count: Option<MetricValue>,
    #[serde(default)]
    pub competitive_pricing_score: Option<MetricValue>,
    #[serde(default)]
    pub sales_volume: Option<MetricValue>,
    #[serde(default)]
    pub order_fulfillment_rate: Option<MetricValue>,
}

/// Error type for leaderboard fetches
#[derive(Debug, Clone, PartialEq)]
pub enum FetchError {
    MissingIdentity,
    Config(String),
    Service { message: String, code: Option<String> },
    Transport(String),
    Decode(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FetchError::MissingIdentity => write!(f, "{}", MISSING_IDENTITY_MESSAGE),
            FetchError::Config(e) => write!(f, "{}", e),
            FetchError::Service { message, .. } => write!(f, "{}", message),
            FetchError::Transport(e) => write!(f, "{}", e),
            FetchError::Decode(e) => write!(f, "Failed to parse leaderboard rows: {}", e),
        }
    }
}

impl std::error::Error for FetchError {}

impl FetchError {
    /// Text shown to the user for this failure
    pub fn user_message(&self) -> String {
        match self {
            FetchError::MissingIdentity => MISSING_IDENTITY_MESSAGE.to_string(),
            other => format!("{} {}", FETCH_ERROR_PREFIX, other),
        }
    }
}

/// Read-only query capability over the `leaderboard` collection
#[async_trait(?Send)]
pub trait LeaderboardSource {
    /// All rows whose `profile_id` equals `profile_id`, in service order
    async fn fetch_leaderboard(&self, profile_id: &str) -> Result<Vec<LeaderboardEntry>, FetchError>;
}

/// Shared handle to the active source, provided through Dioxus context
#[derive(Clone)]
pub struct LeaderboardService(pub Rc<dyn LeaderboardSource>);

impl LeaderboardService {
    pub fn new(source: impl LeaderboardSource + 'static) -> Self {
        Self(Rc::new(source))
    }
}

/// Stand-in used when the backend is not configured; every fetch fails with
/// the configuration problem.
pub struct UnconfiguredSource {
    reason: String,
}

impl UnconfiguredSource {
    pub fn new(reason: impl Into<String>) -> Self {
        Self { reason: reason.into() }
    }
}

#[async_trait(?Send)]
impl LeaderboardSource for UnconfiguredSource {
    async fn fetch_leaderboard(&self, _profile_id: &str) -> Result<Vec<LeaderboardEntry>, FetchError> {
        Err(FetchError::Config(self.reason.clone()))
    }
}

/// Run one fetch cycle for `user_id`.
///
/// A missing or blank identity fails without touching the source.
pub async fn load_leaderboard(
    source: &dyn LeaderboardSource,
    user_id: Option<&str>,
) -> Result<Vec<LeaderboardEntry>, FetchError> {
    let user_id = match user_id.map(str::trim) {
        Some(id) if !id.is_empty() => id,
        _ => return Err(FetchError::MissingIdentity),
    };

    log::info!("Fetching leaderboard rows for profile {}", user_id);
    let rows = source.fetch_leaderboard(user_id).await?;
    log::info!("Loaded {} leaderboard rows", rows.len());
    Ok(rows)
}

/// Map a finished fetch cycle onto the view state
pub fn to_view_state(result: Result<Vec<LeaderboardEntry>, FetchError>) -> DataState<Vec<LeaderboardEntry>> {
    match result {
        Ok(rows) => DataState::from_rows(rows),
        Err(e) => {
            if let FetchError::Service { code: Some(code), .. } = &e {
                log::error!("Leaderboard query failed with code {}: {}", code, e);
            } else {
                log::error!("Leaderboard query failed: {}", e);
            }
            DataState::Error(e.user_message())
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::RefCell;

    /// In-memory source that records every profile it is asked for
    pub(crate) struct FakeSource {
        pub response: Result<Vec<LeaderboardEntry>, FetchError>,
        pub calls: RefCell<Vec<String>>,
    }

    impl FakeSource {
        pub fn new(response: Result<Vec<LeaderboardEntry>, FetchError>) -> Self {
            Self { response, calls: RefCell::new(Vec::new()) }
        }
    }

    #[async_trait(?Send)]
    impl LeaderboardSource for FakeSource {
        async fn fetch_leaderboard(&self, profile_id: &str) -> Result<Vec<LeaderboardEntry>, FetchError> {
            self.calls.borrow_mut().push(profile_id.to_string());
            self.response.clone()
        }
    }

    pub(crate) fn entry_from_json(json: &str) -> LeaderboardEntry {
        serde_json::from_str(json).unwrap()
    }

    pub(crate) fn sample_entry() -> LeaderboardEntry {
        entry_from_json(
            r#"{"rank":1,"sku_count":10,"competitive_pricing_score":8.5,
                "sales_volume":1000,"order_fulfillment_rate":0.97}"#,
        )
    }

    pub(crate) fn entry_with_rank(rank: i64) -> LeaderboardEntry {
        let mut entry = sample_entry();
        entry.rank = Some(MetricValue(Value::from(rank)));
        entry
    }

    #[test]
    fn test_missing_identity_issues_no_request() {
        let source = FakeSource::new(Ok(vec![sample_entry()]));

        let state = to_view_state(block_on(load_leaderboard(&source, None)));
        assert_eq!(state.error(), Some("User ID not found."));

        let state = to_view_state(block_on(load_leaderboard(&source, Some("   "))));
        assert_eq!(state.error(), Some("User ID not found."));

        assert!(source.calls.borrow().is_empty());
    }

    #[test]
    fn test_zero_rows_is_empty() {
        let source = FakeSource::new(Ok(vec![]));
        let state = to_view_state(block_on(load_leaderboard(&source, Some("user-42"))));
        assert_eq!(state, DataState::Empty);
        assert_eq!(*source.calls.borrow(), vec!["user-42".to_string()]);
    }

    #[test]
    fn test_rows_are_kept_in_service_order() {
        let rows = vec![sample_entry(), entry_with_rank(7), entry_with_rank(3)];
        let source = FakeSource::new(Ok(rows.clone()));

        let state = to_view_state(block_on(load_leaderboard(&source, Some("user-42"))));
        assert_eq!(state, DataState::Loaded(rows));
    }

    #[test]
    fn test_service_error_short_circuits_data() {
        let source = FakeSource::new(Err(FetchError::Service {
            message: "permission denied for table leaderboard".to_string(),
            code: Some("42501".to_string()),
        }));

        let state = to_view_state(block_on(load_leaderboard(&source, Some("user-42"))));
        assert_eq!(
            state.error(),
            Some("Error fetching leaderboard data: permission denied for table leaderboard")
        );
    }

    #[test]
    fn test_transport_error_shows_its_own_message() {
        let err = FetchError::Transport("NetworkError when attempting to fetch resource.".to_string());
        assert_eq!(
            err.user_message(),
            "Error fetching leaderboard data: NetworkError when attempting to fetch resource."
        );

        let err = FetchError::Decode("missing field `rank`".to_string());
        assert!(err.user_message().starts_with(FETCH_ERROR_PREFIX));
    }

    #[test]
    fn test_unconfigured_source_reports_config_error() {
        let source = UnconfiguredSource::new("SUPABASE_URL is not configured");
        let result = block_on(load_leaderboard(&source, Some("user-42")));
        assert_eq!(result, Err(FetchError::Config("SUPABASE_URL is not configured".to_string())));
        assert_eq!(
            to_view_state(result).error(),
            Some("Error fetching leaderboard data: SUPABASE_URL is not configured")
        );
    }

    #[test]
    fn test_entry_ignores_extra_columns() {
        let entry = entry_from_json(
            r#"{"id":5,"profile_id":"user-42","rank":1,"sku_count":10,
                "competitive_pricing_score":8.5,"sales_volume":1000,"order_fulfillment_rate":0.97}"#,
        );
        assert_eq!(entry, sample_entry());
    }

    #[test]
    fn test_null_and_missing_columns_decode_as_none() {
        let entry = entry_from_json(
            r#"{"rank":4,"sku_count":2,"competitive_pricing_score":null,"sales_volume":0}"#,
        );
        assert_eq!(entry.competitive_pricing_score, None);
        assert_eq!(entry.order_fulfillment_rate, None);
        assert_eq!(entry.sales_volume.map(|v| v.to_string()), Some("0".to_string()));
    }

    #[test]
    fn test_string_encoded_numeric_keeps_its_text() {
        let entry = entry_from_json(r#"{"rank":"1","sales_volume":"1000.50"}"#);
        assert_eq!(entry.rank.map(|v| v.to_string()), Some("1".to_string()));
        assert_eq!(entry.sales_volume.map(|v| v.to_string()), Some("1000.50".to_string()));
    }
}
