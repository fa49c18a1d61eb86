/// Type-state machine for async data operations
///
/// Replaces separate `loading`/`error`/`data` signals with a single enum so a
/// view can only ever be in one of its states. Collections get an explicit
/// `Empty` state so "fetched nothing" is distinct from "fetched something".
///
/// # Examples
///
/// ```ignore
/// let mut state = use_signal(|| DataState::Loading);
///
/// // On success:
/// state.set(DataState::from_rows(rows));
///
/// // On error:
/// state.set(DataState::Error("Failed to load".to_string()));
/// ```

#[derive(Debug, Clone, PartialEq)]
pub enum DataState<T> {
    /// Currently loading/fetching data
    Loading,

    /// Fetch succeeded but returned nothing
    Empty,

    /// Successfully loaded with data
    Loaded(T),

    /// Failed to load with error message
    Error(String),
}

impl<T> DataState<T> {
    /// Returns the error message if in error state, None otherwise
    pub fn error(&self) -> Option<&str> {
        match self {
            DataState::Error(msg) => Some(msg),
            _ => None,
        }
    }
}

impl<T> DataState<Vec<T>> {
    /// `Empty` for no rows, `Loaded` otherwise. Row order is kept as given.
    pub fn from_rows(rows: Vec<T>) -> Self {
        if rows.is_empty() {
            DataState::Empty
        } else {
            DataState::Loaded(rows)
        }
    }
}
