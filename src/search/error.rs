//! Error types for search operations

/// Result type for search operations
pub type SearchResult<T> = std::result::Result<T, SearchError>;

/// Errors that can occur while compiling or executing search patterns
///
/// None of these cross the public query API: the engine degrades to an empty
/// or pass-through result and logs a diagnostic instead. They are observable
/// only through [`PatternValidator`](crate::search::PatternValidator), which
/// the host UI calls for syntax feedback.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// Pattern failed to compile
    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),

    /// Pattern exceeds the configured length guard
    #[error("Pattern length {length} exceeds limit of {limit} characters")]
    PatternTooLong { length: usize, limit: usize },

    /// Pattern execution failed against real text
    #[error("Match execution failed: {0}")]
    RuntimeMatch(String),
}

impl From<regex::Error> for SearchError {
    fn from(err: regex::Error) -> Self {
        SearchError::InvalidPattern(err.to_string())
    }
}
