use thiserror::Error;

use crate::search::SearchError;

/// Crate-level error types
///
/// Nothing in the query or announcement path ever returns one of these to the
/// caller; search, filter, and sort all fail open. Errors surface only from
/// the explicit validation entry points the host UI calls for feedback.
#[derive(Error, Debug)]
pub enum Error {
    /// Pattern compilation or matching errors
    #[error("Search error: {0}")]
    Search(#[from] SearchError),

    /// Task record validation errors
    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<validator::ValidationErrors> for Error {
    fn from(err: validator::ValidationErrors) -> Self {
        Error::Validation(err.to_string())
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
