//! Live search with accessible highlighting
//!
//! This module implements the search side of the task board: a raw user
//! query becomes an effective pattern (literal text escaped, or a verbatim
//! regular expression), the most recent compilation is memoized in a
//! single-slot cache, and matches are located and wrapped in accessible
//! highlight markup.
//!
//! Everything here fails open. A pattern that cannot compile, an oversized
//! query, or an unknown mode value degrades to an empty or unchanged result
//! with a logged diagnostic; search input feeds live rendering and must
//! never crash it.

mod config;
mod engine;
mod error;
mod highlight;
mod pattern;

pub use config::{SearchConfig, SearchConfigBuilder};
pub use engine::{summarize_results, MatchRecord, SearchEngine, SearchMode};
pub use error::{SearchError, SearchResult};
pub use highlight::{HtmlEscaper, MarkupEscaper};
pub use pattern::{PatternCheck, PatternFlags, PatternValidator};
