//! Safe regular expression compilation
//!
//! All pattern input ultimately comes from a text field the user is typing
//! into, so compilation failures are an expected steady state rather than an
//! exceptional one.

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use crate::search::config::SearchConfig;
use crate::search::error::{SearchError, SearchResult};

/// Compilation flags derived from engine state. Together with the pattern
/// text these form the single-slot cache key; matching is always global.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PatternFlags {
    pub case_insensitive: bool,
}

/// Outcome of a UI-level syntax check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternCheck {
    pub valid: bool,
    pub error: Option<String>,
}

/// Compiles user-supplied regular expressions with a size guard
pub struct PatternValidator {
    max_pattern_length: usize,
}

impl PatternValidator {
    pub fn new(config: &SearchConfig) -> Self {
        Self {
            max_pattern_length: config.max_pattern_length,
        }
    }

    /// Compile `pattern` with the given flags.
    ///
    /// Oversized patterns are rejected before compilation is attempted. After
    /// a successful compile the pattern is executed once against the empty
    /// string and the result discarded, so execution-time surprises surface
    /// here rather than at first real use.
    pub fn compile(&self, pattern: &str, flags: PatternFlags) -> SearchResult<Regex> {
        let length = pattern.chars().count();
        if length > self.max_pattern_length {
            return Err(SearchError::PatternTooLong {
                length,
                limit: self.max_pattern_length,
            });
        }

        let compiled = RegexBuilder::new(pattern)
            .case_insensitive(flags.case_insensitive)
            .build()
            .map_err(|e| SearchError::InvalidPattern(e.to_string()))?;

        // Smoke execution; result discarded.
        let _ = compiled.is_match("");

        Ok(compiled)
    }

    /// Syntax check for UI feedback. Never caches, never executes.
    pub fn validate(&self, pattern: &str) -> PatternCheck {
        let length = pattern.chars().count();
        if length > self.max_pattern_length {
            return PatternCheck {
                valid: false,
                error: Some(format!(
                    "Pattern length {} exceeds limit of {} characters",
                    length, self.max_pattern_length
                )),
            };
        }

        match Regex::new(pattern) {
            Ok(_) => PatternCheck {
                valid: true,
                error: None,
            },
            Err(e) => PatternCheck {
                valid: false,
                error: Some(e.to_string()),
            },
        }
    }
}
