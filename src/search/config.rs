//! Search engine configuration
//!
//! The match cap and single-slot pattern cache are deliberate policy carried
//! over from the original interaction design; they live here as named fields
//! rather than magic numbers scattered through the engine.

use serde::{Deserialize, Serialize};

/// Search engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Maximum pattern length accepted before compilation (cheap guard
    /// against pathological input, not a ReDoS proof)
    pub max_pattern_length: usize,

    /// Hard cap on matches collected in one scan; once reached, scanning
    /// stops early and remaining matches are dropped
    pub max_matches: usize,

    /// Maximum number of autocomplete suggestions returned
    pub suggestion_limit: usize,

    /// Minimum query length before suggestions are computed
    pub min_suggestion_query: usize,

    /// CSS class applied to highlight wrappers
    pub highlight_class: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_pattern_length: 1000,
            max_matches: 1000,
            suggestion_limit: 10,
            min_suggestion_query: 2,
            highlight_class: "search-highlight".to_string(),
        }
    }
}

/// Builder for SearchConfig
pub struct SearchConfigBuilder {
    config: SearchConfig,
}

impl SearchConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: SearchConfig::default(),
        }
    }

    pub fn max_pattern_length(mut self, limit: usize) -> Self {
        self.config.max_pattern_length = limit;
        self
    }

    pub fn max_matches(mut self, cap: usize) -> Self {
        self.config.max_matches = cap;
        self
    }

    pub fn suggestion_limit(mut self, limit: usize) -> Self {
        self.config.suggestion_limit = limit;
        self
    }

    pub fn min_suggestion_query(mut self, length: usize) -> Self {
        self.config.min_suggestion_query = length;
        self
    }

    pub fn highlight_class(mut self, class: impl Into<String>) -> Self {
        self.config.highlight_class = class.into();
        self
    }

    pub fn build(self) -> SearchConfig {
        self.config
    }
}

impl Default for SearchConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
