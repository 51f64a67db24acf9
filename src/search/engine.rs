//! Live search engine
//!
//! Holds the search mode and case-sensitivity state, memoizes the most
//! recently compiled pattern in a single-slot cache, and renders accessible
//! highlight markup. Every entry point fails open: bad patterns degrade to
//! empty results with a logged diagnostic, never an error the rendering
//! layer has to handle.

use std::sync::Arc;

use regex::Regex;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::query::TaskFilter;
use crate::search::config::SearchConfig;
use crate::search::highlight::{HtmlEscaper, MarkupEscaper};
use crate::search::pattern::{PatternFlags, PatternValidator};

/// How a raw query is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString, Display)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum SearchMode {
    /// Query is literal text; every regex metacharacter is escaped
    Text,
    /// Query is compiled verbatim as a regular expression
    Regex,
}

/// One located occurrence of the prepared pattern.
///
/// `start` and `len` are byte offsets into the source string, so slicing
/// `text[start..start + len]` always yields `text` on valid UTF-8 input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub text: String,
    pub start: usize,
    pub len: usize,
}

/// Single-slot memo of the most recently compiled pattern.
///
/// Valid only while the requested `(pattern, flags)` pair equals the stored
/// key. A failed compile occupies the slot as `None` so a query that cannot
/// compile is not retried on every keystroke.
#[derive(Debug, Default)]
struct PatternCache {
    pattern: String,
    flags: PatternFlags,
    compiled: Option<Arc<Regex>>,
}

/// Search engine with mode state and a single-slot pattern cache.
///
/// One instance per page/session, constructed by the host and threaded
/// through calls; there is no shared module-level state.
pub struct SearchEngine {
    mode: SearchMode,
    case_sensitive: bool,
    cache: PatternCache,
    validator: PatternValidator,
    config: SearchConfig,
    escaper: Arc<dyn MarkupEscaper>,
}

impl SearchEngine {
    /// Create an engine with the default HTML escaper.
    pub fn new(config: SearchConfig) -> Self {
        Self::with_escaper(config, Arc::new(HtmlEscaper))
    }

    /// Create an engine with a host-supplied markup escaper.
    pub fn with_escaper(config: SearchConfig, escaper: Arc<dyn MarkupEscaper>) -> Self {
        Self {
            mode: SearchMode::Text,
            case_sensitive: false,
            cache: PatternCache::default(),
            validator: PatternValidator::new(&config),
            config,
            escaper,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    pub fn case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Set the search mode.
    pub fn set_mode(&mut self, mode: SearchMode) {
        self.mode = mode;
    }

    /// Set the search mode from a host-supplied string.
    ///
    /// Unknown values leave state unchanged; a warning is the only
    /// observable effect.
    pub fn set_mode_param(&mut self, raw: &str) {
        match raw.parse::<SearchMode>() {
            Ok(mode) => self.mode = mode,
            Err(_) => {
                tracing::warn!(value = raw, "Ignoring unknown search mode");
            }
        }
    }

    pub fn set_case_sensitive(&mut self, case_sensitive: bool) {
        self.case_sensitive = case_sensitive;
    }

    fn flags(&self) -> PatternFlags {
        PatternFlags {
            case_insensitive: !self.case_sensitive,
        }
    }

    /// Derive the effective pattern from `query` and compile it, reusing the
    /// cached compilation when `(pattern, flags)` are unchanged.
    ///
    /// Returns `None` when the pattern does not compile; the failure has
    /// already been logged and cached.
    pub fn prepare_pattern(&mut self, query: &str) -> Option<Arc<Regex>> {
        let pattern = match self.mode {
            SearchMode::Text => regex::escape(query),
            SearchMode::Regex => query.to_string(),
        };
        let flags = self.flags();

        if self.cache.pattern == pattern && self.cache.flags == flags {
            return self.cache.compiled.as_ref().map(Arc::clone);
        }

        let compiled = match self.validator.compile(&pattern, flags) {
            Ok(re) => Some(Arc::new(re)),
            Err(e) => {
                tracing::warn!(query = %query, error = %e, "Pattern compilation failed");
                None
            }
        };

        self.cache = PatternCache {
            pattern,
            flags,
            compiled: compiled.as_ref().map(Arc::clone),
        };

        compiled
    }

    /// Find all non-overlapping matches of `query` in `text`, left to right.
    ///
    /// Empty arguments or an uncompilable pattern yield an empty result.
    /// Zero-length matches advance the scan position so iteration always
    /// terminates. Collection stops at the configured match cap; partial
    /// results are still returned.
    pub fn find_matches(&mut self, text: &str, query: &str) -> Vec<MatchRecord> {
        if text.is_empty() || query.is_empty() {
            return Vec::new();
        }

        let pattern = match self.prepare_pattern(query) {
            Some(pattern) => pattern,
            None => return Vec::new(),
        };

        let mut records = Vec::new();
        for m in pattern.find_iter(text) {
            if records.len() >= self.config.max_matches {
                tracing::warn!(
                    cap = self.config.max_matches,
                    query = %query,
                    "Match cap reached; dropping remaining matches"
                );
                break;
            }
            records.push(MatchRecord {
                text: m.as_str().to_string(),
                start: m.start(),
                len: m.len(),
            });
        }

        records
    }

    /// Existence test using the same prepared pattern as [`find_matches`].
    ///
    /// Any failure degrades to `false`.
    ///
    /// [`find_matches`]: SearchEngine::find_matches
    pub fn has_match(&mut self, text: &str, query: &str) -> bool {
        if text.is_empty() || query.is_empty() {
            return false;
        }
        match self.prepare_pattern(query) {
            Some(pattern) => pattern.is_match(text),
            None => false,
        }
    }

    /// Wrap every match of `query` in `text` with an accessible `<mark>`
    /// element.
    ///
    /// Matches are collected first, then spliced back in descending offset
    /// order so inserting markup around one match never shifts the offsets
    /// of matches not yet applied. Labels read 1-based and ascending in
    /// reading order regardless of that insertion order, and all
    /// interpolated label text passes through the injected escaper.
    pub fn highlight_matches(&mut self, text: &str, query: &str) -> String {
        let matches = self.find_matches(text, query);
        if matches.is_empty() {
            return text.to_string();
        }

        let total = matches.len();
        let mut highlighted = text.to_string();

        for (position, record) in matches.iter().enumerate().rev() {
            let ordinal = position + 1;
            let label = self
                .escaper
                .escape(&format!("Match {} of {}: {}", ordinal, total, query));
            let wrapped = format!(
                "<mark class=\"{}\" aria-label=\"{}\">{}</mark>",
                self.config.highlight_class, label, record.text
            );
            highlighted.replace_range(record.start..record.start + record.len, &wrapped);
        }

        highlighted
    }

    /// Summary phrasing for the current result set, suitable for both the
    /// visible summary line and live-region announcements.
    pub fn search_summary(
        &self,
        count: usize,
        query: &str,
        filter: Option<TaskFilter>,
    ) -> String {
        summarize_results(count, query, filter)
    }
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

/// Shared phrasing for search summaries and live-region announcements.
///
/// Four deterministic phrasings keyed on whether a query is present and
/// whether the count is zero, one, or more; the active filter is named when
/// it narrows the set.
pub fn summarize_results(count: usize, query: &str, filter: Option<TaskFilter>) -> String {
    let query = query.trim();
    let mut summary = if query.is_empty() {
        let noun = if count == 1 { "task" } else { "tasks" };
        format!("Showing {} {}", count, noun)
    } else if count == 0 {
        format!("No tasks found for \"{}\"", query)
    } else if count == 1 {
        format!("1 task found for \"{}\"", query)
    } else {
        format!("{} tasks found for \"{}\"", count, query)
    };

    if let Some(filter) = filter {
        if filter != TaskFilter::All {
            summary.push_str(&format!(" in {} filter", filter));
        }
    }

    summary
}
