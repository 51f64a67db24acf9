//! Filter/sort/search orchestration
//!
//! Composes the search engine's existence test with the filter predicates
//! and sort comparators into one pipeline. Stages always apply in the same
//! order: search first (so later stages never touch discarded tasks), then
//! filter, then sort.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::models::Task;
use crate::query::filter::{filter_tasks, TaskFilter};
use crate::query::sort::{sort_tasks, TaskSort};
use crate::search::SearchEngine;

/// Word tokens drawn from task titles when building suggestions.
static WORD_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-z0-9][a-z0-9'-]*").expect("static word token pattern"));

/// One pipeline request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProcessOptions {
    /// Raw search query; blank means no search stage
    pub search_query: Option<String>,

    /// Filter predicate to apply
    pub filter: Option<TaskFilter>,

    /// Sort key to apply
    pub sort: Option<TaskSort>,
}

impl ProcessOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, query: impl Into<String>) -> Self {
        self.search_query = Some(query.into());
        self
    }

    pub fn with_filter(mut self, filter: TaskFilter) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn with_sort(mut self, sort: TaskSort) -> Self {
        self.sort = Some(sort);
        self
    }
}

/// A task prepared for display, with highlight markup when a query is active
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskView {
    pub task: Task,
    pub highlighted_title: Option<String>,
    pub highlighted_tag: Option<String>,
}

/// Result-set metadata for summaries and announcements
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryMetadata {
    /// Size of the input collection
    pub total_count: usize,

    /// Size of the processed result
    pub filtered_count: usize,

    /// Whether a search query was active
    pub has_search: bool,

    /// The active query, if any
    pub search_query: Option<String>,
}

/// Processed tasks plus metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessedTasks {
    pub tasks: Vec<TaskView>,
    pub metadata: QueryMetadata,
}

/// Applies filter predicates, sort comparators, and search matching to a
/// task collection.
///
/// Owns its [`SearchEngine`]; the host constructs one processor per
/// page/session and threads it through calls.
pub struct TaskQueryProcessor {
    engine: SearchEngine,
}

impl TaskQueryProcessor {
    pub fn new(engine: SearchEngine) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &SearchEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut SearchEngine {
        &mut self.engine
    }

    /// Pure predicate application; see [`filter_tasks`].
    pub fn filter(&self, tasks: &[Task], filter: TaskFilter) -> Vec<Task> {
        filter_tasks(tasks, filter)
    }

    /// Stable sort; see [`sort_tasks`].
    pub fn sort(&self, tasks: &[Task], sort: TaskSort) -> Vec<Task> {
        sort_tasks(tasks, sort)
    }

    /// Keep tasks where the query matches the title or the tag.
    ///
    /// A blank query is a no-op: the input comes back unchanged rather than
    /// empty.
    pub fn search(&mut self, tasks: &[Task], query: &str) -> Vec<Task> {
        if query.trim().is_empty() {
            return tasks.to_vec();
        }

        let engine = &mut self.engine;
        tasks
            .iter()
            .filter(|task| {
                engine.has_match(&task.title, query) || engine.has_match(&task.tag, query)
            })
            .cloned()
            .collect()
    }

    /// Apply search, then filter, then sort.
    pub fn process(&mut self, tasks: &[Task], options: &ProcessOptions) -> Vec<Task> {
        let mut current = match options.search_query.as_deref() {
            Some(query) => self.search(tasks, query),
            None => tasks.to_vec(),
        };

        if let Some(filter) = options.filter {
            current = filter_tasks(&current, filter);
        }

        if let Some(sort) = options.sort {
            current = sort_tasks(&current, sort);
        }

        current
    }

    /// As [`process`], additionally attaching highlighted `title`/`tag`
    /// variants when a search query is active, plus result-set metadata.
    ///
    /// [`process`]: TaskQueryProcessor::process
    pub fn process_with_highlighting(
        &mut self,
        tasks: &[Task],
        options: &ProcessOptions,
    ) -> ProcessedTasks {
        let processed = self.process(tasks, options);
        let query = options
            .search_query
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty());

        let engine = &mut self.engine;
        let views: Vec<TaskView> = processed
            .into_iter()
            .map(|task| {
                let (highlighted_title, highlighted_tag) = match query {
                    Some(q) => (
                        Some(engine.highlight_matches(&task.title, q)),
                        Some(engine.highlight_matches(&task.tag, q)),
                    ),
                    None => (None, None),
                };
                TaskView {
                    task,
                    highlighted_title,
                    highlighted_tag,
                }
            })
            .collect();

        ProcessedTasks {
            metadata: QueryMetadata {
                total_count: tasks.len(),
                filtered_count: views.len(),
                has_search: query.is_some(),
                search_query: query.map(str::to_string),
            },
            tasks: views,
        }
    }

    /// Autocomplete candidates for a partial query.
    ///
    /// Candidates are lowercase word tokens from task titles plus whole tag
    /// values. A candidate must contain the lowercased partial query without
    /// being equal to it; duplicates are dropped and at most the configured
    /// limit is returned. Partial queries below the minimum length yield
    /// nothing.
    pub fn suggestions(&self, tasks: &[Task], partial: &str) -> Vec<String> {
        let needle = partial.trim().to_lowercase();
        if needle.chars().count() < self.engine.config().min_suggestion_query {
            return Vec::new();
        }

        let limit = self.engine.config().suggestion_limit;
        let mut seen: HashSet<String> = HashSet::new();
        let mut suggestions = Vec::new();

        for task in tasks {
            let title = task.title.to_lowercase();
            let candidates = WORD_TOKEN
                .find_iter(&title)
                .map(|m| m.as_str().to_string())
                .chain(std::iter::once(task.tag.to_lowercase()));

            for candidate in candidates {
                if candidate.contains(&needle)
                    && candidate != needle
                    && seen.insert(candidate.clone())
                {
                    suggestions.push(candidate);
                    if suggestions.len() == limit {
                        return suggestions;
                    }
                }
            }
        }

        suggestions
    }
}

impl Default for TaskQueryProcessor {
    fn default() -> Self {
        Self::new(SearchEngine::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TaskStatus;
    use chrono::{Duration, Local, NaiveDate};

    fn task(title: &str, tag: &str) -> Task {
        let due = NaiveDate::from_ymd_opt(2026, 8, 30).unwrap();
        Task::new(title, tag, due, 30)
    }

    #[test]
    fn test_search_matches_title_or_tag() {
        let mut processor = TaskQueryProcessor::default();
        let tasks = vec![task("Buy milk", "Errand"), task("Study", "School")];

        let by_title = processor.search(&tasks, "milk");
        assert_eq!(by_title.len(), 1);
        assert_eq!(by_title[0].title, "Buy milk");

        let by_tag = processor.search(&tasks, "school");
        assert_eq!(by_tag.len(), 1);
        assert_eq!(by_tag[0].title, "Study");
    }

    #[test]
    fn test_blank_query_is_a_no_op() {
        let mut processor = TaskQueryProcessor::default();
        let tasks = vec![task("Buy milk", "Errand"), task("Study", "School")];

        assert_eq!(processor.search(&tasks, "").len(), 2);
        assert_eq!(processor.search(&tasks, "   ").len(), 2);
    }

    #[test]
    fn test_process_applies_search_then_filter_then_sort() {
        let mut processor = TaskQueryProcessor::default();
        let today = Local::now().date_naive();

        let overdue_b = Task::new("b errand", "Errand", today - Duration::days(1), 10);
        let overdue_a = Task::new("a errand", "Errand", today - Duration::days(2), 10);
        let future = Task::new("c errand", "Errand", today + Duration::days(3), 10);
        let other = Task::new("unrelated", "Home", today - Duration::days(1), 10);

        let tasks = vec![overdue_b, future, other, overdue_a];
        let options = ProcessOptions::new()
            .with_search("errand")
            .with_filter(TaskFilter::Overdue)
            .with_sort(TaskSort::TitleAsc);

        let processed = processor.process(&tasks, &options);
        let titles: Vec<_> = processed.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["a errand", "b errand"]);
    }

    #[test]
    fn test_highlighting_attached_only_with_active_query() {
        let mut processor = TaskQueryProcessor::default();
        let tasks = vec![task("Buy milk", "Errand")];

        let with_query =
            processor.process_with_highlighting(&tasks, &ProcessOptions::new().with_search("milk"));
        assert!(with_query.metadata.has_search);
        assert_eq!(with_query.metadata.total_count, 1);
        assert_eq!(with_query.metadata.filtered_count, 1);
        let title = with_query.tasks[0].highlighted_title.as_ref().unwrap();
        assert!(title.contains("<mark"));
        // No match in the tag, so its text comes back unwrapped.
        assert_eq!(
            with_query.tasks[0].highlighted_tag.as_deref(),
            Some("Errand")
        );

        let without_query = processor.process_with_highlighting(&tasks, &ProcessOptions::new());
        assert!(!without_query.metadata.has_search);
        assert!(without_query.tasks[0].highlighted_title.is_none());
    }

    #[test]
    fn test_metadata_counts() {
        let mut processor = TaskQueryProcessor::default();
        let mut done = task("Finished", "Errand");
        done.status = TaskStatus::Complete;
        let tasks = vec![task("Buy milk", "Errand"), done];

        let result = processor.process_with_highlighting(
            &tasks,
            &ProcessOptions::new().with_filter(TaskFilter::Pending),
        );
        assert_eq!(result.metadata.total_count, 2);
        assert_eq!(result.metadata.filtered_count, 1);
    }

    #[test]
    fn test_suggestions_exclude_the_literal_query() {
        let processor = TaskQueryProcessor::default();
        let tasks = vec![task("Programming Assignment", "School")];

        let suggestions = processor.suggestions(&tasks, "pro");
        assert!(suggestions.contains(&"programming".to_string()));
        assert!(!suggestions.contains(&"pro".to_string()));
    }

    #[test]
    fn test_suggestions_minimum_query_length() {
        let processor = TaskQueryProcessor::default();
        let tasks = vec![task("Programming Assignment", "School")];

        assert!(processor.suggestions(&tasks, "p").is_empty());
        assert!(processor.suggestions(&tasks, "").is_empty());
    }

    #[test]
    fn test_suggestions_include_tags_and_deduplicate() {
        let processor = TaskQueryProcessor::default();
        let tasks = vec![
            task("School run", "School trip"),
            task("School play", "Family"),
        ];

        let suggestions = processor.suggestions(&tasks, "scho");
        assert_eq!(
            suggestions
                .iter()
                .filter(|s| s.as_str() == "school")
                .count(),
            1
        );
        assert!(suggestions.contains(&"school trip".to_string()));
    }

    #[test]
    fn test_suggestions_capped_at_limit() {
        let processor = TaskQueryProcessor::default();
        let tasks: Vec<Task> = (0..20)
            .map(|i| task(&format!("project{}", i), "Work"))
            .collect();

        let suggestions = processor.suggestions(&tasks, "proj");
        assert_eq!(suggestions.len(), 10);
    }
}
