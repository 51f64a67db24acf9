//! Filter predicates over task collections

use chrono::{Duration, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::models::{Task, TaskStatus};

/// Named filter predicates the host can apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString, Display)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TaskFilter {
    All,
    Today,
    Week,
    Overdue,
    Pending,
    Completed,
}

impl Default for TaskFilter {
    fn default() -> Self {
        TaskFilter::All
    }
}

impl TaskFilter {
    /// Parse a host-supplied filter name.
    ///
    /// Unknown names fall back to `All` (fail open: an unrecognized filter
    /// returns the collection unfiltered rather than empty).
    pub fn from_param(raw: &str) -> Self {
        raw.parse().unwrap_or_else(|_| {
            tracing::warn!(value = raw, "Unknown filter type; returning tasks unfiltered");
            TaskFilter::All
        })
    }
}

/// Apply `filter` against the current local calendar date.
pub fn filter_tasks(tasks: &[Task], filter: TaskFilter) -> Vec<Task> {
    filter_tasks_at(tasks, filter, Local::now().date_naive())
}

/// Apply `filter` with an explicit reference date.
///
/// `today` stands in for "now truncated to local midnight". `Week` is the
/// inclusive forward window of seven days starting today; `Overdue` keeps
/// tasks due strictly before today whose status is not complete.
pub fn filter_tasks_at(tasks: &[Task], filter: TaskFilter, today: NaiveDate) -> Vec<Task> {
    match filter {
        TaskFilter::All => tasks.to_vec(),
        TaskFilter::Today => tasks
            .iter()
            .filter(|t| t.due_date == today)
            .cloned()
            .collect(),
        TaskFilter::Week => {
            let week_end = today + Duration::days(7);
            tasks
                .iter()
                .filter(|t| t.due_date >= today && t.due_date <= week_end)
                .cloned()
                .collect()
        }
        TaskFilter::Overdue => tasks
            .iter()
            .filter(|t| t.due_date < today && t.status != TaskStatus::Complete)
            .cloned()
            .collect(),
        TaskFilter::Pending => tasks
            .iter()
            .filter(|t| t.status == TaskStatus::Pending)
            .cloned()
            .collect(),
        TaskFilter::Completed => tasks
            .iter()
            .filter(|t| t.status == TaskStatus::Complete)
            .cloned()
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task_due(title: &str, due: NaiveDate) -> Task {
        Task::new(title, "Tag", due, 30)
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 30).unwrap()
    }

    #[test]
    fn test_all_returns_copy() {
        let tasks = vec![task_due("a", today()), task_due("b", today())];
        let filtered = filter_tasks_at(&tasks, TaskFilter::All, today());
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_today_matches_exact_date() {
        let tasks = vec![
            task_due("due today", today()),
            task_due("due tomorrow", today() + Duration::days(1)),
        ];
        let filtered = filter_tasks_at(&tasks, TaskFilter::Today, today());
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "due today");
    }

    #[test]
    fn test_week_window_is_inclusive() {
        let tasks = vec![
            task_due("yesterday", today() - Duration::days(1)),
            task_due("today", today()),
            task_due("day seven", today() + Duration::days(7)),
            task_due("day eight", today() + Duration::days(8)),
        ];
        let filtered = filter_tasks_at(&tasks, TaskFilter::Week, today());
        let titles: Vec<_> = filtered.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["today", "day seven"]);
    }

    #[test]
    fn test_overdue_excludes_today_and_completed() {
        let mut completed_overdue = task_due("completed overdue", today() - Duration::days(3));
        completed_overdue.status = TaskStatus::Complete;

        let tasks = vec![
            task_due("overdue", today() - Duration::days(1)),
            task_due("due today", today()),
            completed_overdue,
        ];
        let filtered = filter_tasks_at(&tasks, TaskFilter::Overdue, today());
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "overdue");
    }

    #[test]
    fn test_status_filters() {
        let mut complete = task_due("done", today());
        complete.status = TaskStatus::Complete;
        let tasks = vec![task_due("open", today()), complete];

        let pending = filter_tasks_at(&tasks, TaskFilter::Pending, today());
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].title, "open");

        let completed = filter_tasks_at(&tasks, TaskFilter::Completed, today());
        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].title, "done");
    }

    #[test]
    fn test_from_param_falls_back_to_all() {
        assert_eq!(TaskFilter::from_param("overdue"), TaskFilter::Overdue);
        assert_eq!(TaskFilter::from_param("OVERDUE"), TaskFilter::Overdue);
        assert_eq!(TaskFilter::from_param("bogus"), TaskFilter::All);
    }

    #[test]
    fn test_filter_serializes_lowercase() {
        // The host exchanges filter names as lowercase strings.
        assert_eq!(
            serde_json::to_string(&TaskFilter::Overdue).unwrap(),
            "\"overdue\""
        );
        assert_eq!(TaskFilter::Completed.to_string(), "completed");
    }
}
