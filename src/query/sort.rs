//! Stable sort comparators over task collections

use std::cmp::Ordering;
use std::iter::Peekable;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::models::Task;

/// Sort keys the host can apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString, Display)]
#[strum(ascii_case_insensitive, serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum TaskSort {
    DueDateAsc,
    DueDateDesc,
    TitleAsc,
    TitleDesc,
    DurationAsc,
    DurationDesc,
    CreatedAsc,
    CreatedDesc,
}

impl TaskSort {
    /// Parse a host-supplied sort key.
    ///
    /// Unknown keys produce `None` (fail open: the caller leaves the input
    /// order unchanged rather than erroring).
    pub fn from_param(raw: &str) -> Option<Self> {
        match raw.parse() {
            Ok(sort) => Some(sort),
            Err(_) => {
                tracing::warn!(value = raw, "Unknown sort key; leaving order unchanged");
                None
            }
        }
    }

    /// Human phrasing for announcements.
    pub fn description(&self) -> &'static str {
        match self {
            TaskSort::DueDateAsc => "due date, earliest first",
            TaskSort::DueDateDesc => "due date, latest first",
            TaskSort::TitleAsc => "title, A to Z",
            TaskSort::TitleDesc => "title, Z to A",
            TaskSort::DurationAsc => "duration, shortest first",
            TaskSort::DurationDesc => "duration, longest first",
            TaskSort::CreatedAsc => "creation time, oldest first",
            TaskSort::CreatedDesc => "creation time, newest first",
        }
    }
}

/// Return a copy of `tasks` in the order given by `sort`.
///
/// The underlying sort is stable, so tasks that compare equal keep their
/// relative input order.
pub fn sort_tasks(tasks: &[Task], sort: TaskSort) -> Vec<Task> {
    let mut sorted = tasks.to_vec();
    sorted.sort_by(|a, b| compare(a, b, sort));
    sorted
}

fn compare(a: &Task, b: &Task, sort: TaskSort) -> Ordering {
    match sort {
        TaskSort::DueDateAsc => a.due_date.cmp(&b.due_date),
        TaskSort::DueDateDesc => b.due_date.cmp(&a.due_date),
        TaskSort::TitleAsc => natural_compare(&a.title, &b.title),
        TaskSort::TitleDesc => natural_compare(&b.title, &a.title),
        TaskSort::DurationAsc => a.duration_minutes.cmp(&b.duration_minutes),
        TaskSort::DurationDesc => b.duration_minutes.cmp(&a.duration_minutes),
        TaskSort::CreatedAsc => a.created_at.cmp(&b.created_at),
        TaskSort::CreatedDesc => b.created_at.cmp(&a.created_at),
    }
}

/// Case-insensitive comparison that orders embedded digit runs numerically,
/// so "Task 2" sorts before "Task 10".
pub(crate) fn natural_compare(a: &str, b: &str) -> Ordering {
    let mut left = a.chars().flat_map(char::to_lowercase).peekable();
    let mut right = b.chars().flat_map(char::to_lowercase).peekable();

    loop {
        match (left.peek().copied(), right.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => {
                if x.is_ascii_digit() && y.is_ascii_digit() {
                    match take_number(&mut left).cmp(&take_number(&mut right)) {
                        Ordering::Equal => {}
                        ordering => return ordering,
                    }
                } else {
                    match x.cmp(&y) {
                        Ordering::Equal => {
                            left.next();
                            right.next();
                        }
                        ordering => return ordering,
                    }
                }
            }
        }
    }
}

fn take_number<I: Iterator<Item = char>>(chars: &mut Peekable<I>) -> u64 {
    let mut value: u64 = 0;
    while let Some(digit) = chars.peek().and_then(|c| c.to_digit(10)) {
        value = value.saturating_mul(10).saturating_add(u64::from(digit));
        chars.next();
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate, Utc};

    fn task(title: &str, due_offset: i64, duration: u32) -> Task {
        let due = NaiveDate::from_ymd_opt(2026, 8, 30).unwrap() + Duration::days(due_offset);
        let mut task = Task::new(title, "Tag", due, duration);
        task.created_at = Utc::now() + Duration::seconds(due_offset);
        task
    }

    #[test]
    fn test_sort_by_due_date() {
        let tasks = vec![task("late", 5, 10), task("soon", 1, 10)];

        let asc = sort_tasks(&tasks, TaskSort::DueDateAsc);
        assert_eq!(asc[0].title, "soon");

        let desc = sort_tasks(&tasks, TaskSort::DueDateDesc);
        assert_eq!(desc[0].title, "late");
    }

    #[test]
    fn test_sort_by_duration() {
        let tasks = vec![task("long", 0, 90), task("short", 0, 15)];
        let sorted = sort_tasks(&tasks, TaskSort::DurationAsc);
        assert_eq!(sorted[0].title, "short");
    }

    #[test]
    fn test_sort_by_created() {
        let tasks = vec![task("newer", 2, 10), task("older", -2, 10)];
        let sorted = sort_tasks(&tasks, TaskSort::CreatedDesc);
        assert_eq!(sorted[0].title, "newer");
    }

    #[test]
    fn test_title_sort_is_case_insensitive_and_numeric_aware() {
        let tasks = vec![
            task("task 10", 0, 10),
            task("Task 2", 0, 10),
            task("apples", 0, 10),
        ];
        let sorted = sort_tasks(&tasks, TaskSort::TitleAsc);
        let titles: Vec<_> = sorted.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["apples", "Task 2", "task 10"]);
    }

    #[test]
    fn test_natural_compare() {
        assert_eq!(natural_compare("item 9", "item 10"), Ordering::Less);
        assert_eq!(natural_compare("Alpha", "alpha"), Ordering::Equal);
        assert_eq!(natural_compare("b", "a2"), Ordering::Greater);
        assert_eq!(natural_compare("a", "ab"), Ordering::Less);
    }

    #[test]
    fn test_from_param() {
        assert_eq!(TaskSort::from_param("due-date-asc"), Some(TaskSort::DueDateAsc));
        assert_eq!(TaskSort::from_param("title-desc"), Some(TaskSort::TitleDesc));
        assert_eq!(TaskSort::from_param("bogus"), None);
    }

    #[test]
    fn test_sort_is_stable_for_equal_keys() {
        let tasks = vec![task("first", 0, 10), task("second", 0, 10)];
        let sorted = sort_tasks(&tasks, TaskSort::DueDateAsc);
        assert_eq!(sorted[0].title, "first");
        assert_eq!(sorted[1].title, "second");
    }
}
