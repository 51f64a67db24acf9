use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use uuid::Uuid;
use validator::Validate;

/// A task record owned by the host controller.
///
/// The core never mutates a task; pipeline stages clone what they keep and
/// highlighting augments a derived [`TaskView`](crate::query::TaskView).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Task {
    /// Unique identifier
    pub id: Uuid,

    /// Human-readable title
    #[validate(length(min = 1, max = 500))]
    pub title: String,

    /// Category tag
    #[validate(length(max = 100))]
    pub tag: String,

    /// Calendar date the task is due
    pub due_date: NaiveDate,

    /// Estimated duration in minutes
    pub duration_minutes: u32,

    /// Completion status
    pub status: TaskStatus,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Create a new pending task due on `due_date`.
    pub fn new(
        title: impl Into<String>,
        tag: impl Into<String>,
        due_date: NaiveDate,
        duration_minutes: u32,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            tag: tag.into(),
            due_date,
            duration_minutes,
            status: TaskStatus::Pending,
            created_at: Utc::now(),
        }
    }

    /// Check if the task has been completed
    pub fn is_complete(&self) -> bool {
        self.status == TaskStatus::Complete
    }

    /// Validate field bounds, mapping to the crate error type.
    pub fn check(&self) -> crate::error::Result<()> {
        self.validate().map_err(Into::into)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString, Display)]
#[strum(ascii_case_insensitive)]
pub enum TaskStatus {
    Pending,
    Complete,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_new_task_defaults() {
        let due = NaiveDate::from_ymd_opt(2026, 9, 1).unwrap();
        let task = Task::new("Buy milk", "Errand", due, 15);

        assert_eq!(task.status, TaskStatus::Pending);
        assert!(!task.is_complete());
        assert_eq!(task.due_date, due);
    }

    #[test]
    fn test_title_length_validation() {
        let due = NaiveDate::from_ymd_opt(2026, 9, 1).unwrap();
        let task = Task::new("", "Errand", due, 15);

        assert!(task.validate().is_err());
        assert!(matches!(task.check(), Err(crate::Error::Validation(_))));
    }

    #[test]
    fn test_status_parses_case_insensitively() {
        assert_eq!("pending".parse::<TaskStatus>().unwrap(), TaskStatus::Pending);
        assert_eq!("Complete".parse::<TaskStatus>().unwrap(), TaskStatus::Complete);
        assert!("done".parse::<TaskStatus>().is_err());
    }
}
