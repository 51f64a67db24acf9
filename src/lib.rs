//! Interaction core for a task-planning UI
//!
//! This crate implements the logic behind a task board's live search box,
//! filter/sort controls, and assistive-technology announcements, leaving
//! rendering to the host:
//!
//! - [`search`] — regex/text search with a single-slot pattern cache and
//!   accessible highlight markup
//! - [`query`] — filter predicates, stable sort comparators, and the
//!   `search -> filter -> sort` pipeline with autocomplete suggestions
//! - [`announce`] — polite/assertive live-region announcements through
//!   host-injected sinks
//! - [`models`] — the task record the host owns and the core reads
//!
//! The guiding policy is fail open: search, filter, and sort feed live UI
//! rendering that must never crash on bad user input, so every failure mode
//! degrades to a safe, empty, or pass-through result plus a diagnostic log
//! line.
//!
//! # Example
//!
//! ```
//! use taskboard_core::models::Task;
//! use taskboard_core::query::{ProcessOptions, TaskFilter, TaskQueryProcessor, TaskSort};
//!
//! let tasks = vec![
//!     Task::new("Buy milk", "Errand", chrono::Local::now().date_naive(), 15),
//!     Task::new("Study", "School", chrono::Local::now().date_naive(), 90),
//! ];
//!
//! let mut processor = TaskQueryProcessor::default();
//! let options = ProcessOptions::new()
//!     .with_search("stu")
//!     .with_filter(TaskFilter::Today)
//!     .with_sort(TaskSort::TitleAsc);
//!
//! let matched = processor.process(&tasks, &options);
//! assert_eq!(matched.len(), 1);
//! assert_eq!(matched[0].title, "Study");
//! ```

pub mod announce;
pub mod error;
pub mod models;
pub mod query;
pub mod search;

pub use error::{Error, Result};
