//! Task query pipeline
//!
//! Filter predicates, stable sort comparators, and search matching over task
//! collections, composable into a single `search -> filter -> sort`
//! pipeline. Unknown host-supplied filter or sort names fail open: the
//! collection passes through unfiltered or unsorted with a logged warning.

mod filter;
mod processor;
mod sort;

pub use filter::{filter_tasks, filter_tasks_at, TaskFilter};
pub use processor::{
    ProcessOptions, ProcessedTasks, QueryMetadata, TaskQueryProcessor, TaskView,
};
pub use sort::{sort_tasks, TaskSort};
