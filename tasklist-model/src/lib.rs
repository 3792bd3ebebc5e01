//! Task list model for `tasklist`.
//!
//! Holds the task types and the immutable-per-transition
//! [`TaskListState`]. Every operation returns a new state and leaves
//! the receiver untouched, so callers decide when to publish it.

pub mod state;
pub mod task;

pub use state::{CompletionSummary, TaskListState};
pub use task::{Task, TaskId};

use thiserror::Error;

/// Errors that can occur during task list operations.
///
/// Neither variant is fatal: a rejected operation leaves the tasks and
/// the pending input exactly as they were.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskError {
    /// Task text is empty after trimming whitespace.
    #[error("task text cannot be empty")]
    EmptyText,
    /// No task with the given ID exists in the list.
    #[error("task not found: {0}")]
    NotFound(TaskId),
}
