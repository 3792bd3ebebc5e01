//! The task list state and its transitions.
//!
//! [`TaskListState`] is a value: `add`, `toggle` and `delete` borrow the
//! current state and hand back a new one. A rejected operation returns
//! `Err` and produces nothing, so the previous state stays valid as-is.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::TaskError;
use crate::task::{Task, TaskId};

/// Completed and total task counts for the summary header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CompletionSummary {
    /// Number of tasks marked complete.
    pub completed: usize,
    /// Number of tasks in the list.
    pub total: usize,
}

impl std::fmt::Display for CompletionSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{} completed", self.completed, self.total)
    }
}

/// Session-local task list: ordered tasks, the pending input text, and
/// the error left by the most recent operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskListState {
    /// Insertion-ordered, no two tasks share an ID.
    tasks: Vec<Task>,
    pending_input: String,
    last_error: Option<TaskError>,
}

impl TaskListState {
    /// Creates an empty task list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current timestamp in milliseconds since epoch.
    fn now_ms() -> u64 {
        u64::try_from(
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_millis(),
        )
        .unwrap_or(u64::MAX)
    }

    /// Tasks in insertion order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Looks up a task by ID.
    #[must_use]
    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id() == id)
    }

    /// Number of tasks in the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the list has no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Text typed but not yet submitted.
    #[must_use]
    pub fn pending_input(&self) -> &str {
        &self.pending_input
    }

    /// Error produced by the most recent operation, if it failed.
    #[must_use]
    pub const fn last_error(&self) -> Option<&TaskError> {
        self.last_error.as_ref()
    }

    /// Whether the pending input would be accepted by [`add`](Self::add).
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.pending_input.trim().is_empty()
    }

    /// Appends a task built from `raw_text`.
    ///
    /// The text is trimmed before it is stored. On success the pending
    /// input and the last error are cleared.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::EmptyText`] if the trimmed text is empty.
    pub fn add(&self, raw_text: &str) -> Result<(Self, TaskId), TaskError> {
        let text = raw_text.trim();
        if text.is_empty() {
            return Err(TaskError::EmptyText);
        }

        let id = self.fresh_id();
        let mut tasks = Vec::with_capacity(self.tasks.len() + 1);
        tasks.extend_from_slice(&self.tasks);
        tasks.push(Task::new(id.clone(), text.to_string(), Self::now_ms()));

        let next = Self {
            tasks,
            pending_input: String::new(),
            last_error: None,
        };
        Ok((next, id))
    }

    /// Flips the completion flag of one task. Order, IDs and texts of
    /// every task are unchanged. Applying it twice restores the original.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::NotFound`] if no task has this ID.
    pub fn toggle(&self, id: &TaskId) -> Result<Self, TaskError> {
        let index = self.position(id)?;
        let mut tasks = self.tasks.clone();
        tasks[index].flip_completed();

        Ok(Self {
            tasks,
            pending_input: self.pending_input.clone(),
            last_error: None,
        })
    }

    /// Removes one task, keeping the relative order of the rest.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::NotFound`] if no task has this ID.
    pub fn delete(&self, id: &TaskId) -> Result<Self, TaskError> {
        let index = self.position(id)?;
        let mut tasks = self.tasks.clone();
        tasks.remove(index);

        Ok(Self {
            tasks,
            pending_input: self.pending_input.clone(),
            last_error: None,
        })
    }

    /// Replaces the pending input. Editing the input dismisses any error.
    #[must_use]
    pub fn with_pending_input(&self, text: impl Into<String>) -> Self {
        Self {
            tasks: self.tasks.clone(),
            pending_input: text.into(),
            last_error: None,
        }
    }

    /// Records `error` as the outcome of a rejected operation.
    #[must_use]
    pub fn with_error(&self, error: TaskError) -> Self {
        Self {
            tasks: self.tasks.clone(),
            pending_input: self.pending_input.clone(),
            last_error: Some(error),
        }
    }

    /// Counts completed tasks against the total.
    #[must_use]
    pub fn completion_summary(&self) -> CompletionSummary {
        CompletionSummary {
            completed: self.tasks.iter().filter(|t| t.is_completed()).count(),
            total: self.tasks.len(),
        }
    }

    fn position(&self, id: &TaskId) -> Result<usize, TaskError> {
        self.tasks
            .iter()
            .position(|t| t.id() == id)
            .ok_or_else(|| TaskError::NotFound(id.clone()))
    }

    fn fresh_id(&self) -> TaskId {
        loop {
            let id = TaskId::new();
            if self.get(&id).is_none() {
                return id;
            }
        }
    }
}
