//! Task list controller: runs operations and publishes the new state.
//!
//! `TaskListController` provides the application-layer interface for
//! adding, toggling and deleting tasks. The state lives in a
//! [`watch`] channel so the presentation layer can subscribe and
//! re-render whenever an operation completes, including rejections.

use tasklist_model::{CompletionSummary, TaskError, TaskId, TaskListState};
use tokio::sync::watch;

/// Owns the session's task list and notifies subscribers of every change.
pub struct TaskListController {
    state: watch::Sender<TaskListState>,
}

impl TaskListController {
    /// Creates a controller holding an empty task list.
    #[must_use]
    pub fn new() -> Self {
        let (state, _) = watch::channel(TaskListState::new());
        Self { state }
    }

    /// Returns a receiver that is marked changed after every operation.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<TaskListState> {
        self.state.subscribe()
    }

    /// Snapshot of the latest published state.
    #[must_use]
    pub fn state(&self) -> TaskListState {
        self.state.borrow().clone()
    }

    /// Adds a task with the given text.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::EmptyText`] if the text is blank. The error is
    /// also recorded as the state's last error.
    pub fn add(&self, raw_text: &str) -> Result<TaskId, TaskError> {
        let outcome = self.state.borrow().add(raw_text);
        match outcome {
            Ok((next, id)) => {
                tracing::debug!(task_id = %id, total = next.len(), "task added");
                self.state.send_replace(next);
                Ok(id)
            }
            Err(e) => Err(self.reject("add", e)),
        }
    }

    /// Adds a task from the pending input.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::EmptyText`] if the pending input is blank.
    pub fn submit(&self) -> Result<TaskId, TaskError> {
        let pending = self.state.borrow().pending_input().to_string();
        self.add(&pending)
    }

    /// Flips the completion flag of a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::NotFound`] if no task has this ID.
    pub fn toggle(&self, id: &TaskId) -> Result<(), TaskError> {
        let outcome = self.state.borrow().toggle(id);
        match outcome {
            Ok(next) => {
                let completed = next.get(id).is_some_and(tasklist_model::Task::is_completed);
                tracing::debug!(task_id = %id, completed, "task toggled");
                self.state.send_replace(next);
                Ok(())
            }
            Err(e) => Err(self.reject("toggle", e)),
        }
    }

    /// Removes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::NotFound`] if no task has this ID.
    pub fn delete(&self, id: &TaskId) -> Result<(), TaskError> {
        let outcome = self.state.borrow().delete(id);
        match outcome {
            Ok(next) => {
                tracing::debug!(task_id = %id, total = next.len(), "task deleted");
                self.state.send_replace(next);
                Ok(())
            }
            Err(e) => Err(self.reject("delete", e)),
        }
    }

    /// Replaces the not-yet-submitted input text.
    pub fn set_pending_input(&self, text: impl Into<String>) {
        let text = text.into();
        self.state
            .send_modify(|state| *state = state.with_pending_input(text));
    }

    /// Completed and total counts for the current list.
    #[must_use]
    pub fn completion_summary(&self) -> CompletionSummary {
        self.state.borrow().completion_summary()
    }

    /// Publishes the current state with `error` recorded and hands the
    /// error back to the caller.
    fn reject(&self, operation: &'static str, error: TaskError) -> TaskError {
        tracing::warn!(operation, %error, "task operation rejected");
        let recorded = error.clone();
        self.state
            .send_modify(|state| *state = state.with_error(recorded));
        error
    }
}

impl Default for TaskListController {
    fn default() -> Self {
        Self::new()
    }
}
