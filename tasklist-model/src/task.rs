//! Task entries and their identifiers.

use uuid::Uuid;

/// Unique identifier for a task, based on UUID v7 for time-ordering.
///
/// The 74 random bits make a repeat within one session negligible;
/// [`TaskListState::add`](crate::TaskListState::add) additionally rejects
/// an ID that collides with a live task.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(Uuid);

impl TaskId {
    /// Creates a new time-ordered task identifier (UUID v7).
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Creates a `TaskId` from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID value.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single to-do entry.
///
/// `id`, `text` and `created_at` are fixed at creation. Only the
/// completion flag changes, and only through
/// [`TaskListState::toggle`](crate::TaskListState::toggle).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: TaskId,
    text: String,
    completed: bool,
    created_at: u64,
}

impl Task {
    pub(crate) const fn new(id: TaskId, text: String, created_at: u64) -> Self {
        Self {
            id,
            text,
            completed: false,
            created_at,
        }
    }

    /// The task's identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// The trimmed, non-empty task text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the task has been marked complete.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    /// Creation time in milliseconds since the Unix epoch.
    #[must_use]
    pub const fn created_at(&self) -> u64 {
        self.created_at
    }

    pub(crate) const fn flip_completed(&mut self) {
        self.completed = !self.completed;
    }
}
