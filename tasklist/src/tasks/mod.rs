//! Session task list ownership.
//!
//! The [`TaskListController`] is the single authoritative owner of the
//! [`TaskListState`](tasklist_model::TaskListState). Every operation
//! publishes the resulting state to subscribers, which re-render from it.

pub mod controller;

pub use controller::TaskListController;
pub use tasklist_model::TaskError;
