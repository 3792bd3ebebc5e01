//! Application state and event handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tasklist_model::{TaskId, TaskListState};
use tokio::sync::watch;

use crate::tasks::TaskListController;

/// Default maximum length of the input box, in characters.
pub const DEFAULT_MAX_INPUT_LEN: usize = 256;

/// Default chrono format for task creation times.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%H:%M";

/// Which panel is currently focused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelFocus {
    /// Input box is focused (default).
    Input,
    /// Task list is focused.
    Tasks,
}

/// Main application state.
///
/// Task data lives in the [`TaskListController`]; the app keeps only
/// presentation state (focus, cursor, selection) plus a subscription
/// used to learn when the list changed.
pub struct App {
    controller: TaskListController,
    view: watch::Receiver<TaskListState>,
    /// Cursor position in the input (character index).
    pub cursor_position: usize,
    /// Which panel is focused.
    pub focus: PanelFocus,
    /// Index of the highlighted task in the list.
    pub selected_task: usize,
    /// Whether the app should quit.
    pub should_quit: bool,
    max_input_len: usize,
    timestamp_format: String,
}

impl App {
    /// Create a new application with an empty task list.
    #[must_use]
    pub fn new() -> Self {
        let controller = TaskListController::new();
        let view = controller.subscribe();
        Self {
            controller,
            view,
            cursor_position: 0,
            focus: PanelFocus::Input,
            selected_task: 0,
            should_quit: false,
            max_input_len: DEFAULT_MAX_INPUT_LEN,
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
        }
    }

    /// Set the maximum number of characters accepted in the input box.
    #[must_use]
    pub fn with_max_input_len(mut self, max_input_len: usize) -> Self {
        self.max_input_len = max_input_len;
        self
    }

    /// Set the chrono format used to display task creation times.
    #[must_use]
    pub fn with_timestamp_format(mut self, format: impl Into<String>) -> Self {
        self.timestamp_format = format.into();
        self
    }

    /// Chrono format for task creation times.
    #[must_use]
    pub fn timestamp_format(&self) -> &str {
        &self.timestamp_format
    }

    /// The controller owning the task list.
    #[must_use]
    pub const fn controller(&self) -> &TaskListController {
        &self.controller
    }

    /// Borrow the most recently published task list state.
    #[must_use]
    pub fn state(&self) -> watch::Ref<'_, TaskListState> {
        self.view.borrow()
    }

    /// Whether the task list changed since the last call.
    pub fn needs_redraw(&mut self) -> bool {
        let changed = self.view.has_changed().unwrap_or(false);
        self.view.mark_unchanged();
        changed
    }

    /// ID of the highlighted task, if the list is non-empty.
    #[must_use]
    pub fn selected_task_id(&self) -> Option<TaskId> {
        self.state()
            .tasks()
            .get(self.selected_task)
            .map(|t| t.id().clone())
    }

    /// Handle a key event.
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        // Global shortcuts
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) | (KeyCode::Esc, _) => {
                self.should_quit = true;
                return;
            }
            (KeyCode::Tab | KeyCode::BackTab, _) => {
                self.cycle_focus();
                return;
            }
            _ => {}
        }

        // Focus-specific shortcuts
        match self.focus {
            PanelFocus::Input => self.handle_input_key(key),
            PanelFocus::Tasks => self.handle_tasks_key(key),
        }
    }

    /// Handle key event when input is focused.
    fn handle_input_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.submit_task(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.enter_char(c);
            }
            KeyCode::Backspace => self.delete_char_before_cursor(),
            KeyCode::Delete => self.delete_char_at_cursor(),
            KeyCode::Left => self.move_cursor_left(),
            KeyCode::Right => self.move_cursor_right(),
            KeyCode::Home => self.cursor_position = 0,
            KeyCode::End => self.cursor_position = self.input_len(),
            _ => {}
        }
    }

    /// Handle key event when the task list is focused.
    fn handle_tasks_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.prev_task(),
            KeyCode::Down | KeyCode::Char('j') => self.next_task(),
            KeyCode::Enter | KeyCode::Char(' ') => self.toggle_selected(),
            KeyCode::Delete | KeyCode::Char('d') => self.delete_selected(),
            _ => {}
        }
    }

    /// Switch focus between the input box and the task list.
    const fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            PanelFocus::Input => PanelFocus::Tasks,
            PanelFocus::Tasks => PanelFocus::Input,
        };
    }

    /// Submit the pending input as a new task.
    fn submit_task(&mut self) {
        if self.controller.submit().is_ok() {
            self.cursor_position = 0;
            self.selected_task = self.task_count().saturating_sub(1);
        }
    }

    /// Toggle completion of the highlighted task.
    fn toggle_selected(&self) {
        if let Some(id) = self.selected_task_id() {
            let _ = self.controller.toggle(&id);
        }
    }

    /// Delete the highlighted task and keep the selection in range.
    fn delete_selected(&mut self) {
        if let Some(id) = self.selected_task_id()
            && self.controller.delete(&id).is_ok()
        {
            self.selected_task = self
                .selected_task
                .min(self.task_count().saturating_sub(1));
        }
    }

    /// Insert a character at the cursor position.
    fn enter_char(&mut self, c: char) {
        if self.input_len() >= self.max_input_len {
            tracing::debug!(max = self.max_input_len, "input length limit reached");
            return;
        }
        let cursor = self.clamped_cursor();
        let mut input = self.state().pending_input().to_string();
        let index = byte_index(&input, cursor);
        input.insert(index, c);
        self.controller.set_pending_input(input);
        self.cursor_position = cursor + 1;
    }

    /// Delete the character before the cursor.
    fn delete_char_before_cursor(&mut self) {
        let cursor = self.clamped_cursor();
        if cursor == 0 {
            self.cursor_position = 0;
            return;
        }
        let mut input = self.state().pending_input().to_string();
        let index = byte_index(&input, cursor - 1);
        input.remove(index);
        self.controller.set_pending_input(input);
        self.cursor_position = cursor - 1;
    }

    /// Delete the character under the cursor.
    fn delete_char_at_cursor(&mut self) {
        let cursor = self.clamped_cursor();
        self.cursor_position = cursor;
        if cursor >= self.input_len() {
            return;
        }
        let mut input = self.state().pending_input().to_string();
        let index = byte_index(&input, cursor);
        input.remove(index);
        self.controller.set_pending_input(input);
    }

    /// Move cursor left.
    const fn move_cursor_left(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
        }
    }

    /// Move cursor right.
    fn move_cursor_right(&mut self) {
        if self.cursor_position < self.input_len() {
            self.cursor_position += 1;
        }
    }

    /// Select the previous task.
    const fn prev_task(&mut self) {
        if self.selected_task > 0 {
            self.selected_task -= 1;
        }
    }

    /// Select the next task.
    fn next_task(&mut self) {
        if self.selected_task < self.task_count().saturating_sub(1) {
            self.selected_task += 1;
        }
    }

    /// Cursor position limited to the current input, which the
    /// controller may have cleared or replaced since the last key.
    fn clamped_cursor(&self) -> usize {
        self.cursor_position.min(self.input_len())
    }

    fn input_len(&self) -> usize {
        self.state().pending_input().chars().count()
    }

    fn task_count(&self) -> usize {
        self.state().len()
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Byte offset of the `char_index`-th character, or the end of `s`.
fn byte_index(s: &str, char_index: usize) -> usize {
    s.char_indices().nth(char_index).map_or(s.len(), |(i, _)| i)
}
