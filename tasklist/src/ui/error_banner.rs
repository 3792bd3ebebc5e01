//! Error banner shown while the last operation's error is set.

use ratatui::{
    Frame,
    layout::Rect,
    widgets::{Block, Borders, Paragraph},
};
use tasklist_model::TaskError;

use super::theme;

/// User-facing text for a rejected operation.
#[must_use]
pub fn message(error: &TaskError) -> String {
    match error {
        TaskError::EmptyText => "Task text cannot be empty.".to_string(),
        TaskError::NotFound(_) => "That task no longer exists.".to_string(),
    }
}

/// Render the banner for `error`.
pub fn render(frame: &mut Frame, area: Rect, error: &TaskError) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::error());
    let paragraph = Paragraph::new(message(error))
        .style(theme::error())
        .block(block);
    frame.render_widget(paragraph, area);
}
