//! Header line: application title and completion summary.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};
use tasklist_model::TaskListState;

use super::theme;

/// Render the title on the left and "N/M completed" on the right.
pub fn render(frame: &mut Frame, area: Rect, state: &TaskListState) {
    let summary = state.completion_summary().to_string();
    let summary_width = u16::try_from(summary.chars().count() + 1).unwrap_or(u16::MAX);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(summary_width)])
        .split(area);

    let title = Line::from(vec![
        Span::raw(" "),
        Span::styled("Task Manager", theme::panel_title(theme::TITLE)),
    ]);
    frame.render_widget(Paragraph::new(title), chunks[0]);

    let summary = Paragraph::new(Span::styled(summary, theme::dimmed())).alignment(Alignment::Right);
    frame.render_widget(summary, chunks[1]);
}
