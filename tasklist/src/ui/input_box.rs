//! Input box for new task text.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tasklist_model::TaskListState;

use super::theme;
use crate::app::{App, PanelFocus};

/// Placeholder shown while the input is empty and unfocused.
pub const PLACEHOLDER: &str = "Add a new task...";

/// Render the input box with a block cursor when focused.
///
/// The "Add Task" hint is dimmed while the input is blank, mirroring a
/// disabled submit button.
pub fn render(frame: &mut Frame, area: Rect, app: &App, state: &TaskListState) {
    let is_focused = app.focus == PanelFocus::Input;
    let pending = state.pending_input();

    let input_line = if pending.is_empty() && !is_focused {
        Line::from(Span::styled(PLACEHOLDER, theme::dimmed()))
    } else {
        let mut display_text = String::with_capacity(pending.len() + 3);
        for (i, c) in pending.chars().enumerate() {
            if is_focused && i == app.cursor_position {
                display_text.push('█');
            }
            display_text.push(c);
        }
        if is_focused && app.cursor_position >= pending.chars().count() {
            display_text.push('█');
        }
        Line::from(Span::styled(display_text, theme::normal()))
    };

    let hint_style = if state.can_submit() {
        theme::highlighted()
    } else {
        theme::dimmed()
    };

    let block = Block::default()
        .title(Span::styled("New task", theme::panel_title(theme::INPUT_TITLE)))
        .title(Line::from(Span::styled(" Enter: Add Task ", hint_style)).right_aligned())
        .borders(Borders::ALL)
        .border_style(theme::border(is_focused));

    let paragraph = Paragraph::new(input_line).block(block);

    frame.render_widget(paragraph, area);
}
