//! Status bar rendering.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::theme;
use crate::app::{App, PanelFocus};

/// Render the status bar at the bottom of the screen.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let help_text = match app.focus {
        PanelFocus::Input => "Enter: add | Tab: tasks | ←→: move cursor | Esc: quit",
        PanelFocus::Tasks => "Space: toggle | d: delete | ↑↓/jk: navigate | Tab: input | Esc: quit",
    };

    let status_line = Line::from(vec![
        Span::styled(
            concat!("tasklist v", env!("CARGO_PKG_VERSION")),
            theme::bold(),
        ),
        Span::raw(" | "),
        Span::styled(help_text, theme::dimmed()),
    ]);

    let paragraph = Paragraph::new(status_line).style(theme::status_bar_bg());
    frame.render_widget(paragraph, area);
}
