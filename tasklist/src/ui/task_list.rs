//! Task list rendering.

use std::fmt::Write as _;

use chrono::{Local, LocalResult, TimeZone};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use tasklist_model::{Task, TaskListState};

use super::theme;
use crate::app::{App, PanelFocus};

/// Text shown when there are no tasks.
pub const EMPTY_MESSAGE: &str = "No tasks yet. Add one to get started!";

/// Render the task list, or the empty-state message.
pub fn render(frame: &mut Frame, area: Rect, app: &App, state: &TaskListState) {
    let is_focused = app.focus == PanelFocus::Tasks;

    let block = Block::default()
        .title(Span::styled("Tasks", theme::panel_title(theme::TASKS_TITLE)))
        .borders(Borders::ALL)
        .border_style(theme::border(is_focused));

    if state.is_empty() {
        let paragraph = Paragraph::new(Span::styled(EMPTY_MESSAGE, theme::dimmed()))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let items: Vec<ListItem> = state
        .tasks()
        .iter()
        .map(|task| task_item(task, app.timestamp_format()))
        .collect();

    let list = List::new(items).block(block).highlight_style(if is_focused {
        theme::selected()
    } else {
        theme::highlighted()
    });

    let mut list_state = ListState::default().with_selected(Some(app.selected_task));
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn task_item<'a>(task: &'a Task, timestamp_format: &str) -> ListItem<'a> {
    let done = task.is_completed();
    let checkbox = if done { "[✓]" } else { "[ ]" };
    let text_style = if done {
        theme::completed()
    } else {
        theme::normal()
    };

    let line = Line::from(vec![
        Span::styled(checkbox, theme::checkbox(done)),
        Span::raw(" "),
        Span::styled(
            format_timestamp_ms(task.created_at(), timestamp_format),
            theme::timestamp(),
        ),
        Span::raw(" "),
        Span::styled(task.text(), text_style),
    ]);

    ListItem::new(line)
}

/// Format an epoch-millisecond timestamp in local time.
///
/// Falls back to `"??:??"` for out-of-range times or an invalid format.
#[must_use]
pub fn format_timestamp_ms(ms: u64, format: &str) -> String {
    const UNKNOWN: &str = "??:??";

    let Ok(secs) = i64::try_from(ms / 1000) else {
        return UNKNOWN.to_string();
    };
    let nsecs = u32::try_from((ms % 1000) * 1_000_000).unwrap_or(0);
    let LocalResult::Single(dt) = Local.timestamp_opt(secs, nsecs) else {
        return UNKNOWN.to_string();
    };

    let mut out = String::new();
    if write!(out, "{}", dt.format(format)).is_err() {
        return UNKNOWN.to_string();
    }
    out
}
