//! Terminal UI rendering.

pub mod error_banner;
pub mod header;
pub mod input_box;
pub mod status_bar;
pub mod task_list;
pub mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::app::App;

/// Main draw function for the entire UI.
pub fn draw(frame: &mut Frame, app: &App) {
    let state = app.state();
    let banner_height = if state.last_error().is_some() { 3 } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),             // Header
            Constraint::Length(banner_height), // Error banner
            Constraint::Length(3),             // Input
            Constraint::Min(3),                // Tasks
            Constraint::Length(1),             // Status bar
        ])
        .split(frame.area());

    header::render(frame, chunks[0], &state);
    if let Some(error) = state.last_error() {
        error_banner::render(frame, chunks[1], error);
    }
    input_box::render(frame, chunks[2], app, &state);
    task_list::render(frame, chunks[3], app, &state);
    status_bar::render(frame, chunks[4], app);
}
