//! Rendering tests using ratatui's `TestBackend`.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend};
use tasklist::app::App;
use tasklist::ui;

fn render(app: &App) -> String {
    let backend = TestBackend::new(80, 16);
    let mut terminal = Terminal::new(backend).expect("terminal");
    terminal
        .draw(|frame| ui::draw(frame, app))
        .expect("draw failed");

    let buffer = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

fn press(app: &mut App, code: KeyCode) {
    app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
}

#[test]
fn test_empty_session_render() {
    let app = App::new();
    let screen = render(&app);
    assert!(screen.contains("Task Manager"));
    assert!(screen.contains("0/0 completed"));
    assert!(screen.contains("No tasks yet. Add one to get started!"));
}

#[test]
fn test_tasks_and_summary_render() {
    let app = App::new();
    let a = app.controller().add("Buy milk").expect("add failed");
    app.controller().add("Walk dog").expect("add failed");
    app.controller().toggle(&a).expect("toggle failed");

    let screen = render(&app);
    assert!(screen.contains("1/2 completed"));
    assert!(screen.contains("[✓]"));
    assert!(screen.contains("[ ]"));
    assert!(screen.contains("Buy milk"));
    assert!(screen.contains("Walk dog"));
    assert!(!screen.contains("No tasks yet"));
}

#[test]
fn test_error_banner_appears_and_clears() {
    let mut app = App::new();
    press(&mut app, KeyCode::Enter);
    assert!(render(&app).contains("Task text cannot be empty."));

    press(&mut app, KeyCode::Char('a'));
    assert!(!render(&app).contains("Task text cannot be empty."));
}

#[test]
fn test_placeholder_shown_when_input_unfocused() {
    let mut app = App::new();
    assert!(!render(&app).contains("Add a new task..."));
    press(&mut app, KeyCode::Tab);
    assert!(render(&app).contains("Add a new task..."));
}

#[test]
fn test_pending_input_rendered_with_cursor() {
    let mut app = App::new();
    for c in "draft".chars() {
        press(&mut app, KeyCode::Char(c));
    }
    assert!(render(&app).contains("draft█"));
}
