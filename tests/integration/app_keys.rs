//! Integration tests for keyboard-driven task list sessions.
//!
//! Drives [`App`] purely through key events, the way the binary does.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tasklist::app::{App, PanelFocus};
use tasklist_model::TaskError;

fn press(app: &mut App, code: KeyCode) {
    app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
}

fn type_line(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
    press(app, KeyCode::Enter);
}

fn texts(app: &App) -> Vec<String> {
    app.state()
        .tasks()
        .iter()
        .map(|t| t.text().to_string())
        .collect()
}

#[test]
fn test_add_three_tasks_in_order() {
    let mut app = App::new();
    type_line(&mut app, "Buy milk");
    type_line(&mut app, "Walk dog");
    type_line(&mut app, "  Call mom  ");

    assert_eq!(texts(&app), ["Buy milk", "Walk dog", "Call mom"]);
    assert_eq!(app.state().pending_input(), "");
    assert_eq!(app.selected_task, 2, "new task should be selected");
}

#[test]
fn test_complete_and_delete_via_keys() {
    let mut app = App::new();
    type_line(&mut app, "A");
    type_line(&mut app, "B");
    type_line(&mut app, "C");

    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focus, PanelFocus::Tasks);

    // Complete B.
    press(&mut app, KeyCode::Up);
    press(&mut app, KeyCode::Char(' '));
    assert_eq!(app.state().completion_summary().to_string(), "1/3 completed");

    // Delete A.
    press(&mut app, KeyCode::Up);
    press(&mut app, KeyCode::Delete);
    assert_eq!(texts(&app), ["B", "C"]);
    assert_eq!(app.selected_task, 0);
    assert!(app.state().tasks()[0].is_completed());
}

#[test]
fn test_blank_submit_then_typing_clears_error() {
    let mut app = App::new();
    press(&mut app, KeyCode::Char(' '));
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.state().last_error(), Some(&TaskError::EmptyText));
    assert_eq!(app.state().pending_input(), " ");

    press(&mut app, KeyCode::Char('x'));
    assert!(app.state().last_error().is_none());
    assert_eq!(app.state().pending_input(), " x");
}

#[test]
fn test_task_keys_do_not_type_into_input() {
    let mut app = App::new();
    type_line(&mut app, "A");
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Char('k'));
    assert_eq!(app.state().pending_input(), "");

    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Char('d'));
    assert_eq!(app.state().pending_input(), "d");
    assert_eq!(app.state().len(), 1);
}

#[test]
fn test_cursor_editing() {
    let mut app = App::new();
    for c in "milk".chars() {
        press(&mut app, KeyCode::Char(c));
    }
    press(&mut app, KeyCode::Home);
    for c in "Buy ".chars() {
        press(&mut app, KeyCode::Char(c));
    }
    press(&mut app, KeyCode::End);
    press(&mut app, KeyCode::Backspace);
    press(&mut app, KeyCode::Char('k'));
    press(&mut app, KeyCode::Enter);
    assert_eq!(texts(&app), ["Buy milk"]);
}
