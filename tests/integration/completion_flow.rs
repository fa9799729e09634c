// Completion integration tests.
// Up/Down cycle the highlight through selectable rows, Enter applies it to
// the field under the cursor, Esc drops the highlight before quitting.

use crossterm::event::KeyCode;
use pretty_assertions::assert_eq;

use crate::helpers::{press, test_app};

#[test]
fn down_cycles_selectable_rows_only() {
    let mut app = test_app();
    let mut seen = Vec::new();
    for _ in 0..4 {
        press(&mut app, KeyCode::Down);
        seen.push(app.active_completion.clone());
    }
    assert_eq!(seen, vec!["pod-1", "pod-2", "svc-1", "pod-1"]);
}

#[test]
fn up_from_nothing_starts_before_last_row() {
    let mut app = test_app();
    press(&mut app, KeyCode::Up);
    assert_eq!(app.active_completion, "pod-2");
    press(&mut app, KeyCode::Up);
    assert_eq!(app.active_completion, "pod-1");
    press(&mut app, KeyCode::Up);
    assert_eq!(app.active_completion, "svc-1");
}

#[test]
fn enter_applies_completion_to_blank_field() {
    let mut app = test_app();
    press(&mut app, KeyCode::End);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.display(), "ns:default svc:web");
    assert_eq!(app.cursor, 18);
    assert_eq!(app.active_completion, "");
    assert!(!app.should_quit);
}

#[test]
fn enter_keeps_existing_label() {
    let mut app = test_app();
    app.cursor = 5;
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.display(), "ns:pod-1 ");
    assert_eq!(app.cursor, 8);
}

#[test]
fn enter_without_highlight_submits() {
    let mut app = test_app();
    press(&mut app, KeyCode::Enter);
    assert!(app.should_quit);
    assert_eq!(app.submitted.as_deref(), Some("ns:default "));
}

#[test]
fn esc_clears_highlight_then_quits() {
    let mut app = test_app();
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.active_completion, "");
    assert!(!app.should_quit);
    press(&mut app, KeyCode::Esc);
    assert!(app.should_quit);
    assert_eq!(app.submitted, None);
}
