// Editing integration tests.
// Drives the app with key presses and checks that the display string, the
// cursor and the tabstop sequence stay consistent with the parser proposals.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pretty_assertions::assert_eq;
use tabstop_complete::app::{App, handle_key};
use tabstop_complete::tabstop::{TabStop, TabStopParser, display_string};

use crate::helpers::{press, test_app, type_str};

#[test]
fn typing_fills_blank_field() {
    let mut app = test_app();
    press(&mut app, KeyCode::End);
    type_str(&mut app, "kube");
    assert_eq!(app.display(), "ns:default kube");
    assert_eq!(app.cursor, 15);
    assert_eq!(app.parser.tab_stops()[1].value.as_deref(), Some("kube"));
}

#[test]
fn typing_mid_value_keeps_cursor_after_char() {
    let mut app = test_app();
    app.cursor = 3;
    type_str(&mut app, "my-");
    assert_eq!(app.display(), "ns:my-default ");
    assert_eq!(app.cursor, 6);
}

#[test]
fn typing_in_earlier_field_keeps_cursor_there() {
    let mut app = test_app();
    press(&mut app, KeyCode::End);
    type_str(&mut app, "k");
    assert_eq!(app.cursor, 12);
    app.cursor = 10;
    type_str(&mut app, "xy");
    assert_eq!(app.display(), "ns:defaultxy k");
    assert_eq!(app.cursor, 12);
    assert_eq!(app.active_tab(), Some(0));
}

#[test]
fn backspace_matches_parser_proposal() {
    let mut app = test_app();
    app.cursor = 8;
    let expected = app.parser.handle_backspace(app.cursor).unwrap();
    press(&mut app, KeyCode::Backspace);
    assert_eq!((app.display(), app.cursor), expected);
}

#[test]
fn backspace_at_value_start_drops_field() {
    let mut app = test_app();
    press(&mut app, KeyCode::End);
    let expected = app.parser.handle_backspace(app.cursor).unwrap();
    press(&mut app, KeyCode::Backspace);
    assert_eq!((app.display(), app.cursor), expected);
    assert_eq!(app.display(), "ns:default");
}

#[test]
fn deleting_every_field_leaves_one_blank_field() {
    let mut app = App::new(vec![TabStop::new(0).with_value("x")], Vec::new());
    press(&mut app, KeyCode::End);
    press(&mut app, KeyCode::Backspace);
    press(&mut app, KeyCode::Backspace);
    assert_eq!(app.parser.tab_stops(), &[TabStop::new(0)]);
    type_str(&mut app, "y");
    assert_eq!(app.display(), "y");
}

#[test]
fn app_state_round_trips_through_projection() {
    let mut app = test_app();
    press(&mut app, KeyCode::End);
    type_str(&mut app, "abc");
    press(&mut app, KeyCode::Left);
    press(&mut app, KeyCode::Backspace);
    let rebuilt = TabStopParser::new(app.parser.tab_stops().to_vec());
    assert_eq!(rebuilt.display(), display_string(app.parser.tab_stops()));
    assert_eq!(app.display(), "ns:default ac");
    assert_eq!(app.cursor, 12);
}

#[test]
fn tab_moves_between_fields() {
    let mut app = test_app();
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.cursor, 11);
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.cursor, 10);
    press(&mut app, KeyCode::BackTab);
    assert_eq!(app.cursor, 11);
}

#[test]
fn ctrl_c_quits_without_submitting() {
    let mut app = test_app();
    handle_key(&mut app, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(app.should_quit);
    assert_eq!(app.submitted, None);
    assert_eq!(app.display(), "ns:default ");
}
