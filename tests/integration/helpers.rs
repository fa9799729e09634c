use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tabstop_complete::app::{App, handle_key};
use tabstop_complete::tabstop::{CompletionItem, TabStop};

/// Build an `App` with a namespace field and a blank trailing field.
/// No terminal -- just state.
pub fn test_app() -> App {
    App::new(
        vec![TabStop::new(0).with_label("ns").with_value("default"), TabStop::new(1)],
        test_completions(),
    )
}

pub fn test_completions() -> Vec<CompletionItem> {
    vec![
        CompletionItem::header("Pods"),
        CompletionItem::new("pod-1", "pod-1", "pod").with_description("Running"),
        CompletionItem::new("pod-2", "pod-2", "pod"),
        CompletionItem::header("Services"),
        CompletionItem::new("svc-1", "web", "svc"),
    ]
}

/// Helper: feed one key press into the app.
pub fn press(app: &mut App, code: KeyCode) {
    handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
}

pub fn type_str(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}
