// tabstop-complete - Tabstop-aware autocomplete input for the terminal
// Copyright (C) 2025  Simon Peter Rothgang
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use super::{App, completion, edit};
use crate::tabstop::Direction;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

fn is_ctrl_shortcut(modifiers: KeyModifiers) -> bool {
    modifiers.contains(KeyModifiers::CONTROL) && !modifiers.contains(KeyModifiers::ALT)
}

fn is_ctrl_char_shortcut(key: KeyEvent, expected: char) -> bool {
    is_ctrl_shortcut(key.modifiers)
        && matches!(key.code, KeyCode::Char(c) if c.eq_ignore_ascii_case(&expected))
}

fn submit(app: &mut App) {
    let text = app.display();
    tracing::info!("Submitted input: {text:?}");
    app.submitted = Some(text);
    app.should_quit = true;
}

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind == KeyEventKind::Release {
        return;
    }
    if is_ctrl_char_shortcut(key, 'q') || is_ctrl_char_shortcut(key, 'c') {
        app.should_quit = true;
        return;
    }

    match key.code {
        KeyCode::Esc => {
            if app.active_completion.is_empty() {
                app.should_quit = true;
            } else {
                completion::deactivate(app);
            }
        }
        KeyCode::Enter => {
            if !completion::confirm_selection(app) {
                submit(app);
            }
        }
        KeyCode::Up => completion::select(app, Direction::Backward),
        KeyCode::Down => completion::select(app, Direction::Forward),
        KeyCode::Tab => edit::next_tab(app),
        KeyCode::BackTab => edit::prev_tab(app),
        KeyCode::Backspace => edit::backspace(app),
        KeyCode::Left => edit::move_left(app),
        KeyCode::Right => edit::move_right(app),
        KeyCode::Home => edit::move_home(app),
        KeyCode::End => edit::move_end(app),
        KeyCode::Char(c) if !is_ctrl_shortcut(key.modifiers) => edit::insert_char(app, c),
        _ => {}
    }
}
