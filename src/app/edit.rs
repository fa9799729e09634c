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

use super::App;
use crate::tabstop::char_to_byte_index;

/// Type `ch` at the cursor. The owning tabstop absorbs the character.
pub fn insert_char(app: &mut App, ch: char) {
    let mut display = app.display();
    display.insert(char_to_byte_index(&display, app.cursor), ch);

    let edited = app.active_tab();
    match app.parser.handle_change(&display, app.cursor + 1) {
        Ok(mut tab_stops) => {
            // Only the edited tabstop may place the cursor.
            for (i, ts) in tab_stops.iter_mut().enumerate() {
                if Some(i) != edited {
                    ts.cursor_position = None;
                }
            }
            app.replace_tab_stops(tab_stops);
            tracing::debug!("Inserted {ch:?}: display={:?} cursor={}", app.display(), app.cursor);
        }
        Err(e) => tracing::warn!("Rejected insert of {ch:?} at {}: {e}", app.cursor),
    }
}

/// Delete before the cursor. At a value start the whole tabstop goes.
pub fn backspace(app: &mut App) {
    match app.parser.backspace_tab_stops(app.cursor) {
        Ok(tab_stops) => {
            app.replace_tab_stops(tab_stops);
            tracing::debug!("Backspace: display={:?} cursor={}", app.display(), app.cursor);
        }
        Err(e) => tracing::warn!("Rejected backspace at {}: {e}", app.cursor),
    }
}

pub fn move_left(app: &mut App) {
    app.cursor = app.cursor.saturating_sub(1);
}

pub fn move_right(app: &mut App) {
    app.cursor = (app.cursor + 1).min(app.parser.display_len());
}

pub fn move_home(app: &mut App) {
    app.cursor = 0;
}

pub fn move_end(app: &mut App) {
    app.cursor = app.parser.display_len();
}

/// Jump to the end of the next tabstop's value, wrapping to the first.
pub fn next_tab(app: &mut App) {
    let count = app.parser.tab_boundaries().len();
    if count == 0 {
        return;
    }
    let target = app.active_tab().map_or(0, |idx| (idx + 1) % count);
    jump_to_tab(app, target);
}

/// Jump to the end of the previous tabstop's value, wrapping to the last.
pub fn prev_tab(app: &mut App) {
    let count = app.parser.tab_boundaries().len();
    if count == 0 {
        return;
    }
    let target = match app.active_tab() {
        Some(0) | None => count - 1,
        Some(idx) => idx - 1,
    };
    jump_to_tab(app, target);
}

fn jump_to_tab(app: &mut App, idx: usize) {
    if let Some(boundary) = app.parser.tab_boundaries().get(idx) {
        app.cursor = boundary.value_end();
    }
}
