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
use crate::tabstop::{Direction, find_next_item};

/// Maximum rows shown in the dropdown.
pub const MAX_VISIBLE: usize = 8;

/// Move the completion highlight one selectable row in `direction`.
pub fn select(app: &mut App, direction: Direction) {
    match find_next_item(&app.active_completion, &app.items, &app.completions, direction) {
        Ok(id) => {
            app.active_completion = id;
            if let Some(entry) = app.items.get(&app.active_completion) {
                app.dialog.focus(entry.index, app.completions.len(), MAX_VISIBLE);
            }
            tracing::debug!("Completion highlight: {:?}", app.active_completion);
        }
        Err(e) => {
            tracing::warn!("Completion highlight reset: {e}");
            deactivate(app);
        }
    }
}

/// Clear the completion highlight.
pub fn deactivate(app: &mut App) {
    app.active_completion.clear();
    app.dialog.reset();
}

/// What the input would read, and where the cursor would land, if the
/// highlighted completion were applied now.
pub fn preview(app: &App) -> Option<(String, usize)> {
    let item = app.active_item()?;
    app.parser.handle_completion_selection(app.cursor, item).ok()
}

/// Fill the active tabstop with the highlighted completion.
/// Returns `false` when nothing is highlighted.
pub fn confirm_selection(app: &mut App) -> bool {
    let Some(item) = app.active_item().cloned() else {
        return false;
    };

    match app.parser.complete_tab_stops(app.cursor, &item) {
        Ok(tab_stops) => {
            app.replace_tab_stops(tab_stops);
            tracing::debug!("Applied completion {:?}: display={:?}", item.id, app.display());
        }
        Err(e) => tracing::warn!("Rejected completion {:?}: {e}", item.id),
    }
    deactivate(app);
    true
}
