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

use super::dialog::DialogState;
use crate::tabstop::{CompletionItem, ItemsMap, TabStop, TabStopParser, items_map};

pub struct App {
    /// Snapshot of the current tabstops. Replaced wholesale on every edit.
    pub parser: TabStopParser,
    /// Character offset into the display string.
    pub cursor: usize,
    pub completions: Vec<CompletionItem>,
    /// Id -> row lookup for `completions`.
    pub items: ItemsMap,
    /// Id of the highlighted completion, empty when none is highlighted.
    pub active_completion: String,
    /// Scroll window of the completion dropdown.
    pub dialog: DialogState,
    pub should_quit: bool,
    /// Final display string once the user confirms the input.
    pub submitted: Option<String>,
}

impl App {
    pub fn new(tab_stops: Vec<TabStop>, completions: Vec<CompletionItem>) -> Self {
        let items = items_map(&completions);
        let mut app = Self {
            parser: TabStopParser::new(Vec::new()),
            cursor: 0,
            completions,
            items,
            active_completion: String::new(),
            dialog: DialogState::default(),
            should_quit: false,
            submitted: None,
        };
        app.replace_tab_stops(tab_stops);
        app
    }

    /// Install a new tabstop sequence and jump to the cursor it requests.
    /// An emptied sequence is replaced by one blank field so typing still works.
    pub fn replace_tab_stops(&mut self, mut tab_stops: Vec<TabStop>) {
        if tab_stops.is_empty() {
            tab_stops.push(TabStop::new(0));
        }
        self.parser = TabStopParser::new(tab_stops);
        self.cursor = self.parser.initial_cursor().min(self.parser.display_len());
    }

    pub fn display(&self) -> String {
        self.parser.display()
    }

    pub fn active_tab(&self) -> Option<usize> {
        self.parser.active_tab(self.cursor)
    }

    /// The highlighted completion row, if any.
    pub fn active_item(&self) -> Option<&CompletionItem> {
        let entry = self.items.get(&self.active_completion)?;
        self.completions.get(entry.index)
    }
}
