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

use super::{
    CompletionItem, TabStop, char_len, display_string, insert_char_at, remove_char_at,
};
use crate::error::TabStopError;

/// Extra slot past the last value character that still belongs to a tabstop.
/// Covers the trailing separator (or end of input) so a cursor sitting right
/// after a value resolves to that value's tabstop.
pub const BOUNDARY_SLOT: usize = 1;

/// Half-open `[start, end)` range of one tabstop in the display string.
/// `start` is the first value character; `end` includes `BOUNDARY_SLOT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabBoundary {
    pub start: usize,
    pub end: usize,
}

impl TabBoundary {
    /// Offset just past the last value character.
    #[must_use]
    pub const fn value_end(&self) -> usize {
        self.end - BOUNDARY_SLOT
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Key,
    Value,
}

/// A styled run of the display string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayToken {
    pub kind: TokenKind,
    pub text: String,
}

impl DisplayToken {
    fn key(label: &str) -> Self {
        Self { kind: TokenKind::Key, text: format!("{label}:") }
    }

    fn value(text: impl Into<String>) -> Self {
        Self { kind: TokenKind::Value, text: text.into() }
    }
}

/// Immutable snapshot of a tabstop sequence with its derived display layout.
///
/// Edit operations never mutate the parser. They return the proposed next
/// state; the owner builds a new parser from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabStopParser {
    tab_stops: Vec<TabStop>,
    boundaries: Vec<TabBoundary>,
    input: Vec<DisplayToken>,
    initial_cursor: usize,
}

impl TabStopParser {
    pub fn new(tab_stops: Vec<TabStop>) -> Self {
        let mut input = Vec::new();
        let mut boundaries = Vec::with_capacity(tab_stops.len());
        let mut initial_cursor = 0;
        let mut pos = 0;

        for (i, ts) in tab_stops.iter().enumerate() {
            if let Some(label) = &ts.label {
                input.push(DisplayToken::key(label));
                pos += char_len(label) + 1;
            }
            if let Some(offset) = ts.cursor_position {
                initial_cursor = pos + offset;
            }

            let start = pos;
            if let Some(value) = &ts.value {
                input.push(DisplayToken::value(value.as_str()));
                pos += char_len(value);
            }
            boundaries.push(TabBoundary { start, end: pos + BOUNDARY_SLOT });

            if i + 1 != tab_stops.len() {
                input.push(DisplayToken::value(" "));
                pos += 1;
            }
        }

        Self { tab_stops, boundaries, input, initial_cursor }
    }

    pub fn tab_stops(&self) -> &[TabStop] {
        &self.tab_stops
    }

    pub fn tab_boundaries(&self) -> &[TabBoundary] {
        &self.boundaries
    }

    pub fn input(&self) -> &[DisplayToken] {
        &self.input
    }

    /// Cursor offset requested by the tabstops, 0 when none asks for one.
    pub fn initial_cursor(&self) -> usize {
        self.initial_cursor
    }

    pub fn display(&self) -> String {
        self.input.iter().map(|t| t.text.as_str()).collect()
    }

    pub fn display_len(&self) -> usize {
        self.input.iter().map(|t| char_len(&t.text)).sum()
    }

    /// Index of the tabstop owning `cursor`, `None` past the end of input.
    pub fn active_tab(&self, cursor: usize) -> Option<usize> {
        self.boundaries.iter().position(|b| cursor < b.end)
    }

    fn require_active(&self, cursor: usize) -> Result<usize, TabStopError> {
        self.active_tab(cursor)
            .ok_or(TabStopError::CursorOutOfRange { cursor, len: self.display_len() })
    }

    /// Offset where the tabstop at `idx` begins (its label, if any).
    fn tab_start(&self, idx: usize) -> usize {
        match idx.checked_sub(1) {
            Some(prev) => self.boundaries[prev].end,
            None => 0,
        }
    }

    /// Display string and cursor after filling the active tabstop with
    /// `completion`. An unlabeled tabstop takes the completion's kind as label.
    pub fn handle_completion_selection(
        &self,
        cursor: usize,
        completion: &CompletionItem,
    ) -> Result<(String, usize), TabStopError> {
        let active = self.require_active(cursor)?;
        let stops = self.completed(active, completion);
        let filled = &stops[active];
        let new_cursor = self.tab_start(active) + filled.label_len() + filled.value_len() + 1;
        Ok((display_string(&stops), new_cursor))
    }

    /// Tabstop sequence after filling the active tabstop with `completion`.
    /// A parser built from it places its initial cursor after the new value.
    pub fn complete_tab_stops(
        &self,
        cursor: usize,
        completion: &CompletionItem,
    ) -> Result<Vec<TabStop>, TabStopError> {
        let active = self.require_active(cursor)?;
        Ok(self.completed(active, completion))
    }

    fn completed(&self, active: usize, completion: &CompletionItem) -> Vec<TabStop> {
        self.tab_stops
            .iter()
            .enumerate()
            .map(|(i, ts)| {
                if i == active {
                    TabStop {
                        index: ts.index,
                        label: Some(ts.label.clone().unwrap_or_else(|| completion.kind.clone())),
                        value: Some(completion.title.clone()),
                        cursor_position: Some(char_len(&completion.title)),
                    }
                } else {
                    TabStop { cursor_position: None, ..ts.clone() }
                }
            })
            .collect()
    }

    /// Display string and cursor after a backspace at `cursor`.
    ///
    /// Inside a tabstop this removes one character. At the start of a value
    /// the whole tabstop goes away and the cursor lands at the end of the
    /// previous value.
    pub fn handle_backspace(&self, cursor: usize) -> Result<(String, usize), TabStopError> {
        let active = self.require_active(cursor)?;
        let boundary = self.boundaries[active];

        if boundary.start != cursor {
            let display = self.display();
            let Some(at) = cursor.checked_sub(1) else {
                return Ok((display, 0));
            };
            return Ok((remove_char_at(&display, at), at));
        }

        let display = display_string(&self.without(active));
        let new_cursor = match active.checked_sub(1) {
            Some(prev) => self.boundaries[prev].value_end(),
            None => 0,
        };
        Ok((display, new_cursor))
    }

    /// Tabstop sequence after a backspace at `cursor`.
    ///
    /// Labels are atomic: backspacing at the start of a value, or anywhere in
    /// its label, removes the whole tabstop. Backspace at offset 0 inside a
    /// label is a no-op.
    pub fn backspace_tab_stops(&self, cursor: usize) -> Result<Vec<TabStop>, TabStopError> {
        let active = self.require_active(cursor)?;
        let boundary = self.boundaries[active];

        if cursor > boundary.start {
            let at = cursor - 1 - boundary.start;
            return Ok(self
                .tab_stops
                .iter()
                .enumerate()
                .map(|(i, ts)| {
                    if i == active {
                        TabStop {
                            value: ts.value.as_deref().map(|v| remove_char_at(v, at)),
                            cursor_position: Some(at),
                            ..ts.clone()
                        }
                    } else {
                        TabStop { cursor_position: None, ..ts.clone() }
                    }
                })
                .collect());
        }

        if cursor == 0 && boundary.start > 0 {
            return Ok(self.without_cursors());
        }

        let mut stops = self.without(active);
        for ts in &mut stops {
            ts.cursor_position = None;
        }
        if let Some(prev) = active.checked_sub(1).and_then(|p| stops.get_mut(p)) {
            prev.cursor_position = Some(prev.value_len());
        }
        Ok(stops)
    }

    /// Tabstop sequence after one character was typed.
    ///
    /// `input` is the full display string after the insert and `cursor` sits
    /// right after the new character. The owning tabstop gets the character
    /// and its cursor moves past it; all other tabstops pass through.
    pub fn handle_change(&self, input: &str, cursor: usize) -> Result<Vec<TabStop>, TabStopError> {
        let at = cursor.checked_sub(1).ok_or(TabStopError::NoInsertedChar { cursor })?;
        let ch = input.chars().nth(at).ok_or(TabStopError::NoInsertedChar { cursor })?;
        let active = self.require_active(at)?;
        let start = self.boundaries[active].start;

        Ok(self
            .tab_stops
            .iter()
            .enumerate()
            .map(|(i, ts)| {
                if i != active {
                    return ts.clone();
                }
                let (value, offset) = match &ts.value {
                    Some(value) => {
                        // Typing inside the label lands at the start of the value.
                        let pos = at.saturating_sub(start).min(char_len(value));
                        (insert_char_at(value, pos, ch), pos + 1)
                    }
                    None => (ch.to_string(), 1),
                };
                TabStop {
                    index: ts.index,
                    label: ts.label.clone(),
                    value: Some(value),
                    cursor_position: Some(offset),
                }
            })
            .collect())
    }

    fn without(&self, idx: usize) -> Vec<TabStop> {
        self.tab_stops
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != idx)
            .map(|(_, ts)| ts.clone())
            .collect()
    }

    fn without_cursors(&self) -> Vec<TabStop> {
        self.tab_stops.iter().map(|ts| TabStop { cursor_position: None, ..ts.clone() }).collect()
    }
}
