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

//! Structured key/value input made of tabstops.
//!
//! A tabstop sequence is the authoritative state; the flat display string
//! (`ns:default type:pod`) is always a projection of it. All offsets in this
//! module are character offsets, not byte offsets.

mod completion;
mod parser;

pub use completion::{CompletionItem, Direction, ItemEntry, ItemsMap, find_next_item, items_map};
pub use parser::{BOUNDARY_SLOT, DisplayToken, TabBoundary, TabStopParser, TokenKind};

use serde::{Deserialize, Serialize};

/// One key/value field of the structured input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabStop {
    #[serde(rename = "Index")]
    pub index: usize,
    #[serde(rename = "Label", default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(rename = "Value", default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Cursor offset relative to the start of the value. `None` is written
    /// as `-1` on the wire.
    #[serde(rename = "CursorPosition", default, with = "cursor_position")]
    pub cursor_position: Option<usize>,
}

impl TabStop {
    #[must_use]
    pub fn new(index: usize) -> Self {
        Self { index, ..Self::default() }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_cursor(mut self, cursor: usize) -> Self {
        self.cursor_position = Some(cursor);
        self
    }

    fn label_len(&self) -> usize {
        self.label.as_deref().map_or(0, char_len)
    }

    fn value_len(&self) -> usize {
        self.value.as_deref().map_or(0, char_len)
    }
}

/// Render tabstops as `label:value` pairs joined by single spaces.
pub fn display_string(tab_stops: &[TabStop]) -> String {
    let mut out = String::new();
    for (i, ts) in tab_stops.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        if let Some(label) = &ts.label {
            out.push_str(label);
            out.push(':');
        }
        if let Some(value) = &ts.value {
            out.push_str(value);
        }
    }
    out
}

pub(crate) fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Convert a character index to a byte index within a string.
pub(crate) fn char_to_byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices().nth(char_idx).map_or(s.len(), |(i, _)| i)
}

fn insert_char_at(s: &str, char_idx: usize, ch: char) -> String {
    let mut out = s.to_owned();
    out.insert(char_to_byte_index(s, char_idx), ch);
    out
}

fn remove_char_at(s: &str, char_idx: usize) -> String {
    s.chars().enumerate().filter(|&(i, _)| i != char_idx).map(|(_, c)| c).collect()
}

mod cursor_position {
    use serde::{Deserialize, Deserializer, Serializer};

    #[allow(clippy::ref_option)]
    pub fn serialize<S: Serializer>(cursor: &Option<usize>, s: S) -> Result<S::Ok, S::Error> {
        match cursor {
            Some(c) => s.serialize_u64(*c as u64),
            None => s.serialize_i64(-1),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<usize>, D::Error> {
        let raw = Option::<i64>::deserialize(d)?;
        Ok(raw.and_then(|c| usize::try_from(c).ok()))
    }
}

#[cfg(test)]
mod tests {
    use super::{TabStop, display_string, insert_char_at, remove_char_at};
    use pretty_assertions::assert_eq;

    #[test]
    fn labeled_value_renders_with_colon() {
        let stops = [TabStop::new(0).with_label("ns").with_value("default")];
        assert_eq!(display_string(&stops), "ns:default");
    }

    #[test]
    fn unlabeled_and_labeled_join_with_single_space() {
        let stops = [
            TabStop::new(0).with_value("foo"),
            TabStop::new(1).with_label("type").with_value("pod"),
        ];
        assert_eq!(display_string(&stops), "foo type:pod");
    }

    #[test]
    fn empty_tabstop_contributes_only_separator() {
        let stops =
            [TabStop::new(0).with_value("a"), TabStop::new(1), TabStop::new(2).with_value("b")];
        assert_eq!(display_string(&stops), "a  b");
    }

    #[test]
    fn empty_sequence_renders_empty() {
        assert_eq!(display_string(&[]), "");
    }

    #[test]
    fn projection_is_deterministic() {
        let stops = [TabStop::new(0).with_label("svc").with_value("web"), TabStop::new(1)];
        assert_eq!(display_string(&stops), display_string(&stops));
    }

    #[test]
    fn char_edits_respect_multibyte_text() {
        assert_eq!(insert_char_at("naïve", 3, 'x'), "naïxve");
        assert_eq!(remove_char_at("naïve", 2), "nave");
        assert_eq!(insert_char_at("ab", 9, 'c'), "abc");
    }

    #[test]
    fn wire_format_uses_minus_one_for_missing_cursor() {
        let json = r#"[{"Index":0,"Label":"ns","Value":"default","CursorPosition":-1},
                       {"Index":1,"CursorPosition":2}]"#;
        let stops: Vec<TabStop> = serde_json::from_str(json).unwrap();
        assert_eq!(stops[0], TabStop::new(0).with_label("ns").with_value("default"));
        assert_eq!(stops[1], TabStop::new(1).with_cursor(2));

        let out = serde_json::to_string(&TabStop::new(3)).unwrap();
        assert_eq!(out, r#"{"Index":3,"CursorPosition":-1}"#);
    }
}
