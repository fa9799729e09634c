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

use crate::error::TabStopError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One row of the completion list. Section headers and malformed rows have
/// no title or no id and are never selectable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionItem {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,
}

impl CompletionItem {
    pub fn new(id: impl Into<String>, title: impl Into<String>, kind: impl Into<String>) -> Self {
        Self { id: id.into(), title: title.into(), kind: kind.into(), ..Self::default() }
    }

    pub fn header(text: impl Into<String>) -> Self {
        Self { header: Some(text.into()), ..Self::default() }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn is_selectable(&self) -> bool {
        !self.title.is_empty() && !self.id.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemEntry {
    pub title: String,
    pub index: usize,
    pub kind: String,
}

/// Completion id -> position lookup.
pub type ItemsMap = HashMap<String, ItemEntry>;

/// Index the selectable items of `completions` by id.
pub fn items_map(completions: &[CompletionItem]) -> ItemsMap {
    completions
        .iter()
        .enumerate()
        .filter(|(_, item)| item.is_selectable())
        .map(|(index, item)| {
            let entry = ItemEntry { title: item.title.clone(), index, kind: item.kind.clone() };
            (item.id.clone(), entry)
        })
        .collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

/// Id of the next selectable completion after `active`, wrapping around.
///
/// An empty `active` starts the scan before the first row. Returns an empty
/// id for an empty list and `active` itself when nothing is selectable.
pub fn find_next_item(
    active: &str,
    items: &ItemsMap,
    completions: &[CompletionItem],
    direction: Direction,
) -> Result<String, TabStopError> {
    let len = completions.len();
    if len == 0 {
        return Ok(String::new());
    }

    // Position -1 is congruent to len - 1.
    let base = if active.is_empty() {
        len - 1
    } else {
        let entry =
            items.get(active).ok_or_else(|| TabStopError::UnknownCompletion(active.to_owned()))?;
        entry.index % len
    };

    for step in 1..=len {
        let idx = match direction {
            Direction::Forward => (base + step) % len,
            Direction::Backward => (base + len - step % len) % len,
        };
        let candidate = &completions[idx];
        if candidate.is_selectable() {
            return Ok(candidate.id.clone());
        }
    }
    Ok(active.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn pods() -> Vec<CompletionItem> {
        vec![
            CompletionItem::header("Pods"),
            CompletionItem::new("p1", "pod-1", "pod"),
            CompletionItem::new("p2", "pod-2", "pod"),
            CompletionItem::new("", "orphan", "pod"),
            CompletionItem::new("p3", "pod-3", "pod"),
        ]
    }

    fn next(active: &str, completions: &[CompletionItem], direction: Direction) -> String {
        find_next_item(active, &items_map(completions), completions, direction).unwrap()
    }

    #[test]
    fn empty_list_yields_empty_id() {
        let items = ItemsMap::new();
        assert_eq!(find_next_item("", &items, &[], Direction::Forward).unwrap(), "");
        assert_eq!(find_next_item("p1", &items, &[], Direction::Backward).unwrap(), "");
    }

    #[test]
    fn forward_from_nothing_skips_header() {
        assert_eq!(next("", &pods(), Direction::Forward), "p1");
    }

    #[test]
    fn forward_skips_malformed_rows_and_wraps() {
        let list = pods();
        assert_eq!(next("p2", &list, Direction::Forward), "p3");
        assert_eq!(next("p3", &list, Direction::Forward), "p1");
    }

    #[test]
    fn backward_wraps_past_header() {
        let list = pods();
        assert_eq!(next("p1", &list, Direction::Backward), "p3");
        assert_eq!(next("p3", &list, Direction::Backward), "p2");
    }

    #[test]
    fn backward_from_nothing_starts_before_last_row() {
        let list = vec![
            CompletionItem::new("a", "a", "k"),
            CompletionItem::new("b", "b", "k"),
            CompletionItem::new("c", "c", "k"),
        ];
        assert_eq!(next("", &list, Direction::Backward), "b");
    }

    #[test]
    fn backward_with_single_selectable_row_stays_put() {
        let list =
            vec![CompletionItem::header("Pods"), CompletionItem::new("only", "pod-1", "pod")];
        assert_eq!(next("only", &list, Direction::Backward), "only");
        assert_eq!(next("only", &list, Direction::Forward), "only");
    }

    #[test]
    fn full_forward_cycle_returns_to_start() {
        let list: Vec<CompletionItem> =
            (0..5).map(|i| CompletionItem::new(format!("id{i}"), format!("t{i}"), "k")).collect();
        let items = items_map(&list);
        let mut current = "id2".to_owned();
        for _ in 0..list.len() {
            current = find_next_item(&current, &items, &list, Direction::Forward).unwrap();
        }
        assert_eq!(current, "id2");
    }

    #[test]
    fn no_selectable_items_keeps_active() {
        let list = vec![CompletionItem::header("Nothing"), CompletionItem::new("x", "", "k")];
        let mut items = items_map(&list);
        let stale = ItemEntry { title: "s".into(), index: 0, kind: "k".into() };
        items.insert("stale".to_owned(), stale);
        assert_eq!(find_next_item("stale", &items, &list, Direction::Forward).unwrap(), "stale");
        assert_eq!(find_next_item("", &items, &list, Direction::Forward).unwrap(), "");
    }

    #[test]
    fn unknown_active_id_is_an_error() {
        let list = pods();
        let err = find_next_item("ghost", &items_map(&list), &list, Direction::Forward);
        assert_eq!(err, Err(TabStopError::UnknownCompletion("ghost".into())));
    }

    #[test]
    fn items_map_indexes_selectable_rows_only() {
        let map = items_map(&pods());
        assert_eq!(map.len(), 3);
        assert_eq!(map["p3"], ItemEntry { title: "pod-3".into(), index: 4, kind: "pod".into() });
    }

    #[test]
    fn wire_type_field_maps_to_kind() {
        let item: CompletionItem =
            serde_json::from_str(r#"{"id":"svc-1","title":"web","type":"service"}"#).unwrap();
        assert_eq!(item, CompletionItem::new("svc-1", "web", "service"));
        let header: CompletionItem = serde_json::from_str(r#"{"header":"Services"}"#).unwrap();
        assert!(!header.is_selectable());
    }
}
