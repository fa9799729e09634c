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

/// Scroll window over the completion dropdown rows.
#[derive(Debug, Clone, Copy, Default)]
pub struct DialogState {
    /// Row of the highlighted completion.
    pub selected: usize,
    /// First visible row in the scroll window.
    pub scroll_offset: usize,
}

impl DialogState {
    /// Clamp selection + scroll to the current row count and viewport size.
    pub fn clamp(&mut self, item_count: usize, max_visible: usize) {
        if item_count == 0 || max_visible == 0 {
            self.selected = 0;
            self.scroll_offset = 0;
            return;
        }

        self.selected = self.selected.min(item_count - 1);
        if self.selected < self.scroll_offset {
            self.scroll_offset = self.selected;
        } else if self.selected >= self.scroll_offset + max_visible {
            self.scroll_offset = self.selected + 1 - max_visible;
        }

        let max_start = item_count.saturating_sub(max_visible);
        self.scroll_offset = self.scroll_offset.min(max_start);
    }

    /// Highlight `row` and scroll it into view.
    pub fn focus(&mut self, row: usize, item_count: usize, max_visible: usize) {
        self.selected = row;
        self.clamp(item_count, max_visible);
    }

    /// Drop the highlight and scroll back to the top.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Compute the `[start, end)` visible slice for rendering.
    #[must_use]
    pub fn visible_range(&self, item_count: usize, max_visible: usize) -> (usize, usize) {
        if item_count == 0 || max_visible == 0 {
            return (0, 0);
        }
        let max_start = item_count.saturating_sub(max_visible);
        let start = self.scroll_offset.min(max_start);
        let end = (start + max_visible).min(item_count);
        (start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::DialogState;

    #[test]
    fn clamp_resets_when_empty() {
        let mut d = DialogState { selected: 5, scroll_offset: 2 };
        d.clamp(0, 8);
        assert_eq!(d.selected, 0);
        assert_eq!(d.scroll_offset, 0);
    }

    #[test]
    fn focus_below_window_scrolls_down() {
        let mut d = DialogState::default();
        d.focus(9, 12, 4);
        assert_eq!(d.selected, 9);
        assert_eq!(d.scroll_offset, 6);
        assert_eq!(d.visible_range(12, 4), (6, 10));
    }

    #[test]
    fn focus_above_window_scrolls_up() {
        let mut d = DialogState { selected: 9, scroll_offset: 6 };
        d.focus(1, 12, 4);
        assert_eq!(d.scroll_offset, 1);
    }

    #[test]
    fn visible_range_clamps_scroll_offset() {
        let d = DialogState { selected: 0, scroll_offset: 10 };
        assert_eq!(d.visible_range(6, 4), (2, 6));
    }
}
