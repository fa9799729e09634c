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

mod autocomplete;
mod input;
mod layout;
pub mod theme;

use crate::app::{App, completion};
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub fn render(frame: &mut Frame, app: &App) {
    let areas = layout::compute(frame.area());

    render_separator(frame, areas.input_sep);
    input::render(frame, areas.input, app);

    // Completion dropdown (floating overlay above input)
    if autocomplete::is_active(app) {
        autocomplete::render(frame, areas.body, app);
    }

    render_separator(frame, areas.input_bottom_sep);

    if let Some(footer_area) = areas.footer {
        render_footer(frame, footer_area, app);
    }
}

const FOOTER_PAD: u16 = 2;
const FOOTER_COLUMN_GAP: u16 = 1;

fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let padded = Rect {
        x: area.x + FOOTER_PAD,
        y: area.y,
        width: area.width.saturating_sub(FOOTER_PAD * 2),
        height: area.height,
    };

    let hints = Line::from(vec![
        Span::styled("\u{2191}\u{2193}", Style::default().fg(Color::White)),
        Span::styled(" complete  ", Style::default().fg(theme::DIM)),
        Span::styled("tab", Style::default().fg(Color::White)),
        Span::styled(" next field  ", Style::default().fg(theme::DIM)),
        Span::styled("esc", Style::default().fg(Color::White)),
        Span::styled(" quit", Style::default().fg(theme::DIM)),
    ]);

    let Some((preview, _)) = completion::preview(app) else {
        frame.render_widget(Paragraph::new(hints), padded);
        return;
    };

    let (left_area, right_area) = split_footer_columns(padded);
    frame.render_widget(Paragraph::new(hints), left_area);
    let preview = format!("\u{21b5} {preview}");
    if let Some(fitted) = fit_footer_right_text(&preview, usize::from(right_area.width)) {
        let line = Line::from(Span::styled(fitted, Style::default().fg(theme::RUST_ORANGE)));
        frame.render_widget(Paragraph::new(line).alignment(Alignment::Right), right_area);
    }
}

fn split_footer_columns(area: Rect) -> (Rect, Rect) {
    if area.width == 0 {
        return (area, Rect { width: 0, ..area });
    }

    let gap = if area.width > 2 { FOOTER_COLUMN_GAP } else { 0 };
    let usable_width = area.width.saturating_sub(gap);
    let left_width = usable_width.saturating_add(1) / 2;
    let right_width = usable_width.saturating_sub(left_width);

    let left = Rect { width: left_width, ..area };
    let right = Rect {
        x: area.x.saturating_add(left_width).saturating_add(gap),
        width: right_width,
        ..area
    };
    (left, right)
}

/// Truncate `text` to `max_width` columns with a trailing ellipsis.
fn fit_footer_right_text(text: &str, max_width: usize) -> Option<String> {
    if max_width == 0 || text.trim().is_empty() {
        return None;
    }

    if UnicodeWidthStr::width(text) <= max_width {
        return Some(text.to_owned());
    }

    if max_width <= 3 {
        return Some(".".repeat(max_width));
    }

    let mut fitted = String::new();
    let mut width: usize = 0;
    for ch in text.chars() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if width.saturating_add(ch_width).saturating_add(3) > max_width {
            break;
        }
        fitted.push(ch);
        width = width.saturating_add(ch_width);
    }
    fitted.push_str("...");
    Some(fitted)
}

fn render_separator(frame: &mut Frame, area: Rect) {
    if area.height == 0 {
        return;
    }
    let sep_str = theme::SEPARATOR_CHAR.repeat(area.width as usize);
    let line = Line::from(Span::styled(sep_str, Style::default().fg(theme::DIM)));
    frame.render_widget(Paragraph::new(line), area);
}
