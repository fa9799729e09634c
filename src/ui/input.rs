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

use crate::app::App;
use crate::tabstop::TokenKind;
use crate::ui::theme;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthChar;

/// Horizontal padding to match footer inset.
pub(super) const INPUT_PAD: u16 = 2;

/// Prompt prefix width: "❯ " = 2 columns
pub(super) const PROMPT_WIDTH: u16 = 2;

/// Styled spans for the current tabstops. Labels are dimmed keys and the
/// value under the cursor is highlighted.
pub fn input_spans(app: &App) -> Vec<Span<'static>> {
    let active = app.active_tab().and_then(|idx| app.parser.tab_boundaries().get(idx).copied());

    let mut spans = Vec::with_capacity(app.parser.input().len());
    let mut pos = 0;
    for token in app.parser.input() {
        let len = token.text.chars().count();
        let style = match token.kind {
            TokenKind::Key => Style::default().fg(theme::TAB_KEY).add_modifier(Modifier::DIM),
            TokenKind::Value => {
                let in_active = len > 0
                    && active.is_some_and(|b| pos >= b.start && pos + len <= b.value_end());
                if in_active {
                    Style::default()
                        .fg(theme::TAB_VALUE)
                        .bg(theme::TAB_ACTIVE_BG)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(theme::TAB_VALUE)
                }
            }
        };
        spans.push(Span::styled(token.text.clone(), style));
        pos += len;
    }
    spans
}

/// Display column of the cursor, accounting for wide characters.
pub fn cursor_column(app: &App) -> usize {
    app.display().chars().take(app.cursor).map(|c| c.width().unwrap_or(0)).sum()
}

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let padded = Rect {
        x: area.x + INPUT_PAD,
        y: area.y,
        width: area.width.saturating_sub(INPUT_PAD * 2),
        height: area.height,
    };

    let prompt = Span::styled(
        format!("{} ", theme::PROMPT_CHAR),
        Style::default().fg(theme::RUST_ORANGE),
    );

    if app.parser.display_len() == 0 {
        // Placeholder
        let line = Line::from(vec![
            prompt,
            Span::styled("Type to fill the first field...", Style::default().fg(theme::DIM)),
        ]);
        frame.render_widget(Paragraph::new(line), padded);
        frame.set_cursor_position((padded.x + PROMPT_WIDTH, padded.y));
        return;
    }

    let mut spans = vec![prompt];
    spans.extend(input_spans(app));
    frame.render_widget(Paragraph::new(Line::from(spans)), padded);

    let Ok(col) = u16::try_from(cursor_column(app)) else {
        return;
    };
    let cursor_x = padded.x + PROMPT_WIDTH + col;
    if cursor_x < padded.right() {
        frame.set_cursor_position((cursor_x, padded.y));
    }
}
