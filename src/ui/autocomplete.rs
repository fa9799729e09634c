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

use super::input::{INPUT_PAD, PROMPT_WIDTH};
use crate::app::App;
use crate::app::completion::MAX_VISIBLE;
use crate::tabstop::CompletionItem;
use crate::ui::theme;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Max dropdown width (characters).
const MAX_WIDTH: u16 = 60;

pub fn is_active(app: &App) -> bool {
    !app.completions.is_empty()
}

#[allow(clippy::cast_possible_truncation)]
pub fn compute_height(app: &App) -> u16 {
    if app.completions.is_empty() {
        return 0;
    }
    let visible = app.completions.len().min(MAX_VISIBLE) as u16;
    visible.saturating_add(2) // +2 for top/bottom border
}

fn item_line(item: &CompletionItem, is_selected: bool) -> Line<'static> {
    if let Some(header) = &item.header {
        return Line::from(Span::styled(
            format!(" {header}"),
            Style::default().fg(theme::HEADER).add_modifier(Modifier::BOLD),
        ));
    }

    let mut spans: Vec<Span<'static>> = Vec::new();
    if is_selected {
        spans.push(Span::styled(
            theme::SELECTED_MARKER,
            Style::default().fg(theme::RUST_ORANGE).add_modifier(Modifier::BOLD),
        ));
    } else {
        spans.push(Span::raw("   "));
    }

    let title_style = if item.is_selectable() {
        Style::default()
    } else {
        Style::default().fg(theme::DIM)
    };
    spans.push(Span::styled(item.title.clone(), title_style));

    if !item.kind.is_empty() {
        spans.push(Span::styled(format!("  {}", item.kind), Style::default().fg(theme::KIND)));
    }
    if let Some(description) = &item.description {
        spans.push(Span::styled(format!("  {description}"), Style::default().fg(theme::DIM)));
    }
    Line::from(spans)
}

/// Rows for the visible window of the completion list.
pub fn visible_lines(app: &App) -> Vec<Line<'static>> {
    let (start, end) = app.dialog.visible_range(app.completions.len(), MAX_VISIBLE);
    app.completions[start..end]
        .iter()
        .map(|item| item_line(item, !item.id.is_empty() && item.id == app.active_completion))
        .collect()
}

/// Render the completion dropdown as a floating overlay at the bottom of `body`.
pub fn render(frame: &mut Frame, body: Rect, app: &App) {
    let height = compute_height(app).min(body.height);
    if height == 0 {
        return;
    }
    let area = dropdown_area(body, height);
    // Clear the area first so the overlay has a solid background
    frame.render_widget(ratatui::widgets::Clear, area);
    frame.render_widget(Paragraph::new(visible_lines(app)).block(block(app)), area);
}

/// Dropdown rect: bottom-aligned in `body`, aligned with the input text start.
fn dropdown_area(body: Rect, height: u16) -> Rect {
    let x = body.x + INPUT_PAD + PROMPT_WIDTH;
    let width = body.width.saturating_sub(INPUT_PAD * 2 + PROMPT_WIDTH).min(MAX_WIDTH);
    let height = height.min(body.height);
    Rect { x, y: body.bottom().saturating_sub(height), width, height }
}

fn block(app: &App) -> Block<'static> {
    let title = format!(" Completions ({}) ", app.items.len());
    Block::default()
        .title(Span::styled(title, Style::default().fg(theme::DIM)))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme::DIM))
}
