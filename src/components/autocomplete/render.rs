// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! UI rendering logic for the search box and its suggestion dropdown.
//!
//! The dropdown is drawn over whatever lies beneath the search box, so it has
//! to be rendered after the rest of the screen.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Padding, Paragraph},
};

use crate::{
    components::{AutocompleteController, AutocompletePhase},
    theme::Theme,
};

const MAX_DROPDOWN_ROWS: u16 = 8;

const PLACEHOLDER: &str = "Search tracks...";

impl AutocompleteController {
    /// Draws the search box into `area`.
    pub(crate) fn draw_input(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let title = match self.phase() {
            AutocompletePhase::Pending | AutocompletePhase::Fetching => " Search (searching...) ",
            _ => " Search ",
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border_colour))
            .padding(Padding::horizontal(1))
            .title(title);
        let inner = block.inner(area);

        let text = if self.query().is_empty() {
            Line::from(PLACEHOLDER).style(Style::default().fg(theme.placeholder_fg))
        } else {
            Line::from(self.query()).style(Style::default().fg(theme.input_fg))
        };

        f.render_widget(Paragraph::new(text).block(block), area);

        if !self.is_navigating() {
            let scroll = self.input.visual_scroll(inner.width as usize);
            let cursor_x = inner.x + (self.input.visual_cursor().saturating_sub(scroll)) as u16;
            f.set_cursor_position((cursor_x, inner.y));
        }
    }

    /// Draws the suggestion dropdown directly below `input_area`, clipped to
    /// `bounds`.
    pub(crate) fn draw_dropdown(&mut self, f: &mut Frame, input_area: Rect, bounds: Rect, theme: &Theme) {
        self.list_area = None;

        if self.query().is_empty() || self.suggestions().is_empty() {
            return;
        }

        // One row per suggestion plus the bottom border.
        let rows = (self.suggestions().len() as u16).min(MAX_DROPDOWN_ROWS) + 1;
        let top = input_area.y + input_area.height;
        let available = (bounds.y + bounds.height).saturating_sub(top);
        if available < 2 {
            return;
        }

        let area = Rect::new(input_area.x, top, input_area.width, rows.min(available));

        let items: Vec<ListItem> = self
            .suggestions()
            .iter()
            .map(|suggestion| {
                ListItem::new(Line::from(vec![
                    Span::raw(" "),
                    Span::styled(suggestion.label().to_string(), Style::default().fg(theme.suggestion_fg)),
                ]))
            })
            .collect();

        let block = Block::default()
            .borders(Borders::LEFT | Borders::RIGHT | Borders::BOTTOM)
            .border_style(Style::default().fg(theme.border_colour));
        self.list_area = Some(block.inner(area));

        let list = List::new(items).block(block).highlight_style(
            Style::default()
                .bg(theme.accent_colour)
                .fg(theme.highlight_fg)
                .add_modifier(Modifier::BOLD),
        );

        self.list_state.select(self.cursor());

        f.render_widget(Clear, area);
        f.render_stateful_widget(list, area, &mut self.list_state);
    }
}
