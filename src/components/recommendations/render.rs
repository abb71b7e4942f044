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

//! UI rendering logic for the recommendations panel.
//!
//! This module handles the visual representation of the recommended tracks,
//! including column layout and theme application using the Ratatui widget
//! system.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Padding, Paragraph, Row, Table},
};

use crate::{components::RecommendationController, theme::Theme};

const EMPTY_HINT: &str = "Choose a track above to get recommendations.";

impl RecommendationController {
    pub(crate) fn draw(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let title = if self.is_loading() {
            format!(" Recommendations ({}) | loading... ", self.recommendations().len())
        } else {
            format!(" Recommendations ({}) ", self.recommendations().len())
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border_colour))
            .padding(Padding::horizontal(1))
            .title(title);

        if self.recommendations().is_empty() {
            let hint = Paragraph::new(Line::from(EMPTY_HINT).style(Style::default().fg(theme.placeholder_fg)))
                .block(block);
            f.render_widget(hint, area);
            return;
        }

        let rows = self.recommendations().iter().enumerate().map(|(i, item)| {
            let uri = item.uri.as_deref().unwrap_or("-");

            Row::new(vec![
                Cell::from(Line::from(format!("{:>2}", i + 1)).alignment(Alignment::Right)),
                Cell::from(Line::from(item.track_name.as_str()).style(Style::default().fg(theme.table_track_fg))),
                Cell::from(Line::from(item.artists.as_str()).style(Style::default().fg(theme.table_artist_fg))),
                Cell::from(Line::from(uri).style(Style::default().fg(theme.table_link_fg))),
            ])
        });

        let table = Table::new(
            rows,
            [
                Constraint::Length(3),
                Constraint::Percentage(40),
                Constraint::Percentage(30),
                Constraint::Percentage(30),
            ],
        )
        .header(
            Row::new(vec![
                Cell::from(Line::from("#").alignment(Alignment::Right)),
                Cell::from("Track"),
                Cell::from("Artists"),
                Cell::from("Link"),
            ])
            .style(Style::default().add_modifier(Modifier::BOLD).fg(theme.accent_colour))
            .bottom_margin(1),
        )
        .block(block);

        f.render_widget(table, area);
    }
}
