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

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::Line,
    widgets::Paragraph,
};

use crate::{App, StatusLine};

const KEY_HINTS: &str = "↑/↓ move  Enter choose  Esc clear  Ctrl+C quit ";

/// Draws the footer: the latest status message on the left, key hints on the
/// right.
pub(crate) fn draw_status(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(KEY_HINTS.chars().count() as u16),
        ])
        .split(area);

    let message = match &app.status {
        Some(StatusLine::Info(text)) => Line::from(format!(" {text}")).style(Style::default().fg(app.theme.status_fg)),
        Some(StatusLine::Error(text)) => Line::from(format!(" {text}")).style(Style::default().fg(app.theme.error_fg)),
        None => Line::default(),
    };

    f.render_widget(Paragraph::new(message), chunks[0]);
    f.render_widget(
        Paragraph::new(Line::from(KEY_HINTS).style(Style::default().fg(app.theme.placeholder_fg))),
        chunks[1],
    );
}
