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

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework. It is responsible for layout
//! management, widget styling, and terminal frame composition.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called after
//! every processed event to provide a reactive user interface.

mod selection;
mod status;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Paragraph},
};

use crate::{
    App,
    render::{selection::draw_selection, status::draw_status},
};

const TITLE: &str = "Music Recommender";

/// Renders the user interface to the terminal frame.
///
/// The screen is split into a title bar, the search box, the selected tracks,
/// the recommendations and a footer. The suggestion dropdown is drawn last so
/// that it overlays the panels beneath the search box.
///
/// # Arguments
///
/// * `f` - The current terminal frame used for drawing.
/// * `app` - A mutable reference to the application state, allowing
///   components to record render state (such as where the dropdown rows
///   landed, for pointer selection).
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    f.render_widget(
        Block::default().style(Style::default().bg(app.theme.background_colour)),
        area,
    );

    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    draw_title(f, outer[0], app);
    app.autocomplete.draw_input(f, outer[1], &app.theme);
    draw_selection(f, outer[2], app);
    app.recommendations.draw(f, outer[3], &app.theme);
    draw_status(f, outer[4], app);

    let below_input = Rect::new(area.x, outer[2].y, area.width, outer[2].height + outer[3].height);
    app.autocomplete.draw_dropdown(f, outer[1], below_input, &app.theme);
}

fn draw_title(f: &mut Frame, area: Rect, app: &App) {
    let title = Line::from(TITLE)
        .style(
            Style::default()
                .fg(app.theme.title_fg)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    let service = Line::from(format!("{} ", app.config.api_url))
        .style(Style::default().fg(app.theme.status_fg))
        .alignment(Alignment::Right);

    f.render_widget(Paragraph::new(title), area);
    f.render_widget(Paragraph::new(service), area);
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};
    use tokio::sync::mpsc::{UnboundedReceiver, unbounded_channel};

    use super::*;
    use crate::{
        config::AppConfig,
        model::{Suggestion, TrackId},
        tasks::{
            AppTask,
            tests::{recommendation, suggestion},
        },
    };

    fn screen(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();

        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn empty_screen_shows_placeholders() {
        let (task_tx, _task_rx) = unbounded_channel();
        let mut app = App::new(AppConfig::default(), task_tx);

        let text = screen(&mut app);

        assert!(text.contains("Music Recommender"));
        assert!(text.contains("Search tracks..."));
        assert!(text.contains("Recommendations (0)"));
    }

    fn show_suggestions(app: &mut App, task_rx: &mut UnboundedReceiver<AppTask>, batch: Vec<Suggestion>) {
        app.autocomplete.input = tui_input::Input::new("abc".to_string());
        app.autocomplete.query_changed();

        let generation = match task_rx.try_recv() {
            Ok(AppTask::ArmDebounce { generation, .. }) => generation,
            other => panic!("unexpected task {other:?}"),
        };
        app.autocomplete.on_debounce_elapsed(generation);
        app.autocomplete.on_suggestions(generation, Ok(batch));
        while task_rx.try_recv().is_ok() {}
    }

    #[test]
    fn dropdown_selection_and_recommendations_are_drawn() {
        let (task_tx, mut task_rx) = unbounded_channel();
        let mut app = App::new(AppConfig::default(), task_tx);

        show_suggestions(&mut app, &mut task_rx, vec![suggestion(1, "Alpha by A")]);
        app.autocomplete.choose(0);
        app.chosen_labels.insert(TrackId::from(1), "Alpha by A".to_string());

        app.recommendations.on_selection_changed();
        let request_id = match task_rx.try_recv() {
            Ok(AppTask::FetchRecommendations { request_id, .. }) => request_id,
            other => panic!("unexpected task {other:?}"),
        };
        app.recommendations
            .on_recommendations(request_id, Ok(vec![recommendation(9, "Ninth Wave")]));

        let text = screen(&mut app);
        assert!(text.contains("Selected (1)"));
        assert!(text.contains("Alpha by A"));
        assert!(text.contains("Ninth Wave"));
        assert!(text.contains("Recommendations (1)"));

        show_suggestions(&mut app, &mut task_rx, vec![suggestion(2, "Beta by B")]);
        let text = screen(&mut app);
        assert!(text.contains("Beta by B"));
    }
}
