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

//! Application event distribution and orchestration.
//!
//! This module defines the central event-handling logic for the application,
//! bridging user input (keyboard, mouse), completions posted by the task
//! worker (timers, catalog responses) and the UI rendering pipeline.
//!
//! # Architecture
//!
//! The system follows a reactive event-loop pattern on a single task:
//!
//! 1. **Capture**: Events are received as [`AppEvent`]s through an
//!    asynchronous channel, alongside change notifications from the selection
//!    store.
//! 2. **Process**: The controllers update their state and hand any timers or
//!    requests they need to the task worker.
//! 3. **Render**: After each event is processed, the UI is re-drawn using the
//!    `ratatui` terminal.
//!
//! Only this loop mutates controller state, so completions arriving in any
//! order are applied one at a time and checked against current state first.

mod handlers;
mod key_handlers;

use handlers::*;
use key_handlers::process_key_event;

use std::io::Stdout;

use anyhow::Result;
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{Terminal, prelude::CrosstermBackend};

use crate::{
    App,
    error::AppResult,
    model::{Recommendation, Suggestion},
    render::draw,
};

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize,

    DebounceElapsed(u64),
    SuggestionsReady {
        generation: u64,
        result: AppResult<Vec<Suggestion>>,
    },

    SelectionChanged,
    RecommendationsReady {
        request_id: u64,
        result: AppResult<Vec<Recommendation>>,
    },

    ServiceStatus(AppResult<String>),

    ExitApplication,
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until a 'quit' event is received or the event channel
/// is closed.
pub(crate) async fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    terminal.draw(|f| draw(f, app))?;

    while let Some(event) = next_event(app).await {
        if matches!(event, AppEvent::ExitApplication) {
            break;
        }

        handle_event(app, event)?;

        terminal.draw(|f| draw(f, app))?;
    }

    Ok(())
}

/// Waits for the next event, turning selection store changes into
/// [`AppEvent::SelectionChanged`].
pub(crate) async fn next_event(app: &mut App) -> Option<AppEvent> {
    tokio::select! {
        biased;

        event = app.event_rx.recv() => event,
        true = app.recommendations.selection.changed() => Some(AppEvent::SelectionChanged),
    }
}

/// Applies a single event to the application state.
pub(crate) fn handle_event(app: &mut App, event: AppEvent) -> Result<()> {
    match event {
        AppEvent::Key(key) => process_key_event(app, key)?,
        AppEvent::Mouse(mouse) => handle_mouse(app, mouse),
        AppEvent::Resize => {}

        AppEvent::DebounceElapsed(generation) => handle_debounce_elapsed(app, generation),
        AppEvent::SuggestionsReady { generation, result } => {
            handle_suggestions_ready(app, generation, result)
        }

        AppEvent::SelectionChanged => handle_selection_changed(app),
        AppEvent::RecommendationsReady { request_id, result } => {
            handle_recommendations_ready(app, request_id, result)
        }

        AppEvent::ServiceStatus(result) => handle_service_status(app, result),

        AppEvent::ExitApplication => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::{collections::HashMap, sync::Arc, time::Duration};

    use crossterm::event::{KeyCode, KeyModifiers};
    use tokio::{
        sync::mpsc::unbounded_channel,
        time::{Instant, timeout_at},
    };

    use super::*;
    use crate::{
        StatusLine,
        config::AppConfig,
        model::TrackId,
        tasks::{
            spawn_task_worker,
            tests::{FakeCatalog, recommendation, suggestion},
        },
    };

    fn start(catalog: FakeCatalog) -> (App, Arc<FakeCatalog>) {
        let catalog = Arc::new(catalog);
        let (task_tx, task_rx) = unbounded_channel();
        let app = App::new(AppConfig::default(), task_tx);
        spawn_task_worker(catalog.clone(), task_rx, app.event_tx.clone());

        (app, catalog)
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_event(app, AppEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))).unwrap();
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    /// Processes events for `duration` of (virtual) time.
    async fn pump_for(app: &mut App, duration: Duration) {
        let deadline = Instant::now() + duration;
        while let Ok(Some(event)) = timeout_at(deadline, next_event(app)).await {
            handle_event(app, event).unwrap();
        }
    }

    /// Processes events until nothing has happened for a while.
    async fn settle(app: &mut App) {
        pump_for(app, Duration::from_secs(10)).await;
    }

    fn search_catalog() -> FakeCatalog {
        FakeCatalog {
            suggestions: HashMap::from([(
                "abc".to_string(),
                vec![suggestion(1, "A"), suggestion(2, "B")],
            )]),
            recommendations: HashMap::from([(1, vec![recommendation(9, "Nine")])]),
            ..FakeCatalog::default()
        }
    }

    #[tokio::test(start_paused = true)]
    async fn search_choose_and_recommend() {
        let (mut app, catalog) = start(search_catalog());

        type_text(&mut app, "ab");
        settle(&mut app).await;
        assert!(catalog.queries().is_empty());

        type_text(&mut app, "c");
        pump_for(&mut app, Duration::from_millis(250)).await;
        assert!(catalog.queries().is_empty());
        settle(&mut app).await;
        assert_eq!(catalog.queries(), vec!["abc".to_string()]);
        assert_eq!(app.autocomplete.suggestions().len(), 2);

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.autocomplete.cursor(), Some(1));
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.recommendations.selection.ids(), vec![TrackId::from(2)]);
        assert_eq!(app.autocomplete.query(), "");

        settle(&mut app).await;
        assert_eq!(catalog.requests(), vec![(vec![TrackId::from(2)], 5)]);
        assert_eq!(app.recommendations.recommendations(), [recommendation(9, "Nine")].as_slice());
        assert_eq!(app.chosen_label(&TrackId::from(2)), "B");
    }

    #[tokio::test(start_paused = true)]
    async fn fast_typing_issues_a_single_lookup_for_the_final_text() {
        let (mut app, catalog) = start(search_catalog());

        for c in "abcdef".chars() {
            press(&mut app, KeyCode::Char(c));
            pump_for(&mut app, Duration::from_millis(100)).await;
        }
        settle(&mut app).await;

        assert_eq!(catalog.queries(), vec!["abcdef".to_string()]);
    }

    #[tokio::test(start_paused = true)]
    async fn slow_response_for_old_query_is_discarded() {
        let catalog = FakeCatalog {
            suggestions: HashMap::from([
                ("abc".to_string(), vec![suggestion(1, "Old")]),
                ("abcd".to_string(), vec![suggestion(2, "New")]),
            ]),
            delays: HashMap::from([("abc".to_string(), Duration::from_secs(2))]),
            ..FakeCatalog::default()
        };
        let (mut app, catalog) = start(catalog);

        type_text(&mut app, "abc");
        pump_for(&mut app, Duration::from_millis(400)).await;
        type_text(&mut app, "d");
        settle(&mut app).await;

        assert_eq!(catalog.queries(), vec!["abc".to_string(), "abcd".to_string()]);
        assert_eq!(app.autocomplete.suggestions(), [suggestion(2, "New")].as_slice());
    }

    #[tokio::test(start_paused = true)]
    async fn growing_selection_keeps_only_latest_recommendations() {
        let catalog = FakeCatalog {
            suggestions: HashMap::from([(
                "abc".to_string(),
                vec![suggestion(1, "A"), suggestion(2, "B")],
            )]),
            recommendations: HashMap::from([
                (1, vec![recommendation(10, "For one")]),
                (2, vec![recommendation(20, "For two")]),
            ]),
            recommend_delays: HashMap::from([(1, Duration::from_secs(3))]),
            ..FakeCatalog::default()
        };
        let (mut app, catalog) = start(catalog);

        type_text(&mut app, "abc");
        pump_for(&mut app, Duration::from_millis(400)).await;
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        pump_for(&mut app, Duration::from_millis(100)).await;

        type_text(&mut app, "abc");
        pump_for(&mut app, Duration::from_millis(400)).await;
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        settle(&mut app).await;

        assert_eq!(
            catalog.requests(),
            vec![
                (vec![TrackId::from(1)], 5),
                (vec![TrackId::from(1), TrackId::from(1)], 5),
            ]
        );
        assert_eq!(app.recommendations.recommendations(), [recommendation(20, "For two")].as_slice());
    }

    #[tokio::test(start_paused = true)]
    async fn failures_degrade_gracefully() {
        let catalog = FakeCatalog {
            failing: true,
            ..FakeCatalog::default()
        };
        let (mut app, _catalog) = start(catalog);

        type_text(&mut app, "abc");
        settle(&mut app).await;

        assert!(app.autocomplete.suggestions().is_empty());
        assert!(matches!(app.status, Some(StatusLine::Error(_))));

        type_text(&mut app, "x");
        assert_eq!(app.autocomplete.query(), "abcx");
    }

    #[tokio::test(start_paused = true)]
    async fn success_clears_an_earlier_failure_message() {
        let catalog = FakeCatalog {
            recommendations: HashMap::from([
                (1, vec![recommendation(9, "Nine")]),
                (2, vec![recommendation(8, "Eight")]),
            ]),
            ..search_catalog()
        };
        let (mut app, _catalog) = start(catalog);

        app.status = Some(StatusLine::Error("Suggestions unavailable: boom".to_string()));
        type_text(&mut app, "abc");
        settle(&mut app).await;
        assert_eq!(app.status, None);

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        settle(&mut app).await;
        assert_eq!(app.status, Some(StatusLine::Info("Added A".to_string())));

        type_text(&mut app, "abc");
        settle(&mut app).await;
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        app.status = Some(StatusLine::Error("Recommendations unavailable: boom".to_string()));
        settle(&mut app).await;

        assert_eq!(app.status, None);
        assert_eq!(app.recommendations.recommendations(), [recommendation(8, "Eight")].as_slice());
    }

    #[tokio::test(start_paused = true)]
    async fn service_status_is_reported() {
        let (mut app, _catalog) = start(FakeCatalog::default());

        app.task_tx.send(crate::tasks::AppTask::CheckService).unwrap();
        settle(&mut app).await;

        assert_eq!(
            app.status,
            Some(StatusLine::Info("Catalog service: works fine".to_string()))
        );
    }

    #[tokio::test]
    async fn quit_keys_request_exit() {
        let (mut app, _catalog) = start(FakeCatalog::default());

        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        handle_event(&mut app, AppEvent::Key(key)).unwrap();

        assert!(matches!(next_event(&mut app).await, Some(AppEvent::ExitApplication)));
        assert_eq!(app.autocomplete.query(), "");
    }
}
