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

//! Handlers for individual application events.

use crossterm::event::{Event, MouseEvent};

use crate::{
    App, StatusLine,
    components::{AutocompleteAction, Outcome},
    error::AppResult,
    model::{Recommendation, Suggestion},
};

pub(super) fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if let Some(action) = app.autocomplete.process_event(&Event::Mouse(mouse)) {
        handle_autocomplete_action(app, action);
    }
}

pub(super) fn handle_autocomplete_action(app: &mut App, action: AutocompleteAction) {
    match action {
        AutocompleteAction::Chosen(suggestion) => {
            let label = suggestion.label().to_string();
            app.status = Some(StatusLine::Info(format!("Added {label}")));
            app.chosen_labels.insert(suggestion.id, label);
        }
    }
}

pub(super) fn handle_debounce_elapsed(app: &mut App, generation: u64) {
    app.autocomplete.on_debounce_elapsed(generation);
}

pub(super) fn handle_suggestions_ready(
    app: &mut App,
    generation: u64,
    result: AppResult<Vec<Suggestion>>,
) {
    match app.autocomplete.on_suggestions(generation, result) {
        Outcome::Applied => clear_error(app),
        Outcome::Stale => {}
        Outcome::Failed(message) => {
            app.status = Some(StatusLine::Error(format!("Suggestions unavailable: {message}")));
        }
    }
}

pub(super) fn handle_selection_changed(app: &mut App) {
    app.recommendations.on_selection_changed();
}

pub(super) fn handle_recommendations_ready(
    app: &mut App,
    request_id: u64,
    result: AppResult<Vec<Recommendation>>,
) {
    match app.recommendations.on_recommendations(request_id, result) {
        Outcome::Applied => clear_error(app),
        Outcome::Stale => {}
        Outcome::Failed(message) => {
            app.status = Some(StatusLine::Error(format!(
                "Recommendations unavailable: {message}"
            )));
        }
    }
}

/// A successful request supersedes the last failure shown in the footer.
fn clear_error(app: &mut App) {
    if matches!(app.status, Some(StatusLine::Error(_))) {
        app.status = None;
    }
}

pub(super) fn handle_service_status(app: &mut App, result: AppResult<String>) {
    app.status = Some(match result {
        Ok(status) => {
            tracing::info!(status = %status, "Catalog service is reachable");
            StatusLine::Info(format!("Catalog service: {status}"))
        }
        Err(e) => {
            let reason = if e.is_timeout() { "timed out".to_string() } else { e.to_string() };
            tracing::warn!(error = %e, "Catalog service liveness check failed");
            StatusLine::Error(format!("Catalog service unreachable: {reason}"))
        }
    });
}
