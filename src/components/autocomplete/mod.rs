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

//! Search-as-you-type track lookup.
//!
//! The autocomplete controller owns the query text, the current batch of
//! suggestions and the highlight cursor. It is a small state machine:
//!
//! * **Idle**: the query is too short to search, nothing is shown.
//! * **Pending**: the quiet-period timer is armed for the current query.
//! * **Fetching**: the timer fired and a lookup is in flight.
//! * **Ready**: a batch of suggestions is shown and can be navigated.
//!
//! Every change to the query bumps a generation number. Timers and lookups
//! carry the generation they were started for, and any completion carrying an
//! older generation is dropped without touching visible state, which is what
//! makes superseded timers and out-of-order responses harmless.

mod event;
mod render;

use std::time::Duration;

use ratatui::{layout::Rect, widgets::ListState};
use tui_input::Input;

use crate::{
    components::Outcome,
    config::{AppConfig, MIN_QUERY_LEN_FLOOR},
    error::AppResult,
    model::{Suggestion, selection::SelectionWriter},
    tasks::{AppTask, TaskSender},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AutocompletePhase {
    Idle,
    Pending,
    Fetching,
    Ready,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct AutocompleteSettings {
    pub(crate) debounce: Duration,
    pub(crate) min_query_len: usize,
}

impl From<&AppConfig> for AutocompleteSettings {
    fn from(config: &AppConfig) -> Self {
        Self {
            debounce: config.debounce(),
            min_query_len: config.min_query_len.max(MIN_QUERY_LEN_FLOOR),
        }
    }
}

/// Result of input handled by the controller that the root view cares about.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum AutocompleteAction {
    /// A suggestion was committed to the selection store.
    Chosen(Suggestion),
}

pub(crate) struct AutocompleteController {
    pub(crate) input: Input,
    suggestions: Vec<Suggestion>,
    /// `None` means nothing is highlighted and the input itself is active.
    cursor: Option<usize>,
    phase: AutocompletePhase,
    generation: u64,
    settings: AutocompleteSettings,
    selection: SelectionWriter,
    task_tx: TaskSender,

    // Render state, used to map pointer clicks back to suggestions.
    list_state: ListState,
    list_area: Option<Rect>,
}

impl AutocompleteController {
    pub(crate) fn new(
        settings: AutocompleteSettings,
        selection: SelectionWriter,
        task_tx: TaskSender,
    ) -> Self {
        Self {
            input: Input::default(),
            suggestions: vec![],
            cursor: None,
            phase: AutocompletePhase::Idle,
            generation: 0,
            settings,
            selection,
            task_tx,
            list_state: ListState::default(),
            list_area: None,
        }
    }

    pub(crate) fn query(&self) -> &str {
        self.input.value()
    }

    pub(crate) fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    pub(crate) fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub(crate) fn phase(&self) -> AutocompletePhase {
        self.phase
    }

    pub(crate) fn is_navigating(&self) -> bool {
        self.phase == AutocompletePhase::Ready && self.cursor.is_some()
    }

    /// Reacts to an edit of the query text.
    ///
    /// Anything already shown or in flight belongs to the old text, so it is
    /// dropped. A query long enough to search re-arms the quiet-period timer;
    /// a shorter one cancels it.
    pub(crate) fn query_changed(&mut self) {
        self.generation += 1;
        self.suggestions.clear();
        self.cursor = None;

        if self.query().chars().count() < self.settings.min_query_len {
            self.phase = AutocompletePhase::Idle;
            self.dispatch(AppTask::CancelDebounce);
        } else {
            self.phase = AutocompletePhase::Pending;
            self.dispatch(AppTask::ArmDebounce {
                generation: self.generation,
                delay: self.settings.debounce,
            });
        }
    }

    /// The quiet-period timer for `generation` fired.
    pub(crate) fn on_debounce_elapsed(&mut self, generation: u64) -> Outcome {
        if generation != self.generation || self.phase != AutocompletePhase::Pending {
            tracing::debug!(generation, current = self.generation, "Ignoring superseded timer");
            return Outcome::Stale;
        }

        self.phase = AutocompletePhase::Fetching;
        self.dispatch(AppTask::FetchSuggestions {
            generation,
            query: self.query().to_string(),
        });

        Outcome::Applied
    }

    /// A lookup started for `generation` completed.
    pub(crate) fn on_suggestions(
        &mut self,
        generation: u64,
        result: AppResult<Vec<Suggestion>>,
    ) -> Outcome {
        if generation != self.generation || self.phase != AutocompletePhase::Fetching {
            tracing::debug!(generation, current = self.generation, "Discarding stale suggestions");
            return Outcome::Stale;
        }

        self.cursor = None;

        match result {
            Ok(suggestions) => {
                tracing::debug!(query = %self.query(), count = suggestions.len(), "Suggestions ready");
                self.suggestions = suggestions;
                self.phase = AutocompletePhase::Ready;
                Outcome::Applied
            }
            Err(e) => {
                tracing::warn!(query = %self.query(), error = %e, "Autocomplete lookup failed");
                self.suggestions.clear();
                self.phase = AutocompletePhase::Idle;
                Outcome::Failed(e.to_string())
            }
        }
    }

    /// Moves the highlight down, wrapping from the last suggestion back to
    /// the input.
    pub(crate) fn select_next(&mut self) {
        if self.phase != AutocompletePhase::Ready || self.suggestions.is_empty() {
            return;
        }

        let last = self.suggestions.len() - 1;
        self.cursor = match self.cursor {
            None => Some(0),
            Some(i) if i >= last => None,
            Some(i) => Some(i + 1),
        };
    }

    /// Moves the highlight up, wrapping from the input to the last
    /// suggestion.
    pub(crate) fn select_previous(&mut self) {
        if self.phase != AutocompletePhase::Ready || self.suggestions.is_empty() {
            return;
        }

        self.cursor = match self.cursor {
            None => Some(self.suggestions.len() - 1),
            Some(0) => None,
            Some(i) => Some(i - 1),
        };
    }

    /// Commits the highlighted suggestion, if any.
    pub(crate) fn commit(&mut self) -> Option<Suggestion> {
        let index = self.cursor?;
        self.choose(index)
    }

    /// Appends the suggestion at `index` to the selection store and starts
    /// over with an empty query.
    pub(crate) fn choose(&mut self, index: usize) -> Option<Suggestion> {
        if self.phase != AutocompletePhase::Ready {
            return None;
        }

        let chosen = self.suggestions.get(index).cloned()?;
        tracing::info!(track_id = %chosen.id, label = %chosen.label(), "Track chosen");

        self.selection.append(chosen.id.clone());
        self.reset();

        Some(chosen)
    }

    /// Clears the query, suggestions and cursor without committing anything.
    pub(crate) fn reset(&mut self) {
        if self.phase == AutocompletePhase::Pending {
            self.dispatch(AppTask::CancelDebounce);
        }

        self.generation += 1;
        self.input.reset();
        self.suggestions.clear();
        self.cursor = None;
        self.phase = AutocompletePhase::Idle;
        self.list_state = ListState::default();
    }

    fn dispatch(&self, task: AppTask) {
        if self.task_tx.send(task).is_err() {
            tracing::warn!("Task worker is not running");
        }
    }
}
