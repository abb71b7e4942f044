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

//! Recommendations for the current selection.
//!
//! The recommendation controller watches the selection store. Every observed
//! change issues one request for the whole selection, tagged with a request
//! id that increases monotonically. Only the response to the most recent
//! request is applied, since the selection may grow again while a request is
//! in flight and responses can arrive in any order.

mod render;

use crate::{
    components::Outcome,
    error::AppResult,
    model::{Recommendation, selection::SelectionReader},
    tasks::{AppTask, TaskSender},
};

pub(crate) struct RecommendationController {
    pub(crate) selection: SelectionReader,
    recommendations: Vec<Recommendation>,
    latest_request: u64,
    loading: bool,
    count: usize,
    task_tx: TaskSender,
}

impl RecommendationController {
    /// Creates a controller asking for `count` recommendations per request.
    pub(crate) fn new(selection: SelectionReader, count: usize, task_tx: TaskSender) -> Self {
        Self {
            selection,
            recommendations: vec![],
            latest_request: 0,
            loading: false,
            count,
            task_tx,
        }
    }

    pub(crate) fn recommendations(&self) -> &[Recommendation] {
        &self.recommendations
    }

    pub(crate) fn is_loading(&self) -> bool {
        self.loading
    }

    /// Reacts to a change of the selection store.
    pub(crate) fn on_selection_changed(&mut self) {
        let ids = self.selection.snapshot();

        // Any response still in flight was for an older selection.
        self.latest_request += 1;

        if ids.is_empty() {
            self.recommendations.clear();
            self.loading = false;
            return;
        }

        tracing::info!(
            request_id = self.latest_request,
            selection = ids.len(),
            "Requesting recommendations"
        );

        self.loading = true;
        let task = AppTask::FetchRecommendations {
            request_id: self.latest_request,
            ids,
            count: self.count,
        };
        if self.task_tx.send(task).is_err() {
            tracing::warn!("Task worker is not running");
            self.loading = false;
        }
    }

    /// A recommendation request completed.
    ///
    /// On failure the last good list stays on screen, and nothing is retried.
    pub(crate) fn on_recommendations(
        &mut self,
        request_id: u64,
        result: AppResult<Vec<Recommendation>>,
    ) -> Outcome {
        if request_id != self.latest_request {
            tracing::debug!(request_id, latest = self.latest_request, "Discarding stale recommendations");
            return Outcome::Stale;
        }

        self.loading = false;

        match result {
            Ok(recommendations) => {
                tracing::debug!(request_id, count = recommendations.len(), "Recommendations ready");
                self.recommendations = recommendations;
                Outcome::Applied
            }
            Err(e) => {
                tracing::warn!(request_id, error = %e, "Recommendation request failed");
                Outcome::Failed(e.to_string())
            }
        }
    }
}
