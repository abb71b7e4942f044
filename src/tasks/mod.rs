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

//! Asynchronous application task processing.
//!
//! This module implements the command pattern used to keep timers and network
//! calls off the event loop. Controllers describe what they need as an
//! [`AppTask`], and a dedicated worker turns each task into a timer or a
//! catalog request whose outcome is posted back to the event loop as an
//! [`AppEvent`].
//!
//! Outcomes are tagged with the generation or request id they were started
//! for. The worker never decides whether an outcome is still wanted; that is
//! left to the owning controller when the event is processed.

use std::{sync::Arc, time::Duration};

use tokio::{
    sync::mpsc::{UnboundedReceiver, UnboundedSender},
    task::JoinHandle,
};

use crate::{catalog::CatalogApi, events::AppEvent, model::TrackId};

pub(crate) type TaskSender = UnboundedSender<AppTask>;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum AppTask {
    /// Start the quiet-period timer for `generation`, replacing any timer that
    /// is already armed.
    ArmDebounce { generation: u64, delay: Duration },
    CancelDebounce,

    FetchSuggestions { generation: u64, query: String },
    FetchRecommendations {
        request_id: u64,
        ids: Vec<TrackId>,
        count: usize,
    },

    CheckService,
}

/// Spawns the task worker on the current runtime.
///
/// The worker runs until every [`TaskSender`] has been dropped.
///
/// # Arguments
///
/// * `catalog` - The catalog service used for fetches.
/// * `task_rx` - The receiving end of the task channel.
/// * `event_tx` - The sending end of the channel for broadcasting results.
pub(crate) fn spawn_task_worker(
    catalog: Arc<dyn CatalogApi>,
    mut task_rx: UnboundedReceiver<AppTask>,
    event_tx: UnboundedSender<AppEvent>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut debounce: Option<JoinHandle<()>> = None;

        while let Some(task) = task_rx.recv().await {
            let ctx = TaskContext {
                catalog: Arc::clone(&catalog),
                event_tx: event_tx.clone(),
            };

            match task {
                AppTask::ArmDebounce { generation, delay } => {
                    cancel_timer(&mut debounce);
                    debounce = Some(tokio::spawn(debounce_elapsed(ctx, generation, delay)));
                }
                AppTask::CancelDebounce => cancel_timer(&mut debounce),

                AppTask::FetchSuggestions { generation, query } => {
                    tokio::spawn(fetch_suggestions(ctx, generation, query));
                }
                AppTask::FetchRecommendations {
                    request_id,
                    ids,
                    count,
                } => {
                    tokio::spawn(fetch_recommendations(ctx, request_id, ids, count));
                }

                AppTask::CheckService => {
                    tokio::spawn(check_service(ctx));
                }
            }
        }

        cancel_timer(&mut debounce);
        tracing::debug!("Task worker stopped");
    })
}

/// Shared resources handed to each spawned task.
struct TaskContext {
    catalog: Arc<dyn CatalogApi>,
    event_tx: UnboundedSender<AppEvent>,
}

impl TaskContext {
    fn post(&self, event: AppEvent) {
        // The event loop has gone away, nothing left to tell.
        let _ = self.event_tx.send(event);
    }
}

fn cancel_timer(timer: &mut Option<JoinHandle<()>>) {
    if let Some(timer) = timer.take() {
        timer.abort();
    }
}

async fn debounce_elapsed(ctx: TaskContext, generation: u64, delay: Duration) {
    tokio::time::sleep(delay).await;
    ctx.post(AppEvent::DebounceElapsed(generation));
}

async fn fetch_suggestions(ctx: TaskContext, generation: u64, query: String) {
    tracing::debug!(generation, query = %query, "Fetching suggestions");

    let result = ctx.catalog.autocomplete(&query).await;
    ctx.post(AppEvent::SuggestionsReady { generation, result });
}

async fn fetch_recommendations(ctx: TaskContext, request_id: u64, ids: Vec<TrackId>, count: usize) {
    tracing::debug!(request_id, selection = ids.len(), count, "Fetching recommendations");

    let result = ctx.catalog.recommend(&ids, count).await;
    ctx.post(AppEvent::RecommendationsReady { request_id, result });
}

async fn check_service(ctx: TaskContext) {
    let result = ctx.catalog.status().await;
    ctx.post(AppEvent::ServiceStatus(result));
}
