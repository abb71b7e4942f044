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

//! # Track Recommender TUI.
//!
//! A terminal front end for a remote music catalog: type part of a track
//! name, pick from live suggestions, and get recommendations for everything
//! picked so far.
//!
//! It uses an event-driven architecture where:
//!
//! * The **Event Loop** owns all application state, handles input and
//!   renders the UI with `ratatui`.
//! * The **Task Worker** runs debounce timers and catalog requests as
//!   independent tasks and posts their outcomes back as events.
//! * An **Input Thread** blocks on terminal input and forwards it to the
//!   event loop.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is preserved even in the event of an error. Everything runs
//! on a single-threaded `tokio` runtime, communicating over `tokio::sync`
//! channels, so state is only ever mutated by the event loop.

mod catalog;
mod components;
mod config;
mod error;
mod events;
mod logging;
mod model;
mod render;
mod tasks;
mod theme;

use std::{collections::HashMap, io, sync::Arc, thread};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::{
    catalog::{CatalogApi, HttpCatalog},
    components::{AutocompleteController, AutocompleteSettings, RecommendationController},
    config::AppConfig,
    events::{AppEvent, process_events},
    model::{TrackId, selection::selection_store},
    tasks::{AppTask, TaskSender},
    theme::Theme,
};

/// The message shown in the footer.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum StatusLine {
    Info(String),
    Error(String),
}

/// Application state, the root view.
pub(crate) struct App {
    pub config: AppConfig,

    pub theme: Theme,

    pub event_tx: UnboundedSender<AppEvent>,
    pub event_rx: UnboundedReceiver<AppEvent>,

    pub task_tx: TaskSender,

    pub autocomplete: AutocompleteController,
    pub recommendations: RecommendationController,

    /// Display labels of chosen tracks, remembered at the time of choosing.
    pub chosen_labels: HashMap<TrackId, String>,

    pub status: Option<StatusLine>,
}

impl App {
    /// Create a new instance of application state.
    pub fn new(config: AppConfig, task_tx: TaskSender) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();

        let (selection_writer, selection_reader) = selection_store();

        let autocomplete = AutocompleteController::new(
            AutocompleteSettings::from(&config),
            selection_writer,
            task_tx.clone(),
        );
        let recommendations = RecommendationController::new(
            selection_reader,
            config.recommendation_count,
            task_tx.clone(),
        );

        Self {
            config,
            theme: Theme::default(),
            event_tx,
            event_rx,
            task_tx,
            autocomplete,
            recommendations,
            chosen_labels: HashMap::new(),
            status: None,
        }
    }

    /// The label to show for a chosen track, falling back to its identifier.
    pub fn chosen_label(&self, id: &TrackId) -> String {
        self.chosen_labels
            .get(id)
            .cloned()
            .unwrap_or_else(|| id.to_string())
    }
}

/// The entry point of the application.
///
/// Loads the configuration, starts logging, manages the terminal lifecycle,
/// and returns an error if any part of the execution fails.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = config::load_config();
    config.validate().context("Invalid configuration")?;

    let _log_guard = logging::init_logging(config::config_dir())?;
    tracing::info!(api_url = %config.api_url, "Starting");

    let catalog = HttpCatalog::new(&config.api_url, config.request_timeout())
        .context("Failed to create catalog client")?;

    let (task_tx, task_rx) = mpsc::unbounded_channel();

    let mut app = App::new(config, task_tx);

    let mut terminal = setup_terminal()?;
    let res = run(&mut terminal, &mut app, Arc::new(catalog), task_rx).await;
    restore_terminal(&mut terminal);

    res.context("Application error occurred")
}

/// Prepares the terminal for the TUI application.
///
/// This function enables raw mode to capture all keyboard input, switches to
/// the alternate screen buffer and turns on mouse reporting.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`] and makes the cursor
/// visible again.
///
/// This function is "best-effort" and does not return a result, as it is
/// called during cleanup.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture).ok();
    terminal.show_cursor().ok();
}

/// Starts the application's background workers and enters the main event loop.
///
/// This function spawns:
/// * The task worker executing [`AppTask`]s against the catalog service.
/// * An input thread forwarding terminal events.
///
/// After spawning the workers, it hands control to [`process_events`] to
/// manage the UI and state updates.
///
/// # Errors
///
/// Returns an error if the event processing loop encounters an unrecoverable
/// application error.
async fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    catalog: Arc<dyn CatalogApi>,
    task_rx: UnboundedReceiver<AppTask>,
) -> Result<()> {
    tasks::spawn_task_worker(catalog, task_rx, app.event_tx.clone());

    // Spawn a thread to translate raw terminal events to application events,
    // crossterm's read blocks so it cannot live on the runtime.
    let tx_input = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            let event = match event::read() {
                Ok(event::Event::Key(key)) if key.kind != KeyEventKind::Release => AppEvent::Key(key),
                Ok(event::Event::Mouse(mouse)) => AppEvent::Mouse(mouse),
                Ok(event::Event::Resize(_, _)) => AppEvent::Resize,
                Ok(_) => continue,
                Err(e) => {
                    tracing::error!(error = %e, "Failed to read terminal input");
                    break;
                }
            };

            if tx_input.send(event).is_err() {
                break;
            }
        }
    });

    // Initial liveness check, reported in the status line
    app.task_tx
        .send(AppTask::CheckService)
        .context("Task worker is not running")?;

    // Application event loop, process events until the user quits
    process_events(terminal, app).await
}
