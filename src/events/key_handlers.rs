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

//! Keyboard routing.

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

use crate::{App, events::AppEvent};

use super::handlers::handle_autocomplete_action;

/// Maps keyboard input to application actions.
///
/// Application control keys are handled here; everything else belongs to the
/// search box, which either edits the query or moves through and commits
/// suggestions.
///
/// # Errors
///
/// Returns an error if the exit request cannot be posted to the event loop.
pub(super) fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if process_global_key_event(app, key)? {
        return Ok(());
    }

    if let Some(action) = app.autocomplete.process_event(&Event::Key(key)) {
        handle_autocomplete_action(app, action);
    }

    Ok(())
}

fn process_global_key_event(app: &mut App, key: KeyEvent) -> Result<bool> {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) | (KeyCode::Char('q'), KeyModifiers::CONTROL) => {
            app.event_tx.send(AppEvent::ExitApplication)?;
            Ok(true)
        }

        _ => Ok(false),
    }
}
