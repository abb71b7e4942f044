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

//! Input handling for the autocomplete controller.
//!
//! This module maps raw terminal keyboard and mouse events to cursor
//! movement, commits and query edits.

use crossterm::event::{Event, KeyCode, MouseButton, MouseEventKind};
use tui_input::backend::crossterm::EventHandler;

use crate::components::{AutocompleteAction, AutocompleteController};

impl AutocompleteController {
    pub(crate) fn process_event(&mut self, event: &Event) -> Option<AutocompleteAction> {
        match event {
            Event::Key(key_event) => match key_event.code {
                KeyCode::Down => {
                    self.select_next();
                    None
                }
                KeyCode::Up => {
                    self.select_previous();
                    None
                }
                KeyCode::Enter => self.commit().map(AutocompleteAction::Chosen),
                KeyCode::Esc => {
                    self.reset();
                    None
                }

                _ => {
                    // Everything else edits the query.
                    let changed = self.input.handle_event(event).is_some_and(|state| state.value);
                    if changed {
                        self.query_changed();
                    }
                    None
                }
            },

            Event::Mouse(mouse_event) => match mouse_event.kind {
                MouseEventKind::Down(MouseButton::Left) => self
                    .suggestion_at(mouse_event.column, mouse_event.row)
                    .and_then(|index| self.choose(index))
                    .map(AutocompleteAction::Chosen),

                _ => None,
            },

            _ => None,
        }
    }

    /// Maps a terminal cell to the index of the suggestion drawn there.
    fn suggestion_at(&self, column: u16, row: u16) -> Option<usize> {
        let area = self.list_area?;
        let inside = column >= area.x
            && column < area.x + area.width
            && row >= area.y
            && row < area.y + area.height;
        if !inside {
            return None;
        }

        let index = self.list_state.offset() + usize::from(row - area.y);
        (index < self.suggestions().len()).then_some(index)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crossterm::event::{KeyEvent, KeyModifiers, MouseEvent};
    use ratatui::layout::Rect;
    use tokio::sync::mpsc::unbounded_channel;

    use super::*;
    use crate::{
        components::AutocompleteSettings,
        model::{TrackId, selection::selection_store},
        tasks::{AppTask, tests::suggestion},
    };

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn click(column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn controller() -> AutocompleteController {
        let (writer, _reader) = selection_store();
        let (task_tx, _task_rx) = unbounded_channel::<AppTask>();
        let settings = AutocompleteSettings {
            debounce: Duration::from_millis(300),
            min_query_len: 3,
        };

        AutocompleteController::new(settings, writer, task_tx)
    }

    fn make_ready(controller: &mut AutocompleteController) {
        for c in "abc".chars() {
            controller.process_event(&key(KeyCode::Char(c)));
        }
        let generation = controller.generation;
        controller.on_debounce_elapsed(generation);
        controller.on_suggestions(generation, Ok(vec![suggestion(1, "A"), suggestion(2, "B")]));
    }

    #[test]
    fn typing_edits_the_query() {
        let mut controller = controller();

        for c in "abd".chars() {
            controller.process_event(&key(KeyCode::Char(c)));
        }
        controller.process_event(&key(KeyCode::Backspace));

        assert_eq!(controller.query(), "ab");
    }

    #[test]
    fn arrows_and_enter_commit_a_suggestion() {
        let mut controller = controller();
        make_ready(&mut controller);

        controller.process_event(&key(KeyCode::Down));
        controller.process_event(&key(KeyCode::Down));
        let action = controller.process_event(&key(KeyCode::Enter));

        match action {
            Some(AutocompleteAction::Chosen(chosen)) => assert_eq!(chosen.id, TrackId::from(2)),
            other => panic!("unexpected action {other:?}"),
        }
        assert_eq!(controller.query(), "");
    }

    #[test]
    fn escape_resets_without_commit() {
        let mut controller = controller();
        make_ready(&mut controller);
        controller.process_event(&key(KeyCode::Down));

        let action = controller.process_event(&key(KeyCode::Esc));

        assert_eq!(action, None);
        assert_eq!(controller.query(), "");
        assert!(controller.suggestions().is_empty());
    }

    #[test]
    fn click_on_a_row_chooses_it() {
        let mut controller = controller();
        make_ready(&mut controller);
        controller.list_area = Some(Rect::new(2, 5, 30, 4));

        assert_eq!(controller.process_event(&click(40, 5)), None);
        assert_eq!(controller.process_event(&click(3, 8)), None);

        match controller.process_event(&click(3, 6)) {
            Some(AutocompleteAction::Chosen(chosen)) => assert_eq!(chosen.id, TrackId::from(2)),
            other => panic!("unexpected action {other:?}"),
        }
    }
}
