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

//! Interactive components of the root view.
//!
//! Each component keeps its state and behaviour in `mod.rs`, maps terminal
//! input in `event.rs` where it takes any, and draws itself in `render.rs`.

mod autocomplete;
mod recommendations;

pub(crate) use autocomplete::{
    AutocompleteAction, AutocompleteController, AutocompletePhase, AutocompleteSettings,
};
pub(crate) use recommendations::RecommendationController;

/// What a controller made of an asynchronous completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Outcome {
    /// Visible state was updated.
    Applied,
    /// The completion belonged to superseded input and was dropped.
    Stale,
    /// The request failed; the message is suitable for the status line.
    Failed(String),
}
