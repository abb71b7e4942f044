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

//! Catalog service abstraction.
//!
//! The catalog service owns the track index and the ranking model. This
//! application only ever asks it two questions: which tracks match a partial
//! name, and which tracks go well with a given selection.

mod http;

pub(crate) use http::HttpCatalog;

use crate::{
    error::AppResult,
    model::{Recommendation, Suggestion, TrackId},
};

/// Remote lookups used by the controllers.
///
/// Implementations must be shareable across tasks because every request runs
/// as its own task on the runtime.
#[async_trait::async_trait]
pub(crate) trait CatalogApi: Send + Sync {
    /// Tracks whose name matches `query`, in the service's order.
    async fn autocomplete(&self, query: &str) -> AppResult<Vec<Suggestion>>;

    /// Up to `count` tracks recommended for the whole `ids` selection.
    async fn recommend(&self, ids: &[TrackId], count: usize) -> AppResult<Vec<Recommendation>>;

    /// Liveness probe, returning the status text reported by the service.
    async fn status(&self) -> AppResult<String>;
}
