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

//! Application-level errors.
//!
//! Every failure talking to the catalog service ends up as an [`AppError`].
//! None of them are fatal: the controllers log them and degrade to an empty
//! suggestion list or the last good set of recommendations.

#[derive(thiserror::Error, Debug)]
pub(crate) enum AppError {
    /// Transport failure, timeout or an undecodable response body.
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered, but not with a success status.
    #[error("Catalog service returned status {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl AppError {
    pub(crate) fn is_timeout(&self) -> bool {
        matches!(self, AppError::Http(e) if e.is_timeout())
    }
}

pub(crate) type AppResult<T> = Result<T, AppError>;
