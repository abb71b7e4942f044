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

//! Application configuration.
//!
//! This module manages the application configuration file: where the catalog
//! service lives and how eagerly the search box talks to it.

use std::{path::PathBuf, time::Duration};

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

pub(crate) const CONFIG_NAME: &str = "trackrec";

/// Queries of two characters or fewer are never sent for autocompletion.
pub(crate) const MIN_QUERY_LEN_FLOOR: usize = 3;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub version: u32,
    /// Base URL of the catalog service API, without a trailing slash.
    pub api_url: String,
    /// How many recommendations to ask for.
    pub recommendation_count: usize,
    /// Quiet period after the last keystroke before suggestions are fetched.
    pub debounce_ms: u64,
    /// Shortest query, in characters, that is ever sent for autocompletion.
    pub min_query_len: usize,
    pub request_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            api_url: "http://localhost:5000/api/v1".to_string(),
            recommendation_count: 5,
            debounce_ms: 300,
            min_query_len: 3,
            request_timeout_secs: 10,
        }
    }
}

impl AppConfig {
    pub(crate) fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub(crate) fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Rejects values the controllers cannot work with.
    pub(crate) fn validate(&self) -> AppResult<()> {
        if self.api_url.trim().is_empty() {
            return Err(AppError::Config("api_url must not be empty".to_string()));
        }
        if self.recommendation_count == 0 {
            return Err(AppError::Config(
                "recommendation_count must be at least 1".to_string(),
            ));
        }
        if self.min_query_len < MIN_QUERY_LEN_FLOOR {
            return Err(AppError::Config(format!(
                "min_query_len must be at least {MIN_QUERY_LEN_FLOOR}"
            )));
        }
        if self.request_timeout_secs == 0 {
            return Err(AppError::Config(
                "request_timeout_secs must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

pub fn load_config() -> AppConfig {
    confy::load(CONFIG_NAME, None).unwrap_or_default()
}

/// Directory holding the configuration file, also used for the log file.
pub(crate) fn config_dir() -> Option<PathBuf> {
    confy::get_configuration_file_path(CONFIG_NAME, None)
        .ok()
        .and_then(|path| path.parent().map(PathBuf::from))
}
