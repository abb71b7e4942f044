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

//! HTTP/JSON client for the catalog service.
//!
//! Endpoints, relative to the configured base URL:
//!
//! * `GET /autocomplete?q=<query>` returns a list of suggestions.
//! * `POST /recommend` with `{"ids": [...], "n_recs": n}` returns a list of
//!   recommendations.
//! * `GET /test` returns an opaque status payload.

use std::time::Duration;

use reqwest::{Client as HttpClient, Response};
use serde::Serialize;

use crate::{
    catalog::CatalogApi,
    error::{AppError, AppResult},
    model::{Recommendation, Suggestion, TrackId},
};

#[derive(Serialize)]
struct RecommendRequest<'a> {
    ids: &'a [TrackId],
    n_recs: usize,
}

#[derive(Clone)]
pub(crate) struct HttpCatalog {
    http_client: HttpClient,
    api_url: String,
}

impl HttpCatalog {
    /// Creates a client for the service at `api_url`, with every request
    /// bounded by `timeout`.
    pub(crate) fn new(api_url: &str, timeout: Duration) -> AppResult<Self> {
        let http_client = HttpClient::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            api_url: api_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_url, path)
    }

    /// Turns a non-success status into an [`AppError::Api`].
    async fn ensure_success(response: Response) -> AppResult<Response> {
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Api { status, body });
        }

        Ok(response)
    }
}

#[async_trait::async_trait]
impl CatalogApi for HttpCatalog {
    async fn autocomplete(&self, query: &str) -> AppResult<Vec<Suggestion>> {
        let response = self
            .http_client
            .get(self.endpoint("autocomplete"))
            .query(&[("q", query)])
            .send()
            .await?;

        let suggestions: Vec<Suggestion> = Self::ensure_success(response).await?.json().await?;

        tracing::debug!(query = %query, count = suggestions.len(), "Autocomplete response");

        Ok(suggestions)
    }

    async fn recommend(&self, ids: &[TrackId], count: usize) -> AppResult<Vec<Recommendation>> {
        let response = self
            .http_client
            .post(self.endpoint("recommend"))
            .json(&RecommendRequest { ids, n_recs: count })
            .send()
            .await?;

        let recommendations: Vec<Recommendation> =
            Self::ensure_success(response).await?.json().await?;

        tracing::debug!(
            selection = ids.len(),
            count = recommendations.len(),
            "Recommendation response"
        );

        Ok(recommendations)
    }

    async fn status(&self) -> AppResult<String> {
        let response = self.http_client.get(self.endpoint("test")).send().await?;

        let payload: serde_json::Value = Self::ensure_success(response).await?.json().await?;

        let status = payload["api_status"]
            .as_str()
            .map(str::to_string)
            .unwrap_or_else(|| payload.to_string());

        Ok(status)
    }
}
