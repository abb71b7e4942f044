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

//! Domain models and core data structures.
//!
//! This module defines the entities exchanged with the catalog service
//! (suggestions and recommendations) and the opaque track identifier that
//! ties them together.

pub(crate) mod selection;

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// An opaque track identifier.
///
/// The catalog service decides the shape of its identifiers, so whatever was
/// received is sent back verbatim: a JSON string stays a string and a JSON
/// number keeps its exact representation, whether integer, unsigned beyond
/// `i64` or float.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub(crate) enum TrackId {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackId::Number(n) => write!(f, "{n}"),
            TrackId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for TrackId {
    fn from(value: i64) -> Self {
        TrackId::Number(value.into())
    }
}

impl From<&str> for TrackId {
    fn from(value: &str) -> Self {
        TrackId::Text(value.to_string())
    }
}

/// Reads a text field that the service may send as `null`.
fn text_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// One autocomplete entry.
///
/// A batch of suggestions is always replaced wholesale, never merged.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(crate) struct Suggestion {
    #[serde(rename = "track_id")]
    pub(crate) id: TrackId,
    #[serde(rename = "track_artist", default, deserialize_with = "text_or_empty")]
    pub(crate) display_artist: String,
    #[serde(rename = "track_name", default, deserialize_with = "text_or_empty")]
    pub(crate) display_name: String,
    #[serde(default)]
    pub(crate) image_url: Option<String>,
    #[serde(default)]
    pub(crate) uri: Option<String>,
}

impl Suggestion {
    /// The text shown in the dropdown, "<name> by <artists>" as composed by
    /// the service, falling back to the bare track name.
    pub(crate) fn label(&self) -> &str {
        if self.display_artist.is_empty() {
            &self.display_name
        } else {
            &self.display_artist
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(crate) struct Recommendation {
    pub(crate) track_id: TrackId,
    #[serde(default, deserialize_with = "text_or_empty")]
    pub(crate) track_name: String,
    #[serde(default, deserialize_with = "text_or_empty")]
    pub(crate) artists: String,
    #[serde(default)]
    pub(crate) image_url: Option<String>,
    #[serde(default)]
    pub(crate) uri: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggestion_tolerates_missing_fields() {
        let batch: Vec<Suggestion> = serde_json::from_str(
            r#"[{"track_id": 1, "track_artist": "A"}, {"track_id": "2x", "track_name": "B"}]"#,
        )
        .unwrap();

        assert_eq!(batch[0].id, TrackId::from(1));
        assert_eq!(batch[0].label(), "A");
        assert_eq!(batch[0].image_url, None);
        assert_eq!(batch[1].id, TrackId::Text("2x".to_string()));
        assert_eq!(batch[1].label(), "B");
    }

    #[test]
    fn track_id_keeps_its_json_shape() {
        let ids = vec![TrackId::from(2), TrackId::from("6rqhFgbbKwnb9MLmUQDhG6")];
        let json = serde_json::to_value(&ids).unwrap();

        assert_eq!(json, serde_json::json!([2, "6rqhFgbbKwnb9MLmUQDhG6"]));
        assert_eq!(ids[1].to_string(), "6rqhFgbbKwnb9MLmUQDhG6");
    }

    #[test]
    fn recommendation_reads_service_payload() {
        let recs: Vec<Recommendation> = serde_json::from_str(
            r#"[{
                "track_id": "abc",
                "track_name": "Song",
                "artists": "X, Y",
                "track_artist": "Song by X, Y",
                "image_url": "https://i.example/1.jpg",
                "uri": "spotify:track:abc"
            }]"#,
        )
        .unwrap();

        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].artists, "X, Y");
        assert_eq!(recs[0].uri.as_deref(), Some("spotify:track:abc"));
    }

    #[test]
    fn unusual_ids_and_null_text_do_not_spoil_the_batch() {
        let body = r#"[
            {"track_id": 1.0, "track_artist": null, "track_name": "Float"},
            {"track_id": 18446744073709551615, "track_artist": "Big"},
            {"track_id": -4, "track_artist": "Negative", "image_url": null}
        ]"#;
        let batch: Vec<Suggestion> = serde_json::from_str(body).unwrap();

        assert_eq!(batch.len(), 3);
        assert_eq!(batch[0].label(), "Float");
        assert_eq!(batch[1].id.to_string(), "18446744073709551615");
        assert_eq!(batch[2].id, TrackId::from(-4));

        let echoed = serde_json::to_value(batch.iter().map(|s| &s.id).collect::<Vec<_>>()).unwrap();
        assert_eq!(echoed, serde_json::json!([1.0, 18446744073709551615u64, -4]));

        let recs: Vec<Recommendation> =
            serde_json::from_str(r#"[{"track_id": "x", "track_name": null, "artists": null}]"#).unwrap();
        assert_eq!(recs[0].track_name, "");
        assert_eq!(recs[0].artists, "");
    }
}
