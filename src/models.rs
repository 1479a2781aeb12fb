//! Domain types for the show catalogue.

use serde::{Deserialize, Serialize};

/// Show identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShowId(pub i64);

impl ShowId {
    pub fn new(value: i64) -> Self {
        ShowId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

/// A theatrical show as held by the repository and serialized on the wire.
///
/// `show_id` is assigned by the repository as `collection length + 1` at
/// creation time. `time` is free-form display text (e.g. "7:00 PM"); it is
/// never parsed as a time of day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Show {
    pub show_id: i64,
    pub title: String,
    pub theatre_id: i64,
    pub time: String,
}

/// Candidate fields for a new show, as accepted by the creation endpoint
/// after validation. The repository assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewShow {
    pub title: String,
    pub theatre_id: i64,
    pub time: String,
}
