//! Data Transfer Objects for the HTTP API.
//!
//! GET responses wrap their payload in an envelope key (`shows`, `show`);
//! the creation endpoint returns the created record unwrapped. That
//! asymmetry is part of the wire contract and is preserved deliberately.

use serde::{Deserialize, Serialize};

use crate::models::Show;

/// Response for listing all shows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShowListResponse {
    /// Full ordered show catalogue
    pub shows: Vec<Show>,
}

/// Response for fetching a single show by id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShowResponse {
    /// The matching record
    pub show: Show,
}

/// JSON error body used by the 404 and 500 responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorMessage {
    /// Human-readable error message
    pub message: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
}
