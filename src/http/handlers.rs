//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! repository for storage access.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::dto::{HealthResponse, ShowListResponse, ShowResponse};
use super::error::AppError;
use super::state::AppState;
use super::validation;
use crate::models::{Show, ShowId};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// GET /health
///
/// Health check endpoint to verify the service is running.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
    })
}

/// GET /shows
///
/// List the full show catalogue. Always succeeds; an empty collection
/// yields an empty sequence.
pub async fn list_shows(State(state): State<AppState>) -> HandlerResult<ShowListResponse> {
    let shows = state.repository.list_shows().await?;

    Ok(Json(ShowListResponse { shows }))
}

/// GET /shows/{id}
///
/// Fetch a single show by id. A non-numeric path segment behaves as an id
/// that matches nothing, so it falls through to the same 404.
pub async fn get_show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> HandlerResult<ShowResponse> {
    let id = id.parse::<i64>().unwrap_or(-1);

    let show = state
        .repository
        .fetch_show(ShowId::new(id))
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(Json(ShowResponse { show }))
}

/// POST /shows
///
/// Register a new show. The body is validated field by field; the first
/// failure answers 400 with the bare message. On success the created record
/// is returned unwrapped with a 201.
pub async fn create_show(
    State(state): State<AppState>,
    Json(body): Json<serde_json::Value>,
) -> Result<(StatusCode, Json<Show>), AppError> {
    let candidate = validation::validate_new_show(&body)?;

    let added = state.repository.add_show(candidate).await?;

    Ok((StatusCode::CREATED, Json(added)))
}
