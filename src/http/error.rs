//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::dto::ErrorMessage;
use super::validation::ValidationError;
use crate::store::RepositoryError;

/// Message returned whenever a show lookup comes up empty.
pub const NO_SHOW_FOUND: &str = "No show found.";

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Requested show does not exist
    NotFound,
    /// Creation payload failed validation; carries the plain-text message
    Validation(String),
    /// Internal server error
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(ErrorMessage {
                    message: NO_SHOW_FOUND.to_string(),
                }),
            )
                .into_response(),
            // Validation failures answer with the bare message string,
            // not a JSON envelope.
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
            AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorMessage { message: msg }),
            )
                .into_response(),
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Validation(err.message().to_string())
    }
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(_) => AppError::NotFound,
            RepositoryError::Internal(msg) => AppError::Internal(msg),
        }
    }
}
