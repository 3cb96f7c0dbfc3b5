//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures internal errors to
//! Sentry before responding to the client. All route handlers return
//! `Result<T, AppError>`; nothing propagates to the transport layer
//! unhandled.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

use crate::db::StoreError;
use crate::services::issuer::IssueError;

/// Application-level error type for the pass API.
#[derive(Debug, Error)]
pub enum AppError {
    /// Bad request from client. Never retried, never logged as a failure.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The scanned code matches no issued pass. An expected outcome with a
    /// structured body, not an internal failure.
    #[error("Pass not found")]
    PassNotFound,

    /// Internal or dependency failure, reported with its description.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<IssueError> for AppError {
    fn from(err: IssueError) -> Self {
        match err {
            IssueError::InvalidRequest(e) => Self::BadRequest(e.to_string()),
            other => Self::Internal(other.to_string()),
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        Self::Internal(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture server errors to Sentry
        if matches!(self, Self::Internal(_)) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let (status, body) = match &self {
            Self::BadRequest(message) => (StatusCode::BAD_REQUEST, json!({ "error": message })),
            Self::PassNotFound => (
                StatusCode::NOT_FOUND,
                json!({ "status": "invalid", "message": "Pass not found" }),
            ),
            Self::Internal(message) => {
                (StatusCode::INTERNAL_SERVER_ERROR, json!({ "error": message }))
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use gatepass_core::IssueRequestError;

    use super::*;

    fn get_status(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_app_error_status_codes() {
        assert_eq!(
            get_status(AppError::BadRequest("test".to_string())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(get_status(AppError::PassNotFound), StatusCode::NOT_FOUND);
        assert_eq!(
            get_status(AppError::Internal("test".to_string())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_invalid_request_maps_to_bad_request() {
        let err = AppError::from(IssueError::InvalidRequest(IssueRequestError::MissingFields));
        match err {
            AppError::BadRequest(message) => {
                assert_eq!(message, "Missing required form fields");
            }
            other => panic!("expected BadRequest, got {other:?}"),
        }
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::BadRequest("invalid input".to_string());
        assert_eq!(err.to_string(), "Bad request: invalid input");

        assert_eq!(AppError::PassNotFound.to_string(), "Pass not found");
    }
}
