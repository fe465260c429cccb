//! HTTP error responses.
//!
//! Every failure leaves a handler as an [`ApiError`] and is rendered as
//! `{"message": "..."}` with a JSON content type. Malformed bodies are client
//! errors (400), not server errors.

use arena_core::ArenaError;
use axum::Json;
use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, error};

/// JSON body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable reason.
    pub message: String,
}

/// A failed request: status code plus message.
#[derive(Debug, Error)]
#[error("{status}: {message}")]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    /// Build an error with an explicit status.
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        let message = message.into();
        if status.is_server_error() {
            error!(%status, %message, "request failed");
        } else {
            debug!(%status, %message, "request rejected");
        }
        Self { status, message }
    }

    /// Map an error where a missing entity was named in the request rather
    /// than addressed as the resource: renames and battles. `NotFound`
    /// becomes 400 instead of 404.
    pub fn bad_reference(err: ArenaError) -> Self {
        match err {
            ArenaError::NotFound { .. } => Self::new(StatusCode::BAD_REQUEST, err.to_string()),
            other => other.into(),
        }
    }

    /// Status code that will be sent.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Message that will be sent.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Default status for each error kind.
pub fn status_for(err: &ArenaError) -> StatusCode {
    match err {
        ArenaError::Decode(_)
        | ArenaError::Validation { .. }
        | ArenaError::Range { .. }
        | ArenaError::Conflict { .. } => StatusCode::BAD_REQUEST,
        ArenaError::NotFound { .. } => StatusCode::NOT_FOUND,
        ArenaError::Config(_) | ArenaError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl From<ArenaError> for ApiError {
    fn from(err: ArenaError) -> Self {
        Self::new(status_for(&err), err.to_string())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::new(rejection.status(), rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::new(rejection.status(), rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorBody {
                message: self.message,
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arena_core::EntityKind;

    #[test]
    fn client_mistakes_are_bad_requests() {
        let cases = [
            ArenaError::Decode("expected value".into()),
            ArenaError::Validation {
                kind: EntityKind::Player,
                fields: "nickname",
            },
            ArenaError::Range {
                kind: EntityKind::Player,
                field: "life",
                min: 1,
                max: 100,
            },
            ArenaError::conflict(EntityKind::Enemy, "orc"),
        ];
        for err in cases {
            assert_eq!(ApiError::from(err).status(), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn not_found_depends_on_context() {
        let lookup = ApiError::from(ArenaError::not_found(EntityKind::Player, "hero"));
        assert_eq!(lookup.status(), StatusCode::NOT_FOUND);

        let reference = ApiError::bad_reference(ArenaError::not_found(EntityKind::Player, "hero"));
        assert_eq!(reference.status(), StatusCode::BAD_REQUEST);
        assert_eq!(reference.message(), "Player nickname not found: hero");
    }

    #[test]
    fn bad_reference_keeps_other_statuses() {
        let err = ApiError::bad_reference(ArenaError::Config("boom".into()));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
