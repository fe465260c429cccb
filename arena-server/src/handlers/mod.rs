//! Request handlers.
//!
//! Bodies arrive as raw bytes and are decoded here rather than through the
//! `Json` extractor, so a missing content type is accepted and every decode
//! failure maps to the same [`ArenaError::Decode`].

pub mod battle;
pub mod enemy;
pub mod player;

use arena_core::ArenaError;
use axum::body::Bytes;
use axum::http::{Method, StatusCode, Uri};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// `?nickname=` query used by the enemy endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct NicknameQuery {
    /// Target nickname; absent means "list" for GET and "no match" otherwise.
    #[serde(default)]
    pub nickname: Option<String>,
}

/// Decode a JSON request body.
pub(crate) fn decode<T: DeserializeOwned>(body: &Bytes) -> Result<T, ArenaError> {
    serde_json::from_slice(body).map_err(|e| ArenaError::Decode(e.to_string()))
}

/// Fallback for unknown routes.
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::new(StatusCode::NOT_FOUND, format!("No route for {}", uri.path()))
}

/// Fallback for known routes hit with an unsupported method.
pub async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    ApiError::new(
        StatusCode::METHOD_NOT_ALLOWED,
        format!("Method {method} not allowed on {}", uri.path()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use arena_core::NewPlayer;

    #[test]
    fn empty_body_is_decode_error() {
        let err = decode::<NewPlayer>(&Bytes::new()).expect_err("empty");
        assert!(matches!(err, ArenaError::Decode(_)));
    }

    #[test]
    fn wrong_types_are_decode_errors() {
        let body = Bytes::from_static(br#"{"nickname":"hero","life":"lots"}"#);
        let err = decode::<NewPlayer>(&body).expect_err("type mismatch");
        assert!(matches!(err, ArenaError::Decode(_)));
    }
}
