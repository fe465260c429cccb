//! `/player` endpoints. Players are addressed by path segment.

use arena_core::{NewPlayer, Player, Rename};
use axum::Json;
use axum::body::Bytes;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use tracing::info;

use super::decode;
use crate::error::ApiError;
use crate::state::AppState;

/// `POST /player`
pub async fn create(State(state): State<AppState>, body: Bytes) -> Result<Json<Player>, ApiError> {
    let req: NewPlayer = decode(&body)?;
    let player = state.store.add_player(req)?;
    info!(nickname = %player.nickname, "player created");
    Ok(Json(player))
}

/// `GET /player`
pub async fn list(State(state): State<AppState>) -> Json<Vec<Player>> {
    Json(state.store.players())
}

/// `GET /player/{nickname}`
pub async fn show(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Player>, ApiError> {
    let Path(nickname) = path?;
    Ok(Json(state.store.player(&nickname)?))
}

/// `PUT /player/{nickname}`
pub async fn rename(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    body: Bytes,
) -> Result<Json<Player>, ApiError> {
    let Path(nickname) = path?;
    let req: Rename = decode(&body)?;
    let player = state
        .store
        .rename_player(&nickname, req)
        .map_err(ApiError::bad_reference)?;
    info!(from = %nickname, to = %player.nickname, "player renamed");
    Ok(Json(player))
}

/// `DELETE /player/{nickname}`
pub async fn remove(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(nickname) = path?;
    state.store.remove_player(&nickname)?;
    info!(%nickname, "player deleted");
    Ok(StatusCode::NO_CONTENT)
}
