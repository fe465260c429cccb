//! `/enemy` endpoints.
//!
//! Enemies can be addressed either with `?nickname=` on `/enemy` or with a
//! path segment like players. Both forms share the same logic.

use arena_core::{Enemy, NewEnemy, Rename};
use axum::Json;
use axum::body::Bytes;
use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::info;

use super::{NicknameQuery, decode};
use crate::error::ApiError;
use crate::state::AppState;

/// `POST /enemy`
pub async fn create(State(state): State<AppState>, body: Bytes) -> Result<Json<Enemy>, ApiError> {
    let req: NewEnemy = decode(&body)?;
    let enemy = state.store.add_enemy(req)?;
    info!(
        nickname = %enemy.nickname,
        life = enemy.life,
        attack = enemy.attack,
        "enemy created"
    );
    Ok(Json(enemy))
}

/// `GET /enemy` lists every enemy; `GET /enemy?nickname=` fetches one.
pub async fn index(
    State(state): State<AppState>,
    query: Result<Query<NicknameQuery>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(query) = query?;
    match query.nickname {
        Some(nickname) => Ok(fetch(&state, &nickname)?.into_response()),
        None => Ok(Json(state.store.enemies()).into_response()),
    }
}

/// `GET /enemy/{nickname}`
pub async fn show(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Enemy>, ApiError> {
    let Path(nickname) = path?;
    fetch(&state, &nickname)
}

/// `PUT /enemy?nickname=`
pub async fn rename_by_query(
    State(state): State<AppState>,
    query: Result<Query<NicknameQuery>, QueryRejection>,
    body: Bytes,
) -> Result<Json<Enemy>, ApiError> {
    let Query(query) = query?;
    apply_rename(&state, &query.nickname.unwrap_or_default(), &body)
}

/// `PUT /enemy/{nickname}`
pub async fn rename(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    body: Bytes,
) -> Result<Json<Enemy>, ApiError> {
    let Path(nickname) = path?;
    apply_rename(&state, &nickname, &body)
}

/// `DELETE /enemy?nickname=`
pub async fn remove_by_query(
    State(state): State<AppState>,
    query: Result<Query<NicknameQuery>, QueryRejection>,
) -> Result<StatusCode, ApiError> {
    let Query(query) = query?;
    apply_remove(&state, &query.nickname.unwrap_or_default())
}

/// `DELETE /enemy/{nickname}`
pub async fn remove(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(nickname) = path?;
    apply_remove(&state, &nickname)
}

fn fetch(state: &AppState, nickname: &str) -> Result<Json<Enemy>, ApiError> {
    Ok(Json(state.store.enemy(nickname)?))
}

fn apply_rename(state: &AppState, nickname: &str, body: &Bytes) -> Result<Json<Enemy>, ApiError> {
    let req: Rename = decode(body)?;
    let enemy = state
        .store
        .rename_enemy(nickname, req)
        .map_err(ApiError::bad_reference)?;
    info!(from = nickname, to = %enemy.nickname, "enemy renamed");
    Ok(Json(enemy))
}

fn apply_remove(state: &AppState, nickname: &str) -> Result<StatusCode, ApiError> {
    state.store.remove_enemy(nickname)?;
    info!(nickname, "enemy deleted");
    Ok(StatusCode::NO_CONTENT)
}
