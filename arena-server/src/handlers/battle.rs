//! `/battle` endpoints.

use arena_core::{Battle, BattleOutcome, StartBattle};
use axum::Json;
use axum::body::Bytes;
use axum::extract::State;

use super::decode;
use crate::error::ApiError;
use crate::state::AppState;

/// `POST /battle` — resolve one exchange. A missing side is a bad request.
pub async fn start(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<BattleOutcome>, ApiError> {
    let req: StartBattle = decode(&body)?;
    let outcome = state.store.start_battle(req).map_err(ApiError::bad_reference)?;
    Ok(Json(outcome))
}

/// `GET /battle`
pub async fn list(State(state): State<AppState>) -> Json<Vec<Battle>> {
    Json(state.store.battles())
}
