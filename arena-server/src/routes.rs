//! Route table.

use axum::Router;
use axum::routing::get;

use crate::handlers::{self, battle, enemy, player};
use crate::state::AppState;

/// Build the application router over `state`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/player", get(player::list).post(player::create))
        .route(
            "/player/{nickname}",
            get(player::show).put(player::rename).delete(player::remove),
        )
        .route(
            "/enemy",
            get(enemy::index)
                .post(enemy::create)
                .put(enemy::rename_by_query)
                .delete(enemy::remove_by_query),
        )
        .route(
            "/enemy/{nickname}",
            get(enemy::show).put(enemy::rename).delete(enemy::remove),
        )
        .route("/battle", get(battle::list).post(battle::start))
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .fallback(handlers::not_found)
        .with_state(state)
}
