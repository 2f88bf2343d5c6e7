// ============================
// games-backend-lib/src/router.rs
// ============================
//! HTTP router for the games API.
use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::handlers::games::{create_game, delete_game, get_game, list_games, update_game};
use crate::storage::GameStore;
use crate::AppState;

/// Create the games router
pub fn create_router<S: GameStore + 'static>(state: Arc<AppState<S>>) -> Router {
    Router::new()
        .route("/games", get(list_games::<S>).post(create_game::<S>))
        .route(
            "/games/{name}",
            get(get_game::<S>)
                .put(update_game::<S>)
                .delete(delete_game::<S>),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
