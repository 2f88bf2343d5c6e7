// ============================
// crates/backend-lib/src/handlers/games.rs
// ============================
//! Handlers for the `/games` resource.
//!
//! Each handler forwards to the store and only picks the status code:
//! - `POST /games` upserts and answers 201 with the stored record
//! - `GET /games/{name}` answers 200, or 404 with an empty body
//! - `GET /games` answers 200 with every live record
//! - `PUT /games/{name}` answers 204, or the store's error
//! - `DELETE /games/{name}` always answers 204
use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use games_common::Game;
use metrics::counter;
use tracing::info;

use crate::error::AppError;
use crate::metrics::HTTP_NOT_FOUND;
use crate::storage::GameStore;
use crate::AppState;

/// Parse an optional JSON game body; an empty body yields `Game::default()`
fn parse_optional_game(body: &Bytes) -> Result<Game, AppError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Game::default());
    }
    Ok(serde_json::from_slice(body)?)
}

/// Parse a required JSON game body
fn parse_game(body: &Bytes) -> Result<Game, AppError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(AppError::InvalidInput("request body is required".to_string()));
    }
    Ok(serde_json::from_slice(body)?)
}

pub async fn create_game<S: GameStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    body: Bytes,
) -> Result<(StatusCode, Json<Game>), AppError> {
    let game = parse_optional_game(&body)?;
    info!(name = %game.name, "create game requested");

    let created = state.games.create(game);
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn get_game<S: GameStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Path(name): Path<String>,
) -> Response {
    match state.games.get_by_name(&name) {
        Some(game) => (StatusCode::OK, Json(game)).into_response(),
        None => {
            counter!(HTTP_NOT_FOUND).increment(1);
            StatusCode::NOT_FOUND.into_response()
        },
    }
}

pub async fn list_games<S: GameStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
) -> Json<Vec<Game>> {
    Json(state.games.get_all())
}

pub async fn update_game<S: GameStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Path(name): Path<String>,
    body: Bytes,
) -> Result<StatusCode, AppError> {
    let game = parse_game(&body)?;

    state.games.update(&name, game).inspect_err(|e| {
        if matches!(e, AppError::GameNotFound(_)) {
            counter!(HTTP_NOT_FOUND).increment(1);
        }
    })?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_game<S: GameStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Path(name): Path<String>,
) -> StatusCode {
    state.games.delete(&name);
    StatusCode::NO_CONTENT
}
