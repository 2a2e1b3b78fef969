//! HTTP handlers for game endpoints.

use super::dto::{CreateGameRequest, HealthResponse, MakeMoveRequest};
use super::error::ApiError;
use crate::store::SessionStore;
use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::de::DeserializeOwned;
use tictac_engine::{BoardView, GameStatusView, GameView, MoveReport};
use tracing::{debug, instrument};

/// Decodes a JSON body regardless of `Content-Type`.
///
/// Decode failures become a 400 `ValidationError` in the usual error body.
fn parse_json<T: DeserializeOwned>(body: &Bytes) -> Result<T, ApiError> {
    serde_json::from_slice(body)
        .map_err(|e| ApiError::bad_request(format!("Invalid request body: {}", e)))
}

/// GET / - liveness check
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        message: "Tic-Tac-Toe Game API is running!".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// POST /games - create a game
///
/// The body is optional; an empty body means default player names.
#[instrument(skip(store, body))]
pub async fn create_game(
    State(store): State<SessionStore>,
    body: Bytes,
) -> Result<(StatusCode, Json<GameView>), ApiError> {
    let req: CreateGameRequest = if body.iter().all(u8::is_ascii_whitespace) {
        CreateGameRequest::default()
    } else {
        parse_json(&body)?
    };
    debug!(?req, "Creating game");

    let view = store.create(req.player1_name, req.player2_name);
    Ok((StatusCode::CREATED, Json(view)))
}

/// GET /games - list live games
#[instrument(skip(store))]
pub async fn list_games(State(store): State<SessionStore>) -> Json<Vec<GameView>> {
    Json(store.list())
}

/// GET /games/{id} - game state
#[instrument(skip(store))]
pub async fn get_game(
    State(store): State<SessionStore>,
    Path(id): Path<String>,
) -> Result<Json<GameView>, ApiError> {
    Ok(Json(store.get(&id)?))
}

/// POST /games/{id}/moves - make a move
///
/// Refused moves answer 200 with `success = false`. The mover may be named
/// by `player` (a mark) or `player_name`, not both.
#[instrument(skip(store, body))]
pub async fn make_move(
    State(store): State<SessionStore>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<MoveReport>, ApiError> {
    let req: MakeMoveRequest = parse_json(&body)?;
    debug!(?req, "Making move");

    let report = match (req.player, req.player_name.as_deref()) {
        (Some(_), Some(_)) => {
            return Err(ApiError::bad_request(
                "Give either player or player_name, not both",
            ));
        }
        (None, Some(name)) => store.apply_move_by_name(&id, name, req.row, req.col)?,
        (player, None) => store.apply_move(&id, req.row, req.col, player)?,
    };
    Ok(Json(report))
}

/// POST /games/{id}/reset - start the game over
#[instrument(skip(store))]
pub async fn reset_game(
    State(store): State<SessionStore>,
    Path(id): Path<String>,
) -> Result<Json<GameView>, ApiError> {
    Ok(Json(store.reset(&id)?))
}

/// DELETE /games/{id} - remove a game
#[instrument(skip(store))]
pub async fn delete_game(
    State(store): State<SessionStore>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    store.delete(&id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /games/{id}/board - board only
#[instrument(skip(store))]
pub async fn get_board(
    State(store): State<SessionStore>,
    Path(id): Path<String>,
) -> Result<Json<BoardView>, ApiError> {
    Ok(Json(store.board(&id)?))
}

/// GET /games/{id}/status - status summary
#[instrument(skip(store))]
pub async fn get_status(
    State(store): State<SessionStore>,
    Path(id): Path<String>,
) -> Result<Json<GameStatusView>, ApiError> {
    Ok(Json(store.status(&id)?))
}
