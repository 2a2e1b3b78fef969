//! Request and response bodies.

use serde::{Deserialize, Serialize};
use tictac_engine::Mark;

/// Body of `POST /games`. Both names are optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateGameRequest {
    /// Name for the X player.
    #[serde(default)]
    pub player1_name: Option<String>,
    /// Name for the O player.
    #[serde(default)]
    pub player2_name: Option<String>,
}

/// Body of `POST /games/{id}/moves`.
///
/// Coordinates are signed so that out-of-range values reach the game rules
/// and come back as a rejected move instead of a parse failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MakeMoveRequest {
    /// Row (0-2).
    pub row: i64,
    /// Column (0-2).
    pub col: i64,
    /// Mark the caller believes is to move; checked when present.
    #[serde(default)]
    pub player: Option<Mark>,
    /// Name of the player making the move; checked when present.
    #[serde(default)]
    pub player_name: Option<String>,
}

/// Body of `GET /`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Liveness message.
    pub message: String,
    /// Crate version.
    pub version: String,
}
