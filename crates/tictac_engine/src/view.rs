//! Serializable snapshots handed across the request/response boundary.
//!
//! Field names are part of the wire contract with the browser client.

use crate::position::WinningLine;
use crate::session::SessionId;
use crate::types::Mark;
use serde::{Deserialize, Serialize};

/// Row-major 3x3 grid; `None` for an empty cell.
pub type BoardView = [[Option<Mark>; 3]; 3];

/// Public projection of a game session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    /// Session identifier.
    pub game_id: SessionId,
    /// Name of the X player.
    pub player1_name: String,
    /// Name of the O player.
    pub player2_name: String,
    /// Mark to move next (last mover once the game is over).
    pub current_player: Mark,
    /// Name of the player holding `current_player`.
    pub current_player_name: String,
    /// Board snapshot.
    pub board: BoardView,
    /// Winning mark, if any.
    pub winner: Option<Mark>,
    /// Winning player's name, if any.
    pub winner_name: Option<String>,
    /// True for a drawn game.
    pub is_draw: bool,
    /// True once won or drawn.
    pub is_game_over: bool,
    /// Cells to highlight for a won game.
    pub winning_line: Option<WinningLine>,
    /// Accepted moves so far.
    pub move_count: usize,
}

/// Outcome of a move request.
///
/// Rejected moves are reported with `success = false` rather than as an
/// error, so clients can tell a malformed request from a refused move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveReport {
    /// Whether the move was applied.
    pub success: bool,
    /// Human-readable result or rejection reason.
    pub message: String,
    /// Session state after the attempt.
    pub game_state: GameView,
}

/// Condensed status of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStatusView {
    /// Session identifier.
    pub game_id: SessionId,
    /// Name of the player to move.
    pub current_player: String,
    /// Winning player's name, if any.
    pub winner: Option<String>,
    /// True for a drawn game.
    pub is_draw: bool,
    /// True once won or drawn.
    pub is_game_over: bool,
    /// Occupied cells.
    pub moves_made: usize,
}
