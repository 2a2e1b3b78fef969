//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Rules are kept apart from session
//! state so they can be evaluated against any board, including ones built
//! by invariant checks.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::find_winner;

use crate::types::{Board, Outcome};
use tracing::instrument;

/// Classifies a board: win check first, then draw check.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some((winner, line)) = find_winner(board) {
        Outcome::Won { winner, line }
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
