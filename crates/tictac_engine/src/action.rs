//! Moves and move rejection reasons.
//!
//! A move is a domain event: a mark placed at a position. Accepted moves
//! are recorded in the session history; rejected ones leave no trace.

use crate::position::Position;
use crate::types::{Mark, Outcome};
use serde::{Deserialize, Serialize};

/// An accepted move: a mark placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The mark that was placed.
    pub mark: Mark,
    /// Where it was placed.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position)
    }
}

/// Why a move was rejected.
///
/// Variants are listed in the order the checks run.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Row or column outside `0..=2`.
    #[display("Position ({row}, {col}) is out of bounds (row and column must be 0-2)")]
    InvalidPosition {
        /// Requested row.
        row: i64,
        /// Requested column.
        col: i64,
    },

    /// The game is already won or drawn.
    #[display("Game is already over")]
    GameOver,

    /// The target cell already holds a mark.
    #[display("Position {_0} is already occupied")]
    CellOccupied(Position),

    /// The move was made by name and neither player has that name.
    #[display("No player named {_0:?} in this game")]
    UnknownPlayer(String),

    /// A specific mark was requested but it is the other mark's turn.
    #[display("It is not {attempted}'s turn ({expected} to move)")]
    WrongTurn {
        /// Mark whose turn it is.
        expected: Mark,
        /// Mark that tried to move.
        attempted: Mark,
    },
}

impl std::error::Error for MoveError {}

impl MoveError {
    /// True for malformed coordinates, false for moves the rules refused.
    pub fn is_validation(&self) -> bool {
        matches!(self, MoveError::InvalidPosition { .. })
    }
}

/// Result of an accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// The move that was applied.
    pub played: Move,
    /// The game outcome after the move.
    pub outcome: Outcome,
}
