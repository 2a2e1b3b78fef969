//! Board coordinates and winning lines.

use crate::action::MoveError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A validated cell coordinate, `row` and `col` both in `0..=2`.
///
/// Serialized as a `[row, col]` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "[u8; 2]", try_from = "[i64; 2]")]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::at(0, 0),
        Position::at(0, 1),
        Position::at(0, 2),
        Position::at(1, 0),
        Position::at(1, 1),
        Position::at(1, 2),
        Position::at(2, 0),
        Position::at(2, 1),
        Position::at(2, 2),
    ];

    /// Validates a raw coordinate.
    ///
    /// Takes signed integers so that requests carrying negative values
    /// reach validation instead of failing to parse.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::InvalidPosition`] when either axis is outside `0..=2`.
    #[instrument]
    pub fn new(row: i64, col: i64) -> Result<Self, MoveError> {
        if !(0..=2).contains(&row) || !(0..=2).contains(&col) {
            return Err(MoveError::InvalidPosition { row, col });
        }
        Ok(Self::at(row as u8, col as u8))
    }

    pub(crate) const fn at(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Row index (0 = top).
    pub fn row(self) -> usize {
        self.row as usize
    }

    /// Column index (0 = left).
    pub fn col(self) -> usize {
        self.col as usize
    }

    /// Row-major board index (0-8).
    pub fn index(self) -> usize {
        self.row() * 3 + self.col()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<Position> for [u8; 2] {
    fn from(pos: Position) -> Self {
        [pos.row, pos.col]
    }
}

impl TryFrom<[i64; 2]> for Position {
    type Error = MoveError;

    fn try_from([row, col]: [i64; 2]) -> Result<Self, Self::Error> {
        Position::new(row, col)
    }
}

/// Three positions forming a row, column or diagonal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WinningLine([Position; 3]);

impl WinningLine {
    /// The 8 lines that can win a game.
    pub const ALL: [WinningLine; 8] = [
        // Rows
        WinningLine([Position::at(0, 0), Position::at(0, 1), Position::at(0, 2)]),
        WinningLine([Position::at(1, 0), Position::at(1, 1), Position::at(1, 2)]),
        WinningLine([Position::at(2, 0), Position::at(2, 1), Position::at(2, 2)]),
        // Columns
        WinningLine([Position::at(0, 0), Position::at(1, 0), Position::at(2, 0)]),
        WinningLine([Position::at(0, 1), Position::at(1, 1), Position::at(2, 1)]),
        WinningLine([Position::at(0, 2), Position::at(1, 2), Position::at(2, 2)]),
        // Diagonals
        WinningLine([Position::at(0, 0), Position::at(1, 1), Position::at(2, 2)]),
        WinningLine([Position::at(0, 2), Position::at(1, 1), Position::at(2, 0)]),
    ];

    /// The three positions of this line.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }
}
