//! Core domain types for tic-tac-toe.

use crate::action::MoveError;
use crate::position::{Position, WinningLine};
use serde::{Deserialize, Serialize};

/// A player's symbol on the board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
)]
pub enum Mark {
    /// First player (always opens the game).
    X,
    /// Second player.
    O,
}

impl Mark {
    /// Returns the opponent's mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A single square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here yet.
    #[default]
    Empty,
    /// Square claimed by a mark. Never changes afterwards.
    Occupied(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Cells can only go from empty to occupied; the only way back is
/// replacing the whole board with [`Board::new`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order.
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.index()]
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Claims an empty cell for `mark`.
    pub(crate) fn place(&mut self, pos: Position, mark: Mark) -> Result<(), MoveError> {
        let cell = &mut self.cells[pos.index()];
        if *cell != Cell::Empty {
            return Err(MoveError::CellOccupied(pos));
        }
        *cell = Cell::Occupied(mark);
        Ok(())
    }

    /// Number of occupied cells.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| **c != Cell::Empty).count()
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| *c != Cell::Empty)
    }

    /// Returns the board as a row-major grid of optional marks.
    pub fn rows(&self) -> [[Option<Mark>; 3]; 3] {
        let mut grid = [[None; 3]; 3];
        for pos in Position::ALL {
            grid[pos.row()][pos.col()] = self.get(pos).mark();
        }
        grid
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let idx = row * 3 + col;
                match self.cells[idx] {
                    Cell::Empty => write!(f, "{}", idx + 1)?,
                    Cell::Occupied(mark) => write!(f, "{}", mark)?,
                }
                if col < 2 {
                    f.write_str("|")?;
                }
            }
            if row < 2 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Classification of a game.
///
/// Only moves forward: `InProgress` becomes `Won` or `Draw`, and both of
/// those are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    /// Moves are still accepted.
    #[default]
    InProgress,
    /// A mark completed a line.
    Won {
        /// The winning mark.
        winner: Mark,
        /// The three cells that won it.
        line: WinningLine,
    },
    /// Board full with no line.
    Draw,
}

impl Outcome {
    /// True once the game is decided.
    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// True for a drawn game.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }

    /// The winning mark, if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Won { winner, .. } => Some(*winner),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }

    /// The completed line, if there is one.
    pub fn winning_line(&self) -> Option<WinningLine> {
        match self {
            Outcome::Won { line, .. } => Some(*line),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }
}
