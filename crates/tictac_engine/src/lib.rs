//! Tictac engine - authoritative tic-tac-toe session logic
//!
//! This crate holds everything needed to referee one game of tic-tac-toe
//! without any I/O: the board, the two marks, move validation, win and
//! draw detection, and the public projection handed to clients.
//!
//! # Architecture
//!
//! - **Types**: marks, cells, the 3x3 board and the game outcome
//! - **Position**: validated `(row, col)` coordinates and winning lines
//! - **Rules**: pure win/draw evaluation over a board
//! - **Session**: the `GameSession` aggregate (apply move, reset)
//! - **View**: serializable snapshots for the request/response boundary
//! - **Invariants**: properties checked after every mutation in debug builds
//!
//! # Example
//!
//! ```
//! use tictac_engine::{GameSession, Mark, Outcome};
//!
//! let mut game = GameSession::new(None, None);
//! for (row, col) in [(0, 0), (0, 1), (1, 1), (0, 2), (2, 2)] {
//!     game.apply_move(row, col).unwrap();
//! }
//! assert_eq!(game.outcome().winner(), Some(Mark::X));
//! assert!(matches!(game.outcome(), Outcome::Won { .. }));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod invariants;
mod position;
pub mod rules;
mod session;
mod types;
mod view;

// Crate-level exports - Domain types
pub use types::{Board, Cell, Mark, Outcome};

// Crate-level exports - Coordinates
pub use position::{Position, WinningLine};

// Crate-level exports - Moves
pub use action::{Move, MoveError, MoveOutcome};

// Crate-level exports - Sessions
pub use session::{DEFAULT_PLAYER1_NAME, DEFAULT_PLAYER2_NAME, GameSession, SessionId};

// Crate-level exports - Public projections
pub use view::{BoardView, GameStatusView, GameView, MoveReport};
