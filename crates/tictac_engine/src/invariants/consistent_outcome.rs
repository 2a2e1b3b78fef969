//! Outcome consistency invariant: the recorded outcome matches the board.

use super::Invariant;
use crate::{GameSession, rules};

/// Invariant: the session's outcome is exactly what the rules derive from
/// its board. Won only with a complete line for that mark, Draw only on a
/// full board without one.
pub struct ConsistentOutcomeInvariant;

impl Invariant<GameSession> for ConsistentOutcomeInvariant {
    fn holds(game: &GameSession) -> bool {
        rules::evaluate(game.board()) == *game.outcome()
    }

    fn description() -> &'static str {
        "Outcome matches the board"
    }
}
