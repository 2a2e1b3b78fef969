//! Alternating turn invariant: X, O, X, O, ...

use super::Invariant;
use crate::{GameSession, Mark};

/// Invariant: marks alternate starting with X, and while the game is in
/// progress the player to move is X after an even number of moves.
pub struct AlternatingTurnInvariant;

impl Invariant<GameSession> for AlternatingTurnInvariant {
    fn holds(game: &GameSession) -> bool {
        let alternates = game
            .history()
            .iter()
            .enumerate()
            .all(|(i, mv)| mv.mark == if i % 2 == 0 { Mark::X } else { Mark::O });

        if !alternates {
            return false;
        }

        if game.outcome().is_over() {
            // Turn is frozen at the player who finished the game
            return game.history().last().map(|mv| mv.mark) == Some(game.current_turn());
        }

        let expected_next = if game.move_count() % 2 == 0 {
            Mark::X
        } else {
            Mark::O
        };
        game.current_turn() == expected_next
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
