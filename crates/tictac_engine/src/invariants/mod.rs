//! First-class invariants for game sessions.
//!
//! Invariants are logical properties that must hold after every accepted
//! move and every reset. Sessions assert them in debug builds; they are
//! also testable on their own.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invariant violated: {description}")]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for triples of invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns every violation, not just the first.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }
        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }
        collect(violations)
    }
}

pub mod alternating_turn;
pub mod consistent_outcome;
pub mod move_count;

pub use alternating_turn::AlternatingTurnInvariant;
pub use consistent_outcome::ConsistentOutcomeInvariant;
pub use move_count::MoveCountInvariant;

/// All session invariants as a composable set.
pub type SessionInvariants = (
    MoveCountInvariant,
    AlternatingTurnInvariant,
    ConsistentOutcomeInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, GameSession, Mark, Position};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        let game = GameSession::new(None, None);
        assert!(SessionInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let mut game = GameSession::new(None, None);
        for (row, col) in [(0, 0), (1, 1), (2, 2)] {
            game.apply_move(row, col).unwrap();
        }
        assert!(SessionInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_detects_violations() {
        let mut game = GameSession::new(None, None);
        game.apply_move(1, 1).unwrap();

        // Write a cell behind the session's back
        game.board
            .place(Position::new(0, 0).unwrap(), Mark::O)
            .unwrap();
        assert_eq!(game.board.get(Position::new(0, 0).unwrap()), Cell::Occupied(Mark::O));

        let violations = SessionInvariants::check_all(&game).unwrap_err();
        assert!(
            violations
                .iter()
                .any(|v| v.description == MoveCountInvariant::description())
        );
    }
}
