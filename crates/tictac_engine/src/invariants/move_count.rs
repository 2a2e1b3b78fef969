//! Move count invariant: history and board agree.

use super::Invariant;
use crate::GameSession;

/// Invariant: the number of accepted moves equals the number of occupied
/// cells, and every recorded move is visible on the board.
pub struct MoveCountInvariant;

impl Invariant<GameSession> for MoveCountInvariant {
    fn holds(game: &GameSession) -> bool {
        let board = game.board();
        game.move_count() == board.occupied()
            && game
                .history()
                .iter()
                .all(|mv| board.get(mv.position).mark() == Some(mv.mark))
    }

    fn description() -> &'static str {
        "Move count equals the number of occupied cells"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_game_holds() {
        assert!(MoveCountInvariant::holds(&GameSession::new(None, None)));
    }

    #[test]
    fn test_rejected_moves_do_not_count() {
        let mut game = GameSession::new(None, None);
        game.apply_move(0, 0).unwrap();
        let _ = game.apply_move(0, 0);
        let _ = game.apply_move(7, 7);
        assert_eq!(game.move_count(), 1);
        assert!(MoveCountInvariant::holds(&game));
    }

    #[test]
    fn test_lost_history_violates() {
        let mut game = GameSession::new(None, None);
        game.apply_move(0, 0).unwrap();
        game.history.clear();
        assert!(!MoveCountInvariant::holds(&game));
    }
}
