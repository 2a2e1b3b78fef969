//! Win detection logic for tic-tac-toe.

use crate::position::WinningLine;
use crate::types::{Board, Cell, Mark};
use tracing::instrument;

/// Scans the 8 fixed lines for three matching marks.
///
/// Returns the winning mark together with the first complete line found,
/// `None` otherwise.
#[instrument(skip(board))]
pub fn find_winner(board: &Board) -> Option<(Mark, WinningLine)> {
    WinningLine::ALL.into_iter().find_map(|line| {
        let [a, b, c] = line.positions();
        let first = board.get(a);
        match first {
            Cell::Occupied(mark) if board.get(b) == first && board.get(c) == first => {
                Some((mark, line))
            }
            _ => None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    fn pos(row: i64, col: i64) -> Position {
        Position::new(row, col).unwrap()
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(find_winner(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new();
        for col in 0..3 {
            board.place(pos(0, col), Mark::X).unwrap();
        }
        let (winner, line) = find_winner(&board).unwrap();
        assert_eq!(winner, Mark::X);
        assert_eq!(line.positions(), [pos(0, 0), pos(0, 1), pos(0, 2)]);
    }

    #[test]
    fn test_winner_column() {
        let mut board = Board::new();
        for row in 0..3 {
            board.place(pos(row, 2), Mark::O).unwrap();
        }
        let (winner, line) = find_winner(&board).unwrap();
        assert_eq!(winner, Mark::O);
        assert_eq!(line.positions(), [pos(0, 2), pos(1, 2), pos(2, 2)]);
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let mut board = Board::new();
        board.place(pos(0, 2), Mark::O).unwrap();
        board.place(pos(1, 1), Mark::O).unwrap();
        board.place(pos(2, 0), Mark::O).unwrap();
        let (winner, line) = find_winner(&board).unwrap();
        assert_eq!(winner, Mark::O);
        assert_eq!(line.positions(), [pos(0, 2), pos(1, 1), pos(2, 0)]);
    }

    #[test]
    fn test_mixed_line_does_not_win() {
        let mut board = Board::new();
        board.place(pos(0, 0), Mark::X).unwrap();
        board.place(pos(0, 1), Mark::O).unwrap();
        board.place(pos(0, 2), Mark::X).unwrap();
        assert_eq!(find_winner(&board), None);
    }

    #[test]
    fn test_no_winner_incomplete() {
        let mut board = Board::new();
        board.place(pos(0, 0), Mark::X).unwrap();
        board.place(pos(1, 1), Mark::X).unwrap();
        assert_eq!(find_winner(&board), None);
    }
}
