//! Draw detection.

use crate::{Board, Cell};
use tracing::instrument;

/// Checks if the board is full (every cell occupied).
///
/// A full board with no completed line is a draw.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|cell| *cell != Cell::Empty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Coordinate, Mark};

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.set("B1".parse().unwrap(), Cell::Occupied(Mark::X));
        assert!(!is_full(&board));
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for coordinate in Coordinate::ALL {
            board.set(coordinate, Cell::Occupied(Mark::O));
        }
        assert!(is_full(&board));
    }
}
