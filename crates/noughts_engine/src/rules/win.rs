//! Win detection.

use crate::{Board, Cell, Coordinate, Mark};
use tracing::instrument;

/// The 8 lines that decide a win: 3 rows, 3 columns, 2 diagonals.
const LINES: [[Coordinate; 3]; 8] = [
    // Rows
    [
        Coordinate::at(0, 0),
        Coordinate::at(0, 1),
        Coordinate::at(0, 2),
    ],
    [
        Coordinate::at(1, 0),
        Coordinate::at(1, 1),
        Coordinate::at(1, 2),
    ],
    [
        Coordinate::at(2, 0),
        Coordinate::at(2, 1),
        Coordinate::at(2, 2),
    ],
    // Columns
    [
        Coordinate::at(0, 0),
        Coordinate::at(1, 0),
        Coordinate::at(2, 0),
    ],
    [
        Coordinate::at(0, 1),
        Coordinate::at(1, 1),
        Coordinate::at(2, 1),
    ],
    [
        Coordinate::at(0, 2),
        Coordinate::at(1, 2),
        Coordinate::at(2, 2),
    ],
    // Diagonals
    [
        Coordinate::at(0, 0),
        Coordinate::at(1, 1),
        Coordinate::at(2, 2),
    ],
    [
        Coordinate::at(0, 2),
        Coordinate::at(1, 1),
        Coordinate::at(2, 0),
    ],
];

/// Checks for a completed line on the board.
///
/// Returns the mark holding three in a row, `None` otherwise. A single
/// placement can complete more than one line at once, but every completed
/// line then carries the same mark, so the first hit is the winner.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Mark> {
    for [a, b, c] in LINES {
        let cell = board.get(a);
        if cell != Cell::Empty && cell == board.get(b) && cell == board.get(c) {
            return cell.mark();
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_no_winner_incomplete_line() {
        let mut board = Board::new();
        board.set(Coordinate::at(0, 0), Cell::Occupied(Mark::X));
        board.set(Coordinate::at(0, 1), Cell::Occupied(Mark::X));
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_mixed_line_does_not_win() {
        let mut board = Board::new();
        board.set(Coordinate::at(0, 0), Cell::Occupied(Mark::X));
        board.set(Coordinate::at(0, 1), Cell::Occupied(Mark::O));
        board.set(Coordinate::at(0, 2), Cell::Occupied(Mark::X));
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_every_line_wins_for_either_mark() {
        for mark in Mark::iter() {
            for line in LINES {
                let mut board = Board::new();
                for coordinate in line {
                    board.set(coordinate, Cell::Occupied(mark));
                }
                assert_eq!(check_winner(&board), Some(mark), "line {line:?}");
            }
        }
    }

    #[test]
    fn test_double_line_reports_single_winner() {
        // O completes the top row and the left column with one mark at A0.
        let mut board = Board::new();
        for coordinate in ["A0", "B0", "C0", "A1", "A2"] {
            board.set(coordinate.parse().unwrap(), Cell::Occupied(Mark::O));
        }
        assert_eq!(check_winner(&board), Some(Mark::O));
    }
}
