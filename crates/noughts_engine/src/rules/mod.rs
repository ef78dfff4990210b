//! Win and draw rules for the 3x3 board.

mod draw;
mod win;

pub use draw::is_full;
pub use win::check_winner;

use crate::{Board, GameStatus};
use tracing::instrument;

/// Computes the status of a board from scratch.
///
/// The win check runs before the draw check: a full board containing a
/// completed line is a win, never a draw. The result depends only on the
/// nine cells, not on how the board was reached.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> GameStatus {
    if let Some(winner) = check_winner(board) {
        return GameStatus::Won(winner);
    }
    if is_full(board) {
        return GameStatus::Draw;
    }
    GameStatus::InProgress
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Coordinate, Mark};

    fn board_from_rows(rows: [[char; 3]; 3]) -> Board {
        let mut board = Board::new();
        for (row, cells) in rows.into_iter().enumerate() {
            for (col, glyph) in cells.into_iter().enumerate() {
                let cell = match glyph {
                    'O' => Cell::Occupied(Mark::O),
                    'X' => Cell::Occupied(Mark::X),
                    _ => Cell::Empty,
                };
                board.set(Coordinate::from_indices(row, col).unwrap(), cell);
            }
        }
        board
    }

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(evaluate(&Board::new()), GameStatus::InProgress);
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board = board_from_rows([['O', 'X', 'O'], ['X', 'O', 'X'], ['X', 'O', 'X']]);
        assert_eq!(evaluate(&board), GameStatus::Draw);
    }

    #[test]
    fn test_win_takes_precedence_over_draw() {
        // Full board whose last column is three X's.
        let board = board_from_rows([['O', 'X', 'X'], ['O', 'O', 'X'], ['X', 'O', 'X']]);
        assert_eq!(evaluate(&board), GameStatus::Won(Mark::X));
    }

    #[test]
    fn test_partial_board_in_progress() {
        let board = board_from_rows([['O', ' ', ' '], [' ', 'X', ' '], [' ', ' ', ' ']]);
        assert_eq!(evaluate(&board), GameStatus::InProgress);
    }
}
