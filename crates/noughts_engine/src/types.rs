//! Core domain types for noughts and crosses.

use crate::Coordinate;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A player's mark.
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
    strum::EnumIter,
)]
pub enum Mark {
    /// Noughts.
    O,
    /// Crosses.
    X,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::O => Mark::X,
            Mark::X => Mark::O,
        }
    }

    /// Picks a mark by a uniform coin flip on the injected random source.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        if rng.random() { Mark::O } else { Mark::X }
    }
}

/// Error returned when a string names neither mark.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("unknown mark {_0:?}: expected O or X")]
pub struct ParseMarkError(String);

impl std::error::Error for ParseMarkError {}

impl std::str::FromStr for Mark {
    type Err = ParseMarkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "O" | "o" => Ok(Mark::O),
            "X" | "x" => Ok(Mark::X),
            _ => Err(ParseMarkError(s.to_string())),
        }
    }
}

/// One cell of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// No mark placed yet.
    Empty,
    /// Cell holding a player's mark.
    Occupied(Mark),
}

impl Cell {
    /// Returns the mark occupying the cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }
}

/// 3x3 game board.
///
/// Cells are stored in row-major order: rows 0-2 top to bottom, columns
/// A-C mapped to 0-2.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Gets the cell at the given coordinate.
    pub fn get(&self, coordinate: Coordinate) -> Cell {
        self.cells[coordinate.index()]
    }

    /// Sets the cell at the given coordinate.
    pub fn set(&mut self, coordinate: Coordinate, cell: Cell) {
        self.cells[coordinate.index()] = cell;
    }

    /// Checks if the cell at the coordinate is empty.
    pub fn is_empty(&self, coordinate: Coordinate) -> bool {
        self.get(coordinate) == Cell::Empty
    }

    /// Counts the cells occupied by the given mark.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .filter(|cell| **cell == Cell::Occupied(mark))
            .count()
    }

    /// Returns all cells as a slice, row-major.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Returns the grid as rows of cells, top to bottom.
    ///
    /// This is the read-only view handed to display code.
    pub fn rows(&self) -> [[Cell; 3]; 3] {
        [
            [self.cells[0], self.cells[1], self.cells[2]],
            [self.cells[3], self.cells[4], self.cells[5]],
            [self.cells[6], self.cells[7], self.cells[8]],
        ]
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended with three in a row for the mark.
    Won(Mark),
    /// Board filled with no line completed.
    Draw,
}

impl GameStatus {
    /// Returns true once no further moves are accepted.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the winning mark, if any.
    pub fn winner(self) -> Option<Mark> {
        match self {
            GameStatus::Won(mark) => Some(mark),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_opponent_flips() {
        assert_eq!(Mark::O.opponent(), Mark::X);
        assert_eq!(Mark::X.opponent(), Mark::O);
    }

    #[test]
    fn test_mark_parses_case_insensitively() {
        assert_eq!("O".parse::<Mark>().unwrap(), Mark::O);
        assert_eq!("x".parse::<Mark>().unwrap(), Mark::X);
        assert!("nought".parse::<Mark>().is_err());
    }

    #[test]
    fn test_random_mark_is_reproducible() {
        let mut a = ChaCha8Rng::seed_from_u64(42);
        let mut b = ChaCha8Rng::seed_from_u64(42);
        assert_eq!(Mark::random(&mut a), Mark::random(&mut b));
    }

    #[test]
    fn test_rows_view_is_row_major() {
        let mut board = Board::new();
        board.set("B0".parse().unwrap(), Cell::Occupied(Mark::X));
        board.set("A2".parse().unwrap(), Cell::Occupied(Mark::O));

        let rows = board.rows();
        assert_eq!(rows[0][1], Cell::Occupied(Mark::X));
        assert_eq!(rows[2][0], Cell::Occupied(Mark::O));
        assert_eq!(rows[1][1], Cell::Empty);
    }

    #[test]
    fn test_count_by_mark() {
        let mut board = Board::new();
        board.set("A0".parse().unwrap(), Cell::Occupied(Mark::O));
        board.set("B1".parse().unwrap(), Cell::Occupied(Mark::O));
        board.set("C2".parse().unwrap(), Cell::Occupied(Mark::X));
        assert_eq!(board.count(Mark::O), 2);
        assert_eq!(board.count(Mark::X), 1);
    }
}
