//! Moves and the errors that reject them.

use crate::{Coordinate, Mark, ParseCoordinateError};
use serde::{Deserialize, Serialize};

/// A single placement: a mark at a coordinate.
///
/// Accepted moves are kept in the game history, so a finished game can be
/// replayed or inspected move by move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    mark: Mark,
    coordinate: Coordinate,
}

impl Move {
    /// Creates a new move.
    pub fn new(mark: Mark, coordinate: Coordinate) -> Self {
        Self { mark, coordinate }
    }

    /// The mark being placed.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Where the mark is placed.
    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.coordinate)
    }
}

/// Reasons a submitted move is rejected.
///
/// Rejections are ordinary values, not panics: the game state is never
/// touched on the error path and the caller is free to prompt for a fresh
/// string.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::From)]
pub enum MoveError {
    /// The raw string is not a well-formed coordinate.
    #[display("{_0}")]
    #[from]
    InvalidFormat(ParseCoordinateError),

    /// The targeted cell already holds a mark.
    #[display("cell {_0} is already occupied")]
    CellOccupied(Coordinate),

    /// The game has already reached a terminal status.
    #[display("the game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}
