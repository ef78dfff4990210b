//! Board coordinates and their textual form.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A coordinate on the 3x3 board.
///
/// Rows run 0-2 top to bottom; columns A-C map to 0-2. Values outside the
/// board cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    row: u8,
    col: u8,
}

/// Error returned when a string is not a well-formed coordinate.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display(
    "invalid coordinate {raw:?}: expected a column letter A-C followed by a row digit 0-2"
)]
pub struct ParseCoordinateError {
    raw: String,
}

impl ParseCoordinateError {
    /// The rejected input.
    pub fn raw(&self) -> &str {
        &self.raw
    }
}

impl std::error::Error for ParseCoordinateError {}

impl Coordinate {
    /// All nine coordinates in row-major order.
    pub const ALL: [Coordinate; 9] = [
        Coordinate::at(0, 0),
        Coordinate::at(0, 1),
        Coordinate::at(0, 2),
        Coordinate::at(1, 0),
        Coordinate::at(1, 1),
        Coordinate::at(1, 2),
        Coordinate::at(2, 0),
        Coordinate::at(2, 1),
        Coordinate::at(2, 2),
    ];

    // Callers keep both indices in range; checked even in const contexts.
    pub(crate) const fn at(row: u8, col: u8) -> Self {
        assert!(row < 3 && col < 3);
        Self { row, col }
    }

    /// Creates a coordinate from row and column indices.
    ///
    /// Returns `None` when either index falls outside the board.
    pub fn from_indices(row: usize, col: usize) -> Option<Self> {
        if row < 3 && col < 3 {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Row index, 0-2 top to bottom.
    pub fn row(self) -> usize {
        self.row as usize
    }

    /// Column index, 0-2 for columns A-C.
    pub fn col(self) -> usize {
        self.col as usize
    }

    /// Row-major index into the board, 0-8.
    pub fn index(self) -> usize {
        self.row() * 3 + self.col()
    }
}

impl std::str::FromStr for Coordinate {
    type Err = ParseCoordinateError;

    /// Parses the two-character form, e.g. `A0` or `c2`.
    ///
    /// Exactly two characters are accepted: a column letter in A-C
    /// (case-insensitive) followed by a row digit in 0-2. The letter maps
    /// A to column 0, B to 1, C to 2; the digit is the row index.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseCoordinateError { raw: s.to_string() };

        let mut chars = s.chars();
        let (Some(letter), Some(digit), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(invalid());
        };

        let col = match letter.to_ascii_lowercase() {
            'a' => 0,
            'b' => 1,
            'c' => 2,
            _ => return Err(invalid()),
        };
        let row = match digit {
            '0' => 0,
            '1' => 1,
            '2' => 2,
            _ => return Err(invalid()),
        };

        Ok(Coordinate { row, col })
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", (b'A' + self.col) as char, self.row)
    }
}
