//! The game engine: owned state, move validation, turn alternation.

use crate::{Board, Cell, Coordinate, GameStatus, Mark, Move, MoveError, rules};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A game of noughts and crosses.
///
/// `Game` exclusively owns its board; there is no shared or global state.
/// Moves arrive as raw text via [`Game::submit_move`], rejections leave the
/// state untouched, and retry policy belongs to the caller. Once the status
/// is terminal every further submission fails with [`MoveError::GameOver`]
/// and the state never changes again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    mover: Mark,
    status: GameStatus,
    history: Vec<Move>,
}

impl Game {
    /// Creates a game with an empty board and the first mover chosen by a
    /// uniform coin flip on the injected random source.
    #[instrument(skip(rng))]
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        Self::with_first_mover(Mark::random(rng))
    }

    /// Creates a game with the first mover fixed.
    #[instrument]
    pub fn with_first_mover(mover: Mark) -> Self {
        Self {
            board: Board::new(),
            mover,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Accessors
    // ─────────────────────────────────────────────────────────────

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The mark whose turn is active.
    ///
    /// The mover does not alternate on the move that ends the game, so
    /// after a win this still names the winner.
    pub fn mover(&self) -> Mark {
        self.mover
    }

    /// The current status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Every accepted move, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns true once the status is `Won` or `Draw`.
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    // ─────────────────────────────────────────────────────────────
    //  Moves
    // ─────────────────────────────────────────────────────────────

    /// Submits one raw move string for the active mover.
    ///
    /// The accepted form is a column letter A-C followed by a row digit
    /// 0-2, e.g. `B1` (case-insensitive letter). On success the mark is
    /// placed, the status is recomputed, the mover alternates if the game
    /// is still in progress, and the new status is returned.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] when the game already reached a terminal
    ///   status.
    /// - [`MoveError::InvalidFormat`] when `raw` does not parse.
    /// - [`MoveError::CellOccupied`] when the target cell holds a mark.
    ///
    /// Every rejection leaves the game untouched.
    #[instrument(skip(self), fields(mover = %self.mover))]
    pub fn submit_move(&mut self, raw: &str) -> Result<GameStatus, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        let coordinate: Coordinate = raw.parse()?;
        self.place(coordinate)
    }

    /// Places the active mover's mark at an already-parsed coordinate.
    ///
    /// # Errors
    ///
    /// As [`Game::submit_move`], minus the parse failure.
    #[instrument(skip(self), fields(mover = %self.mover))]
    pub fn place(&mut self, coordinate: Coordinate) -> Result<GameStatus, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        if !self.board.is_empty(coordinate) {
            return Err(MoveError::CellOccupied(coordinate));
        }

        self.board.set(coordinate, Cell::Occupied(self.mover));
        self.history.push(Move::new(self.mover, coordinate));

        // Recomputed from the whole board on every placement.
        self.status = rules::evaluate(&self.board);
        debug!(status = ?self.status, %coordinate, "placed mark");

        if self.status == GameStatus::InProgress {
            self.mover = self.mover.opponent();
        }

        self.assert_invariants();
        Ok(self.status)
    }

    // Debug-build sanity checks after an accepted move.
    fn assert_invariants(&self) {
        debug_assert!(
            self.board.count(Mark::O).abs_diff(self.board.count(Mark::X)) <= 1,
            "mark counts out of balance"
        );
        debug_assert_eq!(
            self.history.len(),
            self.board.count(Mark::O) + self.board.count(Mark::X),
            "history inconsistent with board"
        );
        debug_assert_eq!(self.status, rules::evaluate(&self.board));
    }
}
