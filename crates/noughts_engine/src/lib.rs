//! Noughts and crosses game engine.
//!
//! The engine owns the full game state and exposes it as plain values: a
//! driver feeds it raw move strings and branches on the returned status or
//! rejection. Display and input collection belong to the caller; the engine
//! never prints, prompts, or retries.
//!
//! # Example
//!
//! ```
//! use noughts_engine::{Game, GameStatus, Mark};
//!
//! let mut game = Game::with_first_mover(Mark::O);
//! let status = game.submit_move("B1")?;
//! assert_eq!(status, GameStatus::InProgress);
//! assert_eq!(game.mover(), Mark::X);
//! # Ok::<(), noughts_engine::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod coordinate;
mod engine;
mod rules;
mod types;

pub use action::{Move, MoveError};
pub use coordinate::{Coordinate, ParseCoordinateError};
pub use engine::Game;
pub use rules::{check_winner, evaluate, is_full};
pub use types::{Board, Cell, GameStatus, Mark, ParseMarkError};
