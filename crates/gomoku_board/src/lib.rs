//! Pure board rules for four-in-a-row Gomoku.
//!
//! The [`Board`] owns a rectangular grid and enforces the placement rules:
//! the first stone goes on a center cell, every later stone must touch an
//! existing stone (orthogonally or diagonally). Four or more same-mark
//! stones in a straight line win.
//!
//! ```
//! use gomoku_board::{Board, Mark};
//!
//! let mut board = Board::new(10, 10)?;
//! assert!(!board.place(Mark::X, 0, 0));
//! assert!(board.place(Mark::X, 4, 4));
//! assert_eq!(board.valid_moves().len(), 8);
//! # Ok::<(), gomoku_board::BoardError>(())
//! ```
//!
//! The crate performs no I/O. Callers drive it one move at a time and own
//! prompting, opponent selection and score keeping.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod coord;
mod error;
pub mod rules;
mod types;

pub use board::{Board, DEFAULT_SIZE, MAX_SIZE, MIN_SIZE, WIN_LENGTH};
pub use coord::Coord;
pub use error::{BoardError, CoordParseError, PlaceError};
pub use types::{Cell, Mark};
