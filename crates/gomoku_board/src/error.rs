//! Error types for board construction, queries and placement.

use crate::Coord;
use derive_more::{Display, Error};

/// Errors raised by board construction and coordinate queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// Dimensions outside 5..=25, or more columns than rows.
    #[display("Invalid board dimensions {rows}x{cols}: rows and columns must be 5..=25 and columns may not exceed rows")]
    InvalidDimensions {
        /// Requested rows.
        rows: usize,
        /// Requested columns.
        cols: usize,
    },
    /// Coordinate outside the grid.
    #[display("{coord} is outside the {rows}x{cols} board")]
    OutOfBounds {
        /// Offending coordinate.
        coord: Coord,
        /// Board rows.
        rows: usize,
        /// Board columns.
        cols: usize,
    },
}

/// Reasons a stone cannot be placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum PlaceError {
    /// Coordinate outside the grid.
    #[display("{coord} is outside the board")]
    OutOfBounds {
        /// Rejected coordinate.
        coord: Coord,
    },
    /// Cell already holds a stone.
    #[display("{coord} is already occupied")]
    Occupied {
        /// Rejected coordinate.
        coord: Coord,
    },
    /// First stone placed away from the center cells.
    #[display("the first stone must go on one of the center cells, not {coord}")]
    NotCenter {
        /// Rejected coordinate.
        coord: Coord,
    },
    /// No stone on any of the eight surrounding cells.
    #[display("{coord} does not touch any stone")]
    NotAdjacent {
        /// Rejected coordinate.
        coord: Coord,
    },
}

/// Errors parsing a move written as column letter plus row number (`e5`).
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum CoordParseError {
    /// Nothing to parse.
    #[display("empty move")]
    Empty,
    /// First character is not a letter.
    #[display("column must be a letter starting at 'a', got '{found}'")]
    BadColumn {
        /// Character found in the column position.
        found: char,
    },
    /// Row part is missing, not a number, or zero.
    #[display("row must be a number starting at 1, got '{found}'")]
    BadRow {
        /// Text found in the row position.
        found: String,
    },
}
