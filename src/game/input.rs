//! Parsing of typed human commands.

use derive_more::{Display, Error};
use gomoku_board::{Board, Coord, CoordParseError};

/// A line typed by the human player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Place a stone.
    Place(Coord),
    /// Leave the game.
    Quit,
}

/// Input that is not a move on this board.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum InputError {
    /// Not in `e5` form.
    #[display("{_0}")]
    Parse(CoordParseError),
    /// Well-formed but off the grid.
    #[display("{coord} is outside the {rows}x{cols} board")]
    OffBoard {
        /// Parsed coordinate.
        coord: Coord,
        /// Board rows.
        rows: usize,
        /// Board columns.
        cols: usize,
    },
}

/// Parses `quit`/`exit` or a move such as `e5`, checking it lies on `board`.
pub fn parse_command(line: &str, board: &Board) -> Result<Command, InputError> {
    let line = line.trim();
    if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
        return Ok(Command::Quit);
    }

    let coord: Coord = line.parse().map_err(InputError::Parse)?;
    if !board.contains(coord) {
        return Err(InputError::OffBoard {
            coord,
            rows: board.rows(),
            cols: board.cols(),
        });
    }
    Ok(Command::Place(coord))
}
