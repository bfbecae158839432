//! Move-selection strategies for the computer opponent.

mod first_available;
mod random;

pub use first_available::FirstAvailable;
pub use random::RandomStrategy;

use gomoku_board::{Board, Coord};

/// Picks the computer's next move.
///
/// Implementations should return one of [`Board::valid_moves`], and `None`
/// only when that list is empty.
pub trait MoveStrategy {
    /// Chooses a move for the current board.
    fn choose_move(&mut self, board: &Board) -> Option<Coord>;
}

/// Any `FnMut(&Board) -> Option<Coord>` is a strategy.
impl<F> MoveStrategy for F
where
    F: FnMut(&Board) -> Option<Coord>,
{
    fn choose_move(&mut self, board: &Board) -> Option<Coord> {
        self(board)
    }
}
