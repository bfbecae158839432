//! Strategy that picks the first legal cell.

use super::MoveStrategy;
use gomoku_board::{Board, Coord};
use tracing::debug;

/// Picks the first legal move in row-major order.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstAvailable;

impl MoveStrategy for FirstAvailable {
    fn choose_move(&mut self, board: &Board) -> Option<Coord> {
        let choice = board.valid_moves().first().copied();
        debug!(choice = ?choice, "First available move");
        choice
    }
}
