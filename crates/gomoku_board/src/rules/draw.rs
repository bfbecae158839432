//! Draw detection for Gomoku.

use crate::Board;

/// Checks if every cell holds a stone.
///
/// A full board with no winner is a draw.
pub fn is_full(board: &Board) -> bool {
    board.stone_count() == board.rows() * board.cols()
}
