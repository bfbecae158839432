//! Win detection for Gomoku.

use crate::{Board, Coord, Mark, WIN_LENGTH};

/// One direction per axis: horizontal, vertical, diagonal, anti-diagonal.
const AXES: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Length of the contiguous `mark` run through `coord` along one axis,
/// counting outward both ways. Zero if `coord` itself is not `mark`.
pub fn run_length(board: &Board, mark: Mark, coord: Coord, (d_row, d_col): (isize, isize)) -> usize {
    let is_mark = |c: Coord| board.get(c).and_then(|cell| cell.mark()) == Some(mark);
    if !is_mark(coord) {
        return 0;
    }

    let count_from = |d_row: isize, d_col: isize| {
        std::iter::successors(coord.offset(d_row, d_col), |c| c.offset(d_row, d_col))
            .take_while(|&c| is_mark(c))
            .count()
    };

    1 + count_from(d_row, d_col) + count_from(-d_row, -d_col)
}

/// Checks whether the `mark` stone at `coord` is part of a run of at least
/// [`WIN_LENGTH`] on any axis.
///
/// Only the four lines through `coord` are scanned, so call it with the
/// cell that was just played.
pub fn completes_run(board: &Board, mark: Mark, coord: Coord) -> bool {
    AXES.iter()
        .any(|&axis| run_length(board, mark, coord, axis) >= WIN_LENGTH)
}
