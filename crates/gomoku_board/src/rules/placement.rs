//! Placement legality: first-move centering and adjacency.

use crate::{Board, Coord, PlaceError};

/// Row/column offsets of the eight surrounding cells.
const NEIGHBORS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Cells allowed for the first stone: rows `{r/2 - 1, r/2}` crossed with
/// columns `{c/2 - 1, c/2}`, deduplicated and row-major. Sides shorter
/// than two collapse to index 0.
pub fn center_cells(rows: usize, cols: usize) -> Vec<Coord> {
    let middle = |n: usize| [n.saturating_sub(2) / 2, n / 2];
    let mut cells: Vec<Coord> = middle(rows)
        .into_iter()
        .flat_map(|row| middle(cols).map(|col| Coord::new(row, col)))
        .collect();
    cells.sort_unstable();
    cells.dedup();
    cells
}

/// Whether any of the eight surrounding cells holds a stone of either mark.
pub fn has_neighbor(board: &Board, coord: Coord) -> bool {
    NEIGHBORS.iter().any(|&(d_row, d_col)| {
        coord
            .offset(d_row, d_col)
            .and_then(|n| board.get(n))
            .is_some_and(|cell| !cell.is_empty())
    })
}

/// Checks whether a stone may go on `coord` without changing the board.
pub(crate) fn check(board: &Board, coord: Coord) -> Result<(), PlaceError> {
    let cell = board.get(coord).ok_or(PlaceError::OutOfBounds { coord })?;
    if !cell.is_empty() {
        return Err(PlaceError::Occupied { coord });
    }

    if board.is_blank() {
        if center_cells(board.rows(), board.cols()).contains(&coord) {
            return Ok(());
        }
        return Err(PlaceError::NotCenter { coord });
    }

    if has_neighbor(board, coord) {
        Ok(())
    } else {
        Err(PlaceError::NotAdjacent { coord })
    }
}
