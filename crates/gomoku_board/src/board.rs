//! The Gomoku board: grid storage plus the rule queries callers drive.

use crate::rules::{draw, placement, win};
use crate::{BoardError, Cell, Coord, Mark, PlaceError};
use serde::Serialize;
use tracing::instrument;

/// Smallest allowed row or column count.
pub const MIN_SIZE: usize = 5;
/// Largest allowed row or column count.
pub const MAX_SIZE: usize = 25;
/// Side length of [`Board::default`].
pub const DEFAULT_SIZE: usize = 10;
/// Stones in a line needed to win.
pub const WIN_LENGTH: usize = 4;

/// Rectangular Gomoku grid.
///
/// Cells are stored row-major in a flat vector. Stones are only ever
/// added, so a cell that becomes occupied stays occupied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
    stones: usize,
}

impl Board {
    /// Creates an empty board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidDimensions`] unless both sides are within
    /// [`MIN_SIZE`]..=[`MAX_SIZE`] and `cols <= rows`.
    pub fn new(rows: usize, cols: usize) -> Result<Self, BoardError> {
        let side = MIN_SIZE..=MAX_SIZE;
        if !side.contains(&rows) || !side.contains(&cols) || cols > rows {
            return Err(BoardError::InvalidDimensions { rows, cols });
        }
        Ok(Self::blank(rows, cols))
    }

    fn blank(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
            stones: 0,
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of stones placed so far.
    pub fn stone_count(&self) -> usize {
        self.stones
    }

    /// True while no stone has been placed; gates the first-move rule.
    pub fn is_blank(&self) -> bool {
        self.stones == 0
    }

    /// Returns true if the coordinate lies on the grid.
    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.rows && coord.col < self.cols
    }

    fn index(&self, coord: Coord) -> Option<usize> {
        self.contains(coord)
            .then(|| coord.row * self.cols + coord.col)
    }

    /// Cell lookup for rule code; `None` off the grid.
    pub(crate) fn get(&self, coord: Coord) -> Option<Cell> {
        self.index(coord).map(|i| self.cells[i])
    }

    fn out_of_bounds(&self, coord: Coord) -> BoardError {
        BoardError::OutOfBounds {
            coord,
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Returns the content of a cell.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfBounds`] for coordinates off the grid.
    pub fn cell(&self, coord: Coord) -> Result<Cell, BoardError> {
        self.get(coord).ok_or_else(|| self.out_of_bounds(coord))
    }

    /// Returns whether the cell at `(row, col)` holds no stone.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfBounds`] for coordinates off the grid.
    pub fn is_empty(&self, row: usize, col: usize) -> Result<bool, BoardError> {
        self.cell(Coord::new(row, col)).map(Cell::is_empty)
    }

    /// Places a stone, reporting why the move is illegal if it is.
    ///
    /// The board is left untouched on error.
    ///
    /// # Errors
    ///
    /// Returns the [`PlaceError`] naming the violated rule.
    #[instrument(level = "trace", skip(self), fields(stones = self.stones))]
    pub fn try_place(&mut self, mark: Mark, coord: Coord) -> Result<(), PlaceError> {
        placement::check(self, coord)?;
        let index = self.index(coord).ok_or(PlaceError::OutOfBounds { coord })?;
        self.cells[index] = Cell::Occupied(mark);
        self.stones += 1;
        Ok(())
    }

    /// Places `mark` at `(row, col)`; `false` if the move is illegal.
    pub fn place(&mut self, mark: Mark, row: usize, col: usize) -> bool {
        self.try_place(mark, Coord::new(row, col)).is_ok()
    }

    /// Whether the `mark` stone at `(row, col)` sits on a run of at least
    /// [`WIN_LENGTH`] along any axis. Only lines through that cell are
    /// examined.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfBounds`] for coordinates off the grid.
    pub fn check_win(&self, mark: Mark, row: usize, col: usize) -> Result<bool, BoardError> {
        let coord = Coord::new(row, col);
        if !self.contains(coord) {
            return Err(self.out_of_bounds(coord));
        }
        Ok(win::completes_run(self, mark, coord))
    }

    /// Mark of the stone at `coord` if that stone completes a winning run.
    pub fn winner_at(&self, coord: Coord) -> Option<Mark> {
        let mark = self.get(coord)?.mark()?;
        win::completes_run(self, mark, coord).then_some(mark)
    }

    /// True when every cell is occupied.
    pub fn is_full(&self) -> bool {
        draw::is_full(self)
    }

    /// Cells allowed for the first stone, row-major.
    pub fn center_cells(&self) -> Vec<Coord> {
        placement::center_cells(self.rows, self.cols)
    }

    /// Every coordinate where a stone could be placed right now, row-major.
    pub fn valid_moves(&self) -> Vec<Coord> {
        if self.is_blank() {
            return self.center_cells();
        }
        self.coords()
            .filter(|&coord| placement::check(self, coord).is_ok())
            .collect()
    }

    /// All coordinates of the grid, row-major.
    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        let cols = self.cols;
        (0..self.rows).flat_map(move |row| (0..cols).map(move |col| Coord::new(row, col)))
    }

    /// Cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::blank(DEFAULT_SIZE, DEFAULT_SIZE)
    }
}

/// Text grid with a column-letter header and 1-based row numbers.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "   ")?;
        for col in 0..self.cols {
            write!(f, "{} ", char::from(b'a' + col as u8))?;
        }
        writeln!(f)?;

        for (row, cells) in self.cells.chunks(self.cols).enumerate() {
            write!(f, "{:2} ", row + 1)?;
            for cell in cells {
                write!(f, "{} ", cell.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
