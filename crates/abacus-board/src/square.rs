//! The immutable square coordinate space.

use crate::cell::{Cell, Direction};
use crate::error::BoardError;
use crate::progression::Progression;

/// Coordinate queries shared by every board.
pub trait Board {
    /// Number of rows, equal to the number of columns.
    fn width(&self) -> usize;

    /// The cell at `(row, column)`, or `None` if it is off the board.
    fn cell_or_none(&self, row: usize, column: usize) -> Option<Cell>;

    /// The cell at `(row, column)`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::NotFound`] if the coordinate is off the board.
    fn cell(&self, row: usize, column: usize) -> Result<Cell, BoardError> {
        self.cell_or_none(row, column)
            .ok_or(BoardError::NotFound { row, column })
    }

    /// Every cell, in row-major order.
    fn all_cells(&self) -> &[Cell];

    /// Cells of `row` whose column lies in `columns`, in the progression's order.
    fn row(&self, row: usize, columns: Progression) -> Vec<Cell>;

    /// Cells of `column` whose row lies in `rows`, in the progression's order.
    fn column(&self, rows: Progression, column: usize) -> Vec<Cell>;

    /// The adjacent cell in `direction`, or `None` at the board edge.
    fn neighbour(&self, cell: Cell, direction: Direction) -> Option<Cell>;
}

/// A `width × width` board with 1-based coordinates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SquareBoard {
    width: usize,
    /// Row-major.
    cells: Vec<Cell>,
}

impl SquareBoard {
    /// Creates a board with `width²` cells. A zero width yields an empty board.
    #[must_use]
    pub fn new(width: usize) -> Self {
        let cells: Vec<Cell> = (1..=width)
            .flat_map(|row| (1..=width).map(move |column| Cell::new(row, column)))
            .collect();
        log::trace!("created {width}x{width} board with {} cells", cells.len());
        Self { width, cells }
    }

    fn contains_index(&self, index: usize) -> bool {
        (1..=self.width).contains(&index)
    }

    // `cells` is row-major, so a filtered run is already ascending on both axes.
    fn ordered(mut cells: Vec<Cell>, progression: Progression) -> Vec<Cell> {
        if !progression.is_ascending() {
            cells.reverse();
        }
        cells
    }
}

impl Board for SquareBoard {
    fn width(&self) -> usize {
        self.width
    }

    fn cell_or_none(&self, row: usize, column: usize) -> Option<Cell> {
        (self.contains_index(row) && self.contains_index(column)).then_some(Cell::new(row, column))
    }

    fn all_cells(&self) -> &[Cell] {
        &self.cells
    }

    fn row(&self, row: usize, columns: Progression) -> Vec<Cell> {
        let cells = self
            .cells
            .iter()
            .copied()
            .filter(|cell| cell.row() == row && columns.contains(cell.column()))
            .collect();
        Self::ordered(cells, columns)
    }

    fn column(&self, rows: Progression, column: usize) -> Vec<Cell> {
        let cells = self
            .cells
            .iter()
            .copied()
            .filter(|cell| cell.column() == column && rows.contains(cell.row()))
            .collect();
        Self::ordered(cells, rows)
    }

    fn neighbour(&self, cell: Cell, direction: Direction) -> Option<Cell> {
        let next = cell.step(direction)?;
        self.cell_or_none(next.row(), next.column())
    }
}

/// Creates a `width × width` square board.
#[must_use]
pub fn create_square_board(width: usize) -> SquareBoard {
    SquareBoard::new(width)
}
