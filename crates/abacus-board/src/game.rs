//! A square board carrying an optional value per cell.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::cell::{Cell, Direction};
use crate::progression::Progression;
use crate::square::{Board, SquareBoard};

/// A board that stores an optional `T` in each cell.
///
/// Every cell starts empty. Values can be replaced but never removed:
/// [`GameBoard::set`] ignores `None`.
#[derive(Clone, Debug)]
pub struct GameBoard<T> {
    board: SquareBoard,
    /// Absent key means an empty cell. Keys are always board cells.
    values: FxHashMap<Cell, T>,
}

impl<T> GameBoard<T> {
    /// Creates a `width × width` board with every cell empty.
    #[must_use]
    pub fn new(width: usize) -> Self {
        Self {
            board: SquareBoard::new(width),
            values: FxHashMap::default(),
        }
    }

    /// The underlying coordinate space.
    #[must_use]
    pub fn square_board(&self) -> &SquareBoard {
        &self.board
    }

    /// The value at `cell`, or `None` if it was never set.
    #[must_use]
    pub fn get(&self, cell: &Cell) -> Option<&T> {
        self.values.get(cell)
    }

    /// Stores `value` at `cell`.
    ///
    /// `None` leaves any previous value in place, and cells that are not
    /// on the board are ignored.
    pub fn set(&mut self, cell: Cell, value: Option<T>) {
        let Some(value) = value else {
            return;
        };
        if self.board.cell_or_none(cell.row(), cell.column()).is_none() {
            log::debug!("ignoring write to off-board cell {cell}");
            return;
        }
        self.values.insert(cell, value);
    }

    fn entries(&self) -> impl Iterator<Item = (Cell, Option<&T>)> + '_ {
        self.board
            .all_cells()
            .iter()
            .map(move |cell| (*cell, self.values.get(cell)))
    }

    /// Cells whose current value satisfies `predicate`.
    pub fn filter<P>(&self, mut predicate: P) -> FxHashSet<Cell>
    where
        P: FnMut(Option<&T>) -> bool,
    {
        self.entries()
            .filter(|(_, value)| predicate(*value))
            .map(|(cell, _)| cell)
            .collect()
    }

    /// Some cell whose current value satisfies `predicate`.
    pub fn find<P>(&self, mut predicate: P) -> Option<Cell>
    where
        P: FnMut(Option<&T>) -> bool,
    {
        self.entries()
            .find(|(_, value)| predicate(*value))
            .map(|(cell, _)| cell)
    }

    /// True if any cell's value satisfies `predicate`.
    pub fn any<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(Option<&T>) -> bool,
    {
        self.entries().any(|(_, value)| predicate(value))
    }

    /// True if every cell's value satisfies `predicate`. Vacuously true
    /// for an empty board.
    pub fn all<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(Option<&T>) -> bool,
    {
        self.entries().all(|(_, value)| predicate(value))
    }
}

impl<T> Board for GameBoard<T> {
    fn width(&self) -> usize {
        self.board.width()
    }

    fn cell_or_none(&self, row: usize, column: usize) -> Option<Cell> {
        self.board.cell_or_none(row, column)
    }

    fn all_cells(&self) -> &[Cell] {
        self.board.all_cells()
    }

    fn row(&self, row: usize, columns: Progression) -> Vec<Cell> {
        self.board.row(row, columns)
    }

    fn column(&self, rows: Progression, column: usize) -> Vec<Cell> {
        self.board.column(rows, column)
    }

    fn neighbour(&self, cell: Cell, direction: Direction) -> Option<Cell> {
        self.board.neighbour(cell, direction)
    }
}

/// Creates a `width × width` game board with every cell empty.
#[must_use]
pub fn create_game_board<T>(width: usize) -> GameBoard<T> {
    GameBoard::new(width)
}
