//! Board coordinates and movement directions.

use std::fmt;

/// A board position. Rows and columns start at 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    row: usize,
    column: usize,
}

impl Cell {
    /// Creates a cell at `(row, column)`.
    #[must_use]
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// The row index.
    #[must_use]
    pub const fn row(self) -> usize {
        self.row
    }

    /// The column index.
    #[must_use]
    pub const fn column(self) -> usize {
        self.column
    }

    /// The coordinate one step in `direction`, or `None` below index 0.
    ///
    /// The result is not checked against any board.
    #[must_use]
    pub fn step(self, direction: Direction) -> Option<Self> {
        let (row, column) = match direction {
            Direction::Up => (self.row.checked_sub(1)?, self.column),
            Direction::Down => (self.row.checked_add(1)?, self.column),
            Direction::Left => (self.row, self.column.checked_sub(1)?),
            Direction::Right => (self.row, self.column.checked_add(1)?),
        };
        Some(Self::new(row, column))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// A move on the board. `Up` decreases the row, `Left` the column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards row 1.
    Up,
    /// Towards the last row.
    Down,
    /// Towards column 1.
    Left,
    /// Towards the last column.
    Right,
}

impl Direction {
    /// Every direction.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The opposite direction.
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Cell::new(2, 3).to_string(), "(2, 3)");
    }

    #[test]
    fn test_reversed() {
        assert_eq!(Direction::Up.reversed(), Direction::Down);
        assert_eq!(Direction::Down.reversed(), Direction::Up);
        assert_eq!(Direction::Left.reversed(), Direction::Right);
        assert_eq!(Direction::Right.reversed(), Direction::Left);

        for direction in Direction::ALL {
            assert_eq!(direction.reversed().reversed(), direction);
        }
    }

    #[test]
    fn test_step() {
        let cell = Cell::new(2, 2);
        assert_eq!(cell.step(Direction::Up), Some(Cell::new(1, 2)));
        assert_eq!(cell.step(Direction::Down), Some(Cell::new(3, 2)));
        assert_eq!(cell.step(Direction::Left), Some(Cell::new(2, 1)));
        assert_eq!(cell.step(Direction::Right), Some(Cell::new(2, 3)));

        assert_eq!(Cell::new(0, 5).step(Direction::Up), None);
    }
}
