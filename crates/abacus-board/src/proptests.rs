//! Property-based tests for board navigation.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{Board, Cell, Direction, GameBoard, Progression, SquareBoard};

    fn direction() -> impl Strategy<Value = Direction> {
        prop::sample::select(Direction::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn board_has_width_squared_cells(width in 0usize..12) {
            let board = SquareBoard::new(width);
            prop_assert_eq!(board.all_cells().len(), width * width);
            for cell in board.all_cells() {
                prop_assert!((1..=width).contains(&cell.row()));
                prop_assert!((1..=width).contains(&cell.column()));
            }
        }

        #[test]
        fn lookup_agrees_with_bounds(width in 0usize..8, row in 0usize..10, column in 0usize..10) {
            let board = SquareBoard::new(width);
            let on_board = (1..=width).contains(&row) && (1..=width).contains(&column);
            prop_assert_eq!(board.cell_or_none(row, column).is_some(), on_board);
            prop_assert_eq!(board.cell(row, column).is_ok(), on_board);
        }

        #[test]
        fn neighbour_then_reversed_returns(
            width in 1usize..8,
            row in 1usize..8,
            column in 1usize..8,
            direction in direction()
        ) {
            let board = SquareBoard::new(width);
            if let Some(cell) = board.cell_or_none(row, column) {
                if let Some(next) = board.neighbour(cell, direction) {
                    prop_assert_eq!(board.neighbour(next, direction.reversed()), Some(cell));
                }
            }
        }

        #[test]
        fn descending_row_is_reversed_ascending(
            width in 1usize..8,
            row in 1usize..8,
            low in 1usize..8,
            high in 1usize..8
        ) {
            let board = SquareBoard::new(width);
            let (low, high) = (low.min(high), low.max(high));
            let mut ascending = board.row(row, Progression::from(low..=high));
            let descending = board.row(row, Progression::down_to(high, low));
            ascending.reverse();
            prop_assert_eq!(ascending, descending);
        }

        #[test]
        fn set_none_never_clears(width in 1usize..6, value in any::<u32>()) {
            let mut board = GameBoard::new(width);
            let cell = Cell::new(width, 1);
            board.set(cell, Some(value));
            board.set(cell, None);
            prop_assert_eq!(board.get(&cell), Some(&value));
            prop_assert_eq!(board.filter(|v| v.is_some()).len(), 1);
        }
    }
}
