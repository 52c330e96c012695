//! # Abacus
//!
//! Exact rational arithmetic and square game boards.
//!
//! ## Features
//!
//! - **Arbitrary Precision**: normalized rationals over big integers
//! - **Exact Ordering**: cross-multiplied comparison, with an optional
//!   fixed-precision decimal mode
//! - **Boards**: square coordinate spaces with a typed per-cell overlay
//!
//! ## Quick Start
//!
//! ```rust
//! use abacus::prelude::*;
//!
//! let half = Rational::from_i64(1, 2).unwrap();
//! let third: Rational = "1/3".parse().unwrap();
//! assert_eq!((&half + &third).to_string(), "5/6");
//!
//! let mut board: GameBoard<char> = GameBoard::new(3);
//! board.set(Cell::new(2, 2), Some('x'));
//! assert_eq!(board.neighbour(Cell::new(2, 2), Direction::Up), Some(Cell::new(1, 2)));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use abacus_board as board;
pub use abacus_integers as integers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use abacus_board::{
        create_game_board, create_square_board, Board, BoardError, Cell, Direction, GameBoard,
        Progression, SquareBoard,
    };
    pub use abacus_integers::{CompareConfig, CompareStrategy, Integer, NumberError, Rational};
}
