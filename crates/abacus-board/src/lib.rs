//! # abacus-board
//!
//! Fixed-size square boards for grid games.
//!
//! This crate provides:
//! - `Cell` coordinates (1-based row and column) and `Direction`s
//! - `SquareBoard`: the immutable `width × width` coordinate space
//! - `GameBoard<T>`: a board carrying an optional value per cell
//!
//! Both boards implement the `Board` trait; `GameBoard` forwards every
//! coordinate query to the `SquareBoard` it owns.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod cell;
pub mod error;
pub mod game;
pub mod progression;
pub mod square;

#[cfg(test)]
mod proptests;

pub use cell::{Cell, Direction};
pub use error::BoardError;
pub use game::{create_game_board, GameBoard};
pub use progression::Progression;
pub use square::{create_square_board, Board, SquareBoard};
