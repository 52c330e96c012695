//! Errors raised by board lookups.

use thiserror::Error;

/// Errors that can occur when addressing a board.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    /// The coordinate is not part of the board.
    #[error("no cell at ({row}, {column})")]
    NotFound {
        /// Requested row.
        row: usize,
        /// Requested column.
        column: usize,
    },
}
