//! Errors raised while constructing or parsing numbers.

use thiserror::Error;

/// Errors that can occur when building an `Integer` or `Rational`.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum NumberError {
    /// An argument violates a construction invariant, e.g. a zero denominator.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// The text is not an integer, or not a rational in the form `n/d` or `n`.
    #[error("expecting rational in the form of 'n/d' or 'n', was: '{input}'")]
    Parse {
        /// The rejected text.
        input: String,
    },
}

impl NumberError {
    pub(crate) const ZERO_DENOMINATOR: Self =
        Self::InvalidArgument("denominator must not be zero");

    pub(crate) fn parse(input: &str) -> Self {
        Self::Parse {
            input: input.to_owned(),
        }
    }
}
