//! # abacus-integers
//!
//! Arbitrary precision integer and rational arithmetic.
//!
//! This crate wraps `dashu` to provide:
//! - Arbitrary precision integers (`Integer`)
//! - Normalized rationals (`Rational`) with exact ordering
//! - A decimal-approximation comparison mode (`CompareConfig`)
//!
//! ## Canonical Form
//!
//! A `Rational` always has a positive denominator and a numerator coprime
//! to it. Zero is `0/1`. Every constructor and operator re-normalizes, so
//! callers never need to pre-reduce operands.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod compare;
pub mod error;
pub mod integer;
pub mod rational;

#[cfg(test)]
mod proptests;

pub use compare::{CompareConfig, CompareStrategy, DecimalApprox, DEFAULT_DECIMAL_DIGITS};
pub use error::NumberError;
pub use integer::Integer;
pub use rational::Rational;
