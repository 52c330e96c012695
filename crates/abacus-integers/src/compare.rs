//! Comparison strategies for rationals.
//!
//! `Ord` on [`Rational`] is exact. The decimal strategy reproduces the
//! fixed-precision behaviour of comparing rounded quotients, which can
//! report `Equal` for distinct values whose quotients agree in the first
//! `significant_digits` digits.

use num_traits::Zero;
use std::cmp::Ordering;
use std::fmt;

use crate::{Integer, Rational};

/// Digit count used by [`CompareConfig::decimal`].
pub const DEFAULT_DECIMAL_DIGITS: usize = 40;

/// How two rationals are ordered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompareStrategy {
    /// Cross-multiplication; always correct.
    Exact,
    /// Compare quotients rounded to a number of significant digits.
    Decimal {
        /// Significant digits kept on each side (at least 1).
        significant_digits: usize,
    },
}

/// Configuration for [`Rational::compare_with`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CompareConfig {
    /// The comparison strategy.
    pub strategy: CompareStrategy,
}

impl CompareConfig {
    /// Exact comparison.
    #[must_use]
    pub fn exact() -> Self {
        Self {
            strategy: CompareStrategy::Exact,
        }
    }

    /// Decimal comparison with [`DEFAULT_DECIMAL_DIGITS`] digits.
    #[must_use]
    pub fn decimal() -> Self {
        Self::decimal_with_digits(DEFAULT_DECIMAL_DIGITS)
    }

    /// Decimal comparison with a custom digit count.
    #[must_use]
    pub fn decimal_with_digits(significant_digits: usize) -> Self {
        Self {
            strategy: CompareStrategy::Decimal { significant_digits },
        }
    }
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self::exact()
    }
}

/// A decimal approximation `mantissa * 10^exponent`.
///
/// For non-zero values the mantissa has exactly the requested number of
/// significant digits. Zero is `0 * 10^0`.
#[derive(Clone)]
pub struct DecimalApprox {
    mantissa: Integer,
    exponent: i64,
}

impl DecimalApprox {
    /// Rounds `value` to `significant_digits` digits, half away from zero.
    #[must_use]
    pub fn from_rational(value: &Rational, significant_digits: usize) -> Self {
        if value.is_zero() {
            return Self {
                mantissa: Integer::zero(),
                exponent: 0,
            };
        }

        let digits = significant_digits.max(1);
        let num = value.numerator().abs();
        let den = value.denominator();

        // num/den lies in (10^(m-1), 10^(m+1)) where m is the digit-count
        // difference, so the first quotient has `digits` or `digits + 1` digits.
        let magnitude = to_i64(num.decimal_digits()) - to_i64(den.decimal_digits());
        let mut shift = to_i64(digits) - magnitude;
        let (mut quotient, mut remainder, mut divisor) = scaled_div_rem(&num, den, shift);
        if quotient.decimal_digits() > digits {
            shift -= 1;
            (quotient, remainder, divisor) = scaled_div_rem(&num, den, shift);
        }

        if &remainder + &remainder >= divisor {
            quotient = quotient + Integer::new(1);
            if quotient.decimal_digits() > digits {
                quotient = quotient / Integer::new(10);
                shift -= 1;
            }
        }

        Self {
            mantissa: if value.is_negative() { -quotient } else { quotient },
            exponent: -shift,
        }
    }

    /// The signed mantissa.
    #[must_use]
    pub fn mantissa(&self) -> &Integer {
        &self.mantissa
    }

    /// The power-of-ten exponent.
    #[must_use]
    pub fn exponent(&self) -> i64 {
        self.exponent
    }
}

// Computes floor(num * 10^shift / den) for non-negative num, positive den.
// Returns (quotient, remainder, divisor) with the remainder taken against
// the divisor actually used.
fn scaled_div_rem(num: &Integer, den: &Integer, shift: i64) -> (Integer, Integer, Integer) {
    let (dividend, divisor) = if shift >= 0 {
        (num * &Integer::pow10(to_usize(shift)), den.clone())
    } else {
        (num.clone(), den * &Integer::pow10(to_usize(-shift)))
    };
    let remainder = &dividend % &divisor;
    (dividend / &divisor, remainder, divisor)
}

fn to_i64(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}

fn to_usize(n: i64) -> usize {
    usize::try_from(n).unwrap_or(usize::MAX)
}

impl Ord for DecimalApprox {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.mantissa.signum().cmp(&other.mantissa.signum()) {
            Ordering::Equal if self.mantissa.is_zero() => return Ordering::Equal,
            Ordering::Equal => {}
            unequal => return unequal,
        }

        // Align both mantissas to the smaller exponent.
        let base = self.exponent.min(other.exponent);
        let lhs = &self.mantissa * &Integer::pow10(to_usize(self.exponent - base));
        let rhs = &other.mantissa * &Integer::pow10(to_usize(other.exponent - base));
        lhs.cmp(&rhs)
    }
}

impl PartialOrd for DecimalApprox {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for DecimalApprox {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for DecimalApprox {}

impl fmt::Debug for DecimalApprox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DecimalApprox({}e{})", self.mantissa, self.exponent)
    }
}
