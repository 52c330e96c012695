//! Arbitrary precision rational numbers.
//!
//! Every constructor funnels through the same normalization: divide out
//! the gcd and move the sign onto the numerator. Equality and hashing are
//! therefore structural on the reduced pair.

use num_traits::{One, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

use crate::compare::{CompareConfig, CompareStrategy, DecimalApprox};
use crate::error::NumberError;
use crate::Integer;

/// An arbitrary precision rational number.
///
/// Rationals are always stored in lowest terms with a positive denominator;
/// zero is stored as `0/1`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Rational {
    numerator: Integer,
    denominator: Integer,
}

impl Rational {
    /// Creates a new rational from numerator and denominator.
    ///
    /// # Errors
    ///
    /// Returns [`NumberError::InvalidArgument`] if the denominator is zero.
    pub fn new(numerator: Integer, denominator: Integer) -> Result<Self, NumberError> {
        if denominator.is_zero() {
            return Err(NumberError::ZERO_DENOMINATOR);
        }
        Ok(Self::reduce(numerator, denominator))
    }

    /// Creates a rational from i64 numerator and denominator.
    ///
    /// # Errors
    ///
    /// Returns [`NumberError::InvalidArgument`] if the denominator is zero.
    pub fn from_i64(numerator: i64, denominator: i64) -> Result<Self, NumberError> {
        Self::new(Integer::new(numerator), Integer::new(denominator))
    }

    /// Creates a rational from an integer (denominator = 1).
    #[must_use]
    pub fn from_integer(n: Integer) -> Self {
        Self {
            numerator: n,
            denominator: Integer::one(),
        }
    }

    /// Parses `"n"` or `"n/d"`. Same as `str::parse`.
    ///
    /// # Errors
    ///
    /// See the [`FromStr`] impl.
    pub fn parse(s: &str) -> Result<Self, NumberError> {
        s.parse()
    }

    // `denominator` must be non-zero.
    fn reduce(numerator: Integer, denominator: Integer) -> Self {
        let g = numerator.gcd(&denominator);
        let mut numerator = numerator / &g;
        let mut denominator = denominator / &g;
        if denominator.is_negative() {
            numerator = -numerator;
            denominator = -denominator;
        }
        Self {
            numerator,
            denominator,
        }
    }

    /// Returns the numerator. Carries the sign of the value.
    #[must_use]
    pub fn numerator(&self) -> &Integer {
        &self.numerator
    }

    /// Returns the denominator. Always positive.
    #[must_use]
    pub fn denominator(&self) -> &Integer {
        &self.denominator
    }

    /// Returns true if this rational is an integer.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.denominator.is_one()
    }

    /// Converts to an integer if the denominator is 1.
    #[must_use]
    pub fn to_integer(&self) -> Option<Integer> {
        if self.is_integer() {
            Some(self.numerator.clone())
        } else {
            None
        }
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self {
            numerator: self.numerator.abs(),
            denominator: self.denominator.clone(),
        }
    }

    /// Returns the reciprocal (1/x).
    ///
    /// # Errors
    ///
    /// Returns [`NumberError::InvalidArgument`] if the rational is zero.
    pub fn recip(&self) -> Result<Self, NumberError> {
        Self::new(self.denominator.clone(), self.numerator.clone())
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        self.numerator.signum()
    }

    /// Returns true if negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.numerator.is_negative()
    }

    /// Divides by `rhs`.
    ///
    /// # Errors
    ///
    /// Returns [`NumberError::InvalidArgument`] if `rhs` is zero.
    pub fn checked_div(&self, rhs: &Self) -> Result<Self, NumberError> {
        Self::new(
            &self.numerator * &rhs.denominator,
            &self.denominator * &rhs.numerator,
        )
    }

    /// Compares two rationals under the given strategy.
    ///
    /// [`CompareStrategy::Decimal`] rounds both sides to a fixed number of
    /// significant digits first, so values that agree up to that digit
    /// compare as `Equal` even when they differ.
    #[must_use]
    pub fn compare_with(&self, other: &Self, config: &CompareConfig) -> Ordering {
        match config.strategy {
            CompareStrategy::Exact => self.cmp(other),
            CompareStrategy::Decimal { significant_digits } => self
                .to_decimal(significant_digits)
                .cmp(&other.to_decimal(significant_digits)),
        }
    }

    /// Rounds to `significant_digits` decimal digits, half away from zero.
    #[must_use]
    pub fn to_decimal(&self, significant_digits: usize) -> DecimalApprox {
        DecimalApprox::from_rational(self, significant_digits)
    }

    /// Returns true if `low <= self <= high`.
    #[must_use]
    pub fn is_within(&self, low: &Self, high: &Self) -> bool {
        low <= self && self <= high
    }

    /// [`Rational::is_within`] under the given comparison strategy.
    #[must_use]
    pub fn is_within_with(&self, low: &Self, high: &Self, config: &CompareConfig) -> bool {
        low.compare_with(self, config) != Ordering::Greater
            && self.compare_with(high, config) != Ordering::Greater
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self::zero()
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Self::from_integer(Integer::zero())
    }

    fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }
}

impl One for Rational {
    fn one() -> Self {
        Self::from_integer(Integer::one())
    }

    fn is_one(&self) -> bool {
        self.numerator.is_one() && self.denominator.is_one()
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        // Both denominators are positive, so cross-multiplying keeps the order.
        (&self.numerator * &other.denominator).cmp(&(&other.numerator * &self.denominator))
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromStr for Rational {
    type Err = NumberError;

    /// Parses `"n"` or `"n/d"` where both parts are optionally-signed
    /// decimal integers. The result is normalized.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split('/');
        let numerator = parts.next().unwrap_or_default();
        let denominator = parts.next();

        if parts.next().is_some() {
            log::debug!("too many '/' separators in rational {s:?}");
            return Err(NumberError::parse(s));
        }

        let parse_part = |part: &str| {
            part.parse::<Integer>().map_err(|_| {
                log::debug!("segment {part:?} of rational {s:?} is not an integer");
                NumberError::parse(s)
            })
        };

        let numerator = parse_part(numerator)?;
        let denominator = match denominator {
            Some(part) => parse_part(part)?,
            None => Integer::one(),
        };

        Self::new(numerator, denominator)
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({}/{})", self.numerator, self.denominator)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

// Arithmetic operations
impl Add for &Rational {
    type Output = Rational;

    fn add(self, rhs: Self) -> Self::Output {
        Rational::reduce(
            &self.numerator * &rhs.denominator + &rhs.numerator * &self.denominator,
            &self.denominator * &rhs.denominator,
        )
    }
}

impl Add<&Rational> for Rational {
    type Output = Self;

    fn add(self, rhs: &Rational) -> Self::Output {
        &self + rhs
    }
}

impl Add for Rational {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        &self + &rhs
    }
}

impl Sub for &Rational {
    type Output = Rational;

    fn sub(self, rhs: Self) -> Self::Output {
        Rational::reduce(
            &self.numerator * &rhs.denominator - &rhs.numerator * &self.denominator,
            &self.denominator * &rhs.denominator,
        )
    }
}

impl Sub<&Rational> for Rational {
    type Output = Self;

    fn sub(self, rhs: &Rational) -> Self::Output {
        &self - rhs
    }
}

impl Sub for Rational {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        &self - &rhs
    }
}

impl Mul for &Rational {
    type Output = Rational;

    fn mul(self, rhs: Self) -> Self::Output {
        Rational::reduce(
            &self.numerator * &rhs.numerator,
            &self.denominator * &rhs.denominator,
        )
    }
}

impl Mul<&Rational> for Rational {
    type Output = Self;

    fn mul(self, rhs: &Rational) -> Self::Output {
        &self * rhs
    }
}

impl Mul for Rational {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}

/// # Panics
///
/// Panics if the divisor is zero. Use [`Rational::checked_div`] to get an
/// error instead.
impl Div for &Rational {
    type Output = Rational;

    fn div(self, rhs: Self) -> Self::Output {
        assert!(!rhs.is_zero(), "division by zero rational");
        Rational::reduce(
            &self.numerator * &rhs.denominator,
            &self.denominator * &rhs.numerator,
        )
    }
}

impl Div<&Rational> for Rational {
    type Output = Self;

    fn div(self, rhs: &Rational) -> Self::Output {
        &self / rhs
    }
}

impl Div for Rational {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        &self / &rhs
    }
}

impl Neg for Rational {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            numerator: -self.numerator,
            denominator: self.denominator,
        }
    }
}

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Self::Output {
        -self.clone()
    }
}

impl From<Integer> for Rational {
    fn from(n: Integer) -> Self {
        Self::from_integer(n)
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Self::from_integer(Integer::new(n))
    }
}

impl From<i32> for Rational {
    fn from(n: i32) -> Self {
        Self::from_integer(Integer::from(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(n: i64, d: i64) -> Rational {
        Rational::from_i64(n, d).unwrap()
    }

    #[test]
    fn test_basic_ops() {
        let half = q(1, 2);
        let third = q(1, 3);

        assert_eq!(&half + &third, q(5, 6));
        assert_eq!(&half - &third, q(1, 6));
        assert_eq!(&half * &third, q(1, 6));
        assert_eq!(&half / &third, q(3, 2));
        assert_eq!(-half, q(-1, 2));
    }

    #[test]
    fn test_reduction() {
        let r = q(4, 6);
        assert_eq!(r.numerator().to_i64(), Some(2));
        assert_eq!(r.denominator().to_i64(), Some(3));
    }

    #[test]
    fn test_sign_moves_to_numerator() {
        let r = q(3, -9);
        assert_eq!(r.numerator().to_i64(), Some(-1));
        assert_eq!(r.denominator().to_i64(), Some(3));

        let r = q(-3, -9);
        assert_eq!(r.numerator().to_i64(), Some(1));
        assert_eq!(r.denominator().to_i64(), Some(3));
    }

    #[test]
    fn test_zero_is_canonical() {
        let r = q(0, -17);
        assert!(r.is_zero());
        assert_eq!(r.denominator().to_i64(), Some(1));
        assert_eq!(r, Rational::zero());
    }

    #[test]
    fn test_zero_denominator() {
        assert_eq!(
            Rational::from_i64(5, 0),
            Err(NumberError::InvalidArgument("denominator must not be zero"))
        );
        assert!(Rational::from_i64(0, 0).is_err());
    }

    #[test]
    fn test_machine_width_operands() {
        assert_eq!(q(2_000_000_000, 4_000_000_000), q(1, 2));
        assert_eq!(q(i64::MIN, i64::MIN), Rational::one());
    }

    #[test]
    fn test_display() {
        assert_eq!(q(2, 1).to_string(), "2");
        assert_eq!(q(-2, 4).to_string(), "-1/2");
        assert_eq!(q(2, 3).to_string(), "2/3");
        assert_eq!(q(0, 5).to_string(), "0");
        assert_eq!(format!("{:?}", q(-2, 4)), "Rational(-1/2)");
    }

    #[test]
    fn test_parse() {
        assert_eq!("117/1098".parse::<Rational>(), Ok(q(13, 122)));
        assert_eq!("117/1098".parse::<Rational>().unwrap().to_string(), "13/122");
        assert_eq!("-5".parse::<Rational>(), Ok(q(-5, 1)));
        assert_eq!("3/-6".parse::<Rational>(), Ok(q(-1, 2)));
        assert_eq!(Rational::parse("+4/8"), Ok(q(1, 2)));
    }

    #[test]
    fn test_parse_errors() {
        for bad in ["", "1/2/3", "a/2", "1/b", "1/", "/2", "1.5", "1 / 2"] {
            assert_eq!(
                bad.parse::<Rational>(),
                Err(NumberError::Parse { input: bad.to_string() }),
                "input {bad:?}"
            );
        }
    }

    #[test]
    fn test_parse_zero_denominator() {
        assert_eq!(
            "1/0".parse::<Rational>(),
            Err(NumberError::ZERO_DENOMINATOR)
        );
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(q(1, 2).checked_div(&Rational::zero()), Err(NumberError::ZERO_DENOMINATOR));
        assert_eq!(q(1, 2).checked_div(&q(-1, 4)), Ok(q(-2, 1)));
        assert!(Rational::zero().recip().is_err());
        assert_eq!(q(-2, 3).recip(), Ok(q(-3, 2)));
    }

    #[test]
    #[should_panic(expected = "division by zero rational")]
    fn test_div_operator_panics_on_zero() {
        let _ = q(1, 2) / Rational::zero();
    }

    #[test]
    fn test_ordering() {
        let half = q(1, 2);
        let third = q(1, 3);
        let two_thirds = q(2, 3);

        assert!(half < two_thirds);
        assert!(q(-1, 2) < q(-1, 3));
        assert!(half.is_within(&third, &two_thirds));
        assert!((third.clone()..=two_thirds.clone()).contains(&half));
        assert!(!q(3, 4).is_within(&third, &two_thirds));
        assert!(third.is_within(&third, &two_thirds));
    }

    #[test]
    fn test_large_operands() {
        let n: Integer = "912016490186296920119201192141970416029".parse().unwrap();
        let d: Integer = "1824032980372593840238402384283940832058".parse().unwrap();
        assert_eq!(Rational::new(n, d), Ok(q(1, 2)));
    }

    #[test]
    fn test_integer_conversion() {
        assert_eq!(q(6, 3).to_integer(), Some(Integer::new(2)));
        assert_eq!(q(1, 3).to_integer(), None);
        assert_eq!(Rational::from(-4i32), q(-4, 1));
        assert_eq!(q(-3, 4).abs(), q(3, 4));
        assert_eq!(q(-3, 4).signum(), -1);
    }
}
