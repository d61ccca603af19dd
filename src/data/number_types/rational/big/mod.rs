//! # Arbitrary precision rationals
//!
//! Numerator and denominator are `num::BigInt`s, so values never overflow; they can only grow.
use std::cmp::Ordering;
use std::fmt;

use log::debug;
use num::{BigInt, BigRational, One, Signed, ToPrimitive, Zero};

use crate::data::number_types::integer::gcd;
use crate::data::number_types::rational::{RationalError, RationalRange};

pub use with_primitive::DivBy;

mod ops;
mod with_primitive;

/// A fraction of two arbitrary precision integers.
///
/// Values are kept in lowest terms with a strictly positive denominator. Because of that, the
/// derived equality and hash are those of the represented number: `2/4` and `1/2` are the same
/// value.
#[derive(Eq, PartialEq, Hash, Clone, Debug)]
pub struct Big {
    numerator: BigInt,
    /// Strictly positive, and coprime with the numerator.
    denominator: BigInt,
}

impl Big {
    /// Create a new rational from any two integers.
    ///
    /// # Errors
    ///
    /// `RationalError::InvalidRational` when the denominator is zero.
    pub fn new<N, D>(numerator: N, denominator: D) -> Result<Self, RationalError>
    where
        N: Into<BigInt>,
        D: Into<BigInt>,
    {
        let denominator = denominator.into();
        if denominator.is_zero() {
            debug!("rejected a rational with a zero denominator");
            return Err(RationalError::InvalidRational);
        }

        Ok(Self::reduced(numerator.into(), denominator))
    }

    /// The rational `value / 1`.
    pub fn from_integer<N: Into<BigInt>>(value: N) -> Self {
        Self {
            numerator: value.into(),
            denominator: BigInt::one(),
        }
    }

    /// Bring a fraction into canonical form.
    ///
    /// Both terms are divided by their greatest common divisor, after which the sign is moved to
    /// the numerator.
    pub(crate) fn reduced(mut numerator: BigInt, mut denominator: BigInt) -> Self {
        debug_assert!(!denominator.is_zero());

        let divisor = gcd(&numerator, &denominator);
        if !divisor.is_one() {
            numerator /= &divisor;
            denominator /= &divisor;
        }
        if denominator.is_negative() {
            numerator = -numerator;
            denominator = -denominator;
        }

        Self { numerator, denominator }
    }

    /// Canonical form of this value.
    ///
    /// Values are reduced when they are created, so this is a copy.
    pub fn reduce(&self) -> Self {
        Self::reduced(self.numerator.clone(), self.denominator.clone())
    }

    pub fn numer(&self) -> &BigInt {
        &self.numerator
    }

    /// Always positive.
    pub fn denom(&self) -> &BigInt {
        &self.denominator
    }

    pub fn into_parts(self) -> (BigInt, BigInt) {
        (self.numerator, self.denominator)
    }

    /// Swap numerator and denominator.
    ///
    /// # Errors
    ///
    /// `RationalError::DivisionByZero` when this value is zero.
    pub fn inverse(&self) -> Result<Self, RationalError> {
        if self.is_zero() {
            return Err(RationalError::DivisionByZero);
        }

        Ok(Self::reduced(self.denominator.clone(), self.numerator.clone()))
    }

    /// Divide, failing instead of panicking on a zero divisor.
    pub fn checked_div(&self, rhs: &Self) -> Result<Self, RationalError> {
        rhs.inverse().map(|inverse| self * inverse)
    }

    pub fn is_integer(&self) -> bool {
        self.denominator.is_one()
    }

    pub fn is_negative(&self) -> bool {
        self.numerator.is_negative()
    }

    pub fn is_positive(&self) -> bool {
        self.numerator.is_positive()
    }

    pub fn abs(&self) -> Self {
        Self {
            numerator: self.numerator.abs(),
            denominator: self.denominator.clone(),
        }
    }

    /// `-1`, `0` or `1`.
    pub fn signum(&self) -> Self {
        Self::from_integer(self.numerator.signum())
    }

    /// Closest `f64`, if there is one.
    ///
    /// This is an approximation; comparisons should happen on the rationals themselves.
    pub fn to_f64(&self) -> Option<f64> {
        BigRational::new_raw(self.numerator.clone(), self.denominator.clone()).to_f64()
    }

    /// The closed range from this value up to and including `end`.
    pub fn to(self, end: Self) -> RationalRange {
        RationalRange::new(self, end)
    }
}

impl Zero for Big {
    fn zero() -> Self {
        Self::from_integer(BigInt::zero())
    }

    fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }
}

impl One for Big {
    fn one() -> Self {
        Self::from_integer(BigInt::one())
    }
}

impl Default for Big {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<BigInt> for Big {
    fn from(value: BigInt) -> Self {
        Self::from_integer(value)
    }
}

impl From<BigRational> for Big {
    fn from(value: BigRational) -> Self {
        // `Ratio` keeps lowest terms with a positive denominator; reducing again is a no-op.
        let (numerator, denominator): (BigInt, BigInt) = value.into();
        Self::reduced(numerator, denominator)
    }
}

impl From<Big> for BigRational {
    fn from(value: Big) -> Self {
        BigRational::new_raw(value.numerator, value.denominator)
    }
}

impl Ord for Big {
    /// Exact comparison by cross multiplication.
    ///
    /// Denominators are positive, so multiplying both sides by them keeps the order.
    fn cmp(&self, other: &Self) -> Ordering {
        if self.denominator == other.denominator {
            self.numerator.cmp(&other.numerator)
        } else {
            let left = &self.numerator * &other.denominator;
            let right = &other.numerator * &self.denominator;
            left.cmp(&right)
        }
    }
}

impl PartialOrd for Big {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Big {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denominator.is_one() {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}
