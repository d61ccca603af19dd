//! # Rational numbers
//!
//! Exact arithmetic on fractions of arbitrary precision integers.
//!
//! Values are always kept in lowest terms with a positive denominator, which makes equality,
//! hashing and ordering work on the represented number. The ordering is exact: it compares by
//! cross multiplication and never goes through floating point.
use std::cmp::Ordering;

pub use big::Big as RationalBig;
pub use big::DivBy;
pub use error::{ParseError, Part, RationalError};
pub use range::RationalRange;

mod big;
mod error;
mod macros;
mod parse;
mod range;

/// Read a rational from a `"p/q"` string.
pub fn parse_rational(text: &str) -> Result<RationalBig, RationalError> {
    text.parse()
}

pub fn add(left: &RationalBig, right: &RationalBig) -> RationalBig {
    left + right
}

pub fn subtract(left: &RationalBig, right: &RationalBig) -> RationalBig {
    left - right
}

pub fn multiply(left: &RationalBig, right: &RationalBig) -> RationalBig {
    left * right
}

/// # Errors
///
/// `RationalError::DivisionByZero` when `right` is zero.
pub fn divide(left: &RationalBig, right: &RationalBig) -> Result<RationalBig, RationalError> {
    left.checked_div(right)
}

pub fn negate(value: &RationalBig) -> RationalBig {
    -value
}

/// Exact comparison.
pub fn compare(left: &RationalBig, right: &RationalBig) -> Ordering {
    left.cmp(right)
}

#[cfg(test)]
mod test;
