//! # Errors
use std::fmt;

use num::bigint::ParseBigIntError;
use thiserror::Error;

/// Everything that can go wrong when creating or dividing rationals.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RationalError {
    #[error("could not parse rational: {0}")]
    Parse(#[from] ParseError),
    #[error("division by zero")]
    DivisionByZero,
    /// The denominator was zero.
    #[error("invalid rational: zero denominator")]
    InvalidRational,
}

/// A string that doesn't read as `"<integer>/<integer>"`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("expected exactly one '/' separator, found {found}")]
    Separators { found: usize },
    #[error("unexpected character {found:?} in {part}")]
    Character { part: Part, found: char },
    #[error("{part} is not an integer")]
    Integer {
        part: Part,
        #[source]
        source: ParseBigIntError,
    },
}

/// Side of the fraction bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Part {
    Numerator,
    Denominator,
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Part::Numerator => "numerator",
            Part::Denominator => "denominator",
        })
    }
}
