//! # Reading rationals from text
//!
//! The accepted form is `"<integer>/<integer>"`, for example `"117/1098"` or `"-3/4"`.
use std::str::FromStr;

use itertools::Itertools;
use log::{debug, trace};
use num::BigInt;

use crate::data::number_types::rational::error::Part;
use crate::data::number_types::rational::{ParseError, RationalBig, RationalError};

impl FromStr for RationalBig {
    type Err = RationalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let result = parse(s);
        match &result {
            Ok(value) => trace!("parsed {:?} as {}", s, value),
            Err(error) => debug!("could not parse {:?}: {}", s, error),
        }

        result
    }
}

fn parse(s: &str) -> Result<RationalBig, RationalError> {
    let (numerator, denominator) = s
        .split('/')
        .collect_tuple()
        .ok_or_else(|| ParseError::Separators { found: s.matches('/').count() })?;

    let numerator = parse_part(numerator, Part::Numerator)?;
    let denominator = parse_part(denominator, Part::Denominator)?;

    RationalBig::new(numerator, denominator)
}

/// An optional sign followed by decimal digits.
fn parse_part(text: &str, part: Part) -> Result<BigInt, ParseError> {
    let text = text.trim();
    // `BigInt` would also skip `_` separators.
    let digits = text.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(text);
    if let Some(found) = digits.chars().find(|c| !c.is_ascii_digit()) {
        return Err(ParseError::Character { part, found });
    }

    text.parse()
        .map_err(|source| ParseError::Integer { part, source })
}
