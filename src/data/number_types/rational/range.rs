//! # Closed ranges of rationals
use std::fmt;
use std::ops::{Bound, RangeBounds, RangeInclusive};

use crate::data::number_types::rational::RationalBig;

/// The closed interval `[start, end]`.
///
/// Only used to test membership. A range with `start > end` is allowed and contains nothing.
#[derive(Eq, PartialEq, Hash, Clone, Debug)]
pub struct RationalRange {
    start: RationalBig,
    end: RationalBig,
}

impl RationalRange {
    pub fn new(start: RationalBig, end: RationalBig) -> Self {
        Self { start, end }
    }

    pub fn start(&self) -> &RationalBig {
        &self.start
    }

    pub fn end(&self) -> &RationalBig {
        &self.end
    }

    pub fn into_inner(self) -> (RationalBig, RationalBig) {
        (self.start, self.end)
    }

    /// Whether `start <= value <= end`.
    pub fn contains(&self, value: &RationalBig) -> bool {
        &self.start <= value && value <= &self.end
    }

    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }
}

impl From<RangeInclusive<RationalBig>> for RationalRange {
    fn from(range: RangeInclusive<RationalBig>) -> Self {
        let (start, end) = range.into_inner();
        Self::new(start, end)
    }
}

impl RangeBounds<RationalBig> for RationalRange {
    fn start_bound(&self) -> Bound<&RationalBig> {
        Bound::Included(&self.start)
    }

    fn end_bound(&self) -> Bound<&RationalBig> {
        Bound::Included(&self.end)
    }
}

impl fmt::Display for RationalRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}
