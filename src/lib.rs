//! # rust-rational
//!
//! Exact arithmetic on fractions of arbitrary precision integers.
//!
//! ```
//! use rust_rational::RB;
//!
//! let sum = RB!(1, 2) + RB!(1, 3);
//! assert_eq!(sum.to_string(), "5/6");
//! assert!(RB!(1, 2) < RB!(2, 3));
//! ```
pub mod data;

pub use data::number_types::rational::{
    DivBy, ParseError, RationalBig, RationalError, RationalRange,
};
