//! # Number types
//!
//! Integers are taken from the `num` crate, rationals are built on top of them.
pub mod integer;
pub mod rational;
