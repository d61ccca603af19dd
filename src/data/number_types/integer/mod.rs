//! # Integers
//!
//! Arbitrary precision integers are `num::BigInt`, this module only adds what the rationals need.
use num::{BigInt, Signed, Zero};

/// Greatest common divisor, computed with the iterative Euclidean algorithm.
///
/// The result is never negative, `gcd(a, 0)` is `|a|` and `gcd(0, 0)` is `0`.
pub fn gcd(left: &BigInt, right: &BigInt) -> BigInt {
    let (mut larger, mut smaller) = {
        let (left, right) = (left.abs(), right.abs());
        if left >= right { (left, right) } else { (right, left) }
    };

    while !smaller.is_zero() {
        let remainder = &larger % &smaller;
        larger = smaller;
        smaller = remainder;
    }

    larger
}
