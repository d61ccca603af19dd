//! # Field operations between rationals
//!
//! Each operation is written once on references; the owned variants forward to it.
use std::iter::{Product, Sum};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num::{One, Zero};

use super::Big;

fn add(left: &Big, right: &Big) -> Big {
    if left.denominator == right.denominator {
        Big::reduced(&left.numerator + &right.numerator, left.denominator.clone())
    } else {
        Big::reduced(
            &left.numerator * &right.denominator + &right.numerator * &left.denominator,
            &left.denominator * &right.denominator,
        )
    }
}

fn sub(left: &Big, right: &Big) -> Big {
    if left.denominator == right.denominator {
        Big::reduced(&left.numerator - &right.numerator, left.denominator.clone())
    } else {
        Big::reduced(
            &left.numerator * &right.denominator - &right.numerator * &left.denominator,
            &left.denominator * &right.denominator,
        )
    }
}

fn mul(left: &Big, right: &Big) -> Big {
    Big::reduced(
        &left.numerator * &right.numerator,
        &left.denominator * &right.denominator,
    )
}

fn div(left: &Big, right: &Big) -> Big {
    match left.checked_div(right) {
        Ok(quotient) => quotient,
        Err(error) => panic!("attempt to divide {} by zero: {}", left, error),
    }
}

macro_rules! forward_binary_operation {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $implementation:ident) => {
        impl $trait<&Big> for &Big {
            type Output = Big;

            fn $method(self, rhs: &Big) -> Self::Output {
                $implementation(self, rhs)
            }
        }

        impl $trait<Big> for &Big {
            type Output = Big;

            fn $method(self, rhs: Big) -> Self::Output {
                $implementation(self, &rhs)
            }
        }

        impl $trait<&Big> for Big {
            type Output = Big;

            fn $method(self, rhs: &Big) -> Self::Output {
                $implementation(&self, rhs)
            }
        }

        impl $trait<Big> for Big {
            type Output = Big;

            fn $method(self, rhs: Big) -> Self::Output {
                $implementation(&self, &rhs)
            }
        }

        impl $assign_trait<&Big> for Big {
            fn $assign_method(&mut self, rhs: &Big) {
                *self = $implementation(self, rhs);
            }
        }

        impl $assign_trait<Big> for Big {
            fn $assign_method(&mut self, rhs: Big) {
                *self = $implementation(self, &rhs);
            }
        }
    };
}

forward_binary_operation!(Add, add, AddAssign, add_assign, add);
forward_binary_operation!(Sub, sub, SubAssign, sub_assign, sub);
forward_binary_operation!(Mul, mul, MulAssign, mul_assign, mul);
// Panics on a zero divisor, like the integer types do. See `Big::checked_div`.
forward_binary_operation!(Div, div, DivAssign, div_assign, div);

impl Neg for Big {
    type Output = Big;

    fn neg(self) -> Self::Output {
        // Negating the numerator keeps the fraction reduced.
        Big {
            numerator: -self.numerator,
            denominator: self.denominator,
        }
    }
}

impl Neg for &Big {
    type Output = Big;

    fn neg(self) -> Self::Output {
        Big {
            numerator: -&self.numerator,
            denominator: self.denominator.clone(),
        }
    }
}

impl Sum for Big {
    fn sum<I: Iterator<Item = Big>>(iter: I) -> Self {
        iter.fold(Big::zero(), |total, value| total + value)
    }
}

impl<'a> Sum<&'a Big> for Big {
    fn sum<I: Iterator<Item = &'a Big>>(iter: I) -> Self {
        iter.fold(Big::zero(), |total, value| total + value)
    }
}

impl Product for Big {
    fn product<I: Iterator<Item = Big>>(iter: I) -> Self {
        iter.fold(Big::one(), |total, value| total * value)
    }
}

impl<'a> Product<&'a Big> for Big {
    fn product<I: Iterator<Item = &'a Big>>(iter: I) -> Self {
        iter.fold(Big::one(), |total, value| total * value)
    }
}
