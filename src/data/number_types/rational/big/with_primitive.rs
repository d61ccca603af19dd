//! # Interactions with fixed size integers
use std::convert::From;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

use num::{BigInt, One, Zero};

use crate::data::number_types::rational::RationalError;

use super::Big;

/// Build a rational from two integers written next to each other: `1.div_by(2)`.
pub trait DivBy<Rhs = Self> {
    /// # Errors
    ///
    /// `RationalError::InvalidRational` when `denominator` is zero.
    fn div_by(self, denominator: Rhs) -> Result<Big, RationalError>;
}

macro_rules! define_interactions {
    ($t:ident) => {
        mod $t {
            use super::*;

            mod creation {
                use super::*;

                impl From<$t> for Big {
                    fn from(value: $t) -> Self {
                        Self::from_integer(value)
                    }
                }

                impl From<&$t> for Big {
                    fn from(value: &$t) -> Self {
                        Self::from(*value)
                    }
                }

                impl DivBy for $t {
                    fn div_by(self, denominator: $t) -> Result<Big, RationalError> {
                        Big::new(self, denominator)
                    }
                }
            }

            mod compare {
                use super::*;

                impl PartialEq<$t> for Big {
                    fn eq(&self, other: &$t) -> bool {
                        self.denominator.is_one() && self.numerator == BigInt::from(*other)
                    }
                }
            }

            mod field {
                use super::*;

                mod add {
                    use super::*;

                    impl Add<&$t> for Big {
                        type Output = Self;

                        fn add(self, rhs: &$t) -> Self::Output {
                            let (numerator, denominator) = self.into_parts();
                            let numerator = numerator + &denominator * BigInt::from(*rhs);
                            // The denominator is unchanged and still coprime with the numerator.
                            Big { numerator, denominator }
                        }
                    }

                    impl Add<&$t> for &Big {
                        type Output = Big;

                        fn add(self, rhs: &$t) -> Self::Output {
                            self.clone().add(rhs)
                        }
                    }

                    impl AddAssign<$t> for Big {
                        fn add_assign(&mut self, rhs: $t) {
                            self.numerator += &self.denominator * BigInt::from(rhs);
                        }
                    }

                    impl AddAssign<&$t> for Big {
                        fn add_assign(&mut self, rhs: &$t) {
                            self.add_assign(*rhs)
                        }
                    }
                }

                mod sub {
                    use super::*;

                    impl Sub<&$t> for Big {
                        type Output = Self;

                        fn sub(self, rhs: &$t) -> Self::Output {
                            let (numerator, denominator) = self.into_parts();
                            let numerator = numerator - &denominator * BigInt::from(*rhs);
                            Big { numerator, denominator }
                        }
                    }

                    impl Sub<&$t> for &Big {
                        type Output = Big;

                        fn sub(self, rhs: &$t) -> Self::Output {
                            self.clone().sub(rhs)
                        }
                    }

                    impl SubAssign<$t> for Big {
                        fn sub_assign(&mut self, rhs: $t) {
                            self.numerator -= &self.denominator * BigInt::from(rhs);
                        }
                    }

                    impl SubAssign<&$t> for Big {
                        fn sub_assign(&mut self, rhs: &$t) {
                            self.sub_assign(*rhs)
                        }
                    }
                }

                mod mul {
                    use super::*;

                    impl Mul<&$t> for Big {
                        type Output = Big;

                        fn mul(self, rhs: &$t) -> Self::Output {
                            let (numerator, denominator) = self.into_parts();
                            Big::reduced(numerator * BigInt::from(*rhs), denominator)
                        }
                    }

                    impl Mul<&$t> for &Big {
                        type Output = Big;

                        fn mul(self, rhs: &$t) -> Self::Output {
                            Big::reduced(&self.numerator * BigInt::from(*rhs), self.denominator.clone())
                        }
                    }

                    impl MulAssign<$t> for Big {
                        fn mul_assign(&mut self, rhs: $t) {
                            *self = &*self * &rhs;
                        }
                    }

                    impl MulAssign<&$t> for Big {
                        fn mul_assign(&mut self, rhs: &$t) {
                            *self = &*self * rhs;
                        }
                    }
                }

                mod div {
                    use super::*;

                    impl Div<&$t> for Big {
                        type Output = Big;

                        /// # Panics
                        ///
                        /// When `rhs` is zero.
                        fn div(self, rhs: &$t) -> Self::Output {
                            let rhs = BigInt::from(*rhs);
                            assert!(!rhs.is_zero(), "attempt to divide {} by zero", self);

                            let (numerator, denominator) = self.into_parts();
                            Big::reduced(numerator, denominator * rhs)
                        }
                    }

                    impl Div<&$t> for &Big {
                        type Output = Big;

                        fn div(self, rhs: &$t) -> Self::Output {
                            self.clone().div(rhs)
                        }
                    }

                    impl DivAssign<$t> for Big {
                        fn div_assign(&mut self, rhs: $t) {
                            *self = &*self / &rhs;
                        }
                    }

                    impl DivAssign<&$t> for Big {
                        fn div_assign(&mut self, rhs: &$t) {
                            *self = &*self / rhs;
                        }
                    }
                }
            }
        }
    }
}

define_interactions!(i32);
define_interactions!(i64);
define_interactions!(i128);
define_interactions!(isize);
define_interactions!(u32);
define_interactions!(u64);
define_interactions!(u128);
define_interactions!(usize);
