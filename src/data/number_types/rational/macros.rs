/// Shorthand for a rational literal: `RB!(3)` or `RB!(3, 2)`.
///
/// # Panics
///
/// When the denominator is zero.
#[macro_export]
macro_rules! RB {
    ($value:expr) => {
        $crate::RationalBig::from_integer($value)
    };
    ($numerator:expr, $denominator:expr) => {
        match $crate::RationalBig::new($numerator, $denominator) {
            Ok(value) => value,
            Err(error) => panic!("invalid rational literal: {}", error),
        }
    };
}
