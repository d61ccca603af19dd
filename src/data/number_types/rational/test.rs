use std::cmp::Ordering;

use num::{BigInt, One, Zero};

use crate::data::number_types::rational::{
    add, compare, divide, multiply, negate, parse_rational, subtract, DivBy, RationalBig,
    RationalError,
};
use crate::RB;

#[test]
fn field_identities() {
    for i in -10..0 {
        assert_eq!(RB!(0, i), RationalBig::zero());
    }
    for i in 1..10 {
        assert_eq!(RB!(0, i), RationalBig::zero());
    }
    for i in -10..0 {
        assert_eq!(RB!(i, i), RationalBig::one());
    }
    for i in 1..10 {
        assert_eq!(RB!(i, i), RationalBig::one());
    }
}

#[test]
#[should_panic]
fn panic_divide_zero_by_zero() {
    let _result = RB!(0, 0);
}

#[test]
#[should_panic]
fn panic_divide_nonzero_by_zero() {
    let _result = RB!(3, 0);
}

#[test]
fn zero_denominator() {
    assert_eq!(RationalBig::new(3, 0), Err(RationalError::InvalidRational));
    assert_eq!(3_i32.div_by(0), Err(RationalError::InvalidRational));
}

#[test]
fn eq() {
    assert_eq!(RB!(3, 2), RB!(6, 4));
    assert_eq!(RB!(0, 2), RB!(0, 5));
    assert_eq!(RB!(0, 2), RB!(0));
    assert_eq!(RB!(2_000_000_000_i64, 4_000_000_000_i64), RB!(1, 2));
    assert_ne!(RB!(1, 2), RB!(-1, 2));
}

#[test]
fn canonical() {
    let value = RB!(-6, -4);
    assert_eq!(value.numer(), &BigInt::from(3));
    assert_eq!(value.denom(), &BigInt::from(2));

    let value = RB!(6, -4);
    assert_eq!(value.numer(), &BigInt::from(-3));
    assert_eq!(value.denom(), &BigInt::from(2));

    let value = RB!(0, -7);
    assert_eq!(value.numer(), &BigInt::zero());
    assert_eq!(value.denom(), &BigInt::one());

    assert_eq!(value.reduce(), value);
}

#[test]
fn display() {
    assert_eq!(RB!(2, 1).to_string(), "2");
    assert_eq!(RB!(-2, 4).to_string(), "-1/2");
    assert_eq!(RB!(1, -2).to_string(), "-1/2");
    assert_eq!(RB!(4, 2).to_string(), "2");
    assert_eq!(RB!(0, 3).to_string(), "0");
    assert_eq!(RB!(-7).to_string(), "-7");
}

#[test]
fn add_() {
    assert_eq!(RB!(3, 2) + RB!(6, 4), RB!(3));
    assert_eq!(RB!(0, 2) + RB!(0, 5), RB!(0, 3));
    assert_eq!((RB!(1, 2) + RB!(1, 3)).to_string(), "5/6");
    assert_eq!(RB!(1, 4) + RB!(1, 4), RB!(1, 2));

    let mut x = RB!(0);
    for _ in 0..1000 {
        x = x + RB!(1);
    }
    assert_eq!(x, RB!(1000));

    let mut x = RB!(0);
    for _ in 0..10 {
        x += &RB!(1, 10);
    }
    assert_eq!(x, RB!(1));
}

#[test]
fn sub() {
    assert_eq!(RB!(3, 2) - RB!(6, 4), RB!(0, 9));
    assert_eq!(RB!(0, 2) - RB!(0, 5), RB!(0, 3));
    assert_eq!((RB!(1, 2) - RB!(1, 3)).to_string(), "1/6");
    assert_eq!(RB!(1, 3) - RB!(1, 2), RB!(-1, 6));

    let mut x = RB!(1);
    x -= RB!(1, 3);
    assert_eq!(x, RB!(2, 3));
}

#[test]
fn mul() {
    assert_eq!(RB!(3, 2) * RB!(6, 4), RB!(9, 4));
    assert_eq!(RB!(0, 2) * RB!(0, 5), RB!(0, 3));
    assert_eq!((RB!(1, 2) * RB!(1, 3)).to_string(), "1/6");
    assert_eq!(RB!(-2, 3) * RB!(3, -2), RB!(1));

    let mut x = RB!(2, 3);
    x *= &RB!(3, 4);
    assert_eq!(x, RB!(1, 2));
}

#[test]
fn div() {
    assert_eq!(RB!(3, 2) / RB!(6, 4), RationalBig::one());
    assert_eq!(RB!(0, 2) / RB!(2, 5), RationalBig::zero());
    assert_eq!((RB!(1, 2) / RB!(1, 3)).to_string(), "3/2");
    assert_eq!(RB!(1, 2) / RB!(-1, 3), RB!(-3, 2));

    let mut x = RB!(1, 2);
    x /= RB!(1, 4);
    assert_eq!(x, RB!(2));
}

#[test]
#[should_panic]
fn div_zero() {
    let _result = RB!(4564, 65468) / RB!(0, 654654);
}

#[test]
fn checked_div() {
    assert_eq!(RB!(1, 2).checked_div(&RB!(1, 3)), Ok(RB!(3, 2)));
    assert_eq!(RB!(1, 2).checked_div(&RB!(0)), Err(RationalError::DivisionByZero));
    assert_eq!(RB!(0).inverse(), Err(RationalError::DivisionByZero));
    assert_eq!(RB!(-2, 3).inverse(), Ok(RB!(-3, 2)));
}

#[test]
fn neg() {
    assert_eq!(-RB!(1, 2), RB!(-1, 2));
    assert_eq!((-RB!(1, 2)).to_string(), "-1/2");
    assert_eq!(-&RB!(-1, 2), RB!(1, 2));
    assert_eq!(-RB!(0), RB!(0));
}

#[test]
fn ord() {
    assert!(RB!(1, 2) < RB!(2, 3));
    assert!(RB!(2, 3) > RB!(1, 2));
    assert!(RB!(-1, 2) < RB!(1, 3));
    assert!(RB!(-1, 2) < RB!(-1, 3));
    assert!(RB!(1, 2) <= RB!(2, 4));
    assert!(RB!(1, 2) >= RB!(2, 4));
    assert_eq!(RB!(3, 5).cmp(&RB!(6, 10)), Ordering::Equal);

    let mut values = vec![RB!(3, 4), RB!(-1), RB!(1, 3), RB!(0), RB!(1, 2)];
    values.sort();
    assert_eq!(values, vec![RB!(-1), RB!(0), RB!(1, 3), RB!(1, 2), RB!(3, 4)]);
}

#[test]
fn ord_beyond_f64() {
    // Both round to the same f64.
    let big = BigInt::from(2).pow(60);
    let smaller = RationalBig::new(&big - 1, big.clone()).unwrap();
    let larger = RationalBig::new(big.clone(), big.clone() + 1).unwrap();
    assert_eq!(smaller.to_f64(), larger.to_f64());
    assert!(smaller < larger);
    assert_eq!(compare(&smaller, &larger), Ordering::Less);
}

#[test]
fn with_primitive() {
    assert_eq!(RB!(1, 2) + &1_i32, RB!(3, 2));
    assert_eq!(&RB!(1, 2) - &1_u64, RB!(-1, 2));
    assert_eq!(RB!(1, 2) * &4_usize, RB!(2));
    assert_eq!(RB!(1, 2) / &3_i128, RB!(1, 6));
    assert_eq!(RB!(4, 2), 2_i32);
    assert_ne!(RB!(5, 2), 2_i32);

    let mut x = RB!(1, 3);
    x += 1_i64;
    assert_eq!(x, RB!(4, 3));
    x -= 2_i64;
    assert_eq!(x, RB!(-2, 3));
    x *= 3_u32;
    assert_eq!(x, RB!(-2));
}

#[test]
fn with_primitive_assign_by_reference() {
    let mut x = RB!(1, 3);
    x += &1_i32;
    assert_eq!(x, RB!(4, 3));
    x -= &2_u64;
    assert_eq!(x, RB!(-2, 3));
    x *= &3_isize;
    assert_eq!(x, RB!(-2));
    x /= &4_i128;
    assert_eq!(x, RB!(-1, 2));
    x /= -3_i64;
    assert_eq!(x, RB!(1, 6));
}

#[test]
#[should_panic]
fn with_primitive_div_zero() {
    let _result = RB!(1, 2) / &0_u32;
}

#[test]
#[should_panic]
fn with_primitive_div_assign_zero() {
    let mut x = RB!(1, 2);
    x /= 0_usize;
}

#[test]
fn div_by() {
    assert_eq!(1_i32.div_by(2), Ok(RB!(1, 2)));
    assert_eq!(2_000_000_000_i64.div_by(4_000_000_000), Ok(RB!(1, 2)));
    assert_eq!(6_u32.div_by(4), Ok(RB!(3, 2)));
}

#[test]
fn free_functions() {
    let half = RB!(1, 2);
    let third = RB!(1, 3);

    assert_eq!(add(&half, &third), RB!(5, 6));
    assert_eq!(subtract(&half, &third), RB!(1, 6));
    assert_eq!(multiply(&half, &third), RB!(1, 6));
    assert_eq!(divide(&half, &third), Ok(RB!(3, 2)));
    assert_eq!(divide(&half, &RB!(0)), Err(RationalError::DivisionByZero));
    assert_eq!(negate(&half), RB!(-1, 2));
    assert_eq!(compare(&half, &third), Ordering::Greater);
    assert_eq!(compare(&third, &half), Ordering::Less);
    assert_eq!(compare(&half, &RB!(2, 4)), Ordering::Equal);
    assert_eq!(parse_rational("117/1098").map(|value| value.to_string()), Ok("13/122".to_string()));
}

#[test]
fn sum_product() {
    let values = vec![RB!(1, 2), RB!(1, 3), RB!(1, 6)];
    assert_eq!(values.iter().sum::<RationalBig>(), RB!(1));
    assert_eq!(values.iter().product::<RationalBig>(), RB!(1, 36));
    assert_eq!(values.into_iter().sum::<RationalBig>(), RB!(1));
    assert_eq!(Vec::<RationalBig>::new().into_iter().product::<RationalBig>(), RB!(1));
}

#[test]
fn helpers() {
    assert!(RB!(4, 2).is_integer());
    assert!(!RB!(1, 2).is_integer());
    assert!(RB!(-1, 2).is_negative());
    assert!(RB!(1, 2).is_positive());
    assert!(!RB!(0).is_positive() && !RB!(0).is_negative());
    assert_eq!(RB!(-3, 4).abs(), RB!(3, 4));
    assert_eq!(RB!(-3, 4).signum(), RB!(-1));
    assert_eq!(RB!(0).signum(), RB!(0));
    assert_eq!(RB!(1, 4).to_f64(), Some(0.25));
    assert_eq!(RationalBig::default(), RB!(0));
}

#[test]
fn big_rational() {
    let value = num::BigRational::new(BigInt::from(-6), BigInt::from(4));
    let converted = RationalBig::from(value.clone());
    assert_eq!(converted, RB!(-3, 2));
    assert_eq!(num::BigRational::from(converted), value);
}
