//! # Rational numbers
//!
//! Exact computation of arbitrary precision. At the moment, this is just wrapping the
//! `num_rational::BigRational` type, following the newtype pattern. This is needed because division
//! by zero and parsing behave differently from what `num_rational` provides.
use std::fmt::{self, Display, Formatter};
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};
use std::str::FromStr;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{FromPrimitive, One, Signed, ToPrimitive, Zero};

use crate::data::number_types::traits::NumberField;
use crate::error::ParseNumberError;

mod macros;

/// An exact fraction with numerator and denominator of unbounded size.
///
/// Always in lowest terms with a positive denominator, so that structural equality is numerical
/// equality. Ordering is exact and agrees with equality.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Fraction(BigRational);

impl Fraction {
    /// Create a new fraction, reduced to lowest terms.
    ///
    /// # Panics
    ///
    /// If the denominator is zero.
    pub fn new(numerator: i64, denominator: i64) -> Self {
        assert_ne!(denominator, 0, "the denominator of a fraction can't be zero");

        Self(BigRational::new(numerator.into(), denominator.into()))
    }

    /// Create a fraction with denominator one.
    pub fn from_integer(value: i64) -> Self {
        Self(BigRational::from_integer(value.into()))
    }

    /// Numerator in lowest terms, carries the sign.
    pub fn numerator(&self) -> &BigInt {
        self.0.numer()
    }

    /// Denominator in lowest terms, always positive.
    pub fn denominator(&self) -> &BigInt {
        self.0.denom()
    }
}

impl NumberField for Fraction {
    fn is_positive(&self) -> bool {
        self.0.is_positive()
    }

    fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    fn abs(&self) -> Self {
        Self(self.0.abs())
    }
}

impl Zero for Fraction {
    fn zero() -> Self {
        Self(BigRational::zero())
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl One for Fraction {
    fn one() -> Self {
        Self(BigRational::one())
    }
}

macro_rules! impl_operation {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident) => {
        impl $trait for Fraction {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self::Output {
                Self($trait::$method(self.0, rhs.0))
            }
        }

        impl $assign_trait for Fraction {
            fn $assign_method(&mut self, rhs: Self) {
                $assign_trait::$assign_method(&mut self.0, rhs.0);
            }
        }
    }
}

impl_operation!(Add, add, AddAssign, add_assign);
impl_operation!(Sub, sub, SubAssign, sub_assign);

impl Mul for Fraction {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

/// Dividing by zero yields zero.
impl Div for Fraction {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        if rhs.is_zero() {
            Self::zero()
        } else {
            Self(self.0 / rhs.0)
        }
    }
}

impl Neg for Fraction {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Sum for Fraction {
    fn sum<I: Iterator<Item=Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |total, value| total + value)
    }
}

impl FromPrimitive for Fraction {
    fn from_i64(n: i64) -> Option<Self> {
        Some(Self(BigRational::from_integer(n.into())))
    }

    fn from_u64(n: u64) -> Option<Self> {
        Some(Self(BigRational::from_integer(n.into())))
    }

    /// The exact value of the float, `None` if it is not finite.
    fn from_f64(n: f64) -> Option<Self> {
        BigRational::from_float(n).map(Self)
    }
}

impl ToPrimitive for Fraction {
    fn to_i64(&self) -> Option<i64> {
        self.0.to_integer().to_i64()
    }

    fn to_u64(&self) -> Option<u64> {
        self.0.to_integer().to_u64()
    }

    fn to_f64(&self) -> Option<f64> {
        self.0.to_f64()
    }
}

/// Accepts integers (`"3"`), quotients (`"-3/4"`) and decimals (`"1.25"`, read exactly as 5/4).
impl FromStr for Fraction {
    type Err = ParseNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseNumberError::Empty);
        }

        match s.split_once('/') {
            Some((numerator, denominator)) => {
                let numerator = parse_integer(numerator.trim(), s)?;
                let denominator = parse_integer(denominator.trim(), s)?;
                if denominator.is_zero() {
                    return Err(ParseNumberError::ZeroDenominator(s.to_string()));
                }
                Ok(Self(BigRational::new(numerator, denominator)))
            }
            None => parse_decimal(s),
        }
    }
}

fn parse_integer(text: &str, original: &str) -> Result<BigInt, ParseNumberError> {
    let digits = text.strip_prefix(['-', '+']).unwrap_or(text);
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(ParseNumberError::Invalid(original.to_string()));
    }

    text.parse().map_err(|_| ParseNumberError::Invalid(original.to_string()))
}

fn parse_decimal(s: &str) -> Result<Fraction, ParseNumberError> {
    let Some((whole, decimals)) = s.split_once('.') else {
        return parse_integer(s, s).map(|value| Fraction(BigRational::from_integer(value)));
    };
    if decimals.is_empty() || !decimals.chars().all(|c| c.is_ascii_digit()) {
        return Err(ParseNumberError::Invalid(s.to_string()));
    }

    let (negative, digits) = match whole.strip_prefix('-') {
        Some(digits) => (true, digits),
        None => (false, whole.strip_prefix('+').unwrap_or(whole)),
    };
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(ParseNumberError::Invalid(s.to_string()));
    }

    let magnitude = parse_integer(&format!("{digits}{decimals}"), s)?;
    let scale = num_traits::pow(BigInt::from(10), decimals.len());
    let numerator = if negative { -magnitude } else { magnitude };

    Ok(Fraction(BigRational::new(numerator, scale)))
}

impl Display for Fraction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad(&self.0.to_string())
    }
}

#[cfg(test)]
mod test {
    use num_bigint::BigInt;
    use num_traits::{FromPrimitive, One, ToPrimitive, Zero};

    use crate::FR;
    use crate::data::number_types::rational::Fraction;
    use crate::data::number_types::traits::NumberField;
    use crate::error::ParseNumberError;

    #[test]
    fn field_identities() {
        for i in -10..0 {
            assert_eq!(FR!(0, i), Fraction::zero());
            assert_eq!(FR!(i, i), Fraction::one());
        }
        for i in 1..10 {
            assert_eq!(FR!(0, i), Fraction::zero());
            assert_eq!(FR!(i, i), Fraction::one());
        }
    }

    #[test]
    #[should_panic]
    fn panic_zero_denominator() {
        let _result = FR!(3, 0);
    }

    #[test]
    fn lowest_terms() {
        let x = FR!(6, -4);
        assert_eq!(x.numerator(), &BigInt::from(-3));
        assert_eq!(x.denominator(), &BigInt::from(2));
        assert_eq!(FR!(0, -7).denominator(), &BigInt::from(1));
    }

    #[test]
    fn eq() {
        assert_eq!(FR!(3, 2), FR!(6, 4));
        assert_eq!(FR!(0, 2), FR!(0, 5));
        assert_eq!(FR!(0, 2), FR!(0));
        assert_ne!(FR!(1, 3), FR!(333_333, 1_000_000));
    }

    #[test]
    fn add() {
        assert_eq!(FR!(3, 2) + FR!(6, 4), FR!(3));
        assert_eq!(FR!(1, 6) + FR!(1, 3), FR!(1, 2));

        let mut x = FR!(0);
        for _ in 0..1000 {
            x += FR!(1, 1000);
        }
        assert_eq!(x, FR!(1));
    }

    #[test]
    fn add_then_subtract() {
        let values = [FR!(1, 3), FR!(-7, 9), FR!(5), FR!(0), FR!(-22, 7)];
        for a in &values {
            for b in &values {
                assert_eq!(a.clone() + b.clone() - b.clone(), a.clone());
            }
        }
    }

    #[test]
    fn sub() {
        assert_eq!(FR!(3, 2) - FR!(6, 4), FR!(0));
        assert_eq!(FR!(1, 2) - FR!(3, 4), FR!(-1, 4));

        let mut x = FR!(1);
        x -= FR!(1, 3);
        assert_eq!(x, FR!(2, 3));
    }

    #[test]
    fn mul() {
        assert_eq!(FR!(3, 2) * FR!(2, 3), FR!(1));
        assert_eq!(FR!(-3, 4) * FR!(-1), FR!(3, 4));
        assert_eq!(FR!(0) * FR!(5, 7), FR!(0));
    }

    #[test]
    fn div() {
        assert_eq!(FR!(3, 2) / FR!(3, 4), FR!(2));
        assert_eq!(FR!(1) / FR!(-2), FR!(-1, 2));
        assert_eq!(FR!(5) / FR!(0), FR!(0));
        for (a, b) in [(FR!(3, 7), FR!(-5, 11)), (FR!(-13), FR!(2, 9))] {
            assert_eq!(a.clone() / b.clone() * b, a);
        }
    }

    #[test]
    fn beyond_64_bits() {
        let large = FR!(i64::MAX) + FR!(1);
        assert_eq!(large.to_i64(), None);
        assert_eq!(large.clone() - FR!(1), FR!(i64::MAX));

        let product = FR!(1, i64::MAX) * FR!(1, i64::MAX - 1);
        assert!(product.is_positive());
        assert_eq!(product * FR!(i64::MAX) * FR!(i64::MAX - 1), FR!(1));
    }

    #[test]
    fn sign_and_abs() {
        assert!(FR!(1, 1_000_000).is_positive());
        assert!(FR!(-1, 1_000_000).is_negative());
        assert!(!FR!(0).is_positive() && !FR!(0).is_negative());
        assert_eq!(FR!(-5, 3).abs(), FR!(5, 3));
    }

    #[test]
    fn ordering() {
        assert!(FR!(1, 3) < FR!(1, 2));
        assert!(FR!(-1, 2) < FR!(-1, 3));
        assert!(FR!(2, 4) <= FR!(1, 2));
        assert!(FR!(1, 1_000_000) > FR!(0));
    }

    #[test]
    fn ordering_agrees_with_equality() {
        let a = FR!(i64::MAX, i64::MAX - 1);
        let b = FR!(i64::MAX - 1, i64::MAX - 2);
        assert_ne!(a, b);
        assert!(a < b);
        assert_ne!(a.partial_cmp(&b), Some(std::cmp::Ordering::Equal));

        assert!(FR!(i64::MAX, 2) > FR!(i64::MAX - 2, 3));
    }

    #[test]
    fn conversions() {
        assert_eq!(Fraction::from_f64(0.25), Some(FR!(1, 4)));
        assert_eq!(Fraction::from_f64(-2.5), Some(FR!(-5, 2)));
        assert_eq!(Fraction::from_f64(f64::NAN), None);
        assert_eq!(Fraction::from_u64(u64::MAX), Some(FR!(i64::MAX) * FR!(2) + FR!(1)));
        assert_eq!(FR!(7, 2).to_i64(), Some(3));
        assert_eq!(FR!(7, 2).to_f64(), Some(3.5));
    }

    #[test]
    fn parse() {
        assert_eq!("3".parse::<Fraction>(), Ok(FR!(3)));
        assert_eq!("-3/4".parse::<Fraction>(), Ok(FR!(-3, 4)));
        assert_eq!(" 6 / -8 ".parse::<Fraction>(), Ok(FR!(-3, 4)));
        assert_eq!("1.25".parse::<Fraction>(), Ok(FR!(5, 4)));
        assert_eq!("-0.5".parse::<Fraction>(), Ok(FR!(-1, 2)));
        assert_eq!(".5".parse::<Fraction>(), Ok(FR!(1, 2)));
        assert_eq!("".parse::<Fraction>(), Err(ParseNumberError::Empty));
        assert_eq!("1/0".parse::<Fraction>(), Err(ParseNumberError::ZeroDenominator("1/0".to_string())));
        assert_eq!("1.2.3".parse::<Fraction>(), Err(ParseNumberError::Invalid("1.2.3".to_string())));
        assert_eq!("+-3.5".parse::<Fraction>(), Err(ParseNumberError::Invalid("+-3.5".to_string())));
        assert_eq!("x".parse::<Fraction>(), Err(ParseNumberError::Invalid("x".to_string())));
        assert_eq!(
            "99999999999999999999".parse::<Fraction>(),
            Ok(FR!(99_999_999_999, 1) * FR!(1_000_000_000) + FR!(999_999_999)),
        );
    }

    #[test]
    fn display() {
        assert_eq!(FR!(3).to_string(), "3");
        assert_eq!(FR!(-6, 4).to_string(), "-3/2");
        assert_eq!(format!("{:>5}", FR!(1, 2)), "  1/2");
    }
}
