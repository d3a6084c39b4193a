//! # Floating point numbers
//!
//! Faster than fractions, but subject to (accumulating) rounding errors. All comparisons and zero
//! tests are therefore done with an absolute tolerance.
use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};
use std::str::FromStr;

use num_traits::{FromPrimitive, One, ToPrimitive, Zero};

use crate::data::number_types::traits::NumberField;
use crate::error::ParseNumberError;

/// Absolute tolerance used for every comparison between two `Real` values.
pub const EPSILON: f64 = 1e-5;

/// A finite `f64` with tolerant comparisons.
///
/// Two values are equal when they differ by at most [`EPSILON`]. Ordering is consistent with that
/// equality, so `<` and `>` are strict beyond the tolerance and `<=` and `>=` are tolerant.
///
/// Note that this equality is not transitive.
#[derive(Copy, Clone, Debug, Default)]
pub struct Real(f64);

impl Real {
    /// Wrap a float.
    ///
    /// # Panics
    ///
    /// If the value is not finite.
    pub fn new(value: f64) -> Self {
        assert!(value.is_finite(), "a real number must be finite, was {value}");

        Self(value)
    }

    /// The wrapped float.
    pub fn value(self) -> f64 {
        self.0
    }
}

impl NumberField for Real {}

impl PartialEq for Real {
    fn eq(&self, other: &Self) -> bool {
        (self.0 - other.0).abs() <= EPSILON
    }
}

impl PartialOrd for Real {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            Some(Ordering::Equal)
        } else {
            self.0.partial_cmp(&other.0)
        }
    }
}

impl Zero for Real {
    fn zero() -> Self {
        Self(0_f64)
    }

    fn is_zero(&self) -> bool {
        self.0.abs() <= EPSILON
    }
}

impl One for Real {
    fn one() -> Self {
        Self(1_f64)
    }
}

macro_rules! impl_operation {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident) => {
        impl $trait for Real {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self::Output {
                Self::new($trait::$method(self.0, rhs.0))
            }
        }

        impl $assign_trait for Real {
            fn $assign_method(&mut self, rhs: Self) {
                *self = $trait::$method(*self, rhs);
            }
        }
    }
}

impl_operation!(Add, add, AddAssign, add_assign);
impl_operation!(Sub, sub, SubAssign, sub_assign);

impl Mul for Real {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self::new(self.0 * rhs.0)
    }
}

/// Dividing by a value that is zero within the tolerance yields zero.
impl Div for Real {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        if rhs.is_zero() {
            Self::zero()
        } else {
            Self::new(self.0 / rhs.0)
        }
    }
}

impl Neg for Real {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Sum for Real {
    fn sum<I: Iterator<Item=Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |total, value| total + value)
    }
}

impl FromPrimitive for Real {
    fn from_i64(n: i64) -> Option<Self> {
        Some(Self(n as f64))
    }

    fn from_u64(n: u64) -> Option<Self> {
        Some(Self(n as f64))
    }

    fn from_f64(n: f64) -> Option<Self> {
        n.is_finite().then_some(Self(n))
    }
}

impl ToPrimitive for Real {
    fn to_i64(&self) -> Option<i64> {
        self.0.to_i64()
    }

    fn to_u64(&self) -> Option<u64> {
        self.0.to_u64()
    }

    fn to_f64(&self) -> Option<f64> {
        Some(self.0)
    }
}

/// Accepts any float literal, or a quotient of two of them such as `"1/3"`.
impl FromStr for Real {
    type Err = ParseNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseNumberError::Empty);
        }

        let parse = |part: &str| part.trim().parse::<f64>()
            .map_err(|_| ParseNumberError::Invalid(s.to_string()));
        let value = match s.split_once('/') {
            Some((numerator, denominator)) => {
                let denominator = parse(denominator)?;
                if denominator == 0_f64 {
                    return Err(ParseNumberError::ZeroDenominator(s.to_string()));
                }
                parse(numerator)? / denominator
            }
            None => parse(s)?,
        };

        Self::from_f64(value).ok_or_else(|| ParseNumberError::OutOfRange(s.to_string()))
    }
}

/// Prints at most six decimals, without trailing zeros, unless a precision is requested.
impl Display for Real {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if let Some(precision) = f.precision() {
            return write!(f, "{:.*}", precision, self.0);
        }

        let text = format!("{:.6}", self.0);
        let text = text.trim_end_matches('0').trim_end_matches('.');
        if text == "-0" {
            f.pad("0")
        } else {
            f.pad(text)
        }
    }
}

/// Shorthand for creating a real number in tests.
#[macro_export]
macro_rules! RE {
    ($value:expr) => {
        $crate::data::number_types::float::Real::new($value as f64)
    };
    ($numer:expr, $denom:expr) => {
        $crate::data::number_types::float::Real::new($numer as f64 / $denom as f64)
    };
}
