//! # Traits
//!
//! The field the tableau engine computes in. The contract is "mathematically exact", but the
//! implementations aren't: floating point values compare with a tolerance.
use std::fmt::{Debug, Display};
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};
use std::str::FromStr;

use num_traits::{FromPrimitive, One, ToPrimitive, Zero};

use crate::error::ParseNumberError;

/// The simplex method is defined over the ordered fields.
///
/// All algorithmic logic in this crate is written against this trait, such that it runs without
/// adaptation on both [`Real`](crate::data::number_types::float::Real) and
/// [`Fraction`](crate::data::number_types::rational::Fraction).
///
/// Two properties that implementors should have, within the implementation's notion of equality:
///
/// * Division by a value that `is_zero` yields zero instead of failing.
/// * `a / b * b == a` whenever `b` is not zero.
pub trait NumberField:
    Clone +
    PartialEq +
    PartialOrd +
    Zero + // Additive identity
    One + // Multiplicative identity
    Neg<Output=Self> +
    Add<Output=Self> +
    AddAssign +
    Sub<Output=Self> +
    SubAssign +
    Mul<Output=Self> +
    Div<Output=Self> +
    Sum +
    FromPrimitive +
    ToPrimitive +
    FromStr<Err=ParseNumberError> +
    Display +
    Debug +
{
    /// Whether the value is strictly larger than zero.
    ///
    /// For inexact implementations, this means larger than zero beyond the tolerance.
    fn is_positive(&self) -> bool {
        *self > Self::zero()
    }

    /// Whether the value is strictly smaller than zero.
    ///
    /// For inexact implementations, this means smaller than zero beyond the tolerance.
    fn is_negative(&self) -> bool {
        *self < Self::zero()
    }

    /// The absolute value of a number.
    ///
    /// Compute the additive inverse if the number is smaller than the additive identity.
    fn abs(&self) -> Self {
        if self.is_negative() {
            -self.clone()
        } else {
            self.clone()
        }
    }
}
