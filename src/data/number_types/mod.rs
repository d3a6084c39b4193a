//! # Number types
//!
//! The tableau engine is defined over a field of numbers. This module defines that field as a trait
//! and provides two implementations.
//!
//! A benefit of this approach is that the algorithm can be tested well for correctness using
//! exact fractions, while the same code is used without adaptation with floating point numbers.
pub mod traits;
pub mod rational;
pub mod float;
