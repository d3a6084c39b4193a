//! # A step-by-step tableau simplex solver
//!
//! Linear programs in canonical form are solved with the two-phase simplex method on a short
//! tableau, over floating point numbers or exact fractions. Every pivot produces a new step that
//! can be inspected and undone, and pivots can be chosen automatically or by the caller.
//!
//! The method follows the book Combinatorial Optimization by Christos H. Papadimitriou and Kenneth
//! Steiglitz.
#![warn(missing_docs)]

pub mod algorithm;
pub mod data;
pub mod error;

pub use error::Error;

#[cfg(test)]
mod tests;
