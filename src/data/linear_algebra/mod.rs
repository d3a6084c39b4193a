//! # Linear algebra primitives
//!
//! Dense matrices and the row reduction that is needed to bring a matrix into canonical form with
//! respect to a chosen set of columns.

pub mod elimination;
pub mod matrix;
