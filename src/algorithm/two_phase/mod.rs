//! # The Simplex algorithm
//!
//! The tableau method, in two phases. A basic feasible solution is found either by minimizing the
//! sum of artificial variables, or by bringing a basis chosen by the caller into canonical form.
//! From there, the objective of the problem is minimized.
//!
//! The same logic runs on floating point numbers and on exact fractions, see
//! [`NumberField`](crate::data::number_types::traits::NumberField).
pub mod explicit_basis;
pub mod phase_one;
pub mod phase_two;
pub mod session;
pub mod state;
pub mod step;
pub mod strategy;
pub mod tableau;
pub mod variable;
