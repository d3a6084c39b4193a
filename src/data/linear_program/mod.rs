//! # Representing linear programs
//!
//! Linear programs in canonical form, as accepted by the tableau method, and their solutions.
pub mod canonical_form;
pub mod solution;
