//! # Strategies
//!
//! Deciding where to pivot.
pub mod pivot_rule;
