//! # Algorithms
use std::fmt::{self, Display, Formatter};

use crate::data::linear_program::solution::Solution;
use crate::data::number_types::traits::NumberField;

pub mod options;
pub mod two_phase;

/// A linear program is either infeasible, unbounded or has a finite optimum.
///
/// This is determined as the result of an algorithm.
#[derive(Clone, Debug, PartialEq)]
pub enum OptimizationResult<F> {
    /// No solution satisfies all constraints.
    Infeasible,
    /// An optimal basic solution.
    FiniteOptimum(Solution<F>),
    /// The objective decreases without bound on the feasible set.
    Unbounded,
}

impl<F: NumberField> Display for OptimizationResult<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            OptimizationResult::Infeasible => writeln!(f, "the problem is infeasible"),
            OptimizationResult::FiniteOptimum(solution) => write!(f, "{solution}"),
            OptimizationResult::Unbounded => writeln!(f, "the problem is unbounded"),
        }
    }
}
