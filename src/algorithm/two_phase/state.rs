//! # Algorithm state
//!
//! Reading off from a tableau whether the simplex method can continue, and if not, why.
use std::fmt::{self, Display, Formatter};

use log::trace;

use crate::algorithm::two_phase::tableau::Tableau;
use crate::data::number_types::traits::NumberField;

/// Verdict on a single tableau.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum AlgorithmState {
    /// There is a column with a negative reduced cost and a positive coefficient to pivot on.
    Continue,
    /// No reduced cost is negative: the basic solution is optimal for the current objective.
    Completed,
    /// Some reduced costs are negative, but none of those columns has a positive coefficient.
    UnlimitedSolution,
    /// The artificial phase ended with a positive sum of artificial variables.
    Infeasible,
}

impl AlgorithmState {
    /// Whether no more pivots can be done.
    pub fn is_terminal(self) -> bool {
        self != AlgorithmState::Continue
    }
}

impl Display for AlgorithmState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AlgorithmState::Continue => "continue",
            AlgorithmState::Completed => "completed",
            AlgorithmState::UnlimitedSolution => "unlimited solution",
            AlgorithmState::Infeasible => "infeasible",
        })
    }
}

/// Classify a tableau.
///
/// The verdict doesn't depend on the order in which columns are inspected: a single pivotable
/// column with a negative reduced cost is enough to continue.
///
/// # Arguments
///
/// * `tableau`: Short tableau with the reduced costs in the last row.
/// * `is_artificial_phase`: Whether the objective row is the sum of artificial variables. Only
/// then can the verdict be `Infeasible`.
pub fn classify<F: NumberField>(tableau: &Tableau<F>, is_artificial_phase: bool) -> AlgorithmState {
    let mut any_negative = false;
    let mut any_pivotable = false;
    for j in (0..tableau.rhs_column()).filter(|&j| tableau.objective(j).is_negative()) {
        any_negative = true;
        if (0..tableau.nr_constraints()).any(|i| tableau[(i, j)].is_positive()) {
            any_pivotable = true;
            break;
        }
    }

    let state = match (any_negative, any_pivotable) {
        (_, true) => AlgorithmState::Continue,
        (true, false) => AlgorithmState::UnlimitedSolution,
        (false, _) if is_artificial_phase && tableau.objective_rhs().is_negative() => AlgorithmState::Infeasible,
        (false, _) => AlgorithmState::Completed,
    };
    trace!("classified {}x{} tableau as {state}", tableau.nr_rows(), tableau.nr_columns());

    state
}
