//! # Starting from a chosen basis
//!
//! Instead of the artificial phase, the caller can provide the basis to start the optimization
//! phase from. The constraint rows are brought into canonical form with respect to that basis by
//! Gauss-Jordan elimination, after which the basic solution is checked for feasibility.
use std::collections::BTreeSet;

use itertools::Itertools;
use log::debug;

use crate::algorithm::two_phase::phase_two::price_out;
use crate::algorithm::two_phase::tableau::Tableau;
use crate::algorithm::two_phase::variable::{Variable, VariableOrdering};
use crate::data::linear_algebra::elimination::gauss_jordan;
use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::linear_program::canonical_form::CanonicalForm;
use crate::data::number_types::traits::NumberField;
use crate::error::BasisError;

/// A basis provided by the caller.
#[derive(Clone, Debug, PartialEq)]
pub enum ExplicitBasis<F> {
    /// A basic feasible solution with a value for every variable. The variables with a nonzero
    /// value form the basis, and the basic solution should reproduce these values.
    Values(Vec<F>),
    /// Indices of the basic variables. The basic solution is only checked for feasibility.
    Indices(Vec<usize>),
}

impl<F: NumberField> ExplicitBasis<F> {
    /// Indices of the basic variables in the order given, after checking them.
    fn active_variables(&self, problem: &CanonicalForm<F>) -> Result<Vec<usize>, BasisError> {
        let (m, n) = (problem.nr_constraints(), problem.nr_variables());

        let active = match self {
            ExplicitBasis::Values(values) => {
                if values.len() != n {
                    return Err(BasisError::ValueCount { expected: n, actual: values.len() });
                }
                values.iter().enumerate()
                    .filter(|(_, value)| !value.is_zero())
                    .map(|(j, _)| j)
                    .collect::<Vec<_>>()
            },
            ExplicitBasis::Indices(indices) => indices.clone(),
        };

        if active.len() != m {
            return Err(BasisError::BasisSizeMismatch { expected: m, actual: active.len() });
        }
        if let Some(&index) = active.iter().find(|&&j| j >= n) {
            return Err(BasisError::UnknownVariable { index, nr_variables: n });
        }
        let mut seen = BTreeSet::new();
        if let Some(&index) = active.iter().find(|&&j| !seen.insert(j)) {
            return Err(BasisError::DuplicateVariable { index });
        }

        Ok(active)
    }
}

/// Create the first tableau of the optimization phase from a basis chosen by the caller.
///
/// The columns of the basic variables are moved to the front, in the order in which they were
/// given. After elimination, those columns form an identity matrix and are removed.
///
/// # Errors
///
/// If the basis has the wrong size or refers to variables that don't exist, if its columns are
/// linearly dependent, or if its basic solution is infeasible or differs from the given values.
pub fn explicit_tableau<F: NumberField>(
    problem: &CanonicalForm<F>,
    basis: &ExplicitBasis<F>,
) -> Result<(Tableau<F>, VariableOrdering), BasisError> {
    let active = basis.active_variables(problem)?;
    let (m, n) = (problem.nr_constraints(), problem.nr_variables());

    let order = active.iter().copied()
        .chain((0..n).filter(|j| !active.contains(j)))
        .chain([n])
        .collect::<Vec<_>>();
    let rows = problem.constraints().rows()
        .map(|row| order.iter().map(|&j| row[j].clone()).collect())
        .collect();
    let mut matrix = DenseMatrix::from_data(rows, n + 1);

    gauss_jordan(&mut matrix, m).map_err(|row| BasisError::DependentConstraintRow { row })?;
    matrix.remove_columns(&(0..m).collect::<Vec<_>>());

    let variables = VariableOrdering::new(
        active.iter().map(|&j| Variable::Structural(j)).collect(),
        order[m..n].iter().map(|&j| Variable::Structural(j)).collect(),
    );
    let tableau = price_out(&matrix, &variables, problem);

    for (i, &j) in active.iter().enumerate() {
        let actual = tableau.rhs(i);
        if actual.is_negative() {
            return Err(BasisError::ExplicitBasisInfeasible {
                index: j,
                expected: "a nonnegative value".to_string(),
                actual: actual.to_string(),
            });
        }
        if let ExplicitBasis::Values(values) = basis {
            if actual != values[j] {
                return Err(BasisError::ExplicitBasisInfeasible {
                    index: j,
                    expected: values[j].to_string(),
                    actual: actual.to_string(),
                });
            }
        }
    }
    debug!("explicit basis {} accepted", variables.basic().iter().join(", "));

    Ok((tableau, variables))
}
