//! # The artificial phase
//!
//! Finding a basic feasible solution by minimizing the sum of one artificial variable per
//! constraint row, starting from the basis that consists of exactly those artificial variables.
use log::{debug, info};

use crate::algorithm::two_phase::phase_two;
use crate::algorithm::two_phase::tableau::Tableau;
use crate::algorithm::two_phase::tableau::pivot::PivotCell;
use crate::algorithm::two_phase::variable::{Variable, VariableOrdering};
use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::linear_program::canonical_form::CanonicalForm;
use crate::data::number_types::traits::NumberField;

/// Create the first tableau of the artificial phase.
///
/// Rows with a negative right-hand side are negated, such that the artificial basis is feasible.
/// The objective row is the negated column sums, which are the reduced costs of the structural
/// variables with respect to the sum of the artificial variables.
///
/// # Return value
///
/// A tableau with a column for every structural variable, with the artificial variables basic.
pub fn artificial_tableau<F: NumberField>(problem: &CanonicalForm<F>) -> (Tableau<F>, VariableOrdering) {
    let (m, n) = (problem.nr_constraints(), problem.nr_variables());

    let mut rows = problem.constraints().rows()
        .map(|row| {
            if row[n].is_negative() {
                row.iter().map(|value| -value.clone()).collect()
            } else {
                row.to_vec()
            }
        })
        .collect::<Vec<Vec<_>>>();
    let objective = (0..=n)
        .map(|j| -rows.iter().map(|row| row[j].clone()).sum::<F>())
        .collect();
    rows.push(objective);

    let variables = VariableOrdering::new(
        (0..m).map(Variable::Artificial).collect(),
        (0..n).map(Variable::Structural).collect(),
    );

    (Tableau::new(DenseMatrix::from_data(rows, n + 1)), variables)
}

/// After a pivot in the artificial phase, an artificial variable that left the basis is removed
/// from the problem together with its column.
///
/// # Arguments
///
/// * `column`: The pivot column, which now holds the variable that left the basis.
pub(crate) fn remove_leaving_artificial<F>(
    tableau: &mut Tableau<F>,
    variables: &mut VariableOrdering,
    column: usize,
) {
    if variables.non_basic_variable(column).is_artificial() {
        tableau.delete_column(column);
        variables.remove_non_basic(column);
    }
}

/// Create the first tableau of the optimization phase from the last tableau of the artificial
/// phase.
///
/// Artificial variables that are still basic (necessarily at zero level) are pivoted out of the
/// basis on any nonzero coefficient in their row. If the row has no such coefficient, the
/// constraint is redundant and it is removed. The objective row is then replaced by the reduced
/// costs of the problem's objective.
///
/// # Arguments
///
/// * `tableau`: Tableau for which the artificial phase completed.
/// * `variables`: Variables of that tableau.
/// * `problem`: Problem that provides the cost vector.
pub fn into_optimization<F: NumberField>(
    tableau: &Tableau<F>,
    variables: &VariableOrdering,
    problem: &CanonicalForm<F>,
) -> (Tableau<F>, VariableOrdering) {
    debug_assert!(tableau.objective_rhs().is_zero());
    debug_assert!(variables.non_basic().iter().all(|variable| !variable.is_artificial()));

    let mut tableau = tableau.clone();
    let mut variables = variables.clone();
    let rows_to_remove = remove_artificial_basis_variables(&mut tableau, &mut variables);
    for &row in rows_to_remove.iter().rev() {
        tableau.delete_row(row);
        variables.remove_basic(row);
    }
    info!(
        "artificial phase completed, {} redundant constraint(s) removed",
        rows_to_remove.len(),
    );

    let tableau = phase_two::price_out(&tableau.constraints(), &variables, problem);
    (tableau, variables)
}

/// Drive artificial variables out of the basis.
///
/// # Return value
///
/// Sorted indices of rows that should be removed because no pivot was possible.
fn remove_artificial_basis_variables<F: NumberField>(
    tableau: &mut Tableau<F>,
    variables: &mut VariableOrdering,
) -> Vec<usize> {
    let mut rows_to_remove = Vec::new();

    for row in 0..tableau.nr_constraints() {
        if !variables.basic_variable(row).is_artificial() {
            continue;
        }

        match (0..tableau.rhs_column()).find(|&j| !tableau[(row, j)].is_zero()) {
            Some(column) => {
                debug!("driving {} out of the basis by pivot on ({row}, {column})", variables.basic_variable(row));
                *tableau = tableau.pivot(PivotCell::new(row, column));
                variables.exchange(row, column);
                remove_leaving_artificial(tableau, variables, column);
            },
            None => rows_to_remove.push(row),
        }
    }

    debug_assert!(rows_to_remove.is_sorted());
    rows_to_remove
}
