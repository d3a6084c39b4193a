//! # The optimization phase
//!
//! Reduces the objective value of a basic feasible solution to the minimum. The pivots themselves
//! are the same as in the artificial phase, without banned rows; this module provides the objective
//! row that they start from.
use crate::algorithm::two_phase::tableau::Tableau;
use crate::algorithm::two_phase::variable::{Variable, VariableOrdering};
use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::linear_program::canonical_form::CanonicalForm;
use crate::data::number_types::traits::NumberField;

/// Append the reduced costs of the problem's objective to constraint rows in canonical form.
///
/// With `c_B` the costs of the basic variables, the reduced cost of the variable in column `j` is
/// `c_j - c_B^T T_j` and the right-hand side of the objective row is minus the objective value,
/// `-(c_B^T b + c_0)`. Artificial variables have cost zero.
///
/// # Arguments
///
/// * `constraints`: Constraint rows of a short tableau, right-hand side last, canonical with
/// respect to the basic variables of `variables`.
/// * `variables`: Variables of the rows and columns.
/// * `problem`: Problem that provides the cost vector.
pub fn price_out<F: NumberField>(
    constraints: &DenseMatrix<F>,
    variables: &VariableOrdering,
    problem: &CanonicalForm<F>,
) -> Tableau<F> {
    debug_assert_eq!(constraints.nr_rows(), variables.basic().len());
    debug_assert_eq!(constraints.nr_columns(), variables.non_basic().len() + 1);

    let cost = |variable: Variable| match variable {
        Variable::Structural(j) => problem.cost(j),
        Variable::Artificial(_) => F::zero(),
    };
    let basic_cost = variables.basic().iter().map(|&variable| cost(variable)).collect::<Vec<_>>();
    let weighted_column_sum = |j: usize| {
        constraints.column(j).zip(&basic_cost).map(|(value, c)| c.clone() * value.clone()).sum::<F>()
    };

    let rhs_column = constraints.nr_columns() - 1;
    let mut objective = variables.non_basic().iter().enumerate()
        .map(|(j, &variable)| cost(variable) - weighted_column_sum(j))
        .collect::<Vec<_>>();
    objective.push(-(weighted_column_sum(rhs_column) + problem.constant()));

    let mut matrix = constraints.clone();
    matrix.push_row(objective);
    Tableau::new(matrix)
}
