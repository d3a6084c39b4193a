//! # Canonical form
//!
//! Minimize `c^T x + c_0` subject to `Ax = b` and `x >= 0`.
use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::number_types::traits::NumberField;
use crate::error::ProblemError;

/// A linear program with equality constraints only and nonnegative variables.
///
/// The right-hand side `b` may contain negative values; rows are negated where needed when the
/// artificial phase starts.
#[derive(Clone, Debug, PartialEq)]
pub struct CanonicalForm<F> {
    /// The m x (n + 1) matrix `[A | b]`.
    constraints: DenseMatrix<F>,
    /// The n cost coefficients `c`.
    cost: Vec<F>,
    /// The constant `c_0`.
    constant: F,
}

impl<F: NumberField> CanonicalForm<F> {
    /// Create a new linear program in canonical form.
    ///
    /// # Arguments
    ///
    /// * `constraints`: Rows of `[A | b]`, a coefficient for each variable followed by the
    /// right-hand side.
    /// * `cost`: A coefficient for each variable followed by the constant term of the objective.
    pub fn new(constraints: Vec<Vec<F>>, mut cost: Vec<F>) -> Result<Self, ProblemError> {
        let nr_columns = constraints.first().map_or(0, Vec::len);
        if constraints.is_empty() || nr_columns < 2 {
            return Err(ProblemError::Empty);
        }
        if let Some((row, values)) = constraints.iter().enumerate().find(|(_, row)| row.len() != nr_columns) {
            return Err(ProblemError::RaggedConstraints { row, expected: nr_columns, actual: values.len() });
        }
        if cost.len() != nr_columns {
            return Err(ProblemError::CostLength { expected: nr_columns, actual: cost.len() });
        }

        let constant = cost.pop().unwrap_or_else(F::zero);
        Ok(Self {
            constraints: DenseMatrix::from_data(constraints, nr_columns),
            cost,
            constant,
        })
    }

    /// Number of rows of `A`.
    pub fn nr_constraints(&self) -> usize {
        self.constraints.nr_rows()
    }

    /// Number of columns of `A`.
    pub fn nr_variables(&self) -> usize {
        self.cost.len()
    }

    /// The matrix `[A | b]`.
    pub fn constraints(&self) -> &DenseMatrix<F> {
        &self.constraints
    }

    /// Cost coefficient of variable `j`.
    pub fn cost(&self, j: usize) -> F {
        self.cost[j].clone()
    }

    /// Constant term of the objective function.
    pub fn constant(&self) -> F {
        self.constant.clone()
    }

    /// Objective function value of a full solution vector.
    pub fn objective_value(&self, values: &[F]) -> F {
        debug_assert_eq!(values.len(), self.nr_variables());

        self.cost.iter().zip(values).map(|(c, x)| c.clone() * x.clone()).sum::<F>() + self.constant.clone()
    }

    /// Whether a full solution vector satisfies every constraint and is nonnegative.
    pub fn is_feasible(&self, values: &[F]) -> bool {
        debug_assert_eq!(values.len(), self.nr_variables());

        let n = self.nr_variables();
        values.iter().all(|x| !x.is_negative())
            && self.constraints.rows().all(|row| {
                row[..n].iter().zip(values).map(|(a, x)| a.clone() * x.clone()).sum::<F>() == row[n]
            })
    }
}
