//! # Pivoting
//!
//! A single Gauss-Jordan exchange step on a short tableau. The basic variable of the pivot row and
//! the non-basic variable of the pivot column trade places; keeping track of which variable is where
//! is up to the caller.
use std::fmt::{self, Display, Formatter};

use crate::algorithm::two_phase::tableau::Tableau;
use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::number_types::traits::NumberField;

/// Coordinates of a pivot element, both within the constraint coefficients.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct PivotCell {
    /// Constraint row, the basic variable of which leaves the basis.
    pub row: usize,
    /// Non-basic column, the variable of which enters the basis.
    pub column: usize,
}

impl PivotCell {
    /// Create a cell from its constraint row and non-basic column.
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

impl Display for PivotCell {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

impl<F: NumberField> Tableau<F> {
    /// Exchange the basic variable of a row with the non-basic variable of a column.
    ///
    /// With `L` the pivot element, the pivot element becomes `1 / L`, the rest of the pivot row is
    /// divided by `L`, the rest of the pivot column is divided by `-L` and every other element
    /// `(i, j)` is reduced by `(i, c) * (r, j) / L`. This includes the objective row and the
    /// right-hand side column.
    ///
    /// # Arguments
    ///
    /// * `cell`: Pivot element, should be non-zero.
    ///
    /// # Return value
    ///
    /// A new tableau of the same shape.
    pub fn pivot(&self, cell: PivotCell) -> Self {
        let PivotCell { row: r, column: c } = cell;
        assert!(r < self.nr_constraints(), "pivot row {r} is not a constraint row");
        assert!(c < self.rhs_column(), "pivot column {c} is not a non-basic column");
        let leading = &self[(r, c)];
        assert!(!leading.is_zero(), "can't pivot on zero element {cell}");

        let data = (0..self.nr_rows()).map(|i| {
            (0..self.nr_columns()).map(|j| match (i == r, j == c) {
                (true, true) => F::one() / leading.clone(),
                (true, false) => self[(r, j)].clone() / leading.clone(),
                (false, true) => -self[(i, c)].clone() / leading.clone(),
                (false, false) => {
                    let change = self[(i, c)].clone() * self[(r, j)].clone() / leading.clone();
                    self[(i, j)].clone() - change
                },
            }).collect()
        }).collect();

        Self::new(DenseMatrix::from_data(data, self.nr_columns()))
    }
}
