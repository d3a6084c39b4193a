//! # Data structures for Simplex
//!
//! Contains the simplex tableau and the elementary operations which can be performed upon it.
//!
//! The tableau is "short": it holds a column for each non-basic variable only. The last row holds
//! the reduced costs and the last column the values of the basic variables. The bottom right
//! element is minus the objective value.
use std::fmt::{self, Display, Formatter};
use std::ops::Index;

use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::number_types::traits::NumberField;

pub mod pivot;

/// The data structure that the simplex method operates on.
///
/// There is no way to resize a tableau in place other than swapping or removing entire rows and
/// columns. The objective row and the right-hand side column always stay in the last position.
#[derive(Clone, Debug, PartialEq)]
pub struct Tableau<F> {
    /// Represents a matrix of size (m + 1) x (k + 1): constraint rows followed by the objective row,
    /// non-basic columns followed by the right-hand side.
    matrix: DenseMatrix<F>,
}

impl<F> Tableau<F> {
    /// Wrap a matrix that already has the objective row and right-hand side column in place.
    ///
    /// # Panics
    ///
    /// If there is no room for the objective row or the right-hand side column.
    pub fn new(matrix: DenseMatrix<F>) -> Self {
        assert!(matrix.nr_rows() > 0, "a tableau has at least an objective row");
        assert!(matrix.nr_columns() > 0, "a tableau has at least a right-hand side column");

        Self { matrix }
    }

    /// Number of rows, including the objective row.
    pub fn nr_rows(&self) -> usize {
        self.matrix.nr_rows()
    }

    /// Number of columns, including the right-hand side.
    pub fn nr_columns(&self) -> usize {
        self.matrix.nr_columns()
    }

    /// Number of constraint rows, equal to the number of basic variables.
    pub fn nr_constraints(&self) -> usize {
        self.nr_rows() - 1
    }

    /// Index of the objective row.
    pub fn objective_row(&self) -> usize {
        self.nr_rows() - 1
    }

    /// Index of the right-hand side column, equal to the number of non-basic variables.
    pub fn rhs_column(&self) -> usize {
        self.nr_columns() - 1
    }

    /// Exchange two constraint rows.
    pub fn swap_rows(&mut self, i: usize, k: usize) {
        assert!(i < self.objective_row() && k < self.objective_row(), "the objective row can't be swapped");

        self.matrix.swap_rows(i, k);
    }

    /// Exchange two non-basic columns.
    pub fn swap_columns(&mut self, j: usize, l: usize) {
        assert!(j < self.rhs_column() && l < self.rhs_column(), "the right-hand side can't be swapped");

        self.matrix.swap_columns(j, l);
    }

    /// Remove a single non-basic column, shifting the columns on its right one position left.
    pub fn delete_column(&mut self, j: usize) {
        assert!(j < self.rhs_column(), "the right-hand side can't be removed");

        self.matrix.remove_columns(&[j]);
    }

    /// Remove a single constraint row, shifting the rows below it one position up.
    pub fn delete_row(&mut self, i: usize) {
        assert!(i < self.objective_row(), "the objective row can't be removed");

        self.matrix.remove_rows(&[i]);
    }

    /// The underlying matrix, objective row and right-hand side included.
    pub fn matrix(&self) -> &DenseMatrix<F> {
        &self.matrix
    }
}

impl<F: NumberField> Tableau<F> {
    /// Value of the basic variable of row `i`.
    pub fn rhs(&self, i: usize) -> F {
        debug_assert!(i < self.nr_constraints());

        self.matrix[(i, self.rhs_column())].clone()
    }

    /// Reduced cost of the non-basic variable of column `j`.
    pub fn objective(&self, j: usize) -> F {
        debug_assert!(j < self.rhs_column());

        self.matrix[(self.objective_row(), j)].clone()
    }

    /// The bottom right element, minus the objective value.
    pub fn objective_rhs(&self) -> F {
        self.matrix[(self.objective_row(), self.rhs_column())].clone()
    }

    /// Objective value of the current basic solution.
    pub fn objective_value(&self) -> F {
        -self.objective_rhs()
    }

    /// Copy of the constraint rows, without the objective row.
    pub fn constraints(&self) -> DenseMatrix<F> {
        let rows = self.matrix.rows()
            .take(self.nr_constraints())
            .map(<[F]>::to_vec)
            .collect();
        DenseMatrix::from_data(rows, self.nr_columns())
    }
}

impl<F> Index<(usize, usize)> for Tableau<F> {
    type Output = F;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        &self.matrix[index]
    }
}

impl<F: Display> Display for Tableau<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let column_labels = (0..self.rhs_column()).map(|j| j.to_string())
            .chain(["rhs".to_string()])
            .collect::<Vec<_>>();
        let row_labels = (0..self.nr_constraints()).map(|i| i.to_string())
            .chain(["obj".to_string()])
            .collect::<Vec<_>>();

        write_grid(f, &column_labels, &row_labels, self.matrix.rows())
    }
}

/// Write a tableau shaped grid of values with labels.
///
/// The last row and last column are separated from the others.
pub(crate) fn write_grid<'a, F: Display + 'a>(
    f: &mut Formatter<'_>,
    column_labels: &[String],
    row_labels: &[String],
    rows: impl Iterator<Item=&'a [F]>,
) -> fmt::Result {
    let cells = rows
        .map(|row| row.iter().map(ToString::to_string).collect::<Vec<_>>())
        .collect::<Vec<_>>();
    debug_assert_eq!(cells.len(), row_labels.len());

    let label_width = row_labels.iter().map(String::len).max().unwrap_or(0);
    let widths = column_labels.iter().enumerate()
        .map(|(j, label)| cells.iter().map(|row| row[j].len()).chain([label.len()]).max().unwrap_or(0))
        .collect::<Vec<_>>();
    let nr_columns = widths.len();

    let write_line = |f: &mut Formatter<'_>, label: &str, values: &[String]| -> fmt::Result {
        write!(f, "{label:>label_width$} |")?;
        for (j, (value, width)) in values.iter().zip(widths.iter().copied()).enumerate() {
            if j + 1 == nr_columns {
                write!(f, " |")?;
            }
            write!(f, " {value:>width$}")?;
        }
        writeln!(f)
    };
    let separator = "-".repeat(label_width + 2 + widths.iter().map(|width| width + 1).sum::<usize>() + 2);

    write_line(f, "", column_labels)?;
    writeln!(f, "{separator}")?;
    for (i, (label, row)) in row_labels.iter().zip(&cells).enumerate() {
        if i + 1 == cells.len() {
            writeln!(f, "{separator}")?;
        }
        write_line(f, label, row)?;
    }

    Ok(())
}
