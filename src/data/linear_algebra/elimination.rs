//! # Gauss-Jordan elimination
//!
//! Reduce a leading block of columns of a matrix to an identity, operating on whole rows.
use std::cmp::Ordering;

use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::number_types::traits::NumberField;

/// Reduce the first `nr_pivot_columns` columns of a matrix to an identity matrix.
///
/// Each stage pivots on the element of largest magnitude among the rows that were not pivoted on
/// yet, swapping it into place. A column that is zero in all of those rows is skipped.
///
/// # Arguments
///
/// * `matrix`: Should have exactly `nr_pivot_columns` rows. Row operations are applied to all
/// columns.
///
/// # Return value
///
/// The index of a row that ended up zero within the pivot columns, if there is one. In that case,
/// the matrix is only partially reduced.
pub fn gauss_jordan<F: NumberField>(matrix: &mut DenseMatrix<F>, nr_pivot_columns: usize) -> Result<(), usize> {
    debug_assert_eq!(matrix.nr_rows(), nr_pivot_columns);
    debug_assert!(nr_pivot_columns <= matrix.nr_columns());

    let nr_rows = matrix.nr_rows();
    let mut pivot_row = 0;
    for column in 0..nr_pivot_columns {
        if pivot_row == nr_rows {
            break;
        }

        let best_row = (pivot_row + 1..nr_rows).fold(pivot_row, |best, i| {
            match matrix[(i, column)].abs().partial_cmp(&matrix[(best, column)].abs()) {
                Some(Ordering::Greater) => i,
                _ => best,
            }
        });
        if matrix[(best_row, column)].is_zero() {
            continue;
        }

        matrix.swap_rows(pivot_row, best_row);
        let leading = matrix[(pivot_row, column)].clone();
        matrix.multiply_row(pivot_row, F::one() / leading);
        for i in (0..nr_rows).filter(|&i| i != pivot_row) {
            let factor = matrix[(i, column)].clone();
            if !factor.is_zero() {
                matrix.mul_add_rows(pivot_row, i, -factor);
            }
        }
        pivot_row += 1;
    }

    match (0..nr_rows).find(|&i| (0..nr_pivot_columns).all(|j| matrix[(i, j)].is_zero())) {
        Some(row) => Err(row),
        None => Ok(()),
    }
}
