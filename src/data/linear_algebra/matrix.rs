//! # Dense matrices
//!
//! Row-major storage for the small, fully dense matrices of the tableau method.
use std::ops::{Index, IndexMut};

use index_utils::remove_indices;

use crate::data::number_types::traits::NumberField;

/// Uses a `Vec<Vec<F>>` as underlying data structure.
///
/// The shape only changes through the explicit removal or addition of entire rows and columns.
#[derive(Clone, Debug, PartialEq)]
pub struct DenseMatrix<F> {
    data: Vec<Vec<F>>,
    nr_columns: usize,
}

impl<F> DenseMatrix<F> {
    /// Create a `DenseMatrix` from the provided rows.
    ///
    /// # Arguments
    ///
    /// * `data`: Rows that all have length `nr_columns`.
    /// * `nr_columns`: Explicit, such that a matrix without rows still has a width.
    pub fn from_data(data: Vec<Vec<F>>, nr_columns: usize) -> Self {
        debug_assert!(data.iter().all(|row| row.len() == nr_columns));

        Self { data, nr_columns }
    }

    /// Get the number of rows in this matrix.
    pub fn nr_rows(&self) -> usize {
        self.data.len()
    }

    /// Get the number of columns in this matrix.
    pub fn nr_columns(&self) -> usize {
        self.nr_columns
    }

    /// Get all values in row `i` of this matrix.
    pub fn row(&self, i: usize) -> &[F] {
        debug_assert!(i < self.nr_rows());

        &self.data[i]
    }

    /// Iterate over the rows of this matrix.
    pub fn rows(&self) -> impl Iterator<Item=&[F]> {
        self.data.iter().map(Vec::as_slice)
    }

    /// Get all values in column `j` of this matrix.
    pub fn column(&self, j: usize) -> impl Iterator<Item=&F> {
        debug_assert!(j < self.nr_columns);

        self.data.iter().map(move |row| &row[j])
    }

    /// Exchange two rows.
    pub fn swap_rows(&mut self, i: usize, k: usize) {
        debug_assert!(i < self.nr_rows() && k < self.nr_rows());

        self.data.swap(i, k);
    }

    /// Exchange two columns.
    pub fn swap_columns(&mut self, j: usize, l: usize) {
        debug_assert!(j < self.nr_columns && l < self.nr_columns);

        for row in &mut self.data {
            row.swap(j, l);
        }
    }

    /// Append a row at the bottom.
    pub fn push_row(&mut self, row: Vec<F>) {
        debug_assert_eq!(row.len(), self.nr_columns);

        self.data.push(row);
    }

    /// Remove rows, shifting the remaining ones up.
    ///
    /// # Arguments
    ///
    /// * `indices`: Sorted and unique row indices.
    pub fn remove_rows(&mut self, indices: &[usize]) {
        debug_assert!(indices.is_sorted() && indices.iter().all(|&i| i < self.nr_rows()));

        remove_indices(&mut self.data, indices);
    }

    /// Remove columns, shifting the remaining ones to the left.
    ///
    /// # Arguments
    ///
    /// * `indices`: Sorted and unique column indices.
    pub fn remove_columns(&mut self, indices: &[usize]) {
        debug_assert!(indices.is_sorted() && indices.iter().all(|&j| j < self.nr_columns));

        for row in &mut self.data {
            remove_indices(row, indices);
        }
        self.nr_columns -= indices.len();
    }

    /// Get the data of this matrix.
    pub fn data(self) -> Vec<Vec<F>> {
        self.data
    }
}

impl<F: NumberField> DenseMatrix<F> {
    /// Multiply row `i` with a factor `factor`.
    pub fn multiply_row(&mut self, i: usize, factor: F) {
        debug_assert!(i < self.nr_rows());

        for value in &mut self.data[i] {
            *value = value.clone() * factor.clone();
        }
    }

    /// Add a multiple of row `read_row` to row `write_row`.
    pub fn mul_add_rows(&mut self, read_row: usize, write_row: usize, factor: F) {
        debug_assert!(read_row < self.nr_rows());
        debug_assert!(write_row < self.nr_rows());
        debug_assert_ne!(read_row, write_row);

        for j in 0..self.nr_columns {
            let difference = factor.clone() * self.data[read_row][j].clone();
            self.data[write_row][j] += difference;
        }
    }
}

impl<F> Index<(usize, usize)> for DenseMatrix<F> {
    type Output = F;

    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        debug_assert!(j < self.nr_columns);

        &self.data[i][j]
    }
}

impl<F> IndexMut<(usize, usize)> for DenseMatrix<F> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut Self::Output {
        debug_assert!(j < self.nr_columns);

        &mut self.data[i][j]
    }
}
