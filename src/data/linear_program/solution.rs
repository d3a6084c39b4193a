//! # Representation of optimal solutions
use std::fmt::{self, Display, Formatter};

use crate::data::number_types::traits::NumberField;

/// A basic solution, with the value of every variable of the problem.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution<F> {
    /// Value of the objective function, including the constant term.
    objective_value: F,
    /// Value per variable, in the order of the cost vector.
    values: Vec<F>,
    /// Variables in the basis, by constraint row.
    basis: Vec<usize>,
}

impl<F: NumberField> Solution<F> {
    /// Create a new `Solution` instance.
    ///
    /// A plain constructor.
    pub fn new(objective_value: F, values: Vec<F>, basis: Vec<usize>) -> Self {
        debug_assert!(basis.iter().all(|&j| j < values.len()));

        Self { objective_value, values, basis }
    }

    /// Value of the objective function, constant included.
    pub fn objective_value(&self) -> F {
        self.objective_value.clone()
    }

    /// Values of all variables.
    pub fn values(&self) -> &[F] {
        &self.values
    }

    /// Value of variable `j`.
    pub fn value(&self, j: usize) -> F {
        self.values[j].clone()
    }

    /// Indices of the basic variables, in the order of the constraint rows.
    ///
    /// Can be used to start the method again with an explicit basis.
    pub fn basis(&self) -> &[usize] {
        &self.basis
    }
}

impl<F: NumberField> Display for Solution<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "objective value: {}", self.objective_value)?;
        for (j, value) in self.values.iter().enumerate() {
            let marker = if self.basis.contains(&j) { " (basic)" } else { "" };
            writeln!(f, "x{} = {value}{marker}", j + 1)?;
        }
        Ok(())
    }
}
