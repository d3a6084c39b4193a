//! # Problems that are solved in tests throughout the crate.
//!
//! Convention for function names:
//!
//! * `fn create_problem()`
//! * `fn artificial_tableau_form()`
//! * `fn optimal_values()`
//! * `fn optimal_objective_value()`
use crate::data::number_types::traits::NumberField;


/// Integer literal in any number type.
pub fn number<F: NumberField>(value: i64) -> F {
    F::from_i64(value).unwrap()
}

/// Rows of integer literals in any number type.
pub fn rows<F: NumberField, const N: usize>(data: &[[i64; N]]) -> Vec<Vec<F>> {
    data.iter()
        .map(|row| row.iter().map(|&value| number(value)).collect())
        .collect()
}
