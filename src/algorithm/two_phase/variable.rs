//! # Variable logic
//!
//! Which variable belongs to which row and column of a short tableau.
use std::fmt::{self, Display, Formatter};

/// Identifier of a variable in play.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum Variable {
    /// A variable of the problem, by its index in the cost vector.
    Structural(usize),
    /// The auxiliary variable of the artificial phase that belongs to a constraint row.
    Artificial(usize),
}

impl Variable {
    /// Whether this variable only exists during the artificial phase.
    pub fn is_artificial(self) -> bool {
        matches!(self, Variable::Artificial(_))
    }

    /// Index in the cost vector, if this is a variable of the problem.
    pub fn structural_index(self) -> Option<usize> {
        match self {
            Variable::Structural(j) => Some(j),
            Variable::Artificial(_) => None,
        }
    }
}

impl Display for Variable {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            Variable::Structural(j) => format!("x{}", j + 1),
            Variable::Artificial(i) => format!("a{}", i + 1),
        };
        f.pad(&name)
    }
}

/// Basic variables followed by non-basic variables.
///
/// Row `i` of a tableau holds the basic variable at position `i`, column `j` holds the non-basic
/// variable at position `j` of the suffix.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VariableOrdering {
    variables: Vec<Variable>,
    nr_basic: usize,
}

impl VariableOrdering {
    /// Create a new ordering.
    ///
    /// # Arguments
    ///
    /// * `basic`: One variable per constraint row.
    /// * `non_basic`: One variable per non-basic column.
    pub fn new(basic: Vec<Variable>, non_basic: Vec<Variable>) -> Self {
        let nr_basic = basic.len();
        let mut variables = basic;
        variables.extend(non_basic);
        debug_assert!({
            let mut sorted = variables.clone();
            sorted.sort_unstable();
            sorted.windows(2).all(|pair| pair[0] != pair[1])
        });

        Self { variables, nr_basic }
    }

    /// The variables of the constraint rows, in row order.
    pub fn basic(&self) -> &[Variable] {
        &self.variables[..self.nr_basic]
    }

    /// The variables of the non-basic columns, in column order.
    pub fn non_basic(&self) -> &[Variable] {
        &self.variables[self.nr_basic..]
    }

    /// Variable of constraint row `i`.
    pub fn basic_variable(&self, i: usize) -> Variable {
        self.basic()[i]
    }

    /// Variable of non-basic column `j`.
    pub fn non_basic_variable(&self, j: usize) -> Variable {
        self.non_basic()[j]
    }

    /// The variables of a pivot row and column trade places.
    pub fn exchange(&mut self, row: usize, column: usize) {
        debug_assert!(row < self.nr_basic);

        self.variables.swap(row, self.nr_basic + column);
    }

    /// Remove the variable of a non-basic column, after that column was deleted.
    pub fn remove_non_basic(&mut self, column: usize) -> Variable {
        self.variables.remove(self.nr_basic + column)
    }

    /// Remove the variable of a constraint row, after that row was deleted.
    pub fn remove_basic(&mut self, row: usize) -> Variable {
        debug_assert!(row < self.nr_basic);

        self.nr_basic -= 1;
        self.variables.remove(row)
    }

    /// Total number of variables in play.
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Whether no variables are in play.
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}
