//! # Error reporting
//!
//! A collection of enums describing the problems that can be encountered when setting up or driving
//! the simplex method. The verdicts of the algorithm itself (optimal, unbounded, infeasible) are not
//! errors; see [`OptimizationResult`](crate::algorithm::OptimizationResult).
use std::io;

use thiserror::Error;

use crate::algorithm::options::Mode;

/// Highest error in the hierarchy, any of the errors below can be converted into it.
#[derive(Error, Debug)]
pub enum Error {
    /// The problem description is inconsistent.
    #[error(transparent)]
    Problem(#[from] ProblemError),
    /// A basis given by the caller can't be used to start the method.
    #[error(transparent)]
    Basis(#[from] BasisError),
    /// The session was asked to do something it can't do in its current state.
    #[error(transparent)]
    Session(#[from] SessionError),
    /// A number could not be read.
    #[error(transparent)]
    Parse(#[from] ParseNumberError),
    /// Reading input or writing output failed.
    #[error(transparent)]
    IO(#[from] io::Error),
}

/// Dimensions of a linear program in canonical form that don't fit together.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum ProblemError {
    /// There should be at least one constraint and at least one variable.
    #[error("a problem needs at least one constraint and one variable")]
    Empty,
    /// All constraint rows should have one coefficient per variable and a right-hand side.
    #[error("constraint row {row} has {actual} entries, expected {expected}")]
    RaggedConstraints {
        /// Index of the first row with the wrong length.
        row: usize,
        /// Number of variables plus one.
        expected: usize,
        /// Length of the offending row.
        actual: usize,
    },
    /// The cost vector should have one coefficient per variable and a constant.
    #[error("the cost vector has {actual} entries, expected {expected}")]
    CostLength {
        /// Number of variables plus one.
        expected: usize,
        /// Length of the given cost vector.
        actual: usize,
    },
    /// The problem exceeds the configured size limit.
    #[error("the problem has {nr_constraints} constraints and {nr_variables} variables, the limit is {limit}")]
    TooLarge {
        /// Number of constraints of the problem.
        nr_constraints: usize,
        /// Number of variables of the problem.
        nr_variables: usize,
        /// Largest accepted number of constraints and of variables.
        limit: usize,
    },
}

/// A basis chosen by the caller that can't be turned into a starting tableau.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum BasisError {
    /// A value vector was given with the wrong number of entries.
    #[error("expected a value for each of the {expected} variables, got {actual}")]
    ValueCount {
        /// Number of variables of the problem.
        expected: usize,
        /// Length of the given value vector.
        actual: usize,
    },
    /// The number of basic variables should equal the number of constraints.
    #[error("a basis needs exactly {expected} variables, {actual} were given")]
    BasisSizeMismatch {
        /// Number of constraints.
        expected: usize,
        /// Number of variables in the given basis.
        actual: usize,
    },
    /// An index that doesn't refer to a variable of the problem.
    #[error("there is no variable with index {index}, the problem has {nr_variables} variables")]
    UnknownVariable {
        /// The offending index, counting from zero.
        index: usize,
        /// Number of variables of the problem.
        nr_variables: usize,
    },
    /// The same variable was listed twice.
    #[error("variable x{} appears in the basis more than once", .index + 1)]
    DuplicateVariable {
        /// The repeated index, counting from zero.
        index: usize,
    },
    /// The columns of the basis are linearly dependent.
    #[error("constraint row {row} is linearly dependent on the others for this basis")]
    DependentConstraintRow {
        /// Row that was eliminated completely.
        row: usize,
    },
    /// The basic solution of the basis is not the expected one, or is not feasible.
    #[error("the basis gives x{} = {actual}, expected {expected}", .index + 1)]
    ExplicitBasisInfeasible {
        /// Variable with the offending value.
        index: usize,
        /// Value demanded by the caller, or a description of the accepted values.
        expected: String,
        /// Value in the basic solution.
        actual: String,
    },
}

/// An operation that the session can't perform in its current state.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum SessionError {
    /// An interactive selection that is not among the exposed pivot candidates.
    #[error("row {row}, column {column} is not a pivot candidate")]
    NotACandidate {
        /// Requested pivot row.
        row: usize,
        /// Requested pivot column.
        column: usize,
    },
    /// The operation belongs to the other mode.
    #[error("not available in {0} mode")]
    WrongMode(Mode),
    /// The algorithm already reached a verdict.
    #[error("the algorithm already finished")]
    Finished,
    /// No verdict after the configured number of pivots.
    #[error("no verdict after {0} pivots")]
    IterationLimit(usize),
    /// The auxiliary objective of the artificial phase was found unbounded, which is impossible in
    /// exact arithmetic.
    #[error("the objective of the artificial phase is unbounded")]
    UnboundedArtificialObjective,
}

/// A numeric literal that could not be read.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum ParseNumberError {
    /// Nothing but whitespace.
    #[error("empty number")]
    Empty,
    /// Not of a format the number type accepts.
    #[error("`{0}` is not a number")]
    Invalid(String),
    /// A quotient with zero as its denominator.
    #[error("`{0}` has a zero denominator")]
    ZeroDenominator(String),
    /// The number doesn't fit the number type.
    #[error("`{0}` is out of range")]
    OutOfRange(String),
}
