//! # Solver configuration
use std::fmt::{self, Display, Formatter};

/// Whether the session chooses pivots itself, or waits for a selection.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Mode {
    /// Pivot on the first candidate, up to one pivot per tableau row per invocation.
    #[default]
    Automatic,
    /// Pivot once per invocation, on a cell chosen by the caller from the exposed candidates.
    Interactive,
}

impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Mode::Automatic => "automatic",
            Mode::Interactive => "interactive",
        })
    }
}

/// Settings of a [`Session`](crate::algorithm::two_phase::session::Session).
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct SolverOptions {
    /// Automatic or interactive pivot selection.
    pub mode: Mode,
    /// Total number of pivots `solve` performs before giving up.
    pub max_iterations: usize,
    /// Largest number of constraints, and largest number of variables, that is accepted.
    pub max_dimension: usize,
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self {
            mode: Mode::Automatic,
            max_iterations: 1_000,
            max_dimension: 16,
        }
    }
}

impl SolverOptions {
    /// Default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how pivots are chosen.
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the number of pivots after which `solve` gives up.
    pub fn with_max_iterations(mut self, max: usize) -> Self {
        self.max_iterations = max;
        self
    }

    /// Set the largest accepted number of constraints and of variables.
    pub fn with_max_dimension(mut self, max: usize) -> Self {
        self.max_dimension = max;
        self
    }
}
