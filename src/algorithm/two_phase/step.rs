//! # Steps
//!
//! The state of the simplex method after each pivot, kept as immutable snapshots in an append-only
//! history.
use std::collections::BTreeSet;
use std::fmt::{self, Display, Formatter};

use enum_map::Enum;
use itertools::Itertools;
use log::debug;

use crate::algorithm::options::Mode;
use crate::algorithm::two_phase::phase_one;
use crate::algorithm::two_phase::state::{AlgorithmState, classify};
use crate::algorithm::two_phase::strategy::pivot_rule::pivot_candidates;
use crate::algorithm::two_phase::tableau::{Tableau, write_grid};
use crate::algorithm::two_phase::tableau::pivot::PivotCell;
use crate::algorithm::two_phase::variable::VariableOrdering;
use crate::data::linear_program::solution::Solution;
use crate::data::number_types::traits::NumberField;

/// Which objective the tableau optimizes.
#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Phase {
    /// Minimizing the sum of the artificial variables to find a basic feasible solution.
    Artificial,
    /// Minimizing the objective of the problem, starting from a basic feasible solution.
    Optimization,
}

impl Display for Phase {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Phase::Artificial => "artificial phase",
            Phase::Optimization => "optimization phase",
        })
    }
}

/// Snapshot of the simplex method.
///
/// Steps are never changed after their creation. A new step is derived from an existing one.
#[derive(Clone, Debug, PartialEq)]
pub struct Step<F> {
    index: usize,
    tableau: Tableau<F>,
    variables: VariableOrdering,
    /// Rows that were pivot row before, only used in the artificial phase.
    banned_rows: BTreeSet<usize>,
    phase: Phase,
    mode: Mode,
    state: AlgorithmState,
    /// Cell of the pivot that produced this step from the previous one.
    pivot: Option<PivotCell>,
}

impl<F: NumberField> Step<F> {
    /// First step of a phase.
    pub(crate) fn start(
        index: usize,
        tableau: Tableau<F>,
        variables: VariableOrdering,
        phase: Phase,
        mode: Mode,
    ) -> Self {
        debug_assert_eq!(variables.basic().len(), tableau.nr_constraints());
        debug_assert_eq!(variables.non_basic().len(), tableau.rhs_column());

        let state = classify(&tableau, phase == Phase::Artificial);
        Self { index, tableau, variables, banned_rows: BTreeSet::new(), phase, mode, state, pivot: None }
    }

    /// The step that results from pivoting on a cell of this step.
    ///
    /// In the artificial phase, the pivot row is banned afterwards and the column of the leaving
    /// variable is removed if that variable is artificial.
    pub(crate) fn pivoted(&self, cell: PivotCell, mode: Mode) -> Self {
        let entering = self.variables.non_basic_variable(cell.column);
        let leaving = self.variables.basic_variable(cell.row);
        debug!("{}: pivot on {cell}, {entering} enters and {leaving} leaves the basis", self.phase);

        let mut tableau = self.tableau.pivot(cell);
        let mut variables = self.variables.clone();
        variables.exchange(cell.row, cell.column);
        let mut banned_rows = self.banned_rows.clone();
        if self.phase == Phase::Artificial {
            banned_rows.insert(cell.row);
            phase_one::remove_leaving_artificial(&mut tableau, &mut variables, cell.column);
        }

        let state = classify(&tableau, self.phase == Phase::Artificial);
        Self {
            index: self.index + 1,
            tableau,
            variables,
            banned_rows,
            phase: self.phase,
            mode,
            state,
            pivot: Some(cell),
        }
    }

    /// Cells that may be pivoted on next, ordered by column and then by row.
    ///
    /// Empty once the step is terminal.
    pub fn candidates(&self) -> Vec<PivotCell> {
        match (self.state, self.phase) {
            (AlgorithmState::Continue, Phase::Artificial) => pivot_candidates(&self.tableau, &self.banned_rows),
            (AlgorithmState::Continue, Phase::Optimization) => pivot_candidates(&self.tableau, &BTreeSet::new()),
            _ => Vec::new(),
        }
    }

    /// The basic solution of this step.
    ///
    /// # Arguments
    ///
    /// * `nr_variables`: Number of variables of the problem. Variables that are not basic are zero.
    pub fn solution(&self, nr_variables: usize) -> Solution<F> {
        let mut values = vec![F::zero(); nr_variables];
        let mut basis = Vec::with_capacity(self.tableau.nr_constraints());
        for (i, variable) in self.variables.basic().iter().enumerate() {
            if let Some(j) = variable.structural_index() {
                values[j] = self.tableau.rhs(i);
                basis.push(j);
            }
        }

        Solution::new(self.tableau.objective_value(), values, basis)
    }
}

impl<F> Step<F> {
    /// Position in the history, the first step has index zero.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The tableau after the pivot that produced this step.
    pub fn tableau(&self) -> &Tableau<F> {
        &self.tableau
    }

    /// Variables of the rows and columns of the tableau.
    pub fn variables(&self) -> &VariableOrdering {
        &self.variables
    }

    /// Rows that already served as pivot row in the artificial phase.
    pub fn banned_rows(&self) -> &BTreeSet<usize> {
        &self.banned_rows
    }

    /// Which objective the tableau optimizes.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether the objective row is the sum of the artificial variables.
    pub fn is_artificial_phase(&self) -> bool {
        self.phase == Phase::Artificial
    }

    /// Whether the session was in automatic mode when this step was created.
    pub fn is_automatic(&self) -> bool {
        self.mode == Mode::Automatic
    }

    /// Whether a selection from the candidates is expected next.
    pub fn is_waiting_for_input(&self) -> bool {
        self.mode == Mode::Interactive && self.state == AlgorithmState::Continue
    }

    /// Whether the phase of this step has ended.
    pub fn is_completed(&self) -> bool {
        self.state.is_terminal()
    }

    /// Classification of the tableau.
    pub fn state(&self) -> AlgorithmState {
        self.state
    }

    /// Cell that was pivoted on to produce this step, `None` for the first step of a phase.
    pub fn pivot(&self) -> Option<PivotCell> {
        self.pivot
    }

    /// A completed artificial phase, after which the optimization phase starts.
    pub(crate) fn is_phase_boundary(&self) -> bool {
        self.phase == Phase::Artificial && self.state == AlgorithmState::Completed
    }
}

impl<F: NumberField> Display for Step<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Step {} ({}, {})", self.index, self.phase, self.state)?;
        if let Some(cell) = self.pivot {
            write!(f, ", after pivot on {cell}")?;
        }
        writeln!(f)?;

        let column_labels = self.variables.non_basic().iter().map(ToString::to_string)
            .chain(["rhs".to_string()])
            .collect::<Vec<_>>();
        let row_labels = self.variables.basic().iter().map(ToString::to_string)
            .chain(["obj".to_string()])
            .collect::<Vec<_>>();
        write_grid(f, &column_labels, &row_labels, self.tableau.matrix().rows())?;

        if !self.banned_rows.is_empty() && self.state == AlgorithmState::Continue {
            writeln!(f, "banned rows: {}", self.banned_rows.iter().join(", "))?;
        }
        Ok(())
    }
}

/// All steps so far, oldest first.
///
/// Never empty.
#[derive(Clone, Debug)]
pub struct StepHistory<F> {
    steps: Vec<Step<F>>,
}

impl<F> StepHistory<F> {
    /// Start a history.
    pub fn new(first: Step<F>) -> Self {
        Self { steps: vec![first] }
    }

    /// The newest step.
    pub fn current(&self) -> &Step<F> {
        let last = self.steps.len() - 1;
        &self.steps[last]
    }

    /// The oldest step.
    pub fn first(&self) -> &Step<F> {
        &self.steps[0]
    }

    /// Append a step, which should directly follow the current step.
    pub(crate) fn push(&mut self, step: Step<F>) {
        debug_assert_eq!(step.index, self.current().index + 1);

        self.steps.push(step);
    }

    /// Keep only the oldest `len` steps.
    pub(crate) fn truncate(&mut self, len: usize) {
        debug_assert!(len > 0);

        self.steps.truncate(len);
    }

    /// Number of steps, at least one.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always `false`, there is at least the first step.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The step with the given index, if there is one.
    pub fn get(&self, index: usize) -> Option<&Step<F>> {
        self.steps.get(index)
    }

    /// Iterate over the steps, oldest first.
    pub fn iter(&self) -> impl Iterator<Item=&Step<F>> {
        self.steps.iter()
    }
}
