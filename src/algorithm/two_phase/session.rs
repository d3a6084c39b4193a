//! # Driving the simplex method
//!
//! A `Session` owns a problem and the history of steps taken to solve it. Pivots are chosen either
//! automatically or by the caller, one invocation at a time, and the latest steps can be undone.
use enum_map::EnumMap;
use log::{error, info, warn};

use crate::algorithm::OptimizationResult;
use crate::algorithm::options::{Mode, SolverOptions};
use crate::algorithm::two_phase::explicit_basis::{ExplicitBasis, explicit_tableau};
use crate::algorithm::two_phase::phase_one;
use crate::algorithm::two_phase::state::AlgorithmState;
use crate::algorithm::two_phase::step::{Phase, Step, StepHistory};
use crate::algorithm::two_phase::strategy::pivot_rule::first_candidate;
use crate::algorithm::two_phase::tableau::pivot::PivotCell;
use crate::data::linear_program::canonical_form::CanonicalForm;
use crate::data::number_types::traits::NumberField;
use crate::error::{BasisError, Error, ProblemError, SessionError};

/// Solving a single problem, step by step.
#[derive(Clone, Debug)]
pub struct Session<F> {
    problem: CanonicalForm<F>,
    options: SolverOptions,
    history: StepHistory<F>,
}

impl<F: NumberField> Session<F> {
    /// Start with the artificial phase.
    ///
    /// If the artificial phase has nothing to do, the session starts in the optimization phase
    /// right away.
    pub fn with_artificial_basis(problem: CanonicalForm<F>, options: SolverOptions) -> Result<Self, ProblemError> {
        check_dimensions(&problem, &options)?;

        let (tableau, variables) = phase_one::artificial_tableau(&problem);
        let first = Step::start(0, tableau, variables, Phase::Artificial, options.mode);
        let mut session = Self { problem, options, history: StepHistory::new(first) };
        session.enter_optimization_if_ready();

        Ok(session)
    }

    /// Start the optimization phase from a basis chosen by the caller.
    pub fn with_explicit_basis(
        problem: CanonicalForm<F>,
        basis: &ExplicitBasis<F>,
        options: SolverOptions,
    ) -> Result<Self, Error> {
        check_dimensions(&problem, &options)?;

        let first = explicit_start(&problem, basis, options.mode)?;
        Ok(Self { problem, options, history: StepHistory::new(first) })
    }

    /// Discard the history and start again from a basis chosen by the caller.
    ///
    /// # Errors
    ///
    /// If the basis can't be used. The history is then left as it was.
    pub fn restart_with_explicit_basis(&mut self, basis: &ExplicitBasis<F>) -> Result<(), BasisError> {
        let first = explicit_start(&self.problem, basis, self.options.mode)?;
        self.history = StepHistory::new(first);

        Ok(())
    }

    /// Undo all pivots.
    pub fn restart(&mut self) {
        self.history.truncate(1);
        self.enter_optimization_if_ready();
    }

    /// Pivot automatically, at most once per row of the current tableau.
    ///
    /// Stops early when the phase ends. After the artificial phase, the optimization phase starts
    /// without counting as a pivot.
    ///
    /// # Return value
    ///
    /// The state of the newest step.
    pub fn advance(&mut self) -> Result<AlgorithmState, SessionError> {
        self.require_mode(Mode::Automatic)?;

        let limit = self.current().tableau().nr_rows();
        for _ in 0..limit {
            match first_candidate(&self.candidates()) {
                Some(cell) => self.apply(cell),
                None => break,
            }
        }

        self.check_artificial_objective()?;
        Ok(self.state())
    }

    /// Pivot once on a cell chosen by the caller.
    ///
    /// # Errors
    ///
    /// If not in interactive mode, if the algorithm finished or if the cell is not one of the
    /// current candidates.
    pub fn pivot(&mut self, cell: PivotCell) -> Result<AlgorithmState, SessionError> {
        self.require_mode(Mode::Interactive)?;
        if self.current().is_completed() {
            return Err(SessionError::Finished);
        }
        if !self.candidates().contains(&cell) {
            return Err(SessionError::NotACandidate { row: cell.row, column: cell.column });
        }

        self.apply(cell);

        self.check_artificial_objective()?;
        Ok(self.state())
    }

    /// Pivot automatically until there is a verdict.
    ///
    /// # Errors
    ///
    /// If not in automatic mode, or if there is no verdict within the configured number of pivots.
    pub fn solve(&mut self) -> Result<OptimizationResult<F>, SessionError> {
        self.require_mode(Mode::Automatic)?;

        loop {
            if let Some(result) = self.outcome() {
                return Ok(result);
            }

            let nr_pivots = self.pivot_counts().values().sum::<usize>();
            if nr_pivots >= self.options.max_iterations {
                warn!("no verdict after {nr_pivots} pivots, giving up");
                return Err(SessionError::IterationLimit(nr_pivots));
            }
            self.advance()?;
        }
    }

    /// Discard the newest step.
    ///
    /// A step at which the artificial phase completed is discarded together with the step that
    /// starts the optimization phase.
    ///
    /// # Return value
    ///
    /// Whether there was a step to discard.
    pub fn step_back(&mut self) -> bool {
        let mut keep = self.history.len() - 1;
        while keep > 0 && self.history.get(keep - 1).is_some_and(Step::is_phase_boundary) {
            keep -= 1;
        }

        if keep == 0 {
            false
        } else {
            self.history.truncate(keep);
            true
        }
    }

    /// The verdict, once there is one.
    pub fn outcome(&self) -> Option<OptimizationResult<F>> {
        let step = self.current();
        match (step.phase(), step.state()) {
            (_, AlgorithmState::Infeasible) => Some(OptimizationResult::Infeasible),
            (Phase::Optimization, AlgorithmState::UnlimitedSolution) => Some(OptimizationResult::Unbounded),
            (Phase::Optimization, AlgorithmState::Completed) => {
                Some(OptimizationResult::FiniteOptimum(step.solution(self.problem.nr_variables())))
            },
            _ => None,
        }
    }

    /// Cells that may be pivoted on next.
    pub fn candidates(&self) -> Vec<PivotCell> {
        self.current().candidates()
    }

    /// State of the newest step.
    pub fn state(&self) -> AlgorithmState {
        self.current().state()
    }

    /// Number of pivots in the history, per phase.
    pub fn pivot_counts(&self) -> EnumMap<Phase, usize> {
        let mut counts = EnumMap::default();
        for step in self.history.iter().filter(|step| step.pivot().is_some()) {
            counts[step.phase()] += 1;
        }
        counts
    }

    /// Switch between automatic and interactive pivot selection.
    pub fn set_mode(&mut self, mode: Mode) {
        self.options.mode = mode;
    }

    fn apply(&mut self, cell: PivotCell) {
        let step = self.current().pivoted(cell, self.options.mode);
        if step.is_completed() && !step.is_phase_boundary() {
            info!("{} ended after {} step(s): {}", step.phase(), step.index(), step.state());
        }
        self.history.push(step);
        self.enter_optimization_if_ready();
    }

    fn enter_optimization_if_ready(&mut self) {
        let current = self.current();
        if !current.is_phase_boundary() {
            return;
        }

        let (tableau, variables) = phase_one::into_optimization(current.tableau(), current.variables(), &self.problem);
        let step = Step::start(current.index() + 1, tableau, variables, Phase::Optimization, self.options.mode);
        if step.is_completed() {
            info!("{} ended without pivots: {}", step.phase(), step.state());
        }
        self.history.push(step);
    }

    fn require_mode(&self, mode: Mode) -> Result<(), SessionError> {
        if self.options.mode == mode {
            Ok(())
        } else {
            Err(SessionError::WrongMode(self.options.mode))
        }
    }

    fn check_artificial_objective(&self) -> Result<(), SessionError> {
        let current = self.current();
        if current.phase() == Phase::Artificial && current.state() == AlgorithmState::UnlimitedSolution {
            error!("the objective of the artificial phase can't be unbounded");
            Err(SessionError::UnboundedArtificialObjective)
        } else {
            Ok(())
        }
    }
}

impl<F> Session<F> {
    /// The newest step.
    pub fn current(&self) -> &Step<F> {
        self.history.current()
    }

    /// All steps so far.
    pub fn history(&self) -> &StepHistory<F> {
        &self.history
    }

    /// The problem being solved.
    pub fn problem(&self) -> &CanonicalForm<F> {
        &self.problem
    }

    /// Options in effect, including the current mode.
    pub fn options(&self) -> &SolverOptions {
        &self.options
    }
}

fn check_dimensions<F: NumberField>(problem: &CanonicalForm<F>, options: &SolverOptions) -> Result<(), ProblemError> {
    let limit = options.max_dimension;
    if problem.nr_constraints() > limit || problem.nr_variables() > limit {
        Err(ProblemError::TooLarge {
            nr_constraints: problem.nr_constraints(),
            nr_variables: problem.nr_variables(),
            limit,
        })
    } else {
        Ok(())
    }
}

fn explicit_start<F: NumberField>(
    problem: &CanonicalForm<F>,
    basis: &ExplicitBasis<F>,
    mode: Mode,
) -> Result<Step<F>, BasisError> {
    let (tableau, variables) = explicit_tableau(problem, basis)?;
    let step = Step::start(0, tableau, variables, Phase::Optimization, mode);
    info!("starting the {} from an explicit basis: {}", step.phase(), step.state());

    Ok(step)
}
