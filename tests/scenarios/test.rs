use num_traits::ToPrimitive;

use tableau_simplex::{FR, RE};
use tableau_simplex::algorithm::OptimizationResult;
use tableau_simplex::algorithm::options::{Mode, SolverOptions};
use tableau_simplex::algorithm::two_phase::explicit_basis::ExplicitBasis;
use tableau_simplex::algorithm::two_phase::session::Session;
use tableau_simplex::algorithm::two_phase::state::AlgorithmState;
use tableau_simplex::data::linear_program::canonical_form::CanonicalForm;
use tableau_simplex::data::number_types::float::Real;
use tableau_simplex::data::number_types::rational::Fraction;
use tableau_simplex::data::number_types::traits::NumberField;
use tableau_simplex::error::{BasisError, Error};

use crate::scenarios::finite;

/// Maximize 3 x1 + 5 x2 with x1 <= 4, 2 x2 <= 12, 3 x1 + 2 x2 <= 18.
fn scenario_a<F: NumberField>() -> CanonicalForm<F> {
    let f = |value: i64| F::from_i64(value).unwrap();
    CanonicalForm::new(
        vec![
            vec![f(1), f(0), f(1), f(0), f(0), f(4)],
            vec![f(0), f(2), f(0), f(1), f(0), f(12)],
            vec![f(3), f(2), f(0), f(0), f(1), f(18)],
        ],
        vec![f(-3), f(-5), f(0), f(0), f(0), f(0)],
    ).unwrap()
}

#[test]
fn scenario_a_exact() {
    let mut session = Session::with_artificial_basis(scenario_a::<Fraction>(), SolverOptions::new()).unwrap();
    let solution = finite(session.solve().unwrap());

    assert_eq!(solution.objective_value(), FR!(-36));
    assert_eq!(solution.values(), [FR!(2), FR!(6), FR!(2), FR!(0), FR!(0)]);
    assert!(session.current().is_completed());
}

#[test]
fn scenario_a_floating_point() {
    let mut session = Session::with_artificial_basis(scenario_a::<Real>(), SolverOptions::new()).unwrap();
    let solution = finite(session.solve().unwrap());

    assert_eq!(solution.objective_value(), RE!(-36));
    assert_eq!(solution.value(0), RE!(2));
    assert_eq!(solution.value(1), RE!(6));
}

#[test]
fn scenario_b_infeasible() {
    let problem = CanonicalForm::new(
        vec![
            vec![FR!(1), FR!(1), FR!(1)],
            vec![FR!(1), FR!(1), FR!(3)],
        ],
        vec![FR!(0), FR!(0), FR!(0)],
    ).unwrap();
    let mut session = Session::with_artificial_basis(problem, SolverOptions::new()).unwrap();

    assert_eq!(session.solve(), Ok(OptimizationResult::Infeasible));
    assert_eq!(session.state(), AlgorithmState::Infeasible);
    assert!(session.candidates().is_empty());
}

#[test]
fn scenario_c_unbounded() {
    let problem = CanonicalForm::new(
        vec![vec![RE!(1), RE!(-1), RE!(1), RE!(0)]],
        vec![RE!(-1), RE!(0), RE!(0), RE!(0)],
    ).unwrap();
    let mut session = Session::with_artificial_basis(problem, SolverOptions::new()).unwrap();

    assert_eq!(session.solve(), Ok(OptimizationResult::Unbounded));
    assert_eq!(session.state(), AlgorithmState::UnlimitedSolution);
}

#[test]
fn scenario_d_basis_size_mismatch() {
    let options = SolverOptions::new().with_mode(Mode::Interactive);
    let mut session = Session::with_artificial_basis(scenario_a::<Fraction>(), options).unwrap();
    let cell = session.candidates()[0];
    session.pivot(cell).unwrap();
    let current = session.current().clone();

    let result = session.restart_with_explicit_basis(&ExplicitBasis::Indices(vec![0, 1, 2, 3]));
    assert_eq!(result, Err(BasisError::BasisSizeMismatch { expected: 3, actual: 4 }));
    assert_eq!(session.history().len(), 2);
    assert_eq!(session.current().tableau(), current.tableau());

    let result = Session::with_explicit_basis(
        scenario_a::<Fraction>(),
        &ExplicitBasis::Values(vec![FR!(4), FR!(0), FR!(0), FR!(12), FR!(6)]),
        SolverOptions::new(),
    );
    assert!(result.is_ok());

    let result = Session::with_explicit_basis(
        scenario_a::<Fraction>(),
        &ExplicitBasis::Values(vec![FR!(4), FR!(6), FR!(0), FR!(0), FR!(0)]),
        SolverOptions::new(),
    );
    assert!(matches!(result, Err(Error::Basis(BasisError::BasisSizeMismatch { expected: 3, actual: 2 }))));
}

#[test]
fn fractional_optimum() {
    // Minimize -x1 - x2 with 2 x1 + x2 <= 4 and x1 + 3 x2 <= 6.
    let problem = CanonicalForm::new(
        vec![
            vec![FR!(2), FR!(1), FR!(1), FR!(0), FR!(4)],
            vec![FR!(1), FR!(3), FR!(0), FR!(1), FR!(6)],
        ],
        vec![FR!(-1), FR!(-1), FR!(0), FR!(0), FR!(0)],
    ).unwrap();
    let mut session = Session::with_artificial_basis(problem, SolverOptions::new()).unwrap();
    let solution = finite(session.solve().unwrap());

    assert_eq!(solution.objective_value(), FR!(-14, 5));
    assert_eq!(solution.value(0), FR!(6, 5));
    assert_eq!(solution.value(1), FR!(8, 5));
    assert_eq!(solution.to_string().lines().next(), Some("objective value: -14/5"));
}

#[test]
fn negative_right_hand_side() {
    // Minimize x1 + x2 with -x1 - x2 + x3 = -2, so x1 + x2 >= 2.
    let problem = CanonicalForm::new(
        vec![vec![FR!(-1), FR!(-1), FR!(1), FR!(-2)]],
        vec![FR!(1), FR!(1), FR!(0), FR!(5)],
    ).unwrap();
    let mut session = Session::with_artificial_basis(problem, SolverOptions::new()).unwrap();
    let solution = finite(session.solve().unwrap());

    assert_eq!(solution.objective_value(), FR!(7));
    assert_eq!(solution.value(0) + solution.value(1), FR!(2));
}

#[test]
fn redundant_constraint() {
    let problem = CanonicalForm::new(
        vec![
            vec![FR!(1), FR!(1), FR!(1), FR!(0), FR!(4)],
            vec![FR!(2), FR!(2), FR!(2), FR!(0), FR!(8)],
            vec![FR!(1), FR!(0), FR!(0), FR!(1), FR!(3)],
        ],
        vec![FR!(-2), FR!(-1), FR!(0), FR!(0), FR!(0)],
    ).unwrap();
    let mut session = Session::with_artificial_basis(problem, SolverOptions::new()).unwrap();
    let solution = finite(session.solve().unwrap());

    assert_eq!(solution.objective_value(), FR!(-7));
    assert_eq!(solution.values(), [FR!(3), FR!(1), FR!(0), FR!(0)]);
    assert!(session.current().tableau().nr_constraints() < 3);
}

/// Pseudo-random coefficients from 1 to 97.
struct Coefficients(u64);

impl Iterator for Coefficients {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        self.0 = self.0.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1_442_695_040_888_963_407);
        Some(((self.0 >> 33) % 97 + 1) as i64)
    }
}

/// Maximize a positive combination of 10 variables subject to 6 packing constraints with slacks.
fn packing_problem(seed: u64) -> CanonicalForm<Fraction> {
    let (m, n) = (6, 10);
    let mut coefficients = Coefficients(seed);
    let constraints = (0..m)
        .map(|i| {
            let mut row = (&mut coefficients).take(n).map(|v| FR!(v)).collect::<Vec<_>>();
            row.extend((0..m).map(|k| FR!(i64::from(k == i))));
            row.push(FR!(100 * coefficients.next().unwrap()));
            row
        })
        .collect();
    let mut cost = (&mut coefficients).take(n).map(|v| FR!(-v)).collect::<Vec<_>>();
    cost.extend((0..=m).map(|_| FR!(0)));

    CanonicalForm::new(constraints, cost).unwrap()
}

#[test]
fn exact_arithmetic_does_not_overflow() {
    for seed in 0..15 {
        let problem = packing_problem(seed);
        let mut session = Session::with_artificial_basis(problem.clone(), SolverOptions::new()).unwrap();
        let solution = finite(session.solve().unwrap());

        assert!(problem.is_feasible(solution.values()), "seed {seed}");
        assert_eq!(problem.objective_value(solution.values()), solution.objective_value(), "seed {seed}");
        let tableau = session.current().tableau();
        assert!((0..tableau.rhs_column()).all(|j| !tableau.objective(j).is_negative()), "seed {seed}");

        let slacks = ExplicitBasis::Indices((10..16).collect());
        let mut explicit = Session::with_explicit_basis(problem, &slacks, SolverOptions::new()).unwrap();
        let from_slacks = finite(explicit.solve().unwrap());
        assert_eq!(from_slacks.objective_value(), solution.objective_value(), "seed {seed}");
    }
}

#[test]
fn coefficients_beyond_64_bits() {
    // Scaling a constraint row doesn't change the solution.
    let scales = [10_i128.pow(20) + 7, -(2_i128.pow(70) + 1), 3_i128.pow(40)];
    let problem = scenario_a::<Fraction>();
    let constraints = problem.constraints().rows()
        .zip(scales)
        .map(|(row, scale)| {
            row.iter()
                .map(|value| value.clone() * scale.to_string().parse::<Fraction>().unwrap())
                .collect::<Vec<_>>()
        })
        .collect();
    let cost = (0..problem.nr_variables()).map(|j| problem.cost(j))
        .chain([problem.constant()])
        .collect();
    let scaled = CanonicalForm::new(constraints, cost).unwrap();
    assert_eq!(scaled.constraints()[(1, 5)].to_i64(), None);

    let mut session = Session::with_artificial_basis(scaled, SolverOptions::new()).unwrap();
    let solution = finite(session.solve().unwrap());

    assert_eq!(solution.objective_value(), FR!(-36));
    assert_eq!(solution.values(), [FR!(2), FR!(6), FR!(2), FR!(0), FR!(0)]);
}
