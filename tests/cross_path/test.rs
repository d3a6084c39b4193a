use tableau_simplex::{FR, RE};
use tableau_simplex::algorithm::options::SolverOptions;
use tableau_simplex::algorithm::two_phase::explicit_basis::ExplicitBasis;
use tableau_simplex::algorithm::two_phase::session::Session;
use tableau_simplex::data::linear_program::canonical_form::CanonicalForm;
use tableau_simplex::data::number_types::rational::Fraction;
use tableau_simplex::error::{BasisError, Error};

use crate::cross_path::{agree, finite};

fn scenario_a_fraction() -> CanonicalForm<Fraction> {
    CanonicalForm::new(
        vec![
            vec![FR!(1), FR!(0), FR!(1), FR!(0), FR!(0), FR!(4)],
            vec![FR!(0), FR!(2), FR!(0), FR!(1), FR!(0), FR!(12)],
            vec![FR!(3), FR!(2), FR!(0), FR!(0), FR!(1), FR!(18)],
        ],
        vec![FR!(-3), FR!(-5), FR!(0), FR!(0), FR!(0), FR!(0)],
    ).unwrap()
}

#[test]
fn scenario_a() {
    agree(scenario_a_fraction());
}

#[test]
fn surplus_variables() {
    agree(CanonicalForm::new(
        vec![
            vec![FR!(1), FR!(1), FR!(-1), FR!(0), FR!(4)],
            vec![FR!(1), FR!(3), FR!(0), FR!(-1), FR!(6)],
        ],
        vec![FR!(2), FR!(3), FR!(0), FR!(0), FR!(0)],
    ).unwrap());
}

#[test]
fn fractional_optimum() {
    agree(CanonicalForm::new(
        vec![
            vec![FR!(2), FR!(1), FR!(1), FR!(0), FR!(4)],
            vec![FR!(1), FR!(3), FR!(0), FR!(1), FR!(6)],
        ],
        vec![FR!(-1), FR!(-1), FR!(0), FR!(0), FR!(0)],
    ).unwrap());
}

#[test]
fn floating_point() {
    agree(CanonicalForm::new(
        vec![
            vec![RE!(2), RE!(1), RE!(1), RE!(0), RE!(4)],
            vec![RE!(1), RE!(3), RE!(0), RE!(1), RE!(6)],
        ],
        vec![RE!(-1), RE!(-1), RE!(0), RE!(0), RE!(0)],
    ).unwrap());
}

#[test]
fn suboptimal_start() {
    // The slack basis of scenario A, three pivots away from the optimum.
    let mut session = Session::with_explicit_basis(
        scenario_a_fraction(),
        &ExplicitBasis::Values(vec![FR!(0), FR!(0), FR!(4), FR!(12), FR!(18)]),
        SolverOptions::new(),
    ).unwrap();
    assert!(!session.current().is_completed());

    let actual = finite(session.solve().unwrap());
    assert_eq!(actual.objective_value(), FR!(-36));
    assert_eq!(actual.values(), [FR!(2), FR!(6), FR!(2), FR!(0), FR!(0)]);
    assert_eq!(session.pivot_counts().values().sum::<usize>(), 3);
}

#[test]
fn wrong_values() {
    let result = Session::with_explicit_basis(
        scenario_a_fraction(),
        &ExplicitBasis::Values(vec![FR!(1), FR!(0), FR!(0), FR!(12), FR!(15)]),
        SolverOptions::new(),
    );

    assert!(matches!(result, Err(Error::Basis(BasisError::ExplicitBasisInfeasible { index: 0, .. }))));
}

#[test]
fn dependent_columns() {
    let problem = CanonicalForm::new(
        vec![
            vec![FR!(1), FR!(2), FR!(1), FR!(0), FR!(4)],
            vec![FR!(2), FR!(4), FR!(0), FR!(1), FR!(8)],
        ],
        vec![FR!(1), FR!(1), FR!(0), FR!(0), FR!(0)],
    ).unwrap();
    let result = Session::with_explicit_basis(problem, &ExplicitBasis::Indices(vec![0, 1]), SolverOptions::new());

    assert!(matches!(result, Err(Error::Basis(BasisError::DependentConstraintRow { .. }))));
}

#[test]
fn infeasible_basis() {
    // With x2 and x1 basic, x1 = 6 and x2 = -2.
    let problem = CanonicalForm::new(
        vec![
            vec![RE!(1), RE!(1), RE!(0), RE!(4)],
            vec![RE!(1), RE!(0), RE!(1), RE!(6)],
        ],
        vec![RE!(1), RE!(0), RE!(0), RE!(0)],
    ).unwrap();
    let result = Session::with_explicit_basis(problem, &ExplicitBasis::Indices(vec![1, 0]), SolverOptions::new());

    assert!(matches!(result, Err(Error::Basis(BasisError::ExplicitBasisInfeasible { .. }))));
}
