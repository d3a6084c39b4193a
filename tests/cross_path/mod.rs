//! Starting from the optimal basis found through the artificial phase gives the same optimum.
use tableau_simplex::algorithm::OptimizationResult;
use tableau_simplex::algorithm::options::SolverOptions;
use tableau_simplex::algorithm::two_phase::explicit_basis::ExplicitBasis;
use tableau_simplex::algorithm::two_phase::session::Session;
use tableau_simplex::algorithm::two_phase::step::Phase;
use tableau_simplex::data::linear_program::canonical_form::CanonicalForm;
use tableau_simplex::data::linear_program::solution::Solution;
use tableau_simplex::data::number_types::traits::NumberField;

mod test;

fn finite<F>(result: OptimizationResult<F>) -> Solution<F> {
    match result {
        OptimizationResult::FiniteOptimum(solution) => solution,
        OptimizationResult::Infeasible => panic!("unexpectedly infeasible"),
        OptimizationResult::Unbounded => panic!("unexpectedly unbounded"),
    }
}

/// Solve through the artificial phase, then again from the basis and from the values found.
fn agree<F: NumberField>(problem: CanonicalForm<F>) {
    let mut artificial = Session::with_artificial_basis(problem.clone(), SolverOptions::new()).unwrap();
    let expected = finite(artificial.solve().unwrap());

    let bases = [
        ExplicitBasis::Indices(expected.basis().to_vec()),
        ExplicitBasis::Values(expected.values().to_vec()),
    ];
    for basis in &bases {
        let mut explicit = Session::with_explicit_basis(problem.clone(), basis, SolverOptions::new()).unwrap();
        assert!(explicit.current().is_completed());

        let actual = finite(explicit.solve().unwrap());
        assert_eq!(actual.objective_value(), expected.objective_value());
        assert_eq!(actual.values(), expected.values());
        assert_eq!(explicit.pivot_counts()[Phase::Optimization], 0);
    }
}
