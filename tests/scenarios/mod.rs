//! Small problems with a known verdict, solved end to end.
use tableau_simplex::algorithm::OptimizationResult;
use tableau_simplex::data::linear_program::solution::Solution;

mod test;

fn finite<F>(result: OptimizationResult<F>) -> Solution<F> {
    match result {
        OptimizationResult::FiniteOptimum(solution) => solution,
        OptimizationResult::Infeasible => panic!("unexpectedly infeasible"),
        OptimizationResult::Unbounded => panic!("unexpectedly unbounded"),
    }
}
