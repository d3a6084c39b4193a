//! # Pivot rules
//!
//! Candidate pivot cells for the primal simplex method. A column qualifies when its reduced cost is
//! negative; within such a column, the rows that attain the minimum ratio of right-hand side to a
//! strictly positive coefficient qualify. All ties are exposed, such that a caller can choose among
//! them. In automatic mode, the first candidate is used.
use std::cmp::Ordering;
use std::collections::BTreeSet;

use log::trace;

use crate::algorithm::two_phase::tableau::Tableau;
use crate::algorithm::two_phase::tableau::pivot::PivotCell;
use crate::data::number_types::traits::NumberField;

/// All candidate pivot cells, ordered by column and then by row.
///
/// # Arguments
///
/// * `tableau`: Short tableau with the reduced costs in the last row.
/// * `banned_rows`: Rows that may not be used as pivot row. When this excludes every candidate,
/// the restriction is lifted.
pub fn pivot_candidates<F: NumberField>(
    tableau: &Tableau<F>,
    banned_rows: &BTreeSet<usize>,
) -> Vec<PivotCell> {
    let all = (0..tableau.rhs_column())
        .filter(|&j| tableau.objective(j).is_negative())
        .flat_map(|j| minimum_ratio_rows(tableau, j).into_iter().map(move |i| PivotCell::new(i, j)))
        .collect::<Vec<_>>();

    if banned_rows.is_empty() {
        return all;
    }

    let allowed = all.iter()
        .filter(|cell| !banned_rows.contains(&cell.row))
        .copied()
        .collect::<Vec<_>>();
    if allowed.is_empty() && !all.is_empty() {
        trace!("all {} candidates are in banned rows, allowing them", all.len());
        all
    } else {
        allowed
    }
}

/// The candidate used when pivoting automatically.
pub fn first_candidate(candidates: &[PivotCell]) -> Option<PivotCell> {
    candidates.first().copied()
}

/// Ratio test for a single column.
///
/// The minimum is taken over every row with a strictly positive coefficient, such that the basic
/// solution stays feasible whichever of the returned rows is pivoted on.
///
/// # Return value
///
/// All rows attaining the minimum ratio, in increasing order. Empty if no coefficient is positive.
/// Ties are decided by `partial_cmp` alone, so tolerant number types tie within their tolerance.
pub fn minimum_ratio_rows<F: NumberField>(tableau: &Tableau<F>, column: usize) -> Vec<usize> {
    debug_assert!(column < tableau.rhs_column());

    let mut minimum: Option<F> = None;
    let mut rows = Vec::new();
    for i in 0..tableau.nr_constraints() {
        let coefficient = &tableau[(i, column)];
        if !coefficient.is_positive() {
            continue;
        }

        let ratio = tableau.rhs(i) / coefficient.clone();
        match minimum.as_ref().and_then(|current| ratio.partial_cmp(current)) {
            Some(Ordering::Equal) => rows.push(i),
            Some(Ordering::Greater) => {},
            Some(Ordering::Less) | None => {
                minimum = Some(ratio);
                rows.clear();
                rows.push(i);
            },
        }
    }

    rows
}
