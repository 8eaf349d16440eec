//! # Classification of tableau states
//!
//! Decides, from the state of a tableau alone, whether the simplex method can stop and what the
//! outcome is.
use crate::algorithm::Classification;
use crate::algorithm::two_phase::tableau::Tableau;

/// Find a row that can never be satisfied.
///
/// A row that has only zero coefficients in the columns that are not artificial, but a nonzero
/// value, states that a nonzero artificial variable is needed: the problem is infeasible.
///
/// # Return value
///
/// The first such row, if there is one.
pub fn infeasible_row(tableau: &Tableau) -> Option<usize> {
    (0..tableau.nr_rows())
        .find(|&i| tableau.has_only_artificial_entries(i) && tableau.b()[i] != 0f64)
}

/// Classify a basis for which no profitable column exists.
///
/// When a nonbasic original variable has a relative cost of exactly zero, it can enter the basis
/// without changing the objective value, and there are infinitely many optimal solutions.
///
/// # Arguments
///
/// * `tableau`: Tableau with a feasible basis and no profitable column.
///
/// # Return value
///
/// Either `Unique` or `Multiple`.
pub fn classify_optimum(tableau: &Tableau) -> Classification {
    debug_assert!(tableau.first_bad_row().is_none());

    let has_alternative = (0..tableau.nr_variables())
        .any(|j| !tableau.is_in_basis(j) && tableau.relative_cost(j) == 0f64);
    if has_alternative {
        Classification::Multiple
    } else {
        Classification::Unique
    }
}
