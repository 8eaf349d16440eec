//! # Pivot rules
//!
//! Strategies for selecting the column that enters the basis once the basis is feasible.
use crate::algorithm::two_phase::tableau::Tableau;

/// Deciding how to pivot.
///
/// During the Simplex method, one needs to decide how to move from basic solution to basic
/// solution. The pivot rule describes that behavior.
///
/// Once the column has been selected, a row needs to be found. This decision is made independent
/// of the strategy, see `Tableau::select_primal_pivot_row`.
pub trait PivotRule {
    /// Create a new instance.
    fn new(tableau: &Tableau) -> Self;

    /// Column selection rule for the primal Simplex method.
    ///
    /// Only columns that are not artificial and not in the basis are considered.
    ///
    /// # Return value
    ///
    /// Index of a column with a profitable relative cost, together with that cost. `None` if no
    /// such column exists, that is, the current basis is optimal.
    fn select_primal_pivot_column(&mut self, tableau: &Tableau) -> Option<(usize, f64)>;
}

/// Columns that may enter the basis, with their relative costs.
fn candidates(tableau: &Tableau) -> impl Iterator<Item = (usize, f64)> + '_ {
    (0..tableau.nr_columns())
        .filter(|&column| !tableau.is_artificial(column) && !tableau.is_in_basis(column))
        .map(|column| (column, tableau.relative_cost(column)))
        .filter(|&(_, cost)| tableau.is_profitable(cost))
}

/// Simply pivot on the first column, which has a profitable relative cost.
///
/// Together with the row selection, which prefers the lowest row, this avoids most cycling on
/// degenerate problems.
pub struct FirstProfitable;
impl PivotRule for FirstProfitable {
    fn new(_tableau: &Tableau) -> Self {
        Self
    }

    fn select_primal_pivot_column(&mut self, tableau: &Tableau) -> Option<(usize, f64)> {
        candidates(tableau).next()
    }
}

/// Pivot on the column with the most profitable relative cost.
///
/// That is the most negative cost when maximizing and the most positive one when minimizing.
/// Ties are broken in favor of the lowest column index.
pub struct SteepestDescentAlongVariable;
impl PivotRule for SteepestDescentAlongVariable {
    fn new(_tableau: &Tableau) -> Self {
        Self
    }

    fn select_primal_pivot_column(&mut self, tableau: &Tableau) -> Option<(usize, f64)> {
        let mut steepest: Option<(usize, f64)> = None;
        for (j, cost) in candidates(tableau) {
            if let Some((existing_j, existing_cost)) = steepest.as_mut() {
                if cost.abs() > existing_cost.abs() {
                    *existing_j = j;
                    *existing_cost = cost;
                }
            } else { steepest = Some((j, cost)) }
        }

        steepest
    }
}

/// Select the column to pivot on for a row with a bad basic variable.
///
/// For a negative value, the first column with a negative coefficient in the row, such that the
/// value becomes positive. For an artificial variable, the first column with any nonzero
/// coefficient. Artificial columns are never selected.
///
/// # Arguments
///
/// * `tableau`: Tableau of which `row` is a bad row.
/// * `row`: Row of the basic variable to remove from the basis.
///
/// # Return value
///
/// Index of the column to pivot on. If no column qualifies, the problem is infeasible.
pub fn select_repair_pivot_column(tableau: &Tableau, row: usize) -> Option<usize> {
    debug_assert!(tableau.is_bad_row(row));

    let values = &tableau.matrix()[row];
    let mut columns = (0..tableau.nr_columns()).filter(|&j| !tableau.is_artificial(j));
    if tableau.b()[row] < 0f64 {
        columns.find(|&j| values[j] < 0f64)
    } else {
        columns.find(|&j| values[j] != 0f64)
    }
}
