//! # Simplex tableau
//!
//! Contains the simplex tableau and logic for elementary operations which can be performed upon
//! it. The tableau is dense: it stores every coefficient of the original columns and of one added
//! column per row.
use std::collections::HashSet;
use std::fmt::{Display, Formatter, Result as FormatResult};
use std::iter;

use crate::config::DisplayConfig;
use crate::data::linear_program::definition::LinearProgram;
use crate::data::linear_program::elements::{ConstraintType, Objective};
use crate::data::number_types::float::numerical_precision::round_to_integer_if_close;
use crate::error::SolveError;

pub mod display;

pub use display::TableauDisplay;

/// The data structure that is used by the simplex method: the simplex tableau.
///
/// Column `j < n` belongs to original variable `j`, column `n + i` to the variable that was added
/// for row `i`: a slack for `<=` rows, a surplus for `>=` rows and an artificial variable for `=`
/// rows. Artificial columns may leave the basis, but never enter it.
#[derive(Clone, Debug, PartialEq)]
pub struct Tableau {
    /// Number of original variables `n`.
    nr_variables: usize,
    /// Relation of each row, used to recognize artificial columns.
    constraint_types: Vec<ConstraintType>,
    /// Direction of optimization; determines which relative costs are profitable.
    objective: Objective,

    /// Matrix of size m x (n + m).
    ///
    /// This attribute changes with a basis change.
    rows: Vec<Vec<f64>>,
    /// Current values of the basic variables, one for each row.
    ///
    /// This attribute changes with a basis change.
    b: Vec<f64>,
    /// Objective coefficients of all n + m columns; zero for the added columns.
    cost: Vec<f64>,
    /// The "d-row": `sum_i cost[basis[i]] * rows[i][j] - cost[j]` for each column `j`.
    ///
    /// This attribute changes with a basis change.
    relative_cost: Vec<f64>,

    /// Maps the rows to the column containing its pivot.
    ///
    /// This attribute changes with a basis change.
    basis_indices: Vec<usize>,
    /// All columns currently in the basis.
    ///
    /// Could also be derived from `basis_indices`, but is here for faster reading and writing.
    basis_columns: HashSet<usize>,

    /// Results of arithmetic within this distance of an integer are snapped to it.
    epsilon: f64,
}

impl Tableau {
    /// Create the initial tableau for a linear program.
    ///
    /// Every row gets one added column, and all added columns start in the basis. Rows of `>=`
    /// constraints are negated such that their basis column has a coefficient of one; their
    /// right-hand side typically becomes negative, which makes the basic variable "bad".
    ///
    /// # Arguments
    ///
    /// * `program`: Problem to create the tableau for, validated at its creation.
    /// * `epsilon`: Rounding tolerance, see `round_to_integer_if_close`.
    pub fn new(program: &LinearProgram, epsilon: f64) -> Self {
        let nr_variables = program.nr_variables();
        let nr_rows = program.nr_constraints();
        let nr_columns = nr_variables + nr_rows;
        let coefficients = ConstraintType::added_column_coefficients();

        let mut rows = Vec::with_capacity(nr_rows);
        let mut b = Vec::with_capacity(nr_rows);
        for (i, ((row, &value), &constraint_type)) in program.constraints().iter()
            .zip(program.b())
            .zip(program.constraint_types())
            .enumerate() {
            let mut extended = row.clone();
            extended.resize(nr_columns, 0f64);
            extended[nr_variables + i] = coefficients[constraint_type];

            if coefficients[constraint_type] < 0f64 {
                // Subtracting from zero avoids negative zeros
                extended.iter_mut().for_each(|v| *v = 0f64 - *v);
                b.push(0f64 - value);
            } else {
                b.push(value);
            }
            rows.push(extended);
        }

        let cost = program.cost().iter()
            .copied()
            .chain(iter::repeat_n(0f64, nr_rows))
            .collect::<Vec<_>>();
        let basis_indices = (nr_variables..nr_columns).collect::<Vec<_>>();
        let basis_columns = basis_indices.iter().copied().collect();

        let mut tableau = Self {
            nr_variables,
            constraint_types: program.constraint_types().to_vec(),
            objective: program.objective(),
            rows,
            b,
            cost,
            relative_cost: vec![0f64; nr_columns],
            basis_indices,
            basis_columns,
            epsilon,
        };
        tableau.update_relative_costs();

        debug_assert_in_canonical_form(&tableau);
        tableau
    }

    /// Brings a column into the basis by a Gauss-Jordan elimination around the pivot.
    ///
    /// # Arguments
    ///
    /// * `pivot_row`: Row index of the pivot, in range 0 until `self.nr_rows()`.
    /// * `pivot_column`: Column index of the pivot, in range 0 until `self.nr_columns()`. Is not
    /// yet in the basis.
    ///
    /// # Return value
    ///
    /// The pivot element that was divided by.
    ///
    /// # Errors
    ///
    /// If the pivot element is zero. The tableau is not modified in that case.
    pub fn bring_into_basis(&mut self, pivot_row: usize, pivot_column: usize) -> Result<f64, SolveError> {
        debug_assert!(pivot_row < self.nr_rows());
        debug_assert!(pivot_column < self.nr_columns());
        debug_assert!(!self.is_in_basis(pivot_column));

        let pivot_element = self.rows[pivot_row][pivot_column];
        if pivot_element == 0f64 {
            return Err(SolveError::ZeroPivot { row: pivot_row, column: pivot_column });
        }

        let epsilon = self.epsilon;
        let round = |value: f64| round_to_integer_if_close(value, epsilon);

        // Normalize the pivot row
        self.b[pivot_row] = round(self.b[pivot_row] / pivot_element);
        for value in &mut self.rows[pivot_row] {
            *value = round(*value / pivot_element);
        }

        // Eliminate the pivot column from all other rows
        let pivot_values = self.rows[pivot_row].clone();
        let pivot_b = self.b[pivot_row];
        for (i, (row, b)) in self.rows.iter_mut().zip(self.b.iter_mut()).enumerate() {
            let factor = row[pivot_column];
            if i == pivot_row || factor == 0f64 {
                continue;
            }

            *b = round(*b - pivot_b * factor);
            for (value, pivot_value) in row.iter_mut().zip(&pivot_values) {
                *value = round(*value - pivot_value * factor);
            }
        }

        self.update_basis_indices(pivot_row, pivot_column);
        self.update_relative_costs();

        Ok(pivot_element)
    }

    /// Update the basis index.
    ///
    /// Removes the index of the variable leaving the basis from the `basis_columns` attribute,
    /// while inserting the entering variable index.
    fn update_basis_indices(&mut self, pivot_row: usize, pivot_column: usize) {
        let leaving_column = self.basis_indices[pivot_row];
        self.basis_columns.remove(&leaving_column);
        self.basis_indices[pivot_row] = pivot_column;
        self.basis_columns.insert(pivot_column);
    }

    /// Recompute the relative cost of every column with respect to the current basis.
    fn update_relative_costs(&mut self) {
        let relative_cost = (0..self.nr_columns())
            .map(|j| {
                let basis_cost = self.rows.iter()
                    .zip(&self.basis_indices)
                    .map(|(row, &basis_column)| self.cost[basis_column] * row[j])
                    .sum::<f64>();
                round_to_integer_if_close(basis_cost - self.cost[j], self.epsilon)
            })
            .collect();
        self.relative_cost = relative_cost;
    }

    /// Determine the row to pivot on.
    ///
    /// This is the row with the smallest nonnegative ratio between the current constraint value
    /// and a strictly positive column value. Ties are broken by taking the first such row.
    ///
    /// # Arguments
    ///
    /// * `column`: Index of the column that should enter the basis.
    ///
    /// # Return value
    ///
    /// Index of the row to pivot on. If not found, the problem is unbounded in the direction of
    /// that column.
    pub fn select_primal_pivot_row(&self, column: usize) -> Option<usize> {
        debug_assert!(column < self.nr_columns());

        // (chosen index, minimum ratio)
        let mut min_values: Option<(usize, f64)> = None;
        for (i, (row, &b)) in self.rows.iter().zip(&self.b).enumerate() {
            let xij = row[column];
            if xij > 0f64 {
                let ratio = b / xij;
                let smaller = match min_values {
                    None => true,
                    Some((_, minimum)) => ratio < minimum,
                };
                if ratio >= 0f64 && smaller {
                    min_values = Some((i, ratio));
                }
            }
        }

        min_values.map(|(i, _)| i)
    }

    /// Whether the variable of a column is an artificial variable of an equality row.
    pub fn is_artificial(&self, column: usize) -> bool {
        debug_assert!(column < self.nr_columns());

        column >= self.nr_variables &&
            self.constraint_types[column - self.nr_variables] == ConstraintType::Equal
    }

    /// Whether a row has only zeros in the columns that are not artificial.
    pub fn has_only_artificial_entries(&self, row: usize) -> bool {
        debug_assert!(row < self.nr_rows());

        self.rows[row].iter()
            .enumerate()
            .all(|(j, &value)| value == 0f64 || self.is_artificial(j))
    }

    /// Whether a row is a redundant equality.
    ///
    /// Its artificial variable is basic at value zero and can't be pivoted out, because the row
    /// has no other entries. The row stays basic at zero level forever.
    pub fn is_redundant_row(&self, row: usize) -> bool {
        self.is_artificial(self.basis_indices[row]) &&
            self.b[row] == 0f64 &&
            self.has_only_artificial_entries(row)
    }

    /// Whether the basic variable of a row prevents the basis from being feasible.
    ///
    /// That is the case for negative values and for artificial variables, unless the row is a
    /// redundant equality.
    pub fn is_bad_row(&self, row: usize) -> bool {
        debug_assert!(row < self.nr_rows());

        self.b[row] < 0f64 ||
            (self.is_artificial(self.basis_indices[row]) && !self.is_redundant_row(row))
    }

    /// The first row with a bad basic variable, if any.
    pub fn first_bad_row(&self) -> Option<usize> {
        (0..self.nr_rows()).find(|&i| self.is_bad_row(i))
    }

    /// Whether a column is in the basis.
    pub fn is_in_basis(&self, column: usize) -> bool {
        debug_assert!(column < self.nr_columns());

        self.basis_columns.contains(&column)
    }

    /// Relative cost of a column.
    ///
    /// Zero for basis columns.
    pub fn relative_cost(&self, column: usize) -> f64 {
        debug_assert!(column < self.nr_columns());

        self.relative_cost[column]
    }

    /// Whether changing a relative cost in this direction improves the objective.
    ///
    /// Negative relative costs are profitable when maximizing, positive ones when minimizing.
    pub fn is_profitable(&self, relative_cost: f64) -> bool {
        match self.objective {
            Objective::Maximize => relative_cost < 0f64,
            Objective::Minimize => relative_cost > 0f64,
        }
    }

    /// Get the current basic solution.
    ///
    /// # Return value
    ///
    /// Values for all `n + m` columns; zero for the nonbasic ones.
    pub fn current_bfs(&self) -> Vec<f64> {
        let mut values = vec![0f64; self.nr_columns()];
        for (&column, &value) in self.basis_indices.iter().zip(&self.b) {
            values[column] = value;
        }
        values
    }

    /// Values of the original variables in the current basic solution.
    pub fn solution_values(&self) -> Vec<f64> {
        let mut values = self.current_bfs();
        values.truncate(self.nr_variables);
        values
    }

    /// Get the objective function value of the current basic solution.
    pub fn objective_function_value(&self) -> f64 {
        let value = self.basis_indices.iter()
            .zip(&self.b)
            .map(|(&column, &value)| self.cost[column] * value)
            .sum::<f64>();
        round_to_integer_if_close(value, self.epsilon)
    }

    /// Render the tableau with a specific layout.
    pub fn display(&self, config: &DisplayConfig) -> TableauDisplay<'_> {
        TableauDisplay::new(self, *config)
    }

    /// Current coefficients, `m` rows of length `n + m`.
    pub fn matrix(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Current values of the basic variables, one for each row.
    pub fn b(&self) -> &[f64] {
        &self.b
    }

    /// The basis column of each row.
    pub fn basis_indices(&self) -> &[usize] {
        &self.basis_indices
    }

    /// The relative cost of each column, the "d-row".
    pub fn relative_costs(&self) -> &[f64] {
        &self.relative_cost
    }

    /// Direction of optimization.
    pub fn objective(&self) -> Objective {
        self.objective
    }

    /// Number of rows `m` in the tableau.
    pub fn nr_rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns `n + m` in the tableau.
    pub fn nr_columns(&self) -> usize {
        self.cost.len()
    }

    /// Number of original variables `n`.
    pub fn nr_variables(&self) -> usize {
        self.nr_variables
    }

    /// Create a tableau for a problem with an explicit basis, for testing.
    ///
    /// Relative costs are derived from the basis.
    #[cfg(test)]
    pub(crate) fn from_test_data(
        program: &LinearProgram,
        rows: Vec<Vec<f64>>,
        b: Vec<f64>,
        basis_indices: Vec<usize>,
    ) -> Self {
        let nr_rows = program.nr_constraints();
        let cost = program.cost().iter()
            .copied()
            .chain(iter::repeat_n(0f64, nr_rows))
            .collect::<Vec<_>>();

        let mut tableau = Self {
            nr_variables: program.nr_variables(),
            constraint_types: program.constraint_types().to_vec(),
            objective: program.objective(),
            relative_cost: vec![0f64; cost.len()],
            rows,
            b,
            cost,
            basis_columns: basis_indices.iter().copied().collect(),
            basis_indices,
            epsilon: crate::config::SolverConfig::DEFAULT_EPSILON,
        };
        tableau.update_relative_costs();

        debug_assert_in_canonical_form(&tableau);
        tableau
    }
}

/// Check whether the tableau is in canonical form with respect to its basis.
///
/// Only used for debug purposes.
pub fn debug_assert_in_canonical_form(tableau: &Tableau) {
    // Correct number of basis columns (uniqueness is implied because it's a set)
    debug_assert_eq!(tableau.basis_columns.len(), tableau.nr_rows());

    // Basis columns are unit vectors with zero relative cost
    for (i, &column) in tableau.basis_indices.iter().enumerate() {
        for (k, row) in tableau.rows.iter().enumerate() {
            let expected = if k == i { 1f64 } else { 0f64 };
            debug_assert_eq!(
                row[column], expected,
                "Basis column {} of row {} has value {} in row {}", column, i, row[column], k,
            );
        }
        debug_assert_eq!(
            tableau.relative_cost[column], 0f64,
            "Relative cost of basis column {} is not zero", column,
        );
    }
}

impl Display for Tableau {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        self.display(&DisplayConfig::default()).fmt(f)
    }
}
