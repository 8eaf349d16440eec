//! # The Simplex algorithm
//!
//! This module contains all data structures and logic specific to the simplex algorithm on a
//! dense tableau. A basic feasible solution is found by first repairing the initial basis: every
//! basic variable that is negative, or artificial, is pivoted out. Once no such variable remains,
//! the objective is optimized with the regular primal simplex method.
//!
//! Each iteration decides anew which of these two modes applies.
use log::{debug, info, trace, warn};

use crate::algorithm::Classification;
use crate::algorithm::two_phase::classification::{classify_optimum, infeasible_row};
use crate::algorithm::two_phase::strategy::pivot_rule::{PivotRule, select_repair_pivot_column};
use crate::algorithm::two_phase::tableau::{debug_assert_in_canonical_form, Tableau};
use crate::config::SolverConfig;
use crate::data::linear_program::definition::LinearProgram;
use crate::data::linear_program::elements::ConstraintType;
use crate::data::linear_program::solution::Solution;
use crate::error::SolveError;

pub mod classification;
pub mod consistency;
pub mod strategy;
pub mod tableau;

#[cfg(test)]
mod test;

/// Phase of the method that an iteration belongs to.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Mode {
    /// A basic variable that is negative or artificial is removed from the basis.
    Repair,
    /// The basis is feasible and the objective function value is improved.
    Optimize,
}

/// A pivot that was applied to the tableau.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pivot {
    /// Phase in which the pivot was selected.
    pub mode: Mode,
    /// Row of the variable that left the basis.
    pub row: usize,
    /// Column of the variable that entered the basis.
    pub column: usize,
    /// Value of the pivot element before the row was normalized.
    pub element: f64,
}

/// Stepwise driver of the simplex method.
///
/// Owns the tableau of a single solve. The problem it was created from is only read.
///
/// # Type parameters
///
/// * `PR`: Rule to select entering columns with once the basis is feasible.
pub struct Simplex<'a, PR> {
    program: &'a LinearProgram,
    config: SolverConfig,
    tableau: Tableau,
    rule: PR,
    classification: Classification,
    nr_iterations: usize,
}

impl<'a, PR: PivotRule> Simplex<'a, PR> {
    /// Build the initial tableau and check the equality constraints for consistency.
    ///
    /// When the equality constraints have no solution, the problem is classified as infeasible
    /// right away, and no pivots will be made.
    ///
    /// # Errors
    ///
    /// If the configuration is not valid.
    pub fn new(program: &'a LinearProgram, config: &SolverConfig) -> Result<Self, SolveError> {
        config.validate()?;

        let counts = program.nr_constraints_by_type();
        debug!(
            "Building tableau for {} variables, {} <= rows, {} = rows and {} >= rows",
            program.nr_variables(),
            counts[ConstraintType::Less],
            counts[ConstraintType::Equal],
            counts[ConstraintType::Greater],
        );
        let tableau = Tableau::new(program, config.epsilon);
        let mut classification = Classification::Undetermined;

        let (matrix, b) = program.equality_system();
        if !matrix.is_empty() && !consistency::is_consistent(&matrix, &b, config.epsilon)? {
            info!("Equality constraints are inconsistent, the problem is {}", Classification::Infeasible);
            classification = Classification::Infeasible;
        }

        let rule = PR::new(&tableau);

        Ok(Self {
            program,
            config: *config,
            tableau,
            rule,
            classification,
            nr_iterations: 0,
        })
    }

    /// Perform a single iteration.
    ///
    /// # Return value
    ///
    /// The pivot that was applied, or `None` if the problem has been classified and no further
    /// iterations are possible.
    ///
    /// # Errors
    ///
    /// If the iteration limit is reached, or if a selected pivot element is zero.
    pub fn step(&mut self) -> Result<Option<Pivot>, SolveError> {
        if self.classification.is_terminal() {
            return Ok(None);
        }

        if let Some(row) = infeasible_row(&self.tableau) {
            debug!("Row {} has only artificial coefficients but a nonzero value", row);
            self.terminate(Classification::Infeasible);
            return Ok(None);
        }

        let (mode, row, column) = match self.tableau.first_bad_row() {
            Some(row) => match select_repair_pivot_column(&self.tableau, row) {
                Some(column) => (Mode::Repair, row, column),
                None => {
                    debug!("Basic variable of row {} can't be removed from the basis", row);
                    self.terminate(Classification::Infeasible);
                    return Ok(None);
                },
            },
            None => match self.rule.select_primal_pivot_column(&self.tableau) {
                Some((column, _)) => match self.tableau.select_primal_pivot_row(column) {
                    Some(row) => (Mode::Optimize, row, column),
                    None => {
                        debug!("Column {} can be increased without bound", column);
                        self.terminate(Classification::Unbounded);
                        return Ok(None);
                    },
                },
                None => {
                    let classification = classify_optimum(&self.tableau);
                    self.terminate(classification);
                    return Ok(None);
                },
            },
        };

        if let Some(limit) = self.config.max_iterations {
            if self.nr_iterations >= limit {
                warn!("Stopping after {} iterations without reaching an optimum", self.nr_iterations);
                return Err(SolveError::NoConvergence { iterations: self.nr_iterations });
            }
        }

        let element = self.tableau.bring_into_basis(row, column)?;
        self.nr_iterations += 1;
        debug!(
            "Iteration {} ({:?}): pivot on row {}, column {}, element {}",
            self.nr_iterations, mode, row, column, element,
        );
        trace!("Tableau after iteration {}:\n{}", self.nr_iterations, self.tableau);
        debug_assert_in_canonical_form(&self.tableau);

        Ok(Some(Pivot { mode, row, column, element }))
    }

    /// Iterate until the problem is classified.
    ///
    /// # Errors
    ///
    /// See `step`.
    pub fn run(mut self) -> Result<Solution, SolveError> {
        while self.step()?.is_some() {}

        self.into_solution()
    }

    fn terminate(&mut self, classification: Classification) {
        debug_assert!(classification.is_terminal());

        info!("Problem is {} after {} iterations", classification, self.nr_iterations);
        self.classification = classification;
    }

    /// Classification so far, `Undetermined` while iterating.
    pub fn classification(&self) -> Classification {
        self.classification
    }

    /// Number of pivots applied so far.
    pub fn nr_iterations(&self) -> usize {
        self.nr_iterations
    }

    /// The current state of the tableau, for inspection.
    pub fn tableau(&self) -> &Tableau {
        &self.tableau
    }

    /// Freeze the result.
    ///
    /// # Errors
    ///
    /// If the problem was not classified yet.
    pub fn into_solution(self) -> Result<Solution, SolveError> {
        match self.classification {
            Classification::Undetermined => Err(SolveError::NotSolved {
                classification: Classification::Undetermined,
            }),
            classification if classification.is_optimal() => {
                let values = self.tableau.solution_values();
                debug_assert!(self.program.is_feasible(&values, self.config.epsilon.sqrt()));

                Ok(Solution::optimal(
                    classification,
                    values,
                    self.tableau.objective_function_value(),
                    self.nr_iterations,
                ))
            },
            classification => Ok(Solution::without_optimum(classification, self.nr_iterations)),
        }
    }
}
