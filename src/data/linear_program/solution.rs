//! # Representation of solve results
//!
//! Once the simplex method reaches a terminal classification, a `Solution` is derived from the
//! final tableau and frozen. Only optimal classifications carry variable values.
use std::fmt::{Display, Formatter, Result as FormatResult};

use itertools::Itertools;

use crate::algorithm::Classification;
use crate::error::SolveError;

/// Result of a completed solve.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution {
    classification: Classification,
    /// Values and objective value, present only for `Unique` and `Multiple`.
    optimum: Option<(Vec<f64>, f64)>,
    nr_iterations: usize,
}

impl Solution {
    /// Create a result for an optimal classification.
    pub(crate) fn optimal(
        classification: Classification,
        values: Vec<f64>,
        objective_value: f64,
        nr_iterations: usize,
    ) -> Self {
        debug_assert!(classification.is_optimal());

        Self { classification, optimum: Some((values, objective_value)), nr_iterations }
    }

    /// Create a result without values, for `Unbounded` and `Infeasible`.
    pub(crate) fn without_optimum(classification: Classification, nr_iterations: usize) -> Self {
        debug_assert!(classification.is_terminal() && !classification.is_optimal());

        Self { classification, optimum: None, nr_iterations }
    }

    /// What kind of outcome the solve had.
    pub fn classification(&self) -> Classification {
        self.classification
    }

    /// Number of pivots executed.
    pub fn nr_iterations(&self) -> usize {
        self.nr_iterations
    }

    /// Values of the original variables at the optimum found.
    ///
    /// For `Multiple`, this is one of the optimal vertices.
    ///
    /// # Errors
    ///
    /// If the problem has no optimum.
    pub fn solution_vector(&self) -> Result<&[f64], SolveError> {
        self.optimum.as_ref()
            .map(|(values, _)| values.as_slice())
            .ok_or(SolveError::NotSolved { classification: self.classification })
    }

    /// Value of the objective function at the optimum.
    ///
    /// # Errors
    ///
    /// If the problem has no optimum.
    pub fn objective_value(&self) -> Result<f64, SolveError> {
        self.optimum.as_ref()
            .map(|&(_, value)| value)
            .ok_or(SolveError::NotSolved { classification: self.classification })
    }
}

impl Display for Solution {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        if let Some((values, objective_value)) = &self.optimum {
            writeln!(f, "Resulting solution = ( {} )", values.iter().join(" "))?;
            writeln!(f, "Result = {}", objective_value)?;
        }
        write!(f, "{}", self.classification.statement())
    }
}
