//! # Errors raised while solving
//!
//! Outcomes like infeasibility or unboundedness are not errors; they are reported through the
//! `Classification` of a `Solution`. The types in this module describe the cases where no valid
//! outcome could be produced at all.
use thiserror::Error;

use crate::algorithm::Classification;

/// A linear program (or the configuration it should be solved with) is malformed.
///
/// Detected before any pivoting happens; never retried.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    /// There are no constraints.
    #[error("there are no constraint rows")]
    NoRows,
    /// There are no variables.
    #[error("there are no variable columns")]
    NoColumns,
    /// Not all rows of the constraint matrix have the same length.
    #[error("row {row} has {found} columns, expected {expected}")]
    RaggedRow {
        /// Index of the first offending row.
        row: usize,
        /// Length of the first row (or the number of variables).
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },
    /// A vector doesn't have the length implied by the dimensions of the problem.
    #[error("{what} has length {found}, expected {expected}")]
    LengthMismatch {
        /// Name of the vector, for the end user.
        what: &'static str,
        /// Length implied by the problem dimensions.
        expected: usize,
        /// Actual length.
        found: usize,
    },
    /// A coefficient is NaN or infinite.
    #[error("{what} contains a value that is not finite at index {index}")]
    NonFinite {
        /// Name of the vector or matrix, for the end user.
        what: &'static str,
        /// Index of the value in the flattened (row major) data.
        index: usize,
    },
    /// The rounding tolerance should be finite and positive.
    #[error("tolerance should be finite and positive, got {0}")]
    InvalidTolerance(f64),
    /// An iteration limit of zero would not allow a single pivot.
    #[error("the iteration limit should be at least one")]
    InvalidIterationLimit,
}

/// Failure of a solve attempt or of reading its result.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolveError {
    /// The problem definition or solver configuration is malformed.
    #[error("invalid configuration: {0}")]
    Configuration(#[from] ConfigurationError),
    /// A pivot element of exactly zero was selected.
    ///
    /// The selection rules never pick such an element, so this indicates a logic defect.
    #[error("selected pivot element at row {row}, column {column} is zero")]
    ZeroPivot {
        /// Row of the pivot.
        row: usize,
        /// Column of the pivot.
        column: usize,
    },
    /// The iteration limit was reached before a classification was found.
    ///
    /// Typically caused by cycling on a degenerate problem.
    #[error("no convergence after {iterations} iterations")]
    NoConvergence {
        /// Number of pivots that were executed.
        iterations: usize,
    },
    /// A solution vector or objective value was requested while no optimum was found.
    #[error("no optimal solution available, the problem was classified as {classification}")]
    NotSolved {
        /// The classification of the problem at the time of the request.
        classification: Classification,
    },
}
