//! # Algorithms
use std::fmt::{Display, Formatter, Result as FormatResult};

use crate::algorithm::two_phase::Simplex;
use crate::algorithm::two_phase::strategy::pivot_rule::SteepestDescentAlongVariable;
use crate::config::SolverConfig;
use crate::data::linear_program::definition::LinearProgram;
use crate::data::linear_program::solution::Solution;
use crate::error::SolveError;

pub mod two_phase;

/// A problem formulation that can be solved.
pub trait Solve {
    /// Solve this problem with the default settings.
    ///
    /// # Return value
    ///
    /// A `Solution` with the classification of the problem, and values if an optimum was found.
    ///
    /// # Errors
    ///
    /// When the problem is malformed, a numerical invariant breaks or the iteration limit is hit.
    /// An infeasible or unbounded problem is not an error.
    fn solve(&self) -> Result<Solution, SolveError> {
        self.solve_with(&SolverConfig::default())
    }

    /// Solve this problem with explicit settings.
    ///
    /// # Errors
    ///
    /// See `solve`; additionally, when the configuration is not valid.
    fn solve_with(&self, config: &SolverConfig) -> Result<Solution, SolveError>;
}

impl Solve for LinearProgram {
    fn solve_with(&self, config: &SolverConfig) -> Result<Solution, SolveError> {
        Simplex::<SteepestDescentAlongVariable>::new(self, config)?.run()
    }
}

/// A linear program has a unique optimum, multiple optima, is unbounded or is infeasible.
///
/// This is determined as the result of an algorithm. `Undetermined` is only used while that
/// algorithm is still running.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Classification {
    /// No terminal state was reached yet.
    Undetermined,
    /// There is exactly one optimal vertex.
    Unique,
    /// There is an optimal vertex with an optimal neighbor; infinitely many optimal points.
    Multiple,
    /// The objective function can be improved without limit.
    Unbounded,
    /// No point satisfies all constraints.
    Infeasible,
}

impl Classification {
    /// Whether no more transitions can happen.
    pub fn is_terminal(self) -> bool {
        self != Self::Undetermined
    }

    /// Whether an optimal solution is available.
    pub fn is_optimal(self) -> bool {
        matches!(self, Self::Unique | Self::Multiple)
    }

    /// Sentence describing this classification to the end user.
    pub fn statement(self) -> &'static str {
        match self {
            Self::Unique => "Single solution found for result value.",
            Self::Multiple => "Infinite solutions found for result value.",
            Self::Unbounded => "Can't solve. Function not restricted by conditions.",
            Self::Infeasible => "Can't solve. No possible solution.",
            Self::Undetermined => "No result. Did not attempt to solve or unknown error.",
        }
    }
}

impl Display for Classification {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        f.write_str(match self {
            Self::Undetermined => "undetermined",
            Self::Unique => "unique",
            Self::Multiple => "multiple",
            Self::Unbounded => "unbounded",
            Self::Infeasible => "infeasible",
        })
    }
}
