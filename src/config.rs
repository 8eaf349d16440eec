//! # Solver and diagnostics settings
//!
//! Settings are passed explicitly to the code that needs them.
use crate::error::ConfigurationError;

/// Numerical and termination settings of the simplex method.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SolverConfig {
    /// Values computed on the tableau that lie within this distance of an integer are snapped to
    /// that integer.
    pub epsilon: f64,
    /// Maximum number of pivots before giving up, `None` for no limit.
    ///
    /// Degenerate problems may cycle forever without a limit.
    pub max_iterations: Option<usize>,
}

impl SolverConfig {
    /// Default rounding tolerance.
    pub const DEFAULT_EPSILON: f64 = 1e-8;
    /// Default iteration limit.
    pub const DEFAULT_MAX_ITERATIONS: usize = 10_000;

    /// Check that the settings can be used.
    ///
    /// # Errors
    ///
    /// If the tolerance is not finite and positive, or the iteration limit is zero.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if !self.epsilon.is_finite() || self.epsilon <= 0f64 {
            return Err(ConfigurationError::InvalidTolerance(self.epsilon));
        }
        if self.max_iterations == Some(0) {
            return Err(ConfigurationError::InvalidIterationLimit);
        }

        Ok(())
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            epsilon: Self::DEFAULT_EPSILON,
            max_iterations: Some(Self::DEFAULT_MAX_ITERATIONS),
        }
    }
}

/// Layout of rendered tableaus.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct DisplayConfig {
    /// Width of each cell, values are right aligned.
    pub cell_width: usize,
    /// Number of digits after the decimal point.
    pub precision: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            cell_width: 10,
            precision: 2,
        }
    }
}
