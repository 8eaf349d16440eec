//! # Definition of a linear program
//!
//! The immutable input of the solver: an objective, a dense constraint matrix, a right-hand side
//! and a relation per constraint. All variables are implicitly nonnegative.
use std::fmt::{Display, Formatter, Result as FormatResult};

use enum_map::EnumMap;
use itertools::Itertools;

use crate::data::linear_program::elements::{ConstraintType, Objective};
use crate::error::ConfigurationError;

/// A linear program `optimize c^T x s.t. A x (<=|=|>=) b, x >= 0`.
///
/// Dimensions are checked at creation and can't change afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearProgram {
    /// Direction of optimization.
    objective: Objective,
    /// Objective coefficients, one for each variable.
    cost: Vec<f64>,
    /// Row major, `m` rows of length `n`.
    constraints: Vec<Vec<f64>>,
    /// Right-hand side, one for each row.
    b: Vec<f64>,
    /// Relation, one for each row.
    constraint_types: Vec<ConstraintType>,
}

impl LinearProgram {
    /// Create a new linear program.
    ///
    /// # Arguments
    ///
    /// * `objective`: Whether to maximize or minimize.
    /// * `cost`: Objective coefficients, their number determines the number of variables `n`.
    /// * `constraints`: Constraint matrix in row major order, `m` rows of length `n`.
    /// * `b`: Right-hand side of length `m`. Values are used as given; negative values are
    /// allowed but make the initial basis infeasible.
    /// * `constraint_types`: Relation of each row, length `m`.
    ///
    /// # Errors
    ///
    /// When there are no variables or no constraints, the matrix is ragged, lengths don't match or
    /// any value is not finite.
    pub fn new(
        objective: Objective,
        cost: Vec<f64>,
        constraints: Vec<Vec<f64>>,
        b: Vec<f64>,
        constraint_types: Vec<ConstraintType>,
    ) -> Result<Self, ConfigurationError> {
        let nr_variables = cost.len();
        if nr_variables == 0 {
            return Err(ConfigurationError::NoColumns);
        }
        let nr_constraints = constraints.len();
        if nr_constraints == 0 {
            return Err(ConfigurationError::NoRows);
        }
        if let Some((row, values)) = constraints.iter()
            .enumerate()
            .find(|(_, values)| values.len() != nr_variables) {
            return Err(ConfigurationError::RaggedRow { row, expected: nr_variables, found: values.len() });
        }
        if b.len() != nr_constraints {
            return Err(ConfigurationError::LengthMismatch {
                what: "right-hand side", expected: nr_constraints, found: b.len(),
            });
        }
        if constraint_types.len() != nr_constraints {
            return Err(ConfigurationError::LengthMismatch {
                what: "relations", expected: nr_constraints, found: constraint_types.len(),
            });
        }

        check_finite("objective", cost.iter())?;
        check_finite("constraint matrix", constraints.iter().flatten())?;
        check_finite("right-hand side", b.iter())?;

        Ok(Self { objective, cost, constraints, b, constraint_types })
    }

    /// Direction of optimization.
    pub fn objective(&self) -> Objective {
        self.objective
    }

    /// Objective coefficients, of length `n`.
    pub fn cost(&self) -> &[f64] {
        &self.cost
    }

    /// Constraint matrix, `m` rows of length `n`.
    pub fn constraints(&self) -> &[Vec<f64>] {
        &self.constraints
    }

    /// Right-hand side, of length `m`.
    pub fn b(&self) -> &[f64] {
        &self.b
    }

    /// Relation of each row, of length `m`.
    pub fn constraint_types(&self) -> &[ConstraintType] {
        &self.constraint_types
    }

    /// Number of variables `n`.
    pub fn nr_variables(&self) -> usize {
        self.cost.len()
    }

    /// Number of constraints `m`.
    pub fn nr_constraints(&self) -> usize {
        self.constraints.len()
    }

    /// How many rows there are of each relation.
    pub fn nr_constraints_by_type(&self) -> EnumMap<ConstraintType, usize> {
        let mut counts = EnumMap::default();
        for &constraint_type in &self.constraint_types {
            counts[constraint_type] += 1;
        }
        counts
    }

    /// The subsystem of equality rows.
    ///
    /// # Return value
    ///
    /// Rows and right-hand side values of the equality constraints, in their original order.
    /// Both are empty if there are no equality constraints.
    pub fn equality_system(&self) -> (Vec<Vec<f64>>, Vec<f64>) {
        self.constraints.iter()
            .zip(&self.b)
            .zip(&self.constraint_types)
            .filter(|&(_, &constraint_type)| constraint_type == ConstraintType::Equal)
            .map(|((row, &b), _)| (row.clone(), b))
            .unzip()
    }

    /// Objective function value of a vector of variable values.
    pub fn objective_value(&self, x: &[f64]) -> f64 {
        debug_assert_eq!(x.len(), self.nr_variables());

        self.cost.iter().zip(x).map(|(c, x)| c * x).sum()
    }

    /// Whether a vector of variable values satisfies all constraints and nonnegativity bounds.
    ///
    /// # Arguments
    ///
    /// * `x`: Values of the variables, of length `n`.
    /// * `tolerance`: Allowed violation of each constraint.
    pub fn is_feasible(&self, x: &[f64], tolerance: f64) -> bool {
        debug_assert_eq!(x.len(), self.nr_variables());

        x.iter().all(|&value| value >= -tolerance) &&
            self.constraints.iter()
                .zip(&self.b)
                .zip(&self.constraint_types)
                .all(|((row, &b), constraint_type)| {
                    let lhs = row.iter().zip(x).map(|(a, x)| a * x).sum::<f64>();
                    match constraint_type {
                        ConstraintType::Less => lhs <= b + tolerance,
                        ConstraintType::Greater => lhs >= b - tolerance,
                        ConstraintType::Equal => (lhs - b).abs() <= tolerance,
                    }
                })
    }
}

fn check_finite<'a>(
    what: &'static str,
    values: impl Iterator<Item = &'a f64>,
) -> Result<(), ConfigurationError> {
    match values.enumerate().find(|(_, value)| !value.is_finite()) {
        Some((index, _)) => Err(ConfigurationError::NonFinite { what, index }),
        None => Ok(()),
    }
}

impl Display for LinearProgram {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        writeln!(f, "F = ( {} )", self.cost.iter().join(" "))?;
        writeln!(f, "A =")?;
        for row in &self.constraints {
            writeln!(f, "\t( {} )", row.iter().join(" "))?;
        }
        writeln!(f, "B = ( {} )", self.b.iter().join(" "))?;
        writeln!(f, "signs = ( {} )", self.constraint_types.iter().join(" "))?;
        writeln!(f, "type = {}", self.objective)
    }
}
