//! # Building blocks to describe linear programs.
use std::convert::TryFrom;
use std::fmt::{Display, Formatter, Result as FormatResult};

use enum_map::{Enum, EnumMap, enum_map};

/// A `Constraint` is a type of (in)equality.
#[allow(missing_docs)]
#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ConstraintType {
    Equal,
    Greater,
    Less,
}

impl ConstraintType {
    /// Coefficient of the variable that is added for this type of constraint.
    ///
    /// Slacks for `Less` rows, surplus variables for `Greater` rows and artificial variables for
    /// `Equal` rows.
    pub fn added_column_coefficients() -> EnumMap<Self, f64> {
        enum_map! {
            ConstraintType::Less => 1f64,
            ConstraintType::Greater => -1f64,
            ConstraintType::Equal => 1f64,
        }
    }

    /// Code of this relation in problem files.
    pub fn code(self) -> i64 {
        match self {
            Self::Less => -1,
            Self::Equal => 0,
            Self::Greater => 1,
        }
    }
}

/// Relation codes as used in problem files: `-1` is `<=`, `0` is `=` and `1` is `>=`.
impl TryFrom<i64> for ConstraintType {
    type Error = i64;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            -1 => Ok(Self::Less),
            0 => Ok(Self::Equal),
            1 => Ok(Self::Greater),
            other => Err(other),
        }
    }
}

impl Display for ConstraintType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        f.write_str(match self {
            Self::Less => "<=",
            Self::Equal => "=",
            Self::Greater => ">=",
        })
    }
}

/// Direction of optimization.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Objective {
    Maximize,
    #[default]
    Minimize,
}

impl Display for Objective {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        f.write_str(match self {
            Self::Maximize => "max",
            Self::Minimize => "min",
        })
    }
}
