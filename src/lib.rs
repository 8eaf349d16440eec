//! # A dense tableau linear program solver
//!
//! Linear programs with `<=`, `=` and `>=` constraints over nonnegative variables are solved using
//! the Simplex Method on a dense tableau. An initial basis of slack, surplus and artificial
//! variables is repaired until it is feasible, after which the objective is optimized.
//!
//! ```
//! use simplex_tableau::algorithm::{Classification, Solve};
//! use simplex_tableau::data::linear_program::definition::LinearProgram;
//! use simplex_tableau::data::linear_program::elements::{ConstraintType, Objective};
//!
//! let program = LinearProgram::new(
//!     Objective::Maximize,
//!     vec![3f64, 5f64],
//!     vec![vec![1f64, 0f64], vec![0f64, 2f64], vec![3f64, 2f64]],
//!     vec![4f64, 12f64, 18f64],
//!     vec![ConstraintType::Less; 3],
//! ).unwrap();
//!
//! let solution = program.solve().unwrap();
//! assert_eq!(solution.classification(), Classification::Unique);
//! assert_eq!(solution.objective_value(), Ok(36f64));
//! ```
#![warn(missing_docs)]

pub mod algorithm;
pub mod config;
pub mod data;
pub mod error;
pub mod io;

#[cfg(test)]
mod tests;
