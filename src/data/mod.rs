//! # Data structures
//!
//! Linear program definitions, solve results and number helpers.
pub mod linear_program;
pub mod number_types;
