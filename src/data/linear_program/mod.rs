//! # Representing linear programs
//!
//! A linear program is given as a dense `LinearProgram` definition. Solving it results in a
//! `Solution`.
pub mod definition;
pub mod elements;
pub mod solution;
