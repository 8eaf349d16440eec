//! # Strategies
//!
//! Rules for selecting pivots, independent of the tableau operations.
pub mod pivot_rule;
