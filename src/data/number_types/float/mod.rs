//! # Floating point numbers
//!
//! All computations happen in `f64`. Correctness guarantees are impossible to give due to
//! (accumulating) rounding errors; the helpers in this module contain the damage.
pub mod numerical_precision;
