//! Helper methods for the accuracy of floating point calculations.
use num_traits::Float;

/// Snap a value to the nearest integer when it is within `epsilon` of it.
///
/// Every result computed on the tableau passes through this function, such that values that
/// should be exact integers (most notably zero) don't accumulate rounding errors over many pivots.
/// Values in between integers are returned untouched.
///
/// # Arguments
///
/// * `value`: Float (potentially having rounding errors) to trim.
/// * `epsilon`: Maximum distance to the nearest integer for snapping to happen, positive.
///
/// # Return value
///
/// The nearest integer if it is close enough, otherwise the value itself.
pub fn round_to_integer_if_close<F: Float>(value: F, epsilon: F) -> F {
    debug_assert!(epsilon > F::zero());

    let candidate = value.round();
    if (value - candidate).abs() < epsilon {
        // Avoid handing out negative zero, it prints as "-0"
        candidate + F::zero()
    } else {
        value
    }
}

/// Whether a value is within `epsilon` of zero.
pub fn is_close_to_zero<F: Float>(value: F, epsilon: F) -> bool {
    value.abs() < epsilon
}
