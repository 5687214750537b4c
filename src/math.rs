//! Shared numerical primitives anchored on `nalgebra` and `num-complex`.

use nalgebra::Vector3;

/// Primary scalar type used across the crate.
pub type Scalar = f64;
/// Convenient alias for three-dimensional real vectors.
pub type R3 = Vector3<Scalar>;
/// Primary complex scalar type used for impedances.
pub type CScalar = num_complex::Complex<Scalar>;

/// Returns `value` when it is finite and strictly positive.
#[must_use]
pub fn positive_finite(value: Scalar) -> Option<Scalar> {
    (value.is_finite() && value > 0.0).then_some(value)
}

/// Converts a power ratio to decibels (10·log10).
#[must_use]
pub fn power_ratio_db(ratio: Scalar) -> Scalar {
    10.0 * ratio.log10()
}
