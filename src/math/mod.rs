/// Affine 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D displacement vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Homogeneous coefficient triple `(a, b, c)`.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Returns `true` when a homogeneous triple has no affine image: its weight
/// is zero or dividing by it overflows.
///
/// Only the weight decides; large affine coordinates are still finite.
#[must_use]
pub fn is_infinite_weight(coeffs: &Vector3) -> bool {
    coeffs.z == 0.0 || !(coeffs.x / coeffs.z).is_finite() || !(coeffs.y / coeffs.z).is_finite()
}
