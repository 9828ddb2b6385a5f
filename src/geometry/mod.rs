mod chain;
mod line;
mod point;
mod segment;

pub use chain::SegmentChain;
pub use line::ProjLine;
pub use point::ProjPoint;
pub use segment::LineSeg;

use crate::error::Result;
use crate::math::{Point2, Vector2};

/// Trait for homogeneous entities that carry a local orthonormal frame.
///
/// Both points and lines are coefficient triples `(a, b, c)`. The pair
/// `(a, b)` defines the frame's normal, and the direction is the normal
/// rotated by +90°.
pub trait LocalFrame {
    /// Returns the affine anchor of the frame.
    ///
    /// For a point this is `(a/c, b/c)`; for a line it is the foot of the
    /// perpendicular dropped from the origin.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::PointAtInfinity` if the anchor has no affine
    /// coordinates.
    fn center(&self) -> Result<Point2>;

    /// Returns the unit normal `(a, b) / |(a, b)|`.
    fn normal(&self) -> Vector2;

    /// Returns the unit direction `(-b, a) / |(a, b)|`.
    fn direction(&self) -> Vector2;

    /// Returns `sqrt(a² + b²)`.
    fn magnitude(&self) -> f64 {
        self.sum_square().sqrt()
    }

    /// Returns `a² + b²`.
    fn sum_square(&self) -> f64;

    /// Returns the signed distance of the anchor from the origin.
    fn distance_to_origin(&self) -> f64;

    /// Returns the point `away` units along the normal and `along` units
    /// along the direction from the anchor.
    fn local_point(&self, away: f64, along: f64) -> ProjPoint;
}

/// Trait for entities that can be picked with a cursor of a given width.
pub trait Selectable {
    /// Returns `true` if `point` lies within `width / 2` of the entity.
    fn hit(&self, point: &Point2, width: f64) -> bool;
}
