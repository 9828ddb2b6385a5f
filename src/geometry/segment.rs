use crate::error::Result;
use crate::math::Point2;

use super::{LocalFrame, ProjLine, ProjPoint, Selectable};

/// A bounded span of a [`ProjLine`].
///
/// `x1` and `x2` are tangential coordinates on the line, so the segment is
/// fully described by `(a, b, c, x1, x2)`. Endpoints are derived on demand.
/// Either ordering of `x1` and `x2` is valid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSeg {
    line: ProjLine,
    x1: f64,
    x2: f64,
}

impl LineSeg {
    #[must_use]
    pub fn new(line: ProjLine, x1: f64, x2: f64) -> Self {
        Self { line, x1, x2 }
    }

    /// Creates the segment from `start` to `end`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DegenerateLine` if the points coincide.
    pub fn from_points(start: &Point2, end: &Point2) -> Result<Self> {
        let line = ProjLine::through(start, end)?;
        Ok(Self {
            line,
            x1: line.distance_along(start),
            x2: line.distance_along(end),
        })
    }

    /// Creates the segment between two homogeneous points.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DegenerateLine` if the points coincide, or
    /// `GeometryError::PointAtInfinity` if either has no affine coordinates.
    pub fn from_proj_points(start: &ProjPoint, end: &ProjPoint) -> Result<Self> {
        let line = ProjLine::through_points(start, end)?;
        Ok(Self {
            line,
            x1: line.distance_along_projective(start)?,
            x2: line.distance_along_projective(end)?,
        })
    }

    #[must_use]
    pub fn line(&self) -> &ProjLine {
        &self.line
    }

    #[must_use]
    pub fn start_distance(&self) -> f64 {
        self.x1
    }

    #[must_use]
    pub fn end_distance(&self) -> f64 {
        self.x2
    }

    #[must_use]
    pub fn start_point(&self) -> ProjPoint {
        self.line.local_point(0.0, self.x1)
    }

    #[must_use]
    pub fn end_point(&self) -> ProjPoint {
        self.line.local_point(0.0, self.x2)
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        (self.x2 - self.x1).abs()
    }

    /// Translates the segment perpendicular to its line, keeping `x1`, `x2`.
    ///
    /// Neighbors are not re-trimmed; see
    /// [`ChainOffset2D`](crate::operations::offset::ChainOffset2D) for that.
    #[must_use]
    pub fn offset(&self, amount: f64) -> Self {
        Self::new(self.line.offset(amount), self.x1, self.x2)
    }
}

impl Selectable for LineSeg {
    fn hit(&self, point: &Point2, width: f64) -> bool {
        if !self.line.hit(point, width) {
            return false;
        }
        let z = self.line.distance_along(point);
        z >= self.x1.min(self.x2) && z <= self.x1.max(self.x2)
    }
}
