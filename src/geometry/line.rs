use crate::error::{GeometryError, Result};
use crate::math::{Point2, Vector2, Vector3, TOLERANCE};

use super::{LineSeg, LocalFrame, ProjPoint, Selectable};

/// An infinite line `a·x + b·y + c = 0` with `a² + b² = 1`.
///
/// The unit normal `(a, b)` points to the positive side, so
/// [`ProjLine::distance_normal`] is a true signed Euclidean distance.
/// Tangential coordinates are measured along `(-b, a)` from the foot of
/// the perpendicular dropped from the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjLine {
    coeffs: Vector3,
}

impl ProjLine {
    /// Creates a line from raw coefficients and normalizes it.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::NonFinite` for NaN or infinite input, or
    /// `GeometryError::DegenerateLine` if `(a, b)` is (nearly) zero.
    pub fn new(a: f64, b: f64, c: f64) -> Result<Self> {
        if !(a.is_finite() && b.is_finite() && c.is_finite()) {
            return Err(GeometryError::NonFinite("line coefficients").into());
        }
        Self::normalized(Vector3::new(a, b, c))
    }

    /// Creates the line through two affine points.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DegenerateLine` if the points coincide.
    pub fn through(p1: &Point2, p2: &Point2) -> Result<Self> {
        let h1 = Vector3::new(p1.x, p1.y, 1.0);
        let h2 = Vector3::new(p2.x, p2.y, 1.0);
        Self::normalized(h1.cross(&h2))
    }

    /// Creates the line through two homogeneous points.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DegenerateLine` if the points coincide or
    /// both lie at infinity.
    pub fn through_points(p1: &ProjPoint, p2: &ProjPoint) -> Result<Self> {
        Self::normalized(p1.coeffs().cross(p2.coeffs()))
    }

    fn normalized(coeffs: Vector3) -> Result<Self> {
        let m = coeffs.x.hypot(coeffs.y);
        if !m.is_finite() || m < TOLERANCE {
            return Err(GeometryError::DegenerateLine {
                a: coeffs.x,
                b: coeffs.y,
            }
            .into());
        }
        Ok(Self { coeffs: coeffs / m })
    }

    #[must_use]
    pub fn a(&self) -> f64 {
        self.coeffs.x
    }

    #[must_use]
    pub fn b(&self) -> f64 {
        self.coeffs.y
    }

    #[must_use]
    pub fn c(&self) -> f64 {
        self.coeffs.z
    }

    /// Returns the normalized coefficient triple.
    #[must_use]
    pub fn coeffs(&self) -> &Vector3 {
        &self.coeffs
    }

    /// Signed tangential coordinate of the projection of `point`.
    #[must_use]
    pub fn distance_along(&self, point: &Point2) -> f64 {
        self.a() * point.y - self.b() * point.x
    }

    /// Signed perpendicular distance from `point` to the line.
    #[must_use]
    pub fn distance_normal(&self, point: &Point2) -> f64 {
        self.a() * point.x + self.b() * point.y + self.c()
    }

    /// Tangential coordinate of a homogeneous point.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::PointAtInfinity` if the point has no affine
    /// coordinates.
    pub fn distance_along_projective(&self, point: &ProjPoint) -> Result<f64> {
        if point.is_at_infinity() {
            return Err(GeometryError::PointAtInfinity.into());
        }
        Ok((self.a() * point.b() - self.b() * point.a()) / point.c())
    }

    /// Perpendicular distance of a homogeneous point.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::PointAtInfinity` if the point has no affine
    /// coordinates.
    pub fn distance_normal_projective(&self, point: &ProjPoint) -> Result<f64> {
        if point.is_at_infinity() {
            return Err(GeometryError::PointAtInfinity.into());
        }
        Ok(self.coeffs.dot(point.coeffs()) / point.c())
    }

    /// Returns the parallel line shifted so that every point of this line
    /// sits at signed distance `distance` from the result.
    ///
    /// A positive distance moves the line against its normal, which is to the
    /// right of the travel direction for a line built from two points.
    #[must_use]
    pub fn offset(&self, distance: f64) -> Self {
        // unit normal: c' = c + d * |n| = c + d
        Self {
            coeffs: Vector3::new(self.a(), self.b(), self.c() + distance),
        }
    }

    /// Returns the homogeneous intersection point with `other`.
    ///
    /// Parallel lines yield a point at infinity, coincident lines the zero
    /// triple; both report [`ProjPoint::is_at_infinity`].
    #[must_use]
    pub fn intersect(&self, other: &ProjLine) -> ProjPoint {
        ProjPoint::from_coeffs(self.coeffs.cross(&other.coeffs))
    }

    /// Trims this line to the span between its intersections with `start`
    /// and `end`.
    ///
    /// The returned segment lies on this line, preserving its orientation.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::PointAtInfinity` if either bounding line is
    /// parallel to this one.
    pub fn trim_between(&self, start: &ProjLine, end: &ProjLine) -> Result<LineSeg> {
        let x1 = self.distance_along_projective(&self.intersect(start))?;
        let x2 = self.distance_along_projective(&self.intersect(end))?;
        Ok(LineSeg::new(*self, x1, x2))
    }

    /// Returns two points `extent` units either side of the foot point,
    /// for drawing the line as if it were infinite.
    #[must_use]
    pub fn span(&self, extent: f64) -> (ProjPoint, ProjPoint) {
        (self.local_point(0.0, -extent), self.local_point(0.0, extent))
    }
}

impl LocalFrame for ProjLine {
    fn center(&self) -> Result<Point2> {
        let s = self.sum_square();
        Ok(Point2::new(-self.a() * self.c() / s, -self.b() * self.c() / s))
    }

    fn normal(&self) -> Vector2 {
        Vector2::new(self.a(), self.b()) / self.magnitude()
    }

    fn direction(&self) -> Vector2 {
        Vector2::new(-self.b(), self.a()) / self.magnitude()
    }

    fn sum_square(&self) -> f64 {
        self.a() * self.a() + self.b() * self.b()
    }

    fn distance_to_origin(&self) -> f64 {
        self.c() / self.magnitude()
    }

    fn local_point(&self, away: f64, along: f64) -> ProjPoint {
        let (a, b, c) = (self.a(), self.b(), self.c());
        let m = self.magnitude();
        ProjPoint::from_coeffs(Vector3::new(
            -a * c + m * (a * away - b * along),
            -b * c + m * (b * away + a * along),
            m * m,
        ))
    }
}

impl Selectable for ProjLine {
    fn hit(&self, point: &Point2, width: f64) -> bool {
        self.distance_normal(point).abs() <= width / 2.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    const TOL: f64 = 1e-10;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn through_two_points_is_normalized() {
        let pairs = [
            (p(0.0, 0.0), p(10.0, 0.0)),
            (p(1.0, 2.0), p(-3.0, 7.5)),
            (p(-100.0, 40.0), p(0.001, 0.002)),
            (p(5.0, 5.0), p(5.0, -5.0)),
        ];
        for (p1, p2) in pairs {
            let line = ProjLine::through(&p1, &p2).unwrap();
            assert_abs_diff_eq!(line.sum_square(), 1.0, epsilon = TOL);
            assert_abs_diff_eq!(line.distance_normal(&p1), 0.0, epsilon = TOL);
            assert_abs_diff_eq!(line.distance_normal(&p2), 0.0, epsilon = TOL);
        }
    }

    #[test]
    fn through_matches_explicit_coefficients() {
        // a = y1 - y2, b = x2 - x1, c = x1*y2 - x2*y1
        let line = ProjLine::through(&p(0.0, 0.0), &p(10.0, 0.0)).unwrap();
        assert_abs_diff_eq!(line.a(), 0.0, epsilon = TOL);
        assert_abs_diff_eq!(line.b(), 1.0, epsilon = TOL);
        assert_abs_diff_eq!(line.c(), 0.0, epsilon = TOL);
    }

    #[test]
    fn through_projective_points_agrees_with_affine() {
        let a = ProjLine::through(&p(1.0, 2.0), &p(4.0, -2.0)).unwrap();
        let b = ProjLine::through_points(
            &ProjPoint::new(2.0, 4.0, 2.0).unwrap(),
            &ProjPoint::new(12.0, -6.0, 3.0).unwrap(),
        )
        .unwrap();
        assert_abs_diff_eq!(a.coeffs(), b.coeffs(), epsilon = TOL);
    }

    #[test]
    fn coincident_points_are_degenerate() {
        assert!(ProjLine::through(&p(3.0, 3.0), &p(3.0, 3.0)).is_err());
        let q = ProjPoint::from_xy(1.0, 1.0);
        assert!(ProjLine::through_points(&q, &q).is_err());
    }

    #[test]
    fn zero_direction_rejected() {
        assert!(ProjLine::new(0.0, 0.0, 5.0).is_err());
        assert!(ProjLine::new(f64::INFINITY, 0.0, 5.0).is_err());
    }

    #[test]
    fn raw_coefficients_are_normalized() {
        let line = ProjLine::new(3.0, 4.0, 10.0).unwrap();
        assert_abs_diff_eq!(line.a(), 0.6, epsilon = TOL);
        assert_abs_diff_eq!(line.b(), 0.8, epsilon = TOL);
        assert_abs_diff_eq!(line.c(), 2.0, epsilon = TOL);
        assert_abs_diff_eq!(line.distance_to_origin(), 2.0, epsilon = TOL);
    }

    #[test]
    fn distance_normal_is_signed() {
        let line = ProjLine::through(&p(0.0, 0.0), &p(10.0, 0.0)).unwrap();
        assert_abs_diff_eq!(line.distance_normal(&p(3.0, 2.0)), 2.0, epsilon = TOL);
        assert_abs_diff_eq!(line.distance_normal(&p(3.0, -2.0)), -2.0, epsilon = TOL);
    }

    #[test]
    fn distance_along_locates_projection() {
        let line = ProjLine::through(&p(0.0, 1.0), &p(1.0, 2.0)).unwrap();
        let q = p(4.0, -1.0);
        let z = line.distance_along(&q);
        let foot = line.local_point(0.0, z).center().unwrap();
        // The foot lies on the line and q - foot is along the normal.
        assert_abs_diff_eq!(line.distance_normal(&foot), 0.0, epsilon = TOL);
        assert_abs_diff_eq!((q - foot).dot(&line.direction()), 0.0, epsilon = TOL);
    }

    #[test]
    fn projective_distances_match_affine() {
        let line = ProjLine::new(1.0, -2.0, 3.0).unwrap();
        let hp = ProjPoint::new(10.0, 4.0, 2.0).unwrap();
        let ap = p(5.0, 2.0);
        assert_abs_diff_eq!(
            line.distance_along_projective(&hp).unwrap(),
            line.distance_along(&ap),
            epsilon = TOL
        );
        assert_abs_diff_eq!(
            line.distance_normal_projective(&hp).unwrap(),
            line.distance_normal(&ap),
            epsilon = TOL
        );
        let inf = ProjPoint::new(1.0, 0.0, 0.0).unwrap();
        assert!(line.distance_along_projective(&inf).is_err());
        assert!(line.distance_normal_projective(&inf).is_err());
    }

    #[test]
    fn offset_composes_additively() {
        let line = ProjLine::through(&p(1.0, 2.0), &p(-3.0, 5.0)).unwrap();
        for (d1, d2) in [(1.0, 2.0), (-3.5, 1.25), (0.0, -7.0), (100.0, -100.0)] {
            let a = line.offset(d1).offset(d2);
            let b = line.offset(d1 + d2);
            assert_abs_diff_eq!(a.coeffs(), b.coeffs(), epsilon = TOL);
        }
    }

    #[test]
    fn offset_moves_points_by_distance() {
        let line = ProjLine::through(&p(0.0, 0.0), &p(10.0, 0.0)).unwrap();
        let moved = line.offset(1.0);
        // Points on the original are at +1 from the offset line.
        assert_abs_diff_eq!(moved.distance_normal(&p(5.0, 0.0)), 1.0, epsilon = TOL);
        assert_abs_diff_eq!(moved.distance_normal(&p(5.0, -1.0)), 0.0, epsilon = TOL);
    }

    #[test]
    fn intersect_crossing_lines() {
        let h = ProjLine::through(&p(0.0, 3.0), &p(1.0, 3.0)).unwrap();
        let v = ProjLine::through(&p(-2.0, 0.0), &p(-2.0, 1.0)).unwrap();
        let x = h.intersect(&v).center().unwrap();
        assert_abs_diff_eq!(x.x, -2.0, epsilon = TOL);
        assert_abs_diff_eq!(x.y, 3.0, epsilon = TOL);
    }

    #[test]
    fn intersect_parallel_lines_is_at_infinity() {
        let a = ProjLine::through(&p(0.0, 0.0), &p(1.0, 1.0)).unwrap();
        let b = a.offset(2.0);
        let x = a.intersect(&b);
        assert!(x.is_at_infinity());
        assert!(x.center().is_err());
    }

    #[test]
    fn trim_between_produces_segment_on_line() {
        let line = ProjLine::through(&p(0.0, 0.0), &p(10.0, 0.0)).unwrap();
        let left = ProjLine::through(&p(2.0, -1.0), &p(2.0, 1.0)).unwrap();
        let right = ProjLine::through(&p(7.0, -1.0), &p(8.0, 1.0)).unwrap();
        let seg = line.trim_between(&left, &right).unwrap();
        let s = seg.start_point().center().unwrap();
        let e = seg.end_point().center().unwrap();
        assert_abs_diff_eq!(s.x, 2.0, epsilon = TOL);
        assert_abs_diff_eq!(s.y, 0.0, epsilon = TOL);
        assert_abs_diff_eq!(e.x, 7.5, epsilon = TOL);
        assert_abs_diff_eq!(e.y, 0.0, epsilon = TOL);
        assert_eq!(seg.line(), &line);
    }

    #[test]
    fn trim_between_parallel_fails() {
        let line = ProjLine::through(&p(0.0, 0.0), &p(10.0, 0.0)).unwrap();
        let left = ProjLine::through(&p(0.0, -1.0), &p(0.0, 1.0)).unwrap();
        assert!(line.trim_between(&left, &line.offset(3.0)).is_err());
    }

    #[test]
    fn center_is_foot_of_perpendicular() {
        let line = ProjLine::through(&p(0.0, 4.0), &p(4.0, 0.0)).unwrap();
        let foot = line.center().unwrap();
        assert_abs_diff_eq!(foot.x, 2.0, epsilon = TOL);
        assert_abs_diff_eq!(foot.y, 2.0, epsilon = TOL);
        let origin = line.local_point(0.0, 0.0).center().unwrap();
        assert_abs_diff_eq!(origin, foot, epsilon = TOL);
    }

    #[test]
    fn local_point_follows_frame() {
        let line = ProjLine::through(&p(0.0, 4.0), &p(4.0, 0.0)).unwrap();
        let q = line.local_point(1.5, -2.0).center().unwrap();
        assert_abs_diff_eq!(line.distance_normal(&q), 1.5, epsilon = TOL);
        assert_abs_diff_eq!(line.distance_along(&q), -2.0, epsilon = TOL);
    }

    #[test]
    fn span_points_lie_on_line() {
        let line = ProjLine::new(1.0, 1.0, -3.0).unwrap();
        let (a, b) = line.span(1000.0);
        let a = a.center().unwrap();
        let b = b.center().unwrap();
        assert_abs_diff_eq!(line.distance_normal(&a), 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(line.distance_normal(&b), 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(nalgebra::distance(&a, &b), 2000.0, epsilon = 1e-9);
    }

    #[test]
    fn hit_is_an_infinite_strip() {
        let line = ProjLine::through(&p(0.0, 0.0), &p(10.0, 0.0)).unwrap();
        assert!(line.hit(&p(5000.0, 0.9), 2.0));
        assert!(line.hit(&p(-5000.0, -1.0), 2.0));
        assert!(!line.hit(&p(5.0, 1.1), 2.0));
    }
}
