use std::ops::{Add, Sub};

use crate::error::{GeometryError, Result};
use crate::math::{is_infinite_weight, Point2, Vector2, Vector3, TOLERANCE};

use super::{LocalFrame, Selectable};

/// A point in homogeneous coordinates `(a, b, c)`.
///
/// Represents the affine point `(a/c, b/c)` when `c ≠ 0`. A zero weight
/// marks a point at infinity, which only arises from intersecting parallel
/// lines and has no affine coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjPoint {
    coeffs: Vector3,
}

impl ProjPoint {
    /// Creates a point from raw homogeneous coefficients.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::NonFinite` if any coefficient is NaN or
    /// infinite, or `GeometryError::ZeroPoint` if all three are zero.
    pub fn new(a: f64, b: f64, c: f64) -> Result<Self> {
        if !(a.is_finite() && b.is_finite() && c.is_finite()) {
            return Err(GeometryError::NonFinite("point coefficients").into());
        }
        if a == 0.0 && b == 0.0 && c == 0.0 {
            return Err(GeometryError::ZeroPoint.into());
        }
        Ok(Self::from_coeffs(Vector3::new(a, b, c)))
    }

    /// Creates the affine point `(x, y)` with unit weight.
    #[must_use]
    pub fn from_xy(x: f64, y: f64) -> Self {
        Self::from_coeffs(Vector3::new(x, y, 1.0))
    }

    /// Creates a homogeneous point from an affine point.
    #[must_use]
    pub fn from_point(point: &Point2) -> Self {
        Self::from_xy(point.x, point.y)
    }

    pub(crate) fn from_coeffs(coeffs: Vector3) -> Self {
        Self { coeffs }
    }

    #[must_use]
    pub fn a(&self) -> f64 {
        self.coeffs.x
    }

    #[must_use]
    pub fn b(&self) -> f64 {
        self.coeffs.y
    }

    /// Returns the homogeneous weight.
    #[must_use]
    pub fn c(&self) -> f64 {
        self.coeffs.z
    }

    /// Returns the coefficient triple.
    #[must_use]
    pub fn coeffs(&self) -> &Vector3 {
        &self.coeffs
    }

    /// Returns `true` if the point has no affine coordinates.
    #[must_use]
    pub fn is_at_infinity(&self) -> bool {
        is_infinite_weight(&self.coeffs)
    }

    /// Returns this point displaced by the affine vector `delta`.
    ///
    /// Equivalent to adding the unit-weight point `(dx, dy, 1)`.
    #[must_use]
    pub fn translate(&self, delta: &Vector2) -> Self {
        *self + Self::from_xy(delta.x, delta.y)
    }
}

impl Add for ProjPoint {
    type Output = Self;

    /// Weighted affine sum: `(a₁c₂ + a₂c₁, b₁c₂ + b₂c₁, c₁c₂)`.
    fn add(self, other: Self) -> Self {
        Self::from_coeffs(Vector3::new(
            self.a() * other.c() + other.a() * self.c(),
            self.b() * other.c() + other.b() * self.c(),
            self.c() * other.c(),
        ))
    }
}

impl Sub for ProjPoint {
    type Output = Self;

    /// Weighted affine difference: `(a₁c₂ - a₂c₁, b₁c₂ - b₂c₁, c₁c₂)`.
    fn sub(self, other: Self) -> Self {
        Self::from_coeffs(Vector3::new(
            self.a() * other.c() - other.a() * self.c(),
            self.b() * other.c() - other.b() * self.c(),
            self.c() * other.c(),
        ))
    }
}

impl LocalFrame for ProjPoint {
    fn center(&self) -> Result<Point2> {
        if self.is_at_infinity() {
            return Err(GeometryError::PointAtInfinity.into());
        }
        Ok(Point2::new(self.a() / self.c(), self.b() / self.c()))
    }

    /// For a point at the origin the normal falls back to the x axis.
    fn normal(&self) -> Vector2 {
        Vector2::new(self.a(), self.b())
            .try_normalize(TOLERANCE)
            .unwrap_or_else(Vector2::x)
    }

    fn direction(&self) -> Vector2 {
        let n = self.normal();
        Vector2::new(-n.y, n.x)
    }

    fn sum_square(&self) -> f64 {
        self.a() * self.a() + self.b() * self.b()
    }

    /// Infinite for a point at infinity.
    fn distance_to_origin(&self) -> f64 {
        self.magnitude() / self.c()
    }

    fn local_point(&self, away: f64, along: f64) -> ProjPoint {
        let (a, b, c) = (self.a(), self.b(), self.c());
        let m = self.magnitude();

        // r + n*u + e*v, scaled by m so the weight stays proportional to c.
        if m <= TOLERANCE * c.abs() {
            return Self::from_coeffs(Vector3::new(a + c * away, b + c * along, c));
        }
        Self::from_coeffs(Vector3::new(
            m * a + c * (a * away - b * along),
            m * b + c * (b * away + a * along),
            m * c,
        ))
    }
}

impl Selectable for ProjPoint {
    fn hit(&self, point: &Point2, width: f64) -> bool {
        match self.center() {
            Ok(center) => nalgebra::distance(point, &center) <= width / 2.0,
            Err(_) => false,
        }
    }
}
