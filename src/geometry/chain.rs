use crate::error::{OperationError, Result};
use crate::math::Point2;
use crate::operations::modification::TranslateSegment;
use crate::operations::offset::ChainOffset2D;
use crate::operations::query::HitTest;

use super::{LineSeg, LocalFrame};

/// An ordered chain of [`LineSeg`]s forming an open or closed polyline.
///
/// For a closed chain the end of segment `i` coincides with the start of
/// segment `(i + 1) % N`. Segments are values; the chain replaces them
/// wholesale and never mutates one in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SegmentChain {
    segments: Vec<LineSeg>,
    closed: bool,
}

impl SegmentChain {
    /// Creates a chain through `points`, adding a closing segment back to
    /// the first point when `closed` is set.
    ///
    /// Fewer than two points yield an empty chain.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DegenerateLine` if two consecutive points
    /// (including last and first of a closed chain) coincide.
    pub fn from_points(points: &[Point2], closed: bool) -> Result<Self> {
        if points.len() < 2 {
            return Ok(Self {
                segments: Vec::new(),
                closed,
            });
        }

        let mut segments = Vec::with_capacity(points.len());
        for pair in points.windows(2) {
            segments.push(LineSeg::from_points(&pair[0], &pair[1])?);
        }
        if closed {
            segments.push(LineSeg::from_points(&points[points.len() - 1], &points[0])?);
        }
        Ok(Self { segments, closed })
    }

    /// Creates a chain from pre-built segments.
    #[must_use]
    pub fn from_segments(segments: Vec<LineSeg>, closed: bool) -> Self {
        Self { segments, closed }
    }

    #[must_use]
    pub fn segments(&self) -> &[LineSeg] {
        &self.segments
    }

    #[must_use]
    pub fn segment(&self, index: usize) -> Option<&LineSeg> {
        self.segments.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Replaces the segment at `index`, returning the previous one.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::IndexOutOfRange` if `index >= len()`.
    pub fn replace(&mut self, index: usize, segment: LineSeg) -> Result<LineSeg> {
        let len = self.segments.len();
        let slot = self
            .segments
            .get_mut(index)
            .ok_or(OperationError::IndexOutOfRange { index, len })?;
        Ok(std::mem::replace(slot, segment))
    }

    /// Index of the segment before `index`.
    ///
    /// `None` at the free start of an open chain, or when the only
    /// candidate is `index` itself.
    #[must_use]
    pub fn prev_index(&self, index: usize) -> Option<usize> {
        let n = self.segments.len();
        if n < 2 || index >= n || (!self.closed && index == 0) {
            return None;
        }
        Some((index + n - 1) % n)
    }

    /// Index of the segment after `index`.
    ///
    /// `None` at the free end of an open chain, or when the only candidate
    /// is `index` itself.
    #[must_use]
    pub fn next_index(&self, index: usize) -> Option<usize> {
        let n = self.segments.len();
        if n < 2 || index >= n || (!self.closed && index == n - 1) {
            return None;
        }
        Some((index + 1) % n)
    }

    /// Returns the affine start point of every segment, followed by the end
    /// point of the last segment for an open chain.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::PointAtInfinity` if an endpoint is not finite.
    pub fn vertices(&self) -> Result<Vec<Point2>> {
        let mut vertices = Vec::with_capacity(self.segments.len() + 1);
        for seg in &self.segments {
            vertices.push(seg.start_point().center()?);
        }
        if !self.closed {
            if let Some(last) = self.segments.last() {
                vertices.push(last.end_point().center()?);
            }
        }
        Ok(vertices)
    }

    /// Returns the mitered parallel chain at signed distance `distance`.
    ///
    /// # Errors
    ///
    /// See [`ChainOffset2D::execute`].
    pub fn offset(&self, distance: f64) -> Result<Self> {
        ChainOffset2D::new(distance).execute(self)
    }

    /// Returns the index of the first segment within `width / 2` of `point`.
    ///
    /// # Errors
    ///
    /// See [`HitTest::execute`].
    pub fn hit_test(&self, point: &Point2, width: f64) -> Result<Option<usize>> {
        HitTest::new(*point, width).execute(self)
    }

    /// Captures segment `index` for interactive translation.
    ///
    /// # Errors
    ///
    /// See [`TranslateSegment::begin`].
    pub fn begin_translate(&self, index: usize) -> Result<TranslateSegment> {
        TranslateSegment::begin(self, index)
    }
}
