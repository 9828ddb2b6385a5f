use tracing::{debug, trace, warn};

use crate::error::{OperationError, Result};
use crate::geometry::{LineSeg, ProjLine, ProjPoint, SegmentChain};
use crate::math::TOLERANCE;

/// Offsets every segment of a chain by a signed distance with miter joins.
///
/// # Algorithm
///
/// 1. Offset the line of each segment independently.
/// 2. Trim each offset line between its intersections with the offset lines
///    of its previous and next neighbors.
///
/// Closed chains wrap cyclically. On an open chain the free start of the
/// first segment and the free end of the last keep their tangential
/// coordinates, giving square ends.
///
/// # Sign Convention
///
/// - Positive distance: right of the walking direction (outward for a
///   counter-clockwise polygon)
/// - Negative distance: left of the walking direction
///
/// Concave corners may self-intersect once `|distance|` exceeds the local
/// inscribed radius; this is not detected.
#[derive(Debug, Clone, Copy)]
pub struct ChainOffset2D {
    distance: f64,
    tolerance: f64,
}

impl ChainOffset2D {
    /// Creates a new chain offset operation.
    #[must_use]
    pub fn new(distance: f64) -> Self {
        Self {
            distance,
            tolerance: TOLERANCE,
        }
    }

    /// Sets the threshold on `|sin θ|` between neighbor lines below which
    /// they are treated as parallel.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Executes the offset, returning a new chain with one segment per input
    /// segment in the same order.
    ///
    /// # Errors
    ///
    /// - `OperationError::InvalidInput` if the distance is not finite
    /// - `OperationError::ParallelNeighbors` if a segment's offset line does
    ///   not meet a neighbor's offset line
    pub fn execute(&self, chain: &SegmentChain) -> Result<SegmentChain> {
        if !self.distance.is_finite() {
            return Err(OperationError::InvalidInput(format!(
                "offset distance must be finite, got {}",
                self.distance
            ))
            .into());
        }

        let n = chain.len();
        debug!(
            segments = n,
            distance = self.distance,
            closed = chain.is_closed(),
            "offsetting chain"
        );

        let lines: Vec<ProjLine> = chain
            .segments()
            .iter()
            .map(|seg| seg.line().offset(self.distance))
            .collect();

        let mut result = Vec::with_capacity(n);
        for (i, seg) in chain.segments().iter().enumerate() {
            let x1 = match chain.prev_index(i) {
                Some(j) => lines[i].distance_along_projective(&self.corner(&lines, i, j)?)?,
                None => seg.start_distance(),
            };
            let x2 = match chain.next_index(i) {
                Some(k) => lines[i].distance_along_projective(&self.corner(&lines, i, k)?)?,
                None => seg.end_distance(),
            };
            let trimmed = LineSeg::new(lines[i], x1, x2);
            result.push(trimmed);
        }

        debug!(segments = result.len(), "offset complete");
        Ok(SegmentChain::from_segments(result, chain.is_closed()))
    }

    /// Intersects offset line `i` with its neighbor `j`.
    fn corner(&self, lines: &[ProjLine], i: usize, j: usize) -> Result<ProjPoint> {
        let corner = lines[i].intersect(&lines[j]);
        // Unit normals: the weight is sin of the angle between the lines.
        if corner.c().abs() <= self.tolerance {
            warn!(index = i, neighbor = j, "parallel neighbor lines, miter undefined");
            return Err(OperationError::ParallelNeighbors {
                index: i,
                neighbor: j,
            }
            .into());
        }
        trace!(index = i, neighbor = j, w = corner.c(), "miter corner");
        Ok(corner)
    }
}
