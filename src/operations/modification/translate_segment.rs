use tracing::debug;

use crate::error::{OperationError, Result};
use crate::geometry::{LineSeg, SegmentChain};
use crate::math::Vector2;

/// Drags one segment of a chain while keeping its neighbors attached.
///
/// The host drives the drag explicitly: [`TranslateSegment::begin`] on
/// pointer-down captures the segment, [`TranslateSegment::apply`] on every
/// pointer-move moves it by the total displacement since capture, and
/// [`TranslateSegment::end`] on pointer-up releases it. No other drag state
/// exists.
///
/// Applying replaces three segments:
/// - previous neighbor: its own start to the moved start
/// - the captured segment: translated by the displacement
/// - next neighbor: the moved end to its own end
///
/// Open chains have no neighbor beyond their free ends. In a closed chain of
/// two segments both neighbors are the same segment, which becomes the moved
/// segment reversed.
#[derive(Debug, Clone)]
pub struct TranslateSegment {
    index: usize,
    captured: LineSeg,
}

impl TranslateSegment {
    /// Captures segment `index` of `chain`.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::IndexOutOfRange` if `index >= chain.len()`,
    /// which includes every index of an empty chain.
    pub fn begin(chain: &SegmentChain, index: usize) -> Result<Self> {
        let captured = *chain
            .segment(index)
            .ok_or(OperationError::IndexOutOfRange {
                index,
                len: chain.len(),
            })?;
        debug!(index, "captured segment for translation");
        Ok(Self { index, captured })
    }

    /// Returns the index of the captured segment.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the segment as it was when captured.
    #[must_use]
    pub fn captured(&self) -> &LineSeg {
        &self.captured
    }

    /// Moves the captured segment by `delta` from its captured position and
    /// reattaches its neighbors.
    ///
    /// All replacements are computed before any is written, so on error the
    /// chain is unchanged.
    ///
    /// # Errors
    ///
    /// - `OperationError::IndexOutOfRange` if the chain no longer has the
    ///   captured index
    /// - `OperationError::InvalidInput` if `delta` is not finite
    /// - `GeometryError::DegenerateLine` if a neighbor would collapse to a
    ///   point
    pub fn apply(&self, chain: &mut SegmentChain, delta: &Vector2) -> Result<()> {
        let len = chain.len();
        if self.index >= len {
            return Err(OperationError::IndexOutOfRange {
                index: self.index,
                len,
            }
            .into());
        }
        if !(delta.x.is_finite() && delta.y.is_finite()) {
            return Err(OperationError::InvalidInput(format!(
                "translation must be finite, got ({}, {})",
                delta.x, delta.y
            ))
            .into());
        }

        let moved = LineSeg::from_proj_points(
            &self.captured.start_point().translate(delta),
            &self.captured.end_point().translate(delta),
        )?;
        let segments = chain.segments();

        let mut replacements = Vec::with_capacity(3);
        match (chain.prev_index(self.index), chain.next_index(self.index)) {
            (Some(j), Some(k)) if j == k => {
                let seg = LineSeg::from_proj_points(&moved.end_point(), &moved.start_point())?;
                replacements.push((j, seg));
            }
            (prev, next) => {
                if let Some(j) = prev {
                    let seg =
                        LineSeg::from_proj_points(&segments[j].start_point(), &moved.start_point())?;
                    replacements.push((j, seg));
                }
                if let Some(k) = next {
                    let seg =
                        LineSeg::from_proj_points(&moved.end_point(), &segments[k].end_point())?;
                    replacements.push((k, seg));
                }
            }
        }
        replacements.push((self.index, moved));

        for (i, seg) in replacements {
            chain.replace(i, seg)?;
        }
        debug!(index = self.index, dx = delta.x, dy = delta.y, "translated segment");
        Ok(())
    }

    /// Releases the captured segment, returning its index.
    #[must_use]
    pub fn end(self) -> usize {
        debug!(index = self.index, "released segment");
        self.index
    }
}
