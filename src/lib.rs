pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;

pub use error::{MitreError, Result};
pub use geometry::{LineSeg, LocalFrame, ProjLine, ProjPoint, Selectable, SegmentChain};
