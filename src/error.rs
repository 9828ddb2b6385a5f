use thiserror::Error;

/// Top-level error type for the mitre geometry kernel.
#[derive(Debug, Error)]
pub enum MitreError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate line: direction coefficients ({a}, {b}) have zero length")]
    DegenerateLine { a: f64, b: f64 },

    #[error("point at infinity has no affine coordinates")]
    PointAtInfinity,

    #[error("non-finite value for {0}")]
    NonFinite(&'static str),

    #[error("all homogeneous coordinates are zero")]
    ZeroPoint,
}

/// Errors related to chain operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("segment index {index} is out of range for a chain of {len} segments")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("segment {index} is parallel to neighbor {neighbor}; miter join is undefined")]
    ParallelNeighbors { index: usize, neighbor: usize },

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience type alias for results using [`MitreError`].
pub type Result<T> = std::result::Result<T, MitreError>;
