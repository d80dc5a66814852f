//! Construction errors

/// Errors that abort building a rigged object
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BuildError {
    /// Polygon has fewer than three points
    #[error("polygon needs at least 3 points, got {0}")]
    TooFewPoints(usize),

    /// Thickness is zero, negative or not finite
    #[error("thickness must be a positive finite number, got {0}")]
    InvalidThickness(f32),

    /// Two rings handed to the stitcher differ in cardinality
    #[error("cannot stitch rings of different length ({left} vs {right})")]
    RingLengthMismatch { left: usize, right: usize },

    /// Triangulation returned an index outside the polygon
    #[error("triangulation produced index {index} for a polygon of {len} points")]
    TriangulationFailed { index: usize, len: usize },

    /// Joint index does not fit the u8 joint attribute
    #[error("joint index {0} does not fit a u8 joint attribute")]
    JointIndexOverflow(usize),

    /// Vertex buffer outgrew the u32 index range
    #[error("vertex count {0} does not fit a u32 index buffer")]
    IndexOverflow(usize),
}

pub type BuildResult<T> = Result<T, BuildError>;
