use thiserror::Error;

pub type SplineResult<T> = Result<T, SplineError>;

/// Errors raised by spline construction, mutation and editing.
///
/// Numeric degeneracies during evaluation (zero velocity, parallel frame
/// vectors, negative discriminants) are not errors; they surface as NaN.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SplineError {
    /// Positional queries need at least two vertices.
    #[error("spline requires at least 2 vertices, found {vertex_count}")]
    MalformedSpline { vertex_count: usize },
    #[error("vertex index {index} is out of range for {len} vertices")]
    VertexIndexOutOfRange { index: usize, len: usize },
    /// The host transform cannot be inverted, so world positions cannot be
    /// mapped back into spline space.
    #[error("host transform is singular")]
    SingularTransform,
}
