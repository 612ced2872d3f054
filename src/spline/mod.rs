//! Composite cubic Bezier spline: vertices, segment resolution and the
//! evaluator that answers positional, orientation, bounding-box and
//! length queries over a normalized parameter `t` in `[0, 1]`.

mod error;
mod evaluator;
mod length;
mod orientation;
mod segment;
mod space;
#[allow(clippy::module_inception)]
mod spline;
mod vertex;

pub use error::{SplineError, SplineResult};
pub use evaluator::SplineEvaluator;
pub use length::{DEFAULT_LENGTH_STEPS, LengthOptions};
pub use orientation::{CurvatureCircle, OrientedPoint, SamplingOptions};
pub use segment::{SegmentRef, SegmentResolver, clamp_parameter};
pub use space::SplineSpace;
pub use spline::{NormalMode, Spline};
pub use vertex::{HandleSide, LockMode, Vertex};

#[cfg(test)]
mod tests;
