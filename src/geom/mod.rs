//! Numeric kernel: vectors, rotations, transforms, bounding boxes and the
//! closed-form cubic Bezier primitives the spline is built from.

mod core;
mod curve;

pub use core::{Axis, BBox, Point3, Quaternion, Tolerance, Transform, Vec3};
pub use curve::{
    CubicBezier3, Curve3, CurveSample, DeCasteljau, curve_arc_length, derivative_roots,
    sample_curve_at,
};

#[cfg(test)]
mod tests;
