#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! Evaluation engine for composite cubic Bezier splines.
//!
//! A [`Spline`] is an ordered list of [`Vertex`] records. Borrowing it through
//! [`Spline::evaluator`] (or [`Spline::evaluator_in`] for a host placement)
//! yields a [`SplineEvaluator`] answering point, derivative, curvature,
//! orientation, bounding-box and length queries over `t` in `[0, 1]`.
//!
//! The engine keeps no caches: every query recomputes from the current
//! vertices. Evaluators only borrow the spline, so concurrent read-only
//! queries are safe and mutation waits until they are dropped.

pub mod geom;
pub mod spline;

pub use geom::{BBox, Point3, Quaternion, Tolerance, Transform, Vec3};
pub use spline::{
    CurvatureCircle, HandleSide, LengthOptions, LockMode, NormalMode, OrientedPoint,
    SamplingOptions, Spline, SplineError, SplineEvaluator, SplineResult, SplineSpace, Vertex,
};
