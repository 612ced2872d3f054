use serde::{Deserialize, Serialize};

use crate::geom::{Point3, Quaternion, Vec3};

use super::evaluator::SplineEvaluator;
use super::space::SplineSpace;
use super::spline::NormalMode;

/// A position paired with a frame: `+Z` forward, `+Y` up.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrientedPoint {
    pub position: Point3,
    pub rotation: Quaternion,
}

impl OrientedPoint {
    #[must_use]
    pub const fn new(position: Point3, rotation: Quaternion) -> Self {
        Self { position, rotation }
    }

    /// Frame looking along `forward` with `+Y` as the up reference.
    #[must_use]
    pub fn from_forward(position: Point3, forward: Vec3) -> Self {
        Self::new(position, Quaternion::look_rotation(forward, Vec3::Y))
    }

    /// Maps an offset expressed in this frame to a world position.
    #[must_use]
    pub fn local_to_world(&self, offset: Vec3) -> Point3 {
        self.position + self.rotation.mul_vec(offset)
    }

    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.rotation.forward()
    }

    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.rotation.up()
    }

    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.rotation.right()
    }
}

/// Osculating circle at one parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurvatureCircle {
    pub center: Point3,
    /// `1 / curvature`, signed like the planar curvature.
    pub radius: f64,
    /// Normal of the plane the circle lies in.
    pub plane_normal: Vec3,
}

/// Density of frame and point sampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplingOptions {
    /// Samples per segment; at least one is always taken.
    pub steps_per_curve: usize,
}

impl Default for SamplingOptions {
    fn default() -> Self {
        Self { steps_per_curve: 30 }
    }
}

impl<S: SplineSpace> SplineEvaluator<'_, S> {
    /// Unit velocity. NaN where the velocity vanishes.
    #[must_use]
    pub fn direction(&self, t: f64) -> Vec3 {
        self.velocity(t).normalize_or_nan()
    }

    #[must_use]
    pub fn tangent(&self, t: f64) -> Vec3 {
        self.direction(t)
    }

    /// Frame normal at `t`, built according to [`Spline::normal_mode`].
    ///
    /// In acceleration mode the result is NaN where the acceleration is
    /// parallel to the direction (straight stretches, inflections). In
    /// interpolated-up mode `up_hint` replaces a zero-length interpolated up
    /// vector; without a hint `+Y` is used.
    ///
    /// [`Spline::normal_mode`]: super::Spline::normal_mode
    #[must_use]
    pub fn normal(&self, t: f64, up_hint: Option<Vec3>) -> Vec3 {
        let dir = self.direction(t);
        let normal = match self.spline().normal_mode() {
            NormalMode::Planar => Vec3::new(-dir.y, dir.x, 0.0),
            NormalMode::Acceleration => {
                let binormal = (dir + self.acceleration(t)).normalize_or_nan();
                let right = dir.cross(binormal).normalize_or_nan();
                right.cross(dir).normalize_or_nan()
            }
            NormalMode::InterpolatedUp => {
                let up = self.interpolated_up(t).unwrap_or_else(|| up_hint.unwrap_or(Vec3::Y));
                let binormal = dir.cross(up).normalize_or_nan();
                binormal.cross(dir).normalize_or_nan()
            }
        };
        if normal.is_nan() {
            log::debug!("degenerate frame normal at t = {t}");
        }
        normal
    }

    /// Up vectors of the bracketing vertices, blended by the local parameter
    /// and placed in world space. `None` when the blend cancels out.
    fn interpolated_up(&self, t: f64) -> Option<Vec3> {
        let segment = self.resolve(t);
        let (a, b) = self.vertices_of(&segment);
        let up = a.up().lerp(b.up(), segment.local_t);
        self.space().vector_to_world(up).normalized()
    }

    /// Rotation with forward along [`Self::direction`] and up along
    /// [`Self::normal`].
    #[must_use]
    pub fn orientation(&self, t: f64, up_hint: Option<Vec3>) -> Quaternion {
        Quaternion::look_rotation(self.direction(t), self.normal(t, up_hint))
    }

    #[must_use]
    pub fn oriented_point(&self, t: f64) -> OrientedPoint {
        OrientedPoint::new(self.point(t), self.orientation(t, None))
    }

    /// Frames at evenly spaced parameters covering the whole spline.
    #[must_use]
    pub fn oriented_points(&self, options: SamplingOptions) -> Vec<OrientedPoint> {
        self.resolver()
            .sample_parameters(options.steps_per_curve)
            .map(|t| self.oriented_point(t))
            .collect()
    }

    /// Osculating circle from the planar curvature. NaN curvature yields a
    /// NaN radius and center.
    #[must_use]
    pub fn curvature_circle(&self, t: f64) -> CurvatureCircle {
        let dir = self.direction(t);
        let normal = self.normal(t, None);
        let radius = 1.0 / self.curvature(t);
        CurvatureCircle {
            center: self.point(t) + normal * radius,
            radius,
            plane_normal: normal.cross(dir).normalize_or_nan(),
        }
    }
}
