use super::core::{Axis, BBox, Point3, Tolerance, Vec3};

/// A parametric curve over a closed parameter domain.
pub trait Curve3 {
    fn point_at(&self, t: f64) -> Point3;

    fn derivative_at(&self, t: f64) -> Vec3;

    fn second_derivative_at(&self, t: f64) -> Vec3;

    #[must_use]
    fn domain(&self) -> (f64, f64) {
        (0.0, 1.0)
    }

    #[must_use]
    fn is_closed(&self) -> bool {
        false
    }

    /// Full 3D curvature `|d1 x d2| / |d1|^3`.
    #[must_use]
    fn curvature_at(&self, t: f64) -> Option<f64> {
        let d1 = self.derivative_at(t);
        let d2 = self.second_derivative_at(t);
        let denom = d1.length();
        if denom <= 0.0 || !denom.is_finite() {
            return None;
        }
        let k = d1.cross(d2).length() / (denom * denom * denom);
        if k.is_finite() { Some(k) } else { None }
    }

    /// Returns the unit tangent vector at parameter `t`.
    /// Returns `None` if the derivative is zero or degenerate.
    #[must_use]
    fn tangent_at(&self, t: f64) -> Option<Vec3> {
        self.derivative_at(t).normalized()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Cubic Bezier
// ─────────────────────────────────────────────────────────────────────────────

/// Cubic Bezier segment: start, start's outgoing handle, end's incoming handle, end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier3 {
    pub p0: Point3,
    pub p1: Point3,
    pub p2: Point3,
    pub p3: Point3,
}

/// Intermediate points of the de Casteljau construction at one parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeCasteljau {
    /// Lerps along the control polygon: `p0-p1`, `p1-p2`, `p2-p3`.
    pub first: [Point3; 3],
    /// Lerps between consecutive `first` points.
    pub second: [Point3; 2],
    /// The curve point.
    pub point: Point3,
}

impl DeCasteljau {
    /// Applies `map` to every stage point.
    #[must_use]
    pub fn map<F>(self, map: F) -> Self
    where
        F: Fn(Point3) -> Point3,
    {
        Self {
            first: self.first.map(&map),
            second: self.second.map(&map),
            point: map(self.point),
        }
    }
}

impl CubicBezier3 {
    #[must_use]
    pub const fn new(p0: Point3, p1: Point3, p2: Point3, p3: Point3) -> Self {
        Self { p0, p1, p2, p3 }
    }

    /// Parameters where the derivative along `axis` vanishes inside `[0, 1]`.
    #[must_use]
    pub fn derivative_roots(&self, axis: Axis) -> (f64, f64) {
        derivative_roots(
            self.p0.component(axis),
            self.p1.component(axis),
            self.p2.component(axis),
            self.p3.component(axis),
        )
    }

    /// Exact axis-aligned bounds, found from the analytic extrema of each axis.
    #[must_use]
    pub fn bounding_box(&self) -> BBox {
        let mut params = vec![0.0, 1.0];
        for axis in Axis::ALL {
            let (r1, r2) = self.derivative_roots(axis);
            params.extend([r1, r2].into_iter().filter(|t| !t.is_nan()));
        }

        let candidates = params.into_iter().map(|t| self.point_at(t));
        BBox::from_points(candidates).unwrap_or(BBox::new(self.p0, self.p3))
    }

    /// Signed curvature of the XY projection:
    /// `(vx * ay - ax * vy) / (vx^2 + vy^2)^1.5`.
    ///
    /// Z is ignored. Returns NaN when the numerator is exactly zero, which
    /// covers straight segments and degenerate points.
    #[must_use]
    pub fn planar_curvature_at(&self, t: f64) -> f64 {
        let d = self.derivative_at(t);
        let dd = self.second_derivative_at(t);
        let numerator = d.x * dd.y - dd.x * d.y;
        if numerator == 0.0 {
            return f64::NAN;
        }
        numerator / (d.x * d.x + d.y * d.y).powf(1.5)
    }

    #[must_use]
    pub fn de_casteljau(&self, t: f64) -> DeCasteljau {
        let t = t.clamp(0.0, 1.0);
        let a = self.p0.lerp(self.p1, t);
        let b = self.p1.lerp(self.p2, t);
        let c = self.p2.lerp(self.p3, t);
        let d = a.lerp(b, t);
        let e = b.lerp(c, t);
        DeCasteljau {
            first: [a, b, c],
            second: [d, e],
            point: d.lerp(e, t),
        }
    }
}

impl Curve3 for CubicBezier3 {
    fn point_at(&self, t: f64) -> Point3 {
        let t = t.clamp(0.0, 1.0);
        let u = 1.0 - t;
        let u2 = u * u;
        let t2 = t * t;
        let v = self.p0.to_vec3() * (u2 * u)
            + self.p1.to_vec3() * (3.0 * u2 * t)
            + self.p2.to_vec3() * (3.0 * u * t2)
            + self.p3.to_vec3() * (t2 * t);
        v.into()
    }

    fn derivative_at(&self, t: f64) -> Vec3 {
        let t = t.clamp(0.0, 1.0);
        let t2 = t * t;
        self.p0.to_vec3() * (-3.0 * t2 + 6.0 * t - 3.0)
            + self.p1.to_vec3() * (9.0 * t2 - 12.0 * t + 3.0)
            + self.p2.to_vec3() * (-9.0 * t2 + 6.0 * t)
            + self.p3.to_vec3() * (3.0 * t2)
    }

    fn second_derivative_at(&self, t: f64) -> Vec3 {
        let t = t.clamp(0.0, 1.0);
        self.p0.to_vec3() * (-6.0 * t + 6.0)
            + self.p1.to_vec3() * (18.0 * t - 12.0)
            + self.p2.to_vec3() * (-18.0 * t + 6.0)
            + self.p3.to_vec3() * (6.0 * t)
    }
}

/// Roots of the first derivative of a scalar cubic Bezier with control
/// values `c0..c3`.
///
/// Solves `a t^2 + b t + c = 0` with the derivative's Bernstein-expanded
/// coefficients. A negative discriminant yields `(NaN, NaN)`; each root
/// outside `[0, 1]` is replaced by NaN. The root pair is computed as
/// `q / a` and `c / q`, which degrades to the linear root `-c / b` when `a`
/// vanishes instead of dividing by zero.
#[must_use]
pub fn derivative_roots(c0: f64, c1: f64, c2: f64, c3: f64) -> (f64, f64) {
    let a = -3.0 * c0 + 9.0 * c1 - 9.0 * c2 + 3.0 * c3;
    let b = 6.0 * c0 - 12.0 * c1 + 6.0 * c2;
    let c = -3.0 * c0 + 3.0 * c1;

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return (f64::NAN, f64::NAN);
    }

    let q = -0.5 * (b + b.signum() * discriminant.sqrt());
    let first = if Tolerance::ZERO_LENGTH.approx_zero_f64(a) { f64::NAN } else { q / a };
    let second = c / q;

    (in_bezier_range(first), in_bezier_range(second))
}

fn in_bezier_range(t: f64) -> f64 {
    if (0.0..=1.0).contains(&t) { t } else { f64::NAN }
}

// ─────────────────────────────────────────────────────────────────────────────
// Sampling
// ─────────────────────────────────────────────────────────────────────────────

/// Result of sampling a curve at a parameter.
#[derive(Debug, Clone, Copy)]
pub struct CurveSample {
    pub point: Point3,
    /// Unit tangent, or zero where the derivative vanishes.
    pub tangent: Vec3,
    pub parameter: f64,
}

/// Samples a curve at `t`, clamped to the curve domain.
#[must_use]
pub fn sample_curve_at<C: Curve3>(curve: &C, t: f64) -> CurveSample {
    let (t0, t1) = curve.domain();
    let param = t.clamp(t0, t1);
    CurveSample {
        point: curve.point_at(param),
        tangent: curve.tangent_at(param).unwrap_or(Vec3::ZERO),
        parameter: param,
    }
}

/// Polyline length through `samples + 1` evenly spaced parameters.
#[must_use]
pub fn curve_arc_length<C: Curve3>(curve: &C, samples: usize) -> f64 {
    let samples = samples.max(1);
    let (t0, t1) = curve.domain();
    let span = t1 - t0;
    if !span.is_finite() || span == 0.0 {
        return 0.0;
    }

    let mut length = 0.0;
    let mut prev = curve.point_at(t0);
    for i in 1..=samples {
        let t = t0 + span * (i as f64 / samples as f64);
        let curr = curve.point_at(t);
        length += curr.distance_to(prev);
        prev = curr;
    }
    length
}
