use std::ops::{Add, Div, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Axis
// ─────────────────────────────────────────────────────────────────────────────

/// One of the three cartesian axes, used for per-axis scalar work such as
/// derivative root finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Self; 3] = [Self::X, Self::Y, Self::Z];
}

// ─────────────────────────────────────────────────────────────────────────────
// Vec3
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    /// Zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    /// Unit vector along the X axis.
    pub const X: Self = Self::new(1.0, 0.0, 0.0);
    /// Unit vector along the Y axis. This is the canonical "up".
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);
    /// Unit vector along the Z axis. This is the canonical "forward".
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[must_use]
    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    #[must_use]
    pub const fn component(self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    #[must_use]
    pub fn length(self) -> f64 {
        self.dot(self).sqrt()
    }

    #[must_use]
    pub const fn length_squared(self) -> f64 {
        self.dot(self)
    }

    #[must_use]
    pub const fn dot(self, rhs: Self) -> f64 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    #[must_use]
    pub const fn cross(self, rhs: Self) -> Self {
        Self {
            x: self.y * rhs.z - self.z * rhs.y,
            y: self.z * rhs.x - self.x * rhs.z,
            z: self.x * rhs.y - self.y * rhs.x,
        }
    }

    /// Unit vector in the same direction, or `None` for zero/non-finite input.
    #[must_use]
    pub fn normalized(self) -> Option<Self> {
        let len = self.length();
        if len.is_finite() && len > 0.0 {
            Some(self / len)
        } else {
            None
        }
    }

    /// Divides by the length unconditionally.
    ///
    /// A zero vector yields NaN components; callers that need a guard use
    /// [`Vec3::normalized`] instead.
    #[must_use]
    pub fn normalize_or_nan(self) -> Self {
        self / self.length()
    }

    #[must_use]
    pub fn is_nan(self) -> bool {
        self.x.is_nan() || self.y.is_nan() || self.z.is_nan()
    }

    /// Linear interpolation, `self * (1 - t) + rhs * t`. `t` is not clamped.
    #[must_use]
    pub fn lerp(self, rhs: Self, t: f64) -> Self {
        Self::new(
            self.x + (rhs.x - self.x) * t,
            self.y + (rhs.y - self.y) * t,
            self.z + (rhs.z - self.z) * t,
        )
    }

    #[must_use]
    pub const fn mul_scalar(self, s: f64) -> Self {
        Self::new(self.x * s, self.y * s, self.z * s)
    }
}

impl Default for Vec3 {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<[f64; 3]> for Vec3 {
    fn from(arr: [f64; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }
}

impl Add for Vec3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self::Output {
        self.mul_scalar(rhs)
    }
}

impl Mul<Vec3> for f64 {
    type Output = Vec3;
    fn mul(self, rhs: Vec3) -> Self::Output {
        rhs.mul_scalar(self)
    }
}

impl Div<f64> for Vec3 {
    type Output = Self;
    fn div(self, rhs: f64) -> Self::Output {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl Neg for Vec3 {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y, -self.z)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Point3
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    /// The origin point (0, 0, 0).
    pub const ORIGIN: Self = Self::new(0.0, 0.0, 0.0);

    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[must_use]
    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Position vector from the origin.
    #[must_use]
    pub const fn to_vec3(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    #[must_use]
    pub const fn component(self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    #[must_use]
    pub const fn add_vec(self, v: Vec3) -> Self {
        Self::new(self.x + v.x, self.y + v.y, self.z + v.z)
    }

    #[must_use]
    pub const fn sub_point(self, rhs: Self) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }

    #[must_use]
    pub fn lerp(self, rhs: Self, t: f64) -> Self {
        Self::new(
            self.x + (rhs.x - self.x) * t,
            self.y + (rhs.y - self.y) * t,
            self.z + (rhs.z - self.z) * t,
        )
    }

    #[must_use]
    pub fn distance_to(self, other: Self) -> f64 {
        self.sub_point(other).length()
    }
}

impl Default for Point3 {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl From<[f64; 3]> for Point3 {
    fn from(arr: [f64; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }
}

impl From<Vec3> for Point3 {
    fn from(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl Add<Vec3> for Point3 {
    type Output = Self;
    fn add(self, rhs: Vec3) -> Self::Output {
        self.add_vec(rhs)
    }
}

impl Sub<Vec3> for Point3 {
    type Output = Self;
    fn sub(self, rhs: Vec3) -> Self::Output {
        self.add_vec(-rhs)
    }
}

impl Sub for Point3 {
    type Output = Vec3;
    fn sub(self, rhs: Self) -> Self::Output {
        self.sub_point(rhs)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Quaternion
// ─────────────────────────────────────────────────────────────────────────────

/// Unit rotation quaternion.
///
/// Conventions follow a left-handed "look" frame: the local `+Z` axis is
/// forward and the local `+Y` axis is up.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quaternion {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl Quaternion {
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }

    /// Rotation of `angle` radians around `axis`. Returns `None` for a zero axis.
    #[must_use]
    pub fn from_axis_angle(axis: Vec3, angle: f64) -> Option<Self> {
        let axis = axis.normalized()?;
        let (s, c) = (angle * 0.5).sin_cos();
        Some(Self::new(axis.x * s, axis.y * s, axis.z * s, c))
    }

    /// Shortest rotation taking direction `from` onto direction `to`.
    ///
    /// Antiparallel inputs rotate half a turn around any axis perpendicular
    /// to `from`. Returns `None` when either input has zero length.
    #[must_use]
    pub fn from_to(from: Vec3, to: Vec3) -> Option<Self> {
        let from = from.normalized()?;
        let to = to.normalized()?;
        let d = from.dot(to);

        if d < -1.0 + 1e-12 {
            let mut axis = Vec3::X.cross(from);
            if axis.length_squared() < 1e-12 {
                axis = Vec3::Y.cross(from);
            }
            return Self::from_axis_angle(axis, std::f64::consts::PI);
        }

        let c = from.cross(to);
        Self::new(c.x, c.y, c.z, 1.0 + d).normalized()
    }

    /// Rotation whose forward axis (`+Z`) is `forward` and whose up axis
    /// (`+Y`) is as close to `up` as orthogonality allows.
    ///
    /// No guard is applied: a zero `forward`, or an `up` parallel to it,
    /// yields NaN components so the degeneracy stays visible.
    #[must_use]
    pub fn look_rotation(forward: Vec3, up: Vec3) -> Self {
        let z = forward.normalize_or_nan();
        let x = up.cross(z).normalize_or_nan();
        let y = z.cross(x);
        Self::from_basis(x, y, z)
    }

    /// Builds the rotation from the columns of an orthonormal basis.
    #[must_use]
    pub fn from_basis(x: Vec3, y: Vec3, z: Vec3) -> Self {
        let trace = x.x + y.y + z.z;
        if trace > 0.0 {
            let s = (trace + 1.0).sqrt() * 2.0;
            Self::new((y.z - z.y) / s, (z.x - x.z) / s, (x.y - y.x) / s, 0.25 * s)
        } else if x.x > y.y && x.x > z.z {
            let s = (1.0 + x.x - y.y - z.z).sqrt() * 2.0;
            Self::new(0.25 * s, (y.x + x.y) / s, (z.x + x.z) / s, (y.z - z.y) / s)
        } else if y.y > z.z {
            let s = (1.0 + y.y - x.x - z.z).sqrt() * 2.0;
            Self::new((y.x + x.y) / s, 0.25 * s, (z.y + y.z) / s, (z.x - x.z) / s)
        } else {
            let s = (1.0 + z.z - x.x - y.y).sqrt() * 2.0;
            Self::new((z.x + x.z) / s, (z.y + y.z) / s, 0.25 * s, (x.y - y.x) / s)
        }
    }

    #[must_use]
    pub fn normalized(self) -> Option<Self> {
        let len = (self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w).sqrt();
        if len.is_finite() && len > 0.0 {
            Some(Self::new(self.x / len, self.y / len, self.z / len, self.w / len))
        } else {
            None
        }
    }

    #[must_use]
    pub fn mul_vec(self, v: Vec3) -> Vec3 {
        let qv = Vec3::new(self.x, self.y, self.z);
        let uv = qv.cross(v);
        let uuv = qv.cross(uv);
        v + uv * (2.0 * self.w) + uuv * 2.0
    }

    #[must_use]
    pub fn forward(self) -> Vec3 {
        self.mul_vec(Vec3::Z)
    }

    #[must_use]
    pub fn up(self) -> Vec3 {
        self.mul_vec(Vec3::Y)
    }

    #[must_use]
    pub fn right(self) -> Vec3 {
        self.mul_vec(Vec3::X)
    }

    /// Whether both quaternions describe the same rotation (`q` and `-q`
    /// are equivalent).
    #[must_use]
    pub fn approx_same_rotation(self, other: Self, eps: f64) -> bool {
        let d = self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w;
        (d.abs() - 1.0).abs() <= eps
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Transform
// ─────────────────────────────────────────────────────────────────────────────

/// Affine 4x4 transform in row-major order; points are column vectors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    m: [[f64; 4]; 4],
}

impl Transform {
    #[must_use]
    pub const fn identity() -> Self {
        Self {
            m: [
                [1.0, 0.0, 0.0, 0.0],
                [0.0, 1.0, 0.0, 0.0],
                [0.0, 0.0, 1.0, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    #[must_use]
    pub const fn translate(offset: Vec3) -> Self {
        Self {
            m: [
                [1.0, 0.0, 0.0, offset.x],
                [0.0, 1.0, 0.0, offset.y],
                [0.0, 0.0, 1.0, offset.z],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    #[must_use]
    pub const fn scale(sx: f64, sy: f64, sz: f64) -> Self {
        Self {
            m: [
                [sx, 0.0, 0.0, 0.0],
                [0.0, sy, 0.0, 0.0],
                [0.0, 0.0, sz, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    #[must_use]
    pub fn rotate_z(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self {
            m: [
                [c, -s, 0.0, 0.0],
                [s, c, 0.0, 0.0],
                [0.0, 0.0, 1.0, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    /// `self` applied after `other`.
    #[must_use]
    pub fn compose(self, other: Self) -> Self {
        let mut result = Self::identity();
        for i in 0..4 {
            for j in 0..4 {
                result.m[i][j] = (0..4).map(|k| self.m[i][k] * other.m[k][j]).sum();
            }
        }
        result
    }

    /// Inverse of an affine transform, or `None` when the linear part is singular.
    #[must_use]
    pub fn inverse(self) -> Option<Self> {
        let m = &self.m;
        let c00 = m[1][1] * m[2][2] - m[1][2] * m[2][1];
        let c01 = m[1][2] * m[2][0] - m[1][0] * m[2][2];
        let c02 = m[1][0] * m[2][1] - m[1][1] * m[2][0];
        let det = m[0][0] * c00 + m[0][1] * c01 + m[0][2] * c02;

        if !det.is_finite() || det.abs() < 1e-15 {
            return None;
        }
        let inv_det = 1.0 / det;

        let r = [
            [
                c00 * inv_det,
                (m[0][2] * m[2][1] - m[0][1] * m[2][2]) * inv_det,
                (m[0][1] * m[1][2] - m[0][2] * m[1][1]) * inv_det,
            ],
            [
                c01 * inv_det,
                (m[0][0] * m[2][2] - m[0][2] * m[2][0]) * inv_det,
                (m[0][2] * m[1][0] - m[0][0] * m[1][2]) * inv_det,
            ],
            [
                c02 * inv_det,
                (m[0][1] * m[2][0] - m[0][0] * m[2][1]) * inv_det,
                (m[0][0] * m[1][1] - m[0][1] * m[1][0]) * inv_det,
            ],
        ];

        let t = [m[0][3], m[1][3], m[2][3]];
        let mut out = Self::identity();
        for i in 0..3 {
            out.m[i][..3].copy_from_slice(&r[i]);
            out.m[i][3] = -(r[i][0] * t[0] + r[i][1] * t[1] + r[i][2] * t[2]);
        }
        Some(out)
    }

    #[must_use]
    pub fn apply_point(self, p: Point3) -> Point3 {
        let x = self.m[0][0] * p.x + self.m[0][1] * p.y + self.m[0][2] * p.z + self.m[0][3];
        let y = self.m[1][0] * p.x + self.m[1][1] * p.y + self.m[1][2] * p.z + self.m[1][3];
        let z = self.m[2][0] * p.x + self.m[2][1] * p.y + self.m[2][2] * p.z + self.m[2][3];
        Point3::new(x, y, z)
    }

    /// Applies only the linear part; translation does not affect directions.
    #[must_use]
    pub fn apply_vec(self, v: Vec3) -> Vec3 {
        let x = self.m[0][0] * v.x + self.m[0][1] * v.y + self.m[0][2] * v.z;
        let y = self.m[1][0] * v.x + self.m[1][1] * v.y + self.m[1][2] * v.z;
        let z = self.m[2][0] * v.x + self.m[2][1] * v.y + self.m[2][2] * v.z;
        Vec3::new(x, y, z)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mul for Transform {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        self.compose(rhs)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// BBox
// ─────────────────────────────────────────────────────────────────────────────

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BBox {
    pub min: Point3,
    pub max: Point3,
}

impl BBox {
    #[must_use]
    pub const fn new(min: Point3, max: Point3) -> Self {
        Self { min, max }
    }

    /// Box enclosing all points. NaN coordinates are skipped per axis, so
    /// a candidate that is invalid on one axis does not poison the others.
    #[must_use]
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point3>,
    {
        let mut min = [f64::INFINITY; 3];
        let mut max = [f64::NEG_INFINITY; 3];
        for p in points {
            for (i, axis) in Axis::ALL.into_iter().enumerate() {
                let v = p.component(axis);
                if v.is_nan() {
                    continue;
                }
                min[i] = min[i].min(v);
                max[i] = max[i].max(v);
            }
        }
        if (0..3).any(|i| min[i] > max[i]) {
            return None;
        }
        Some(Self::new(min.into(), max.into()))
    }

    #[must_use]
    pub fn center(self) -> Point3 {
        self.min.lerp(self.max, 0.5)
    }

    #[must_use]
    pub fn size(self) -> Vec3 {
        self.max - self.min
    }

    /// Inclusive containment test.
    #[must_use]
    pub fn contains_point(self, p: Point3) -> bool {
        p.x >= self.min.x
            && p.x <= self.max.x
            && p.y >= self.min.y
            && p.y <= self.max.y
            && p.z >= self.min.z
            && p.z <= self.max.z
    }

    #[must_use]
    pub fn contains_bbox(self, other: Self) -> bool {
        self.contains_point(other.min) && self.contains_point(other.max)
    }

    #[must_use]
    pub fn expand_by(self, amount: f64) -> Self {
        let d = Vec3::new(amount, amount, amount);
        Self::new(self.min - d, self.max + d)
    }

    #[must_use]
    pub fn union(self, other: Self) -> Self {
        Self::new(
            Point3::new(
                self.min.x.min(other.min.x),
                self.min.y.min(other.min.y),
                self.min.z.min(other.min.z),
            ),
            Point3::new(
                self.max.x.max(other.max.x),
                self.max.y.max(other.max.y),
                self.max.z.max(other.max.z),
            ),
        )
    }

}

// ─────────────────────────────────────────────────────────────────────────────
// Tolerance
// ─────────────────────────────────────────────────────────────────────────────

/// Tolerance configuration for geometric comparisons.
///
/// - `Tolerance::DEFAULT` - general comparisons (1e-9)
/// - `Tolerance::ZERO_LENGTH` - degenerate vectors and vanishing coefficients (1e-12)
/// - `Tolerance::LOOSE` - comparisons against sampled values (1e-6)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    pub eps: f64,
}

impl Tolerance {
    pub const DEFAULT: Self = Self { eps: 1e-9 };
    pub const ZERO_LENGTH: Self = Self { eps: 1e-12 };
    pub const LOOSE: Self = Self { eps: 1e-6 };

    #[must_use]
    pub const fn new(eps: f64) -> Self {
        Self { eps }
    }

    #[must_use]
    pub const fn eps_squared(self) -> f64 {
        self.eps * self.eps
    }

    #[must_use]
    pub fn approx_eq_f64(self, a: f64, b: f64) -> bool {
        (a - b).abs() <= self.eps
    }

    #[must_use]
    pub fn approx_zero_f64(self, a: f64) -> bool {
        a.abs() <= self.eps
    }

    #[must_use]
    pub fn approx_eq_point3(self, a: Point3, b: Point3) -> bool {
        a.sub_point(b).length_squared() <= self.eps_squared()
    }

    #[must_use]
    pub fn approx_eq_vec3(self, a: Vec3, b: Vec3) -> bool {
        (a - b).length_squared() <= self.eps_squared()
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_or_nan_propagates() {
        assert!(Vec3::ZERO.normalize_or_nan().is_nan());
        assert_eq!(Vec3::ZERO.normalized(), None);
        assert_eq!(Vec3::new(0.0, 3.0, 0.0).normalize_or_nan(), Vec3::Y);
    }

    #[test]
    fn test_quaternion_from_to() {
        let tol = Tolerance::new(1e-9);
        let target = Vec3::new(1.0, 1.0, 0.0).normalized().unwrap();
        let q = Quaternion::from_to(Vec3::Y, target).unwrap();
        assert!(tol.approx_eq_vec3(q.up(), target));

        let flipped = Quaternion::from_to(Vec3::Y, -Vec3::Y).unwrap();
        assert!(tol.approx_eq_vec3(flipped.up(), -Vec3::Y));
    }

    #[test]
    fn test_look_rotation_axes() {
        let tol = Tolerance::new(1e-9);
        let q = Quaternion::look_rotation(Vec3::X, Vec3::Y);
        assert!(tol.approx_eq_vec3(q.forward(), Vec3::X));
        assert!(tol.approx_eq_vec3(q.up(), Vec3::Y));
        assert!(tol.approx_eq_vec3(q.right(), -Vec3::Z));

        let identity = Quaternion::look_rotation(Vec3::Z, Vec3::Y);
        assert!(identity.approx_same_rotation(Quaternion::IDENTITY, 1e-12));
    }

    #[test]
    fn test_look_rotation_degenerate_is_nan() {
        let q = Quaternion::look_rotation(Vec3::ZERO, Vec3::Y);
        assert!(q.x.is_nan() || q.w.is_nan());
    }

    #[test]
    fn test_transform_inverse_roundtrips_points() {
        let t = Transform::translate(Vec3::new(1.0, 2.0, 3.0))
            * Transform::rotate_z(0.7)
            * Transform::scale(2.0, 2.0, 2.0);
        let inv = t.inverse().unwrap();
        let p = Point3::new(-4.0, 0.5, 9.0);
        let tol = Tolerance::new(1e-9);
        assert!(tol.approx_eq_point3(inv.apply_point(t.apply_point(p)), p));
        assert!(Transform::scale(0.0, 1.0, 1.0).inverse().is_none());
    }

    #[test]
    fn test_transform_vec_ignores_translation() {
        let t = Transform::translate(Vec3::new(5.0, 5.0, 5.0));
        assert_eq!(t.apply_vec(Vec3::X), Vec3::X);
        assert_eq!(t.apply_point(Point3::ORIGIN), Point3::new(5.0, 5.0, 5.0));
    }

    #[test]
    fn test_bbox_from_points_skips_nan() {
        let bbox = BBox::from_points([
            Point3::new(0.0, f64::NAN, f64::NAN),
            Point3::new(2.0, 4.0, 6.0),
            Point3::new(1.0, -1.0, f64::NAN),
        ])
        .unwrap();
        assert_eq!(bbox.min, Point3::new(0.0, -1.0, 6.0));
        assert_eq!(bbox.max, Point3::new(2.0, 4.0, 6.0));
        assert!(BBox::from_points(Vec::new()).is_none());
    }

    #[test]
    fn test_bbox_methods() {
        let bbox = BBox::new(Point3::new(0.0, 0.0, 0.0), Point3::new(2.0, 4.0, 6.0));

        assert_eq!(bbox.center(), Point3::new(1.0, 2.0, 3.0));
        assert_eq!(bbox.size(), Vec3::new(2.0, 4.0, 6.0));
        assert!(bbox.contains_point(Point3::new(1.0, 2.0, 3.0)));
        assert!(!bbox.contains_point(Point3::new(-1.0, 2.0, 3.0)));

        let grown = bbox.expand_by(1.0);
        assert_eq!(grown.min, Point3::new(-1.0, -1.0, -1.0));
        assert!(grown.contains_bbox(bbox));
    }
}
