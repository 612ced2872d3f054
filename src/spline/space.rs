use crate::geom::{Point3, Transform, Vec3};

/// Placement of a spline in the host scene.
///
/// Positions map as points (translation applies); velocities, accelerations
/// and up vectors map through the linear part only.
///
/// Implementations must be affine: segment bounding boxes are computed from
/// the placed control points.
pub trait SplineSpace: Sync {
    fn point_to_world(&self, point: Point3) -> Point3;

    fn vector_to_world(&self, vector: Vec3) -> Vec3;

    /// Inverse of [`SplineSpace::point_to_world`]; `None` for singular placements.
    fn point_to_local(&self, point: Point3) -> Option<Point3>;
}

impl SplineSpace for Transform {
    fn point_to_world(&self, point: Point3) -> Point3 {
        self.apply_point(point)
    }

    fn vector_to_world(&self, vector: Vec3) -> Vec3 {
        self.apply_vec(vector)
    }

    fn point_to_local(&self, point: Point3) -> Option<Point3> {
        self.inverse().map(|inv| inv.apply_point(point))
    }
}

impl<T: SplineSpace + ?Sized> SplineSpace for &T {
    fn point_to_world(&self, point: Point3) -> Point3 {
        (**self).point_to_world(point)
    }

    fn vector_to_world(&self, vector: Vec3) -> Vec3 {
        (**self).vector_to_world(vector)
    }

    fn point_to_local(&self, point: Point3) -> Option<Point3> {
        (**self).point_to_local(point)
    }
}
