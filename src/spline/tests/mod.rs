mod test_persistence;

use crate::geom::{Point3, Vec3};
use crate::spline::{Spline, Vertex};

pub(super) fn p(x: f64, y: f64, z: f64) -> Point3 {
    Point3::new(x, y, z)
}

pub(super) fn v(x: f64, y: f64, z: f64) -> Vec3 {
    Vec3::new(x, y, z)
}

/// Four vertices with mixed lock modes, winding through all three axes.
pub(super) fn twisted_spline() -> Spline {
    let mut middle = Vertex::new(p(3.0, 2.0, 1.0), v(-1.0, 0.5, 0.0), v(1.0, -0.5, 2.0));
    middle.set_lock_mode(crate::spline::LockMode::AfterIsMirror);
    Spline::new(vec![
        Vertex::new(p(0.0, 0.0, 0.0), v(0.0, 0.0, -1.0), v(1.0, 2.0, 0.0)),
        middle,
        Vertex::smooth(p(6.0, -1.0, 2.0), v(0.5, 1.5, -1.0)),
        Vertex::new(p(4.0, 4.0, -3.0), v(2.0, 0.0, 1.0), v(-1.0, 1.0, 0.0)),
    ])
}
