use crate::geom::{BBox, CubicBezier3, Curve3, Point3};

const SAMPLES: usize = 4096;

fn sampled_bbox(curve: &CubicBezier3) -> BBox {
    let points = (0..=SAMPLES).map(|i| curve.point_at(i as f64 / SAMPLES as f64));
    BBox::from_points(points).expect("samples are finite")
}

fn assert_bbox_close(exact: BBox, sampled: BBox, eps: f64) {
    // The analytic box may only be larger than the sampled one, never smaller.
    assert!(exact.expand_by(1e-12).contains_bbox(sampled), "{exact:?} vs {sampled:?}");
    for (a, b) in [
        (exact.min.x, sampled.min.x),
        (exact.min.y, sampled.min.y),
        (exact.min.z, sampled.min.z),
        (exact.max.x, sampled.max.x),
        (exact.max.y, sampled.max.y),
        (exact.max.z, sampled.max.z),
    ] {
        assert!((a - b).abs() < eps, "{a} vs {b}");
    }
}

fn p(x: f64, y: f64, z: f64) -> Point3 {
    Point3::new(x, y, z)
}

#[test]
fn bbox_of_straight_segment_is_its_endpoints() {
    let curve = CubicBezier3::new(p(0.0, 0.0, 0.0), p(0.0, 0.0, 0.0), p(10.0, 0.0, 0.0), p(10.0, 0.0, 0.0));
    let bbox = curve.bounding_box();
    assert_eq!(bbox.min, p(0.0, 0.0, 0.0));
    assert_eq!(bbox.max, p(10.0, 0.0, 0.0));
}

#[test]
fn bbox_battery_matches_dense_sampling() {
    let battery = [
        // straight, collinear handles
        CubicBezier3::new(p(0.0, 0.0, 0.0), p(1.0, 1.0, 1.0), p(2.0, 2.0, 2.0), p(3.0, 3.0, 3.0)),
        // straight with overshooting handles
        CubicBezier3::new(p(0.0, 0.0, 0.0), p(5.0, 0.0, 0.0), p(-2.0, 0.0, 0.0), p(3.0, 0.0, 0.0)),
        // S-curve
        CubicBezier3::new(p(0.0, 0.0, 0.0), p(1.0, 3.0, 0.0), p(2.0, -3.0, 0.0), p(3.0, 0.0, 0.0)),
        // cusp
        CubicBezier3::new(p(0.0, 0.0, 0.0), p(2.0, 2.0, 0.0), p(0.0, 2.0, 0.0), p(2.0, 0.0, 0.0)),
        // arch with vanishing quadratic coefficient
        CubicBezier3::new(p(0.0, 0.0, 0.0), p(1.0, 1.0, -1.0), p(2.0, 1.0, -1.0), p(3.0, 0.0, 0.0)),
        // twisted 3D
        CubicBezier3::new(p(-1.0, 2.0, 0.5), p(4.0, -3.0, 2.0), p(-2.0, 5.0, -4.0), p(1.0, 0.0, 3.0)),
        // loop
        CubicBezier3::new(p(0.0, 0.0, 0.0), p(4.0, 3.0, 0.0), p(-1.0, 3.0, 0.0), p(3.0, 0.0, 0.0)),
        // degenerate point
        CubicBezier3::new(p(1.0, 1.0, 1.0), p(1.0, 1.0, 1.0), p(1.0, 1.0, 1.0), p(1.0, 1.0, 1.0)),
    ];

    for curve in &battery {
        assert_bbox_close(curve.bounding_box(), sampled_bbox(curve), 1e-5);
    }
}

#[test]
fn bbox_contains_every_sampled_point() {
    let curve = CubicBezier3::new(p(0.0, 0.0, 0.0), p(1.0, 3.0, 2.0), p(2.0, -3.0, -2.0), p(3.0, 0.0, 0.0));
    let bbox = curve.bounding_box().expand_by(1e-12);
    for i in 0..=1000 {
        let t = i as f64 / 1000.0;
        assert!(bbox.contains_point(curve.point_at(t)), "t = {t}");
    }
}
