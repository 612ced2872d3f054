use crate::geom::{BBox, CubicBezier3, Curve3, DeCasteljau, Point3, Transform, Vec3};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::segment::{SegmentRef, SegmentResolver};
use super::space::SplineSpace;
use super::spline::Spline;
use super::vertex::Vertex;

/// Read-only query surface over a validated spline.
///
/// Construction checks the vertex count once, so every query here is
/// infallible. Positions come back through [`SplineSpace::point_to_world`],
/// derivatives through [`SplineSpace::vector_to_world`].
#[derive(Debug, Clone, Copy)]
pub struct SplineEvaluator<'a, S = Transform> {
    spline: &'a Spline,
    resolver: SegmentResolver,
    space: S,
}

impl<'a, S: SplineSpace> SplineEvaluator<'a, S> {
    pub(crate) const fn new(spline: &'a Spline, resolver: SegmentResolver, space: S) -> Self {
        Self {
            spline,
            resolver,
            space,
        }
    }

    #[must_use]
    pub const fn spline(&self) -> &'a Spline {
        self.spline
    }

    #[must_use]
    pub const fn space(&self) -> &S {
        &self.space
    }

    #[must_use]
    pub const fn resolver(&self) -> &SegmentResolver {
        &self.resolver
    }

    #[must_use]
    pub const fn curve_count(&self) -> usize {
        self.resolver.curve_count()
    }

    #[must_use]
    pub fn resolve(&self, t: f64) -> SegmentRef {
        self.resolver.resolve(t)
    }

    /// The two vertices bracketing global parameter `t`.
    #[must_use]
    pub fn segment_vertices(&self, t: f64) -> (&'a Vertex, &'a Vertex) {
        self.vertices_of(&self.resolve(t))
    }

    pub(super) fn vertices_of(&self, segment: &SegmentRef) -> (&'a Vertex, &'a Vertex) {
        let vertices = self.spline.vertices();
        (&vertices[segment.start], &vertices[segment.end])
    }

    /// The segment as a standalone cubic, in spline space.
    #[must_use]
    pub(crate) fn segment_curve(&self, segment: &SegmentRef) -> CubicBezier3 {
        let (a, b) = self.vertices_of(segment);
        CubicBezier3::new(
            a.position(),
            a.handle_after_absolute(),
            b.handle_before_absolute(),
            b.position(),
        )
    }

    fn local_curve(&self, t: f64) -> (CubicBezier3, f64) {
        let segment = self.resolve(t);
        (self.segment_curve(&segment), segment.local_t)
    }

    #[must_use]
    pub fn point(&self, t: f64) -> Point3 {
        let (curve, u) = self.local_curve(t);
        self.space.point_to_world(curve.point_at(u))
    }

    /// Derivative with respect to the segment-local parameter.
    #[must_use]
    pub fn velocity(&self, t: f64) -> Vec3 {
        let (curve, u) = self.local_curve(t);
        self.space.vector_to_world(curve.derivative_at(u))
    }

    #[must_use]
    pub fn acceleration(&self, t: f64) -> Vec3 {
        let (curve, u) = self.local_curve(t);
        self.space.vector_to_world(curve.second_derivative_at(u))
    }

    /// Signed curvature of the XY projection in spline space.
    ///
    /// NaN on straight stretches and degenerate points.
    #[must_use]
    pub fn curvature(&self, t: f64) -> f64 {
        let (curve, u) = self.local_curve(t);
        curve.planar_curvature_at(u)
    }

    /// The de Casteljau construction at `t`, placed in world space.
    #[must_use]
    pub fn interstages(&self, t: f64) -> DeCasteljau {
        let (curve, u) = self.local_curve(t);
        curve.de_casteljau(u).map(|p| self.space.point_to_world(p))
    }

    // ─────────────────────────────────────────────────────────────────────
    // Bounding boxes
    // ─────────────────────────────────────────────────────────────────────

    /// Exact world box: cubic Beziers are affine invariant, so the control
    /// points are placed first and the extrema found in world space.
    fn world_box(&self, segment: &SegmentRef) -> BBox {
        let local = self.segment_curve(segment);
        let world = CubicBezier3::new(
            self.space.point_to_world(local.p0),
            self.space.point_to_world(local.p1),
            self.space.point_to_world(local.p2),
            self.space.point_to_world(local.p3),
        );
        world.bounding_box()
    }

    /// Exact box of the segment containing `t`.
    #[must_use]
    pub fn segment_bounding_box(&self, t: f64) -> BBox {
        self.world_box(&self.resolve(t))
    }

    /// Box of the segment starting at global parameter `index / curve_count`.
    /// `index == curve_count` yields the final segment again.
    #[must_use]
    pub fn segment_bounding_box_at_index(&self, index: usize) -> BBox {
        self.world_box(&self.resolver.resolve_index(index))
    }

    /// One box per index `0..=curve_count`; the last repeats the final segment.
    pub fn bounding_boxes(&self) -> impl ExactSizeIterator<Item = BBox> + Clone + '_ {
        (0..self.curve_count() + 1).map(move |i| self.segment_bounding_box_at_index(i))
    }

    /// Union of all segment boxes.
    #[must_use]
    pub fn bounding_box(&self) -> BBox {
        collect_segment_boxes(self)
            .into_iter()
            .reduce(BBox::union)
            .unwrap_or_else(|| {
                let start = self.point(0.0);
                BBox::new(start, start)
            })
    }
}

#[cfg(feature = "parallel")]
fn collect_segment_boxes<S: SplineSpace>(evaluator: &SplineEvaluator<'_, S>) -> Vec<BBox> {
    (0..evaluator.curve_count() + 1)
        .into_par_iter()
        .map(|i| evaluator.segment_bounding_box_at_index(i))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn collect_segment_boxes<S: SplineSpace>(evaluator: &SplineEvaluator<'_, S>) -> Vec<BBox> {
    evaluator.bounding_boxes().collect()
}

impl<S: SplineSpace> Curve3 for SplineEvaluator<'_, S> {
    fn point_at(&self, t: f64) -> Point3 {
        self.point(t)
    }

    fn derivative_at(&self, t: f64) -> Vec3 {
        self.velocity(t)
    }

    fn second_derivative_at(&self, t: f64) -> Vec3 {
        self.acceleration(t)
    }

    fn is_closed(&self) -> bool {
        self.spline.is_loop()
    }
}

#[cfg(test)]
mod tests {
    use crate::geom::{Point3, Vec3};
    use crate::spline::{Spline, Vertex};

    fn three_vertices() -> Spline {
        Spline::new(vec![
            Vertex::new(Point3::new(0.0, 0.0, 0.0), Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0)),
            Vertex::smooth(Point3::new(3.0, 2.0, 0.0), Vec3::new(0.0, 1.0, 1.0)),
            Vertex::new(Point3::new(6.0, 0.0, 1.0), Vec3::new(-1.0, 0.0, 0.0), Vec3::ZERO),
        ])
    }

    #[test]
    fn segment_curves_end_on_their_vertices() {
        for is_loop in [false, true] {
            let spline = three_vertices().with_loop(is_loop);
            let eval = spline.evaluator().unwrap();
            for i in 0..=eval.curve_count() + 1 {
                let segment = eval.resolver().resolve_index(i);
                let curve = eval.segment_curve(&segment);
                let (a, b) = eval.vertices_of(&segment);
                assert_eq!(curve.p0, a.position());
                assert_eq!(curve.p1, a.handle_after_absolute());
                assert_eq!(curve.p2, b.handle_before_absolute());
                assert_eq!(curve.p3, b.position());
                assert!(segment.end < spline.vertices().len());
            }
        }
    }
}
