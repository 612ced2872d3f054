use super::error::{SplineError, SplineResult};

/// Clamps a global parameter into `[0, 1]`; NaN maps to `0`.
#[must_use]
pub fn clamp_parameter(t: f64) -> f64 {
    if t.is_nan() {
        log::debug!("NaN spline parameter treated as 0");
        return 0.0;
    }
    t.clamp(0.0, 1.0)
}

/// The segment a global parameter lands on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentRef {
    /// Segment index in `0..curve_count`.
    pub index: usize,
    /// Vertex index of the segment start.
    pub start: usize,
    /// Vertex index of the segment end.
    pub end: usize,
    /// Parameter local to the segment, in `[0, 1]`.
    pub local_t: f64,
}

/// Maps global parameters onto `(start vertex, end vertex, local parameter)`.
///
/// All positional, derivative, bounding-box and orientation queries go
/// through this one mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentResolver {
    vertex_count: usize,
    is_loop: bool,
}

impl SegmentResolver {
    /// # Errors
    /// Returns [`SplineError::MalformedSpline`] for fewer than two vertices.
    pub fn new(vertex_count: usize, is_loop: bool) -> SplineResult<Self> {
        if vertex_count < 2 {
            log::debug!("rejecting spline with {vertex_count} vertices");
            return Err(SplineError::MalformedSpline { vertex_count });
        }
        Ok(Self {
            vertex_count,
            is_loop,
        })
    }

    #[must_use]
    pub const fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    #[must_use]
    pub const fn is_loop(&self) -> bool {
        self.is_loop
    }

    /// `n` for loops, `n - 1` otherwise.
    #[must_use]
    pub const fn curve_count(&self) -> usize {
        if self.is_loop {
            self.vertex_count
        } else {
            self.vertex_count - 1
        }
    }

    /// Resolves a global parameter; out-of-range values are clamped.
    #[must_use]
    pub fn resolve(&self, t: f64) -> SegmentRef {
        let t = clamp_parameter(t);
        let count = self.curve_count();
        #[allow(clippy::cast_precision_loss)]
        let scaled = t * count as f64;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let index = scaled.floor() as usize;

        if index < count && t < 1.0 {
            SegmentRef {
                index,
                start: index,
                end: (index + 1) % self.vertex_count,
                local_t: scaled.fract(),
            }
        } else {
            self.last_segment()
        }
    }

    /// Resolves the segment beginning at global parameter `index / curve_count`.
    ///
    /// `index == curve_count` addresses the end of the spline, like `t = 1`.
    /// Larger indices clamp to it.
    #[must_use]
    pub fn resolve_index(&self, index: usize) -> SegmentRef {
        if index < self.curve_count() {
            SegmentRef {
                index,
                start: index,
                end: (index + 1) % self.vertex_count,
                local_t: 0.0,
            }
        } else {
            self.last_segment()
        }
    }

    /// The final segment evaluated at its end: `(n-1, 0)` for loops,
    /// `(n-2, n-1)` otherwise.
    fn last_segment(&self) -> SegmentRef {
        let n = self.vertex_count;
        let (start, end) = if self.is_loop { (n - 1, 0) } else { (n - 2, n - 1) };
        SegmentRef {
            index: self.curve_count() - 1,
            start,
            end,
            local_t: 1.0,
        }
    }

    /// `steps_per_curve * curve_count + 1` evenly spaced global parameters,
    /// from `0` through `1` inclusive.
    #[allow(clippy::cast_precision_loss)]
    pub fn sample_parameters(&self, steps_per_curve: usize) -> impl Iterator<Item = f64> + Clone {
        let steps = steps_per_curve.max(1).saturating_mul(self.curve_count());
        (0..=steps).map(move |i| i as f64 / steps as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_short_splines() {
        assert_eq!(
            SegmentResolver::new(1, false),
            Err(SplineError::MalformedSpline { vertex_count: 1 })
        );
        assert_eq!(
            SegmentResolver::new(0, true),
            Err(SplineError::MalformedSpline { vertex_count: 0 })
        );
    }

    #[test]
    fn non_loop_boundaries() {
        let resolver = SegmentResolver::new(4, false).unwrap();
        assert_eq!(resolver.curve_count(), 3);

        let start = resolver.resolve(0.0);
        assert_eq!((start.start, start.end, start.local_t), (0, 1, 0.0));

        let end = resolver.resolve(1.0);
        assert_eq!((end.index, end.start, end.end, end.local_t), (2, 2, 3, 1.0));

        let mid = resolver.resolve(0.5);
        assert_eq!((mid.start, mid.end), (1, 2));
        assert!((mid.local_t - 0.5).abs() < 1e-12);
    }

    #[test]
    fn loop_boundaries() {
        let resolver = SegmentResolver::new(4, true).unwrap();
        assert_eq!(resolver.curve_count(), 4);

        let end = resolver.resolve(1.0);
        assert_eq!((end.index, end.start, end.end, end.local_t), (3, 3, 0, 1.0));

        let last = resolver.resolve(0.9);
        assert_eq!((last.start, last.end), (3, 0));
        assert!((last.local_t - 0.6).abs() < 1e-12);
    }

    #[test]
    fn out_of_range_and_nan_clamp() {
        let resolver = SegmentResolver::new(3, false).unwrap();
        assert_eq!(resolver.resolve(-2.0), resolver.resolve(0.0));
        assert_eq!(resolver.resolve(7.5), resolver.resolve(1.0));
        assert_eq!(resolver.resolve(f64::NAN), resolver.resolve(0.0));
        assert_eq!(resolver.resolve(f64::INFINITY), resolver.resolve(1.0));
    }

    #[test]
    fn index_resolution_matches_segment_starts() {
        let resolver = SegmentResolver::new(4, false).unwrap();
        for i in 0..3 {
            let by_index = resolver.resolve_index(i);
            assert_eq!((by_index.start, by_index.end, by_index.local_t), (i, i + 1, 0.0));
        }
        assert_eq!(resolver.resolve_index(3), resolver.resolve(1.0));
        assert_eq!(resolver.resolve_index(99), resolver.resolve(1.0));
    }

    #[test]
    fn sample_parameters_span_unit_interval() {
        let resolver = SegmentResolver::new(3, true).unwrap();
        let params: Vec<f64> = resolver.sample_parameters(10).collect();
        assert_eq!(params.len(), 31);
        assert_eq!(params[0], 0.0);
        assert_eq!(params[30], 1.0);
    }

    #[test]
    fn huge_step_counts_saturate() {
        let resolver = SegmentResolver::new(3, false).unwrap();
        let mut params = resolver.sample_parameters(usize::MAX / 2 + 1);
        assert_eq!(params.next(), Some(0.0));
        let second = params.next().unwrap();
        assert!(second > 0.0 && second < 1e-18);
    }
}
