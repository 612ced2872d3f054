use crate::geom::Point3;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::evaluator::SplineEvaluator;
use super::segment::clamp_parameter;
use super::space::SplineSpace;

/// Steps per segment used when [`LengthOptions::steps_per_curve`] is zero.
pub const DEFAULT_LENGTH_STEPS: usize = 32;

/// Sampling density for the piecewise-linear length estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LengthOptions {
    /// Steps per segment; `0` selects [`DEFAULT_LENGTH_STEPS`].
    pub steps_per_curve: usize,
}

impl LengthOptions {
    #[must_use]
    pub const fn new(steps_per_curve: usize) -> Self {
        Self { steps_per_curve }
    }

    #[must_use]
    pub const fn effective_steps(self) -> usize {
        if self.steps_per_curve == 0 {
            DEFAULT_LENGTH_STEPS
        } else {
            self.steps_per_curve
        }
    }
}

impl<S: SplineSpace> SplineEvaluator<'_, S> {
    /// Sum of chord lengths between evenly spaced samples from `t = 0` to
    /// `t = 1`. Underestimates the true arc length and is recomputed on
    /// every call.
    #[must_use]
    pub fn approximate_length(&self, options: LengthOptions) -> f64 {
        let points = sample_points(self, options.effective_steps());
        let length: f64 = points
            .windows(2)
            .map(|pair| pair[0].distance_to(pair[1]))
            .sum();
        log::trace!(
            "approximate length {length} from {} samples over {} segments",
            points.len(),
            self.curve_count()
        );
        length
    }

    /// `t * approximate_length(options)`.
    ///
    /// This scales the total by the parameter; it is not the distance
    /// travelled up to `t` unless the spline happens to have constant speed.
    #[must_use]
    pub fn approximate_length_at(&self, t: f64, options: LengthOptions) -> f64 {
        clamp_parameter(t) * self.approximate_length(options)
    }

    /// `point(distance / approximate_length)` with default sampling.
    ///
    /// The quotient is treated as a parameter, so this is only a true
    /// distance lookup for constant-speed splines.
    #[must_use]
    pub fn point_by_distance(&self, distance: f64) -> Point3 {
        self.point(distance / self.approximate_length(LengthOptions::default()))
    }
}

#[cfg(feature = "parallel")]
fn sample_points<S: SplineSpace>(evaluator: &SplineEvaluator<'_, S>, steps_per_curve: usize) -> Vec<Point3> {
    let params: Vec<f64> = evaluator.resolver().sample_parameters(steps_per_curve).collect();
    params.into_par_iter().map(|t| evaluator.point(t)).collect()
}

#[cfg(not(feature = "parallel"))]
fn sample_points<S: SplineSpace>(evaluator: &SplineEvaluator<'_, S>, steps_per_curve: usize) -> Vec<Point3> {
    evaluator
        .resolver()
        .sample_parameters(steps_per_curve)
        .map(|t| evaluator.point(t))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_steps_selects_default() {
        assert_eq!(LengthOptions::default().effective_steps(), DEFAULT_LENGTH_STEPS);
        assert_eq!(LengthOptions::new(5).effective_steps(), 5);
    }
}
