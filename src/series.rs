//! Sampled function data ready for plotting.

use ndarray::Array1;

use crate::error::ValidationError;
use crate::expr::{EvalError, Expr};
use crate::validator::{SampleRange, UndefinedPolicy};

/// Number of points sampled across the x range.
pub const SAMPLE_RESOLUTION: usize = 100;

/// Evenly spaced sample positions covering `range`, both ends included.
pub fn sample_points(range: SampleRange) -> Array1<f64> {
    let (min, max) = (range.min() as f64, range.max() as f64);
    let mut xs = Array1::linspace(min, max, SAMPLE_RESOLUTION);
    // linspace accumulates rounding error towards the end
    xs[SAMPLE_RESOLUTION - 1] = max;
    xs
}

/// A function sampled over a range.
///
/// Holds exactly [`SAMPLE_RESOLUTION`] points. A `y` of NaN marks a sample
/// where the function is undefined.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotSeries {
    expression: Expr,
    range: SampleRange,
    points: Vec<(f64, f64)>,
}

impl PlotSeries {
    /// Evaluate `expression` at every sample position of `range`.
    pub fn sample(
        expression: Expr,
        range: SampleRange,
        policy: UndefinedPolicy,
    ) -> Result<Self, ValidationError> {
        let xs = sample_points(range);
        let mut points = Vec::with_capacity(xs.len());
        let mut first_failure: Option<(f64, EvalError)> = None;

        for &x in xs.iter() {
            match expression.eval(x) {
                Ok(y) => points.push((x, y)),
                Err(source) if policy == UndefinedPolicy::Abort => {
                    return Err(ValidationError::Evaluation { x, source });
                },
                Err(source) => {
                    tracing::debug!(x, %source, "Undefined sample");
                    first_failure.get_or_insert((x, source));
                    points.push((x, f64::NAN));
                },
            }
        }

        if points.iter().all(|(_, y)| y.is_nan()) {
            if let Some((x, source)) = first_failure {
                return Err(ValidationError::Evaluation { x, source });
            }
        }

        Ok(Self {
            expression,
            range,
            points,
        })
    }

    /// The sampled expression.
    pub fn expression(&self) -> &Expr {
        &self.expression
    }

    /// The sampled range.
    pub fn range(&self) -> SampleRange {
        self.range
    }

    /// All `(x, y)` pairs in increasing x order.
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether there are no samples. Never true for a sampled series.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of samples where the function is undefined.
    pub fn undefined_count(&self) -> usize {
        self.points.iter().filter(|(_, y)| y.is_nan()).count()
    }

    /// Runs of consecutive defined samples, in order.
    pub fn segments(&self) -> Vec<&[(f64, f64)]> {
        self.points
            .split(|(_, y)| y.is_nan())
            .filter(|run| !run.is_empty())
            .collect()
    }

    /// Smallest and largest defined `y`.
    pub fn y_bounds(&self) -> Option<(f64, f64)> {
        self.points
            .iter()
            .map(|&(_, y)| y)
            .filter(|y| !y.is_nan())
            .fold(None, |bounds, y| match bounds {
                None => Some((y, y)),
                Some((lo, hi)) => Some((lo.min(y), hi.max(y))),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::parse;

    fn sampled(text: &str, min: i32, max: i32) -> PlotSeries {
        let range = SampleRange::new(min, max).unwrap();
        PlotSeries::sample(parse(text).unwrap(), range, UndefinedPolicy::Gap).unwrap()
    }

    #[test]
    fn endpoints_are_exact() {
        let xs = sample_points(SampleRange::new(-7, 13).unwrap());
        assert_eq!(xs.len(), SAMPLE_RESOLUTION);
        assert_eq!(xs[0], -7.0);
        assert_eq!(xs[SAMPLE_RESOLUTION - 1], 13.0);
    }

    #[test]
    fn segments_split_on_undefined_samples() {
        // the sample at x = 1 divides by zero
        let series = sampled("1/(x-1)", 1, 100);
        assert_eq!(series.undefined_count(), 1);
        let segments = series.segments();
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].len(), SAMPLE_RESOLUTION - 1);
    }

    #[test]
    fn y_bounds_skip_undefined_samples() {
        let series = sampled("1/(x-1)", 1, 100);
        let (lo, hi) = series.y_bounds().unwrap();
        assert!(lo > 0.0);
        assert!(hi.is_finite());
    }
}
