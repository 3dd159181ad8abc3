//! Evenly spaced samples of the equality line and bound boundaries.
//!
//! Sampling is a display aid: it lets a presentation layer draw each line as
//! a polyline over a fixed `x1` grid. Values outside the non-negative quadrant
//! are emitted unchanged, and no row says anything about feasibility.

use std::iter::FusedIterator;

use segment_lp_core::{Bound, EqualityConstraint};

use super::ConfigError;

/// Largest number of rows a sampling config may request.
pub const MAX_SAMPLES: usize = 1 << 20;

/// Grid for [`sample_curve`]: rows at `x1 = 0, step, 2·step, …` up to `x_max`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    step: f64,
    x_max: f64,
}

impl Default for Config {
    /// Half-serving steps from 0 to 7, wide enough to show both vitamin C
    /// boundaries of the fruit-servings problem.
    fn default() -> Self {
        Self {
            step: 0.5,
            x_max: 7.0,
        }
    }
}

impl Config {
    /// Creates a new sampling config.
    ///
    /// # Errors
    ///
    /// Returns an error if `step` is not finite and positive, `x_max` is not
    /// finite and non-negative, or the grid would exceed [`MAX_SAMPLES`] rows.
    pub fn new(step: f64, x_max: f64) -> Result<Self, ConfigError> {
        if !step.is_finite() || step <= 0.0 {
            return Err(ConfigError::Step);
        }
        if !x_max.is_finite() || x_max < 0.0 {
            return Err(ConfigError::XMax);
        }
        if (x_max / step).floor() >= MAX_SAMPLES as f64 {
            return Err(ConfigError::TooManySamples { limit: MAX_SAMPLES });
        }

        Ok(Self { step, x_max })
    }

    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    #[must_use]
    pub fn x_max(&self) -> f64 {
        self.x_max
    }

    /// Returns the number of rows, `floor(x_max / step) + 1`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn len(&self) -> usize {
        (self.x_max / self.step).floor() as usize + 1
    }

    /// Always false: a grid has at least the `x1 = 0` row.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }
}

/// One row of a sampled curve.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub x1: f64,

    /// `x2` on the equality line, or `None` if the line is vertical.
    pub equality_x2: Option<f64>,

    /// `x2` on each bound's boundary line, in bound order.
    pub bound_x2: Vec<Option<f64>>,
}

/// A lazily evaluated, restartable set of samples.
///
/// Each call to [`SampleCurve::iter`] starts a fresh pass over the grid.
#[derive(Debug, Clone, Copy)]
pub struct SampleCurve<'a> {
    equality: &'a EqualityConstraint,
    bounds: &'a [Bound],
    step: f64,
    len: usize,
}

/// Samples the equality line and every bound's boundary line on a grid.
#[must_use]
pub fn sample_curve<'a>(
    equality: &'a EqualityConstraint,
    bounds: &'a [Bound],
    config: &Config,
) -> SampleCurve<'a> {
    SampleCurve {
        equality,
        bounds,
        step: config.step(),
        len: config.len(),
    }
}

impl<'a> SampleCurve<'a> {
    /// Returns an iterator over the rows, starting from `x1 = 0`.
    #[must_use]
    pub fn iter(&self) -> Samples<'a> {
        Samples {
            curve: *self,
            next: 0,
        }
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<'a> IntoIterator for &SampleCurve<'a> {
    type Item = Sample;
    type IntoIter = Samples<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for SampleCurve<'a> {
    type Item = Sample;
    type IntoIter = Samples<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the rows of a [`SampleCurve`].
#[derive(Debug, Clone)]
pub struct Samples<'a> {
    curve: SampleCurve<'a>,
    next: usize,
}

impl Iterator for Samples<'_> {
    type Item = Sample;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.curve.len {
            return None;
        }

        // Multiplying avoids the drift of repeated addition.
        #[allow(clippy::cast_precision_loss)]
        let x1 = self.next as f64 * self.curve.step;
        self.next += 1;

        Some(Sample {
            x1,
            equality_x2: self.curve.equality.x2_at(x1),
            bound_x2: self
                .curve
                .bounds
                .iter()
                .map(|bound| bound.boundary_x2_at(x1))
                .collect(),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.curve.len - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Samples<'_> {}

impl FusedIterator for Samples<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use segment_lp_core::LinearExpr;

    fn fruit_bounds() -> [Bound; 2] {
        let vitamin_c = LinearExpr::new(8.8, 5.2);
        [
            Bound::at_least(vitamin_c, 20.0),
            Bound::at_most(vitamin_c, 60.0),
        ]
    }

    #[test]
    fn default_grid_matches_fruit_chart() {
        let equality = EqualityConstraint::sum(5.0);
        let bounds = fruit_bounds();
        let curve = sample_curve(&equality, &bounds, &Config::default());

        assert_eq!(curve.len(), 15);

        let rows: Vec<Sample> = curve.iter().collect();
        assert_eq!(rows.len(), 15);
        assert_relative_eq!(rows[0].x1, 0.0);
        assert_relative_eq!(rows[14].x1, 7.0);

        let first = &rows[0];
        assert_relative_eq!(first.equality_x2.unwrap(), 5.0);
        assert_relative_eq!(first.bound_x2[0].unwrap(), 20.0 / 5.2);
        assert_relative_eq!(first.bound_x2[1].unwrap(), 60.0 / 5.2);
    }

    #[test]
    fn negative_values_are_emitted() {
        let equality = EqualityConstraint::sum(5.0);
        let curve = sample_curve(&equality, &[], &Config::default());

        let last = curve.iter().last().expect("non-empty grid");
        assert_relative_eq!(last.equality_x2.unwrap(), -2.0);
        assert!(last.bound_x2.is_empty());
    }

    #[test]
    fn curve_is_restartable() {
        let equality = EqualityConstraint::sum(5.0);
        let bounds = fruit_bounds();
        let curve = sample_curve(&equality, &bounds, &Config::default());

        let first: Vec<Sample> = curve.iter().collect();
        let second: Vec<Sample> = (&curve).into_iter().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn iterator_reports_exact_length() {
        let equality = EqualityConstraint::sum(5.0);
        let curve = sample_curve(&equality, &[], &Config::new(1.0, 3.0).unwrap());

        let mut iter = curve.iter();
        assert_eq!(iter.len(), 4);
        iter.next();
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.by_ref().count(), 3);
        assert!(iter.next().is_none());
    }

    #[test]
    fn zero_width_grid_has_one_row() {
        let equality = EqualityConstraint::sum(5.0);
        let curve = sample_curve(&equality, &[], &Config::new(0.5, 0.0).unwrap());

        let rows: Vec<Sample> = curve.iter().collect();
        assert_eq!(rows.len(), 1);
        assert_relative_eq!(rows[0].x1, 0.0);
    }

    #[test]
    fn vertical_lines_have_no_x2() {
        let equality = EqualityConstraint::new(LinearExpr::new(1.0, 0.0), 5.0);
        let bounds = [Bound::at_most(LinearExpr::new(1.0, 0.0), 3.0)];
        let curve = sample_curve(&equality, &bounds, &Config::new(1.0, 2.0).unwrap());

        for row in &curve {
            assert!(row.equality_x2.is_none());
            assert_eq!(row.bound_x2, vec![None]);
        }
    }

    #[test]
    fn rejects_invalid_config() {
        assert_eq!(Config::new(0.0, 7.0), Err(ConfigError::Step));
        assert_eq!(Config::new(-0.5, 7.0), Err(ConfigError::Step));
        assert_eq!(Config::new(f64::NAN, 7.0), Err(ConfigError::Step));
        assert_eq!(Config::new(0.5, -1.0), Err(ConfigError::XMax));
        assert_eq!(Config::new(0.5, f64::INFINITY), Err(ConfigError::XMax));
        assert_eq!(
            Config::new(1e-12, 1e6),
            Err(ConfigError::TooManySamples { limit: MAX_SAMPLES })
        );
    }
}
