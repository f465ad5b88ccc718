//! Probability-density curve descriptions
//!
//! A `DensityCurve` is a pure description of what the host should draw: a
//! location-scale Student t density, the x-range to plot, the acceptance
//! band to shade (its complement is the critical region) and a single marked
//! point. The density is always the t pdf on the observation/mu axis, never
//! the raw standard t(0,1) density.

use statrs::distribution::{Continuous, StudentsT};

use crate::descriptive::SampleStatistics;
use crate::distribution::scaled_t;
use crate::errors::StatsResult;
use crate::tests::prediction::PredictionResult;
use crate::tests::TestResult;
use crate::types::{Region, Tail};

/// Number of curve samples the reference rendering uses
pub const DEFAULT_CURVE_POINTS: usize = 600;

/// Description of one density plot
#[derive(Debug, Clone)]
pub struct DensityCurve {
    dist: StudentsT,
    /// Left edge of the x-range to draw
    pub x_min: f64,
    /// Right edge of the x-range to draw
    pub x_max: f64,
    /// Acceptance band to shade, (low, high)
    pub band: (f64, f64),
    /// x position of the marked point
    pub marker_x: f64,
}

impl DensityCurve {
    /// Curve for a prediction check: centered at the sample mean, scaled by
    /// the prediction standard error, marker at the predicted value
    pub fn for_prediction(
        stats: &SampleStatistics,
        result: &PredictionResult,
    ) -> StatsResult<Self> {
        let scale = result.standard_error;
        Ok(Self {
            dist: scaled_t(stats.mean, scale, stats.df)?,
            x_min: stats.mean - 4.0 * scale,
            x_max: stats.mean + 4.0 * scale,
            band: (result.lower, result.upper),
            marker_x: result.predicted,
        })
    }

    /// Curve for a mean test: centered at mu0, scaled by S/sqrt(n), marker
    /// at the sample mean
    ///
    /// Two-tailed: the band is the mu-scale acceptance interval and the
    /// range spans mu0 ± 4 scale units. One-tailed: the displayed band spans
    /// mu0 to the critical boundary, padded by half a scale unit per side.
    pub fn for_test(stats: &SampleStatistics, result: &TestResult) -> StatsResult<Self> {
        let scale = stats.standard_error();
        let dist = scaled_t(result.mu0, scale, stats.df)?;

        match result.tail {
            Tail::Two => Ok(Self {
                dist,
                x_min: result.mu0 - 4.0 * scale,
                x_max: result.mu0 + 4.0 * scale,
                band: (result.mu_lower, result.mu_upper),
                marker_x: result.mean,
            }),
            Tail::Left | Tail::Right => {
                let boundary = match result.tail {
                    Tail::Right => result.mu_upper,
                    _ => result.mu_lower,
                };
                let low = boundary.min(result.mu0);
                let high = boundary.max(result.mu0);
                Ok(Self {
                    dist,
                    x_min: low - 0.5 * scale,
                    x_max: high + 0.5 * scale,
                    band: (low, high),
                    marker_x: result.mean,
                })
            }
        }
    }

    /// Density at x on the observation/mu axis
    pub fn density(&self, x: f64) -> f64 {
        self.dist.pdf(x)
    }

    /// The marked point, (x, density(x))
    pub fn marker(&self) -> (f64, f64) {
        (self.marker_x, self.density(self.marker_x))
    }

    /// Classify a position against the shaded band, boundaries inclusive
    pub fn region_of(&self, x: f64) -> Region {
        if self.band.0 <= x && x <= self.band.1 {
            Region::Acceptance
        } else {
            Region::Critical
        }
    }

    /// Sample the curve with `count` evenly spaced points across the x-range
    pub fn points(&self, count: usize) -> Vec<(f64, f64)> {
        if count == 0 {
            return Vec::new();
        }
        if count == 1 {
            return vec![(self.x_min, self.density(self.x_min))];
        }
        let step = (self.x_max - self.x_min) / (count - 1) as f64;
        (0..count)
            .map(|i| {
                let x = self.x_min + step * i as f64;
                (x, self.density(x))
            })
            .collect()
    }
}
