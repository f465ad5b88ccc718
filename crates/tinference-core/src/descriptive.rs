//! Descriptive statistics for a sample
//!
//! Mean, unbiased variance (n-1 denominator), standard deviation and degrees
//! of freedom. Pure; recomputed whenever the sample changes.

use serde::{Deserialize, Serialize};

use crate::errors::{StatsError, StatsResult};
use crate::types::Sample;

/// Derived statistics of a sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleStatistics {
    /// Sample size
    pub n: usize,
    /// Arithmetic mean
    pub mean: f64,
    /// Unbiased sample variance, sum of squared deviations / (n - 1)
    pub variance: f64,
    /// Sample standard deviation, sqrt of the variance
    pub std_dev: f64,
    /// Degrees of freedom, n - 1
    pub df: f64,
}

impl SampleStatistics {
    /// Standard error of the mean, S / sqrt(n)
    pub fn standard_error(&self) -> f64 {
        self.std_dev / (self.n as f64).sqrt()
    }

    /// Standard error for a single new observation, S * sqrt(1 + 1/n)
    ///
    /// The +1 term carries the variance of the new draw on top of the
    /// sampling uncertainty in the mean.
    pub fn prediction_error(&self) -> f64 {
        self.std_dev * (1.0 + 1.0 / self.n as f64).sqrt()
    }

    /// Fail with `DegenerateSample` when the standard deviation is zero
    ///
    /// Every interval and test divides by S; callers must check this before
    /// computing anything that does.
    pub fn ensure_spread(&self) -> StatsResult<()> {
        if self.std_dev == 0.0 {
            return Err(StatsError::DegenerateSample);
        }
        Ok(())
    }
}

/// Compute descriptive statistics for a sample
///
/// Never fails: a constant sample yields variance 0, which only becomes an
/// error once an interval or test depends on it.
pub fn describe(sample: &Sample) -> SampleStatistics {
    let n = sample.n();
    let mean: f64 = sample.values().iter().sum::<f64>() / n as f64;

    let mut ss = 0.0;
    for &x in sample.values() {
        let d = x - mean;
        ss += d * d;
    }

    let variance = ss / (n - 1) as f64;

    SampleStatistics {
        n,
        mean,
        variance,
        std_dev: variance.sqrt(),
        df: (n - 1) as f64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_describe_basic() {
        let sample = Sample::new(vec![82.0, 85.0, 90.0, 87.0, 88.0, 91.0, 84.0]).unwrap();
        let stats = describe(&sample);

        assert_eq!(stats.n, 7);
        assert_eq!(stats.df, 6.0);
        assert_relative_eq!(stats.mean, 86.714285714285714, epsilon = 1e-12);
        assert_relative_eq!(stats.variance, 10.571428571428571, epsilon = 1e-12);
        assert_relative_eq!(stats.std_dev, 3.2513733362, epsilon = 1e-9);
    }

    #[test]
    fn test_describe_second_sample() {
        let sample = Sample::new(vec![80.0, 82.0, 85.0, 87.0, 88.0]).unwrap();
        let stats = describe(&sample);

        assert_eq!(stats.n, 5);
        assert_relative_eq!(stats.mean, 84.4, epsilon = 1e-12);
        assert_relative_eq!(stats.variance, 11.3, epsilon = 1e-12);
        assert_relative_eq!(stats.std_dev, 3.3615472627943227, epsilon = 1e-12);
    }

    #[test]
    fn test_standard_errors() {
        let sample = Sample::new(vec![80.0, 82.0, 85.0, 87.0, 88.0]).unwrap();
        let stats = describe(&sample);

        assert_relative_eq!(stats.standard_error(), stats.std_dev / 5f64.sqrt(), epsilon = 1e-12);
        assert_relative_eq!(
            stats.prediction_error(),
            stats.std_dev * (1.0 + 1.0 / 5.0f64).sqrt(),
            epsilon = 1e-12
        );
        // the prediction error is always wider than the error of the mean
        assert!(stats.prediction_error() > stats.standard_error());
    }

    #[test]
    fn test_constant_sample_is_degenerate() {
        let sample = Sample::new(vec![5.0, 5.0, 5.0]).unwrap();
        let stats = describe(&sample);

        // descriptive statistics are still reportable
        assert_eq!(stats.mean, 5.0);
        assert_eq!(stats.variance, 0.0);
        assert_eq!(stats.std_dev, 0.0);
        // but anything dividing by S must refuse
        assert_eq!(stats.ensure_spread().unwrap_err(), StatsError::DegenerateSample);
    }

    #[test]
    fn test_describe_is_pure() {
        let sample = Sample::new(vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        let a = describe(&sample);
        let b = describe(&sample);
        assert_eq!(a, b);
    }
}
