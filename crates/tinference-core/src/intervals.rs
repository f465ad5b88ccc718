//! Confidence and prediction intervals
//!
//! Both intervals are symmetric two-sided constructs around the sample mean;
//! they differ only in the standard error they carry. The prediction
//! interval targets a single new observation, the confidence interval the
//! population mean.

use serde::{Deserialize, Serialize};

use crate::descriptive::SampleStatistics;
use crate::distribution::t_critical_two_sided;
use crate::errors::StatsResult;
use crate::types::SignificanceLevel;

/// Confidence interval for the population mean
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceInterval {
    /// Lower bound
    pub lower: f64,
    /// Upper bound
    pub upper: f64,
    /// Confidence level used, 1 - alpha
    pub level: f64,
    /// Standard error of the mean, S / sqrt(n)
    pub standard_error: f64,
    /// Two-sided critical t value
    pub critical_value: f64,
}

impl ConfidenceInterval {
    /// Whether a value lies inside the interval, boundaries inclusive
    pub fn contains(&self, value: f64) -> bool {
        self.lower <= value && value <= self.upper
    }

    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }
}

/// Prediction interval for a single new observation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionInterval {
    /// Lower bound
    pub lower: f64,
    /// Upper bound
    pub upper: f64,
    /// Confidence level used, 1 - alpha
    pub level: f64,
    /// Standard error for prediction, S * sqrt(1 + 1/n)
    pub standard_error: f64,
    /// Two-sided critical t value
    pub critical_value: f64,
}

impl PredictionInterval {
    /// Whether a value lies inside the interval, boundaries inclusive
    pub fn contains(&self, value: f64) -> bool {
        self.lower <= value && value <= self.upper
    }

    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }
}

/// Confidence interval for the population mean: mean ± t_crit * S/sqrt(n)
pub fn confidence_interval(
    stats: &SampleStatistics,
    level: SignificanceLevel,
) -> StatsResult<ConfidenceInterval> {
    stats.ensure_spread()?;

    let critical_value = t_critical_two_sided(level.alpha(), stats.df)?;
    let standard_error = stats.standard_error();
    let margin = critical_value * standard_error;

    Ok(ConfidenceInterval {
        lower: stats.mean - margin,
        upper: stats.mean + margin,
        level: level.confidence(),
        standard_error,
        critical_value,
    })
}

/// Prediction interval for one new observation: mean ± t_crit * S*sqrt(1 + 1/n)
///
/// Always two-sided, regardless of the tail mode of any test that runs
/// alongside it.
pub fn prediction_interval(
    stats: &SampleStatistics,
    level: SignificanceLevel,
) -> StatsResult<PredictionInterval> {
    stats.ensure_spread()?;

    let critical_value = t_critical_two_sided(level.alpha(), stats.df)?;
    let standard_error = stats.prediction_error();
    let margin = critical_value * standard_error;

    Ok(PredictionInterval {
        lower: stats.mean - margin,
        upper: stats.mean + margin,
        level: level.confidence(),
        standard_error,
        critical_value,
    })
}
