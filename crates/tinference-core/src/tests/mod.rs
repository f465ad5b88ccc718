//! Statistical hypothesis testing
//!
//! - One-sample mean t-test (two-tailed, one-tailed, auto direction)
//! - Prediction-value check against the prediction interval
//!
//! All decisions are made on the t scale (statistic vs critical value); the
//! p-value and the mu-scale bounds are derived views that agree with it by
//! construction.


use serde::{Deserialize, Serialize};

use crate::types::{Direction, Region, Tail};

/// Result of a one-sample mean test
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestResult {
    /// t statistic, (mean - mu0) / (S / sqrt(n))
    pub statistic: f64,
    /// Degrees of freedom
    pub df: f64,
    /// p-value under H0 for the resolved tail
    pub p_value: f64,
    /// Critical t value (positive magnitude)
    pub critical_value: f64,
    /// Significance alpha
    pub alpha: f64,
    /// Resolved test direction
    pub tail: Tail,
    /// Decision for the observed sample
    pub region: Region,
    /// Acceptance-region lower bound on the mu scale (-inf when unbounded)
    pub mu_lower: f64,
    /// Acceptance-region upper bound on the mu scale (+inf when unbounded)
    pub mu_upper: f64,
    /// Sample mean
    pub mean: f64,
    /// Hypothesized mean
    pub mu0: f64,
    /// Direction of effect, present only when H0 is rejected
    pub direction: Option<Direction>,
    /// Sample size
    pub n: usize,
    /// Test method
    pub method: String,
}

impl TestResult {
    /// Whether the test rejects H0
    pub fn rejects(&self) -> bool {
        matches!(self.region, Region::Critical)
    }
}
