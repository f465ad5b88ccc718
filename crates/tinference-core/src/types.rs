//! Core value objects for the inference engine
//!
//! All inputs are immutable value types: each submission constructs fresh
//! values, nothing is mutated in place.

use serde::{Deserialize, Serialize};

use crate::errors::{StatsError, StatsResult};
use crate::input::DEFAULT_PREDICTED_VALUE;

/// An immutable sample of finite real observations
///
/// Invariants enforced at construction: at least 2 observations, all finite.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sample {
    values: Vec<f64>,
}

impl Sample {
    /// Construct a sample, validating size and finiteness
    pub fn new(values: Vec<f64>) -> StatsResult<Self> {
        if let Some(index) = values.iter().position(|v| !v.is_finite()) {
            return Err(StatsError::NonFiniteValue { index });
        }
        if values.len() < 2 {
            return Err(StatsError::InsufficientSample { n: values.len() });
        }
        Ok(Self { values })
    }

    /// Observations in submission order
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Sample size
    pub fn n(&self) -> usize {
        self.values.len()
    }
}

/// Significance level, restricted to the enumerated set the engine accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SignificanceLevel {
    /// 90% confidence, alpha = 0.10
    Ninety,
    /// 95% confidence, alpha = 0.05
    #[default]
    NinetyFive,
    /// 99% confidence, alpha = 0.01
    NinetyNine,
}

impl SignificanceLevel {
    /// All levels, ordered by decreasing alpha
    pub const ALL: [Self; 3] = [Self::Ninety, Self::NinetyFive, Self::NinetyNine];

    /// Significance alpha (full two-tailed mass; split per tail by the tests)
    pub fn alpha(self) -> f64 {
        match self {
            Self::Ninety => 0.10,
            Self::NinetyFive => 0.05,
            Self::NinetyNine => 0.01,
        }
    }

    /// Confidence level, 1 - alpha
    pub fn confidence(self) -> f64 {
        1.0 - self.alpha()
    }

    /// Display label as shown by the selector
    pub fn label(self) -> &'static str {
        match self {
            Self::Ninety => "90%",
            Self::NinetyFive => "95%",
            Self::NinetyNine => "99%",
        }
    }

    /// Map a selector label ("90%", "95%", "99%") to a level
    pub fn from_label(label: &str) -> StatsResult<Self> {
        match label.trim() {
            "90%" => Ok(Self::Ninety),
            "95%" => Ok(Self::NinetyFive),
            "99%" => Ok(Self::NinetyNine),
            other => Err(StatsError::InvalidSignificanceLabel(other.to_string())),
        }
    }

    /// Map a numeric alpha to a level, rejecting values outside the set
    pub fn from_alpha(alpha: f64) -> StatsResult<Self> {
        if alpha == 0.10 {
            Ok(Self::Ninety)
        } else if alpha == 0.05 {
            Ok(Self::NinetyFive)
        } else if alpha == 0.01 {
            Ok(Self::NinetyNine)
        } else {
            Err(StatsError::InvalidSignificance(alpha))
        }
    }
}

/// Tail-mode configuration for the mean test
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TailMode {
    /// Direction inferred from the sample: right when mean > mu0, else left
    #[default]
    Auto,
    TwoTailed,
    LeftTailed,
    RightTailed,
}

impl TailMode {
    /// Map a selector label to a mode
    pub fn from_label(label: &str) -> StatsResult<Self> {
        match label.trim() {
            "auto" => Ok(Self::Auto),
            "two-tailed" => Ok(Self::TwoTailed),
            "left-tailed" => Ok(Self::LeftTailed),
            "right-tailed" => Ok(Self::RightTailed),
            other => Err(StatsError::InvalidTailMode(other.to_string())),
        }
    }

    /// Resolve to a concrete tail for the given sample mean and mu0
    pub fn resolve(self, mean: f64, mu0: f64) -> Tail {
        match self {
            Self::TwoTailed => Tail::Two,
            Self::LeftTailed => Tail::Left,
            Self::RightTailed => Tail::Right,
            Self::Auto => {
                if mean > mu0 {
                    Tail::Right
                } else {
                    Tail::Left
                }
            }
        }
    }
}

/// A resolved test direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tail {
    Two,
    Left,
    Right,
}

impl Tail {
    pub fn label(self) -> &'static str {
        match self {
            Self::Two => "two-tailed",
            Self::Left => "left-tailed",
            Self::Right => "right-tailed",
        }
    }
}

/// Statistic-space partition for a decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Region {
    /// H0 is not rejected / the value is reasonable
    Acceptance,
    /// H0 is rejected / the value is unreasonable
    Critical,
}

impl Region {
    pub fn is_acceptance(self) -> bool {
        matches!(self, Self::Acceptance)
    }
}

/// Direction of effect, reported only when rejecting H0
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// mu > mu0
    Greater,
    /// mu < mu0
    Less,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Greater => write!(f, "μ > μ₀"),
            Self::Less => write!(f, "μ < μ₀"),
        }
    }
}

/// Null hypothesis about the population mean
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hypothesis {
    /// Hypothesized population mean mu0
    pub mu0: f64,
    /// Tail-mode configuration
    pub tail: TailMode,
}

impl Default for Hypothesis {
    fn default() -> Self {
        Self {
            mu0: 0.0,
            tail: TailMode::Auto,
        }
    }
}

/// A single predicted observation to check against the prediction interval
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionQuery {
    /// User-supplied predicted value
    pub predicted: f64,
}

impl Default for PredictionQuery {
    fn default() -> Self {
        Self {
            predicted: DEFAULT_PREDICTED_VALUE,
        }
    }
}
