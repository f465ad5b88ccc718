//! tinference-core: small-sample inference on the Student t distribution
//!
//! Pure computations turning a sample and configuration parameters into
//! descriptive statistics, confidence/prediction intervals, one-sample
//! hypothesis tests and density-curve descriptions for rendering.

pub mod descriptive;
pub mod display;
pub mod distribution;
pub mod engine;
pub mod errors;
pub mod input;
pub mod intervals;
pub mod plot;
pub mod tests;
pub mod types;

pub use descriptive::{describe, SampleStatistics};
pub use engine::{evaluate, EngineReport, EngineRequest};
pub use errors::{StatsError, StatsResult};
pub use input::parse_sample;
pub use intervals::{
    confidence_interval, prediction_interval, ConfidenceInterval, PredictionInterval,
};
pub use plot::{DensityCurve, DEFAULT_CURVE_POINTS};
pub use tests::mean::one_sample_t_test;
pub use tests::prediction::{prediction_check, PredictionResult};
pub use tests::TestResult;
pub use types::*;
