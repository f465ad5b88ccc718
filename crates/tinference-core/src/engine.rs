//! Engine facade
//!
//! One full, sequential recomputation pass per submission: descriptive
//! statistics, confidence interval, two-tailed and directional mean tests,
//! and the optional prediction check, each with its density curve.
//!
//! The engine is stateless: identical requests produce bit-identical
//! reports, errors are scoped to the current submission, and nothing leaks
//! across evaluations.

use tracing::debug;

use crate::descriptive::{describe, SampleStatistics};
use crate::errors::StatsResult;
use crate::intervals::{confidence_interval, ConfidenceInterval};
use crate::plot::DensityCurve;
use crate::tests::mean::one_sample_t_test;
use crate::tests::prediction::{prediction_check, PredictionResult};
use crate::tests::TestResult;
use crate::types::{Hypothesis, PredictionQuery, Sample, SignificanceLevel, TailMode};

/// One user submission
#[derive(Debug, Clone)]
pub struct EngineRequest {
    /// Sample under analysis
    pub sample: Sample,
    /// Significance level shared by all computations in the pass
    pub significance: SignificanceLevel,
    /// Hypothesized mean and tail mode for the mean tests
    pub hypothesis: Hypothesis,
    /// Optional predicted observation to check
    pub prediction: Option<PredictionQuery>,
}

impl EngineRequest {
    /// Request with default significance and hypothesis, no prediction query
    pub fn new(sample: Sample) -> Self {
        Self {
            sample,
            significance: SignificanceLevel::default(),
            hypothesis: Hypothesis::default(),
            prediction: None,
        }
    }
}

/// Everything the presentation layer needs to render one submission
#[derive(Debug, Clone)]
pub struct EngineReport {
    /// Descriptive statistics of the sample
    pub statistics: SampleStatistics,
    /// Confidence interval for the population mean
    pub confidence: ConfidenceInterval,
    /// Two-tailed mean test
    pub two_tailed: TestResult,
    /// Density curve for the two-tailed test
    pub two_tailed_curve: DensityCurve,
    /// Directional mean test (explicit tail, or auto-resolved)
    pub directional: TestResult,
    /// Density curve for the directional test
    pub directional_curve: DensityCurve,
    /// Prediction check, when a query was supplied
    pub prediction: Option<PredictionResult>,
    /// Density curve for the prediction check
    pub prediction_curve: Option<DensityCurve>,
}

/// Run one full evaluation pass over a submission
pub fn evaluate(request: &EngineRequest) -> StatsResult<EngineReport> {
    let statistics = describe(&request.sample);
    debug!(
        n = statistics.n,
        mean = statistics.mean,
        alpha = request.significance.alpha(),
        mu0 = request.hypothesis.mu0,
        "evaluating submission"
    );

    let confidence = confidence_interval(&statistics, request.significance)?;

    let two_tailed = one_sample_t_test(
        &statistics,
        &Hypothesis {
            mu0: request.hypothesis.mu0,
            tail: TailMode::TwoTailed,
        },
        request.significance,
    )?;
    let two_tailed_curve = DensityCurve::for_test(&statistics, &two_tailed)?;

    // the report always carries a directional framing next to the two-tailed
    // one; a TwoTailed request falls back to Auto here
    let directional_mode = match request.hypothesis.tail {
        TailMode::TwoTailed => TailMode::Auto,
        mode => mode,
    };
    let directional = one_sample_t_test(
        &statistics,
        &Hypothesis {
            mu0: request.hypothesis.mu0,
            tail: directional_mode,
        },
        request.significance,
    )?;
    let directional_curve = DensityCurve::for_test(&statistics, &directional)?;

    let (prediction, prediction_curve) = match &request.prediction {
        Some(query) => {
            let result = prediction_check(&statistics, query, request.significance)?;
            let curve = DensityCurve::for_prediction(&statistics, &result)?;
            (Some(result), Some(curve))
        }
        None => (None, None),
    };

    debug!(
        two_tailed = ?two_tailed.region,
        directional = ?directional.region,
        prediction = ?prediction.as_ref().map(|p| p.region),
        "submission evaluated"
    );

    Ok(EngineReport {
        statistics,
        confidence,
        two_tailed,
        two_tailed_curve,
        directional,
        directional_curve,
        prediction,
        prediction_curve,
    })
}
