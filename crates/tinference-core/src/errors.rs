use thiserror::Error;

/// Errors that can occur during statistical computations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StatsError {
    // Input parsing errors
    #[error("Invalid token: '{token}' is not a finite number")]
    InvalidToken { token: String },

    #[error("Empty sample: no numeric values found")]
    EmptySample,

    // Input validation errors
    #[error("Insufficient sample: {n} observations (need at least 2)")]
    InsufficientSample { n: usize },

    #[error("Non-finite sample value at position {index}")]
    NonFiniteValue { index: usize },

    #[error("Degenerate sample: standard deviation is zero, no test or interval is defined")]
    DegenerateSample,

    // Configuration errors
    #[error("Invalid significance level: {0} (must be one of 0.10, 0.05, 0.01)")]
    InvalidSignificance(f64),

    #[error("Invalid significance label: '{0}' (must be one of 90%, 95%, 99%)")]
    InvalidSignificanceLabel(String),

    #[error("Invalid tail mode: '{0}' (must be one of auto, two-tailed, left-tailed, right-tailed)")]
    InvalidTailMode(String),

    // Numerical errors
    #[error("Invalid degrees of freedom: {0}")]
    InvalidDegreesOfFreedom(f64),
}

/// Result type for statistical operations
pub type StatsResult<T> = Result<T, StatsError>;
