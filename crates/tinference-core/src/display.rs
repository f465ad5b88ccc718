//! Display formatting for engine outputs
//!
//! Formatting only. Decisions always compare the full-precision values; the
//! thresholded p-value rendering exists so near-zero output does not suggest
//! more precision than the computation carries.

/// Render a p-value for display
pub fn format_p_value(p: f64) -> String {
    if p < 1e-6 {
        "<1e-6".to_string()
    } else if p < 1e-3 {
        "<0.001".to_string()
    } else {
        format!("{p:.6}")
    }
}

/// Render a descriptive statistic or bound with 4-decimal rounding
pub fn format_stat(value: f64) -> String {
    format!("{value:.4}")
}
