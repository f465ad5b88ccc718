//! Student t distribution seam
//!
//! Thin wrappers around the statrs Student t implementation. Everything the
//! engine needs from the distribution goes through here: one- and two-sided
//! critical values, the CDF for p-values, and the location-scale form that
//! backs the density curves.

use statrs::distribution::{ContinuousCDF, StudentsT};

use crate::errors::{StatsError, StatsResult};

fn standard_t(df: f64) -> StatsResult<StudentsT> {
    StudentsT::new(0.0, 1.0, df).map_err(|_| StatsError::InvalidDegreesOfFreedom(df))
}

/// Critical t value for a two-sided test or symmetric interval
///
/// Inverse CDF at 1 - alpha/2, so alpha mass is split evenly between the
/// tails.
pub fn t_critical_two_sided(alpha: f64, df: f64) -> StatsResult<f64> {
    Ok(standard_t(df)?.inverse_cdf(1.0 - alpha / 2.0))
}

/// Critical t value for a one-sided test
///
/// Inverse CDF at 1 - alpha: the full alpha mass sits in the active tail.
pub fn t_critical_one_sided(alpha: f64, df: f64) -> StatsResult<f64> {
    Ok(standard_t(df)?.inverse_cdf(1.0 - alpha))
}

/// CDF of the standard t distribution with df degrees of freedom
pub fn t_cdf(t: f64, df: f64) -> StatsResult<f64> {
    Ok(standard_t(df)?.cdf(t))
}

/// Location-scale t distribution centered at `center` with scale `scale`
///
/// Used for density curves on the observation/mu axis; its pdf equals the
/// standard t pdf of (x - center)/scale divided by scale.
pub fn scaled_t(center: f64, scale: f64, df: f64) -> StatsResult<StudentsT> {
    if scale <= 0.0 {
        return Err(StatsError::DegenerateSample);
    }
    StudentsT::new(center, scale, df).map_err(|_| StatsError::InvalidDegreesOfFreedom(df))
}
