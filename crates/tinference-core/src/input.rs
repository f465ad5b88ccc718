//! Raw input parsing and submission defaults
//!
//! The host layer hands the engine raw text; everything here turns that text
//! into validated value objects. A single bad token fails the whole
//! submission, no partial sample is ever accepted.

use crate::errors::{StatsError, StatsResult};
use crate::types::Sample;

/// Hypothesized mean assumed when the input is left unset
pub const DEFAULT_MU0: f64 = 0.0;

/// Predicted value assumed when the input is left unset
pub const DEFAULT_PREDICTED_VALUE: f64 = 95.0;

/// Parse comma- and/or whitespace-separated numeric text into a sample
///
/// Commas are normalized to whitespace, so "1, 2, 3", "1 2 3" and "1,2 3"
/// are all accepted. Tokens that do not parse as finite numbers invalidate
/// the submission.
pub fn parse_sample(text: &str) -> StatsResult<Sample> {
    let normalized = text.replace(',', " ");
    let mut values = Vec::new();

    for token in normalized.split_whitespace() {
        let value: f64 = token.parse().map_err(|_| StatsError::InvalidToken {
            token: token.to_string(),
        })?;
        // "NaN" and "inf" parse as f64 but are not valid observations
        if !value.is_finite() {
            return Err(StatsError::InvalidToken {
                token: token.to_string(),
            });
        }
        values.push(value);
    }

    if values.is_empty() {
        return Err(StatsError::EmptySample);
    }

    Sample::new(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_comma_separated() {
        let sample = parse_sample("82, 85, 90, 87, 88, 91, 84").unwrap();
        assert_eq!(sample.n(), 7);
        assert_eq!(sample.values()[0], 82.0);
        assert_eq!(sample.values()[6], 84.0);
    }

    #[test]
    fn test_parse_whitespace_and_mixed_separators() {
        assert_eq!(parse_sample("1 2 3").unwrap().n(), 3);
        assert_eq!(parse_sample("1,2 3,\t4\n5").unwrap().n(), 5);
        assert_eq!(parse_sample(" 1.5 , -2.25 ,").unwrap().values(), &[1.5, -2.25]);
    }

    #[test]
    fn test_parse_rejects_bad_token() {
        let err = parse_sample("1, 2, abc, 4").unwrap_err();
        assert_eq!(
            err,
            StatsError::InvalidToken {
                token: "abc".to_string()
            }
        );
    }

    #[test]
    fn test_parse_rejects_non_finite_tokens() {
        assert!(matches!(
            parse_sample("1, NaN, 3"),
            Err(StatsError::InvalidToken { .. })
        ));
        assert!(matches!(
            parse_sample("1, inf, 3"),
            Err(StatsError::InvalidToken { .. })
        ));
    }

    #[test]
    fn test_parse_empty_input() {
        assert_eq!(parse_sample("").unwrap_err(), StatsError::EmptySample);
        assert_eq!(parse_sample(" , ,, ").unwrap_err(), StatsError::EmptySample);
    }

    #[test]
    fn test_parse_single_value_is_insufficient() {
        assert_eq!(
            parse_sample("42").unwrap_err(),
            StatsError::InsufficientSample { n: 1 }
        );
    }
}
