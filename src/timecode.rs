//! FCPXML time-code parsing.
//!
//! Final Cut Pro stores times as rational seconds: either a plain value such
//! as `"5s"` / `"2.5s"`, or a fraction of ticks over ticks-per-second such as
//! `"1001/30000s"`. This module converts both forms into `f64` seconds.

/// Errors produced while parsing a time-code token.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TimeCodeError {
    #[error("time code '{token}' has {count} components (expected 1 or 2)")]
    ComponentCount { token: String, count: usize },

    #[error("time code '{token}' contains non-numeric component '{component}'")]
    InvalidNumber { token: String, component: String },

    #[error("time code '{token}' has a zero denominator")]
    ZeroDenominator { token: String },

    #[error("time code '{token}' does not resolve to a finite value")]
    NotFinite { token: String },
}

/// Parse a time-code token into seconds.
///
/// Accepts `"<n>s"` and `"<a>/<b>s"`. The trailing `s` is optional and
/// surrounding whitespace is ignored.
pub fn parse_time_code(token: &str) -> Result<f64, TimeCodeError> {
    let trimmed = token.trim();
    let body = trimmed.strip_suffix('s').unwrap_or(trimmed);

    let parts: Vec<&str> = body.split('/').collect();
    let value = match parts.as_slice() {
        [value] => parse_component(token, value)?,
        [numerator, denominator] => {
            let numerator = parse_component(token, numerator)?;
            let denominator = parse_component(token, denominator)?;
            if denominator == 0.0 {
                return Err(TimeCodeError::ZeroDenominator {
                    token: token.to_string(),
                });
            }
            numerator / denominator
        }
        _ => {
            return Err(TimeCodeError::ComponentCount {
                token: token.to_string(),
                count: parts.len(),
            })
        }
    };

    if !value.is_finite() {
        return Err(TimeCodeError::NotFinite {
            token: token.to_string(),
        });
    }

    Ok(value)
}

/// Parse an optional time-code attribute, falling back to zero.
///
/// Missing and malformed attributes are both tolerated: the scan must never
/// abort on a bad `start` or `offset`. Malformed values are logged at debug
/// level so they can be traced with `-vv`.
pub fn parse_time_code_or_zero(token: Option<&str>) -> f64 {
    let Some(token) = token else {
        return 0.0;
    };

    match parse_time_code(token) {
        Ok(seconds) => seconds,
        Err(e) => {
            tracing::debug!(token, error = %e, "Malformed time code, using 0");
            0.0
        }
    }
}

fn parse_component(token: &str, component: &str) -> Result<f64, TimeCodeError> {
    component
        .trim()
        .parse::<f64>()
        .map_err(|_| TimeCodeError::InvalidNumber {
            token: token.to_string(),
            component: component.to_string(),
        })
}
