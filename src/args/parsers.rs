use crate::error::ConfigError;

/// Parses the `--delay` argument.
///
/// # Errors
///
/// Returns an error when the value is not a finite, non-negative number.
pub fn parse_delay(value: &str) -> Result<f64, ConfigError> {
    let delay: f64 = value
        .parse()
        .map_err(|source| ConfigError::InvalidDelayNumber { source })?;
    if !delay.is_finite() || delay < 0.0 {
        return Err(ConfigError::InvalidDelay);
    }
    Ok(delay)
}
