use crate::config::types::WlimConfig;
use crate::errors::ConfigError;

fn invalid(message: String) -> ConfigError {
    ConfigError::InvalidConfiguration { message }
}

fn check_ratio(name: &str, value: Option<f64>) -> Result<(), ConfigError> {
    match value {
        Some(ratio) if !(ratio > 0.0 && ratio <= 1.0) => Err(invalid(format!(
            "{name} must be greater than 0 and at most 1, got {ratio}"
        ))),
        _ => Ok(()),
    }
}

fn check_positive(name: &str, value: Option<usize>) -> Result<(), ConfigError> {
    match value {
        Some(0) => Err(invalid(format!("{name} must be at least 1"))),
        _ => Ok(()),
    }
}

fn check_non_negative(name: &str, value: Option<i32>) -> Result<(), ConfigError> {
    match value {
        Some(v) if v < 0 => Err(invalid(format!("{name} must not be negative, got {v}"))),
        _ => Ok(()),
    }
}

/// Validate the configuration.
///
/// # Errors
///
/// Returns `ConfigError::InvalidConfiguration` naming the first offending field.
pub fn validate_config(config: &WlimConfig) -> Result<(), ConfigError> {
    check_positive("collector.max_depth", config.collector.max_depth)?;
    check_positive("collector.max_targets", config.collector.max_targets)?;
    check_non_negative("collector.dedup_radius", config.collector.dedup_radius)?;

    check_ratio("geometry.broken_ratio", config.geometry.broken_ratio)?;
    check_ratio("geometry.relative_ratio", config.geometry.relative_ratio)?;
    check_non_negative("geometry.grid_margin", config.geometry.grid_margin)?;
    check_non_negative("geometry.anchor_inset_x", config.geometry.anchor_inset_x)?;
    check_non_negative("geometry.anchor_inset_y", config.geometry.anchor_inset_y)?;

    check_positive("matcher.max_typed", config.matcher.max_typed)?;

    check_positive(
        "actuation.fallback_screen_width",
        config.actuation.fallback_screen_width.map(|w| w.max(0) as usize),
    )?;
    check_positive(
        "actuation.fallback_screen_height",
        config.actuation.fallback_screen_height.map(|h| h.max(0) as usize),
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(toml_str: &str) -> WlimConfig {
        toml::from_str(toml_str).unwrap()
    }

    fn message(config: &WlimConfig) -> String {
        validate_config(config).unwrap_err().to_string()
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&WlimConfig::default()).is_ok());
    }

    #[test]
    fn test_ratio_bounds() {
        assert!(message(&parse("[geometry]\nbroken_ratio = 0.0\n")).contains("broken_ratio"));
        assert!(message(&parse("[geometry]\nrelative_ratio = 1.5\n")).contains("relative_ratio"));
        assert!(message(&parse("[geometry]\nbroken_ratio = nan\n")).contains("broken_ratio"));
        assert!(validate_config(&parse("[geometry]\nbroken_ratio = 1.0\n")).is_ok());
    }

    #[test]
    fn test_zero_ceilings_rejected() {
        assert!(message(&parse("[collector]\nmax_depth = 0\n")).contains("max_depth"));
        assert!(message(&parse("[collector]\nmax_targets = 0\n")).contains("max_targets"));
        assert!(message(&parse("[matcher]\nmax_typed = 0\n")).contains("max_typed"));
    }

    #[test]
    fn test_negative_distances_rejected() {
        assert!(message(&parse("[collector]\ndedup_radius = -1\n")).contains("dedup_radius"));
        assert!(message(&parse("[geometry]\ngrid_margin = -5\n")).contains("grid_margin"));
        assert!(validate_config(&parse("[collector]\ndedup_radius = 0\n")).is_ok());
    }

    #[test]
    fn test_fallback_screen_must_be_positive() {
        assert!(
            message(&parse("[actuation]\nfallback_screen_width = 0\n"))
                .contains("fallback_screen_width")
        );
    }

    #[test]
    fn test_error_is_invalid_configuration() {
        let error = validate_config(&parse("[matcher]\nmax_typed = 0\n")).unwrap_err();
        assert!(matches!(error, ConfigError::InvalidConfiguration { .. }));
    }
}
