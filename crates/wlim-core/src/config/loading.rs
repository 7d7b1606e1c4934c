//! Configuration loading and merging logic.
//!
//! # Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `<config_dir>/wlim/config.toml`
//! 3. **Explicit config** - the file passed with `--config`

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::types::{
    ActuationConfig, CollectorConfig, GeometryConfig, MatcherConfig, WlimConfig,
};
use crate::config::validation::validate_config;
use crate::errors::ConfigError;

/// Location of the per-user config file, if the platform has a config dir.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("wlim").join("config.toml"))
}

/// Load configuration from the hierarchy of config files.
///
/// # Errors
///
/// A missing user config is not an error. A missing explicit config, any
/// parse failure, or a validation failure is.
pub fn load_hierarchy(explicit: Option<&Path>) -> Result<WlimConfig, ConfigError> {
    load_hierarchy_from(user_config_path().as_deref(), explicit)
}

/// [`load_hierarchy`] with the user config location supplied by the caller.
pub fn load_hierarchy_from(
    user_path: Option<&Path>,
    explicit: Option<&Path>,
) -> Result<WlimConfig, ConfigError> {
    let mut config = WlimConfig::default();

    if let Some(path) = user_path {
        match load_config_file(path) {
            Ok(user_config) => {
                debug!(event = "core.config.user_loaded", path = %path.display());
                config = merge_configs(config, user_config);
            }
            Err(ConfigError::ConfigNotFound { .. }) => {}
            Err(e) => return Err(e),
        }
    }

    if let Some(path) = explicit {
        let explicit_config = load_config_file(path)?;
        debug!(event = "core.config.explicit_loaded", path = %path.display());
        config = merge_configs(config, explicit_config);
    }

    validate_config(&config)?;

    info!(event = "core.config.load_completed");
    Ok(config)
}

/// Load a configuration file from the given path.
pub fn load_config_file(path: &Path) -> Result<WlimConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ConfigError::ConfigNotFound {
                path: path.display().to_string(),
            }
        } else {
            ConfigError::IoError { source: e }
        }
    })?;
    toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Merge two configurations, with override_config taking precedence.
///
/// Each field is taken from the override when it is set there.
pub fn merge_configs(base: WlimConfig, override_config: WlimConfig) -> WlimConfig {
    let (b, o) = (base, override_config);
    WlimConfig {
        collector: CollectorConfig {
            max_depth: o.collector.max_depth.or(b.collector.max_depth),
            max_targets: o.collector.max_targets.or(b.collector.max_targets),
            dedup_window: o.collector.dedup_window.or(b.collector.dedup_window),
            dedup_radius: o.collector.dedup_radius.or(b.collector.dedup_radius),
        },
        geometry: GeometryConfig {
            broken_ratio: o.geometry.broken_ratio.or(b.geometry.broken_ratio),
            relative_ratio: o.geometry.relative_ratio.or(b.geometry.relative_ratio),
            grid_margin: o.geometry.grid_margin.or(b.geometry.grid_margin),
            anchor_inset_x: o.geometry.anchor_inset_x.or(b.geometry.anchor_inset_x),
            anchor_inset_y: o.geometry.anchor_inset_y.or(b.geometry.anchor_inset_y),
            title_prefix_min: o.geometry.title_prefix_min.or(b.geometry.title_prefix_min),
            title_common_min: o.geometry.title_common_min.or(b.geometry.title_common_min),
            title_max_len: o.geometry.title_max_len.or(b.geometry.title_max_len),
        },
        matcher: MatcherConfig {
            max_typed: o.matcher.max_typed.or(b.matcher.max_typed),
        },
        actuation: ActuationConfig {
            settle_delay_ms: o.actuation.settle_delay_ms.or(b.actuation.settle_delay_ms),
            device_settle_ms: o.actuation.device_settle_ms.or(b.actuation.device_settle_ms),
            event_delay_ms: o.actuation.event_delay_ms.or(b.actuation.event_delay_ms),
            fallback_screen_width: o
                .actuation
                .fallback_screen_width
                .or(b.actuation.fallback_screen_width),
            fallback_screen_height: o
                .actuation
                .fallback_screen_height
                .or(b.actuation.fallback_screen_height),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_no_files_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("absent.toml");
        let config = load_hierarchy_from(Some(&missing), None).unwrap();
        assert_eq!(config, WlimConfig::default());

        let config = load_hierarchy_from(None, None).unwrap();
        assert_eq!(config, WlimConfig::default());
    }

    #[test]
    fn test_explicit_overrides_user() {
        let dir = TempDir::new().unwrap();
        let user = write(
            &dir,
            "user.toml",
            "[collector]\nmax_depth = 12\nmax_targets = 100\n",
        );
        let explicit = write(&dir, "explicit.toml", "[collector]\nmax_targets = 50\n");

        let config = load_hierarchy_from(Some(&user), Some(&explicit)).unwrap();
        assert_eq!(config.collector.max_depth, Some(12));
        assert_eq!(config.collector.max_targets, Some(50));
    }

    #[test]
    fn test_missing_explicit_is_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.toml");
        let error = load_hierarchy_from(None, Some(&missing)).unwrap_err();
        assert!(matches!(error, ConfigError::ConfigNotFound { .. }));
    }

    #[test]
    fn test_parse_error_in_user_config() {
        let dir = TempDir::new().unwrap();
        let user = write(&dir, "user.toml", "[collector\nmax_depth = ");
        let error = load_hierarchy_from(Some(&user), None).unwrap_err();
        assert!(matches!(error, ConfigError::ConfigParseError { .. }));
        assert!(error.to_string().contains("user.toml"));
    }

    #[test]
    fn test_type_mismatch_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let user = write(&dir, "user.toml", "[matcher]\nmax_typed = \"eight\"\n");
        let error = load_config_file(&user).unwrap_err();
        assert!(matches!(error, ConfigError::ConfigParseError { .. }));
    }

    #[test]
    fn test_merged_result_is_validated() {
        let dir = TempDir::new().unwrap();
        let explicit = write(&dir, "explicit.toml", "[geometry]\nbroken_ratio = 2.0\n");
        let error = load_hierarchy_from(None, Some(&explicit)).unwrap_err();
        assert!(matches!(error, ConfigError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_merge_keeps_base_when_override_unset() {
        let base = WlimConfig {
            matcher: MatcherConfig { max_typed: Some(3) },
            ..Default::default()
        };
        let merged = merge_configs(base, WlimConfig::default());
        assert_eq!(merged.matcher.max_typed, Some(3));
    }

    #[test]
    fn test_user_config_path_shape() {
        if let Some(path) = user_config_path() {
            assert!(path.ends_with("wlim/config.toml"));
        }
    }
}
