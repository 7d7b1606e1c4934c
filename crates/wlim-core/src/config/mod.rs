//! # Configuration System
//!
//! Hierarchical TOML configuration for the heuristic constants.
//!
//! ## Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `<config_dir>/wlim/config.toml`
//! 3. **Explicit config** - `--config <path>`
//!
//! ## Loading Configuration
//!
//! ```rust,no_run
//! use wlim_core::config::WlimConfig;
//!
//! fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = WlimConfig::load_hierarchy(None)?;
//!     let limits = config.collector_limits();
//!     Ok(())
//! }
//! ```

pub mod defaults;
pub mod loading;
pub mod types;
pub mod validation;

pub use types::{ActuationConfig, CollectorConfig, GeometryConfig, MatcherConfig, WlimConfig};
pub use validation::validate_config;

use std::path::Path;

use crate::errors::ConfigError;

impl WlimConfig {
    /// Load configuration from the hierarchy of config files.
    ///
    /// See [`loading::load_hierarchy`] for details.
    pub fn load_hierarchy(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        loading::load_hierarchy(explicit)
    }

    /// Validate the configuration.
    ///
    /// See [`validation::validate_config`] for details.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validation::validate_config(self)
    }
}
