//! Configuration type definitions.
//!
//! Every field is optional in the file. Accessors in [`super::defaults`]
//! fill in the documented defaults.
//!
//! # Example Configuration
//!
//! ```toml
//! [collector]
//! max_depth = 40
//! dedup_radius = 6
//!
//! [geometry]
//! broken_ratio = 0.9
//! grid_margin = 24
//!
//! [matcher]
//! max_typed = 4
//!
//! [actuation]
//! settle_delay_ms = 200
//! ```

use serde::{Deserialize, Serialize};

/// Configuration loaded from TOML config files.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WlimConfig {
    #[serde(default)]
    pub collector: CollectorConfig,

    #[serde(default)]
    pub geometry: GeometryConfig,

    #[serde(default)]
    pub matcher: MatcherConfig,

    #[serde(default)]
    pub actuation: ActuationConfig,
}

/// Accessible-tree walk limits.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CollectorConfig {
    /// Deepest level below a window root that is inspected.
    /// Default: 30.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<usize>,

    /// Most targets admitted per discovery.
    /// Default: 1024.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_targets: Option<usize>,

    /// Number of recent targets checked for near-duplicates.
    /// Default: 10.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dedup_window: Option<usize>,

    /// Per-axis distance at which two targets are the same.
    /// Default: 4.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dedup_radius: Option<i32>,
}

/// Coordinate repair heuristics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeometryConfig {
    /// Share of zero-origin targets that marks a window's coordinates broken.
    /// Default: 0.8.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub broken_ratio: Option<f64>,

    /// Share of in-window targets that marks coordinates window-relative.
    /// Default: 0.8.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relative_ratio: Option<f64>,

    /// Grid inset from the window edges.
    /// Default: 30.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid_margin: Option<i32>,

    /// Label offset from an element's left edge.
    /// Default: 16.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anchor_inset_x: Option<i32>,

    /// Label offset from an element's top edge.
    /// Default: 8.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anchor_inset_y: Option<i32>,

    /// Default: 10.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_prefix_min: Option<usize>,

    /// Default: 20.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_common_min: Option<usize>,

    /// Longest window title read from the geometry feed.
    /// Default: 255.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_max_len: Option<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatcherConfig {
    /// Most characters that can be typed before further letters are ignored.
    /// Default: 8.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_typed: Option<usize>,
}

/// Pointer injection timing and screen fallback.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActuationConfig {
    /// Pause between hiding the hints and clicking.
    /// Default: 150ms.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settle_delay_ms: Option<u64>,

    /// Pause after creating the virtual pointer.
    /// Default: 50ms.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_settle_ms: Option<u64>,

    /// Pause after each move, press or release.
    /// Default: 20ms.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_delay_ms: Option<u64>,

    /// Default: 1920.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_screen_width: Option<i32>,

    /// Default: 1080.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_screen_height: Option<i32>,
}
