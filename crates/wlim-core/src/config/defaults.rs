//! Documented defaults for every optional config field, and conversion into
//! the tuning structs the engine consumes.

use std::time::Duration;

use crate::a11y::collector::{
    CollectorLimits, DEFAULT_DEDUP_RADIUS, DEFAULT_DEDUP_WINDOW, DEFAULT_MAX_DEPTH,
    DEFAULT_MAX_TARGETS,
};
use crate::actuate::{
    ActuationTiming, DEFAULT_DEVICE_SETTLE_MS, DEFAULT_EVENT_DELAY_MS, DEFAULT_SETTLE_DELAY_MS,
};
use crate::config::types::{
    ActuationConfig, CollectorConfig, GeometryConfig, MatcherConfig, WlimConfig,
};
use crate::feed::{FALLBACK_SCREEN, types::MAX_TITLE_CHARS};
use crate::geometry::{Point, ScreenBounds};
use crate::matcher::DEFAULT_MAX_TYPED;
use crate::normalize::handler::{
    DEFAULT_ANCHOR_INSET, DEFAULT_BROKEN_RATIO, DEFAULT_GRID_MARGIN, DEFAULT_RELATIVE_RATIO,
};
use crate::normalize::titles::{DEFAULT_TITLE_COMMON_MIN, DEFAULT_TITLE_PREFIX_MIN};
use crate::normalize::{RepairTuning, TitleRules};

impl CollectorConfig {
    /// Returns the walk depth ceiling, defaulting to 30.
    pub fn max_depth(&self) -> usize {
        self.max_depth.unwrap_or(DEFAULT_MAX_DEPTH)
    }

    /// Returns the target ceiling, defaulting to 1024.
    pub fn max_targets(&self) -> usize {
        self.max_targets.unwrap_or(DEFAULT_MAX_TARGETS)
    }

    /// Returns the dedup window, defaulting to 10.
    pub fn dedup_window(&self) -> usize {
        self.dedup_window.unwrap_or(DEFAULT_DEDUP_WINDOW)
    }

    /// Returns the dedup radius, defaulting to 4.
    pub fn dedup_radius(&self) -> i32 {
        self.dedup_radius.unwrap_or(DEFAULT_DEDUP_RADIUS)
    }

    pub fn limits(&self) -> CollectorLimits {
        CollectorLimits {
            max_depth: self.max_depth(),
            max_targets: self.max_targets(),
            dedup_window: self.dedup_window(),
            dedup_radius: self.dedup_radius(),
        }
    }
}

impl GeometryConfig {
    /// Returns the broken-coordinate ratio, defaulting to 0.8.
    pub fn broken_ratio(&self) -> f64 {
        self.broken_ratio.unwrap_or(DEFAULT_BROKEN_RATIO)
    }

    /// Returns the window-relative ratio, defaulting to 0.8.
    pub fn relative_ratio(&self) -> f64 {
        self.relative_ratio.unwrap_or(DEFAULT_RELATIVE_RATIO)
    }

    /// Returns the grid margin, defaulting to 30.
    pub fn grid_margin(&self) -> i32 {
        self.grid_margin.unwrap_or(DEFAULT_GRID_MARGIN)
    }

    /// Returns the label inset, defaulting to (16, 8).
    pub fn anchor_inset(&self) -> Point {
        Point::new(
            self.anchor_inset_x.unwrap_or(DEFAULT_ANCHOR_INSET.x),
            self.anchor_inset_y.unwrap_or(DEFAULT_ANCHOR_INSET.y),
        )
    }

    pub fn title_rules(&self) -> TitleRules {
        TitleRules {
            prefix_min: self.title_prefix_min.unwrap_or(DEFAULT_TITLE_PREFIX_MIN),
            common_min: self.title_common_min.unwrap_or(DEFAULT_TITLE_COMMON_MIN),
        }
    }

    /// Returns the feed title length cap, defaulting to 255.
    pub fn title_max_len(&self) -> usize {
        self.title_max_len.unwrap_or(MAX_TITLE_CHARS)
    }

    pub fn tuning(&self) -> RepairTuning {
        RepairTuning {
            broken_ratio: self.broken_ratio(),
            relative_ratio: self.relative_ratio(),
            grid_margin: self.grid_margin(),
            anchor_inset: self.anchor_inset(),
            titles: self.title_rules(),
        }
    }
}

impl MatcherConfig {
    /// Returns the typed-prefix cap, defaulting to 8.
    pub fn max_typed(&self) -> usize {
        self.max_typed.unwrap_or(DEFAULT_MAX_TYPED)
    }
}

impl ActuationConfig {
    pub fn settle_delay_ms(&self) -> u64 {
        self.settle_delay_ms.unwrap_or(DEFAULT_SETTLE_DELAY_MS)
    }

    pub fn device_settle_ms(&self) -> u64 {
        self.device_settle_ms.unwrap_or(DEFAULT_DEVICE_SETTLE_MS)
    }

    pub fn event_delay_ms(&self) -> u64 {
        self.event_delay_ms.unwrap_or(DEFAULT_EVENT_DELAY_MS)
    }

    pub fn timing(&self) -> ActuationTiming {
        ActuationTiming {
            settle_delay: Duration::from_millis(self.settle_delay_ms()),
            device_settle: Duration::from_millis(self.device_settle_ms()),
            event_delay: Duration::from_millis(self.event_delay_ms()),
        }
    }

    /// Screen extent used when the monitor feed is empty, defaulting to 1920x1080.
    pub fn fallback_screen(&self) -> ScreenBounds {
        ScreenBounds::new(
            self.fallback_screen_width.unwrap_or(FALLBACK_SCREEN.width),
            self.fallback_screen_height.unwrap_or(FALLBACK_SCREEN.height),
        )
    }
}

impl WlimConfig {
    pub fn collector_limits(&self) -> CollectorLimits {
        self.collector.limits()
    }

    pub fn repair_tuning(&self) -> RepairTuning {
        self.geometry.tuning()
    }

    pub fn max_typed(&self) -> usize {
        self.matcher.max_typed()
    }

    pub fn actuation_timing(&self) -> ActuationTiming {
        self.actuation.timing()
    }
}
