use std::time::Duration;

use serde::Serialize;

use super::errors::ActuationError;
use crate::geometry::Point;
use crate::matcher::MouseButton;

pub const DEFAULT_SETTLE_DELAY_MS: u64 = 150;
pub const DEFAULT_DEVICE_SETTLE_MS: u64 = 50;
pub const DEFAULT_EVENT_DELAY_MS: u64 = 20;

/// Delays around synthetic pointer input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActuationTiming {
    /// Between tearing down the hint surface and clicking
    pub settle_delay: Duration,
    /// After creating a virtual device, before its first event
    pub device_settle: Duration,
    /// After each move, press or release report
    pub event_delay: Duration,
}

impl Default for ActuationTiming {
    fn default() -> Self {
        Self {
            settle_delay: Duration::from_millis(DEFAULT_SETTLE_DELAY_MS),
            device_settle: Duration::from_millis(DEFAULT_DEVICE_SETTLE_MS),
            event_delay: Duration::from_millis(DEFAULT_EVENT_DELAY_MS),
        }
    }
}

/// Synthetic pointer input.
///
/// `point` is screen-absolute. Implementations clamp it to their screen.
pub trait Actuator {
    fn click(&mut self, point: Point, button: MouseButton) -> Result<(), ActuationError>;

    /// Wheel notches, passed to the device unchanged.
    fn scroll(&mut self, vertical: i32, horizontal: i32) -> Result<(), ActuationError>;
}

/// One call received by a [`RecordingActuator`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum ActuationCall {
    Click { point: Point, button: MouseButton },
    Scroll { vertical: i32, horizontal: i32 },
}
