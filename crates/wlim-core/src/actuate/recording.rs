use tracing::info;

use super::errors::ActuationError;
use super::types::{ActuationCall, Actuator};
use crate::geometry::{Point, ScreenBounds};
use crate::matcher::MouseButton;

/// Actuator that only records what it was asked to do.
///
/// Clamps click points the same way the device backend does.
#[derive(Debug, Clone)]
pub struct RecordingActuator {
    screen: ScreenBounds,
    calls: Vec<ActuationCall>,
}

impl RecordingActuator {
    pub fn new(screen: ScreenBounds) -> Self {
        Self {
            screen,
            calls: Vec::new(),
        }
    }

    pub fn calls(&self) -> &[ActuationCall] {
        &self.calls
    }

    pub fn into_calls(self) -> Vec<ActuationCall> {
        self.calls
    }
}

impl Actuator for RecordingActuator {
    fn click(&mut self, point: Point, button: MouseButton) -> Result<(), ActuationError> {
        let point = self.screen.clamp(point);
        info!(
            event = "core.actuate.click_recorded",
            x = point.x,
            y = point.y,
            button = button.as_str()
        );
        self.calls.push(ActuationCall::Click { point, button });
        Ok(())
    }

    fn scroll(&mut self, vertical: i32, horizontal: i32) -> Result<(), ActuationError> {
        info!(
            event = "core.actuate.scroll_recorded",
            vertical = vertical,
            horizontal = horizontal
        );
        self.calls.push(ActuationCall::Scroll {
            vertical,
            horizontal,
        });
        Ok(())
    }
}
