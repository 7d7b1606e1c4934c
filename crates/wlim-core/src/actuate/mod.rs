//! Actuation boundary: synthetic clicks and wheel scrolls.

pub mod errors;
pub mod recording;
pub mod types;
#[cfg(target_os = "linux")]
mod uinput;

pub use errors::ActuationError;
pub use recording::RecordingActuator;
pub use types::{
    ActuationCall, ActuationTiming, Actuator, DEFAULT_DEVICE_SETTLE_MS, DEFAULT_EVENT_DELAY_MS,
    DEFAULT_SETTLE_DELAY_MS,
};
#[cfg(target_os = "linux")]
pub use uinput::UinputActuator;

use crate::geometry::ScreenBounds;

/// The platform's real pointer backend.
#[cfg(target_os = "linux")]
pub fn device_actuator(
    screen: ScreenBounds,
    timing: ActuationTiming,
) -> Result<Box<dyn Actuator>, ActuationError> {
    Ok(Box::new(UinputActuator::new(screen, timing)))
}

#[cfg(not(target_os = "linux"))]
pub fn device_actuator(
    _screen: ScreenBounds,
    _timing: ActuationTiming,
) -> Result<Box<dyn Actuator>, ActuationError> {
    Err(ActuationError::Unsupported {
        platform: std::env::consts::OS,
    })
}
