//! Virtual pointer backend over `/dev/uinput`.
//!
//! Every call creates a short-lived device, sends its events and drops the
//! device again. Clicks use an absolute pointer whose axes span the screen so
//! the compositor maps device units one-to-one onto pixels.

use std::io;
use std::thread;

use evdev::uinput::{VirtualDevice, VirtualDeviceBuilder};
use evdev::{
    AbsInfo, AbsoluteAxisType, AttributeSet, BusType, EventType, InputEvent, InputId, Key,
    RelativeAxisType, UinputAbsSetup,
};
use tracing::{debug, info};

use super::errors::ActuationError;
use super::types::{ActuationTiming, Actuator};
use crate::geometry::{Point, ScreenBounds};
use crate::matcher::MouseButton;

const UINPUT_PATH: &str = "/dev/uinput";

const VENDOR_ID: u16 = 0x1234;
const POINTER_PRODUCT_ID: u16 = 0x5678;
const WHEEL_PRODUCT_ID: u16 = 0x5679;

fn button_key(button: MouseButton) -> Key {
    match button {
        MouseButton::Primary => Key::BTN_LEFT,
        MouseButton::Secondary => Key::BTN_RIGHT,
        MouseButton::Middle => Key::BTN_MIDDLE,
    }
}

/// Axis range `0..=extent-1`, so device units equal pixels
fn axis_info(extent: i32) -> AbsInfo {
    AbsInfo::new(0, 0, extent.saturating_sub(1).max(0), 0, 0, 0)
}

/// The three event batches of one click: move, press, release.
///
/// The device appends a sync report to every batch.
fn click_batches(point: Point, button: MouseButton) -> [Vec<InputEvent>; 3] {
    let code = button_key(button).code();
    [
        vec![
            InputEvent::new(EventType::ABSOLUTE, AbsoluteAxisType::ABS_X.0, point.x),
            InputEvent::new(EventType::ABSOLUTE, AbsoluteAxisType::ABS_Y.0, point.y),
        ],
        vec![InputEvent::new(EventType::KEY, code, 1)],
        vec![InputEvent::new(EventType::KEY, code, 0)],
    ]
}

fn scroll_batch(vertical: i32, horizontal: i32) -> Vec<InputEvent> {
    let mut events = Vec::new();
    if vertical != 0 {
        events.push(InputEvent::new(
            EventType::RELATIVE,
            RelativeAxisType::REL_WHEEL.0,
            vertical,
        ));
    }
    if horizontal != 0 {
        events.push(InputEvent::new(
            EventType::RELATIVE,
            RelativeAxisType::REL_HWHEEL.0,
            horizontal,
        ));
    }
    events
}

fn open_builder() -> Result<VirtualDeviceBuilder<'static>, ActuationError> {
    VirtualDeviceBuilder::new().map_err(|source| ActuationError::DeviceOpenFailed {
        path: UINPUT_PATH.to_string(),
        source,
    })
}

fn setup_failed(step: &'static str) -> impl FnOnce(io::Error) -> ActuationError {
    move |source| ActuationError::DeviceSetupFailed { step, source }
}

/// Pointer injection through the kernel's uinput module
#[derive(Debug, Clone)]
pub struct UinputActuator {
    screen: ScreenBounds,
    timing: ActuationTiming,
}

impl UinputActuator {
    pub fn new(screen: ScreenBounds, timing: ActuationTiming) -> Self {
        Self { screen, timing }
    }

    pub fn screen(&self) -> ScreenBounds {
        self.screen
    }

    /// Wait for the compositor to pick up a freshly created device.
    fn settle(&self, device: VirtualDevice, name: &str) -> VirtualDevice {
        thread::sleep(self.timing.device_settle);
        debug!(
            event = "core.actuate.device_created",
            name = name,
            settle_ms = self.timing.device_settle.as_millis() as u64
        );
        device
    }

    fn send(&self, device: &mut VirtualDevice, events: &[InputEvent]) -> Result<(), ActuationError> {
        device
            .emit(events)
            .map_err(|source| ActuationError::EventWriteFailed { source })?;
        thread::sleep(self.timing.event_delay);
        Ok(())
    }

    fn pointer(&self, button: MouseButton) -> Result<VirtualDevice, ActuationError> {
        let mut keys = AttributeSet::<Key>::new();
        keys.insert(button_key(button));

        let abs_x = UinputAbsSetup::new(AbsoluteAxisType::ABS_X, axis_info(self.screen.width));
        let abs_y = UinputAbsSetup::new(AbsoluteAxisType::ABS_Y, axis_info(self.screen.height));

        let device = open_builder()?
            .name("wlim-pointer")
            .input_id(InputId::new(BusType::BUS_VIRTUAL, VENDOR_ID, POINTER_PRODUCT_ID, 1))
            .with_keys(&keys)
            .map_err(setup_failed("keys"))?
            .with_absolute_axis(&abs_x)
            .map_err(setup_failed("ABS_X"))?
            .with_absolute_axis(&abs_y)
            .map_err(setup_failed("ABS_Y"))?
            .build()
            .map_err(setup_failed("create"))?;

        Ok(self.settle(device, "wlim-pointer"))
    }

    fn wheel(&self) -> Result<VirtualDevice, ActuationError> {
        let mut axes = AttributeSet::<RelativeAxisType>::new();
        axes.insert(RelativeAxisType::REL_WHEEL);
        axes.insert(RelativeAxisType::REL_HWHEEL);

        let device = open_builder()?
            .name("wlim-scroll")
            .input_id(InputId::new(BusType::BUS_VIRTUAL, VENDOR_ID, WHEEL_PRODUCT_ID, 1))
            .with_relative_axes(&axes)
            .map_err(setup_failed("wheel axes"))?
            .build()
            .map_err(setup_failed("create"))?;

        Ok(self.settle(device, "wlim-scroll"))
    }
}

impl Actuator for UinputActuator {
    fn click(&mut self, point: Point, button: MouseButton) -> Result<(), ActuationError> {
        let point = self.screen.clamp(point);
        info!(
            event = "core.actuate.click_started",
            x = point.x,
            y = point.y,
            button = button.as_str(),
            screen_width = self.screen.width,
            screen_height = self.screen.height
        );

        let mut device = self.pointer(button)?;
        for batch in click_batches(point, button) {
            self.send(&mut device, &batch)?;
        }

        info!(event = "core.actuate.click_completed");
        Ok(())
    }

    fn scroll(&mut self, vertical: i32, horizontal: i32) -> Result<(), ActuationError> {
        let batch = scroll_batch(vertical, horizontal);
        if batch.is_empty() {
            return Ok(());
        }
        info!(
            event = "core.actuate.scroll_started",
            vertical = vertical,
            horizontal = horizontal
        );

        let mut device = self.wheel()?;
        self.send(&mut device, &batch)?;

        info!(event = "core.actuate.scroll_completed");
        Ok(())
    }
}
