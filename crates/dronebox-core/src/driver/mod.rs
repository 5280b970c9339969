//! Drone driver abstraction.
//!
//! The wire protocol to the drone and its controller belongs to the vendor
//! driver. This module only describes the handful of queries and commands
//! the applications use, so that a hardware backend, the terminal simulator
//! or a test double can sit behind the same trait.

#[cfg(test)]
pub mod mock;

use std::time::Duration;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoStaticStr};

use crate::error::Result;

#[cfg(test)]
pub use mock::{DroneCommand, MockDrone};

/// Named controller buttons
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    EnumIter,
    IntoStaticStr,
    Display,
)]
pub enum Button {
    L1,
    L2,
    R1,
    R2,
    Up,
    Down,
    Left,
    Right,
    H,
    S,
    P,
    Power,
}

/// One joystick sample as reported by the controller.
///
/// Layout: `[time, left_x, left_y, left_dir, left_event, right_x, right_y, right_dir, right_event]`.
/// Stick values range from -100 to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct JoystickData {
    pub raw: [i32; 9],
}

impl JoystickData {
    pub const LEFT_X: usize = 1;
    pub const LEFT_Y: usize = 2;
    pub const RIGHT_X: usize = 5;
    pub const RIGHT_Y: usize = 6;

    pub fn from_raw(raw: [i32; 9]) -> Self {
        Self { raw }
    }

    /// Build a sample from stick positions only
    pub fn from_sticks(left_x: i32, left_y: i32, right_x: i32, right_y: i32) -> Self {
        let mut raw = [0; 9];
        raw[Self::LEFT_X] = left_x;
        raw[Self::LEFT_Y] = left_y;
        raw[Self::RIGHT_X] = right_x;
        raw[Self::RIGHT_Y] = right_y;
        Self { raw }
    }

    pub fn left_x(&self) -> i32 {
        self.raw[Self::LEFT_X]
    }

    pub fn left_y(&self) -> i32 {
        self.raw[Self::LEFT_Y]
    }

    pub fn right_x(&self) -> i32 {
        self.raw[Self::RIGHT_X]
    }

    pub fn right_y(&self) -> i32 {
        self.raw[Self::RIGHT_Y]
    }
}

/// RGB colour plus brightness for the controller and drone LEDs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub brightness: u8,
}

impl LedColor {
    pub const IDLE_BLUE: Self = Self::new(0, 0, 128, 255);
    pub const ALERT_RED: Self = Self::new(255, 0, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8, brightness: u8) -> Self {
        Self { r, g, b, brightness }
    }
}

/// Controller vibration pattern, all values in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vibration {
    pub on_ms: u32,
    pub off_ms: u32,
    pub total_ms: u32,
}

impl Vibration {
    pub const fn new(on_ms: u32, off_ms: u32, total_ms: u32) -> Self {
        Self {
            on_ms,
            off_ms,
            total_ms,
        }
    }
}

/// Query/command surface of a paired drone and its controller.
///
/// Queries take `&mut self` because real drivers refresh their cached
/// controller state when polled.
pub trait Drone {
    /// Whether the button is currently held down
    fn is_pressed(&mut self, button: Button) -> bool;

    /// Latest joystick sample
    fn joystick(&mut self) -> JoystickData;

    fn set_controller_led(&mut self, color: LedColor) -> Result<()>;

    fn set_drone_led(&mut self, color: LedColor) -> Result<()>;

    /// Start a tone on the controller buzzer; returns immediately
    fn start_controller_buzzer(&mut self, frequency_hz: u32) -> Result<()>;

    fn stop_controller_buzzer(&mut self) -> Result<()>;

    /// Play a tone on the drone buzzer, blocking for `duration`.
    ///
    /// A frequency of 0 is a rest: nothing sounds but the call still blocks.
    fn drone_buzzer(&mut self, frequency_hz: u32, duration: Duration) -> Result<()>;

    fn stop_drone_buzzer(&mut self) -> Result<()>;

    fn vibrate(&mut self, pattern: Vibration) -> Result<()>;

    /// Clear the controller's character display
    fn clear_screen(&mut self) -> Result<()>;

    /// Draw text on the controller display at a pixel position
    fn draw_string(&mut self, x: i32, y: i32, text: &str) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_joystick_indices() {
        let data = JoystickData::from_raw([9, 1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(data.left_x(), 1);
        assert_eq!(data.left_y(), 2);
        assert_eq!(data.right_x(), 5);
        assert_eq!(data.right_y(), 6);
    }

    #[test]
    fn test_joystick_from_sticks() {
        let data = JoystickData::from_sticks(-10, 20, 30, -40);
        assert_eq!(data.raw, [0, -10, 20, 0, 0, 30, -40, 0, 0]);
    }

    #[test]
    fn test_button_names() {
        assert_eq!(Button::L2.to_string(), "L2");
        let name: &'static str = Button::Power.into();
        assert_eq!(name, "Power");
        assert_eq!(Button::iter().count(), 12);
    }
}
