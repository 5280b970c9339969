//! Edge detection for polled buttons.
//!
//! Drivers only report whether a button is held right now. The menu and the
//! reset logic need one action per physical press, so each button keeps the
//! held state from the previous poll and fires on the false→true edge.

use std::collections::HashMap;

use crate::driver::{Button, Drone};

/// Held state of one button across two polls
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonState {
    pub is_held: bool,
    pub was_held: bool,
}

impl ButtonState {
    /// Record a new sample and report whether it is a press edge
    pub fn update(&mut self, held: bool) -> bool {
        self.was_held = self.is_held;
        self.is_held = held;
        self.is_held && !self.was_held
    }

    /// Treat the button as already held so the current press cannot fire
    pub fn suppress(&mut self) {
        self.is_held = true;
        self.was_held = true;
    }
}

/// Per-button debounce flags for a whole controller
#[derive(Debug, Clone, Default)]
pub struct Debouncer {
    buttons: HashMap<Button, ButtonState>,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a raw held sample for `button`; true exactly on a press edge
    pub fn pressed(&mut self, button: Button, held: bool) -> bool {
        self.buttons.entry(button).or_default().update(held)
    }

    /// Poll `button` on the drone and report a press edge
    pub fn poll<D: Drone + ?Sized>(&mut self, drone: &mut D, button: Button) -> bool {
        let held = drone.is_pressed(button);
        self.pressed(button, held)
    }

    /// Mark `button` as held, e.g. when another loop consumed the press
    pub fn suppress(&mut self, button: Button) {
        self.buttons.entry(button).or_default().suppress();
    }

    pub fn state(&self, button: Button) -> ButtonState {
        self.buttons.get(&button).copied().unwrap_or_default()
    }

    pub fn reset(&mut self) {
        self.buttons.clear();
    }
}
