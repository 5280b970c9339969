//! Keyboard stand-in for the drone controller.
//!
//! Terminals usually report only key presses and auto-repeats, not releases,
//! so a key counts as held for [`HOLD_WINDOW`] after its last press or
//! repeat. Release events end the hold early when the terminal sends them.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use dronebox_core::{Button, JoystickData};
use tracing::debug;

use crate::shutdown::StopSignal;

/// Longer than the usual auto-repeat delay, so a held key never drops out
pub const HOLD_WINDOW: Duration = Duration::from_millis(550);

/// Full stick deflection reported for an arrow key
pub const STICK_FULL: i32 = 100;

/// Controller button bound to a key.
///
/// L1/L2 sit on `a`/`z`, R1/R2 on `d`/`c`, the d-pad on the arrow keys.
pub fn key_binding(code: KeyCode) -> Option<Button> {
    match code {
        KeyCode::Char('a') | KeyCode::Char('A') => Some(Button::L1),
        KeyCode::Char('z') | KeyCode::Char('Z') => Some(Button::L2),
        KeyCode::Char('d') | KeyCode::Char('D') => Some(Button::R1),
        KeyCode::Char('c') | KeyCode::Char('C') => Some(Button::R2),
        KeyCode::Up => Some(Button::Up),
        KeyCode::Down => Some(Button::Down),
        KeyCode::Left => Some(Button::Left),
        KeyCode::Right => Some(Button::Right),
        KeyCode::Char('h') | KeyCode::Char('H') => Some(Button::H),
        KeyCode::Char('s') | KeyCode::Char('S') => Some(Button::S),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(Button::P),
        _ => None,
    }
}

/// Check if the key event should stop the program.
pub fn should_shutdown(event: &KeyEvent) -> bool {
    match event.code {
        KeyCode::Esc => true,
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => true,
        _ => false,
    }
}

/// Last press time of every bound key
#[derive(Debug, Clone)]
pub struct KeyState {
    pressed_at: HashMap<Button, Instant>,
    hold_window: Duration,
}

impl KeyState {
    pub fn new() -> Self {
        Self::with_hold_window(HOLD_WINDOW)
    }

    pub fn with_hold_window(hold_window: Duration) -> Self {
        Self {
            pressed_at: HashMap::new(),
            hold_window,
        }
    }

    pub fn press(&mut self, button: Button, at: Instant) {
        self.pressed_at.insert(button, at);
    }

    pub fn release(&mut self, button: Button) {
        self.pressed_at.remove(&button);
    }

    pub fn is_held(&self, button: Button, now: Instant) -> bool {
        self.pressed_at
            .get(&button)
            .is_some_and(|at| now.saturating_duration_since(*at) < self.hold_window)
    }

    /// Arrow keys as sticks: Up/Down drive the left stick's y axis (throttle),
    /// Left/Right the right stick's x axis.
    pub fn joystick(&self, now: Instant) -> JoystickData {
        let axis = |negative: Button, positive: Button| {
            let mut value = 0;
            if self.is_held(positive, now) {
                value += STICK_FULL;
            }
            if self.is_held(negative, now) {
                value -= STICK_FULL;
            }
            value
        };
        JoystickData::from_sticks(
            0,
            axis(Button::Down, Button::Up),
            axis(Button::Left, Button::Right),
            0,
        )
    }

    /// Apply one key event
    pub fn apply(&mut self, key: &KeyEvent, at: Instant) {
        let Some(button) = key_binding(key.code) else {
            return;
        };
        match key.kind {
            KeyEventKind::Release => self.release(button),
            KeyEventKind::Press | KeyEventKind::Repeat => self.press(button, at),
        }
    }
}

impl Default for KeyState {
    fn default() -> Self {
        Self::new()
    }
}

/// Spawn a thread that feeds key events into `keys` and requests a stop on
/// Esc, q, Q or Ctrl+C.
pub fn spawn_keyboard_monitor(
    stop: Arc<StopSignal>,
    keys: Arc<Mutex<KeyState>>,
) -> JoinHandle<()> {
    thread::spawn(move || {
        debug!("Keyboard monitor started");

        while !stop.is_requested() {
            if event::poll(Duration::from_millis(20)).unwrap_or(false)
                && let Ok(Event::Key(key_event)) = event::read()
            {
                if should_shutdown(&key_event) {
                    debug!("Shutdown key pressed: {:?}", key_event.code);
                    stop.request("keyboard");
                    break;
                }
                if let Ok(mut keys) = keys.lock() {
                    keys.apply(&key_event, Instant::now());
                }
            }
        }

        debug!("Keyboard monitor stopped");
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode, kind: KeyEventKind) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_should_shutdown_keys() {
        assert!(should_shutdown(&KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)));
        assert!(should_shutdown(&KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)));
        assert!(should_shutdown(&KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        // plain c is R2
        assert!(!should_shutdown(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE)));
    }

    #[test]
    fn test_bindings() {
        assert_eq!(key_binding(KeyCode::Char('z')), Some(Button::L2));
        assert_eq!(key_binding(KeyCode::Char('D')), Some(Button::R1));
        assert_eq!(key_binding(KeyCode::Down), Some(Button::Down));
        assert_eq!(key_binding(KeyCode::Enter), None);
    }

    #[test]
    fn test_hold_window() {
        let start = Instant::now();
        let mut keys = KeyState::with_hold_window(Duration::from_millis(100));
        keys.press(Button::R1, start);

        assert!(keys.is_held(Button::R1, start));
        assert!(keys.is_held(Button::R1, start + Duration::from_millis(99)));
        assert!(!keys.is_held(Button::R1, start + Duration::from_millis(100)));
        assert!(!keys.is_held(Button::L1, start));
    }

    #[test]
    fn test_repeat_extends_hold() {
        let start = Instant::now();
        let mut keys = KeyState::with_hold_window(Duration::from_millis(100));
        keys.apply(&key(KeyCode::Char('a'), KeyEventKind::Press), start);
        keys.apply(
            &key(KeyCode::Char('a'), KeyEventKind::Repeat),
            start + Duration::from_millis(80),
        );
        assert!(keys.is_held(Button::L1, start + Duration::from_millis(150)));

        keys.apply(
            &key(KeyCode::Char('a'), KeyEventKind::Release),
            start + Duration::from_millis(160),
        );
        assert!(!keys.is_held(Button::L1, start + Duration::from_millis(160)));
    }

    #[test]
    fn test_arrows_as_sticks() {
        let now = Instant::now();
        let mut keys = KeyState::new();
        assert_eq!(keys.joystick(now), JoystickData::default());

        keys.press(Button::Up, now);
        keys.press(Button::Left, now);
        let stick = keys.joystick(now);
        assert_eq!(stick.left_y(), STICK_FULL);
        assert_eq!(stick.right_x(), -STICK_FULL);

        // opposite directions cancel
        keys.press(Button::Down, now);
        assert_eq!(keys.joystick(now).left_y(), 0);
    }

    #[test]
    fn test_unbound_keys_ignored() {
        let now = Instant::now();
        let mut keys = KeyState::new();
        keys.apply(&key(KeyCode::Enter, KeyEventKind::Press), now);
        assert_eq!(keys.pressed_at.len(), 0);
    }
}
