//! Terminal-backed drone.
//!
//! The controller display maps onto the top-left of the terminal, one text
//! row per 8 display pixels. Buzzers and vibration are logged; the drone
//! buzzer still blocks for the note length so songs keep their timing.
//!
//! Once a stop is requested the drone buzzer returns at once and L2, the
//! playback stop button, reads as held, so a song in progress ends after the
//! current note.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, queue};
use dronebox_core::{Button, Drone, Error, JoystickData, LedColor, Result, Vibration};
use tracing::{debug, trace, warn};

use crate::input::KeyState;
use crate::shutdown::StopSignal;

/// Display pixels per terminal row
pub const LINE_HEIGHT: i32 = 8;
/// Display pixels per terminal column
pub const CHAR_WIDTH: i32 = 6;

/// Raw mode and alternate screen for the lifetime of the value
pub struct TerminalSession {
    enhanced_keys: bool,
}

impl TerminalSession {
    pub fn start() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut out = io::stdout();
        execute!(out, EnterAlternateScreen, Hide)?;

        // Release events make held keys end as soon as they are let go
        let enhanced_keys = terminal::supports_keyboard_enhancement().unwrap_or(false);
        if enhanced_keys {
            execute!(
                out,
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
            )?;
        }
        debug!("Terminal session started (key release events: {})", enhanced_keys);
        Ok(Self { enhanced_keys })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let mut out = io::stdout();
        if self.enhanced_keys {
            let _ = execute!(out, PopKeyboardEnhancementFlags);
        }
        let _ = execute!(out, Show, LeaveAlternateScreen);
        if let Err(e) = terminal::disable_raw_mode() {
            warn!("Failed to restore terminal: {}", e);
        }
    }
}

/// Cell for a display pixel position; negative positions clamp to 0
pub fn display_cell(x: i32, y: i32) -> (u16, u16) {
    let col = (x.max(0) / CHAR_WIDTH).min(i32::from(u16::MAX));
    let row = (y.max(0) / LINE_HEIGHT).min(i32::from(u16::MAX));
    (col as u16, row as u16)
}

fn led_color(color: LedColor) -> Color {
    let scale = |c: u8| (u16::from(c) * u16::from(color.brightness) / 255) as u8;
    Color::Rgb {
        r: scale(color.r),
        g: scale(color.g),
        b: scale(color.b),
    }
}

fn driver_error(e: io::Error) -> Error {
    Error::driver(format!("terminal write failed: {}", e))
}

/// Drone driven by the keyboard and drawn on a terminal
pub struct TerminalDrone<W> {
    keys: Arc<Mutex<KeyState>>,
    stop: Arc<StopSignal>,
    out: W,
    /// Row for the drone LED indicator; `None` leaves it undrawn
    led_row: Option<u16>,
}

impl<W: Write> TerminalDrone<W> {
    pub fn new(keys: Arc<Mutex<KeyState>>, stop: Arc<StopSignal>, out: W) -> Self {
        Self {
            keys,
            stop,
            out,
            led_row: None,
        }
    }

    pub fn with_led_row(mut self, row: u16) -> Self {
        self.led_row = Some(row);
        self
    }

    fn draw_led(&mut self, color: LedColor) -> io::Result<()> {
        let Some(row) = self.led_row else {
            return Ok(());
        };
        queue!(
            self.out,
            MoveTo(0, row),
            Clear(ClearType::CurrentLine),
            Print("drone "),
            SetForegroundColor(led_color(color)),
            Print("●"),
            ResetColor
        )?;
        self.out.flush()
    }
}

impl<W: Write> Drone for TerminalDrone<W> {
    fn is_pressed(&mut self, button: Button) -> bool {
        // The keyboard monitor exits on a stop request, so L2 can no longer
        // be read from the keys
        if button == Button::L2 && self.stop.is_requested() {
            return true;
        }
        self.keys
            .lock()
            .map(|keys| keys.is_held(button, Instant::now()))
            .unwrap_or(false)
    }

    fn joystick(&mut self) -> JoystickData {
        self.keys
            .lock()
            .map(|keys| keys.joystick(Instant::now()))
            .unwrap_or_default()
    }

    fn set_controller_led(&mut self, color: LedColor) -> Result<()> {
        debug!("Controller LED {:?}", color);
        Ok(())
    }

    fn set_drone_led(&mut self, color: LedColor) -> Result<()> {
        trace!("Drone LED {:?}", color);
        self.draw_led(color).map_err(driver_error)
    }

    fn start_controller_buzzer(&mut self, frequency_hz: u32) -> Result<()> {
        debug!("Controller buzzer {} Hz", frequency_hz);
        Ok(())
    }

    fn stop_controller_buzzer(&mut self) -> Result<()> {
        debug!("Controller buzzer off");
        Ok(())
    }

    fn drone_buzzer(&mut self, frequency_hz: u32, duration: Duration) -> Result<()> {
        trace!("Drone buzzer {} Hz for {:?}", frequency_hz, duration);
        if self.stop.sleep(duration) {
            debug!("Drone buzzer cut short by stop request");
        }
        Ok(())
    }

    fn stop_drone_buzzer(&mut self) -> Result<()> {
        debug!("Drone buzzer off");
        Ok(())
    }

    fn vibrate(&mut self, pattern: Vibration) -> Result<()> {
        debug!(
            "Vibrate {}ms on / {}ms off for {}ms",
            pattern.on_ms, pattern.off_ms, pattern.total_ms
        );
        Ok(())
    }

    fn clear_screen(&mut self) -> Result<()> {
        queue!(self.out, Clear(ClearType::All), MoveTo(0, 0)).map_err(driver_error)?;
        self.out.flush().map_err(driver_error)
    }

    fn draw_string(&mut self, x: i32, y: i32, text: &str) -> Result<()> {
        let (col, row) = display_cell(x, y);
        queue!(self.out, MoveTo(col, row), Print(text)).map_err(driver_error)?;
        self.out.flush().map_err(driver_error)
    }
}
