//! Recording drone for unit tests

use std::collections::HashSet;
use std::time::Duration;

use super::{Button, Drone, JoystickData, LedColor, Vibration};
use crate::error::Result;

/// Command issued to the mock, in call order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DroneCommand {
    ControllerLed(LedColor),
    DroneLed(LedColor),
    StartControllerBuzzer(u32),
    StopControllerBuzzer,
    DroneBuzzer(u32, Duration),
    StopDroneBuzzer,
    Vibrate(Vibration),
    ClearScreen,
    DrawString(i32, i32, String),
}

/// Drone whose inputs are set by the test and whose outputs are recorded
#[derive(Debug, Default)]
pub struct MockDrone {
    held: HashSet<Button>,
    joystick: JoystickData,
    commands: Vec<DroneCommand>,
    notes_played: usize,
    hold_after_notes: Option<(Button, usize)>,
}

impl MockDrone {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hold(&mut self, button: Button) {
        self.held.insert(button);
    }

    pub fn release(&mut self, button: Button) {
        self.held.remove(&button);
    }

    pub fn set_joystick(&mut self, data: JoystickData) {
        self.joystick = data;
    }

    /// Start holding `button` once `notes` drone buzzer notes have played
    pub fn hold_after_notes(&mut self, button: Button, notes: usize) {
        self.hold_after_notes = Some((button, notes));
    }

    pub fn commands(&self) -> &[DroneCommand] {
        &self.commands
    }

    pub fn take_commands(&mut self) -> Vec<DroneCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Text drawn since the last clear, in draw order
    pub fn screen_text(&self) -> Vec<String> {
        let start = self
            .commands
            .iter()
            .rposition(|c| *c == DroneCommand::ClearScreen)
            .map(|i| i + 1)
            .unwrap_or(0);
        self.commands[start..]
            .iter()
            .filter_map(|c| match c {
                DroneCommand::DrawString(_, _, text) => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn notes_played(&self) -> usize {
        self.notes_played
    }
}

impl Drone for MockDrone {
    fn is_pressed(&mut self, button: Button) -> bool {
        self.held.contains(&button)
    }

    fn joystick(&mut self) -> JoystickData {
        self.joystick
    }

    fn set_controller_led(&mut self, color: LedColor) -> Result<()> {
        self.commands.push(DroneCommand::ControllerLed(color));
        Ok(())
    }

    fn set_drone_led(&mut self, color: LedColor) -> Result<()> {
        self.commands.push(DroneCommand::DroneLed(color));
        Ok(())
    }

    fn start_controller_buzzer(&mut self, frequency_hz: u32) -> Result<()> {
        self.commands.push(DroneCommand::StartControllerBuzzer(frequency_hz));
        Ok(())
    }

    fn stop_controller_buzzer(&mut self) -> Result<()> {
        self.commands.push(DroneCommand::StopControllerBuzzer);
        Ok(())
    }

    fn drone_buzzer(&mut self, frequency_hz: u32, duration: Duration) -> Result<()> {
        self.commands.push(DroneCommand::DroneBuzzer(frequency_hz, duration));
        self.notes_played += 1;
        if let Some((button, after)) = self.hold_after_notes
            && self.notes_played >= after
        {
            self.held.insert(button);
        }
        Ok(())
    }

    fn stop_drone_buzzer(&mut self) -> Result<()> {
        self.commands.push(DroneCommand::StopDroneBuzzer);
        Ok(())
    }

    fn vibrate(&mut self, pattern: Vibration) -> Result<()> {
        self.commands.push(DroneCommand::Vibrate(pattern));
        Ok(())
    }

    fn clear_screen(&mut self) -> Result<()> {
        self.commands.push(DroneCommand::ClearScreen);
        Ok(())
    }

    fn draw_string(&mut self, x: i32, y: i32, text: &str) -> Result<()> {
        self.commands.push(DroneCommand::DrawString(x, y, text.to_string()));
        Ok(())
    }
}
