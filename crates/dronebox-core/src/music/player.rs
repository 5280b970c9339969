//! Blocking melody playback on the drone buzzer.

use std::time::Duration;

use rand::Rng;
use tracing::debug;

use super::song::Song;
use crate::driver::{Button, Drone, LedColor};
use crate::error::Result;

/// How a playback run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackOutcome {
    Finished,
    /// The stop button was held after note `after_note` (0-based)
    Stopped { after_note: usize },
}

/// Plays songs note by note, flashing the drone LED on every note
pub struct MelodyPlayer<R> {
    rng: R,
    stop_button: Button,
}

impl<R: Rng> MelodyPlayer<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            stop_button: Button::L2,
        }
    }

    pub fn with_stop_button(mut self, button: Button) -> Self {
        self.stop_button = button;
        self
    }

    pub fn stop_button(&self) -> Button {
        self.stop_button
    }

    /// Play `song` to the end or until the stop button is held.
    ///
    /// Each note blocks for its decoded duration; the stop button is only
    /// checked between notes. The buzzer is stopped either way.
    pub fn play<D: Drone + ?Sized>(&mut self, drone: &mut D, song: &Song) -> Result<PlaybackOutcome> {
        let timeline = song.timeline()?;
        debug!(
            "Playing {} ({} notes at {} BPM)",
            song.name,
            timeline.len(),
            song.tempo_bpm
        );

        let mut outcome = PlaybackOutcome::Finished;
        for (index, (frequency, ms)) in timeline.into_iter().enumerate() {
            drone.set_drone_led(self.random_color())?;
            drone.drone_buzzer(frequency, Duration::from_millis(ms))?;

            if drone.is_pressed(self.stop_button) {
                debug!("Playback of {} stopped after note {}", song.name, index);
                outcome = PlaybackOutcome::Stopped { after_note: index };
                break;
            }
        }

        drone.stop_drone_buzzer()?;
        Ok(outcome)
    }

    fn random_color(&mut self) -> LedColor {
        LedColor::new(
            self.rng.gen_range(100..=255),
            self.rng.gen_range(100..=255),
            self.rng.gen_range(100..=255),
            255,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::{DroneCommand, MockDrone};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn player() -> MelodyPlayer<StdRng> {
        MelodyPlayer::new(StdRng::seed_from_u64(7))
    }

    fn buzzer_calls(drone: &MockDrone) -> Vec<(u32, Duration)> {
        drone
            .commands()
            .iter()
            .filter_map(|c| match c {
                DroneCommand::DroneBuzzer(hz, d) => Some((*hz, *d)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_plays_every_note_in_order() {
        let mut drone = MockDrone::new();
        let song = Song::from_pairs("test", 240, &[262, 4, 0, 8, 330, -4]);

        let outcome = player().play(&mut drone, &song).unwrap();

        assert_eq!(outcome, PlaybackOutcome::Finished);
        assert_eq!(
            buzzer_calls(&drone),
            vec![
                (262, Duration::from_millis(250)),
                (0, Duration::from_millis(125)),
                (330, Duration::from_millis(83)),
            ]
        );
        assert_eq!(drone.commands().last(), Some(&DroneCommand::StopDroneBuzzer));
    }

    #[test]
    fn test_led_flashes_per_note() {
        let mut drone = MockDrone::new();
        let song = Song::from_pairs("test", 120, &[440, 4, 494, 4]);

        player().play(&mut drone, &song).unwrap();

        let colors: Vec<LedColor> = drone
            .commands()
            .iter()
            .filter_map(|c| match c {
                DroneCommand::DroneLed(color) => Some(*color),
                _ => None,
            })
            .collect();
        assert_eq!(colors.len(), 2);
        for color in colors {
            assert!(color.r >= 100 && color.g >= 100 && color.b >= 100);
            assert_eq!(color.brightness, 255);
        }
    }

    #[test]
    fn test_stop_button_aborts_remaining_notes() {
        let mut drone = MockDrone::new();
        drone.hold_after_notes(Button::L2, 2);
        let song = Song::from_pairs("test", 240, &[262, 4, 294, 4, 330, 4, 349, 4]);

        let outcome = player().play(&mut drone, &song).unwrap();

        assert_eq!(outcome, PlaybackOutcome::Stopped { after_note: 1 });
        assert_eq!(drone.notes_played(), 2);
        assert_eq!(drone.commands().last(), Some(&DroneCommand::StopDroneBuzzer));
    }

    #[test]
    fn test_custom_stop_button() {
        let mut drone = MockDrone::new();
        drone.hold(Button::L2);
        let song = Song::from_pairs("test", 240, &[262, 4, 294, 4]);

        let mut player = player().with_stop_button(Button::P);
        assert_eq!(player.stop_button(), Button::P);
        let outcome = player.play(&mut drone, &song).unwrap();

        assert_eq!(outcome, PlaybackOutcome::Finished);
        assert_eq!(drone.notes_played(), 2);
    }

    #[test]
    fn test_invalid_table_plays_nothing() {
        let mut drone = MockDrone::new();
        let song = Song::from_pairs("broken", 240, &[262, 0]);

        assert!(player().play(&mut drone, &song).is_err());
        assert!(drone.commands().is_empty());
    }
}
