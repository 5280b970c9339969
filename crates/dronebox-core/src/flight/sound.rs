//! Game sounds and the one-deep request mailbox.
//!
//! The controller buzzer blocks at driver level, so gameplay never plays a
//! sound itself. It posts a request into the mailbox and the sound task
//! drains it, sleeping between tones so the other tasks keep running.
//! The slot is cleared when playback finishes: a request posted while a
//! sound is still playing is dropped.

use std::time::Duration;

use strum::{Display, IntoStaticStr};
use tracing::debug;

use super::Flight;
use crate::driver::{Drone, Vibration};
use crate::error::Result;
use crate::music::pitch;
use crate::sched::{Step, Task};

/// Length of each tone in a sound cue
pub const TONE_DURATION: Duration = Duration::from_millis(150);

#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoStaticStr, Display)]
pub enum Sound {
    /// Rising chime when a cloud is dodged
    Score,
    /// Falling "womp womp" on game over
    Failure,
}

impl Sound {
    pub fn vibration(&self) -> Vibration {
        match self {
            Sound::Score => Vibration::new(150, 150, 600),
            Sound::Failure => Vibration::new(100, 0, 500),
        }
    }

    /// The two controller buzzer tones, in Hz
    pub fn tones(&self) -> [u32; 2] {
        match self {
            Sound::Score => [pitch::C6 as u32, pitch::E6 as u32],
            Sound::Failure => [pitch::G3 as u32, pitch::FS3 as u32],
        }
    }
}

/// Single-slot, overwrite-on-post sound request
#[derive(Debug, Clone, Default)]
pub struct SoundMailbox {
    slot: Option<Sound>,
}

impl SoundMailbox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a sound, replacing any request not yet played
    pub fn post(&mut self, sound: Sound) {
        if let Some(previous) = self.slot.replace(sound) {
            debug!("Sound request {} replaced by {}", previous, sound);
        }
    }

    pub fn peek(&self) -> Option<Sound> {
        self.slot
    }

    pub fn clear(&mut self) {
        self.slot = None;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    SecondTone(Sound),
    Finish,
}

/// Drains the mailbox, one sound at a time
#[derive(Debug)]
pub struct SoundTask {
    phase: Phase,
}

impl SoundTask {
    pub fn new() -> Self {
        Self { phase: Phase::Idle }
    }
}

impl Default for SoundTask {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Drone> Task<Flight<D>> for SoundTask {
    fn name(&self) -> &'static str {
        "play_sound"
    }

    fn tick(&mut self, cx: &mut Flight<D>, _now: Duration) -> Result<Step> {
        match self.phase {
            Phase::Idle => {
                let Some(sound) = cx.mailbox.peek() else {
                    return Ok(Step::Yield);
                };
                debug!("Playing {} sound", sound);
                let [first, _] = sound.tones();
                cx.drone.vibrate(sound.vibration())?;
                cx.drone.start_controller_buzzer(first)?;
                self.phase = Phase::SecondTone(sound);
                Ok(Step::Sleep(TONE_DURATION))
            }
            Phase::SecondTone(sound) => {
                let [_, second] = sound.tones();
                cx.drone.start_controller_buzzer(second)?;
                self.phase = Phase::Finish;
                Ok(Step::Sleep(TONE_DURATION))
            }
            Phase::Finish => {
                cx.drone.stop_controller_buzzer()?;
                cx.mailbox.clear();
                self.phase = Phase::Idle;
                Ok(Step::Yield)
            }
        }
    }
}
