//! # dronebox-core
//!
//! Core library for the controller-driven drone games.
//!
//! This crate provides:
//! - The `Drone` hardware abstraction (buttons, joystick, LEDs, buzzers, display)
//! - Button edge detection and paged menu navigation
//! - The cloud-dodging flight game on a cooperative frame scheduler
//! - Melody tables, note decoding and the jukebox menu loop
//! - TOML configuration

pub mod config;
pub mod driver;
pub mod error;
pub mod flight;
pub mod input;
pub mod jukebox;
pub mod menu;
pub mod motion;
pub mod music;
pub mod prelude;
pub mod sched;

pub use config::{CONFIG_FILE, Config, FlightConfig, FlightConfigBuilder, JukeboxConfig};
pub use driver::{Button, Drone, JoystickData, LedColor, Vibration};
pub use error::{Error, Result};
pub use flight::{Flight, FlightGame, GameState, Sound};
pub use input::{ButtonState, Debouncer};
pub use jukebox::{Jukebox, PollOutcome, draw_lines};
pub use menu::{Paginator, PlaybackCursor};
pub use motion::{MotionAxis, clamp, smooth_velocity};
pub use music::{
    CatalogEntry, MelodyPlayer, Note, PlaybackOutcome, Song, builtin_songs, catalog, find_song,
    write_ndjson,
};
pub use sched::{Scheduler, Step, Task};
