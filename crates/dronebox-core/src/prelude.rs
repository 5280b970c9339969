//! Prelude module for convenient imports
//!
//! ```ignore
//! use dronebox_core::prelude::*;
//! ```
//!
//! This brings the following into scope:
//!
//! - Hardware: `Drone`, `Button`, `JoystickData`, `LedColor`, `Vibration`
//! - Games: `FlightGame`, `Jukebox`, `PollOutcome`
//! - Music: `Song`, `MelodyPlayer`, `builtin_songs`, `find_song`
//! - Configuration: `Config`, `FlightConfig`, `JukeboxConfig`
//! - Error handling: `Error`, `Result`

// Hardware abstraction
pub use crate::driver::{Button, Drone, JoystickData, LedColor, Vibration};

// Error handling
pub use crate::error::{Error, Result};

// Games
pub use crate::flight::{FlightGame, GameState};
pub use crate::jukebox::{Jukebox, PollOutcome};

// Music
pub use crate::music::{MelodyPlayer, PlaybackOutcome, Song, builtin_songs, find_song};

// Configuration
pub use crate::config::{Config, FlightConfig, JukeboxConfig};
