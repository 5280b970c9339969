//! Jukebox command: the song menu on the terminal display.

use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use dronebox_core::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::Session;
use crate::terminal::TerminalDrone;

/// Pause between button polls
const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// How long "Goodbye!" stays up before the terminal is restored
const GOODBYE_DELAY: Duration = Duration::from_millis(600);

/// Terminal row for the drone LED, below the footer
const LED_ROW: u16 = 9;

/// Run the jukebox until L2, a quit key or Ctrl+C
pub fn run(config: &JukeboxConfig) -> Result<()> {
    let session = Session::start()?;
    let drone = TerminalDrone::new(
        Arc::clone(&session.keys),
        Arc::clone(&session.stop),
        io::stdout(),
    )
    .with_led_row(LED_ROW);
    let mut jukebox = Jukebox::new(drone, builtin_songs(), config.clone(), StdRng::from_entropy());

    jukebox.run(|| !session.stop.sleep(POLL_INTERVAL))?;

    session.stop.sleep(GOODBYE_DELAY);
    Ok(())
}
