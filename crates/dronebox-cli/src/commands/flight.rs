//! Flight command: the cloud-dodging game drawn in the terminal.

use std::io;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use crossterm::terminal;
use dronebox_core::{FlightConfig, FlightGame};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

use super::Session;
use crate::scene::{self, Viewport};
use crate::terminal::TerminalDrone;

/// Run the flight game until a quit key or Ctrl+C
pub fn run(config: &FlightConfig) -> Result<()> {
    let session = Session::start()?;
    let drone = TerminalDrone::new(
        Arc::clone(&session.keys),
        Arc::clone(&session.stop),
        io::stdout(),
    );
    let mut game = FlightGame::new(drone, config.clone(), StdRng::from_entropy())?;

    let interval = config.frame_interval();
    info!(
        "Flight started at {} fps on a {}x{} screen",
        config.frame_rate, config.screen_width, config.screen_height
    );

    let mut out = io::stdout();
    let start = Instant::now();
    loop {
        game.frame(start.elapsed())?;

        let (cols, rows) = terminal::size()?;
        scene::render(&mut out, game.flight(), Viewport::new(cols, rows))?;

        if session.stop.sleep(interval) {
            break;
        }
    }

    info!("Flight ended with score {}", game.flight().score());
    Ok(())
}
