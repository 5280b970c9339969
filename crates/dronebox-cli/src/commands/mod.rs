//! CLI command implementations.

pub mod config;
pub mod flight;
pub mod jukebox;
pub mod songs;

use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use anyhow::Result;
use tracing::{debug, info};

use crate::input::{self, KeyState};
use crate::shutdown::StopSignal;
use crate::terminal::TerminalSession;

/// Everything an interactive command needs from the terminal: raw mode,
/// shared key state and a stop signal wired to Ctrl+C and the quit keys.
///
/// Dropping the session stops the keyboard monitor and restores the terminal.
pub struct Session {
    pub stop: Arc<StopSignal>,
    pub keys: Arc<Mutex<KeyState>>,
    monitor: Option<JoinHandle<()>>,
    _terminal: TerminalSession,
}

impl Session {
    pub fn start() -> Result<Self> {
        let stop = Arc::new(StopSignal::new());
        let stop_ctrlc = Arc::clone(&stop);
        ctrlc::set_handler(move || {
            info!("Received shutdown signal, stopping...");
            stop_ctrlc.request("ctrl-c");
        })?;

        let terminal = TerminalSession::start()?;
        let keys = Arc::new(Mutex::new(KeyState::new()));
        let monitor = input::spawn_keyboard_monitor(Arc::clone(&stop), Arc::clone(&keys));

        Ok(Self {
            stop,
            keys,
            monitor: Some(monitor),
            _terminal: terminal,
        })
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.stop.request("session ended");
        if let Some(handle) = self.monitor.take()
            && handle.join().is_err()
        {
            debug!("Keyboard monitor panicked");
        }
        if let Some(reason) = self.stop.reason() {
            debug!("Session stopped: {}", reason);
        }
    }
}
