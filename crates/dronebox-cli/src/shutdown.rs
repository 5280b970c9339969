use std::sync::{Condvar, Mutex};
use std::time::Duration;

/// Stop request shared by the game loop, the keyboard monitor and the
/// Ctrl+C handler.
///
/// Frame pacing sleeps go through [`StopSignal::sleep`] so a quit key ends
/// the loop without waiting out the frame.
#[derive(Default)]
pub struct StopSignal {
    reason: Mutex<Option<&'static str>>,
    condvar: Condvar,
}

impl StopSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask every loop to stop. The first reason wins.
    pub fn request(&self, reason: &'static str) {
        if let Ok(mut slot) = self.reason.lock() {
            slot.get_or_insert(reason);
        }
        self.condvar.notify_all();
    }

    pub fn is_requested(&self) -> bool {
        self.reason().is_some()
    }

    pub fn reason(&self) -> Option<&'static str> {
        // A poisoned lock means a holder panicked; treat it as a stop
        match self.reason.lock() {
            Ok(slot) => *slot,
            Err(_) => Some("poisoned"),
        }
    }

    /// Sleep for `duration` unless a stop is requested first.
    ///
    /// Returns `true` if the sleep was cut short by a stop request.
    pub fn sleep(&self, duration: Duration) -> bool {
        let Ok(slot) = self.reason.lock() else {
            return true;
        };
        if slot.is_some() {
            return true;
        }

        match self
            .condvar
            .wait_timeout_while(slot, duration, |reason| reason.is_none())
        {
            Ok((slot, _)) => slot.is_some(),
            Err(_) => true,
        }
    }
}
