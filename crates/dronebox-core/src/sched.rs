//! Cooperative frame scheduler.
//!
//! Every registered task runs once per frame on the caller's thread. A task
//! that needs to wait returns [`Step::Sleep`] instead of blocking; it is
//! skipped until the frame clock passes its wake time while its siblings
//! keep running.

use std::time::Duration;

use tracing::trace;

use crate::error::Result;

/// What a task wants after one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Run again next frame
    Yield,
    /// Resume once `duration` has elapsed on the frame clock
    Sleep(Duration),
}

/// A routine invoked by the scheduler with shared context `C`
pub trait Task<C> {
    fn name(&self) -> &'static str;

    fn tick(&mut self, cx: &mut C, now: Duration) -> Result<Step>;
}

struct Slot<C> {
    task: Box<dyn Task<C>>,
    wake_at: Duration,
}

/// Runs tasks in registration order, once per frame
pub struct Scheduler<C> {
    slots: Vec<Slot<C>>,
}

impl<C> Scheduler<C> {
    pub fn new() -> Self {
        Self { slots: Vec::new() }
    }

    pub fn register(&mut self, task: Box<dyn Task<C>>) {
        self.slots.push(Slot {
            task,
            wake_at: Duration::ZERO,
        });
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Names of registered tasks, in run order
    pub fn task_names(&self) -> Vec<&'static str> {
        self.slots.iter().map(|slot| slot.task.name()).collect()
    }

    /// Run one frame at clock time `now`
    pub fn run_frame(&mut self, cx: &mut C, now: Duration) -> Result<()> {
        for slot in &mut self.slots {
            if now < slot.wake_at {
                continue;
            }

            match slot.task.tick(cx, now)? {
                Step::Yield => slot.wake_at = now,
                Step::Sleep(duration) => {
                    slot.wake_at = now + duration;
                    trace!("{} sleeping until {:?}", slot.task.name(), slot.wake_at);
                }
            }
        }
        Ok(())
    }
}

impl<C> Default for Scheduler<C> {
    fn default() -> Self {
        Self::new()
    }
}
