//! Start/reset stopwatch.

use std::time::Instant;

use sc_core::Elapsed;

/// A stopwatch that is either stopped or running since some instant.
///
/// The caller supplies `now` on every call, so the stopwatch itself never
/// reads the system clock.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Stopwatch {
    started_at: Option<Instant>,
}

impl Stopwatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    /// Start from zero at `now`.  Restarts if already running.
    pub fn start(&mut self, now: Instant) {
        self.started_at = Some(now);
    }

    pub fn reset(&mut self) {
        self.started_at = None;
    }

    /// Start if stopped, reset if running.  Returns whether it now runs.
    pub fn toggle(&mut self, now: Instant) -> bool {
        if self.is_running() {
            self.reset();
        } else {
            self.start(now);
        }
        self.is_running()
    }

    /// Time since [`start`](Self::start).  A `now` earlier than the start
    /// reads as zero.
    pub fn elapsed(&self, now: Instant) -> Elapsed {
        match self.started_at {
            None => Elapsed::NotRunning,
            Some(start) => Elapsed::Running {
                millis: u64::try_from(now.saturating_duration_since(start).as_millis())
                    .unwrap_or(u64::MAX),
            },
        }
    }
}
