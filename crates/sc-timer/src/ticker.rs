//! The fixed-cadence display loop.

use std::time::Instant;

use sc_core::ClockConfig;

use crate::{AppState, FrameObserver};

/// Drives an [`AppState`] at `config.update_interval_ms`.
///
/// Each tick evaluates the spawn tables exactly once; there is no catch-up
/// when a tick runs late, the next frame simply reads the later time.
pub struct Ticker {
    config: ClockConfig,
}

impl Ticker {
    pub fn new(config: ClockConfig) -> Self {
        Self { config }
    }

    /// Emit `ticks` frames, sleeping one update interval between them.
    ///
    /// Starts the stopwatch first if it is stopped.  Returns the number of
    /// frames emitted.
    pub fn run<O: FrameObserver>(&self, state: &mut AppState, observer: &mut O, ticks: u64) -> u64 {
        if !state.is_running() {
            state.start(Instant::now());
        }

        let interval = self.config.update_interval();
        for index in 0..ticks {
            if index > 0 && !interval.is_zero() {
                std::thread::sleep(interval);
            }
            let frame = state.frame(Instant::now());
            observer.on_frame(index, &frame);
        }

        observer.on_stop(ticks);
        ticks
    }
}
