//! `AppState` — everything the display layer may change, in one place.

use std::sync::Arc;
use std::time::Instant;

use sc_core::{ClockConfig, ClockText, Elapsed};
use sc_profile::{ProfileSet, Resource, SpawnProfile};

use crate::{CounterReadout, Stopwatch, TimerError, TimerResult};

// ── Frame ─────────────────────────────────────────────────────────────────────

/// One refresh of the display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub elapsed:        Elapsed,
    pub stopwatch_text: String,
    /// Indexed by [`Resource::index`].
    pub readouts:       [CounterReadout; 2],
}

impl Frame {
    pub fn readout(&self, resource: Resource) -> &CounterReadout {
        &self.readouts[resource.index()]
    }
}

// ── AppState ──────────────────────────────────────────────────────────────────

/// Selected profile, generator counts and stopwatch for one display.
///
/// The profile set sits behind an `Arc` so a reload swaps in a fully built
/// set; anything still holding the old `Arc` keeps a consistent view.
pub struct AppState {
    profiles:   Arc<ProfileSet>,
    selected:   usize,
    /// Indexed by [`Resource::index`].  Default: 1 each.
    generators: [u32; 2],
    stopwatch:  Stopwatch,
    config:     ClockConfig,
}

impl AppState {
    /// Select the alphabetically first profile, one generator per resource,
    /// stopwatch stopped.
    pub fn new(profiles: impl Into<Arc<ProfileSet>>, config: ClockConfig) -> Self {
        Self {
            profiles: profiles.into(),
            selected: 0,
            generators: [1; 2],
            stopwatch: Stopwatch::new(),
            config,
        }
    }

    pub fn config(&self) -> &ClockConfig {
        &self.config
    }

    pub fn profiles(&self) -> &Arc<ProfileSet> {
        &self.profiles
    }

    pub fn profile(&self) -> &SpawnProfile {
        self.profiles
            .at(self.selected)
            .unwrap_or_else(|| self.profiles.first())
    }

    pub fn select_profile(&mut self, name: &str) -> TimerResult<()> {
        let idx = self
            .profiles
            .position(name)
            .ok_or_else(|| TimerError::UnknownProfile(name.to_owned()))?;
        self.selected = idx;
        Ok(())
    }

    /// Swap in a freshly loaded profile set.
    ///
    /// Keeps the current selection if a profile of that name still exists,
    /// otherwise falls back to the first profile.  The stopwatch keeps running.
    pub fn reload(&mut self, profiles: impl Into<Arc<ProfileSet>>) {
        let profiles = profiles.into();
        self.selected = profiles.position(self.profile().name()).unwrap_or(0);
        self.profiles = profiles;
    }

    pub fn generators(&self, resource: Resource) -> u32 {
        self.generators[resource.index()]
    }

    pub fn set_generators(&mut self, resource: Resource, count: u32) {
        self.generators[resource.index()] = count;
    }

    // ── Stopwatch ─────────────────────────────────────────────────────────

    pub fn is_running(&self) -> bool {
        self.stopwatch.is_running()
    }

    pub fn start(&mut self, now: Instant) {
        self.stopwatch.start(now);
    }

    pub fn reset(&mut self) {
        self.stopwatch.reset();
    }

    pub fn toggle(&mut self, now: Instant) -> bool {
        self.stopwatch.toggle(now)
    }

    // ── Evaluation ────────────────────────────────────────────────────────

    /// Evaluate both spawn tables at `now`.
    pub fn frame(&self, now: Instant) -> Frame {
        self.frame_at(self.stopwatch.elapsed(now))
    }

    /// Evaluate both spawn tables for an explicit elapsed time.
    pub fn frame_at(&self, elapsed: Elapsed) -> Frame {
        let profile = self.profile();
        let readout = |r: Resource| {
            CounterReadout::compute(r, profile.table(r), elapsed, self.generators(r))
        };
        // A stopped stopwatch reads 00:00, not dashes.
        let stopwatch_text = ClockText::new(Some(elapsed.millis().unwrap_or(0)), self.config.show_millis);
        Frame {
            elapsed,
            stopwatch_text: stopwatch_text.to_string(),
            readouts: Resource::ALL.map(readout),
        }
    }
}
