//! Elapsed-time model and clock formatting.
//!
//! # Design
//!
//! The counting engine is a pure function of whole elapsed seconds.  The
//! caller measures time in milliseconds and hands the engine
//! `millis / 1000`:
//!
//! ```text
//! secs_elapsed = floor(millis_elapsed / 1000)
//! ```
//!
//! A stopwatch that has not been started has no elapsed time at all.  That
//! state is the explicit [`Elapsed::NotRunning`] variant rather than a
//! sentinel number, so it cannot leak into schedule arithmetic by accident.

use std::fmt;

// ── Elapsed ───────────────────────────────────────────────────────────────────

/// Time elapsed on the stopwatch, or the absence of a running stopwatch.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Elapsed {
    #[default]
    NotRunning,
    Running { millis: u64 },
}

impl Elapsed {
    pub const ZERO: Elapsed = Elapsed::Running { millis: 0 };

    #[inline]
    pub fn from_secs(secs: u64) -> Self {
        Elapsed::Running { millis: secs.saturating_mul(1_000) }
    }

    #[inline]
    pub fn is_running(self) -> bool {
        matches!(self, Elapsed::Running { .. })
    }

    #[inline]
    pub fn millis(self) -> Option<u64> {
        match self {
            Elapsed::NotRunning => None,
            Elapsed::Running { millis } => Some(millis),
        }
    }

    /// Whole seconds elapsed (rounded down), or `None` when not running.
    #[inline]
    pub fn secs(self) -> Option<u64> {
        self.millis().map(|m| m / 1_000)
    }

    /// Whole seconds elapsed, treating "not running" as the start of the
    /// schedule.
    #[inline]
    pub fn secs_or_zero(self) -> u64 {
        self.secs().unwrap_or(0)
    }
}

impl fmt::Display for Elapsed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ClockText::new(self.millis(), true).fmt(f)
    }
}

// ── ClockText ─────────────────────────────────────────────────────────────────

/// `MM:SS` / `MM:SS.mmm` rendering of a millisecond count.
///
/// Minutes do not wrap at the hour; they are zero-padded to two digits and
/// grow as needed.  A missing value renders as dashes of the same shape.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct ClockText {
    pub millis:      Option<u64>,
    pub show_millis: bool,
}

impl ClockText {
    pub fn new(millis: Option<u64>, show_millis: bool) -> Self {
        Self { millis, show_millis }
    }

    pub fn from_secs(secs: Option<u64>, show_millis: bool) -> Self {
        Self::new(secs.map(|s| s.saturating_mul(1_000)), show_millis)
    }
}

impl fmt::Display for ClockText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.millis, self.show_millis) {
            (Some(millis), show_millis) => {
                let secs = millis / 1_000;
                let mins = secs / 60;
                write!(f, "{:02}:{:02}", mins, secs % 60)?;
                if show_millis {
                    write!(f, ".{:03}", millis % 1_000)?;
                }
                Ok(())
            }
            (None, true) => f.write_str("--:--.---"),
            (None, false) => f.write_str("--:--"),
        }
    }
}

// ── ClockConfig ───────────────────────────────────────────────────────────────

/// Display-loop configuration.
///
/// Typically filled in from the command line by the application crate and
/// handed to the ticker.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClockConfig {
    /// Milliseconds between display refreshes.  Default: 100.
    pub update_interval_ms: u64,

    /// Whether the stopwatch text carries a `.mmm` suffix.
    pub show_millis: bool,
}

impl ClockConfig {
    #[inline]
    pub fn update_interval(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.update_interval_ms)
    }
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self { update_interval_ms: 100, show_millis: true }
    }
}
