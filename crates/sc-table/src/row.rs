//! One rate segment of a spawn table.

use sc_core::{ConfigError, ConfigErrorKind, ConfigResult};

/// A named `(time, interval)` rate segment.
///
/// `name` is a diagnostic label only; several rows may share it.  Everything
/// is read-only once built, except that [`SpawnTable::new`] may push `time`
/// later while normalizing.
///
/// [`SpawnTable::new`]: crate::SpawnTable::new
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SpawnRow {
    name:     String,
    /// Seconds from the start of the schedule at which this row takes over.
    time:     u64,
    /// Seconds between spawns while this row is active.  Always > 0.
    interval: u64,
}

impl SpawnRow {
    /// Build a row, rejecting a zero interval.
    pub fn new(name: impl Into<String>, time: u64, interval: u64) -> ConfigResult<Self> {
        let name = name.into();
        if interval == 0 {
            return Err(ConfigError::for_row(ConfigErrorKind::ZeroInterval, name));
        }
        Ok(Self { name, time, interval })
    }

    /// Build a row from signed values, as decoded from a config file.
    pub fn from_signed(name: impl Into<String>, time: i64, interval: i64) -> ConfigResult<Self> {
        let name = name.into();
        let Ok(time) = u64::try_from(time) else {
            return Err(ConfigError::for_row(ConfigErrorKind::NegativeTime, name));
        };
        let Ok(interval) = u64::try_from(interval) else {
            return Err(ConfigError::for_row(ConfigErrorKind::ZeroInterval, name));
        };
        Self::new(name, time, interval)
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn time(&self) -> u64 {
        self.time
    }

    #[inline]
    pub fn interval(&self) -> u64 {
        self.interval
    }

    /// Seconds this row stays active before `next` takes over.
    ///
    /// # Panics
    /// Panics in debug mode if `next` starts before `self`.
    #[inline]
    pub fn active_span_until(&self, next: &SpawnRow) -> u64 {
        next.time - self.time
    }

    #[inline]
    pub(crate) fn set_time(&mut self, time: u64) {
        self.time = time;
    }
}
