//! `SpawnTable` — a validated, normalized list of [`SpawnRow`]s.
//!
//! # Invariants
//!
//! Checked or established by [`SpawnTable::new`] and never broken afterwards:
//!
//! - at least one row;
//! - row 0 starts at `time == 0`;
//! - start times strictly increase;
//! - intervals strictly decrease (later rows spawn faster);
//! - every row except the last is active for a whole number of its own
//!   intervals, so a row never hands over mid-interval.
//!
//! # Normalization
//!
//! Start times that do not land on a whole interval of the previous row are
//! rounded *up* to the next boundary, row by row, using the already-rounded
//! previous row.  A row pushed onto or before its predecessor by that cascade
//! is first moved to one second after it:
//!
//! ```text
//! duration = time[i] - time[i-1]          (floor of 1, moving time[i] along)
//! time[i] += interval[i-1] - duration % interval[i-1]   if the remainder != 0
//! ```
//!
//! Declared start times can therefore shift later.  Configurations that want
//! exact control should declare start times on interval boundaries already;
//! such tables come out of normalization unchanged.

use sc_core::{ConfigError, ConfigErrorKind, ConfigResult};

use crate::SpawnRow;

/// A piecewise-constant spawn rate over elapsed seconds.
///
/// Cheap to share: it holds no interior mutability, so a single instance can
/// be queried from any number of threads.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SpawnTable {
    /// Rows sorted ascending by `time`, normalized.
    rows: Vec<SpawnRow>,
}

impl SpawnTable {
    /// Validate `rows` and round their start times up to interval boundaries.
    ///
    /// Fails on the first violated rule; the error names the offending row.
    pub fn new(mut rows: Vec<SpawnRow>) -> ConfigResult<Self> {
        let Some(first) = rows.first() else {
            return Err(ConfigErrorKind::EmptyTable.into());
        };
        if first.time() != 0 {
            return Err(ConfigError::for_row(ConfigErrorKind::FirstRowNotAtZero, first.name()));
        }

        for pair in rows.windows(2) {
            let (prev, row) = (&pair[0], &pair[1]);
            if row.time() <= prev.time() {
                return Err(ConfigError::for_row(ConfigErrorKind::TimesNotIncreasing, row.name()));
            }
            if row.interval() >= prev.interval() {
                return Err(ConfigError::for_row(
                    ConfigErrorKind::IntervalsNotDecreasing,
                    row.name(),
                ));
            }
        }

        for i in 1..rows.len() {
            let (prev_time, prev_interval) = (rows[i - 1].time(), rows[i - 1].interval());
            let row = &mut rows[i];
            let overflow = || ConfigError::for_row(ConfigErrorKind::TimeOverflow, row.name());

            let mut time = row.time();
            let mut duration = time.saturating_sub(prev_time);
            if duration == 0 {
                duration = 1;
                time = prev_time.checked_add(1).ok_or_else(overflow)?;
            }

            let rem = duration % prev_interval;
            if rem != 0 {
                time = time.checked_add(prev_interval - rem).ok_or_else(overflow)?;
            }
            row.set_time(time);
        }

        Ok(Self { rows })
    }

    /// Read-only slice of all rows, in schedule order, after normalization.
    pub fn rows(&self) -> &[SpawnRow] {
        &self.rows
    }

    /// Always ≥ 1.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Total spawns that have happened by `secs_elapsed`.
    ///
    /// Each row contributes the whole intervals that fit in the part of its
    /// active window already elapsed.  Non-decreasing in `secs_elapsed`.
    pub fn num_spawns(&self, secs_elapsed: u64) -> u64 {
        self.rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let mut secs_active = secs_elapsed.saturating_sub(row.time());
                if let Some(next) = self.rows.get(i + 1) {
                    secs_active = secs_active.min(row.active_span_until(next));
                }
                secs_active / row.interval()
            })
            .sum()
    }

    /// Seconds until the next spawn, in `1..=interval` of the active row.
    pub fn next_spawn_in(&self, secs_elapsed: u64) -> u64 {
        let row = self.current_row(secs_elapsed);
        row.interval() - (secs_elapsed - row.time()) % row.interval()
    }

    /// Absolute second at which the next spawn happens.
    #[inline]
    pub fn next_spawn_at(&self, secs_elapsed: u64) -> u64 {
        secs_elapsed.saturating_add(self.next_spawn_in(secs_elapsed))
    }

    /// The row whose rate governs `secs_elapsed`: the last row that has
    /// started.
    pub fn current_row(&self, secs_elapsed: u64) -> &SpawnRow {
        // Row 0 starts at 0, so at least one row has always started.
        let started = self.rows.partition_point(|r| r.time() <= secs_elapsed);
        &self.rows[started - 1]
    }
}
