//! Per-resource counter readout.

use std::fmt;

use sc_core::{ClockText, Elapsed};
use sc_profile::Resource;
use sc_table::SpawnTable;

/// What the display shows for one resource on one tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CounterReadout {
    pub resource:     Resource,
    /// Spawned so far across all generators.
    pub count:        u64,
    pub label:        &'static str,
    /// Seconds until the next spawn; `None` while the stopwatch is stopped.
    pub next_in_secs: Option<u64>,
}

impl CounterReadout {
    /// Evaluate `table` once for `elapsed` and scale by `generators`.
    ///
    /// A stopped stopwatch counts as second 0 for the spawn count and has no
    /// next-spawn time.
    pub fn compute(
        resource:   Resource,
        table:      &SpawnTable,
        elapsed:    Elapsed,
        generators: u32,
    ) -> Self {
        let count = table
            .num_spawns(elapsed.secs_or_zero())
            .saturating_mul(u64::from(generators));
        Self {
            resource,
            count,
            label: resource.label(count),
            next_in_secs: elapsed.secs().map(|s| table.next_spawn_in(s)),
        }
    }

    /// Remaining time as `MM:SS`, or `--:--` while stopped.
    pub fn time_text(&self) -> ClockText {
        ClockText::from_secs(self.next_in_secs, false)
    }
}

impl fmt::Display for CounterReadout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} (next in {})", self.count, self.label, self.time_text())
    }
}
