//! `sc-table` — spawn rows and the spawn-table counting engine.
//!
//! # Crate layout
//!
//! | Module    | Contents                                   |
//! |-----------|--------------------------------------------|
//! | [`row`]   | `SpawnRow`                                 |
//! | [`table`] | `SpawnTable` (validation + both queries)   |
//!
//! # Rate model (summary)
//!
//! A table is a list of rows `(name, time, interval)`.  Row `i` governs the
//! spawn rate from `time[i]` until `time[i + 1]`; the last row never ends.
//!
//! ```text
//! num_spawns(t)     = Σ_i floor(clamp(t - time[i], 0, time[i+1] - time[i]) / interval[i])
//! next_spawn_in(t)  = interval[k] - (t - time[k]) % interval[k]
//!                     where k = last row with time[k] <= t
//! ```
//!
//! Both queries are pure; a `SpawnTable` never changes after construction.

pub mod row;
pub mod table;


pub use row::SpawnRow;
pub use table::SpawnTable;
