//! `sc-core` — foundational types for the `spawnclock` workspace.
//!
//! This crate is a dependency of every other `sc-*` crate.  It has no `sc-*`
//! dependencies and only `thiserror` (plus optional `serde`) from outside.
//!
//! # What lives here
//!
//! | Module      | Contents                                                |
//! |-------------|---------------------------------------------------------|
//! | [`error`]   | `ConfigError`, `ConfigErrorKind`, `ConfigResult`        |
//! | [`time`]    | `Elapsed`, `ClockText`, `ClockConfig`                   |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to `Elapsed` and `ClockConfig`. |

pub mod error;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{ConfigError, ConfigErrorKind, ConfigResult};
pub use time::{ClockConfig, ClockText, Elapsed};
