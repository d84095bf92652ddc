//! `sc-timer` — the display side of the spawn counter.
//!
//! # Tick loop
//!
//! ```text
//! every config.update_interval_ms:
//!   ① elapsed   = stopwatch.elapsed(now)          (NotRunning before start)
//!   ② per resource:
//!        count    = table.num_spawns(secs or 0) × generators
//!        next_in  = table.next_spawn_in(secs)      (only while running)
//!   ③ observer.on_frame(frame)
//! ```
//!
//! The spawn tables are never touched by the loop; everything mutable (the
//! selected profile, generator counts, the stopwatch) lives in [`AppState`].
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use sc_core::ClockConfig;
//! use sc_profile::load_profiles_json;
//! use sc_timer::{AppState, NoopObserver, Ticker};
//!
//! let profiles = load_profiles_json(Path::new("profiles.json"))?;
//! let mut state = AppState::new(profiles, ClockConfig::default());
//! Ticker::new(state.config().clone()).run(&mut state, &mut NoopObserver, 10);
//! ```

pub mod error;
pub mod observer;
pub mod readout;
pub mod state;
pub mod stopwatch;
pub mod ticker;


pub use error::{TimerError, TimerResult};
pub use observer::{FrameObserver, NoopObserver};
pub use readout::CounterReadout;
pub use state::{AppState, Frame};
pub use stopwatch::Stopwatch;
pub use ticker::Ticker;
