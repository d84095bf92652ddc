//! counter — terminal spawn counter for the spawnclock workspace.
//!
//! Loads a profile file, runs the stopwatch for a number of ticks and prints
//! one line per tick with the spawn counts and time to the next spawn.
//!
//! ```text
//! counter --profiles demos/counter/data/profiles.json --profile Rush --ticks 20
//! counter --profiles demos/counter/data/profiles.json --at 125
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use sc_core::{ClockConfig, Elapsed};
use sc_profile::{ProfileSet, Resource, load_profiles_csv, load_profiles_json};
use sc_timer::{AppState, Frame, FrameObserver, Ticker};

// ── Command line ──────────────────────────────────────────────────────────────

#[derive(Parser)]
#[clap(about = "Count resource spawns from a profile's spawn tables")]
struct Args {
    /// Profile file (`.json`, or `.csv` for the tabular format).
    #[clap(long, default_value = "profiles.json")]
    profiles: PathBuf,

    /// Profile to use.  Defaults to the alphabetically first one.
    #[clap(long)]
    profile: Option<String>,

    #[clap(long, default_value_t = 1)]
    emerald_generators: u32,

    #[clap(long, default_value_t = 1)]
    diamond_generators: u32,

    /// Frames to print before exiting.
    #[clap(long, default_value_t = 50)]
    ticks: u64,

    /// Milliseconds between frames.
    #[clap(long)]
    interval_ms: Option<u64>,

    /// Print the single frame at this many elapsed seconds instead of running.
    #[clap(long)]
    at: Option<u64>,

    /// Hide milliseconds on the stopwatch.
    #[clap(long)]
    no_millis: bool,
}

// ── Output ────────────────────────────────────────────────────────────────────

struct LinePrinter;

impl LinePrinter {
    fn print(frame: &Frame) {
        let cells: Vec<String> = Resource::ALL
            .iter()
            .map(|&r| format!("{:<8} {}", format!("{r}:"), frame.readout(r)))
            .collect();
        println!("{}  |  {}", frame.stopwatch_text, cells.join("  |  "));
    }
}

impl FrameObserver for LinePrinter {
    fn on_frame(&mut self, _index: u64, frame: &Frame) {
        Self::print(frame);
    }

    fn on_stop(&mut self, frames: u64) {
        println!();
        println!("Stopped after {frames} frames");
    }
}

fn load(path: &Path) -> Result<ProfileSet> {
    let is_csv = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
    let profiles = if is_csv { load_profiles_csv(path) } else { load_profiles_json(path) };
    profiles.with_context(|| format!("loading profiles from {}", path.display()))
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();

    let defaults = ClockConfig::default();
    let config = ClockConfig {
        update_interval_ms: args.interval_ms.unwrap_or(defaults.update_interval_ms),
        show_millis:        !args.no_millis,
    };

    // 1. Load and validate every profile up front.
    let profiles = load(&args.profiles)?;
    println!("=== counter — spawnclock ===");
    println!("Loaded {} profiles from {}", profiles.len(), args.profiles.display());
    for profile in profiles.iter() {
        let starts: Vec<String> = Resource::ALL
            .iter()
            .map(|&r| {
                let rows = profile.table(r).rows();
                let times: Vec<String> = rows
                    .iter()
                    .map(|row| format!("{}@{}s/{}s", row.name(), row.time(), row.interval()))
                    .collect();
                format!("{r}: {}", times.join(", "))
            })
            .collect();
        println!("  {:<12} {}", profile.name(), starts.join("  ;  "));
    }
    println!();

    // 2. Application state.
    let mut state = AppState::new(profiles, config.clone());
    if let Some(name) = &args.profile {
        state.select_profile(name)?;
    }
    state.set_generators(Resource::Emerald, args.emerald_generators);
    state.set_generators(Resource::Diamond, args.diamond_generators);
    println!(
        "Profile: {}  |  Generators: {} emerald, {} diamond",
        state.profile().name(),
        args.emerald_generators,
        args.diamond_generators
    );
    println!();

    // 3. One-shot evaluation, or the live loop.
    if let Some(secs) = args.at {
        LinePrinter::print(&state.frame_at(Elapsed::from_secs(secs)));
        return Ok(());
    }

    Ticker::new(config).run(&mut state, &mut LinePrinter, args.ticks);
    Ok(())
}
