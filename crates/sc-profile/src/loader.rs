//! Profile loaders.
//!
//! # JSON format (`profiles.json`)
//!
//! One key per profile; each profile has one row array per resource.
//!
//! ```json
//! {
//!   "Normal": {
//!     "emeraldST": [
//!       { "name": "Tier 1", "time": 0,   "interval": 60 },
//!       { "name": "Tier 2", "time": 120, "interval": 30 }
//!     ],
//!     "diamondST": [
//!       { "name": "Tier 1", "time": 0,   "interval": 90 }
//!     ]
//!   }
//! }
//! ```
//!
//! # CSV format
//!
//! One row per spawn-table row.  Rows of the same `(profile, resource)` pair
//! form one table, in file order.
//!
//! ```csv
//! profile,resource,name,time,interval
//! Normal,emerald,Tier 1,0,60
//! Normal,emerald,Tier 2,120,30
//! Normal,diamond,Tier 1,0,90
//! ```
//!
//! **`resource`** is `emerald` or `diamond` (case-insensitive).
//!
//! Both formats decode `time` and `interval` as signed integers so that a
//! negative value is reported as a configuration error naming the row rather
//! than a bare decode error.  Fractional values fail to decode.

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use sc_core::{ConfigError, ConfigErrorKind, ConfigResult};
use sc_table::{SpawnRow, SpawnTable};

use crate::profile::{ProfileSet, Resource, SpawnProfile};
use crate::ProfileError;

// ── Raw records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct RowRecord {
    name:     String,
    time:     i64,
    interval: i64,
}

#[derive(Deserialize)]
struct ProfileRecord {
    #[serde(rename = "emeraldST")]
    emerald: Option<Vec<RowRecord>>,
    #[serde(rename = "diamondST")]
    diamond: Option<Vec<RowRecord>>,
}

#[derive(Deserialize)]
struct CsvRecord {
    profile:  String,
    resource: String,
    name:     String,
    time:     i64,
    interval: i64,
}

// ── JSON ──────────────────────────────────────────────────────────────────────

/// Load every profile from a `profiles.json` file.
pub fn load_profiles_json(path: &Path) -> Result<ProfileSet, ProfileError> {
    let file = std::fs::File::open(path)?;
    load_profiles_reader(std::io::BufReader::new(file))
}

/// Like [`load_profiles_json`] but accepts any `Read` source.
pub fn load_profiles_reader<R: Read>(reader: R) -> Result<ProfileSet, ProfileError> {
    let records: BTreeMap<String, ProfileRecord> = serde_json::from_reader(reader)?;
    build_json(records)
}

/// Like [`load_profiles_json`] for JSON already in memory.
pub fn profiles_from_str(json: &str) -> Result<ProfileSet, ProfileError> {
    let records: BTreeMap<String, ProfileRecord> = serde_json::from_str(json)?;
    build_json(records)
}

fn build_json(records: BTreeMap<String, ProfileRecord>) -> Result<ProfileSet, ProfileError> {
    let profiles = records
        .into_iter()
        .map(|(name, record)| {
            let emerald = build_table(&name, record.emerald)?;
            let diamond = build_table(&name, record.diamond)?;
            Ok(SpawnProfile::new(name, emerald, diamond))
        })
        .collect::<ConfigResult<Vec<_>>>()?;

    Ok(ProfileSet::new(profiles)?)
}

// ── CSV ───────────────────────────────────────────────────────────────────────

/// Load every profile from a CSV file.
pub fn load_profiles_csv(path: &Path) -> Result<ProfileSet, ProfileError> {
    let file = std::fs::File::open(path)?;
    load_profiles_csv_reader(file)
}

/// Like [`load_profiles_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or for embedded tables.
pub fn load_profiles_csv_reader<R: Read>(reader: R) -> Result<ProfileSet, ProfileError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut by_profile: BTreeMap<String, [Vec<RowRecord>; 2]> = BTreeMap::new();

    for result in csv_reader.deserialize::<CsvRecord>() {
        let rec = result?;
        let Some(resource) = Resource::from_csv_name(&rec.resource) else {
            return Err(ConfigError::for_row(ConfigErrorKind::UnknownResource, rec.name)
                .in_profile(rec.profile)
                .into());
        };
        by_profile.entry(rec.profile).or_default()[resource.index()].push(RowRecord {
            name:     rec.name,
            time:     rec.time,
            interval: rec.interval,
        });
    }

    let profiles = by_profile
        .into_iter()
        .map(|(name, [emerald, diamond])| {
            let emerald = build_table(&name, non_empty(emerald))?;
            let diamond = build_table(&name, non_empty(diamond))?;
            Ok(SpawnProfile::new(name, emerald, diamond))
        })
        .collect::<ConfigResult<Vec<_>>>()?;

    Ok(ProfileSet::new(profiles)?)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn non_empty(rows: Vec<RowRecord>) -> Option<Vec<RowRecord>> {
    (!rows.is_empty()).then_some(rows)
}

fn build_table(profile: &str, rows: Option<Vec<RowRecord>>) -> ConfigResult<SpawnTable> {
    let Some(rows) = rows else {
        return Err(ConfigError::new(ConfigErrorKind::MissingTable).in_profile(profile));
    };
    rows.into_iter()
        .map(|r| SpawnRow::from_signed(r.name, r.time, r.interval))
        .collect::<ConfigResult<Vec<_>>>()
        .and_then(SpawnTable::new)
        .map_err(|e| e.in_profile(profile))
}
