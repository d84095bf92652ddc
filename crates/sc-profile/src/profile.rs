//! Core profile types: `Resource`, `SpawnProfile`, and `ProfileSet`.
//!
//! A profile is one named difficulty/setup of the game being timed.  It
//! holds an independent spawn table for each resource the counter tracks.

use std::fmt;

use sc_core::{ConfigErrorKind, ConfigResult};
use sc_table::SpawnTable;

// ── Resource ──────────────────────────────────────────────────────────────────

/// A resource with its own spawn table in every profile.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Resource {
    Emerald,
    Diamond,
}

impl Resource {
    /// Display order.
    pub const ALL: [Resource; 2] = [Resource::Emerald, Resource::Diamond];

    /// Key of this resource's table in `profiles.json`.
    pub fn key(self) -> &'static str {
        match self {
            Resource::Emerald => "emeraldST",
            Resource::Diamond => "diamondST",
        }
    }

    /// Value in the `resource` column of the CSV format.
    pub fn csv_name(self) -> &'static str {
        match self {
            Resource::Emerald => "emerald",
            Resource::Diamond => "diamond",
        }
    }

    /// Parse a CSV `resource` value (case-insensitive, surrounding blanks
    /// ignored).
    pub fn from_csv_name(s: &str) -> Option<Resource> {
        let s = s.trim();
        Resource::ALL
            .into_iter()
            .find(|r| r.csv_name().eq_ignore_ascii_case(s))
    }

    /// Counter label for `count` spawned items.
    pub fn label(self, count: u64) -> &'static str {
        match (self, count == 1) {
            (Resource::Emerald, true) => "Emerald",
            (Resource::Emerald, false) => "Emeralds",
            (Resource::Diamond, true) => "Diamond",
            (Resource::Diamond, false) => "Diamonds",
        }
    }

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.csv_name())
    }
}

// ── SpawnProfile ──────────────────────────────────────────────────────────────

/// A named pair of spawn tables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpawnProfile {
    name:    String,
    emerald: SpawnTable,
    diamond: SpawnTable,
}

impl SpawnProfile {
    pub fn new(name: impl Into<String>, emerald: SpawnTable, diamond: SpawnTable) -> Self {
        Self { name: name.into(), emerald, diamond }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn table(&self, resource: Resource) -> &SpawnTable {
        match resource {
            Resource::Emerald => &self.emerald,
            Resource::Diamond => &self.diamond,
        }
    }
}

// ── ProfileSet ────────────────────────────────────────────────────────────────

/// All loaded profiles, sorted alphabetically by name.
///
/// Never empty.  Replaced wholesale on reload; nothing mutates it in place.
#[derive(Clone, Debug)]
pub struct ProfileSet {
    profiles: Vec<SpawnProfile>,
}

impl ProfileSet {
    /// Sort `profiles` by name.  Rejects an empty list.
    pub fn new(mut profiles: Vec<SpawnProfile>) -> ConfigResult<Self> {
        if profiles.is_empty() {
            return Err(ConfigErrorKind::NoProfiles.into());
        }
        profiles.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(Self { profiles })
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// The alphabetically first profile — the default selection.
    pub fn first(&self) -> &SpawnProfile {
        &self.profiles[0]
    }

    /// Profile at `index` in sorted order.
    pub fn at(&self, index: usize) -> Option<&SpawnProfile> {
        self.profiles.get(index)
    }

    pub fn get(&self, name: &str) -> Option<&SpawnProfile> {
        self.position(name).map(|i| &self.profiles[i])
    }

    /// Index of `name` in sorted order.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.profiles
            .binary_search_by(|p| p.name.as_str().cmp(name))
            .ok()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SpawnProfile> {
        self.profiles.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.profiles.iter().map(SpawnProfile::name)
    }
}
