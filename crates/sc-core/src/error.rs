//! Configuration validation error.
//!
//! Every semantic check on spawn rows, spawn tables and profiles fails with a
//! [`ConfigError`].  The `kind` says what went wrong; the optional profile and
//! row names are attached for the operator and are not meant to be matched on.
//!
//! Sub-crates with other failure modes (I/O, decoding) define their own error
//! enums and wrap `ConfigError` as one variant.

use thiserror::Error;

/// What a configuration check rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigErrorKind {
    #[error("there must be at least one row")]
    EmptyTable,

    #[error("the first row must have time = 0")]
    FirstRowNotAtZero,

    #[error("row times must be strictly increasing")]
    TimesNotIncreasing,

    #[error("row intervals must be strictly decreasing")]
    IntervalsNotDecreasing,

    #[error("row start time must be a nonnegative integer")]
    NegativeTime,

    #[error("row spawn interval must be a positive integer")]
    ZeroInterval,

    #[error("row start time overflows after rounding to the previous interval")]
    TimeOverflow,

    #[error("profile is missing a spawn table")]
    MissingTable,

    #[error("unknown resource (expected \"emerald\" or \"diamond\")")]
    UnknownResource,

    #[error("there must be at least one profile")]
    NoProfiles,
}

/// A rejected configuration, with the profile and row it came from when known.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("config error: {kind}{}", context_suffix(.profile, .row))]
pub struct ConfigError {
    pub kind:    ConfigErrorKind,
    pub profile: Option<String>,
    pub row:     Option<String>,
}

impl ConfigError {
    pub fn new(kind: ConfigErrorKind) -> Self {
        Self { kind, profile: None, row: None }
    }

    /// Error citing the row it was raised for.
    pub fn for_row(kind: ConfigErrorKind, row: impl Into<String>) -> Self {
        Self { kind, profile: None, row: Some(row.into()) }
    }

    /// Attach the enclosing profile name.  An already-set profile is kept.
    #[must_use]
    pub fn in_profile(mut self, profile: impl Into<String>) -> Self {
        if self.profile.is_none() {
            self.profile = Some(profile.into());
        }
        self
    }
}

impl From<ConfigErrorKind> for ConfigError {
    fn from(kind: ConfigErrorKind) -> Self {
        Self::new(kind)
    }
}

fn context_suffix(profile: &Option<String>, row: &Option<String>) -> String {
    let mut out = String::new();
    if let Some(p) = profile {
        out.push_str("\n  Profile: ");
        out.push_str(p);
    }
    if let Some(r) = row {
        out.push_str("\n      Row: ");
        out.push_str(r);
    }
    out
}

/// Shorthand result type for configuration checks.
pub type ConfigResult<T> = Result<T, ConfigError>;
