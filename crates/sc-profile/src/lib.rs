//! `sc-profile` — named spawn profiles and loading them from disk.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`profile`]  | `Resource`, `SpawnProfile`, `ProfileSet`                  |
//! | [`loader`]   | `load_profiles_json`, `load_profiles_reader`, `profiles_from_str`, `load_profiles_csv`, `load_profiles_csv_reader` |
//! | [`error`]    | `ProfileError`, `ProfileResult<T>`                        |
//!
//! A profile carries one [`SpawnTable`](sc_table::SpawnTable) per
//! [`Resource`].  Loading is all-or-nothing: the first invalid row aborts the
//! whole file and the error names the profile and row it came from.

pub mod error;
pub mod loader;
pub mod profile;

#[cfg(test)]
mod tests;

pub use error::{ProfileError, ProfileResult};
pub use loader::{
    load_profiles_csv, load_profiles_csv_reader, load_profiles_json, load_profiles_reader,
    profiles_from_str,
};
pub use profile::{ProfileSet, Resource, SpawnProfile};
