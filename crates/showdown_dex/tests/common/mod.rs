//! Shared helpers for the integration tests.
//!
//! The fixture tables under `tests/fixtures/dex/` are a small slice of the
//! client data files, in the same format.

#![allow(dead_code)]

use std::path::PathBuf;

use showdown_dex::{Dex, DexData, Preferences};

/// Directory holding the fixture data tables.
pub fn fixture_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/dex")
}

pub fn fixture_data() -> DexData {
    DexData::load_dir(&fixture_dir()).expect("fixture tables should load")
}

/// A fresh dex over the fixture tables with default config and preferences.
pub fn fixture_dex() -> Dex {
    Dex::new(fixture_data())
}

pub fn fixture_dex_with(prefs: impl Preferences + 'static) -> Dex {
    fixture_dex().with_preferences(prefs)
}
