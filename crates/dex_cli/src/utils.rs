use std::path::PathBuf;

use serde::Serialize;
use showdown_dex::{Dex, DexConfig, Result};

/// Build a dex from an explicit or discovered config, with `data` taking
/// precedence over the config's `data_dir`.
pub fn load_dex(data: Option<PathBuf>, config: Option<PathBuf>) -> Result<Dex> {
    let mut config = match config {
        Some(path) => DexConfig::load(&path)?,
        None => DexConfig::discover()?,
    };
    if let Some(dir) = data {
        config.data_dir = Some(dir);
    }
    tracing::debug!(?config, "loading dex");
    Dex::from_config(config)
}

pub fn print_json(value: &impl Serialize) -> serde_json::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
