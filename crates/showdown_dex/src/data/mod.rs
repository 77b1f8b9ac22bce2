//! Raw data tables consumed by the resolvers.
//!
//! The tables are read-only once a [`Dex`](crate::Dex) is built. They can be
//! parsed from JSON strings or loaded from a directory laid out like the
//! client's `data/` folder.

pub mod raw;

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{DexError, Result};
use raw::{GenOverrides, RawAbility, RawEffect, RawItem, RawMove, RawSpecies, RawType, SpriteMeta};

/// Sprite metadata table: species id -> frame sizes.
pub type SpriteTable = HashMap<String, SpriteMeta>;

/// One JSON table of the data directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    Pokedex,
    Moves,
    Items,
    Abilities,
    TypeChart,
    Aliases,
    Statuses,
    Teambuilder,
    Formes,
    SpritesXy,
    SpritesBw,
}

impl Table {
    pub const ALL: [Table; 11] = [
        Table::Pokedex,
        Table::Moves,
        Table::Items,
        Table::Abilities,
        Table::TypeChart,
        Table::Aliases,
        Table::Statuses,
        Table::Teambuilder,
        Table::Formes,
        Table::SpritesXy,
        Table::SpritesBw,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            Table::Pokedex => "pokedex.json",
            Table::Moves => "moves.json",
            Table::Items => "items.json",
            Table::Abilities => "abilities.json",
            Table::TypeChart => "typechart.json",
            Table::Aliases => "aliases.json",
            Table::Statuses => "statuses.json",
            Table::Teambuilder => "teambuilder.json",
            Table::Formes => "formes.json",
            Table::SpritesXy => "sprites-xy.json",
            Table::SpritesBw => "sprites-bw.json",
        }
    }

    /// The five core tables must exist; the rest are loaded when present.
    pub fn is_required(self) -> bool {
        matches!(
            self,
            Table::Pokedex | Table::Moves | Table::Items | Table::Abilities | Table::TypeChart
        )
    }
}

/// Every raw table the dex reads from.
#[derive(Debug, Clone, Default)]
pub struct DexData {
    pub pokedex: HashMap<String, RawSpecies>,
    pub moves: HashMap<String, RawMove>,
    pub items: HashMap<String, RawItem>,
    pub abilities: HashMap<String, RawAbility>,
    /// Keyed by capitalized type name ("Fire")
    pub types: HashMap<String, RawType>,
    /// Alias id -> canonical display name
    pub aliases: HashMap<String, String>,
    pub statuses: HashMap<String, RawEffect>,
    /// "gen3".."gen6" -> ability overrides
    pub teambuilder: HashMap<String, GenOverrides>,
    /// Base species ids whose formes are spelled as a plain suffix
    pub base_species_stems: Vec<String>,
    pub sprites_xy: SpriteTable,
    pub sprites_bw: SpriteTable,
}

impl DexData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every table found in `dir`.
    pub fn load_dir(dir: &Path) -> Result<Self> {
        let mut data = Self::default();
        for table in Table::ALL {
            let path = dir.join(table.file_name());
            let json = match fs::read_to_string(&path) {
                Ok(json) => json,
                Err(e) if e.kind() == io::ErrorKind::NotFound && !table.is_required() => {
                    tracing::debug!(path = %path.display(), "optional data table not found");
                    continue;
                }
                Err(source) => return Err(DexError::Io { path, source }),
            };
            data.insert_json(table, &json).map_err(|e| match e {
                DexError::Table { source, .. } => DexError::Parse {
                    path: path.clone(),
                    source,
                },
                other => other,
            })?;
        }
        tracing::debug!(
            species = data.pokedex.len(),
            moves = data.moves.len(),
            items = data.items.len(),
            abilities = data.abilities.len(),
            "loaded dex data from {}",
            dir.display()
        );
        Ok(data)
    }

    /// Parse `json` into the given table, replacing its contents.
    pub fn insert_json(&mut self, table: Table, json: &str) -> Result<()> {
        match table {
            Table::Pokedex => self.pokedex = parse("pokedex", json)?,
            Table::Moves => self.moves = parse("moves", json)?,
            Table::Items => self.items = parse("items", json)?,
            Table::Abilities => self.abilities = parse("abilities", json)?,
            Table::TypeChart => self.types = parse("typechart", json)?,
            Table::Aliases => self.aliases = parse("aliases", json)?,
            Table::Statuses => self.statuses = parse("statuses", json)?,
            Table::Teambuilder => self.teambuilder = parse("teambuilder", json)?,
            Table::Formes => self.base_species_stems = parse("formes", json)?,
            Table::SpritesXy => self.sprites_xy = parse("sprites-xy", json)?,
            Table::SpritesBw => self.sprites_bw = parse("sprites-bw", json)?,
        }
        Ok(())
    }

    /// Builder form of [`insert_json`](Self::insert_json).
    pub fn with_json(mut self, table: Table, json: &str) -> Result<Self> {
        self.insert_json(table, json)?;
        Ok(self)
    }
}

fn parse<T: DeserializeOwned>(table: &'static str, json: &str) -> Result<T> {
    serde_json::from_str(json).map_err(|source| DexError::Table { table, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_json() {
        let data = DexData::new()
            .with_json(Table::Aliases, r#"{"zardmx": "Charizard-Mega-X"}"#)
            .unwrap()
            .with_json(Table::Formes, r#"["pikachu", "rotom"]"#)
            .unwrap();
        assert_eq!(data.aliases["zardmx"], "Charizard-Mega-X");
        assert_eq!(data.base_species_stems, vec!["pikachu", "rotom"]);
    }

    #[test]
    fn test_bad_json_names_the_table() {
        let err = DexData::new().with_json(Table::Moves, "{not json").unwrap_err();
        assert!(err.to_string().contains("moves"));
    }

    #[test]
    fn test_load_dir_requires_core_tables() {
        let dir = tempfile::tempdir().unwrap();
        let err = DexData::load_dir(dir.path()).unwrap_err();
        assert!(matches!(err, DexError::Io { .. }));
    }

    #[test]
    fn test_load_dir_skips_optional_tables() {
        let dir = tempfile::tempdir().unwrap();
        for table in Table::ALL.iter().filter(|t| t.is_required()) {
            fs::write(dir.path().join(table.file_name()), "{}").unwrap();
        }
        fs::write(
            dir.path().join("moves.json"),
            r#"{"tackle": {"num": 33, "name": "Tackle", "basePower": 40, "type": "Normal", "category": "Physical"}}"#,
        )
        .unwrap();
        let data = DexData::load_dir(dir.path()).unwrap();
        assert_eq!(data.moves["tackle"].base_power, Some(40));
        assert!(data.aliases.is_empty());
        assert!(data.sprites_bw.is_empty());
    }

    #[test]
    fn test_load_dir_reports_parse_path() {
        let dir = tempfile::tempdir().unwrap();
        for table in Table::ALL.iter().filter(|t| t.is_required()) {
            fs::write(dir.path().join(table.file_name()), "{}").unwrap();
        }
        fs::write(dir.path().join("items.json"), "[1, 2]").unwrap();
        match DexData::load_dir(dir.path()) {
            Err(DexError::Parse { path, .. }) => assert!(path.ends_with("items.json")),
            other => panic!("expected parse error, got {:?}", other.map(|_| ())),
        }
    }
}
