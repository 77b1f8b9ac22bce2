//! JSON deserialization structures for Showdown data tables.
//!
//! These mirror the client's data files field-for-field (camelCase on the
//! wire). Every field is optional: resolvers backfill what is missing.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::effect::{Category, EffectType};
use crate::species::AbilitySlot;

/// A status/volatile/weather entry, or an effect embedded in a move, item or ability.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawEffect {
    pub id: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "effectType")]
    pub effect_type: Option<EffectType>,
    pub category: Option<Category>,
    /// Everything else (durations, handlers' data, descriptions)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Older tables mark nonstandard entries with a bare `true`.
pub const NONSTANDARD_FLAG: &str = "Nonstandard";

/// `isNonstandard` is a tag such as `"CAP"` or `"Past"`, or a boolean in
/// older data. `false` and `""` both mean a standard entry.
fn nonstandard<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Tag {
        Flag(bool),
        Name(String),
    }

    Ok(match Option::<Tag>::deserialize(deserializer)? {
        Some(Tag::Flag(true)) => Some(NONSTANDARD_FLAG.to_string()),
        Some(Tag::Name(name)) if !name.is_empty() => Some(name),
        _ => None,
    })
}

/// `accuracy` is `true` for moves that never miss, else a percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawAccuracy {
    Always(bool),
    Percent(u8),
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawMove {
    pub id: Option<String>,
    pub name: Option<String>,
    pub num: Option<i32>,
    pub gen: Option<u8>,
    #[serde(rename = "basePower")]
    pub base_power: Option<u32>,
    pub accuracy: Option<RawAccuracy>,
    pub pp: Option<u8>,
    pub priority: Option<i8>,
    pub category: Option<Category>,
    #[serde(rename = "type")]
    pub move_type: Option<String>,
    #[serde(rename = "baseType")]
    pub base_type: Option<String>,
    #[serde(rename = "critRatio")]
    pub crit_ratio: Option<u8>,
    #[serde(default)]
    pub flags: HashMap<String, Value>,
    pub secondary: Option<Value>,
    pub secondaries: Option<Vec<Value>>,
    pub target: Option<String>,
    pub desc: Option<String>,
    #[serde(rename = "shortDesc")]
    pub short_desc: Option<String>,
    #[serde(rename = "isNonstandard", default, deserialize_with = "nonstandard")]
    pub is_nonstandard: Option<String>,
    pub effect: Option<RawEffect>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RawFling {
    #[serde(rename = "basePower")]
    pub base_power: u16,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawItem {
    pub id: Option<String>,
    pub name: Option<String>,
    pub num: Option<i32>,
    pub gen: Option<u8>,
    pub spritenum: Option<u32>,
    pub desc: Option<String>,
    #[serde(rename = "shortDesc")]
    pub short_desc: Option<String>,
    #[serde(rename = "megaStone")]
    pub mega_stone: Option<Value>,
    #[serde(rename = "megaEvolves")]
    pub mega_evolves: Option<String>,
    pub fling: Option<RawFling>,
    #[serde(rename = "isNonstandard", default, deserialize_with = "nonstandard")]
    pub is_nonstandard: Option<String>,
    pub effect: Option<RawEffect>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawAbility {
    pub id: Option<String>,
    pub name: Option<String>,
    pub num: Option<i32>,
    pub gen: Option<u8>,
    pub desc: Option<String>,
    #[serde(rename = "shortDesc")]
    pub short_desc: Option<String>,
    pub rating: Option<f32>,
    #[serde(rename = "isNonstandard", default, deserialize_with = "nonstandard")]
    pub is_nonstandard: Option<String>,
    pub effect: Option<RawEffect>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseStats {
    pub hp: u16,
    pub atk: u16,
    pub def: u16,
    pub spa: u16,
    pub spd: u16,
    pub spe: u16,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSpecies {
    pub id: Option<String>,
    pub num: Option<i32>,
    /// Older data calls this `species`
    #[serde(alias = "species")]
    pub name: Option<String>,
    #[serde(rename = "baseSpecies")]
    pub base_species: Option<String>,
    pub forme: Option<String>,
    #[serde(rename = "formeLetter")]
    pub forme_letter: Option<String>,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(rename = "baseStats")]
    pub base_stats: Option<BaseStats>,
    #[serde(default)]
    pub abilities: BTreeMap<AbilitySlot, String>,
    pub weightkg: Option<f64>,
    #[serde(default)]
    pub evos: Vec<String>,
    pub prevo: Option<String>,
    /// Cosmetic forms sharing this entry's data
    #[serde(rename = "otherForms", default)]
    pub other_forms: Vec<String>,
    /// Formes with their own entries
    #[serde(rename = "otherFormes", default)]
    pub other_formes: Vec<String>,
    pub gen: Option<u8>,
    pub tier: Option<String>,
    #[serde(rename = "isNonstandard", default, deserialize_with = "nonstandard")]
    pub is_nonstandard: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawType {
    #[serde(rename = "damageTaken")]
    pub damage_taken: Option<BTreeMap<String, u8>>,
}

/// Per-generation ability overrides from the teambuilder table.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenOverrides {
    /// Species id -> replacement for slot "0"
    #[serde(rename = "overrideAbility", default)]
    pub override_ability: HashMap<String, String>,
    /// Species ids whose slot "1" did not exist yet
    #[serde(rename = "removeSecondAbility", default)]
    pub remove_second_ability: HashMap<String, Value>,
}

/// Size of one animated sprite frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameSize {
    pub w: u32,
    pub h: u32,
}

/// Per-species entry of the sprite metadata tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct SpriteMeta {
    #[serde(default)]
    pub num: i32,
    pub front: Option<FrameSize>,
    pub frontf: Option<FrameSize>,
    pub back: Option<FrameSize>,
    pub backf: Option<FrameSize>,
}
