//! Elemental type records.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::data::raw::RawType;
use crate::effect::{impl_effect_record, Category, EffectType};

/// Canonical type record. `id` is the capitalized name ("Fire").
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeInfo {
    pub id: String,
    pub name: String,
    pub effect_type: EffectType,
    pub category: Category,
    pub exists: bool,
    /// Attacking type -> damage code (0 neutral, 1 weak, 2 resist, 3 immune)
    pub damage_taken: BTreeMap<String, u8>,
}

impl_effect_record!(TypeInfo);

pub(crate) fn build(id: &str, raw: Option<&RawType>) -> TypeInfo {
    let damage_taken = raw.and_then(|r| r.damage_taken.clone());
    TypeInfo {
        id: id.to_string(),
        name: id.to_string(),
        effect_type: EffectType::Type,
        category: Category::Effect,
        exists: damage_taken.is_some(),
        damage_taken: damage_taken.unwrap_or_default(),
    }
}
