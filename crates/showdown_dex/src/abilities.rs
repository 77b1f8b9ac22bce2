//! Ability records.

use serde::Serialize;

use crate::data::raw::{RawAbility, RawEffect};
use crate::effect::{impl_effect_record, Category, EffectType};
use crate::id::sanitize_name;

/// Canonical ability record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ability {
    pub id: String,
    pub name: String,
    pub effect_type: EffectType,
    pub category: Category,
    pub exists: bool,
    pub num: Option<i32>,
    pub gen: u8,
    pub desc: Option<String>,
    pub short_desc: Option<String>,
    pub rating: Option<f32>,
    pub is_nonstandard: Option<String>,
    #[serde(skip)]
    pub(crate) effect: Option<RawEffect>,
}

impl_effect_record!(Ability);

/// Introduction generation for an ability number.
pub fn gen_from_num(num: Option<i32>) -> u8 {
    match num.unwrap_or(0) {
        n if n >= 165 => 6,
        n if n >= 124 => 5,
        n if n >= 77 => 4,
        n if n >= 1 => 3,
        _ => 0,
    }
}

pub(crate) fn build(id: &str, name: &str, raw: Option<&RawAbility>) -> Ability {
    let empty = RawAbility::default();
    let raw = raw.unwrap_or(&empty);
    Ability {
        id: raw.id.clone().filter(|s| !s.is_empty()).unwrap_or_else(|| id.to_string()),
        name: raw.name.clone().unwrap_or_else(|| sanitize_name(name)),
        effect_type: EffectType::Ability,
        category: Category::Effect,
        exists: raw.name.is_some(),
        num: raw.num,
        gen: raw.gen.filter(|&g| g > 0).unwrap_or_else(|| gen_from_num(raw.num)),
        desc: raw.desc.clone(),
        short_desc: raw.short_desc.clone(),
        rating: raw.rating,
        is_nonstandard: raw.is_nonstandard.clone(),
        effect: raw.effect.clone(),
    }
}
