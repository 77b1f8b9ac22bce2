//! Item records.

use serde::Serialize;
use serde_json::Value;

use crate::data::raw::{RawEffect, RawItem};
use crate::effect::{impl_effect_record, Category, EffectType};
use crate::id::sanitize_name;

/// Canonical item record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: String,
    pub name: String,
    pub effect_type: EffectType,
    pub category: Category,
    pub exists: bool,
    pub num: Option<i32>,
    pub gen: u8,
    /// Index into the item icon sheet
    pub spritenum: u32,
    pub desc: Option<String>,
    pub short_desc: Option<String>,
    pub mega_stone: Option<Value>,
    pub mega_evolves: Option<String>,
    pub fling_power: Option<u16>,
    pub is_nonstandard: Option<String>,
    #[serde(skip)]
    pub(crate) effect: Option<RawEffect>,
}

impl_effect_record!(Item);

/// Introduction generation for an item number. Items without a number date from Gen 3.
pub fn gen_from_num(num: Option<i32>) -> u8 {
    match num {
        Some(n) if n >= 577 => 6,
        Some(n) if n >= 537 => 5,
        Some(n) if n >= 377 => 4,
        _ => 3,
    }
}

pub(crate) fn build(id: &str, name: &str, raw: Option<&RawItem>) -> Item {
    let empty = RawItem::default();
    let raw = raw.unwrap_or(&empty);
    Item {
        id: raw.id.clone().filter(|s| !s.is_empty()).unwrap_or_else(|| id.to_string()),
        name: raw.name.clone().unwrap_or_else(|| sanitize_name(name)),
        effect_type: EffectType::Item,
        category: Category::Effect,
        exists: raw.name.is_some(),
        num: raw.num,
        gen: raw.gen.filter(|&g| g > 0).unwrap_or_else(|| gen_from_num(raw.num)),
        spritenum: raw.spritenum.unwrap_or(0),
        desc: raw.desc.clone(),
        short_desc: raw.short_desc.clone(),
        mega_stone: raw.mega_stone.clone(),
        mega_evolves: raw.mega_evolves.clone(),
        fling_power: raw.fling.map(|f| f.base_power),
        is_nonstandard: raw.is_nonstandard.clone(),
        effect: raw.effect.clone(),
    }
}
