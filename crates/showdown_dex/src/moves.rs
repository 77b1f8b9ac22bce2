//! Move records.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::data::raw::{RawAccuracy, RawEffect, RawMove};
use crate::effect::{impl_effect_record, Category, EffectType};
use crate::id::sanitize_name;

bitflags! {
    /// Boolean move tags from the data's `flags` object.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct MoveFlags: u64 {
        const CONTACT = 1 << 0;
        const PROTECT = 1 << 1;
        const MIRROR = 1 << 2;
        const HEAL = 1 << 3;
        const BYPASS_SUB = 1 << 4;
        const BITE = 1 << 5;
        const PUNCH = 1 << 6;
        const SOUND = 1 << 7;
        const POWDER = 1 << 8;
        const BULLET = 1 << 9;
        const PULSE = 1 << 10;
        const WIND = 1 << 11;
        const SLICING = 1 << 12;
        const DANCE = 1 << 13;
        const GRAVITY = 1 << 14;
        const DEFROST = 1 << 15;
        const DISTANCE = 1 << 16;
        const CHARGE = 1 << 17;
        const RECHARGE = 1 << 18;
        const NONSKY = 1 << 19;
        const ALLY_ANIM = 1 << 20;
        const NO_ASSIST = 1 << 21;
        const FAIL_COPYCAT = 1 << 22;
        const FAIL_ENCORE = 1 << 23;
        const FAIL_INSTRUCT = 1 << 24;
        const FAIL_MIMIC = 1 << 25;
        const FAIL_SKETCH = 1 << 26;
        const FUTURE_MOVE = 1 << 27;
        const SNATCH = 1 << 28;
        const REFLECTABLE = 1 << 29;
        const AUTHENTIC = 1 << 30;
        const MYSTERY = 1 << 31;
        const NO_SLEEP_TALK = 1 << 32;
        const NO_PARENTAL_BOND = 1 << 33;
        const CANT_USE_TWICE = 1 << 34;
        const METRONOME = 1 << 35;
        const MUST_PRESSURE = 1 << 36;
        const PLEDGE_COMBO = 1 << 37;
    }
}

impl MoveFlags {
    /// Map a key of the data's `flags` object to its bit.
    pub fn from_key(key: &str) -> Option<Self> {
        let flag = match key {
            "contact" => Self::CONTACT,
            "protect" => Self::PROTECT,
            "mirror" => Self::MIRROR,
            "heal" => Self::HEAL,
            "bypasssub" => Self::BYPASS_SUB,
            "bite" => Self::BITE,
            "punch" => Self::PUNCH,
            "sound" => Self::SOUND,
            "powder" => Self::POWDER,
            "bullet" => Self::BULLET,
            "pulse" => Self::PULSE,
            "wind" => Self::WIND,
            "slicing" => Self::SLICING,
            "dance" => Self::DANCE,
            "gravity" => Self::GRAVITY,
            "defrost" => Self::DEFROST,
            "distance" => Self::DISTANCE,
            "charge" => Self::CHARGE,
            "recharge" => Self::RECHARGE,
            "nonsky" => Self::NONSKY,
            "allyanim" => Self::ALLY_ANIM,
            "noassist" => Self::NO_ASSIST,
            "failcopycat" => Self::FAIL_COPYCAT,
            "failencore" => Self::FAIL_ENCORE,
            "failinstruct" => Self::FAIL_INSTRUCT,
            "failmimic" => Self::FAIL_MIMIC,
            "failsketch" => Self::FAIL_SKETCH,
            "futuremove" => Self::FUTURE_MOVE,
            "snatch" => Self::SNATCH,
            "reflectable" => Self::REFLECTABLE,
            "authentic" => Self::AUTHENTIC,
            "mystery" => Self::MYSTERY,
            "nosleeptalk" => Self::NO_SLEEP_TALK,
            "noparentalbond" => Self::NO_PARENTAL_BOND,
            "cantusetwice" => Self::CANT_USE_TWICE,
            "metronome" => Self::METRONOME,
            "mustpressure" => Self::MUST_PRESSURE,
            "pledgecombo" => Self::PLEDGE_COMBO,
            _ => return None,
        };
        Some(flag)
    }

    fn from_data(flags: &std::collections::HashMap<String, Value>) -> Self {
        let mut bits = Self::empty();
        for (key, value) in flags {
            if matches!(value, Value::Null | Value::Bool(false)) || value.as_i64() == Some(0) {
                continue;
            }
            match Self::from_key(key) {
                Some(flag) => bits |= flag,
                None => tracing::trace!(flag = key.as_str(), "ignoring unknown move flag"),
            }
        }
        bits
    }
}

/// Move accuracy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawAccuracy", into = "RawAccuracy")]
pub enum Accuracy {
    AlwaysHits,
    Percent(u8),
}

impl From<RawAccuracy> for Accuracy {
    fn from(raw: RawAccuracy) -> Self {
        match raw {
            RawAccuracy::Always(_) => Accuracy::AlwaysHits,
            RawAccuracy::Percent(p) => Accuracy::Percent(p),
        }
    }
}

impl From<Accuracy> for RawAccuracy {
    fn from(acc: Accuracy) -> Self {
        match acc {
            Accuracy::AlwaysHits => RawAccuracy::Always(true),
            Accuracy::Percent(p) => RawAccuracy::Percent(p),
        }
    }
}

/// Canonical move record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Move {
    pub id: String,
    pub name: String,
    pub effect_type: EffectType,
    pub category: Category,
    pub exists: bool,
    pub num: Option<i32>,
    pub gen: u8,
    pub base_power: u32,
    pub accuracy: Option<Accuracy>,
    pub pp: u8,
    pub priority: i8,
    #[serde(rename = "type")]
    pub move_type: String,
    pub base_type: String,
    pub crit_ratio: u8,
    pub flags: MoveFlags,
    pub secondaries: Vec<Value>,
    pub target: Option<String>,
    pub desc: Option<String>,
    pub short_desc: Option<String>,
    pub is_nonstandard: Option<String>,
    #[serde(skip)]
    pub(crate) effect: Option<RawEffect>,
}

impl_effect_record!(Move);

/// Types whose moves were all special before the physical/special split.
const SPECIAL_TYPES: [&str; 8] = [
    "Fire", "Water", "Grass", "Electric", "Ice", "Psychic", "Dark", "Dragon",
];

/// Category of `mv` as it behaved in `gen`.
///
/// Through Gen 3 a damaging move's category followed its type; `type_override`
/// replaces the move's own type for that check (e.g. Hidden Power's real type).
pub fn category_for_gen(mv: &Move, gen: u8, type_override: Option<&str>) -> Category {
    if gen <= 3 && mv.category != Category::Status {
        let move_type = type_override.unwrap_or(&mv.move_type);
        return if SPECIAL_TYPES.contains(&move_type) {
            Category::Special
        } else {
            Category::Physical
        };
    }
    mv.category
}

/// Introduction generation for a move number.
pub fn gen_from_num(num: Option<i32>) -> u8 {
    match num.unwrap_or(0) {
        n if n >= 560 => 6,
        n if n >= 468 => 5,
        n if n >= 355 => 4,
        n if n >= 252 => 3,
        n if n >= 166 => 2,
        n if n >= 1 => 1,
        _ => 0,
    }
}

/// Split a variable-power id into the base move id and its power.
///
/// `hiddenpowerfire60` -> (`hiddenpowerfire`, 60), `return102` -> (`return`, 102).
pub fn variable_power_base(id: &str) -> Option<(&str, u32)> {
    if id.len() > "hiddenpower".len() && id.starts_with("hiddenpower") {
        let split = id
            .find(|c: char| !c.is_ascii_lowercase())
            .unwrap_or(id.len());
        let digits: &str = {
            let rest = &id[split..];
            let end = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
            &rest[..end]
        };
        return digits.parse().ok().map(|power| (&id[..split], power));
    }
    for base in ["return", "frustration"] {
        if id.len() > base.len() && id.starts_with(base) {
            return id[base.len()..].parse().ok().map(|power| (base, power));
        }
    }
    None
}

/// Build a move record from its raw entry (or nothing).
///
/// `id` is used when the entry carries no id of its own; `name` is the
/// caller's input, used for placeholders.
pub(crate) fn build(id: &str, name: &str, raw: Option<&RawMove>, base_power: Option<u32>) -> Move {
    let empty = RawMove::default();
    let raw = raw.unwrap_or(&empty);

    let move_type = raw.move_type.clone().unwrap_or_default();
    let secondaries = match (&raw.secondaries, &raw.secondary) {
        (Some(list), _) => list.clone(),
        (None, Some(single)) if !matches!(single, Value::Null | Value::Bool(false)) => {
            vec![single.clone()]
        }
        _ => Vec::new(),
    };

    Move {
        id: raw.id.clone().filter(|s| !s.is_empty()).unwrap_or_else(|| id.to_string()),
        name: raw.name.clone().unwrap_or_else(|| sanitize_name(name)),
        effect_type: EffectType::Move,
        category: raw.category.unwrap_or_default(),
        exists: raw.name.is_some(),
        num: raw.num,
        gen: raw.gen.filter(|&g| g > 0).unwrap_or_else(|| gen_from_num(raw.num)),
        base_power: base_power.or(raw.base_power).unwrap_or(0),
        accuracy: raw.accuracy.map(Accuracy::from),
        pp: raw.pp.unwrap_or(0),
        priority: raw.priority.unwrap_or(0),
        base_type: raw.base_type.clone().unwrap_or_else(|| move_type.clone()),
        move_type,
        crit_ratio: raw.crit_ratio.filter(|&c| c > 0).unwrap_or(1),
        flags: MoveFlags::from_data(&raw.flags),
        secondaries,
        target: raw.target.clone(),
        desc: raw.desc.clone(),
        short_desc: raw.short_desc.clone(),
        is_nonstandard: raw.is_nonstandard.clone(),
        effect: raw.effect.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_move(json: &str) -> RawMove {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_gen_bands() {
        assert_eq!(gen_from_num(Some(621)), 6);
        assert_eq!(gen_from_num(Some(560)), 6);
        assert_eq!(gen_from_num(Some(559)), 5);
        assert_eq!(gen_from_num(Some(355)), 4);
        assert_eq!(gen_from_num(Some(252)), 3);
        assert_eq!(gen_from_num(Some(166)), 2);
        assert_eq!(gen_from_num(Some(1)), 1);
        assert_eq!(gen_from_num(Some(0)), 0);
        assert_eq!(gen_from_num(None), 0);
    }

    #[test]
    fn test_variable_power_ids() {
        assert_eq!(variable_power_base("hiddenpower60"), Some(("hiddenpower", 60)));
        assert_eq!(variable_power_base("hiddenpowerfire70"), Some(("hiddenpowerfire", 70)));
        assert_eq!(variable_power_base("return102"), Some(("return", 102)));
        assert_eq!(variable_power_base("frustration1"), Some(("frustration", 1)));
        assert_eq!(variable_power_base("hiddenpower"), None);
        assert_eq!(variable_power_base("hiddenpowerfire"), None);
        assert_eq!(variable_power_base("returnx"), None);
        assert_eq!(variable_power_base("tackle"), None);
    }

    #[test]
    fn test_build_backfills_defaults() {
        let raw = raw_move(
            r#"{"num": 85, "name": "Thunderbolt", "basePower": 90, "accuracy": 100,
                "category": "Special", "type": "Electric",
                "flags": {"protect": 1, "mirror": 1, "weird": 1},
                "secondary": {"chance": 10, "status": "par"}}"#,
        );
        let mv = build("thunderbolt", "thunderbolt", Some(&raw), None);
        assert!(mv.exists);
        assert_eq!(mv.name, "Thunderbolt");
        assert_eq!(mv.gen, 1);
        assert_eq!(mv.crit_ratio, 1);
        assert_eq!(mv.base_type, "Electric");
        assert_eq!(mv.accuracy, Some(Accuracy::Percent(100)));
        assert_eq!(mv.flags, MoveFlags::PROTECT | MoveFlags::MIRROR);
        assert_eq!(mv.secondaries.len(), 1);
        assert_eq!(mv.secondaries[0]["status"], "par");
    }

    #[test]
    fn test_null_secondary_is_empty() {
        let raw = raw_move(r#"{"name": "Tackle", "accuracy": true, "secondary": null}"#);
        let mv = build("tackle", "tackle", Some(&raw), None);
        assert!(mv.secondaries.is_empty());
        assert_eq!(mv.accuracy, Some(Accuracy::AlwaysHits));
    }

    #[test]
    fn test_placeholder() {
        let mv = build("notamove", "Not <A> Move", None, None);
        assert!(!mv.exists);
        assert_eq!(mv.id, "notamove");
        assert_eq!(mv.name, "Not &lt;A&gt; Move");
        assert_eq!(mv.category, Category::Effect);
        assert_eq!(mv.effect_type, EffectType::Move);
        assert_eq!(mv.gen, 0);
    }

    #[test]
    fn test_category_for_gen() {
        let raw = raw_move(r#"{"name": "Thunder Punch", "category": "Physical", "type": "Electric"}"#);
        let punch = build("thunderpunch", "", Some(&raw), None);
        assert_eq!(category_for_gen(&punch, 3, None), Category::Special);
        assert_eq!(category_for_gen(&punch, 4, None), Category::Physical);
        assert_eq!(category_for_gen(&punch, 3, Some("Fighting")), Category::Physical);

        let raw = raw_move(r#"{"name": "Thunder Wave", "category": "Status", "type": "Electric"}"#);
        let wave = build("thunderwave", "", Some(&raw), None);
        assert_eq!(category_for_gen(&wave, 1, None), Category::Status);
    }
}
