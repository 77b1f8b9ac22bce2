//! Species (template) records and forme derivation.
//!
//! A species entry is keyed by its full id (`charizardmegax`). Everything the
//! sprite resolver needs (`formeid`, `spriteid`, generation, mega/primal/totem
//! flags) is derived here from the raw entry, or from the id alone when the
//! entry is missing.

use std::cell::RefCell;
use std::collections::BTreeMap;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::data::raw::{BaseStats, GenOverrides, RawSpecies};
use crate::effect::{impl_effect_record, Category, EffectType};
use crate::id::{capitalize, sanitize_name, to_id};

/// Ability slot of a species.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AbilitySlot {
    #[serde(rename = "0")]
    Primary,
    #[serde(rename = "1")]
    Secondary,
    #[serde(rename = "H")]
    Hidden,
    /// Event-only ability
    #[serde(rename = "S")]
    Special,
}

bitflags! {
    /// Derived forme flags.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct SpeciesFlags: u8 {
        const MEGA        = 1 << 0;
        const PRIMAL      = 1 << 1;
        const TOTEM       = 1 << 2;
        /// Only exists mid-battle (megas, primals)
        const BATTLE_ONLY = 1 << 3;
    }
}

/// Canonical species record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Species {
    pub id: String,
    pub name: String,
    pub species: String,
    pub speciesid: String,
    pub base_species: String,
    pub forme: String,
    pub forme_letter: String,
    /// `-` + forme id, or empty for base formes
    pub formeid: String,
    pub spriteid: String,
    /// Cosmetic form suffix, set on alternate-form records only
    pub form: Option<String>,
    pub effect_type: EffectType,
    pub category: Category,
    pub exists: bool,
    pub num: Option<i32>,
    pub gen: u8,
    pub flags: SpeciesFlags,
    pub types: Vec<String>,
    pub base_stats: Option<BaseStats>,
    pub abilities: BTreeMap<AbilitySlot, String>,
    pub weightkg: Option<f64>,
    pub evos: Vec<String>,
    pub prevo: Option<String>,
    pub other_forms: Vec<String>,
    pub other_formes: Vec<String>,
    pub tier: Option<String>,
    pub is_nonstandard: Option<String>,
    /// Runtime-only fields attached by callers; shared by every holder of the record
    #[serde(skip)]
    pub attachments: RefCell<BTreeMap<String, Value>>,
}

impl_effect_record!(Species);

impl Species {
    pub fn is_mega(&self) -> bool {
        self.flags.contains(SpeciesFlags::MEGA)
    }

    pub fn is_primal(&self) -> bool {
        self.flags.contains(SpeciesFlags::PRIMAL)
    }

    pub fn is_totem(&self) -> bool {
        self.flags.contains(SpeciesFlags::TOTEM)
    }

    pub fn battle_only(&self) -> bool {
        self.flags.contains(SpeciesFlags::BATTLE_ONLY)
    }

    /// Attach a runtime field to this record.
    pub fn attach(&self, key: impl Into<String>, value: Value) {
        self.attachments.borrow_mut().insert(key.into(), value);
    }

    pub fn attachment(&self, key: &str) -> Option<Value> {
        self.attachments.borrow().get(key).cloned()
    }
}

/// Introduction generation for a national dex number.
pub fn gen_from_num(num: Option<i32>) -> u8 {
    match num.unwrap_or(0) {
        n if n >= 722 => 7,
        n if n >= 650 => 6,
        n if n >= 494 => 5,
        n if n >= 387 => 4,
        n if n >= 252 => 3,
        n if n >= 152 => 2,
        n if n >= 1 => 1,
        _ => 0,
    }
}

/// Guess base species and forme for an id with no data entry.
///
/// Known stems are tried first (longest stem leaving a non-empty forme wins),
/// then the mega/primal/alola suffixes.
pub fn derive_forme(id: &str, stems: &[String]) -> Option<(String, String)> {
    let mut derived = stems
        .iter()
        .map(|stem| to_id(stem))
        .filter(|stem| id.len() > stem.len() && id.starts_with(stem.as_str()))
        .max_by_key(String::len)
        .map(|stem| (id[..stem.len()].to_string(), id[stem.len()..].to_string()));

    let suffix = if id == "yanmega" {
        None
    } else {
        ["megax", "megay", "mega", "primal", "alola"]
            .into_iter()
            .find(|suffix| id.len() > suffix.len() && id.ends_with(suffix))
    };
    if let Some(suffix) = suffix {
        let split = id.len() - suffix.len();
        derived = Some((id[..split].to_string(), id[split..].to_string()));
    }
    derived
}

/// Drop a trailing "totem" and then a trailing dash.
pub fn clean_spriteid(spriteid: &str) -> String {
    let s = spriteid.strip_suffix("totem").unwrap_or(spriteid);
    s.strip_suffix('-').unwrap_or(s).to_string()
}

fn gen_and_flags(forme: &str, formeid: &str, num: Option<i32>) -> (u8, SpeciesFlags) {
    if !forme.is_empty() && matches!(formeid, "-mega" | "-megax" | "-megay") {
        (6, SpeciesFlags::MEGA | SpeciesFlags::BATTLE_ONLY)
    } else if formeid == "-primal" {
        (6, SpeciesFlags::PRIMAL | SpeciesFlags::BATTLE_ONLY)
    } else if formeid.ends_with("totem") {
        (7, SpeciesFlags::TOTEM)
    } else if formeid == "-alola" {
        (7, SpeciesFlags::empty())
    } else {
        (gen_from_num(num), SpeciesFlags::empty())
    }
}

/// Build a species record.
///
/// `id` is the (post-alias) lookup key and `name` the display name to fall
/// back on when the entry has none.
pub(crate) fn build(id: &str, name: &str, raw: Option<&RawSpecies>, stems: &[String]) -> Species {
    let (raw, exists, derived) = match raw {
        Some(raw) => (raw.clone(), true, None),
        None => (RawSpecies::default(), false, derive_forme(id, stems)),
    };

    let name = raw.name.clone().unwrap_or_else(|| sanitize_name(name));
    let (base_species, forme) = match derived {
        Some(derived) => derived,
        None => (
            raw.base_species.clone().unwrap_or_else(|| name.clone()),
            raw.forme.clone().unwrap_or_default(),
        ),
    };
    let formeid = if base_species != name {
        format!("-{}", to_id(&forme))
    } else {
        String::new()
    };
    let spriteid = clean_spriteid(&format!("{}{}", to_id(&base_species), formeid));
    let (derived_gen, flags) = gen_and_flags(&forme, &formeid, raw.num);

    Species {
        id: raw.id.clone().filter(|s| !s.is_empty()).unwrap_or_else(|| id.to_string()),
        species: name.clone(),
        speciesid: id.to_string(),
        name,
        base_species,
        forme,
        forme_letter: raw.forme_letter.clone().unwrap_or_default(),
        formeid,
        spriteid,
        form: None,
        effect_type: EffectType::Template,
        category: Category::Effect,
        exists,
        num: raw.num,
        gen: raw.gen.filter(|&g| g > 0).unwrap_or(derived_gen),
        flags,
        types: raw.types,
        base_stats: raw.base_stats,
        abilities: raw.abilities,
        weightkg: raw.weightkg,
        evos: raw.evos,
        prevo: raw.prevo,
        other_forms: raw.other_forms,
        other_formes: raw.other_formes,
        tier: raw.tier,
        is_nonstandard: raw.is_nonstandard,
        attachments: RefCell::default(),
    }
}

/// Whether `requested_id` names one of `base`'s cosmetic forms.
pub(crate) fn has_alternate_form(base: &Species, requested_id: &str) -> bool {
    !requested_id.is_empty() && base.other_forms.iter().any(|form| to_id(form) == requested_id)
}

/// Copy `base` into the record for its cosmetic form `requested_id`.
pub(crate) fn alternate_form(base: &Species, requested_id: &str) -> Species {
    let base_id = to_id(&base.base_species);
    let form = requested_id.get(base_id.len()..).unwrap_or_default();
    let form_name = capitalize(form);
    let species = if form_name.is_empty() {
        base.base_species.clone()
    } else {
        format!("{}-{}", base.base_species, form_name)
    };

    Species {
        speciesid: to_id(&species),
        spriteid: clean_spriteid(&format!("{}-{}", base_id, form)),
        species,
        form: Some(form_name),
        attachments: RefCell::default(),
        ..base.clone()
    }
}

/// Ability slots legal in `gen`, applying that generation's overrides.
pub fn abilities_for(
    species: &Species,
    gen: u8,
    overrides: Option<&GenOverrides>,
) -> BTreeMap<AbilitySlot, String> {
    let mut out = BTreeMap::new();
    if gen < 3 || species.abilities.is_empty() {
        return out;
    }
    let overrides = if gen >= 7 { None } else { overrides };
    let own = &species.abilities;

    let primary = overrides
        .and_then(|t| t.override_ability.get(&species.id))
        .or_else(|| own.get(&AbilitySlot::Primary));
    if let Some(primary) = primary {
        out.insert(AbilitySlot::Primary, primary.clone());
    }

    let second_removed = overrides.is_some_and(|t| t.remove_second_ability.contains_key(&species.id));
    if let (false, Some(second)) = (second_removed, own.get(&AbilitySlot::Secondary)) {
        out.insert(AbilitySlot::Secondary, second.clone());
    }
    if gen >= 5 {
        if let Some(hidden) = own.get(&AbilitySlot::Hidden) {
            out.insert(AbilitySlot::Hidden, hidden.clone());
        }
    }
    if gen >= 7 {
        if let Some(special) = own.get(&AbilitySlot::Special) {
            out.insert(AbilitySlot::Special, special.clone());
        }
    }
    out
}
