//! The shape shared by every canonical record, plus the generic effect record.

use std::rc::Rc;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::abilities::Ability;
use crate::data::raw::RawEffect;
use crate::id::sanitize_name;
use crate::items::Item;
use crate::moves::Move;

/// Kind tag carried by every record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EffectType {
    Move,
    Item,
    Ability,
    /// Species records
    Template,
    Type,
    Recoil,
    Drain,
    Status,
    Weather,
    Condition,
    #[default]
    #[serde(other)]
    Effect,
}

/// Display grouping. Moves use Physical/Special/Status, everything else Effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Category {
    Physical,
    Special,
    Status,
    #[default]
    #[serde(other)]
    Effect,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Physical => "Physical",
            Category::Special => "Special",
            Category::Status => "Status",
            Category::Effect => "Effect",
        }
    }
}

/// Accessors common to all canonical records.
pub trait EffectRecord {
    fn id(&self) -> &str;
    fn name(&self) -> &str;
    fn effect_type(&self) -> EffectType;
    fn category(&self) -> Category;
    fn exists(&self) -> bool;
}

/// Implement [`EffectRecord`] for a struct with the standard field names.
macro_rules! impl_effect_record {
    ($t:ty) => {
        impl $crate::effect::EffectRecord for $t {
            fn id(&self) -> &str {
                &self.id
            }
            fn name(&self) -> &str {
                &self.name
            }
            fn effect_type(&self) -> $crate::effect::EffectType {
                self.effect_type
            }
            fn category(&self) -> $crate::effect::Category {
                self.category
            }
            fn exists(&self) -> bool {
                self.exists
            }
        }
    };
}
pub(crate) use impl_effect_record;

/// A status, weather, embedded move/item/ability effect, or a synthesized placeholder.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Effect {
    pub id: String,
    pub name: String,
    pub effect_type: EffectType,
    pub category: Category,
    pub exists: bool,
    /// Remaining fields of the source entry
    #[serde(flatten)]
    pub data: Map<String, Value>,
}

impl_effect_record!(Effect);

/// Build an effect from a table entry; fields the entry lacks are backfilled.
pub(crate) fn build(
    id: &str,
    name: &str,
    raw: Option<&RawEffect>,
    fallback_type: EffectType,
    exists: bool,
) -> Effect {
    let raw = raw.cloned().unwrap_or_default();
    Effect {
        id: raw.id.filter(|s| !s.is_empty()).unwrap_or_else(|| id.to_string()),
        name: raw.name.unwrap_or_else(|| sanitize_name(name)),
        effect_type: raw.effect_type.unwrap_or(fallback_type),
        category: raw.category.unwrap_or_default(),
        exists,
        data: raw.extra,
    }
}

/// Result of a generic effect lookup: prefixed lookups return the specific record.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum AnyEffect {
    Move(Rc<Move>),
    Item(Rc<Item>),
    Ability(Rc<Ability>),
    Effect(Rc<Effect>),
}

impl AnyEffect {
    fn record(&self) -> &dyn EffectRecord {
        match self {
            AnyEffect::Move(m) => m.as_ref(),
            AnyEffect::Item(i) => i.as_ref(),
            AnyEffect::Ability(a) => a.as_ref(),
            AnyEffect::Effect(e) => e.as_ref(),
        }
    }
}

impl EffectRecord for AnyEffect {
    fn id(&self) -> &str {
        self.record().id()
    }
    fn name(&self) -> &str {
        self.record().name()
    }
    fn effect_type(&self) -> EffectType {
        self.record().effect_type()
    }
    fn category(&self) -> Category {
        self.record().category()
    }
    fn exists(&self) -> bool {
        self.record().exists()
    }
}

/// Either a loose identifier or an already-resolved record.
///
/// Resolvers pass `Resolved` through untouched and normalize `Id`.
#[derive(Debug, Clone)]
pub enum Loose<'a, T> {
    Id(&'a str),
    Resolved(Rc<T>),
}

impl<T> Loose<'_, T> {
    pub fn is_resolved(&self) -> bool {
        matches!(self, Loose::Resolved(_))
    }
}

impl<'a, T> From<&'a str> for Loose<'a, T> {
    fn from(id: &'a str) -> Self {
        Loose::Id(id)
    }
}

impl<'a, T> From<&'a String> for Loose<'a, T> {
    fn from(id: &'a String) -> Self {
        Loose::Id(id)
    }
}

impl<T> From<Rc<T>> for Loose<'_, T> {
    fn from(record: Rc<T>) -> Self {
        Loose::Resolved(record)
    }
}

impl<T> From<&Rc<T>> for Loose<'_, T> {
    fn from(record: &Rc<T>) -> Self {
        Loose::Resolved(Rc::clone(record))
    }
}
