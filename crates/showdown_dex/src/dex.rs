//! The dex service: raw tables, per-kind caches and the entity resolvers.

use std::cell::Cell;
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;
use std::rc::Rc;

use bitflags::bitflags;

use crate::abilities::{self, Ability};
use crate::cache::EntityCache;
use crate::config::DexConfig;
use crate::data::{DexData, SpriteTable};
use crate::effect::{self, AnyEffect, Category, Effect, EffectType, Loose};
use crate::error::Result;
use crate::id::{capitalize, to_id};
use crate::items::{self, Item};
use crate::moves::{self, Move};
use crate::prefs::{PrefFlags, Preferences};
use crate::species::{self, AbilitySlot, Species};
use crate::types::{self, TypeInfo};

/// Sprite metadata sets that are fetched separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteSet {
    Xy,
    Bw,
}

bitflags! {
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    struct SpriteSets: u8 {
        const XY = 1 << 0;
        const BW = 1 << 1;
    }
}

impl SpriteSets {
    fn of(set: SpriteSet) -> Self {
        match set {
            SpriteSet::Xy => Self::XY,
            SpriteSet::Bw => Self::BW,
        }
    }
}

/// Resolves loose identifiers into canonical, memoized records.
///
/// All lookups take `&self`; caches fill in through interior mutability, so a
/// `Dex` is single-threaded (`!Sync`).
pub struct Dex {
    pub(crate) data: DexData,
    pub(crate) config: DexConfig,
    pub(crate) prefs: Box<dyn Preferences>,
    species: EntityCache<Species>,
    species_alt_forms: EntityCache<Species>,
    moves: EntityCache<Move>,
    items: EntityCache<Item>,
    abilities: EntityCache<Ability>,
    effects: EntityCache<Effect>,
    types: EntityCache<TypeInfo>,
    /// Sets loaded or already requested
    sprite_sets: Cell<SpriteSets>,
}

impl fmt::Debug for Dex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dex")
            .field("config", &self.config)
            .field("species", &self.species.len())
            .field("moves", &self.moves.len())
            .field("items", &self.items.len())
            .field("abilities", &self.abilities.len())
            .field("effects", &self.effects.len())
            .field("types", &self.types.len())
            .finish_non_exhaustive()
    }
}

impl Dex {
    pub fn new(data: DexData) -> Self {
        Self {
            data,
            config: DexConfig::default(),
            prefs: Box::new(PrefFlags::empty()),
            species: EntityCache::new("species"),
            species_alt_forms: EntityCache::new("species-alt-form"),
            moves: EntityCache::new("move"),
            items: EntityCache::new("item"),
            abilities: EntityCache::new("ability"),
            effects: EntityCache::new("effect"),
            types: EntityCache::new("type"),
            sprite_sets: Cell::new(SpriteSets::XY),
        }
    }

    /// Load the data directory named by `config` (default `./data`).
    pub fn from_config(config: DexConfig) -> Result<Self> {
        let dir = config.data_dir.clone().unwrap_or_else(|| PathBuf::from("data"));
        let data = DexData::load_dir(&dir)?;
        Ok(Self::new(data).with_config(config))
    }

    pub fn with_config(mut self, config: DexConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_preferences(mut self, prefs: impl Preferences + 'static) -> Self {
        self.set_preferences(prefs);
        self
    }

    pub fn set_preferences(&mut self, prefs: impl Preferences + 'static) {
        self.prefs = Box::new(prefs);
    }

    pub fn data(&self) -> &DexData {
        &self.data
    }

    pub fn config(&self) -> &DexConfig {
        &self.config
    }

    pub fn prefs(&self) -> &dyn Preferences {
        self.prefs.as_ref()
    }

    // =========================================================================
    // Species
    // =========================================================================

    pub fn get_species<'a>(&self, species: impl Into<Loose<'a, Species>>) -> Rc<Species> {
        match species.into() {
            Loose::Resolved(species) => species,
            Loose::Id(name) => self.resolve_species(name),
        }
    }

    fn resolve_species(&self, name: &str) -> Rc<Species> {
        let requested = to_id(name);
        let (name, id) = match self.data.aliases.get(&requested) {
            Some(alias) => (alias.as_str(), to_id(alias)),
            None => (name, requested.clone()),
        };
        let name = if id.is_empty() { "" } else { name };

        let base = self.species.get_or_insert_with(&id, || {
            let raw = self.data.pokedex.get(&id);
            if raw.is_none() {
                tracing::debug!(id = id.as_str(), "synthesizing placeholder species");
            }
            species::build(&id, name, raw, &self.data.base_species_stems)
        });

        if species::has_alternate_form(&base, &requested) {
            return self
                .species_alt_forms
                .get_or_insert_with(&requested, || species::alternate_form(&base, &requested));
        }
        base
    }

    /// Ability slots `species` could have in `gen`.
    pub fn abilities_for<'a>(
        &self,
        species: impl Into<Loose<'a, Species>>,
        gen: u8,
    ) -> BTreeMap<AbilitySlot, String> {
        let species = self.get_species(species);
        let overrides = self.data.teambuilder.get(&format!("gen{gen}"));
        species::abilities_for(&species, gen, overrides)
    }

    pub fn has_ability<'a>(
        &self,
        species: impl Into<Loose<'a, Species>>,
        ability: &str,
        gen: u8,
    ) -> bool {
        self.abilities_for(species, gen).values().any(|a| a == ability)
    }

    // =========================================================================
    // Moves, items, abilities
    // =========================================================================

    pub fn get_move<'a>(&self, mv: impl Into<Loose<'a, Move>>) -> Rc<Move> {
        match mv.into() {
            Loose::Resolved(mv) => mv,
            Loose::Id(name) => self.resolve_move(name.trim()),
        }
    }

    fn resolve_move(&self, name: &str) -> Rc<Move> {
        let id = to_id(name);
        self.moves.get_or_insert_with(&id, || {
            let raw = self.data.moves.get(&id);
            if raw.is_some_and(|raw| raw.name.is_some()) {
                return moves::build(&id, name, raw, None);
            }
            // hiddenpowerfire60, return102: copy the base entry with a fixed power
            let variable = moves::variable_power_base(&id);
            if let Some((base_id, power)) = variable {
                if let Some(base) = self.data.moves.get(base_id) {
                    tracing::debug!(id = id.as_str(), base = base_id, power, "derived variable-power move");
                    return moves::build(base_id, name, Some(base), Some(power));
                }
            }
            tracing::debug!(id = id.as_str(), "synthesizing placeholder move");
            moves::build(&id, name, raw, variable.map(|(_, power)| power))
        })
    }

    /// Category of a move as it behaved in `gen`.
    pub fn category_for_gen<'a>(
        &self,
        mv: impl Into<Loose<'a, Move>>,
        gen: u8,
        type_override: Option<&str>,
    ) -> Category {
        moves::category_for_gen(&self.get_move(mv), gen, type_override)
    }

    pub fn get_item<'a>(&self, item: impl Into<Loose<'a, Item>>) -> Rc<Item> {
        let name = match item.into() {
            Loose::Resolved(item) => return item,
            Loose::Id(name) => name.trim(),
        };
        let id = to_id(name);
        self.items.get_or_insert_with(&id, || {
            let raw = self.data.items.get(&id);
            if raw.is_none() {
                tracing::debug!(id = id.as_str(), "synthesizing placeholder item");
            }
            items::build(&id, name, raw)
        })
    }

    pub fn get_ability<'a>(&self, ability: impl Into<Loose<'a, Ability>>) -> Rc<Ability> {
        let name = match ability.into() {
            Loose::Resolved(ability) => return ability,
            Loose::Id(name) => name.trim(),
        };
        let id = to_id(name);
        self.abilities.get_or_insert_with(&id, || {
            let raw = self.data.abilities.get(&id);
            if raw.is_none() {
                tracing::debug!(id = id.as_str(), "synthesizing placeholder ability");
            }
            abilities::build(&id, name, raw)
        })
    }

    // =========================================================================
    // Generic effects and types
    // =========================================================================

    /// Resolve any effect name.
    ///
    /// `item:`, `ability:` and `move:` prefixes return the specific record.
    /// Otherwise the status table is tried, then the effects embedded in
    /// moves, abilities and items, then the `recoil`/`drain` pseudo-effects.
    pub fn get_effect<'a>(&self, effect: impl Into<Loose<'a, Effect>>) -> AnyEffect {
        let name = match effect.into() {
            Loose::Resolved(effect) => return AnyEffect::Effect(effect),
            Loose::Id(name) => name.trim(),
        };
        if let Some(rest) = name.strip_prefix("item:") {
            return AnyEffect::Item(self.get_item(rest));
        }
        if let Some(rest) = name.strip_prefix("ability:") {
            return AnyEffect::Ability(self.get_ability(rest));
        }
        if let Some(rest) = name.strip_prefix("move:") {
            return AnyEffect::Move(self.get_move(rest));
        }
        let id = to_id(name);
        AnyEffect::Effect(self.effects.get_or_insert_with(&id, || self.build_effect(&id, name)))
    }

    fn build_effect(&self, id: &str, name: &str) -> Effect {
        let found = if id.is_empty() {
            None
        } else {
            self.data
                .statuses
                .get(id)
                .or_else(|| self.data.moves.get(id).and_then(|m| m.effect.as_ref()))
                .or_else(|| self.data.abilities.get(id).and_then(|a| a.effect.as_ref()))
                .or_else(|| self.data.items.get(id).and_then(|i| i.effect.as_ref()))
        };
        match (found, id) {
            (Some(raw), _) => effect::build(id, name, Some(raw), EffectType::Effect, true),
            (None, "recoil") => effect::build(id, name, None, EffectType::Recoil, true),
            (None, "drain") => effect::build(id, name, None, EffectType::Drain, true),
            (None, _) => {
                tracing::debug!(id, "synthesizing placeholder effect");
                effect::build(id, name, None, EffectType::Effect, false)
            }
        }
    }

    pub fn get_type<'a>(&self, ty: impl Into<Loose<'a, TypeInfo>>) -> Rc<TypeInfo> {
        let name = match ty.into() {
            Loose::Resolved(ty) => return ty,
            Loose::Id(name) => name,
        };
        let id = capitalize(&to_id(name));
        self.types
            .get_or_insert_with(&id, || types::build(&id, self.data.types.get(&id)))
    }

    // =========================================================================
    // Sprite metadata
    // =========================================================================

    /// Record a request for `set`. Returns `true` the first time a missing set
    /// is requested, meaning the caller should fetch it and call
    /// [`install_sprite_metadata`](Self::install_sprite_metadata).
    pub fn request_sprite_metadata(&self, set: SpriteSet) -> bool {
        let sets = self.sprite_sets.get();
        let flag = SpriteSets::of(set);
        if sets.contains(flag) {
            return false;
        }
        self.sprite_sets.set(sets | flag);
        tracing::debug!(?set, "sprite metadata requested");
        true
    }

    pub fn install_sprite_metadata(&mut self, set: SpriteSet, table: SpriteTable) {
        tracing::debug!(?set, entries = table.len(), "installing sprite metadata");
        match set {
            SpriteSet::Xy => self.data.sprites_xy = table,
            SpriteSet::Bw => self.data.sprites_bw = table,
        }
        self.sprite_sets.set(self.sprite_sets.get() | SpriteSets::of(set));
    }

    /// Drop every cached record.
    pub fn clear_caches(&self) {
        self.species.clear();
        self.species_alt_forms.clear();
        self.moves.clear();
        self.items.clear();
        self.abilities.clear();
        self.effects.clear();
        self.types.clear();
    }

    /// Number of cached species, base and alternate forms.
    pub fn cached_species(&self) -> usize {
        self.species.len() + self.species_alt_forms.len()
    }
}
