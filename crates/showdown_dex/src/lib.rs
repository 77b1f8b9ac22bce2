//! showdown_dex - Canonical records and sprite paths for Pokemon Showdown data
//!
//! Loose identifiers ("Charizard-Mega-X", "hiddenpowerfire60", "item:Leftovers")
//! resolve to fully populated records that are memoized per [`Dex`], so the
//! same id always yields the same `Rc`. The sprite resolver turns a resolved
//! species plus display options into sprite URLs, sizes and cry paths.

/// Identifier normalization
pub mod id;

/// Data and configuration errors
pub mod error;

/// `dex.toml` loading and discovery
pub mod config;

/// Display preferences
pub mod prefs;

/// Raw JSON tables
pub mod data;

/// Per-kind record caches
pub mod cache;

/// Shared record shape and generic effects
pub mod effect;

pub mod abilities;
pub mod items;
pub mod moves;
pub mod species;
pub mod types;

/// Live combatant view
pub mod combatant;

/// The resolver service
pub mod dex;

/// Sprites, cries and icons
pub mod sprites;

// Re-export commonly used types
pub use abilities::Ability;
pub use combatant::{Combatant, Gender};
pub use config::{AudioFormat, DexConfig};
pub use data::{DexData, Table};
pub use dex::{Dex, SpriteSet};
pub use effect::{AnyEffect, Category, Effect, EffectRecord, EffectType, Loose};
pub use error::{DexError, Result};
pub use id::{to_id, ToId};
pub use items::Item;
pub use moves::{Move, MoveFlags};
pub use prefs::{Pref, PrefFlags, Preferences};
pub use species::{AbilitySlot, Species, SpeciesFlags};
pub use sprites::{Facing, IconPosition, SpriteData, SpriteGen, SpriteOptions, TeambuilderSprite};
pub use types::TypeInfo;
