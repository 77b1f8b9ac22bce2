//! Display preferences consulted by the sprite resolver.
//!
//! Preference storage lives elsewhere; the dex only asks yes/no questions
//! through [`Preferences`].

use bitflags::bitflags;

/// The boolean preferences that affect sprite selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pref {
    /// Always use the newest sprite set
    NoPastGens,
    /// Use Black/White sprites instead of 3D ones
    BwGfx,
    /// Disable animations
    NoAnim,
    /// Disable animated GIFs
    NoGif,
}

impl Pref {
    /// Storage key used by the client.
    pub fn key(self) -> &'static str {
        match self {
            Pref::NoPastGens => "nopastgens",
            Pref::BwGfx => "bwgfx",
            Pref::NoAnim => "noanim",
            Pref::NoGif => "nogif",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "nopastgens" => Some(Pref::NoPastGens),
            "bwgfx" => Some(Pref::BwGfx),
            "noanim" => Some(Pref::NoAnim),
            "nogif" => Some(Pref::NoGif),
            _ => None,
        }
    }
}

/// Synchronous, side-effect free preference lookup.
pub trait Preferences {
    fn get(&self, pref: Pref) -> bool;

    /// Animated sprites are allowed unless either animation pref is set.
    fn allow_animation(&self) -> bool {
        !self.get(Pref::NoAnim) && !self.get(Pref::NoGif)
    }
}

bitflags! {
    /// In-memory preference set.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct PrefFlags: u8 {
        const NO_PAST_GENS = 1 << 0;
        const BW_GFX       = 1 << 1;
        const NO_ANIM      = 1 << 2;
        const NO_GIF       = 1 << 3;
    }
}

impl PrefFlags {
    fn flag(pref: Pref) -> Self {
        match pref {
            Pref::NoPastGens => Self::NO_PAST_GENS,
            Pref::BwGfx => Self::BW_GFX,
            Pref::NoAnim => Self::NO_ANIM,
            Pref::NoGif => Self::NO_GIF,
        }
    }

    /// Build from client storage keys; unknown keys are ignored.
    pub fn from_keys<'a>(keys: impl IntoIterator<Item = &'a str>) -> Self {
        keys.into_iter()
            .filter_map(Pref::from_key)
            .fold(Self::empty(), |acc, pref| acc | Self::flag(pref))
    }

    pub fn with(self, pref: Pref) -> Self {
        self | Self::flag(pref)
    }
}

impl Preferences for PrefFlags {
    fn get(&self, pref: Pref) -> bool {
        self.contains(Self::flag(pref))
    }
}
