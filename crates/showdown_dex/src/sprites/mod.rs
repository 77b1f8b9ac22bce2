//! Sprite, cry and icon derivation.
//!
//! Everything here is computed per call from a resolved species plus the
//! caller's options and the dex preferences. Nothing is cached.

pub mod icon_table;
pub mod icons;
pub mod teambuilder;

use serde::{Deserialize, Serialize};

use crate::combatant::{Combatant, Gender};
use crate::data::raw::{FrameSize, SpriteMeta};
use crate::dex::{Dex, SpriteSet};
use crate::effect::Loose;
use crate::id::to_id;
use crate::prefs::Pref;
use crate::species::Species;

pub use icons::{IconPosition, IconSource, Overlay, Pokeball};
pub use teambuilder::TeambuilderSprite;

/// Formes whose cry differs from the base species'.
const CRY_FORMES: [&str; 8] = [
    "-sky", "-therian", "-primal", "-eternal", "-super", "-unbound", "-midnight", "-school",
];

/// Species whose every forme has its own cry.
const CRY_BASES: [&str; 4] = ["kyurem", "necrozma", "oricorio", "zygarde"];

/// Which side of the field the sprite is drawn for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Facing {
    /// Opponent's side
    #[default]
    Front,
    /// Player's own side
    Back,
}

/// Sprite set, named after the games it was ripped from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpriteGen {
    Rby,
    Gsc,
    Rse,
    Dpp,
    Bw,
    Xy,
}

impl SpriteGen {
    pub fn from_gen_num(gen: u8) -> Self {
        match gen {
            0 | 1 => SpriteGen::Rby,
            2 => SpriteGen::Gsc,
            3 => SpriteGen::Rse,
            4 => SpriteGen::Dpp,
            5 => SpriteGen::Bw,
            _ => SpriteGen::Xy,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SpriteGen::Rby => "rby",
            SpriteGen::Gsc => "gsc",
            SpriteGen::Rse => "rse",
            SpriteGen::Dpp => "dpp",
            SpriteGen::Bw => "bw",
            SpriteGen::Xy => "xy",
        }
    }
}

/// Options for [`Dex::sprite_data`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SpriteOptions {
    /// Generation of the battle field; 0 means 6
    pub gen: u8,
    pub shiny: bool,
    pub gender: Option<Gender>,
    /// April Fool's sprites
    pub afd: bool,
    pub no_scale: bool,
    /// Digimon mod sprites
    pub digi: bool,
}

impl Default for SpriteOptions {
    fn default() -> Self {
        Self {
            gen: 6,
            shiny: false,
            gender: None,
            afd: false,
            no_scale: false,
            digi: false,
        }
    }
}

/// Geometry and paths for one battle sprite.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpriteData {
    pub w: f64,
    pub h: f64,
    pub y: i32,
    pub url: String,
    pub pixelated: bool,
    pub is_back_sprite: bool,
    #[serde(rename = "cryurl")]
    pub cry_url: String,
    pub shiny: bool,
}

fn frame(meta: &SpriteMeta, facing: Facing, female: bool) -> Option<FrameSize> {
    match (facing, female) {
        (Facing::Front, false) => meta.front,
        (Facing::Front, true) => meta.frontf,
        (Facing::Back, false) => meta.back,
        (Facing::Back, true) => meta.backf,
    }
}

fn cry_has_forme(species: &Species, base_id: &str) -> bool {
    species.is_mega()
        || (!species.formeid.is_empty()
            && (CRY_FORMES.contains(&species.formeid.as_str()) || CRY_BASES.contains(&base_id)))
}

impl Dex {
    /// Field generation after the `nopastgens` and `bwgfx` preferences.
    fn field_gen(&self, requested: u8) -> u8 {
        let mut gen = requested;
        if self.prefs.get(Pref::NoPastGens) {
            gen = 6;
        }
        if self.prefs.get(Pref::BwGfx) && gen >= 6 {
            gen = 5;
        }
        gen
    }

    /// Sprite for `species` drawn on `facing`'s side.
    pub fn sprite_data<'a>(
        &self,
        species: impl Into<Loose<'a, Species>>,
        facing: Facing,
        options: &SpriteOptions,
    ) -> SpriteData {
        let species = self.get_species(species);
        self.build_sprite_data(&species, facing, options)
    }

    /// Sprite for a combatant; shininess and gender follow its appearance.
    pub fn combatant_sprite_data(
        &self,
        combatant: &Combatant,
        facing: Facing,
        options: &SpriteOptions,
    ) -> SpriteData {
        let (shiny, gender) = combatant.appearance();
        let options = SpriteOptions {
            shiny,
            gender,
            ..*options
        };
        let species = self.get_species(combatant.sprite_species());
        self.build_sprite_data(&species, facing, &options)
    }

    fn build_sprite_data(&self, species: &Species, facing: Facing, options: &SpriteOptions) -> SpriteData {
        let back = facing == Facing::Back;
        let requested_gen = if options.gen == 0 { 6 } else { options.gen };
        let mut data = SpriteData {
            w: 96.0,
            h: 96.0,
            y: 0,
            url: format!("{}sprites/", self.config.resource_prefix),
            pixelated: true,
            is_back_sprite: back,
            cry_url: String::new(),
            shiny: options.shiny,
        };
        let mut name = species.spriteid.clone();
        let mut dir = String::from(if back { "-back" } else { "" });

        let field_gen = self.field_gen(requested_gen);
        let gen_num = field_gen.max(species.gen.min(5));
        let mut tag = SpriteGen::from_gen_num(gen_num);

        // =====================================================================
        // Metadata
        // =====================================================================

        let speciesid = if species.is_totem() {
            to_id(&name)
        } else {
            species.speciesid.clone()
        };
        let xy = self.data.sprites_xy.get(&speciesid);
        let bw = self.data.sprites_bw.get(&speciesid);
        let mut animation = match tag {
            SpriteGen::Xy => xy,
            SpriteGen::Bw => bw,
            _ => None,
        };
        if tag == SpriteGen::Xy && xy.is_none() {
            tracing::trace!(id = speciesid.as_str(), "no xy sprite metadata, using bw");
            if self.data.sprites_bw.is_empty() {
                self.request_sprite_metadata(SpriteSet::Bw);
            }
            tag = SpriteGen::Bw;
            animation = bw;
        }
        let misc = xy.or(bw).copied().unwrap_or_default();

        if misc.num > 0 {
            let base_id = to_id(&species.base_species);
            let mut cry = format!("audio/cries/{base_id}");
            if cry_has_forme(species, &base_id) {
                cry.push_str(&species.formeid);
            }
            cry.push_str(self.config.audio.extension());
            data.cry_url = cry;
        }

        if options.shiny && requested_gen > 1 {
            dir.push_str("-shiny");
        }

        // =====================================================================
        // Special modes
        // =====================================================================

        if self.config.afd || options.afd {
            data.url.push_str(&format!("afd{dir}/{name}.png"));
            return data;
        }

        let allow_anim = self.prefs.allow_animation();
        if options.digi {
            data.cry_url = format!(
                "sprites/digimon/audio/{}{}",
                to_id(&species.base_species),
                self.config.audio.extension()
            );
            let mut dir = String::from("digimon/sprites/digimon");
            if allow_anim {
                dir.push_str("ani");
            }
            if back {
                dir.push_str("-back");
            }
            let ext = if allow_anim { "gif" } else { "png" };
            data.url.push_str(&format!("{dir}/{name}.{ext}"));
            data.w = 56.0;
            data.h = 56.0;
            return data;
        }

        // =====================================================================
        // Normal sprites
        // =====================================================================

        let wants_female = options.gender == Some(Gender::F);
        let female = wants_female && animation.is_some_and(|m| frame(m, facing, true).is_some());
        if allow_anim && gen_num >= 6 {
            data.pixelated = false;
        }
        let animated = animation.and_then(|m| frame(m, facing, female));
        match animated {
            Some(size) if allow_anim && gen_num >= 5 => {
                if female {
                    name.push_str("-f");
                }
                data.w = f64::from(size.w);
                data.h = f64::from(size.h);
                data.url.push_str(&format!("{}ani{dir}/{name}.gif", tag.as_str()));
            }
            _ => {
                if tag == SpriteGen::Xy {
                    tag = SpriteGen::Bw;
                }
                // No gender differences before Gen 4
                if gen_num >= 4 && misc.frontf.is_some() && wants_female {
                    name.push_str("-f");
                }
                data.url.push_str(&format!("{}{dir}/{name}.png", tag.as_str()));
            }
        }

        if !options.no_scale {
            if field_gen > 5 {
                // drawn at native size
            } else if !back || field_gen == 5 {
                data.w *= 2.0;
                data.h *= 2.0;
                data.y += -16;
            } else {
                // the 3D engine already scales back sprites by 1.5
                data.w *= 2.0 / 1.5;
                data.h *= 2.0 / 1.5;
                data.y += -11;
            }
            if field_gen == 5 {
                data.y = if back { 5 } else { -35 };
            }
            if gen_num <= 2 {
                data.y += 2;
            }
        }
        if species.is_totem() && !options.no_scale {
            data.w *= 1.5;
            data.h *= 1.5;
            data.y += -11;
        }
        data
    }
}
