//! Party icon and item icon positions on their sprite sheets.

use serde::Serialize;

use super::icon_table::{ALT_ICON_NUMS, FACING_LEFT_ICON_NUMS, FEMALE_ICON_SPECIES};
use crate::combatant::{Combatant, Gender};
use crate::dex::Dex;
use crate::effect::Loose;
use crate::id::to_id;
use crate::items::Item;
use crate::species::Species;

const ICON_SHEET: &str = "sprites/smicons-sheet.png?a5";
const DIGIMON_ICON_SHEET: &str = "sprites/digimon/sprites/digimonicons-sheet.png";
const POKEBALL_SHEET: &str = "sprites/smicons-pokeball-sheet.png";
const DIGIMON_POKEBALL_SHEET: &str = "sprites/digimon/sprites/xyicons-pokeball-sheet.png";
const ITEM_ICON_SHEET: &str = "sprites/itemicons-sheet.png";

/// Highest national dex number present on the icon sheet.
const MAX_ICON_NUM: i32 = 809;

/// Filter drawn over an icon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Overlay {
    pub opacity: f32,
    pub contrast: f32,
}

impl Overlay {
    pub const FAINTED: Overlay = Overlay {
        opacity: 0.7,
        contrast: 0.0,
    };
    pub const FAINTED_POKEBALL: Overlay = Overlay {
        opacity: 0.4,
        contrast: 0.0,
    };
}

/// A cell of a sprite sheet: the sheet URL plus its CSS background offset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IconPosition {
    pub url: String,
    pub x: i32,
    pub y: i32,
    pub overlay: Option<Overlay>,
}

impl IconPosition {
    /// `background-position` value, e.g. `-40px -30px`.
    pub fn background_position(&self) -> String {
        format!("{}px {}px", self.x, self.y)
    }
}

/// Team preview placeholders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pokeball {
    Normal,
    Statused,
    Fainted,
    Empty,
}

impl Pokeball {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "pokeball" => Some(Pokeball::Normal),
            "pokeball-statused" => Some(Pokeball::Statused),
            "pokeball-fainted" => Some(Pokeball::Fainted),
            "pokeball-none" => Some(Pokeball::Empty),
            _ => None,
        }
    }

    fn x(self) -> i32 {
        match self {
            Pokeball::Normal => 0,
            Pokeball::Statused => -40,
            Pokeball::Fainted | Pokeball::Empty => -80,
        }
    }
}

/// What a party icon is requested for.
#[derive(Debug, Clone, Copy)]
pub enum IconSource<'a> {
    /// A species name or a `pokeball*` placeholder name
    Name(&'a str),
    Species(&'a Species),
    Combatant(&'a Combatant),
}

impl<'a> From<&'a str> for IconSource<'a> {
    fn from(name: &'a str) -> Self {
        IconSource::Name(name)
    }
}

impl<'a> From<&'a Species> for IconSource<'a> {
    fn from(species: &'a Species) -> Self {
        IconSource::Species(species)
    }
}

impl<'a> From<&'a Combatant> for IconSource<'a> {
    fn from(combatant: &'a Combatant) -> Self {
        IconSource::Combatant(combatant)
    }
}

/// Icon sheet index before forme overrides.
fn sheet_index(num: i32) -> u32 {
    if (0..=MAX_ICON_NUM).contains(&num) {
        num as u32
    } else {
        0
    }
}

impl Dex {
    pub fn pokeball_icon(&self, pokeball: Pokeball, digi: bool) -> IconPosition {
        let sheet = if digi { DIGIMON_POKEBALL_SHEET } else { POKEBALL_SHEET };
        IconPosition {
            url: format!("{}{}", self.config.resource_prefix, sheet),
            x: pokeball.x(),
            y: 4,
            overlay: (pokeball == Pokeball::Fainted).then_some(Overlay::FAINTED_POKEBALL),
        }
    }

    /// Party icon for a species, combatant or placeholder name.
    pub fn pokemon_icon<'a>(
        &self,
        source: impl Into<IconSource<'a>>,
        facing_left: bool,
        digi: bool,
    ) -> IconPosition {
        let source = source.into();
        if let IconSource::Name(name) = source {
            if let Some(pokeball) = Pokeball::from_name(name) {
                return self.pokeball_icon(pokeball, digi);
            }
        }

        let (id, num, gender, fainted) = match source {
            IconSource::Name(name) => (to_id(name), None, None, false),
            IconSource::Species(species) => (to_id(&species.species), species.num, None, false),
            IconSource::Combatant(c) => (to_id(c.icon_species()), c.num, c.gender, c.fainted),
        };
        let num = num
            .or_else(|| self.data.sprites_xy.get(&id).map(|m| m.num).filter(|&n| n != 0))
            .or_else(|| self.data.pokedex.get(&id).and_then(|s| s.num).filter(|&n| n != 0))
            .unwrap_or(0);

        let mut index = sheet_index(num);
        if let Some(&alt) = ALT_ICON_NUMS.get(id.as_str()) {
            index = alt;
        }
        if gender == Some(Gender::F) && FEMALE_ICON_SPECIES.contains(&id.as_str()) {
            if let Some(&female) = ALT_ICON_NUMS.get(format!("{id}f").as_str()) {
                index = female;
            }
        }
        if facing_left {
            if let Some(&left) = FACING_LEFT_ICON_NUMS.get(id.as_str()) {
                index = left;
            }
        }

        let sheet = if digi { DIGIMON_ICON_SHEET } else { ICON_SHEET };
        IconPosition {
            url: format!("{}{}", self.config.resource_prefix, sheet),
            x: -((index % 12) as i32 * 40),
            y: -((index / 12) as i32 * 30),
            overlay: fainted.then_some(Overlay::FAINTED),
        }
    }

    /// Item icon, 16 columns of 24px cells.
    pub fn item_icon<'a>(&self, item: impl Into<Loose<'a, Item>>) -> IconPosition {
        let index = self.get_item(item).spritenum;
        IconPosition {
            url: format!("{}{}", self.config.resource_prefix, ITEM_ICON_SHEET),
            x: -((index % 16) as i32 * 24),
            y: -((index / 16) as i32 * 24),
            overlay: None,
        }
    }

    /// Type badge image URL.
    pub fn type_icon_url(&self, type_name: &str) -> String {
        format!(
            "{}sprites/types/{}.png",
            self.config.resource_prefix,
            type_name.replace('?', "%3f")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{DexData, Table};

    fn dex() -> Dex {
        let data = DexData::new()
            .with_json(
                Table::Pokedex,
                r#"{
                    "pikachu": {"num": 25, "name": "Pikachu"},
                    "pyroar": {"num": 668, "name": "Pyroar"},
                    "vivillon": {"num": 666, "name": "Vivillon", "otherForms": ["vivillonpokeball"]},
                    "zeraora": {"num": 807, "name": "Zeraora"},
                    "fakemon": {"num": 900, "name": "Fakemon"}
                }"#,
            )
            .unwrap()
            .with_json(Table::Aliases, r#"{"vivillonpokeball": "Vivillon"}"#)
            .unwrap()
            .with_json(
                Table::Items,
                r#"{"leftovers": {"num": 234, "name": "Leftovers", "spritenum": 242}}"#,
            )
            .unwrap();
        Dex::new(data)
    }

    #[test]
    fn test_grid_position() {
        let icon = dex().pokemon_icon("Pikachu", false, false);
        // 25 -> row 2, column 1
        assert_eq!((icon.x, icon.y), (-40, -60));
        assert_eq!(icon.url, "https://play.pokemonshowdown.com/sprites/smicons-sheet.png?a5");
        assert_eq!(icon.background_position(), "-40px -60px");
        assert!(icon.overlay.is_none());
    }

    #[test]
    fn test_out_of_range_num_is_zero() {
        let icon = dex().pokemon_icon("fakemon", false, false);
        assert_eq!((icon.x, icon.y), (0, 0));
        let icon = dex().pokemon_icon("missingno", false, false);
        assert_eq!((icon.x, icon.y), (0, 0));
    }

    #[test]
    fn test_alternate_form_override() {
        let dex = dex();
        let species = dex.get_species("vivillonpokeball");
        let icon = dex.pokemon_icon(&*species, false, false);
        // 816 + 85 = 901
        assert_eq!((icon.x, icon.y), (-(901 % 12) * 40, -(901 / 12) * 30));
    }

    #[test]
    fn test_female_and_fainted_combatant() {
        let mut pyroar = Combatant::new("Pyroar");
        pyroar.gender = Some(Gender::F);
        pyroar.fainted = true;
        let icon = dex().pokemon_icon(&pyroar, false, false);
        // pyroarf = 816 + 92 = 908
        assert_eq!((icon.x, icon.y), (-(908 % 12) * 40, -(908 / 12) * 30));
        assert_eq!(icon.overlay, Some(Overlay::FAINTED));
    }

    #[test]
    fn test_facing_left() {
        let icon = dex().pokemon_icon("Rotom-Wash", true, false);
        // 1044 + 49 = 1093
        assert_eq!((icon.x, icon.y), (-(1093 % 12) * 40, -(1093 / 12) * 30));
    }

    #[test]
    fn test_pokeballs() {
        let dex = dex();
        let fainted = dex.pokemon_icon("pokeball-fainted", false, false);
        assert_eq!((fainted.x, fainted.y), (-80, 4));
        assert_eq!(fainted.overlay, Some(Overlay::FAINTED_POKEBALL));

        let statused = dex.pokemon_icon("pokeball-statused", false, true);
        assert_eq!(statused.x, -40);
        assert!(statused.url.ends_with("digimon/sprites/xyicons-pokeball-sheet.png"));
        assert!(dex.pokemon_icon("pokeball-none", false, false).overlay.is_none());
    }

    #[test]
    fn test_item_icon() {
        let dex = dex();
        let icon = dex.item_icon("Leftovers");
        // 242 -> row 15, column 2
        assert_eq!((icon.x, icon.y), (-48, -360));
        let unknown = dex.item_icon("notanitem");
        assert_eq!((unknown.x, unknown.y), (0, 0));
    }

    #[test]
    fn test_type_icon_url() {
        assert_eq!(
            dex().type_icon_url("???"),
            "https://play.pokemonshowdown.com/sprites/types/%3f%3f%3f.png"
        );
    }
}
