use std::collections::BTreeMap;

use serde::Serialize;
use showdown_dex::sprites::Overlay;
use showdown_dex::{AbilitySlot, Category, IconPosition, TeambuilderSprite};

#[derive(Serialize)]
pub struct AbilitiesOutput {
    pub species: String,
    pub gen: u8,
    pub abilities: BTreeMap<AbilitySlot, String>,
}

#[derive(Serialize)]
pub struct CategoryOutput {
    #[serde(rename = "move")]
    pub move_name: String,
    pub gen: u8,
    pub category: Category,
}

/// A sheet cell with its CSS `background-position` spelled out.
#[derive(Serialize)]
pub struct IconOutput {
    pub url: String,
    pub x: i32,
    pub y: i32,
    pub background_position: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlay: Option<Overlay>,
}

impl From<IconPosition> for IconOutput {
    fn from(icon: IconPosition) -> Self {
        Self {
            background_position: icon.background_position(),
            url: icon.url,
            x: icon.x,
            y: icon.y,
            overlay: icon.overlay,
        }
    }
}

impl From<TeambuilderSprite> for IconOutput {
    fn from(sprite: TeambuilderSprite) -> Self {
        Self {
            background_position: sprite.background_position(),
            url: sprite.url,
            x: sprite.x,
            y: sprite.y,
            overlay: None,
        }
    }
}
