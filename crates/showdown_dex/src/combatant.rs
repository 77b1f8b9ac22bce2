//! The slice of a live battle combatant the asset resolver reads.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Gender {
    M,
    F,
    #[default]
    N,
}

impl Gender {
    pub fn from_letter(letter: &str) -> Option<Self> {
        match letter {
            "M" | "m" => Some(Gender::M),
            "F" | "f" => Some(Gender::F),
            "N" | "n" => Some(Gender::N),
            _ => None,
        }
    }
}

/// Appearance copied by Transform.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TransformState {
    pub species: String,
    pub shiny: bool,
    pub gender: Option<Gender>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Volatiles {
    pub transform: Option<TransformState>,
    /// Species name the combatant currently appears as
    pub formechange: Option<String>,
}

/// A combatant on the field.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Combatant {
    pub species: String,
    pub shiny: bool,
    pub gender: Option<Gender>,
    pub fainted: bool,
    /// Icon index override
    pub num: Option<i32>,
    pub volatiles: Volatiles,
}

impl Combatant {
    pub fn new(species: impl Into<String>) -> Self {
        Self {
            species: species.into(),
            ..Self::default()
        }
    }

    /// Species currently shown on the field.
    pub fn sprite_species(&self) -> &str {
        if let Some(forme) = &self.volatiles.formechange {
            return forme;
        }
        match &self.volatiles.transform {
            Some(transform) => &transform.species,
            None => &self.species,
        }
    }

    /// Species used for the party icon. Transform does not change icons.
    pub fn icon_species(&self) -> &str {
        match (&self.volatiles.formechange, &self.volatiles.transform) {
            (Some(forme), None) => forme,
            _ => &self.species,
        }
    }

    /// Shininess and gender as displayed, following Transform.
    pub fn appearance(&self) -> (bool, Option<Gender>) {
        match &self.volatiles.transform {
            Some(transform) => (transform.shiny, transform.gender),
            None => (self.shiny, self.gender),
        }
    }
}
