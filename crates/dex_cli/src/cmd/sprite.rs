use clap::Args;
use serde_json::Value;
use showdown_dex::{Combatant, Dex, Facing, Gender, SpriteOptions};

use crate::cmd::lookup::NameArgs;
use crate::models::IconOutput;

fn parse_gender(s: &str) -> Result<Gender, String> {
    Gender::from_letter(s).ok_or_else(|| format!("unknown gender '{s}' (expected M, F or N)"))
}

#[derive(Args, Debug)]
pub struct SpriteArgs {
    pub species: String,

    /// Generation of the battle field
    #[arg(short, long, default_value_t = 6)]
    pub gen: u8,

    #[arg(long)]
    pub shiny: bool,

    #[arg(long, value_parser = parse_gender)]
    pub gender: Option<Gender>,

    /// Player's own side
    #[arg(long)]
    pub back: bool,

    /// April Fool's sprites
    #[arg(long)]
    pub afd: bool,

    #[arg(long)]
    pub digi: bool,

    #[arg(long)]
    pub no_scale: bool,
}

#[derive(Args, Debug)]
pub struct IconArgs {
    /// Species name or a pokeball placeholder (pokeball, pokeball-fainted, ...)
    pub species: String,

    /// Use the left-facing variant where one exists
    #[arg(long)]
    pub left: bool,

    #[arg(long)]
    pub fainted: bool,

    #[arg(long, value_parser = parse_gender)]
    pub gender: Option<Gender>,

    #[arg(long)]
    pub digi: bool,
}

#[derive(Args, Debug)]
pub struct TeambuilderArgs {
    pub species: String,

    #[arg(long)]
    pub shiny: bool,

    /// Format generation; 0 for the current one
    #[arg(short, long, default_value_t = 0)]
    pub gen: u8,
}

pub fn sprite(dex: &Dex, args: SpriteArgs) -> serde_json::Result<Value> {
    let facing = if args.back { Facing::Back } else { Facing::Front };
    let options = SpriteOptions {
        gen: args.gen,
        shiny: args.shiny,
        gender: args.gender,
        afd: args.afd,
        no_scale: args.no_scale,
        digi: args.digi,
    };
    serde_json::to_value(dex.sprite_data(args.species.as_str(), facing, &options))
}

pub fn icon(dex: &Dex, args: IconArgs) -> serde_json::Result<Value> {
    let icon = if args.fainted || args.gender.is_some() {
        let mut combatant = Combatant::new(args.species);
        combatant.fainted = args.fainted;
        combatant.gender = args.gender;
        dex.pokemon_icon(&combatant, args.left, args.digi)
    } else {
        dex.pokemon_icon(args.species.as_str(), args.left, args.digi)
    };
    serde_json::to_value(IconOutput::from(icon))
}

pub fn item_icon(dex: &Dex, args: NameArgs) -> serde_json::Result<Value> {
    serde_json::to_value(IconOutput::from(dex.item_icon(args.name.as_str())))
}

pub fn teambuilder(dex: &Dex, args: TeambuilderArgs) -> serde_json::Result<Value> {
    let sprite = dex.teambuilder_sprite(&args.species, args.shiny, args.gen);
    serde_json::to_value(IconOutput::from(sprite))
}
