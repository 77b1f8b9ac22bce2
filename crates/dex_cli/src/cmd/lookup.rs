use clap::Args;
use serde_json::Value;
use showdown_dex::Dex;

use crate::models::{AbilitiesOutput, CategoryOutput};

#[derive(Args, Debug)]
pub struct NameArgs {
    /// Name or id to resolve
    pub name: String,
}

#[derive(Args, Debug)]
pub struct AbilitiesArgs {
    pub species: String,

    /// Generation (3-9)
    #[arg(short, long, default_value_t = 9)]
    pub gen: u8,
}

#[derive(Args, Debug)]
pub struct CategoryArgs {
    #[arg(value_name = "MOVE")]
    pub move_name: String,

    #[arg(short, long, default_value_t = 9)]
    pub gen: u8,

    /// Type to judge the pre-split category by (e.g. Hidden Power's real type)
    #[arg(long = "type")]
    pub type_override: Option<String>,
}

pub fn species(dex: &Dex, args: NameArgs) -> serde_json::Result<Value> {
    let species = dex.get_species(args.name.as_str());
    let mut value = serde_json::to_value(&*species)?;
    // Runtime attachments are skipped by the record's own serialization
    let attachments = species.attachments.borrow();
    if let (Value::Object(map), false) = (&mut value, attachments.is_empty()) {
        map.insert("attachments".into(), serde_json::to_value(&*attachments)?);
    }
    Ok(value)
}

pub fn move_(dex: &Dex, args: NameArgs) -> serde_json::Result<Value> {
    serde_json::to_value(dex.get_move(args.name.as_str()))
}

pub fn item(dex: &Dex, args: NameArgs) -> serde_json::Result<Value> {
    serde_json::to_value(dex.get_item(args.name.as_str()))
}

pub fn ability(dex: &Dex, args: NameArgs) -> serde_json::Result<Value> {
    serde_json::to_value(dex.get_ability(args.name.as_str()))
}

pub fn effect(dex: &Dex, args: NameArgs) -> serde_json::Result<Value> {
    serde_json::to_value(dex.get_effect(args.name.as_str()))
}

pub fn type_(dex: &Dex, args: NameArgs) -> serde_json::Result<Value> {
    serde_json::to_value(dex.get_type(args.name.as_str()))
}

pub fn abilities(dex: &Dex, args: AbilitiesArgs) -> serde_json::Result<Value> {
    let species = dex.get_species(args.species.as_str());
    serde_json::to_value(AbilitiesOutput {
        abilities: dex.abilities_for(&species, args.gen),
        species: species.species.clone(),
        gen: args.gen,
    })
}

pub fn category(dex: &Dex, args: CategoryArgs) -> serde_json::Result<Value> {
    let mv = dex.get_move(args.move_name.as_str());
    serde_json::to_value(CategoryOutput {
        category: dex.category_for_gen(&mv, args.gen, args.type_override.as_deref()),
        move_name: mv.name.clone(),
        gen: args.gen,
    })
}
