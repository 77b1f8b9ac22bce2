//! Command-line front end for `showdown_dex`.
//!
//! Resolves names against a data directory and prints the canonical record,
//! sprite or icon as JSON.
//!
//! Usage:
//!   cargo run -p dex_cli -- species "Charizard-Mega-X"
//!   cargo run -p dex_cli -- --data ./data move hiddenpowerfire60
//!   cargo run -p dex_cli -- sprite pikachu --gen 5 --back --gender F
//!   cargo run -p dex_cli -- --prefs noanim,bwgfx sprite garchomp

mod cmd;
mod models;
mod utils;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use cmd::{lookup, sprite};
use showdown_dex::PrefFlags;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "dex", version)]
struct Cli {
    /// Data directory (overrides `data_dir` from dex.toml)
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Config file (default: discovered dex.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Display preferences to enable (nopastgens, bwgfx, noanim, nogif)
    #[arg(long, global = true, value_delimiter = ',')]
    prefs: Vec<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a species
    Species(lookup::NameArgs),

    /// Resolve a move
    Move(lookup::NameArgs),

    /// Resolve an item
    Item(lookup::NameArgs),

    /// Resolve an ability
    Ability(lookup::NameArgs),

    /// Resolve any effect (`item:`, `ability:` and `move:` prefixes allowed)
    Effect(lookup::NameArgs),

    /// Resolve a type
    Type(lookup::NameArgs),

    /// Ability slots of a species in a generation
    Abilities(lookup::AbilitiesArgs),

    /// Move category as it behaved in a generation
    Category(lookup::CategoryArgs),

    /// Battle sprite for a species
    Sprite(sprite::SpriteArgs),

    /// Party icon for a species
    Icon(sprite::IconArgs),

    /// Item icon
    ItemIcon(lookup::NameArgs),

    /// Teambuilder sprite for a species
    Teambuilder(sprite::TeambuilderArgs),
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        use clap::CommandFactory;
        if let Err(e) = Cli::command().print_help() {
            tracing::error!(error = %e, "failed to print help");
            return ExitCode::FAILURE;
        }
        return ExitCode::SUCCESS;
    };

    let prefs = PrefFlags::from_keys(cli.prefs.iter().map(String::as_str));
    let dex = match utils::load_dex(cli.data, cli.config) {
        Ok(dex) => dex.with_preferences(prefs),
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let output = match command {
        Commands::Species(args) => lookup::species(&dex, args),
        Commands::Move(args) => lookup::move_(&dex, args),
        Commands::Item(args) => lookup::item(&dex, args),
        Commands::Ability(args) => lookup::ability(&dex, args),
        Commands::Effect(args) => lookup::effect(&dex, args),
        Commands::Type(args) => lookup::type_(&dex, args),
        Commands::Abilities(args) => lookup::abilities(&dex, args),
        Commands::Category(args) => lookup::category(&dex, args),
        Commands::Sprite(args) => sprite::sprite(&dex, args),
        Commands::Icon(args) => sprite::icon(&dex, args),
        Commands::ItemIcon(args) => sprite::item_icon(&dex, args),
        Commands::Teambuilder(args) => sprite::teambuilder(&dex, args),
    };

    match output.and_then(|value| utils::print_json(&value)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
