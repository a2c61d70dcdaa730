//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use games_inventory_core::{Genre, Platform};

#[derive(Parser)]
#[command(name = "games-inventory")]
#[command(about = "Track a video game inventory: stock, prices and suppliers", long_about = None)]
pub(crate) struct Cli {
    /// Inventory database file (overrides GAMES_INVENTORY_DB and settings.toml)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Game fields shared by `add` and `edit`.
#[derive(Args, Clone, Debug, Default)]
pub(crate) struct GameFieldArgs {
    /// Game title
    #[arg(long)]
    pub name: Option<String>,

    /// Genre (unknown, action, strategy, rpg, fps, sport, or its code)
    #[arg(short, long)]
    pub genre: Option<Genre>,

    /// Platform (pc, xboxone, xbox360, ps3, ps4, or its code)
    #[arg(short, long)]
    pub platform: Option<Platform>,

    /// Unit price
    #[arg(long, allow_negative_numbers = true)]
    pub price: Option<f64>,

    /// Units in stock
    #[arg(short, long, allow_negative_numbers = true)]
    pub quantity: Option<i64>,

    /// Supplier name
    #[arg(long)]
    pub supplier_name: Option<String>,

    /// Supplier phone number
    #[arg(long)]
    pub supplier_phone: Option<String>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// List every game in the inventory
    List,

    /// Show all fields of one game
    Show {
        /// Game id
        id: i64,
    },

    /// Add a game
    Add {
        #[command(flatten)]
        fields: GameFieldArgs,
    },

    /// Change some fields of a game (only the given fields are written)
    Edit {
        /// Game id
        id: i64,

        #[command(flatten)]
        fields: GameFieldArgs,

        /// Remove the supplier phone number
        #[arg(long, conflicts_with = "supplier_phone")]
        clear_phone: bool,
    },

    /// Sell one unit of a game
    Sell {
        /// Game id
        id: i64,
    },

    /// Delete one game
    Delete {
        /// Game id
        id: i64,
    },

    /// Delete every game
    DeleteAll {
        /// Actually delete (without this, only explains what would happen)
        #[arg(long)]
        confirm: bool,
    },

    /// Insert a sample game
    Seed,

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show the resolved database path and where it came from
    Show,

    /// Print the settings file path
    Path,
}
