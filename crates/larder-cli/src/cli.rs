//! Command-line argument definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Larder - meal plan shopping lists and kitchen unit conversion
#[derive(Parser, Debug)]
#[command(name = "larder", author, version, about, long_about = None)]
pub struct Args {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "LARDER_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a shopping list from a weekly plan
    List {
        /// Weekly plan JSON file
        #[arg(long)]
        plan: PathBuf,

        /// Recipes JSON file (array of recipes)
        #[arg(long)]
        recipes: PathBuf,

        /// Export format: text, csv or whatsapp (defaults to the configured format)
        #[arg(short, long)]
        format: Option<String>,

        /// Write to this file (or into this directory) instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Convert a quantity between units
    Convert {
        /// Quantity to convert
        #[arg(allow_negative_numbers = true)]
        quantity: f64,
        /// Source unit
        from: String,
        /// Target unit
        to: String,
    },

    /// Show a quantity the way a cook would read it
    Format {
        /// Decimal quantity
        #[arg(allow_negative_numbers = true)]
        value: f64,
    },

    /// Show the grocery category for an ingredient
    Classify {
        /// Ingredient id or name
        ingredient: String,
    },

    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// `larder config` subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Write a default configuration file
    Init {
        /// Target file (defaults to larder.toml)
        #[arg(long)]
        file: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the effective configuration
    Show,
}
