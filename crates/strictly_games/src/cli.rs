//! Command-line interface for strictly_games.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Strictly Games - tic-tac-toe with time travel and a filterable product table
#[derive(Parser, Debug)]
#[command(name = "strictly_games")]
#[command(about = "Tic-tac-toe with move history and a filterable product table")]
#[command(long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// How results are printed
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// Human-readable text
    #[default]
    Text,
    /// JSON projection of the state
    Json,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the product table
    Catalog {
        /// Search text; every whitespace-separated word must appear in the name
        #[arg(short, long, default_value = "")]
        query: String,

        /// Only show products in stock
        #[arg(long)]
        in_stock_only: bool,

        /// TOML file with [[products]] entries (defaults to the built-in seed data)
        #[arg(long, env = "STRICTLY_PRODUCTS")]
        products: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },

    /// Play tic-tac-toe
    Tictactoe {
        /// Commands to apply in order, e.g. "play 4", "center", "jump 2"
        commands: Vec<String>,

        /// Keep reading commands from stdin after the given ones
        #[arg(short, long)]
        interactive: bool,

        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
}
