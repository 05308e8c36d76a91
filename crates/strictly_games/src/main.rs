//! Strictly Games - Unified CLI
//!
//! Drives the tic-tac-toe engine and the product table from the command line.

#![warn(missing_docs)]

mod cli;
mod render;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command, Format};
use serde::Serialize;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use strictly_catalog::{COLUMNS, CatalogConfig, FilterableProductTable, Row, TableCommand};
use strictly_tictactoe::{CommandError, Game, GameCommand};
use tracing::{debug, info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Catalog {
            query,
            in_stock_only,
            products,
            format,
        } => run_catalog(query, in_stock_only, products, format),
        Command::Tictactoe {
            commands,
            interactive,
            format,
        } => run_tictactoe(commands, interactive, format),
    }
}

/// JSON shape of the catalog output.
#[derive(Debug, Serialize)]
struct CatalogOutput<'a> {
    columns: [&'static str; 2],
    filter_text: &'a str,
    in_stock_only: bool,
    rows: Vec<Row>,
}

/// Print the product table
#[instrument]
fn run_catalog(
    query: String,
    in_stock_only: bool,
    products: Option<PathBuf>,
    format: Format,
) -> Result<()> {
    let config = CatalogConfig::load_or_seed(products.as_deref())?;
    info!(products = config.products().len(), "Catalog ready");

    let mut table = FilterableProductTable::new(config.into_products());
    table.dispatch(TableCommand::SetFilterText(query));
    table.dispatch(TableCommand::SetInStockOnly(in_stock_only));

    let rows = table.rows();
    let mut stdout = std::io::stdout().lock();
    match format {
        Format::Text => {
            write!(
                stdout,
                "{}",
                render::catalog(table.filter_text(), *table.in_stock_only(), &rows)
            )?;
        }
        Format::Json => {
            let output = CatalogOutput {
                columns: COLUMNS,
                filter_text: table.filter_text(),
                in_stock_only: *table.in_stock_only(),
                rows,
            };
            serde_json::to_writer_pretty(&mut stdout, &output)?;
            writeln!(stdout)?;
        }
    }
    Ok(())
}

/// Play tic-tac-toe from arguments and, optionally, stdin
#[instrument(skip(commands), fields(commands = commands.len()))]
fn run_tictactoe(commands: Vec<String>, interactive: bool, format: Format) -> Result<()> {
    let mut game = Game::new();

    for text in &commands {
        apply(&mut game, text);
    }

    if !interactive {
        return print_game(&game, format);
    }

    info!("Reading commands from stdin");
    print_game(&game, format)?;
    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        if matches!(text, "quit" | "exit" | "q") {
            break;
        }
        apply(&mut game, text);
        print_game(&game, format)?;
    }
    Ok(())
}

/// Parses and applies one command.
///
/// Illegal moves are ignored quietly. Unparseable text and jumps past the
/// history are logged and returned so the caller can tell nothing happened.
fn apply(game: &mut Game, text: &str) -> Option<CommandError> {
    let result = text
        .parse::<GameCommand>()
        .and_then(|command| game.dispatch(command));

    match result {
        Ok(()) => None,
        Err(CommandError::Rejected(e)) => {
            debug!(error = %e, "Move ignored");
            None
        }
        Err(e) => {
            warn!(input = %text, error = %e, "Ignoring command");
            Some(e)
        }
    }
}

fn print_game(game: &Game, format: Format) -> Result<()> {
    let view = game.view();
    let mut stdout = std::io::stdout().lock();
    match format {
        Format::Text => writeln!(stdout, "{}", render::game(&view))?,
        Format::Json => {
            serde_json::to_writer(&mut stdout, &view)?;
            writeln!(stdout)?;
        }
    }
    Ok(())
}
