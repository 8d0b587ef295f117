//! ttt-minimax - analysis CLI
//!
//! Reads a single board and reports the engine's move or the value of every
//! legal move. There is no interactive game loop.

#![warn(missing_docs)]

mod cli;
mod report;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use report::{Analysis, render_decision};
use std::path::Path;
use tictactoe_minimax::{Board, Engine, EngineConfig};
use tracing::{debug, info, instrument};
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
        Command::Suggest {
            board,
            randomness,
            seed,
            json,
        } => {
            let mut config = load_config(cli.config.as_deref())?;
            if let Some(randomness) = randomness {
                config = config.with_randomness(randomness);
            }
            if let Some(seed) = seed {
                config = config.with_seed(seed);
            }
            run_suggest(board, config, json)
        }
        Command::Analyze { board, json } => run_analyze(board, json),
    }
}

/// Loads the engine config from `path`, or defaults when none is given.
fn load_config(path: Option<&Path>) -> Result<EngineConfig> {
    match path {
        Some(path) => EngineConfig::from_file(path)
            .with_context(|| format!("loading config from {}", path.display())),
        None => {
            debug!("No config file, using defaults");
            Ok(EngineConfig::default())
        }
    }
}

/// Prints the engine's decision for `board`.
#[instrument(skip(board, config), fields(board = %board))]
fn run_suggest(board: Board, config: EngineConfig, json: bool) -> Result<()> {
    let mut engine = Engine::new(config).context("invalid engine config")?;
    info!(randomness = %engine.randomness(), "Engine configured");

    match engine.choose_move(&board) {
        Some(decision) if json => {
            println!("{}", serde_json::to_string_pretty(&decision)?);
        }
        Some(decision) => print!("{}", render_decision(&board, &decision)),
        None if json => {
            println!("{}", serde_json::json!({ "outcome": board.outcome() }));
        }
        None => println!("{}\n\nGame over: {}", board.grid(), board.outcome()),
    }
    Ok(())
}

/// Prints every legal move's value for `board`.
#[instrument(skip(board), fields(board = %board))]
fn run_analyze(board: Board, json: bool) -> Result<()> {
    let analysis = Analysis::of(&board);
    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        print!("{}", analysis.render(&board));
    }
    Ok(())
}
