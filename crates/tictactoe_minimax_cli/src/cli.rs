//! Command-line interface for ttt-minimax.

use clap::{Parser, Subcommand};
use tictactoe_minimax::Board;

/// ttt-minimax - perfect-play tic-tac-toe analysis
#[derive(Parser, Debug)]
#[command(name = "ttt-minimax")]
#[command(about = "Analyze tic-tac-toe positions with exhaustive minimax", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to an engine config file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Pick a move for the player to move
    Suggest {
        /// Board in row-major notation, e.g. "XX./O../..."
        #[arg(short, long)]
        board: Board,

        /// Chance in [0, 1] of playing a random legal move (overrides config)
        #[arg(short, long)]
        randomness: Option<f64>,

        /// RNG seed for reproducible choices (overrides config)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Print the decision as JSON
        #[arg(long)]
        json: bool,
    },

    /// Score every legal move and list the optimal set
    Analyze {
        /// Board in row-major notation, e.g. "XX./O../..."
        #[arg(short, long)]
        board: Board,

        /// Print the analysis as JSON
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_suggest() {
        let cli = Cli::parse_from([
            "ttt-minimax",
            "suggest",
            "--board",
            "XX./O../...",
            "--randomness",
            "0",
            "--seed",
            "4",
        ]);
        match cli.command {
            Command::Suggest {
                board,
                randomness,
                seed,
                json,
            } => {
                assert_eq!(board.to_string(), "XX./O../...");
                assert_eq!(randomness, Some(0.0));
                assert_eq!(seed, Some(4));
                assert!(!json);
            }
            Command::Analyze { .. } => panic!("expected suggest"),
        }
    }

    #[test]
    fn test_bad_board_rejected() {
        let result = Cli::try_parse_from(["ttt-minimax", "analyze", "--board", "XXXX"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_config_is_global() {
        let cli = Cli::parse_from([
            "ttt-minimax",
            "analyze",
            "-b",
            ".........",
            "-c",
            "engine.toml",
        ]);
        assert_eq!(cli.config, Some(std::path::PathBuf::from("engine.toml")));
    }
}
