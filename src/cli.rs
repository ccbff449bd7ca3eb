//! Command-line interface for tictac.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tictac - tic-tac-toe against a tunable minimax opponent
#[derive(Parser, Debug)]
#[command(name = "tictac")]
#[command(about = "Play tic-tac-toe against a minimax engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game in the terminal
    Play {
        /// Path to a TOML game config
        #[arg(short, long, default_value = "tictac.toml")]
        config: PathBuf,

        /// Probability (0-1) that the computer plays optimally
        #[arg(short, long)]
        difficulty: Option<f64>,

        /// Pause before the computer's reply, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Seed for reproducible computer play
        #[arg(long)]
        seed: Option<u64>,

        /// Let the computer open each round
        #[arg(long)]
        computer_first: bool,
    },

    /// Print the outcome of a board, e.g. "XX.OO...."
    Evaluate {
        /// Nine cells: X, O, or . for empty
        board: String,
    },

    /// Print the computer's move for a board
    Decide {
        /// Nine cells: X, O, or . for empty
        board: String,

        /// Probability (0-1) that the computer plays optimally
        #[arg(short, long, default_value_t = 1.0)]
        difficulty: f64,

        /// Seed for the random roll
        #[arg(long)]
        seed: Option<u64>,

        /// Print the full decision as JSON
        #[arg(long)]
        json: bool,

        /// Also print the minimax score of every empty square
        #[arg(long)]
        explain: bool,
    },

    /// Play the engine against a random opponent and report results
    Simulate {
        /// Number of rounds
        #[arg(short, long, default_value_t = 100)]
        games: u32,

        /// Probability (0-1) that the computer plays optimally
        #[arg(short, long, default_value_t = 0.5)]
        difficulty: f64,

        /// Seed for reproducible batches
        #[arg(long)]
        seed: Option<u64>,

        /// Let the computer open each round
        #[arg(long)]
        computer_first: bool,

        /// Print the tally as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the effective game config as TOML
    Config {
        /// Path to a TOML game config
        #[arg(short, long, default_value = "tictac.toml")]
        config: PathBuf,
    },
}
