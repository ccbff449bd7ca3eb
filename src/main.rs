//! Tictac - Unified CLI
//!
//! Interactive play plus scripting helpers around the move engine.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use std::path::Path;
use tictac::{Board, Difficulty, FirstPlayer, GameConfig, MoveEngine, evaluate, run_terminal};
use tictac_core::analyze;
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    initialize_tracing();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            difficulty,
            delay_ms,
            seed,
            computer_first,
        } => {
            let config = load_config(&config, difficulty, delay_ms, seed, computer_first)?;
            run_terminal(config).await?;
            Ok(())
        }
        Command::Evaluate { board } => run_evaluate(&board),
        Command::Decide {
            board,
            difficulty,
            seed,
            json,
            explain,
        } => run_decide(&board, difficulty, seed, json, explain),
        Command::Simulate {
            games,
            difficulty,
            seed,
            computer_first,
            json,
        } => run_simulate(games, difficulty, seed, computer_first, json),
        Command::Config { config } => {
            let config = GameConfig::load_or_default(&config)?;
            print!("{}", config.to_toml()?);
            Ok(())
        }
    }
}

/// Loads the config file and applies command-line overrides.
#[instrument(skip(path), fields(path = %path.display()))]
fn load_config(
    path: &Path,
    difficulty: Option<f64>,
    delay_ms: Option<u64>,
    seed: Option<u64>,
    computer_first: bool,
) -> Result<GameConfig> {
    let mut config = GameConfig::load_or_default(path)?;

    if let Some(difficulty) = difficulty {
        config = config.with_difficulty(Difficulty::new(difficulty)?);
    }
    if let Some(delay_ms) = delay_ms {
        config = config.with_computer_delay_ms(delay_ms);
    }
    if seed.is_some() {
        config = config.with_seed(seed);
    }
    if computer_first {
        config = config.with_first_player(FirstPlayer::Computer);
    }

    info!(?config, "Effective configuration");
    Ok(config)
}

fn run_evaluate(board: &str) -> Result<()> {
    let board: Board = board.parse()?;
    println!("{}\n", board);
    println!("{}", evaluate(&board));
    Ok(())
}

#[instrument]
fn run_decide(
    board: &str,
    difficulty: f64,
    seed: Option<u64>,
    json: bool,
    explain: bool,
) -> Result<()> {
    let board: Board = board.parse()?;
    let mut engine = MoveEngine::from_seed(seed);
    let decision = engine.decide(&board, Difficulty::new(difficulty)?)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&decision)?);
    } else {
        println!("{}", decision.index());
    }

    if explain {
        for (position, score) in analyze(&board) {
            println!("{:>2} {:<14} {:+}", position.to_index(), position.label(), score);
        }
    }
    Ok(())
}

#[instrument]
fn run_simulate(
    games: u32,
    difficulty: f64,
    seed: Option<u64>,
    computer_first: bool,
    json: bool,
) -> Result<()> {
    let first_player = if computer_first {
        FirstPlayer::Computer
    } else {
        FirstPlayer::Human
    };
    let tally = tictac::simulate(games, Difficulty::new(difficulty)?, first_player, seed)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&tally)?);
    } else {
        println!("{}", tally);
    }
    Ok(())
}

fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
