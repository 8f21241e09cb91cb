//! tictactoe_ai - terminal front end for the move engine.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::path::PathBuf;
use tictactoe_ai::{
    AppConfig, Difficulty, PlayOptions, Player, RngSource, StatsStore, evaluate, read_board,
    run_play, suggest,
};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = AppConfig::load_or_default(&cli.config)?;

    match cli.command {
        Command::Play {
            mode,
            difficulty,
            ai_mark,
            ai_delay_ms,
            games,
            seed,
            stats_path,
        } => {
            let mut config = config;
            if let Some(mode) = mode {
                config = config.with_mode(mode);
            }
            if let Some(difficulty) = difficulty {
                config = config.with_difficulty(difficulty);
            }
            if let Some(ai_mark) = ai_mark {
                config = config.with_ai_mark(ai_mark);
            }
            if let Some(ai_delay_ms) = ai_delay_ms {
                config = config.with_ai_delay_ms(ai_delay_ms);
            }
            if let Some(stats_path) = stats_path {
                config = config.with_stats_path(stats_path);
            }
            run_play(PlayOptions::new(config, games, seed)).await?;
            Ok(())
        }
        Command::Suggest {
            board,
            side,
            difficulty,
            seed,
        } => run_suggest(&board, side, difficulty.unwrap_or(*config.difficulty()), seed),
        Command::Evaluate { board } => run_evaluate(&board),
        Command::Stats { stats_path } => {
            run_stats(stats_path.unwrap_or_else(|| config.stats_path().clone()))
        }
        Command::ResetStats { yes, stats_path } => {
            run_reset_stats(yes, stats_path.unwrap_or_else(|| config.stats_path().clone()))
        }
    }
}

/// Print the engine's move for a board given on the command line
#[instrument]
fn run_suggest(
    board: &str,
    side: Option<Player>,
    difficulty: Difficulty,
    seed: Option<u64>,
) -> Result<()> {
    let mut rng = match seed {
        Some(seed) => RngSource::seeded(seed),
        None => RngSource::from_entropy(),
    };
    let pos = suggest(board, side, difficulty, &mut rng)?;
    info!(%pos, %difficulty, "Suggested move");
    println!("{}", pos.to_index());
    Ok(())
}

/// Print whether a board is won, drawn, or still open
#[instrument]
fn run_evaluate(board: &str) -> Result<()> {
    let board = read_board(board)?;
    println!("{}", evaluate(&board));
    Ok(())
}

/// Print the stored counters
#[instrument]
fn run_stats(stats_path: PathBuf) -> Result<()> {
    let stats = StatsStore::new(stats_path).load().context("Failed to load stats")?;
    println!("{}", stats);
    Ok(())
}

/// Zero the stored counters once confirmed
#[instrument]
fn run_reset_stats(yes: bool, stats_path: PathBuf) -> Result<()> {
    if !yes {
        anyhow::bail!("Refusing to reset statistics without --yes");
    }
    StatsStore::new(stats_path).reset().context("Failed to reset stats")?;
    println!("Statistics reset");
    Ok(())
}
