//! Command-line interface for tictactoe_ai.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictactoe_ai::{Difficulty, GameMode, Player};

/// Tic-tac-toe against a three-level AI
#[derive(Parser, Debug)]
#[command(name = "tictactoe_ai")]
#[command(about = "Tic-tac-toe with easy, medium and hard AI opponents", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults apply if it does not exist)
    #[arg(long, global = true, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal (type 1-9 to place a mark)
    Play {
        /// Play against the AI or another person
        #[arg(short, long)]
        mode: Option<GameMode>,

        /// AI strength
        #[arg(short, long)]
        difficulty: Option<Difficulty>,

        /// Mark the AI plays
        #[arg(long, ignore_case = true)]
        ai_mark: Option<Player>,

        /// Pause before the AI's move, in milliseconds
        #[arg(long)]
        ai_delay_ms: Option<u64>,

        /// Number of games to play
        #[arg(short, long, default_value = "1")]
        games: u32,

        /// Seed the AI's random choices
        #[arg(long)]
        seed: Option<u64>,

        /// Stats file location
        #[arg(long)]
        stats_path: Option<PathBuf>,
    },

    /// Print the AI's move for a position
    Suggest {
        /// Nine cells, row-major: X, O, and . for empty (e.g. "XX..O....")
        #[arg(short, long)]
        board: String,

        /// Side to move; inferred from the mark counts if omitted
        #[arg(short, long, ignore_case = true)]
        side: Option<Player>,

        /// AI strength
        #[arg(short, long)]
        difficulty: Option<Difficulty>,

        /// Seed the AI's random choices
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print the result of a position
    Evaluate {
        /// Nine cells, row-major: X, O, and . for empty
        #[arg(short, long)]
        board: String,
    },

    /// Show win/draw counters
    Stats {
        /// Stats file location
        #[arg(long)]
        stats_path: Option<PathBuf>,
    },

    /// Zero the win/draw counters
    ResetStats {
        /// Confirm the reset
        #[arg(long)]
        yes: bool,

        /// Stats file location
        #[arg(long)]
        stats_path: Option<PathBuf>,
    },
}
