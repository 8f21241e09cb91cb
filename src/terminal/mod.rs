//! Line-based terminal front end.
//!
//! Owns everything that is not game logic: reading stdin, printing the
//! board, pacing the AI, and updating the stats file after each game.

mod orchestrator;
pub mod players;

pub use orchestrator::{GameEvent, Orchestrator};

use crate::config::{AppConfig, GameMode};
use crate::engine::RngSource;
use crate::games::tictactoe::{GameStatus, Player};
use crate::stats::{Stats, StatsStore};
use anyhow::{Context, Result};
use players::{AiPlayer, GamePlayer, HumanPlayer};
use std::io::BufRead;
use tokio::sync::mpsc;
use tracing::{info, instrument, warn};

/// Options for one `play` session.
#[derive(Debug, Clone, derive_new::new)]
pub struct PlayOptions {
    /// Resolved configuration.
    pub config: AppConfig,
    /// Number of games to play back to back.
    pub games: u32,
    /// Seed for the AI's random source; entropy when absent.
    pub seed: Option<u64>,
}

/// Runs interactive games on stdin/stdout.
#[instrument(skip_all, fields(mode = %options.config.mode(), games = options.games))]
pub async fn run_play(options: PlayOptions) -> Result<Stats> {
    let config = &options.config;
    let store = StatsStore::new(config.stats_path());
    let mut stats = store.load().context("Failed to load stats")?;

    let (line_tx, line_rx) = mpsc::unbounded_channel();
    std::thread::spawn(move || forward_stdin(line_tx));

    let (event_tx, event_rx) = mpsc::unbounded_channel();
    let renderer = tokio::spawn(render_events(event_rx));

    let (player_x, player_o) = build_players(config, options.seed, line_rx);
    let mut orchestrator = Orchestrator::new(player_x, player_o, event_tx);

    for round in 1..=options.games {
        info!(round, "Starting game");
        let status = orchestrator.run().await?;
        stats.record(&status);
        if let Err(err) = store.save(&stats) {
            warn!(%err, "Could not save stats");
        }
        orchestrator.restart();
    }

    drop(orchestrator);
    renderer.await.context("Renderer task failed")?;
    println!("{}", stats);
    Ok(stats)
}

/// Pairs up players for the configured mode. Humans share one input stream.
fn build_players(
    config: &AppConfig,
    seed: Option<u64>,
    line_rx: mpsc::UnboundedReceiver<String>,
) -> (Box<dyn GamePlayer>, Box<dyn GamePlayer>) {
    match config.mode() {
        GameMode::Pvp => {
            let player_x = HumanPlayer::new("Player X", line_rx);
            let player_o: Box<dyn GamePlayer> = Box::new(player_x.sharing_input("Player O"));
            (Box::new(player_x) as Box<dyn GamePlayer>, player_o)
        }
        GameMode::Ai => {
            let rng = match seed {
                Some(seed) => RngSource::seeded(seed),
                None => RngSource::from_entropy(),
            };
            let difficulty = *config.difficulty();
            let ai: Box<dyn GamePlayer> = Box::new(
                AiPlayer::new(format!("AI ({})", difficulty), difficulty, rng)
                    .with_delay(config.ai_delay()),
            );
            let human: Box<dyn GamePlayer> = Box::new(HumanPlayer::new("You", line_rx));
            match config.ai_mark() {
                Player::X => (ai, human),
                Player::O => (human, ai),
            }
        }
    }
}

/// Forwards stdin lines from a dedicated thread, so a pending read never
/// holds up runtime shutdown.
fn forward_stdin(line_tx: mpsc::UnboundedSender<String>) {
    for line in std::io::stdin().lock().lines() {
        match line {
            Ok(line) => {
                if line_tx.send(line).is_err() {
                    break;
                }
            }
            Err(err) => {
                warn!(%err, "Failed to read stdin");
                break;
            }
        }
    }
}

async fn render_events(mut event_rx: mpsc::UnboundedReceiver<GameEvent>) {
    while let Some(event) = event_rx.recv().await {
        match event {
            GameEvent::StateChanged(board) => println!("\n{}\n", board),
            GameEvent::Thinking { player, mark } => println!("{}'s Turn ({})", mark, player),
            GameEvent::MoveMade { player, position } => {
                println!("{} played {}", player, position)
            }
            GameEvent::MoveRejected { player, reason } => {
                println!("{}: {}, try again", player, reason)
            }
            GameEvent::GameOver { status, winner } => match (status, winner) {
                (GameStatus::Won { line, .. }, Some(name)) => {
                    println!("{} ({}) on {}", status, name, line)
                }
                _ => println!("{}", status),
            },
        }
    }
}
