//! Win/draw counters that persist across sessions.

use crate::games::tictactoe::{GameStatus, Player};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Aggregate results, stored as `{"xWins":0,"oWins":0,"draws":0}`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters,
)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    /// Games won by X.
    x_wins: u32,
    /// Games won by O.
    o_wins: u32,
    /// Games drawn.
    draws: u32,
}

impl Stats {
    /// Counts a finished game. In-progress statuses are ignored.
    #[instrument(skip(self))]
    pub fn record(&mut self, status: &GameStatus) {
        match status.winner() {
            Some(Player::X) => self.x_wins = self.x_wins.saturating_add(1),
            Some(Player::O) => self.o_wins = self.o_wins.saturating_add(1),
            None if status.is_over() => self.draws = self.draws.saturating_add(1),
            None => {}
        }
    }

    /// Total finished games. Counters stop at `u32::MAX` rather than wrap.
    pub fn games(&self) -> u64 {
        u64::from(self.x_wins) + u64::from(self.o_wins) + u64::from(self.draws)
    }
}

impl std::fmt::Display for Stats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "X wins: {}  O wins: {}  Draws: {}",
            self.x_wins, self.o_wins, self.draws
        )
    }
}

/// Stats file error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Stats error: {} at {}:{}", message, file, line)]
pub struct StatsError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl StatsError {
    /// Creates a new stats error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// JSON file holding one [`Stats`] record.
#[derive(Debug, Clone)]
pub struct StatsStore {
    path: PathBuf,
}

impl StatsStore {
    /// Creates a store backed by `path`. Nothing is read until [`load`](Self::load).
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the counters; a missing file counts as all zeros.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load(&self) -> Result<Stats, StatsError> {
        if !self.path.exists() {
            debug!("No stats file yet, starting from zero");
            return Ok(Stats::default());
        }

        let content = std::fs::read_to_string(&self.path)
            .map_err(|e| StatsError::new(format!("Failed to read stats file: {}", e)))?;
        let stats: Stats = serde_json::from_str(&content)
            .map_err(|e| StatsError::new(format!("Failed to parse stats file: {}", e)))?;

        debug!(games = stats.games(), "Stats loaded");
        Ok(stats)
    }

    /// Writes the counters, creating parent directories as needed.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn save(&self, stats: &Stats) -> Result<(), StatsError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|e| StatsError::new(format!("Failed to create stats directory: {}", e)))?;
        }

        let content = serde_json::to_string_pretty(stats)
            .map_err(|e| StatsError::new(format!("Failed to encode stats: {}", e)))?;
        std::fs::write(&self.path, content)
            .map_err(|e| StatsError::new(format!("Failed to write stats file: {}", e)))?;

        debug!("Stats saved");
        Ok(())
    }

    /// Loads, records one finished game, saves, and returns the new totals.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn record(&self, status: &GameStatus) -> Result<Stats, StatsError> {
        let mut stats = self.load()?;
        stats.record(status);
        self.save(&stats)?;
        Ok(stats)
    }

    /// Zeroes all counters on disk.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn reset(&self) -> Result<(), StatsError> {
        self.save(&Stats::default())?;
        info!("Stats reset");
        Ok(())
    }
}
