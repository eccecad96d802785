//! Engine settings shared by the command loop and the demo.

use std::time::Duration;

use crate::board::PlayerId;
use crate::constants::{
    DEFAULT_MOVE_COUNT_LIMIT, DEFAULT_MOVE_LIMIT_SECS, DEFAULT_PLAYERS, MAX_PLAYERS,
};
use crate::error::{Error, Result};

#[derive(Clone, Debug, PartialEq)]
pub struct EngineConfig {
    /// Fixed seed for reproducible searches; entropy-seeded when `None`.
    pub seed: Option<u64>,
    /// Soft per-move time budget. Overruns are logged, the search is not cut
    /// short.
    pub move_limit: Duration,
    /// Turn cap for self-play.
    pub move_count_limit: usize,
    /// Seats in a self-play game.
    pub players: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: None,
            move_limit: Duration::from_secs_f64(DEFAULT_MOVE_LIMIT_SECS),
            move_count_limit: DEFAULT_MOVE_COUNT_LIMIT,
            players: DEFAULT_PLAYERS,
        }
    }
}

impl EngineConfig {
    /// Build a checked configuration from command-line values.
    pub fn new(
        seed: Option<u64>,
        move_limit_secs: f64,
        move_count_limit: usize,
        players: usize,
    ) -> Result<Self> {
        let move_limit = Duration::try_from_secs_f64(move_limit_secs)
            .ok()
            .filter(|d| !d.is_zero())
            .ok_or_else(|| {
                Error::InvalidConfig(format!(
                    "move limit {move_limit_secs} is not a positive number of seconds"
                ))
            })?;
        if players == 0 || players > MAX_PLAYERS {
            return Err(Error::InvalidConfig(format!(
                "expected 1 to {MAX_PLAYERS} players, got {players}"
            )));
        }
        if move_count_limit == 0 {
            return Err(Error::InvalidConfig("move count limit must be positive".into()));
        }
        Ok(Self {
            seed,
            move_limit,
            move_count_limit,
            players,
        })
    }

    /// Generator for layouts and other table-wide draws.
    pub fn rng(&self) -> fastrand::Rng {
        match self.seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        }
    }

    /// Search generator for one seat. Seats get distinct streams under a
    /// fixed seed.
    pub fn rng_for(&self, player: PlayerId) -> fastrand::Rng {
        match self.seed {
            Some(seed) => fastrand::Rng::with_seed(seed.wrapping_add(player as u64)),
            None => fastrand::Rng::new(),
        }
    }
}
