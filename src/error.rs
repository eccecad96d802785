//! Error type shared by the board model and the move search.
//!
//! Every variant is a contract violation: a malformed payload from the
//! caller or an inconsistent request from the search itself. None of them
//! describes a legal game outcome.

use crate::board::{Coordinate, PlayerId};

/// Errors raised by the engine.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Insertion at a slot that is not currently in the valid set.
    #[error("{0} is not a valid tile insertion location")]
    InvalidInsertion(Coordinate),

    /// Exit query on a tile that was never given an orientation.
    #[error("tile has no orientation set, its exits are undefined")]
    OrientationUnset,

    /// Coordinate outside the 7x7 grid.
    #[error("coordinate ({row}, {col}) is off the board")]
    OutOfBounds { row: i64, col: i64 },

    /// Player id not seated on this board.
    #[error("unknown player {0}")]
    UnknownPlayer(PlayerId),

    #[error("cannot convert id {0} into a maze path type")]
    InvalidPathType(i64),

    #[error("cannot convert id {0} into an orientation")]
    InvalidOrientation(i64),

    #[error("cannot convert id {0} into a treasure")]
    InvalidTreasure(i64),

    /// Initialization payload failed validation.
    #[error("invalid game setup: {0}")]
    InvalidSetup(String),

    /// Move failed validation against the current board.
    #[error("invalid move: {0}")]
    InvalidMove(String),

    #[error("invalid engine configuration: {0}")]
    InvalidConfig(String),

    /// A per-turn command arrived before the controller was built.
    #[error("player has not been initialized")]
    NotInitialized,
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
