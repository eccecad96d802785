//! Labyrinth-AI: a computer player for the tile-sliding maze board game.
//!
//! Each turn a player pushes the spare tile into one edge of a 7x7 maze,
//! shifting a whole row or column, then walks its pawn along connected
//! paths toward its next treasure. This crate models the board and runs a
//! one-turn search with a one-reply lookahead on the next opponent.
//!
//! ## Modules
//!
//! - [`constants`] - Board dimensions and engine defaults
//! - [`tile`] - Path shapes, orientations, exits and treasures
//! - [`board`] - The grid, tile insertion and pawn movement
//! - [`reach`] - Breadth-first reachability and closest approach
//! - [`player`] - The move value exchanged with the referee
//! - [`controller`] - Candidate enumeration and move choice
//! - [`setup`] - Initialization payload and random layouts
//! - [`config`] - Engine settings
//! - [`protocol`] - Text command loop for a referee
//!
//! ## Example
//!
//! ```
//! use labyrinth_ai::controller::GameController;
//! use labyrinth_ai::setup::GameSetup;
//!
//! let setup = GameSetup::random(&mut fastrand::Rng::with_seed(7), 2)?;
//! let mut me = GameController::from_setup(1, &setup, fastrand::Rng::with_seed(1))?;
//!
//! // Pick a move, then feed it back the way the referee would
//! let mv = me.produce_move()?;
//! me.apply_move(&mv)?;
//! assert_eq!(me.board().player_location(1)?, mv.destination().unwrap());
//! # Ok::<(), labyrinth_ai::Error>(())
//! ```

pub mod board;
pub mod config;
pub mod constants;
pub mod controller;
pub mod error;
pub mod player;
pub mod protocol;
pub mod reach;
pub mod setup;
pub mod tile;

#[cfg(test)]
mod test_support;

pub use error::{Error, Result};
