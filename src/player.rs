//! A single player's turn: where the extra tile goes and where the pawn walks.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::{Board, Coordinate, PlayerId};
use crate::constants::{MAX_PLAYERS, MAX_ROTATION};
use crate::error::{Error, Result};
use crate::tile::Orientation;

/// One turn of play.
///
/// `path` starts on the mover's cell after the insertion and ends on the
/// destination; a single-cell path means the pawn stays put.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerMove {
    pub player_id: PlayerId,
    pub path: Vec<Coordinate>,
    pub tile_insertion: Coordinate,
    /// Clockwise rotation id: 0 = 0 degrees .. 3 = 270 degrees.
    pub tile_rotation: u8,
}

impl PlayerMove {
    pub fn new(
        player_id: PlayerId,
        path: Vec<Coordinate>,
        tile_insertion: Coordinate,
        tile_rotation: u8,
    ) -> Self {
        Self {
            player_id,
            path,
            tile_insertion,
            tile_rotation,
        }
    }

    /// Where the pawn ends up.
    pub fn destination(&self) -> Option<Coordinate> {
        self.path.last().copied()
    }

    pub fn orientation(&self) -> Result<Orientation> {
        Orientation::from_id(self.tile_rotation as i64)
    }

    /// Checks that hold regardless of the board.
    pub fn check_validity(&self) -> Result<()> {
        if self.tile_rotation > MAX_ROTATION {
            return Err(Error::InvalidMove(format!(
                "rotation {} is outside 0..={MAX_ROTATION}",
                self.tile_rotation
            )));
        }
        if !(1..=MAX_PLAYERS as PlayerId).contains(&self.player_id) {
            return Err(Error::InvalidMove(format!(
                "player id {} is outside 1..={MAX_PLAYERS}",
                self.player_id
            )));
        }
        if self.path.is_empty() {
            return Err(Error::InvalidMove("path is empty".into()));
        }
        if let Some(c) = self
            .path
            .iter()
            .chain([&self.tile_insertion])
            .find(|c| !c.is_on_board())
        {
            return Err(Error::InvalidMove(format!("{c} is off the board")));
        }
        Ok(())
    }

    /// Full validation against the board the move will be applied to.
    pub fn validate(&self, board: &Board) -> Result<()> {
        self.check_validity()?;
        if !board.valid_insertions().contains(&self.tile_insertion) {
            return Err(Error::InvalidInsertion(self.tile_insertion));
        }
        board.home(self.player_id)?;
        Ok(())
    }
}

impl fmt::Display for PlayerMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path: Vec<String> = self.path.iter().map(ToString::to_string).collect();
        write!(
            f,
            "P{} insert {} rot {} path {}",
            self.player_id,
            self.tile_insertion,
            self.tile_rotation,
            path.join(" ")
        )
    }
}
