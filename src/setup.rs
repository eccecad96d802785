//! The initialization payload a seat receives before the first turn.

use serde::{Deserialize, Serialize};

use crate::board::{Board, Coordinate};
use crate::constants::{
    BOARD_DIM, CELL_COUNT, HOME_CORNERS, MAX_PLAYERS, NO_TREASURE_ID, TREASURE_COUNT,
};
use crate::error::{Error, Result};
use crate::tile::{MazePathType, Orientation, Tile, Treasure};

/// Wire form of a starting position.
///
/// Tiles are `[path_type, orientation, treasure]` id triples with `-1` for
/// "no treasure"; the extra tile is `[path_type, treasure]` and has no
/// orientation until it is inserted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSetup {
    pub player_homes: Vec<Coordinate>,
    pub treasures: Vec<Vec<i64>>,
    pub board: Vec<Vec<[i64; 3]>>,
    pub extra: [i64; 2],
}

impl GameSetup {
    /// Validate the payload and build the board and the extra tile.
    ///
    /// Homes beyond the number of treasure lists are ignored.
    pub fn build(&self) -> Result<(Board, Tile)> {
        if self.board.len() != BOARD_DIM || self.board.iter().any(|row| row.len() != BOARD_DIM) {
            return Err(Error::InvalidSetup(format!(
                "board must be {BOARD_DIM}x{BOARD_DIM}"
            )));
        }
        let players = self.treasures.len();
        if players == 0 || players > MAX_PLAYERS {
            return Err(Error::InvalidSetup(format!(
                "expected 1 to {MAX_PLAYERS} treasure lists, got {players}"
            )));
        }
        if self.player_homes.len() < players {
            return Err(Error::InvalidSetup(format!(
                "{players} treasure lists but only {} homes",
                self.player_homes.len()
            )));
        }

        let queues = self
            .treasures
            .iter()
            .map(|queue| {
                queue
                    .iter()
                    .map(|&id| Treasure::from_id(id)?.ok_or(Error::InvalidTreasure(id)))
                    .collect::<Result<Vec<_>>>()
            })
            .collect::<Result<Vec<_>>>()?;

        let mut tiles = Vec::with_capacity(CELL_COUNT);
        for &[shape, orientation, treasure] in self.board.iter().flatten() {
            tiles.push(Tile::with_orientation(
                MazePathType::from_id(shape)?,
                Orientation::from_id(orientation)?,
                Treasure::from_id(treasure)?,
            ));
        }

        let [shape, treasure] = self.extra;
        let extra = Tile::new(MazePathType::from_id(shape)?, Treasure::from_id(treasure)?);
        if let Some(t) = extra.treasure()
            && tiles.iter().any(|tile| tile.treasure() == Some(t))
        {
            return Err(Error::InvalidSetup(format!(
                "treasure {t} is on the board and the extra tile"
            )));
        }

        let board = Board::new(tiles, self.player_homes[..players].to_vec(), queues)?;
        Ok((board, extra))
    }

    /// A playable random layout for `players` seats.
    ///
    /// Homes are the corners in clockwise order from the top left, each an
    /// elbow opening into the board. All 24 treasures are scattered over
    /// the other cells and the extra tile, then dealt round-robin.
    pub fn random(rng: &mut fastrand::Rng, players: usize) -> Result<Self> {
        if players == 0 || players > MAX_PLAYERS {
            return Err(Error::InvalidSetup(format!(
                "expected 1 to {MAX_PLAYERS} players, got {players}"
            )));
        }

        let mut cells: Vec<[i64; 3]> = Coordinate::all()
            .map(|c| match corner_orientation(c) {
                Some(o) => [MazePathType::L.id() as i64, o.id() as i64, NO_TREASURE_ID as i64],
                None => [rng.i64(0..3), rng.i64(0..4), NO_TREASURE_ID as i64],
            })
            .collect();
        let mut extra = [rng.i64(0..3), NO_TREASURE_ID as i64];

        // CELL_COUNT stands for the extra tile
        let mut spots: Vec<usize> = (0..=CELL_COUNT)
            .filter(|&i| i == CELL_COUNT || corner_orientation(Coordinate::from_index(i)).is_none())
            .collect();
        rng.shuffle(&mut spots);
        for (id, &spot) in spots.iter().take(TREASURE_COUNT).enumerate() {
            if spot == CELL_COUNT {
                extra[1] = id as i64;
            } else {
                cells[spot][2] = id as i64;
            }
        }

        let mut ids: Vec<i64> = (0..TREASURE_COUNT as i64).collect();
        rng.shuffle(&mut ids);
        let mut treasures = vec![Vec::new(); players];
        for (i, id) in ids.into_iter().enumerate() {
            treasures[i % players].push(id);
        }

        Ok(Self {
            player_homes: HOME_CORNERS[..players]
                .iter()
                .map(|&(r, c)| Coordinate::new(r, c))
                .collect(),
            treasures,
            board: cells.chunks(BOARD_DIM).map(<[_]>::to_vec).collect(),
            extra,
        })
    }
}

/// The elbow orientation that opens a corner toward the middle.
fn corner_orientation(c: Coordinate) -> Option<Orientation> {
    let corner = HOME_CORNERS.iter().position(|&(r, col)| (r, col) == (c.row, c.col))?;
    Some(
        [
            Orientation::Deg180,
            Orientation::Deg270,
            Orientation::Deg0,
            Orientation::Deg90,
        ][corner],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile::Direction;

    fn sample() -> GameSetup {
        GameSetup::random(&mut fastrand::Rng::with_seed(42), 4).unwrap()
    }

    #[test]
    fn test_random_layout_builds() {
        for players in 1..=MAX_PLAYERS {
            let mut rng = fastrand::Rng::with_seed(players as u64);
            let setup = GameSetup::random(&mut rng, players).unwrap();
            assert_eq!(setup.player_homes.len(), players);
            assert_eq!(setup.treasures.len(), players);
            assert!(setup.treasures.iter().all(|q| q.len() == TREASURE_COUNT / players));

            let (board, extra) = setup.build().unwrap();
            assert_eq!(board.player_count(), players);
            assert_eq!(extra.orientation(), None);
            let placed = Treasure::all()
                .filter(|&t| board.treasure_location(t).is_some() || extra.treasure() == Some(t))
                .count();
            assert_eq!(placed, TREASURE_COUNT);
        }
        assert!(GameSetup::random(&mut fastrand::Rng::with_seed(1), 0).is_err());
        assert!(GameSetup::random(&mut fastrand::Rng::with_seed(1), 5).is_err());
    }

    #[test]
    fn test_corners_open_inward() {
        let (board, _) = sample().build().unwrap();
        let inward = [
            (Coordinate::new(0, 0), [Direction::East, Direction::South]),
            (Coordinate::new(0, 6), [Direction::South, Direction::West]),
            (Coordinate::new(6, 6), [Direction::North, Direction::West]),
            (Coordinate::new(6, 0), [Direction::North, Direction::East]),
        ];
        for (i, (corner, exits)) in inward.into_iter().enumerate() {
            assert_eq!(board.tile(corner).exits().unwrap(), exits.to_vec());
            assert_eq!(board.player_location(i as u8 + 1).unwrap(), corner);
            assert!(board.tile(corner).treasure().is_none());
        }
    }

    #[test]
    fn test_random_is_seeded() {
        assert_eq!(sample(), sample());
        assert_ne!(sample(), GameSetup::random(&mut fastrand::Rng::with_seed(43), 4).unwrap());
    }

    #[test]
    fn test_json_round_trip() {
        let setup = sample();
        let json = serde_json::to_string(&setup).unwrap();
        assert!(json.starts_with(r#"{"player_homes":[[0,0],[0,6],[6,6],[6,0]],"treasures":"#));
        let back: GameSetup = serde_json::from_str(&json).unwrap();
        assert_eq!(back, setup);
    }

    #[test]
    fn test_extra_homes_are_ignored() {
        let mut setup = GameSetup::random(&mut fastrand::Rng::with_seed(8), 2).unwrap();
        setup.player_homes = HOME_CORNERS.iter().map(|&(r, c)| Coordinate::new(r, c)).collect();
        let (board, _) = setup.build().unwrap();
        assert_eq!(board.players().collect::<Vec<_>>(), vec![1, 2]);
        assert!(board.tile(Coordinate::new(6, 6)).occupants().is_empty());
    }

    #[test]
    fn test_build_rejects_bad_payloads() {
        let mut setup = sample();
        setup.board.pop();
        assert!(matches!(setup.build(), Err(Error::InvalidSetup(_))));

        let mut setup = sample();
        setup.board[2].push([0, 0, -1]);
        assert!(matches!(setup.build(), Err(Error::InvalidSetup(_))));

        let mut setup = sample();
        setup.board[1][1][0] = 3;
        assert_eq!(setup.build().unwrap_err(), Error::InvalidPathType(3));

        let mut setup = sample();
        setup.board[1][1][1] = 4;
        assert_eq!(setup.build().unwrap_err(), Error::InvalidOrientation(4));

        let mut setup = sample();
        setup.board[1][1][2] = 24;
        assert_eq!(setup.build().unwrap_err(), Error::InvalidTreasure(24));

        let mut setup = sample();
        setup.treasures[0][0] = -1;
        assert_eq!(setup.build().unwrap_err(), Error::InvalidTreasure(-1));

        let mut setup = sample();
        setup.treasures.clear();
        assert!(matches!(setup.build(), Err(Error::InvalidSetup(_))));

        let mut setup = sample();
        setup.player_homes.truncate(3);
        assert!(matches!(setup.build(), Err(Error::InvalidSetup(_))));

        let mut setup = sample();
        setup.player_homes[1] = Coordinate::new(0, 0);
        assert!(matches!(setup.build(), Err(Error::InvalidSetup(_))));
    }

    #[test]
    fn test_build_rejects_duplicate_treasure_on_extra() {
        let mut setup = sample();
        let on_board = setup.board.iter().flatten().find(|t| t[2] >= 0).unwrap()[2];
        setup.extra[1] = on_board;
        assert!(matches!(setup.build(), Err(Error::InvalidSetup(_))));
    }
}
