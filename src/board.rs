//! The 7x7 maze board and its insertion mechanics.
//!
//! The board owns every tile on the grid. Inserting the extra tile at an
//! edge slot shifts a whole row or column by one cell and pushes the tile at
//! the far end off the board; that tile is handed back to the caller and
//! becomes the next extra tile.
//!
//! Pawn and treasure locations are kept in lookup maps next to the grid and
//! are rebuilt from the grid after every insertion, so they can never drift
//! from what the tiles say.
//!
//! All collections are ordered, which keeps iteration (and therefore any
//! seeded search over the board) reproducible.

use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{BOARD_DIM, CELL_COUNT, INSERTION_OFFSETS, LAST, MAX_PLAYERS};
use crate::error::{Error, Result};
use crate::tile::{Direction, Tile, Treasure};

/// Player seat number, 1-based.
pub type PlayerId = u8;

/// A (row, col) cell on the board. Row 0 is the North edge, col 0 the West.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "[i64; 2]", into = "[usize; 2]")]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Checked constructor for coordinates coming from outside the engine.
    pub fn try_new(row: i64, col: i64) -> Result<Self> {
        let dim = BOARD_DIM as i64;
        if (0..dim).contains(&row) && (0..dim).contains(&col) {
            Ok(Self::new(row as usize, col as usize))
        } else {
            Err(Error::OutOfBounds { row, col })
        }
    }

    pub fn is_on_board(self) -> bool {
        self.row < BOARD_DIM && self.col < BOARD_DIM
    }

    /// `self`, or [`Error::OutOfBounds`] if it lies off the grid.
    pub fn on_board(self) -> Result<Self> {
        if self.is_on_board() {
            Ok(self)
        } else {
            Err(Error::OutOfBounds {
                row: self.row as i64,
                col: self.col as i64,
            })
        }
    }

    /// Row-major position in the tile vector.
    #[inline]
    pub fn index(self) -> usize {
        self.row * BOARD_DIM + self.col
    }

    #[inline]
    pub fn from_index(index: usize) -> Self {
        Self::new(index / BOARD_DIM, index % BOARD_DIM)
    }

    /// Every cell, row by row.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0..CELL_COUNT).map(Self::from_index)
    }

    pub fn manhattan(self, other: Coordinate) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// The adjacent cell in `direction`, if it is still on the board.
    pub fn step(self, direction: Direction) -> Option<Coordinate> {
        let (dr, dc) = direction.delta();
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        let next = Coordinate::new(row, col);
        next.is_on_board().then_some(next)
    }

    /// In-bounds neighbours with the direction that leads to each.
    pub fn neighbors(self) -> impl Iterator<Item = (Direction, Coordinate)> {
        Direction::ALL
            .into_iter()
            .filter_map(move |d| self.step(d).map(|c| (d, c)))
    }

    /// One of the twelve edge slots where a tile can be pushed in.
    pub fn is_insertion_slot(self) -> bool {
        let odd = |v: usize| INSERTION_OFFSETS.contains(&v);
        ((self.row == 0 || self.row == LAST) && odd(self.col))
            || ((self.col == 0 || self.col == LAST) && odd(self.row))
    }

    /// The slot at the other end of the same row or column.
    pub fn opposite_slot(self) -> Coordinate {
        if self.row == 0 || self.row == LAST {
            Coordinate::new(LAST - self.row, self.col)
        } else {
            Coordinate::new(self.row, LAST - self.col)
        }
    }
}

impl TryFrom<[i64; 2]> for Coordinate {
    type Error = Error;

    fn try_from([row, col]: [i64; 2]) -> Result<Self> {
        Self::try_new(row, col)
    }
}

impl From<Coordinate> for [usize; 2] {
    fn from(c: Coordinate) -> Self {
        [c.row, c.col]
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.row, self.col)
    }
}

/// The cells of the row or column entered at `at`, starting at `at` and
/// ending at the cell whose tile gets pushed off.
fn shift_line(at: Coordinate) -> [Coordinate; BOARD_DIM] {
    std::array::from_fn(|i| {
        if at.row == 0 {
            Coordinate::new(i, at.col)
        } else if at.row == LAST {
            Coordinate::new(LAST - i, at.col)
        } else if at.col == 0 {
            Coordinate::new(at.row, i)
        } else {
            Coordinate::new(at.row, LAST - i)
        }
    })
}

/// Every insertion slot on a fresh board.
fn all_insertion_slots() -> BTreeSet<Coordinate> {
    INSERTION_OFFSETS
        .iter()
        .flat_map(|&i| {
            [
                Coordinate::new(0, i),
                Coordinate::new(LAST, i),
                Coordinate::new(i, 0),
                Coordinate::new(i, LAST),
            ]
        })
        .collect()
}

/// Maze board state.
///
/// `Clone` produces a fully independent copy, which is what the move search
/// relies on to try insertions without touching the real board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    tiles: Vec<Tile>,
    valid_insertions: BTreeSet<Coordinate>,
    barred: Option<Coordinate>,
    locations: BTreeMap<PlayerId, Coordinate>,
    homes: BTreeMap<PlayerId, Coordinate>,
    treasures: BTreeMap<PlayerId, VecDeque<Treasure>>,
    treasure_locations: BTreeMap<Treasure, Coordinate>,
}

impl Board {
    /// Build a board from 49 oriented tiles in row-major order.
    ///
    /// Player `i + 1` starts on `homes[i]` and must collect `queues[i]` in
    /// order.
    ///
    /// # Errors
    /// [`Error::InvalidSetup`] for a wrong tile count, an unoriented tile, a
    /// bad number of players, duplicate homes or a treasure on two tiles;
    /// [`Error::OutOfBounds`] for a home off the board.
    pub fn new(
        mut tiles: Vec<Tile>,
        homes: Vec<Coordinate>,
        queues: Vec<Vec<Treasure>>,
    ) -> Result<Self> {
        if tiles.len() != CELL_COUNT {
            return Err(Error::InvalidSetup(format!(
                "expected {CELL_COUNT} tiles, got {}",
                tiles.len()
            )));
        }
        if let Some(i) = tiles.iter().position(|t| t.orientation().is_none()) {
            return Err(Error::InvalidSetup(format!(
                "tile at {} has no orientation",
                Coordinate::from_index(i)
            )));
        }
        if homes.is_empty() || homes.len() > MAX_PLAYERS {
            return Err(Error::InvalidSetup(format!(
                "expected 1 to {MAX_PLAYERS} players, got {}",
                homes.len()
            )));
        }
        if homes.len() != queues.len() {
            return Err(Error::InvalidSetup(format!(
                "{} homes but {} treasure lists",
                homes.len(),
                queues.len()
            )));
        }

        let mut seen = BTreeSet::new();
        for &home in &homes {
            home.on_board()?;
            if !seen.insert(home) {
                return Err(Error::InvalidSetup(format!("home {home} is shared")));
            }
        }

        let mut on_board = BTreeSet::new();
        for treasure in tiles.iter().filter_map(Tile::treasure) {
            if !on_board.insert(treasure) {
                return Err(Error::InvalidSetup(format!(
                    "treasure {treasure} appears on two tiles"
                )));
            }
        }

        let mut board_homes = BTreeMap::new();
        let mut board_treasures = BTreeMap::new();
        for (i, (home, queue)) in homes.into_iter().zip(queues).enumerate() {
            let player = i as PlayerId + 1;
            tiles[home.index()].add_occupant(player);
            board_homes.insert(player, home);
            board_treasures.insert(player, VecDeque::from(queue));
        }

        let mut board = Self {
            tiles,
            valid_insertions: all_insertion_slots(),
            barred: None,
            locations: BTreeMap::new(),
            homes: board_homes,
            treasures: board_treasures,
            treasure_locations: BTreeMap::new(),
        };
        board.reindex();
        Ok(board)
    }

    /// Push `tile` in at the edge slot `at` and return the tile pushed out.
    ///
    /// Pawns standing on the ejected tile wrap around onto the inserted
    /// tile. The slot opposite `at` is barred for the next insertion and the
    /// previously barred slot becomes available again.
    ///
    /// # Errors
    /// [`Error::InvalidInsertion`] if `at` is not currently a valid slot and
    /// [`Error::OrientationUnset`] if `tile` has not been oriented. The board
    /// is left untouched in both cases.
    pub fn insert(&mut self, tile: Tile, at: Coordinate) -> Result<Tile> {
        if !self.valid_insertions.contains(&at) {
            return Err(Error::InvalidInsertion(at));
        }
        if tile.orientation().is_none() {
            return Err(Error::OrientationUnset);
        }

        let mut carried = tile;
        for cell in shift_line(at) {
            carried = std::mem::replace(&mut self.tiles[cell.index()], carried);
        }
        let mut ejected = carried;

        if ejected.has_occupants() {
            let pawns = ejected.take_occupants();
            self.tiles[at.index()].add_occupants(pawns);
        }

        let barred = at.opposite_slot();
        if let Some(previous) = self.barred.replace(barred) {
            self.valid_insertions.insert(previous);
        }
        self.valid_insertions.remove(&barred);

        self.reindex();
        Ok(ejected)
    }

    /// Move `player`'s pawn to `destination`, collecting the treasure there
    /// if it is the next one on the player's list.
    ///
    /// Moving to the current location is allowed and means "stay put".
    pub fn move_player(&mut self, player: PlayerId, destination: Coordinate) -> Result<()> {
        destination.on_board()?;
        let current = self.player_location(player)?;

        self.tiles[current.index()].remove_occupant(player);
        let tile = &mut self.tiles[destination.index()];
        tile.add_occupant(player);
        let found = tile.treasure();

        if let Some(queue) = self.treasures.get_mut(&player)
            && found.is_some()
            && queue.front().copied() == found
        {
            queue.pop_front();
        }
        self.locations.insert(player, destination);
        Ok(())
    }

    /// Rebuild the pawn and treasure lookups from the grid.
    fn reindex(&mut self) {
        self.locations.clear();
        self.treasure_locations.clear();
        for (i, tile) in self.tiles.iter().enumerate() {
            let c = Coordinate::from_index(i);
            for player in tile.occupants().iter() {
                self.locations.insert(player, c);
            }
            if let Some(treasure) = tile.treasure() {
                self.treasure_locations.insert(treasure, c);
            }
        }
    }

    /// Tile at `c`.
    ///
    /// # Panics
    /// If `c` is off the board.
    pub fn tile(&self, c: Coordinate) -> &Tile {
        assert!(c.is_on_board(), "{c} is off the board");
        &self.tiles[c.index()]
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&Tile> {
        if row >= BOARD_DIM || col >= BOARD_DIM {
            return None;
        }
        self.tiles.get(Coordinate::new(row, col).index())
    }

    pub fn valid_insertions(&self) -> &BTreeSet<Coordinate> {
        &self.valid_insertions
    }

    /// The slot that would undo the previous insertion, if any.
    pub fn barred(&self) -> Option<Coordinate> {
        self.barred
    }

    pub fn player_count(&self) -> usize {
        self.homes.len()
    }

    pub fn players(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.homes.keys().copied()
    }

    pub fn player_location(&self, player: PlayerId) -> Result<Coordinate> {
        self.locations
            .get(&player)
            .copied()
            .ok_or(Error::UnknownPlayer(player))
    }

    pub fn home(&self, player: PlayerId) -> Result<Coordinate> {
        self.homes
            .get(&player)
            .copied()
            .ok_or(Error::UnknownPlayer(player))
    }

    /// Treasures `player` still has to collect, next one first.
    pub fn treasure_queue(&self, player: PlayerId) -> Result<&VecDeque<Treasure>> {
        self.treasures
            .get(&player)
            .ok_or(Error::UnknownPlayer(player))
    }

    pub fn next_treasure(&self, player: PlayerId) -> Result<Option<Treasure>> {
        Ok(self.treasure_queue(player)?.front().copied())
    }

    /// Where the player's next treasure lies, or `None` when the list is
    /// empty or the treasure is on the extra tile.
    pub fn next_treasure_location(&self, player: PlayerId) -> Result<Option<Coordinate>> {
        Ok(self
            .next_treasure(player)?
            .and_then(|t| self.treasure_location(t)))
    }

    pub fn treasure_location(&self, treasure: Treasure) -> Option<Coordinate> {
        self.treasure_locations.get(&treasure).copied()
    }

    /// All treasures collected and the pawn is back home.
    pub fn has_finished(&self, player: PlayerId) -> Result<bool> {
        Ok(self.treasure_queue(player)?.is_empty()
            && self.player_location(player)? == self.home(player)?)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_DIM {
            for col in 0..BOARD_DIM {
                let tile = self.tile(Coordinate::new(row, col));
                let mark = match (tile.occupants().iter().next(), tile.treasure()) {
                    (Some(p), _) => char::from(b'0' + p),
                    (None, Some(_)) => '*',
                    (None, None) => ' ',
                };
                write!(f, "{}{mark} ", tile.glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::INSERTION_SLOTS;
    use crate::tile::{MazePathType, Orientation};

    fn t(id: u8) -> Treasure {
        Treasure::new(id).unwrap()
    }

    /// Column 1 carries treasures 0..=6 top to bottom and row 3 carries
    /// 7 + col on every other column, so shifted tiles can be told apart.
    fn sample_board() -> Board {
        let tiles = Coordinate::all()
            .map(|c| {
                let treasure = if c.col == 1 {
                    Some(t(c.row as u8))
                } else if c.row == 3 {
                    Some(t(7 + c.col as u8))
                } else {
                    None
                };
                Tile::with_orientation(MazePathType::T, Orientation::Deg0, treasure)
            })
            .collect();
        Board::new(
            tiles,
            vec![Coordinate::new(0, 0), Coordinate::new(6, 6)],
            vec![vec![t(3), t(5)], vec![t(10)]],
        )
        .unwrap()
    }

    fn spare(id: u8) -> Tile {
        Tile::with_orientation(MazePathType::I, Orientation::Deg0, Some(t(id)))
    }

    fn treasure_at(board: &Board, row: usize, col: usize) -> Option<u8> {
        board.get(row, col).and_then(Tile::treasure).map(Treasure::id)
    }

    #[test]
    fn test_new_board_state() {
        let board = sample_board();
        assert_eq!(board.valid_insertions().len(), INSERTION_SLOTS);
        assert_eq!(board.barred(), None);
        assert_eq!(board.player_count(), 2);
        assert_eq!(board.player_location(1), Ok(Coordinate::new(0, 0)));
        assert_eq!(board.home(2), Ok(Coordinate::new(6, 6)));
        assert_eq!(board.next_treasure_location(1), Ok(Some(Coordinate::new(3, 1))));
        assert_eq!(board.treasure_location(t(13)), Some(Coordinate::new(3, 6)));
        assert!(board.tile(Coordinate::new(6, 6)).has_occupant(2));
        assert_eq!(board.player_location(3), Err(Error::UnknownPlayer(3)));
    }

    #[test]
    fn test_insert_north_shifts_column_down() {
        let mut board = sample_board();
        let ejected = board.insert(spare(20), Coordinate::new(0, 1)).unwrap();

        assert_eq!(ejected.treasure().map(Treasure::id), Some(6));
        assert_eq!(treasure_at(&board, 0, 1), Some(20));
        for row in 1..BOARD_DIM {
            assert_eq!(treasure_at(&board, row, 1), Some(row as u8 - 1));
        }
        assert_eq!(board.treasure_location(t(6)), None);
        assert_eq!(board.treasure_location(t(20)), Some(Coordinate::new(0, 1)));
    }

    #[test]
    fn test_insert_south_shifts_column_up() {
        let mut board = sample_board();
        let ejected = board.insert(spare(20), Coordinate::new(6, 1)).unwrap();

        assert_eq!(ejected.treasure().map(Treasure::id), Some(0));
        assert_eq!(treasure_at(&board, 6, 1), Some(20));
        for row in 0..LAST {
            assert_eq!(treasure_at(&board, row, 1), Some(row as u8 + 1));
        }
    }

    #[test]
    fn test_insert_west_and_east_shift_row() {
        let mut board = sample_board();
        let ejected = board.insert(spare(20), Coordinate::new(3, 0)).unwrap();
        assert_eq!(ejected.treasure().map(Treasure::id), Some(13));
        assert_eq!(treasure_at(&board, 3, 0), Some(20));
        assert_eq!(treasure_at(&board, 3, 1), Some(7));
        assert_eq!(treasure_at(&board, 3, 2), Some(3));
        assert_eq!(treasure_at(&board, 3, 6), Some(12));

        let mut board = sample_board();
        let ejected = board.insert(spare(20), Coordinate::new(3, 6)).unwrap();
        assert_eq!(ejected.treasure().map(Treasure::id), Some(7));
        assert_eq!(treasure_at(&board, 3, 6), Some(20));
        assert_eq!(treasure_at(&board, 3, 0), Some(3));
        assert_eq!(treasure_at(&board, 3, 5), Some(13));
    }

    #[test]
    fn test_barred_slot_rotates() {
        let mut board = sample_board();
        board.insert(spare(20), Coordinate::new(0, 1)).unwrap();
        assert_eq!(board.barred(), Some(Coordinate::new(6, 1)));
        assert_eq!(board.valid_insertions().len(), INSERTION_SLOTS - 1);
        assert!(board.valid_insertions().contains(&Coordinate::new(0, 1)));
        assert!(!board.valid_insertions().contains(&Coordinate::new(6, 1)));

        board.insert(spare(21), Coordinate::new(5, 0)).unwrap();
        assert_eq!(board.barred(), Some(Coordinate::new(5, 6)));
        assert!(board.valid_insertions().contains(&Coordinate::new(6, 1)));
        assert_eq!(board.valid_insertions().len(), INSERTION_SLOTS - 1);
    }

    #[test]
    fn test_invalid_insertion_leaves_board_untouched() {
        let mut board = sample_board();
        let before = board.clone();
        assert_eq!(
            board.insert(spare(20), Coordinate::new(0, 2)),
            Err(Error::InvalidInsertion(Coordinate::new(0, 2)))
        );
        assert_eq!(board, before);

        board.insert(spare(20), Coordinate::new(1, 6)).unwrap();
        let before = board.clone();
        assert_eq!(
            board.insert(spare(21), Coordinate::new(1, 0)),
            Err(Error::InvalidInsertion(Coordinate::new(1, 0)))
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_unoriented_tile_is_rejected() {
        let mut board = sample_board();
        let before = board.clone();
        let tile = Tile::new(MazePathType::L, None);
        assert_eq!(board.insert(tile, Coordinate::new(0, 3)), Err(Error::OrientationUnset));
        assert_eq!(board, before);
    }

    #[test]
    fn test_ejected_pawn_wraps_to_inserted_tile() {
        let mut board = sample_board();
        // player 2 walks onto the South end of column 5
        board.move_player(2, Coordinate::new(6, 5)).unwrap();

        let ejected = board.insert(spare(20), Coordinate::new(0, 5)).unwrap();
        assert!(!ejected.has_occupants());
        assert!(board.tile(Coordinate::new(0, 5)).has_occupant(2));
        assert_eq!(board.player_location(2), Ok(Coordinate::new(0, 5)));
    }

    #[test]
    fn test_pawns_ride_along_with_their_tile() {
        let mut board = sample_board();
        board.move_player(1, Coordinate::new(2, 3)).unwrap();
        board.insert(spare(20), Coordinate::new(0, 3)).unwrap();
        assert_eq!(board.player_location(1), Ok(Coordinate::new(3, 3)));
    }

    #[test]
    fn test_corners_never_move() {
        let mut board = sample_board();
        for slot in [(0, 1), (1, 0), (5, 6), (6, 5)] {
            board.insert(spare(20), Coordinate::new(slot.0, slot.1)).unwrap();
        }
        assert_eq!(board.player_location(1), Ok(Coordinate::new(0, 0)));
        assert_eq!(board.player_location(2), Ok(Coordinate::new(6, 6)));
    }

    #[test]
    fn test_move_player_collects_next_treasure_only() {
        let mut board = sample_board();

        // treasure 5 is second on player 1's list
        board.move_player(1, Coordinate::new(5, 1)).unwrap();
        assert_eq!(board.treasure_queue(1).unwrap().len(), 2);

        board.move_player(1, Coordinate::new(3, 1)).unwrap();
        assert_eq!(board.next_treasure(1), Ok(Some(t(5))));
        assert!(!board.tile(Coordinate::new(5, 1)).has_occupant(1));
        assert!(board.tile(Coordinate::new(3, 1)).has_occupant(1));

        board.move_player(1, Coordinate::new(3, 1)).unwrap();
        assert_eq!(board.treasure_queue(1).unwrap().len(), 1);
    }

    #[test]
    fn test_has_finished() {
        let mut board = sample_board();
        assert_eq!(board.has_finished(2), Ok(false));
        board.move_player(2, Coordinate::new(3, 3)).unwrap();
        assert_eq!(board.next_treasure(2), Ok(None));
        assert_eq!(board.has_finished(2), Ok(false));
        board.move_player(2, Coordinate::new(6, 6)).unwrap();
        assert_eq!(board.has_finished(2), Ok(true));
    }

    #[test]
    fn test_move_player_errors() {
        let mut board = sample_board();
        assert_eq!(
            board.move_player(4, Coordinate::new(1, 1)),
            Err(Error::UnknownPlayer(4))
        );
        assert!(matches!(
            board.move_player(1, Coordinate::new(7, 0)),
            Err(Error::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_clone_is_independent() {
        let original = sample_board();
        let snapshot = original.clone();

        let mut copy = original.clone();
        copy.insert(spare(20), Coordinate::new(0, 1)).unwrap();
        copy.move_player(1, Coordinate::new(4, 4)).unwrap();

        assert_eq!(original, snapshot);
        assert_ne!(copy, original);
    }

    #[test]
    fn test_new_rejects_bad_layouts() {
        let tile = || Tile::with_orientation(MazePathType::L, Orientation::Deg0, None);
        let home = vec![Coordinate::new(0, 0)];

        let short = vec![tile(); 10];
        assert!(matches!(
            Board::new(short, home.clone(), vec![vec![]]),
            Err(Error::InvalidSetup(_))
        ));

        let mut unoriented = vec![tile(); CELL_COUNT];
        unoriented[5] = Tile::new(MazePathType::L, None);
        assert!(matches!(
            Board::new(unoriented, home.clone(), vec![vec![]]),
            Err(Error::InvalidSetup(_))
        ));

        let mut doubled = vec![tile(); CELL_COUNT];
        doubled[1] = Tile::with_orientation(MazePathType::L, Orientation::Deg0, Some(t(2)));
        doubled[2] = Tile::with_orientation(MazePathType::L, Orientation::Deg0, Some(t(2)));
        assert!(matches!(
            Board::new(doubled, home.clone(), vec![vec![]]),
            Err(Error::InvalidSetup(_))
        ));

        assert!(matches!(
            Board::new(vec![tile(); CELL_COUNT], vec![home[0], home[0]], vec![vec![], vec![]]),
            Err(Error::InvalidSetup(_))
        ));
        assert!(matches!(
            Board::new(vec![tile(); CELL_COUNT], home, vec![]),
            Err(Error::InvalidSetup(_))
        ));
    }

    #[test]
    fn test_coordinate_helpers() {
        let c = Coordinate::new(0, 3);
        assert!(c.is_insertion_slot());
        assert_eq!(c.opposite_slot(), Coordinate::new(6, 3));
        assert_eq!(Coordinate::new(5, 6).opposite_slot(), Coordinate::new(5, 0));
        assert!(!Coordinate::new(0, 0).is_insertion_slot());
        assert!(!Coordinate::new(3, 3).is_insertion_slot());
        assert_eq!(c.step(Direction::North), None);
        assert_eq!(c.step(Direction::South), Some(Coordinate::new(1, 3)));
        assert_eq!(c.neighbors().count(), 3);
        assert_eq!(Coordinate::new(1, 2).manhattan(Coordinate::new(4, 0)), 5);
        assert_eq!(Coordinate::try_new(7, 0), Err(Error::OutOfBounds { row: 7, col: 0 }));
        assert_eq!(all_insertion_slots().len(), INSERTION_SLOTS);
        assert!(all_insertion_slots().iter().all(|c| c.is_insertion_slot()));
    }

    #[test]
    fn test_off_board_coordinate_does_not_alias() {
        let board = sample_board();
        let wide = Coordinate::new(0, 9);
        assert!(!wide.is_on_board());
        assert_eq!(wide.on_board(), Err(Error::OutOfBounds { row: 0, col: 9 }));
        assert!(board.get(0, 9).is_none());
        assert!(board.get(1, 2).is_some());
    }

    #[test]
    #[should_panic(expected = "off the board")]
    fn test_tile_panics_off_board() {
        sample_board().tile(Coordinate::new(0, 9));
    }

    #[test]
    fn test_display_marks_pawns_and_treasures() {
        let board = sample_board();
        let text = board.to_string();
        assert_eq!(text.lines().count(), BOARD_DIM);
        let first = text.lines().next().unwrap();
        assert!(first.starts_with("┤1"));
        assert!(first.contains("┤*"));
    }
}
