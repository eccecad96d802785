//! Maze tiles: path shapes, orientations, treasures, and occupants.
//!
//! A tile's shape never changes. Its orientation is assigned when it is
//! placed on the board and reassigned every time it is inserted again as the
//! extra tile. Exits are never stored: they are looked up in [`EXITS`], a
//! table keyed by shape, orientation and compass direction.

use std::fmt;

use crate::board::PlayerId;
use crate::constants::{MAX_PLAYERS, NO_TREASURE_ID, TREASURE_COUNT};
use crate::error::{Error, Result};

/// A compass direction, in clockwise order starting from North.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// All directions in clockwise order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// The direction pointing the other way.
    pub fn opposite(self) -> Self {
        Self::ALL[(self as usize + 2) % 4]
    }

    /// The next direction clockwise (N -> E -> S -> W -> N).
    pub fn clockwise(self) -> Self {
        Self::ALL[(self as usize + 1) % 4]
    }

    /// Row and column step taken when moving one cell this way.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::East => (0, 1),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
        }
    }
}

/// Geometric shape of a tile's path.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MazePathType {
    /// Corner: two adjacent exits.
    L,
    /// Junction: three exits.
    T,
    /// Straight: two opposite exits.
    I,
}

impl MazePathType {
    pub const ALL: [MazePathType; 3] = [MazePathType::L, MazePathType::T, MazePathType::I];

    /// Convert a wire id (0 = L, 1 = T, 2 = I).
    pub fn from_id(id: i64) -> Result<Self> {
        usize::try_from(id)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or(Error::InvalidPathType(id))
    }

    pub fn id(self) -> u8 {
        self as u8
    }
}

/// Clockwise rotation of a tile.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Orientation {
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Orientation {
    /// All orientations in clockwise order.
    pub const ALL: [Orientation; 4] = [
        Orientation::Deg0,
        Orientation::Deg90,
        Orientation::Deg180,
        Orientation::Deg270,
    ];

    /// Convert a wire id (0 = 0 degrees .. 3 = 270 degrees).
    pub fn from_id(id: i64) -> Result<Self> {
        usize::try_from(id)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or(Error::InvalidOrientation(id))
    }

    pub fn id(self) -> u8 {
        self as u8
    }

    /// This orientation turned a further 90 degrees clockwise.
    pub fn rotated_clockwise(self) -> Self {
        Self::ALL[(self as usize + 1) % 4]
    }
}

/// One of the 24 treasures (wire ids 0..=23).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Treasure(u8);

impl Treasure {
    /// Build a treasure from its id, rejecting ids outside 0..=23.
    pub fn new(id: u8) -> Result<Self> {
        if (id as usize) < TREASURE_COUNT {
            Ok(Self(id))
        } else {
            Err(Error::InvalidTreasure(id as i64))
        }
    }

    /// Convert a wire id, where -1 means the tile carries no treasure.
    pub fn from_id(id: i64) -> Result<Option<Self>> {
        if id == NO_TREASURE_ID as i64 {
            return Ok(None);
        }
        match u8::try_from(id) {
            Ok(raw) => Self::new(raw).map(Some),
            Err(_) => Err(Error::InvalidTreasure(id)),
        }
    }

    pub fn id(self) -> u8 {
        self.0
    }

    /// Every treasure, in id order.
    pub fn all() -> impl Iterator<Item = Treasure> {
        (0..TREASURE_COUNT as u8).map(Treasure)
    }
}

impl fmt::Display for Treasure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0 + 1)
    }
}

/// Exit table indexed by `[shape][orientation][direction]`.
///
/// Direction order is N, E, S, W. Each row is the previous row rotated one
/// compass step clockwise.
const EXITS: [[[bool; 4]; 4]; 3] = [
    // L
    [
        [true, false, false, true], // N W
        [true, true, false, false], // N E
        [false, true, true, false], // E S
        [false, false, true, true], // S W
    ],
    // T
    [
        [true, false, true, true],  // N S W
        [true, true, false, true],  // N E W
        [true, true, true, false],  // N E S
        [false, true, true, true],  // E S W
    ],
    // I
    [
        [true, false, true, false], // N S
        [false, true, false, true], // E W
        [true, false, true, false], // N S
        [false, true, false, true], // E W
    ],
];

/// Whether a tile of `shape` turned to `orientation` opens toward `direction`.
#[inline]
pub fn has_exit(shape: MazePathType, orientation: Orientation, direction: Direction) -> bool {
    EXITS[shape as usize][orientation as usize][direction as usize]
}

/// Set of pawns standing on a tile, stored as one bit per player id.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Occupants(u8);

impl Occupants {
    /// Zero for ids outside 1..=4.
    fn bit(player: PlayerId) -> u8 {
        if (1..=MAX_PLAYERS as PlayerId).contains(&player) {
            1 << (player - 1)
        } else {
            0
        }
    }

    pub fn contains(self, player: PlayerId) -> bool {
        self.0 & Self::bit(player) != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Player ids in ascending order.
    pub fn iter(self) -> impl Iterator<Item = PlayerId> {
        (1..=MAX_PLAYERS as PlayerId).filter(move |&p| self.0 & (1 << (p - 1)) != 0)
    }

    fn insert(&mut self, player: PlayerId) {
        self.0 |= Self::bit(player);
    }

    fn remove(&mut self, player: PlayerId) {
        self.0 &= !Self::bit(player);
    }

    fn union(&mut self, other: Occupants) {
        self.0 |= other.0;
    }
}

/// A square maze tile.
///
/// Tiles are plain owned values. The board moves them between cells during
/// an insertion and never shares one between two cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tile {
    shape: MazePathType,
    orientation: Option<Orientation>,
    treasure: Option<Treasure>,
    occupants: Occupants,
}

impl Tile {
    /// A tile that has not been placed yet (orientation unset).
    pub fn new(shape: MazePathType, treasure: Option<Treasure>) -> Self {
        Self {
            shape,
            orientation: None,
            treasure,
            occupants: Occupants::default(),
        }
    }

    /// A tile already turned to `orientation`.
    pub fn with_orientation(
        shape: MazePathType,
        orientation: Orientation,
        treasure: Option<Treasure>,
    ) -> Self {
        Self {
            orientation: Some(orientation),
            ..Self::new(shape, treasure)
        }
    }

    /// Same tile with `player` standing on it.
    pub fn with_occupant(mut self, player: PlayerId) -> Self {
        self.add_occupant(player);
        self
    }

    pub fn shape(&self) -> MazePathType {
        self.shape
    }

    pub fn orientation(&self) -> Option<Orientation> {
        self.orientation
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = Some(orientation);
    }

    pub fn treasure(&self) -> Option<Treasure> {
        self.treasure
    }

    pub fn occupants(&self) -> Occupants {
        self.occupants
    }

    pub fn has_occupants(&self) -> bool {
        !self.occupants.is_empty()
    }

    pub fn has_occupant(&self, player: PlayerId) -> bool {
        self.occupants.contains(player)
    }

    pub fn add_occupant(&mut self, player: PlayerId) {
        self.occupants.insert(player);
    }

    pub fn add_occupants(&mut self, occupants: Occupants) {
        self.occupants.union(occupants);
    }

    pub fn remove_occupant(&mut self, player: PlayerId) {
        self.occupants.remove(player);
    }

    pub fn clear_occupants(&mut self) {
        self.occupants = Occupants::default();
    }

    /// Remove every pawn from this tile and hand them back.
    pub fn take_occupants(&mut self) -> Occupants {
        std::mem::take(&mut self.occupants)
    }

    /// Whether the tile opens toward `direction`.
    ///
    /// # Errors
    /// [`Error::OrientationUnset`] if the tile has never been oriented.
    pub fn has_exit(&self, direction: Direction) -> Result<bool> {
        let orientation = self.orientation.ok_or(Error::OrientationUnset)?;
        Ok(has_exit(self.shape, orientation, direction))
    }

    /// All open directions, clockwise from North.
    pub fn exits(&self) -> Result<Vec<Direction>> {
        let orientation = self.orientation.ok_or(Error::OrientationUnset)?;
        Ok(Direction::ALL
            .into_iter()
            .filter(|&d| has_exit(self.shape, orientation, d))
            .collect())
    }

    /// Oriented tile drawn as `glyph` (the inverse of [`Tile::glyph`]).
    ///
    /// Straight tiles come back at 0 or 90 degrees.
    pub fn from_glyph(glyph: char, treasure: Option<Treasure>) -> Option<Self> {
        MazePathType::ALL
            .into_iter()
            .flat_map(|shape| Orientation::ALL.map(|o| Tile::with_orientation(shape, o, treasure)))
            .find(|tile| tile.glyph() == glyph)
    }

    /// Box-drawing character for the path, `?` while unoriented.
    pub fn glyph(&self) -> char {
        let Some(orientation) = self.orientation else {
            return '?';
        };
        let open = |d| has_exit(self.shape, orientation, d);
        match (
            open(Direction::North),
            open(Direction::East),
            open(Direction::South),
            open(Direction::West),
        ) {
            (true, false, true, false) => '│',
            (false, true, false, true) => '─',
            (true, true, false, false) => '└',
            (false, true, true, false) => '┌',
            (false, false, true, true) => '┐',
            (true, false, false, true) => '┘',
            (true, true, true, false) => '├',
            (true, false, true, true) => '┤',
            (true, true, false, true) => '┴',
            (false, true, true, true) => '┬',
            _ => '?',
        }
    }
}
