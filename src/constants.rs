//! Constants for board dimensions, player limits, and engine defaults.
//!
//! The board is a fixed 7x7 grid. Only the odd rows and columns can be
//! shifted, so the insertion slots sit at the odd offsets of each edge and
//! the four corners never move.

// =============================================================================
// Board Geometry
// =============================================================================

/// Board size (NxN).
pub const BOARD_DIM: usize = 7;

/// Index of the last row/column.
pub const LAST: usize = BOARD_DIM - 1;

/// Number of cells on the board.
pub const CELL_COUNT: usize = BOARD_DIM * BOARD_DIM;

/// Offsets along an edge where a tile can be pushed in.
pub const INSERTION_OFFSETS: [usize; 3] = [1, 3, 5];

/// Number of insertion slots around the board (three per edge).
pub const INSERTION_SLOTS: usize = INSERTION_OFFSETS.len() * 4;

// =============================================================================
// Players and Treasures
// =============================================================================

/// Maximum number of pawns in a game.
pub const MAX_PLAYERS: usize = 4;

/// Number of distinct treasures (wire ids 0..=23).
pub const TREASURE_COUNT: usize = 24;

/// Wire id for "no treasure".
pub const NO_TREASURE_ID: i32 = -1;

/// Highest accepted tile rotation id (0 = 0 degrees .. 3 = 270 degrees).
pub const MAX_ROTATION: u8 = 3;

// =============================================================================
// Engine Defaults
// =============================================================================

/// Default wall-clock budget for producing a move, in seconds.
pub const DEFAULT_MOVE_LIMIT_SECS: f64 = 5.0;

/// Default cap on the number of moves in a self-play game.
pub const DEFAULT_MOVE_COUNT_LIMIT: usize = 250;

/// Default number of seats in a self-play game.
pub const DEFAULT_PLAYERS: usize = 4;

/// Home corners, in seat order.
pub const HOME_CORNERS: [(usize, usize); MAX_PLAYERS] =
    [(0, 0), (0, LAST), (LAST, LAST), (LAST, 0)];
