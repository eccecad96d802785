//! Board fixtures for unit tests.

use crate::board::{Board, Coordinate};
use crate::constants::BOARD_DIM;
use crate::tile::{Tile, Treasure};

/// Build a board from seven rows of path glyphs (see [`Tile::glyph`]).
///
/// `treasures` places `(row, col, id)`, `homes[i]` seats player `i + 1` and
/// `queues[i]` is that player's treasure list.
pub(crate) fn board_from_rows(
    rows: [&str; BOARD_DIM],
    treasures: &[(usize, usize, u8)],
    homes: &[(usize, usize)],
    queues: &[&[u8]],
) -> Board {
    let tiles = rows
        .iter()
        .enumerate()
        .flat_map(|(r, line)| {
            line.chars().enumerate().map(move |(c, glyph)| {
                let treasure = treasures
                    .iter()
                    .find(|&&(tr, tc, _)| (tr, tc) == (r, c))
                    .map(|&(_, _, id)| Treasure::new(id).unwrap());
                Tile::from_glyph(glyph, treasure)
                    .unwrap_or_else(|| panic!("bad glyph {glyph:?} at ({r}, {c})"))
            })
        })
        .collect();
    Board::new(
        tiles,
        homes.iter().map(|&(r, c)| Coordinate::new(r, c)).collect(),
        queues
            .iter()
            .map(|q| q.iter().map(|&id| Treasure::new(id).unwrap()).collect())
            .collect(),
    )
    .unwrap()
}

/// Every tile a vertical straight.
pub(crate) const COLUMNS: [&str; BOARD_DIM] = [
    "│││││││",
    "│││││││",
    "│││││││",
    "│││││││",
    "│││││││",
    "│││││││",
    "│││││││",
];
