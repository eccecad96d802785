//! Board builders shared by the integration test binaries.

use labyrinth_ai::board::{Board, Coordinate};
use labyrinth_ai::tile::{Tile, Treasure};

pub fn c(row: usize, col: usize) -> Coordinate {
    Coordinate::new(row, col)
}

/// Build a board from seven rows of path glyphs.
/// `treasures` lists `(row, col, id)`; player `i + 1` starts on `homes[i]`.
pub fn board_from_rows(
    rows: [&str; 7],
    treasures: &[(usize, usize, u8)],
    homes: &[(usize, usize)],
    queues: &[&[u8]],
) -> Board {
    let mut tiles = Vec::new();
    for (r, line) in rows.iter().enumerate() {
        for (col, glyph) in line.chars().enumerate() {
            let treasure = treasures
                .iter()
                .find(|&&(tr, tc, _)| (tr, tc) == (r, col))
                .map(|&(_, _, id)| Treasure::new(id).unwrap());
            tiles.push(Tile::from_glyph(glyph, treasure).unwrap());
        }
    }
    Board::new(
        tiles,
        homes.iter().map(|&(r, col)| c(r, col)).collect(),
        queues
            .iter()
            .map(|q| q.iter().map(|&id| Treasure::new(id).unwrap()).collect())
            .collect(),
    )
    .unwrap()
}
