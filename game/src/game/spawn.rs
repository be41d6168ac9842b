use rand::Rng;
use rand::seq::IndexedRandom;

use crate::grid::{Grid, Tile};
use crate::position::Cell;

/// Used when a grid has no walkable cell other than the token's spawn.
pub(crate) const FALLBACK_SPAWN: Cell = Cell::new(1, 1);

/// Uniform choice among walkable cells other than `exclude`.
pub(crate) fn spawn_cell<R: Rng + ?Sized>(grid: &Grid, exclude: Cell, rng: &mut R) -> Cell {
    let candidates: Vec<Cell> = grid
        .find_tiles(Tile::is_walkable)
        .filter(|&cell| cell != exclude)
        .collect();
    match candidates.choose(rng) {
        Some(&cell) => cell,
        None => {
            log::warn!("No free cell to spawn a pursuer, using {FALLBACK_SPAWN:?}");
            FALLBACK_SPAWN
        }
    }
}
