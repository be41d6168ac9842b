use crate::config::PredictionMode;
use crate::direction::Heading;
use crate::grid::Grid;
use crate::position::{Cell, CellDelta};

use super::ControlledToken;

/// How many cells ahead secondary pursuers aim.
const LOOKAHEAD: i32 = 1;

/// Where a secondary pursuer expects the token to be after its next move.
/// Falls back to the token's current cell when the projection hits a wall.
pub(crate) fn predict(grid: &Grid, token: &ControlledToken, mode: PredictionMode) -> Cell {
    project(grid, token.cell, token.heading, LOOKAHEAD, mode)
}

fn project(
    grid: &Grid,
    from: Cell,
    heading: Option<Heading>,
    steps: i32,
    mode: PredictionMode,
) -> Cell {
    let delta = heading.map_or(CellDelta::new(0, 0), Heading::delta);
    match mode {
        PredictionMode::Parity => project_swapped(grid, from, delta, steps),
        PredictionMode::Corrected => project_natural(grid, from, delta, steps),
    }
}

fn clamp_index(value: i32, len: usize) -> i32 {
    value.min(len as i32 - 1).max(0)
}

fn project_natural(grid: &Grid, from: Cell, delta: CellDelta, steps: i32) -> Cell {
    let projected = Cell::new(
        clamp_index(from.row + delta.drow * steps, grid.height()),
        clamp_index(from.col + delta.dcol * steps, grid.width()),
    );
    if grid.is_walkable(projected) {
        projected
    } else {
        from
    }
}

/// Vertical headings shift the column and horizontal ones the row. The first coordinate is
/// then clamped against the width, the second against the height, and the wall check reads
/// the transposed cell.
fn project_swapped(grid: &Grid, from: Cell, delta: CellDelta, steps: i32) -> Cell {
    let first = clamp_index(from.row + delta.dcol * steps, grid.width());
    let second = clamp_index(from.col + delta.drow * steps, grid.height());
    if grid.is_walkable(Cell::new(second, first)) {
        Cell::new(first, second)
    } else {
        from
    }
}
