use crate::direction::Heading;
use crate::grid::Grid;
use crate::position::Cell;

/// The player-steered token. `heading` is sticky: it keeps applying until changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct ControlledToken {
    pub(crate) cell: Cell,
    pub(crate) heading: Option<Heading>,
}

impl ControlledToken {
    pub(crate) fn new(cell: Cell) -> Self {
        Self { cell, heading: None }
    }

    /// Moves one cell along the heading unless a wall or the grid edge is in the way.
    /// Returns the cell whose pickup was consumed, if any.
    pub(crate) fn step(&mut self, grid: &mut Grid) -> Option<Cell> {
        let heading = self.heading?;
        let destination = self.cell + heading.delta();
        if !grid.is_walkable(destination) {
            return None;
        }
        self.cell = destination;
        grid.consume_pickup(destination).then_some(destination)
    }
}
