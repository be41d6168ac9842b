use crate::grid::Grid;
use crate::position::Cell;
use crate::search::{Strategy, find_path};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Role {
    /// Always chases the controlled token's cell.
    Primary,
    /// Tries to cut the token off at its predicted cell first.
    Secondary,
}

impl Role {
    /// The first pursuer in a roster is primary, every other one secondary.
    pub(crate) fn for_index(index: usize) -> Self {
        if index == 0 {
            Role::Primary
        } else {
            Role::Secondary
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Pursuer {
    pub(crate) cell: Cell,
    pub(crate) role: Role,
    strategy: Strategy,
}

impl Pursuer {
    pub(crate) fn new(cell: Cell, role: Role, strategy: Strategy) -> Self {
        Self {
            cell,
            role,
            strategy,
        }
    }

    /// Takes one step along a path to `target`. Stays put when already there or when
    /// `target` cannot be reached.
    pub(crate) fn move_towards(&mut self, grid: &Grid, target: Cell) {
        let path = find_path(grid, self.cell, target, self.strategy);
        if let Some(&next) = path.get(1) {
            self.cell = next;
        }
    }
}
