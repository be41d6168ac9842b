use crate::direction::SEARCH_ORDER;
use crate::position::Cell;

mod parse;
pub(crate) use parse::LevelMetadata;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Tile {
    Wall,
    Open,
    Pickup,
}

impl Tile {
    pub(crate) fn is_walkable(self) -> bool {
        self != Tile::Wall
    }
}

/// Rectangular maze. Only `Pickup -> Open` ever changes after construction.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Grid {
    tiles: Vec<Vec<Tile>>,
    width: usize,
    height: usize,
}

impl Grid {
    pub(crate) fn new(tiles: Vec<Vec<Tile>>) -> Self {
        let height = tiles.len();
        let width = tiles.first().map(|r| r.len()).unwrap_or(0);
        for row in &tiles {
            assert_eq!(row.len(), width, "grid rows must all have the same length");
        }
        Self {
            tiles,
            width,
            height,
        }
    }

    pub(crate) fn width(&self) -> usize {
        self.width
    }

    pub(crate) fn height(&self) -> usize {
        self.height
    }

    /// `(height, width)`, matching `Cell::in_bounds`.
    pub(crate) fn bounds(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    /// Out-of-range cells read as walls.
    pub(crate) fn at(&self, cell: Cell) -> Tile {
        if cell.in_bounds(self.bounds()) {
            self.tiles[cell.row as usize][cell.col as usize]
        } else {
            Tile::Wall
        }
    }

    pub(crate) fn is_walkable(&self, cell: Cell) -> bool {
        self.at(cell).is_walkable()
    }

    /// Walkable in-range cells one step away from `cell`, in search order.
    /// `cell` itself does not need to be walkable or even in range.
    pub(crate) fn neighbors(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
        SEARCH_ORDER
            .into_iter()
            .map(move |delta| cell + delta)
            .filter(move |&n| self.is_walkable(n))
    }

    /// Turns a pickup into open floor. Returns whether anything was consumed.
    pub(crate) fn consume_pickup(&mut self, cell: Cell) -> bool {
        if self.at(cell) != Tile::Pickup {
            return false;
        }
        self.tiles[cell.row as usize][cell.col as usize] = Tile::Open;
        true
    }

    pub(crate) fn has_pickups(&self) -> bool {
        self.tiles.iter().flatten().any(|&t| t == Tile::Pickup)
    }

    pub(crate) fn pickup_count(&self) -> usize {
        self.tiles.iter().flatten().filter(|&&t| t == Tile::Pickup).count()
    }

    /// All cells in row-major scan order.
    pub(crate) fn entries(&self) -> impl Iterator<Item = (Cell, Tile)> + '_ {
        self.tiles.iter().enumerate().flat_map(move |(row, tiles)| {
            tiles
                .iter()
                .enumerate()
                .map(move |(col, &tile)| (Cell::from_indices(row, col), tile))
        })
    }

    pub(crate) fn find_tiles<F: FnMut(Tile) -> bool>(
        &self,
        mut f: F,
    ) -> impl Iterator<Item = Cell> + use<'_, F> {
        self.entries()
            .filter(move |&(_, tile)| f(tile))
            .map(|(cell, _)| cell)
    }
}
