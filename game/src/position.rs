use std::ops::Add;

/// A grid position. Rows grow downwards, columns grow to the right.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    pub(crate) fn from_indices(row: usize, col: usize) -> Self {
        Self {
            row: row.try_into().unwrap(),
            col: col.try_into().unwrap(),
        }
    }

    /// `bounds` is `(height, width)`.
    pub(crate) fn in_bounds(self, bounds: (usize, usize)) -> bool {
        let (height, width) = bounds;
        let row_in_bounds = self.row >= 0 && (self.row as usize) < height;
        let col_in_bounds = self.col >= 0 && (self.col as usize) < width;
        row_in_bounds && col_in_bounds
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct CellDelta {
    pub(crate) drow: i32,
    pub(crate) dcol: i32,
}

impl CellDelta {
    pub(crate) const fn new(drow: i32, dcol: i32) -> Self {
        Self { drow, dcol }
    }
}

impl Add<CellDelta> for Cell {
    type Output = Cell;

    fn add(self, delta: CellDelta) -> Cell {
        Cell {
            row: self.row + delta.drow,
            col: self.col + delta.dcol,
        }
    }
}
