use crate::position::CellDelta;

/// A controlled-token heading. "No heading" is expressed as `Option<Heading>::None`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Heading {
    Up,
    Down,
    Left,
    Right,
}

impl Heading {
    pub(crate) fn delta(self) -> CellDelta {
        match self {
            Heading::Up => CellDelta::new(-1, 0),
            Heading::Down => CellDelta::new(1, 0),
            Heading::Left => CellDelta::new(0, -1),
            Heading::Right => CellDelta::new(0, 1),
        }
    }

    #[cfg(test)]
    pub(crate) fn all() -> [Self; 4] {
        [Self::Up, Self::Down, Self::Left, Self::Right]
    }
}

/// Neighbor exploration order for path search: right, down, left, up.
/// Path choice among equal-length routes depends on this order.
pub(crate) const SEARCH_ORDER: [CellDelta; 4] = [
    CellDelta::new(0, 1),
    CellDelta::new(1, 0),
    CellDelta::new(0, -1),
    CellDelta::new(-1, 0),
];
