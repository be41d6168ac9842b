use std::sync::LazyLock;

use crate::grid::{Grid, LevelMetadata};
use crate::position::Cell;

include!(concat!(env!("OUT_DIR"), "/levels.rs"));

struct TextLevel {
    name: &'static str,
    csv: &'static str,
    json: &'static str,
}

/// Default roster size: one pursuer on the first two levels, two afterwards.
pub(crate) fn pursuer_count(level_index: usize) -> usize {
    if level_index < 2 { 1 } else { 2 }
}

/// An immutable level template. The game plays on a copy of `grid`.
#[derive(Clone, Debug)]
pub(crate) struct Level {
    pub(crate) name: String,
    pub(crate) grid: Grid,
    pub(crate) spawn: Cell,
    pub(crate) pursuers: usize,
}

impl Level {
    /// Builds a level from a CSV grid. Panics if no spawn cell is marked.
    pub(crate) fn from_csv(name: &str, csv: &str, pursuers: usize) -> Self {
        let (grid, spawn) = Grid::from_csv(csv);
        let spawn = spawn.unwrap_or_else(|| panic!("Level {name} has no spawn cell"));
        Self {
            name: name.to_string(),
            grid,
            spawn,
            pursuers,
        }
    }

    fn parse(index: usize, text: &TextLevel) -> Self {
        let metadata = LevelMetadata::parse(text.json);
        let pursuers = metadata.pursuers.unwrap_or_else(|| pursuer_count(index));
        let mut level = Self::from_csv(text.name, text.csv, pursuers);
        level.name = metadata.name;
        level
    }
}

static LEVELS: LazyLock<Vec<Level>> = LazyLock::new(|| {
    LEVEL_DATA
        .iter()
        .enumerate()
        .map(|(index, (name, csv, json))| Level::parse(index, &TextLevel { name, csv, json }))
        .collect()
});

/// The levels shipped with the game, in play order.
pub(crate) fn builtin() -> Vec<Level> {
    LEVELS.clone()
}
