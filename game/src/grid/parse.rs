use csv::ReaderBuilder;
use serde::Deserialize;

use crate::position::Cell;

use super::{Grid, Tile};

#[derive(Deserialize, Debug)]
pub(crate) struct LevelMetadata {
    pub(crate) name: String,
    /// Overrides the default pursuer count for this level.
    #[serde(default)]
    pub(crate) pursuers: Option<usize>,
}

impl LevelMetadata {
    pub(crate) fn parse(json_str: &str) -> Self {
        serde_json::from_str(json_str).expect("invalid level JSON")
    }
}

impl Grid {
    /// Parses a level grid, returning it with the controlled-token spawn cell if one is marked.
    ///
    /// `#` wall, `o` pickup, `.` open floor, `P` spawn (open floor).
    pub(crate) fn from_csv(csv_str: &str) -> (Self, Option<Cell>) {
        let mut tiles: Vec<Vec<Tile>> = Vec::new();
        let mut spawn: Option<Cell> = None;

        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(false)
            .from_reader(csv_str.as_bytes());

        for (row, result) in reader.records().enumerate() {
            let record = result.expect("invalid level CSV");
            let mut line = Vec::new();
            for (col, field) in record.iter().enumerate() {
                let tile = match field.trim() {
                    "#" => Tile::Wall,
                    "o" => Tile::Pickup,
                    "P" => {
                        spawn = Some(Cell::from_indices(row, col));
                        Tile::Open
                    }
                    _ => Tile::Open,
                };
                line.push(tile);
            }
            tiles.push(line);
        }

        (Grid::new(tiles), spawn)
    }
}
