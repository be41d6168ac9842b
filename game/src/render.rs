use macroquad::prelude::*;

use crate::game::GameState;
use crate::grid::Tile;
use crate::position::Cell;

const PADDING: f32 = 4.0;
const HUD_HEIGHT: f32 = 36.0;
const HUD_FONT_SIZE: f32 = 24.0;

/// Drawing capability the game renders through, once per frame.
pub trait RenderSurface {
    /// Starts a frame for a grid of the given size.
    fn clear(&mut self, width: usize, height: usize);
    fn draw_wall(&mut self, cell: Cell);
    fn draw_pickup(&mut self, cell: Cell);
    fn draw_pursuer(&mut self, cell: Cell);
    fn draw_controlled_token(&mut self, cell: Cell);
    /// Finishes the frame with a status line.
    fn present(&mut self, hud: &str);
}

impl GameState {
    /// Grid in scan order, then pursuers in roster order, then the token on top.
    pub(crate) fn draw<S: RenderSurface>(&self, surface: &mut S) {
        surface.clear(self.grid.width(), self.grid.height());
        for (cell, tile) in self.grid.entries() {
            match tile {
                Tile::Wall => surface.draw_wall(cell),
                Tile::Pickup => surface.draw_pickup(cell),
                Tile::Open => {}
            }
        }
        for pursuer in &self.pursuers {
            surface.draw_pursuer(pursuer.cell);
        }
        surface.draw_controlled_token(self.token.cell);
        surface.present(&format!(
            "Level {}: {}  ({} left)",
            self.level_index() + 1,
            self.level().name,
            self.grid.pickup_count()
        ));
    }
}

/// Renders into the macroquad window, scaling the grid to fit below a HUD strip.
pub struct MacroquadSurface {
    cell: f32,
    offset_x: f32,
    offset_y: f32,
}

impl MacroquadSurface {
    pub(crate) fn new() -> Self {
        Self {
            cell: 0.0,
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }

    fn origin(&self, cell: Cell) -> (f32, f32) {
        (
            self.offset_x + cell.col as f32 * self.cell,
            self.offset_y + cell.row as f32 * self.cell,
        )
    }

    fn center(&self, cell: Cell) -> (f32, f32) {
        let (x, y) = self.origin(cell);
        (x + self.cell / 2.0, y + self.cell / 2.0)
    }
}

impl RenderSurface for MacroquadSurface {
    fn clear(&mut self, width: usize, height: usize) {
        clear_background(BLACK);

        let available_w = screen_width() - PADDING * 2.0;
        let available_h = screen_height() - HUD_HEIGHT - PADDING * 2.0;
        self.cell = (available_w / width.max(1) as f32).min(available_h / height.max(1) as f32);

        let grid_w = width as f32 * self.cell;
        self.offset_x = (screen_width() - grid_w) / 2.0;
        self.offset_y = HUD_HEIGHT + PADDING;
    }

    fn draw_wall(&mut self, cell: Cell) {
        let (x, y) = self.origin(cell);
        draw_rectangle(x, y, self.cell, self.cell, WHITE);
    }

    fn draw_pickup(&mut self, cell: Cell) {
        let (x, y) = self.center(cell);
        draw_circle(x, y, self.cell / 4.0, GREEN);
    }

    fn draw_pursuer(&mut self, cell: Cell) {
        let (x, y) = self.origin(cell);
        draw_rectangle(x, y, self.cell, self.cell, RED);
    }

    fn draw_controlled_token(&mut self, cell: Cell) {
        let (x, y) = self.center(cell);
        draw_circle(x, y, self.cell / 2.0, YELLOW);
    }

    fn present(&mut self, hud: &str) {
        draw_text(hud, PADDING * 2.0, HUD_HEIGHT - PADDING * 2.0, HUD_FONT_SIZE, LIGHTGRAY);
    }
}
