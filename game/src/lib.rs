pub(crate) mod direction;
pub(crate) mod game;
pub(crate) mod grid;
pub(crate) mod input;
pub(crate) mod levels;
pub(crate) mod position;
pub(crate) mod render;
pub(crate) mod search;

pub mod config;
pub mod game_app;
