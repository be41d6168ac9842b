use clap::Parser;
use macroquad::window::{Conf, next_frame};

use mazechase::{config::Config, game_app::App};

fn window_conf() -> Conf {
    Conf {
        window_title: "Maze Chase".to_string(),
        window_width: 600,
        window_height: 600,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let config = Config::parse();
    let mut app = App::new(&config);
    while app.tick() {
        next_frame().await;
    }
    if let Some(outcome) = app.outcome() {
        println!("{outcome}");
    }
}
