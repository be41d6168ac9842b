use crate::config::Config;
use crate::game::{GameEvent, GameState, PlayState};
use crate::input::{InputEvent, InputSource, KeyboardInput, last_heading};
use crate::levels::{self, Level};
use crate::render::{MacroquadSurface, RenderSurface};

/// One line for the player about a level transition, if the event deserves one.
fn announce(event: GameEvent) -> Option<String> {
    match event {
        GameEvent::LevelCleared { level } => Some(format!("Level {} cleared!", level + 1)),
        GameEvent::LevelStarted { level } => Some(format!("Level {} begins.", level + 1)),
        GameEvent::PickupConsumed(_) | GameEvent::AllLevelsComplete | GameEvent::Caught => None,
    }
}

pub struct App<I = KeyboardInput, S = MacroquadSurface> {
    game: GameState,
    input: I,
    surface: S,
    /// Cleared by a quit request or the end of the game; checked at the top of each frame.
    running: bool,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self::with_parts(
            levels::builtin(),
            config,
            KeyboardInput::new(),
            MacroquadSurface::new(),
        )
    }
}

impl<I: InputSource, S: RenderSurface> App<I, S> {
    pub(crate) fn with_parts(levels: Vec<Level>, config: &Config, input: I, surface: S) -> Self {
        Self {
            game: GameState::new(levels, config),
            input,
            surface,
            running: true,
        }
    }

    /// Run one frame of the game loop. Returns false if the game should exit.
    pub fn tick(&mut self) -> bool {
        if !self.running {
            return false;
        }

        let inputs = self.input.poll();
        if inputs.contains(&InputEvent::Quit) {
            log::info!("Quit requested");
            self.running = false;
        }
        if let Some(heading) = last_heading(&inputs) {
            self.game.set_heading(heading);
        }

        for event in self.game.tick() {
            if let GameEvent::PickupConsumed(cell) = event {
                log::trace!("Pickup consumed at {cell:?}");
            }
            if let Some(message) = announce(event) {
                println!("{message}");
            }
        }

        self.game.draw(&mut self.surface);

        // Let the final frame be shown before stopping.
        if self.game.play_state() != PlayState::Playing {
            self.running = false;
        }
        true
    }

    /// Closing message once the game has ended; `None` if the player quit mid-game.
    pub fn outcome(&self) -> Option<&'static str> {
        match self.game.play_state() {
            PlayState::Playing => None,
            PlayState::GameOver => Some("Game over! A pursuer caught you."),
            PlayState::AllLevelsComplete => Some("You've cleared every level!"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;
    use crate::direction::Heading;
    use crate::position::Cell;
    use crate::render::tests::{Draw, RecordingSurface};

    /// Replays one batch of events per frame, then nothing.
    struct ScriptedInput(VecDeque<Vec<InputEvent>>);

    impl InputSource for ScriptedInput {
        fn poll(&mut self) -> Vec<InputEvent> {
            self.0.pop_front().unwrap_or_default()
        }
    }

    fn app(csv: &str, frames: Vec<Vec<InputEvent>>) -> App<ScriptedInput, RecordingSurface> {
        let config = Config {
            token_interval: 1,
            pursuer_interval: 1000,
            seed: Some(5),
            ..Config::default()
        };
        App::with_parts(
            vec![Level::from_csv("Test", csv, 0)],
            &config,
            ScriptedInput(frames.into()),
            RecordingSurface::default(),
        )
    }

    fn frames_presented(app: &App<ScriptedInput, RecordingSurface>) -> usize {
        app.surface
            .calls
            .iter()
            .filter(|c| matches!(c, Draw::Present(_)))
            .count()
    }

    #[test]
    fn quit_stops_at_the_next_frame() {
        let mut app = app("P,o,o", vec![vec![], vec![InputEvent::Quit]]);
        assert!(app.tick());
        assert!(app.tick());
        assert!(!app.tick());
        assert_eq!(frames_presented(&app), 2);
        assert_eq!(app.outcome(), None);
    }

    #[test]
    fn last_key_press_of_a_frame_steers() {
        let frames = vec![vec![
            InputEvent::KeyPress(Heading::Down),
            InputEvent::KeyPress(Heading::Right),
        ]];
        let mut app = app("P,o,o\no,o,o", frames);
        app.tick();
        assert_eq!(app.game.token.cell, Cell::new(0, 1));
        // Sticky: keeps going with no further input.
        app.tick();
        assert_eq!(app.game.token.cell, Cell::new(0, 2));
    }

    #[test]
    fn finishing_shows_the_last_frame_then_stops() {
        let mut app = app("P,o", vec![vec![InputEvent::KeyPress(Heading::Right)]]);
        assert!(app.tick());
        assert!(!app.tick());
        assert_eq!(frames_presented(&app), 1);
        assert_eq!(app.outcome(), Some("You've cleared every level!"));
    }

    #[test]
    fn only_level_transitions_are_announced() {
        assert_eq!(
            announce(GameEvent::LevelCleared { level: 0 }).as_deref(),
            Some("Level 1 cleared!")
        );
        assert_eq!(
            announce(GameEvent::LevelStarted { level: 1 }).as_deref(),
            Some("Level 2 begins.")
        );
        assert_eq!(announce(GameEvent::Caught), None);
        assert_eq!(announce(GameEvent::PickupConsumed(Cell::new(0, 0))), None);
    }
}
