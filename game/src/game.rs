use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::{Config, PredictionMode};
use crate::direction::Heading;
use crate::grid::Grid;
use crate::levels::Level;
use crate::position::Cell;
use crate::search::Strategy;

mod predictor;
mod pursuer;
mod spawn;
mod token;

pub(crate) use pursuer::{Pursuer, Role};
pub(crate) use token::ControlledToken;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayState {
    Playing,
    GameOver,
    AllLevelsComplete,
}

/// Something that happened during a tick, in the order it happened.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum GameEvent {
    PickupConsumed(Cell),
    LevelCleared { level: usize },
    LevelStarted { level: usize },
    AllLevelsComplete,
    Caught,
}

/// Counts frame ticks for one class of actor and fires every `interval` ticks.
#[derive(Clone, Copy, Debug)]
pub(crate) struct MoveClock {
    elapsed: u32,
    interval: u32,
}

impl MoveClock {
    pub(crate) fn new(interval: u32) -> Self {
        Self {
            elapsed: 0,
            interval: interval.max(1),
        }
    }

    /// Advances one tick. Returns true (and restarts the count) when a move is due.
    pub(crate) fn tick(&mut self) -> bool {
        self.elapsed += 1;
        if self.elapsed >= self.interval {
            self.elapsed = 0;
            true
        } else {
            false
        }
    }
}

/// The whole game: level sequence, live grid, token, pursuers and move cadence.
pub(crate) struct GameState {
    levels: Vec<Level>,
    level_index: usize,
    /// Working copy of the current level's grid; pickups get consumed from it.
    pub(crate) grid: Grid,
    pub(crate) token: ControlledToken,
    pub(crate) pursuers: Vec<Pursuer>,
    token_clock: MoveClock,
    pursuer_clock: MoveClock,
    prediction: PredictionMode,
    search: Strategy,
    play_state: PlayState,
    rng: StdRng,
}

impl GameState {
    /// Starts the first level. Panics if `levels` is empty.
    pub(crate) fn new(levels: Vec<Level>, config: &Config) -> Self {
        assert!(!levels.is_empty(), "no levels to play");
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let cadence = config.cadence();
        let first = &levels[0];
        let mut state = Self {
            grid: first.grid.clone(),
            token: ControlledToken::new(first.spawn),
            pursuers: Vec::new(),
            levels,
            level_index: 0,
            token_clock: MoveClock::new(cadence.token_interval),
            pursuer_clock: MoveClock::new(cadence.pursuer_interval),
            prediction: config.prediction,
            search: config.search,
            play_state: PlayState::Playing,
            rng,
        };
        state.start_level(0);
        state
    }

    pub(crate) fn play_state(&self) -> PlayState {
        self.play_state
    }

    pub(crate) fn level_index(&self) -> usize {
        self.level_index
    }

    pub(crate) fn level(&self) -> &Level {
        &self.levels[self.level_index]
    }

    /// Sets the sticky heading used on the token's next move. Ignored once the game has ended.
    pub(crate) fn set_heading(&mut self, heading: Heading) {
        if self.play_state == PlayState::Playing {
            self.token.heading = Some(heading);
        }
    }

    /// Resets grid, token cell and pursuer roster for `index`. The heading carries over.
    fn start_level(&mut self, index: usize) {
        self.level_index = index;
        let level = &self.levels[index];
        self.grid = level.grid.clone();
        self.token.cell = level.spawn;
        self.pursuers = (0..level.pursuers)
            .map(|i| {
                let cell = spawn::spawn_cell(&self.grid, level.spawn, &mut self.rng);
                Pursuer::new(cell, Role::for_index(i), self.search)
            })
            .collect();
        log::info!(
            "Level {} ({}) started, pursuers at {:?}",
            index,
            level.name,
            self.pursuers.iter().map(|p| p.cell).collect::<Vec<_>>()
        );
    }

    fn move_pursuers(&mut self) {
        let target = self.token.cell;
        let predicted = predictor::predict(&self.grid, &self.token, self.prediction);
        for pursuer in &mut self.pursuers {
            let goal = match pursuer.role {
                Role::Primary => target,
                Role::Secondary if self.grid.neighbors(pursuer.cell).any(|n| n == predicted) => {
                    predicted
                }
                Role::Secondary => target,
            };
            pursuer.move_towards(&self.grid, goal);
        }
    }

    fn is_caught(&self) -> bool {
        self.pursuers.iter().any(|p| p.cell == self.token.cell)
    }

    /// Advances one frame tick. Does nothing once the game has ended.
    pub(crate) fn tick(&mut self) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if self.play_state != PlayState::Playing {
            return events;
        }

        if self.token_clock.tick()
            && let Some(cell) = self.token.step(&mut self.grid)
        {
            events.push(GameEvent::PickupConsumed(cell));
        }

        if self.pursuer_clock.tick() {
            self.move_pursuers();
        }

        if !self.grid.has_pickups() {
            events.push(GameEvent::LevelCleared {
                level: self.level_index,
            });
            let next = self.level_index + 1;
            if next < self.levels.len() {
                self.start_level(next);
                events.push(GameEvent::LevelStarted { level: next });
            } else {
                log::info!("All {} levels cleared", self.levels.len());
                self.play_state = PlayState::AllLevelsComplete;
                events.push(GameEvent::AllLevelsComplete);
            }
        }

        // Checked after the level transition, and wins over it.
        if self.is_caught() {
            log::info!("Caught at {:?}", self.token.cell);
            self.play_state = PlayState::GameOver;
            events.push(GameEvent::Caught);
        }

        events
    }
}
