use macroquad::prelude::*;

use crate::direction::Heading;

/// A discrete input event, polled once per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    KeyPress(Heading),
}

/// Non-blocking source of input events.
pub trait InputSource {
    /// Events since the previous poll, oldest first.
    fn poll(&mut self) -> Vec<InputEvent>;
}

/// The heading of the last key press among `events`.
pub(crate) fn last_heading(events: &[InputEvent]) -> Option<Heading> {
    events.iter().rev().find_map(|event| match *event {
        InputEvent::KeyPress(heading) => Some(heading),
        InputEvent::Quit => None,
    })
}

fn heading_for_key(key: KeyCode) -> Option<Heading> {
    match key {
        KeyCode::Up => Some(Heading::Up),
        KeyCode::Down => Some(Heading::Down),
        KeyCode::Left => Some(Heading::Left),
        KeyCode::Right => Some(Heading::Right),
        _ => None,
    }
}

/// Arrow keys steer; Escape or closing the window quits.
pub struct KeyboardInput;

impl KeyboardInput {
    pub(crate) fn new() -> Self {
        // Window close goes through `is_quit_requested` so the loop can stop on its own terms.
        prevent_quit();
        Self
    }
}

impl InputSource for KeyboardInput {
    fn poll(&mut self) -> Vec<InputEvent> {
        let mut events = Vec::new();

        // Only the most recent key matters for the sticky heading.
        if let Some(heading) = get_last_key_pressed().and_then(heading_for_key) {
            events.push(InputEvent::KeyPress(heading));
        }

        if is_quit_requested() || is_key_pressed(KeyCode::Escape) {
            events.push(InputEvent::Quit);
        }

        events
    }
}
