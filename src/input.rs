//! Input translation
//!
//! Adapters deliver raw [`InputEvent`]s; the frame loop turns each one into a
//! [`Command`] and applies it before the frame is simulated.

use crate::sim::{Direction, GameState, fire, move_player};

/// Key identity as reported by a presentation adapter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Space,
    Char(char),
    Other,
}

/// A raw event pulled from an adapter's queue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Window closed (or the adapter's equivalent)
    Quit,
    /// A key press, including auto-repeat presses
    KeyDown(Key),
    /// Anything the game does not care about
    Other,
}

/// Command consumed by the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveLeft,
    MoveRight,
    Fire,
    Quit,
    NoOp,
}

impl From<InputEvent> for Command {
    fn from(event: InputEvent) -> Self {
        match event {
            InputEvent::Quit => Command::Quit,
            InputEvent::KeyDown(Key::Left) => Command::MoveLeft,
            InputEvent::KeyDown(Key::Right) => Command::MoveRight,
            InputEvent::KeyDown(Key::Space) => Command::Fire,
            InputEvent::KeyDown(_) | InputEvent::Other => Command::NoOp,
        }
    }
}

/// Apply a command to the game state
///
/// `Quit` is a loop-level concern and leaves the state untouched.
pub fn apply(state: &mut GameState, command: Command) {
    match command {
        Command::MoveLeft => move_player(state, Direction::Left),
        Command::MoveRight => move_player(state, Direction::Right),
        Command::Fire => {
            fire(state);
        }
        Command::Quit | Command::NoOp => {}
    }
}
