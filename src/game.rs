//! Frame loop
//!
//! One iteration: drain input (applying each command as it arrives), advance
//! bullets and targets, resolve collisions, render. A quit request ends the
//! loop after the iteration it arrived in.

use crate::input::{self, Command};
use crate::platform::EventSource;
use crate::renderer::{Surface, draw_frame};
use crate::sim::{GameState, Hit, tick};

/// Loop state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    /// Terminal
    Quit,
}

/// Game instance holding all simulation state
#[derive(Debug)]
pub struct Game {
    pub state: GameState,
    loop_state: LoopState,
}

impl Game {
    pub fn new(seed: u64) -> Self {
        Self::from_state(GameState::new(seed))
    }

    pub fn from_state(state: GameState) -> Self {
        Self {
            state,
            loop_state: LoopState::Running,
        }
    }

    pub fn loop_state(&self) -> LoopState {
        self.loop_state
    }

    pub fn is_running(&self) -> bool {
        self.loop_state == LoopState::Running
    }

    /// Drain every pending event, translating and applying each in order
    ///
    /// A `Quit` flips the loop state but the rest of the queue is still
    /// applied.
    pub fn handle_input(&mut self, events: &mut impl EventSource) {
        while let Some(event) = events.poll_event() {
            match Command::from(event) {
                Command::Quit => {
                    if self.loop_state == LoopState::Running {
                        log::info!("Quit requested at frame {}", self.state.time_ticks);
                    }
                    self.loop_state = LoopState::Quit;
                }
                command => input::apply(&mut self.state, command),
            }
        }
    }

    /// Run a single frame against an adapter
    ///
    /// Returns the hits scored this frame. Does nothing once the loop has
    /// quit.
    pub fn run_frame<P: EventSource + Surface>(&mut self, platform: &mut P) -> Vec<Hit> {
        if !self.is_running() {
            return Vec::new();
        }
        self.handle_input(&mut *platform);
        let hits = tick(&mut self.state);
        draw_frame(&self.state, &mut *platform);
        hits
    }

    /// Run frames until a quit request has been processed
    pub fn run<P: EventSource + Surface>(&mut self, platform: &mut P) {
        log::info!("Game started with seed {}", self.state.seed);
        while self.is_running() {
            self.run_frame(platform);
        }
        log::info!(
            "Game over after {} frames, {} of {} targets hit",
            self.state.time_ticks,
            self.state.targets.len() - self.state.targets_remaining(),
            self.state.targets.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{InputEvent, Key};
    use crate::platform::HeadlessPlatform;

    #[test]
    fn test_quit_finishes_current_frame() {
        let mut game = Game::new(1);
        let mut platform = HeadlessPlatform::new([vec![
            InputEvent::KeyDown(Key::Space),
            InputEvent::Quit,
            InputEvent::KeyDown(Key::Right),
        ]]);

        game.run(&mut platform);

        assert_eq!(game.loop_state(), LoopState::Quit);
        // Events after the quit still applied, frame still simulated and drawn
        assert_eq!(game.state.player.pos.x, 395);
        assert_eq!(game.state.time_ticks, 1);
        assert_eq!(platform.frames_presented(), 1);
        let bullet = game.state.bullets.get(0).unwrap();
        assert!(bullet.active);
        assert_eq!(bullet.pos.y, 535);
    }

    #[test]
    fn test_frame_without_input() {
        let mut game = Game::new(1);
        let mut platform = HeadlessPlatform::new([vec![]]);

        game.run_frame(&mut platform);
        assert!(game.is_running());
        assert_eq!(game.state.time_ticks, 1);
        assert_eq!(platform.frames_presented(), 1);
    }

    #[test]
    fn test_no_frames_after_quit() {
        let mut game = Game::new(1);
        let mut platform = HeadlessPlatform::new([vec![InputEvent::Quit]]);

        game.run_frame(&mut platform);
        assert!(!game.is_running());

        let hits = game.run_frame(&mut platform);
        assert!(hits.is_empty());
        assert_eq!(game.state.time_ticks, 1);
        assert_eq!(platform.frames_presented(), 1);
    }

    #[test]
    fn test_run_ends_when_script_runs_out() {
        let mut game = Game::new(1);
        let mut platform = HeadlessPlatform::new(vec![vec![]; 4]);

        game.run(&mut platform);

        // Four scripted frames plus the one that received the synthetic quit
        assert_eq!(platform.frames_presented(), 5);
        assert_eq!(game.state.time_ticks, 5);
    }
}
