//! Man with a Gun - a small arcade shooting game
//!
//! Core modules:
//! - `sim`: Simulation (entity state, motion, collisions)
//! - `input`: Raw input events to simulation commands
//! - `game`: Frame loop driving input, simulation and rendering
//! - `renderer`: Draw list for a frame over an abstract `Surface`
//! - `platform`: Presentation adapters (terminal and headless)
//! - `settings`: Runtime configuration

pub mod game;
pub mod input;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::{Game, LoopState};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Play field dimensions (pixels)
    pub const SCREEN_WIDTH: i32 = 800;
    pub const SCREEN_HEIGHT: i32 = 600;

    /// Player body
    pub const PLAYER_WIDTH: i32 = 30;
    pub const PLAYER_HEIGHT: i32 = 50;
    /// Gap between the player's feet and the bottom of the field
    pub const PLAYER_BOTTOM_MARGIN: i32 = 10;
    /// Horizontal distance covered by one move command
    pub const PLAYER_STEP: i32 = 10;

    /// Gun marker drawn above the player
    pub const GUN_WIDTH: i32 = 6;
    pub const GUN_HEIGHT: i32 = 10;

    /// Bullets
    pub const BULLET_WIDTH: i32 = 5;
    pub const BULLET_HEIGHT: i32 = 10;
    /// Pixels travelled upward per frame
    pub const BULLET_SPEED: i32 = 5;
    pub const MAX_BULLETS: usize = 10;

    /// Targets
    pub const TARGET_RADIUS: i32 = 20;
    pub const MAX_TARGETS: usize = 5;
    pub const MAX_TARGET_SPEED: i32 = 1;
}
