//! Simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Fixed per-frame step sizes, no wall-clock timing
//! - Seeded RNG only
//! - Stable iteration order (by slot / target index)
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{Hit, point_in_target, resolve_collisions};
pub use state::{Bullet, BulletPool, GameState, Player, Target};
pub use tick::{Direction, advance_bullets, advance_targets, fire, move_player, tick};
