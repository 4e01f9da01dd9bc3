//! Per-frame simulation steps
//!
//! Each step mutates the `GameState` in place. None of them can fail:
//! out-of-range moves are clamped and a fire with no free slot is dropped.

use super::collision::{Hit, resolve_collisions};
use super::state::GameState;
use crate::consts::*;

/// Horizontal direction for a player move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    fn sign(self) -> i32 {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
        }
    }
}

/// Shift the player one step, clamped to the field
pub fn move_player(state: &mut GameState, dir: Direction) {
    let player = &mut state.player;
    player.pos.x = (player.pos.x + dir.sign() * PLAYER_STEP).clamp(0, player.max_x());
}

/// Fire a bullet from the player's muzzle
///
/// Returns the claimed slot, or `None` if all slots are in flight.
pub fn fire(state: &mut GameState) -> Option<usize> {
    let muzzle = state.player.muzzle();
    let slot = state.bullets.spawn(muzzle, BULLET_SPEED);
    match slot {
        Some(index) => log::trace!("Bullet {} fired from ({}, {})", index, muzzle.x, muzzle.y),
        None => log::trace!("Bullet pool exhausted, fire dropped"),
    }
    slot
}

/// Move active bullets upward, retiring any that leave the top edge
pub fn advance_bullets(state: &mut GameState) {
    for (_, bullet) in state.bullets.active_mut() {
        bullet.pos.y -= bullet.speed;
        if bullet.pos.y < 0 {
            bullet.active = false;
        }
    }
}

/// Move unhit targets and bounce them off the walls of the upper half
///
/// The bounce only flips the velocity; a target may sit past a wall for one
/// frame before heading back.
pub fn advance_targets(state: &mut GameState) {
    for target in state.targets.iter_mut().filter(|t| !t.hit) {
        target.pos += target.vel;

        if target.pos.x <= 0 || target.pos.x >= SCREEN_WIDTH - target.radius * 2 {
            target.vel.x = -target.vel.x;
        }
        if target.pos.y <= 0 || target.pos.y >= SCREEN_HEIGHT / 2 {
            target.vel.y = -target.vel.y;
        }
    }
}

/// Advance one frame after input has been applied: bullets, targets, collisions
pub fn tick(state: &mut GameState) -> Vec<Hit> {
    state.time_ticks += 1;
    advance_bullets(state);
    advance_targets(state);
    resolve_collisions(state)
}
