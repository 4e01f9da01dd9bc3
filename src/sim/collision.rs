//! Bullet/target collision detection and response
//!
//! A bullet is treated as a single point (its reference corner) and a target
//! as a circle. The overlap test compares squared distances so it stays in
//! exact integer arithmetic.

use glam::IVec2;

use super::state::{GameState, Target};

/// A bullet that struck a target this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    /// Bullet pool slot
    pub bullet: usize,
    /// Index into `GameState::targets`
    pub target: usize,
}

/// Check whether a point lies inside (or on the rim of) a target
#[inline]
pub fn point_in_target(point: IVec2, target: &Target) -> bool {
    (point - target.pos).length_squared() <= target.radius * target.radius
}

/// Resolve every active bullet against every unhit target
///
/// Bullets are scanned in slot order and targets in index order. The first
/// target a bullet overlaps is marked hit and the bullet is retired on the
/// spot, so a bullet never takes down more than one target.
pub fn resolve_collisions(state: &mut GameState) -> Vec<Hit> {
    let mut hits = Vec::new();

    for (bullet_index, bullet) in state.bullets.active_mut() {
        let struck = state
            .targets
            .iter()
            .position(|t| !t.hit && point_in_target(bullet.pos, t));

        if let Some(target_index) = struck {
            state.targets[target_index].hit = true;
            bullet.active = false;
            log::info!("Bullet {} hit target {}", bullet_index, target_index);
            hits.push(Hit {
                bullet: bullet_index,
                target: target_index,
            });
        }
    }

    if !hits.is_empty() && state.targets_remaining() == 0 {
        log::info!("All targets down after {} frames", state.time_ticks);
    }

    hits
}
