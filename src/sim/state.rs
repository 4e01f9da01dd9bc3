//! Game state and core simulation types
//!
//! Everything the frame loop mutates lives in [`GameState`]. Entities are
//! plain data; behaviour lives in `tick` and `collision`.

use glam::IVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::*;

/// The player's shooter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// Top-left corner of the body
    pub pos: IVec2,
    pub width: i32,
    pub height: i32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            // Centered horizontally, resting just above the bottom edge
            pos: IVec2::new(
                SCREEN_WIDTH / 2 - PLAYER_WIDTH / 2,
                SCREEN_HEIGHT - PLAYER_HEIGHT - PLAYER_BOTTOM_MARGIN,
            ),
            width: PLAYER_WIDTH,
            height: PLAYER_HEIGHT,
        }
    }
}

impl Player {
    /// Rightmost x the player may occupy
    pub fn max_x(&self) -> i32 {
        SCREEN_WIDTH - self.width
    }

    /// Point a new bullet leaves from (centered on the body, at its top edge)
    pub fn muzzle(&self) -> IVec2 {
        IVec2::new(self.pos.x + self.width / 2 - BULLET_WIDTH / 2, self.pos.y)
    }
}

/// A single bullet slot
///
/// `pos` and `speed` are meaningless while `active` is false.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bullet {
    pub pos: IVec2,
    /// Pixels travelled upward per frame
    pub speed: i32,
    pub active: bool,
}

/// Fixed-capacity bullet storage with index-stable slots
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulletPool {
    slots: [Bullet; MAX_BULLETS],
}

impl Default for BulletPool {
    fn default() -> Self {
        Self {
            slots: [Bullet::default(); MAX_BULLETS],
        }
    }
}

impl BulletPool {
    /// Claim the first inactive slot for a bullet at `pos`.
    ///
    /// Returns the slot index, or `None` when every slot is in flight.
    pub fn spawn(&mut self, pos: IVec2, speed: i32) -> Option<usize> {
        let index = self.slots.iter().position(|b| !b.active)?;
        self.slots[index] = Bullet {
            pos,
            speed,
            active: true,
        };
        Some(index)
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|b| b.active).count()
    }

    pub fn is_full(&self) -> bool {
        self.active_count() == self.capacity()
    }

    pub fn get(&self, index: usize) -> Option<&Bullet> {
        self.slots.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Bullet> {
        self.slots.get_mut(index)
    }

    /// Active bullets with their slot index, in slot order
    pub fn active(&self) -> impl Iterator<Item = (usize, &Bullet)> {
        self.slots.iter().enumerate().filter(|(_, b)| b.active)
    }

    pub fn active_mut(&mut self) -> impl Iterator<Item = (usize, &mut Bullet)> {
        self.slots.iter_mut().enumerate().filter(|(_, b)| b.active)
    }
}

/// A bouncing circular target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Target {
    /// Circle center
    pub pos: IVec2,
    /// Pixels per frame on each axis
    pub vel: IVec2,
    pub radius: i32,
    /// Frozen in place once set
    pub hit: bool,
}

impl Target {
    pub fn new(pos: IVec2, vel: IVec2) -> Self {
        Self {
            pos,
            vel,
            radius: TARGET_RADIUS,
            hit: false,
        }
    }

    /// Spawn somewhere in the upper half of the field.
    ///
    /// Velocity components come out as `random % MAX_TARGET_SPEED + 1`, which
    /// with a max speed of 1 always starts the target moving right and down.
    pub fn random(rng: &mut impl Rng) -> Self {
        let x = rng.random_range(0..SCREEN_WIDTH - TARGET_RADIUS * 2) + TARGET_RADIUS;
        let y = rng.random_range(0..SCREEN_HEIGHT / 2);
        let speed_x = rng.random_range(0..MAX_TARGET_SPEED) + 1;
        let speed_y = rng.random_range(0..MAX_TARGET_SPEED) + 1;
        Self::new(IVec2::new(x, y), IVec2::new(speed_x, speed_y))
    }
}

/// Complete simulation context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// Seed the targets were generated from
    pub seed: u64,
    /// Frames simulated so far
    pub time_ticks: u64,
    pub player: Player,
    pub bullets: BulletPool,
    /// Fixed set, index order is collision priority
    pub targets: [Target; MAX_TARGETS],
}

impl GameState {
    /// Create a new game with targets generated from `seed`
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let targets: [Target; MAX_TARGETS] = std::array::from_fn(|_| Target::random(&mut rng));
        for (i, target) in targets.iter().enumerate() {
            log::debug!(
                "Target {} spawned at ({}, {}) moving ({}, {})",
                i,
                target.pos.x,
                target.pos.y,
                target.vel.x,
                target.vel.y
            );
        }
        Self::with_targets(seed, targets)
    }

    /// Create a game with an explicit target layout
    pub fn with_targets(seed: u64, targets: [Target; MAX_TARGETS]) -> Self {
        Self {
            seed,
            time_ticks: 0,
            player: Player::default(),
            bullets: BulletPool::default(),
            targets,
        }
    }

    /// Number of targets not yet hit
    pub fn targets_remaining(&self) -> usize {
        self.targets.iter().filter(|t| !t.hit).count()
    }
}
