//! Rendering module
//!
//! The game draws through the [`Surface`] capability so the simulation core
//! never depends on a concrete terminal or graphics library.

pub mod shapes;

pub use shapes::{Raster, Rect, Rgba};

use glam::IVec2;

use crate::consts::{BULLET_HEIGHT, BULLET_WIDTH, GUN_HEIGHT, GUN_WIDTH};
use crate::sim::GameState;

/// Drawing capability supplied by a presentation adapter
pub trait Surface {
    /// Fill the whole frame with one color
    fn clear(&mut self, color: Rgba);
    fn fill_rect(&mut self, rect: Rect, color: Rgba);
    fn fill_circle(&mut self, center: IVec2, radius: i32, color: Rgba);
    /// Make everything drawn since the last present visible
    fn present(&mut self);
}

/// Colors for game elements
pub mod colors {
    use super::Rgba;

    pub const BACKGROUND: Rgba = Rgba::opaque(0, 0, 0);
    pub const PLAYER: Rgba = Rgba::opaque(0, 0, 255);
    pub const GUN: Rgba = Rgba::opaque(0, 255, 0);
    pub const BULLET: Rgba = Rgba::opaque(255, 255, 0);
    pub const TARGET: Rgba = Rgba::opaque(255, 0, 0);
    pub const TARGET_HIT: Rgba = Rgba::opaque(100, 100, 100);
}

/// Issue the draw commands for one frame, then present it
///
/// Reads the state only. Inactive bullet slots are skipped; hit targets stay
/// on screen in their own color.
pub fn draw_frame(state: &GameState, surface: &mut impl Surface) {
    surface.clear(colors::BACKGROUND);

    let player = &state.player;
    surface.fill_rect(
        Rect::new(player.pos.x, player.pos.y, player.width, player.height),
        colors::PLAYER,
    );

    // Gun marker sits on top of the body, centered
    let gun = Rect::new(
        player.pos.x + player.width / 2 - GUN_WIDTH / 2,
        player.pos.y - GUN_HEIGHT,
        GUN_WIDTH,
        GUN_HEIGHT,
    );
    surface.fill_rect(gun, colors::GUN);

    for (_, bullet) in state.bullets.active() {
        surface.fill_rect(
            Rect::new(bullet.pos.x, bullet.pos.y, BULLET_WIDTH, BULLET_HEIGHT),
            colors::BULLET,
        );
    }

    for target in &state.targets {
        let color = if target.hit {
            colors::TARGET_HIT
        } else {
            colors::TARGET
        };
        surface.fill_circle(target.pos, target.radius, color);
    }

    surface.present();
}
