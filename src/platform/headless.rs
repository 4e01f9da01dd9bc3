//! Scripted adapter with no display
//!
//! Each presented frame consumes one batch of scripted events. Once the
//! script runs dry the adapter reports `Quit`, so a headless run always ends.

use std::collections::VecDeque;

use glam::IVec2;

use super::EventSource;
use crate::input::InputEvent;
use crate::renderer::{Rect, Rgba, Surface};

/// A recorded draw call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawCommand {
    Clear(Rgba),
    FillRect(Rect, Rgba),
    FillCircle { center: IVec2, radius: i32, color: Rgba },
    Present,
}

#[derive(Debug, Default)]
pub struct HeadlessPlatform {
    /// Event batches, one per frame
    script: VecDeque<Vec<InputEvent>>,
    /// Events still to deliver this frame
    pending: VecDeque<InputEvent>,
    /// Whether the current frame's batch has been loaded
    loaded: bool,
    commands: Vec<DrawCommand>,
    frames_presented: usize,
}

impl HeadlessPlatform {
    /// Adapter that replays `frames`, one batch per frame
    pub fn new(frames: impl IntoIterator<Item = Vec<InputEvent>>) -> Self {
        Self {
            script: frames.into_iter().collect(),
            ..Default::default()
        }
    }

    /// Queue another batch after the existing ones
    pub fn push_frame(&mut self, events: Vec<InputEvent>) {
        self.script.push_back(events);
    }

    pub fn frames_presented(&self) -> usize {
        self.frames_presented
    }

    /// Every draw call so far, frames separated by `Present`
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Draw calls of the most recently presented frame, `Present` excluded
    pub fn last_frame(&self) -> &[DrawCommand] {
        let Some(end) = self.commands.iter().rposition(|c| *c == DrawCommand::Present) else {
            return &[];
        };
        let start = self.commands[..end]
            .iter()
            .rposition(|c| *c == DrawCommand::Present)
            .map_or(0, |i| i + 1);
        &self.commands[start..end]
    }
}

impl EventSource for HeadlessPlatform {
    fn poll_event(&mut self) -> Option<InputEvent> {
        if !self.loaded {
            self.loaded = true;
            match self.script.pop_front() {
                Some(batch) => self.pending.extend(batch),
                None => {
                    log::debug!("Headless script exhausted, requesting quit");
                    self.pending.push_back(InputEvent::Quit);
                }
            }
        }
        self.pending.pop_front()
    }
}

impl Surface for HeadlessPlatform {
    fn clear(&mut self, color: Rgba) {
        self.commands.push(DrawCommand::Clear(color));
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        self.commands.push(DrawCommand::FillRect(rect, color));
    }

    fn fill_circle(&mut self, center: IVec2, radius: i32, color: Rgba) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            color,
        });
    }

    fn present(&mut self) {
        self.commands.push(DrawCommand::Present);
        self.frames_presented += 1;
        // Undelivered events of this frame are delivered ahead of the next batch
        self.loaded = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Key;
    use crate::renderer::{colors, draw_frame};
    use crate::sim::{GameState, Target, fire};

    #[test]
    fn test_events_delivered_per_frame() {
        let mut platform = HeadlessPlatform::new([
            vec![InputEvent::KeyDown(Key::Left), InputEvent::Other],
            vec![],
        ]);

        assert_eq!(platform.poll_event(), Some(InputEvent::KeyDown(Key::Left)));
        assert_eq!(platform.poll_event(), Some(InputEvent::Other));
        assert_eq!(platform.poll_event(), None);
        platform.present();

        assert_eq!(platform.poll_event(), None);
        platform.present();

        assert_eq!(platform.poll_event(), Some(InputEvent::Quit));
        assert_eq!(platform.poll_event(), None);
    }

    #[test]
    fn test_draw_frame_order_and_colors() {
        let mut state = GameState::with_targets(
            1,
            [Target::new(IVec2::new(100, 100), IVec2::ZERO); 5],
        );
        state.targets[1].hit = true;
        fire(&mut state);

        let mut platform = HeadlessPlatform::default();
        draw_frame(&state, &mut platform);

        let frame = platform.last_frame();
        assert_eq!(frame.len(), 1 + 2 + 1 + 5);
        assert_eq!(frame[0], DrawCommand::Clear(colors::BACKGROUND));
        assert_eq!(
            frame[1],
            DrawCommand::FillRect(Rect::new(385, 540, 30, 50), colors::PLAYER)
        );
        assert_eq!(
            frame[2],
            DrawCommand::FillRect(Rect::new(397, 530, 6, 10), colors::GUN)
        );
        assert_eq!(
            frame[3],
            DrawCommand::FillRect(Rect::new(398, 540, 5, 10), colors::BULLET)
        );
        assert_eq!(
            frame[4],
            DrawCommand::FillCircle {
                center: IVec2::new(100, 100),
                radius: 20,
                color: colors::TARGET
            }
        );
        assert!(matches!(
            frame[5],
            DrawCommand::FillCircle { color, .. } if color == colors::TARGET_HIT
        ));
        assert_eq!(platform.frames_presented(), 1);
        assert_eq!(platform.commands().last(), Some(&DrawCommand::Present));
    }

    #[test]
    fn test_inactive_bullets_not_drawn() {
        let mut state = GameState::new(9);
        fire(&mut state);
        state.bullets.get_mut(0).unwrap().active = false;

        let mut platform = HeadlessPlatform::default();
        draw_frame(&state, &mut platform);

        let rects = platform
            .last_frame()
            .iter()
            .filter(|c| matches!(c, DrawCommand::FillRect(..)))
            .count();
        assert_eq!(rects, 2);
    }

    #[test]
    fn test_last_frame_spans_only_latest() {
        let state = GameState::new(9);
        let mut platform = HeadlessPlatform::default();
        assert!(platform.last_frame().is_empty());

        draw_frame(&state, &mut platform);
        draw_frame(&state, &mut platform);
        assert_eq!(platform.last_frame().len(), 1 + 2 + 5);
        assert_eq!(platform.commands().len(), 2 * (1 + 2 + 5 + 1));
    }
}
