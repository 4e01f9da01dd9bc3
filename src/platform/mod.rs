//! Presentation adapters
//!
//! An adapter supplies the two capabilities the frame loop needs:
//! - an [`EventSource`] it can drain without blocking
//! - a [`Surface`](crate::renderer::Surface) to draw the frame on
//!
//! `terminal` drives a real terminal through crossterm; `headless` replays a
//! script and records draw calls.

pub mod headless;
pub mod terminal;

pub use headless::{DrawCommand, HeadlessPlatform};
pub use terminal::TerminalPlatform;

use std::fmt;
use std::io;

use crate::input::InputEvent;

/// Pollable queue of raw input events
pub trait EventSource {
    /// Next pending event, or `None` once the queue is empty.
    /// Never blocks.
    fn poll_event(&mut self) -> Option<InputEvent>;
}

/// The adapter's device or surface could not be created
#[derive(Debug)]
pub enum InitError {
    /// Raw mode, alternate screen or a terminal query failed
    Terminal(io::Error),
    /// The terminal cannot fit the play field at the configured cell size
    SurfaceTooSmall {
        needed: (u16, u16),
        actual: (u16, u16),
    },
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InitError::Terminal(err) => write!(f, "terminal setup failed: {err}"),
            InitError::SurfaceTooSmall { needed, actual } => write!(
                f,
                "terminal is {}x{} cells, need at least {}x{}",
                actual.0, actual.1, needed.0, needed.1
            ),
        }
    }
}

impl std::error::Error for InitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InitError::Terminal(err) => Some(err),
            InitError::SurfaceTooSmall { .. } => None,
        }
    }
}

impl From<io::Error> for InitError {
    fn from(err: io::Error) -> Self {
        InitError::Terminal(err)
    }
}
