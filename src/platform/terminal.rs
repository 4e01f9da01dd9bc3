//! Terminal adapter (crossterm)
//!
//! The play field is rasterized into a grid of cells; each terminal row shows
//! two cell rows using the upper half block glyph (foreground = top cell,
//! background = bottom cell). Escape, `q` and Ctrl-C stand in for closing
//! the window.

use std::io::{self, BufWriter, Stdout, Write};
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::{self, Color, Print};
use crossterm::{ExecutableCommand, QueueableCommand, cursor, terminal};
use glam::IVec2;

use super::{EventSource, InitError};
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::input::{InputEvent, Key};
use crate::renderer::{Raster, Rect, Rgba, Surface, colors};
use crate::settings::Settings;

pub const WINDOW_TITLE: &str = "Man with a Gun - Shooting Game";

const HALF_BLOCK: char = '▀';

pub struct TerminalPlatform {
    out: BufWriter<Stdout>,
    raster: Raster,
    frame_interval: Duration,
    last_present: Option<Instant>,
}

impl TerminalPlatform {
    /// Take over the terminal: raw mode, alternate screen, hidden cursor
    ///
    /// On failure nothing stays acquired: anything already switched on is
    /// switched back off before the error is returned.
    pub fn init(settings: &Settings) -> Result<Self, InitError> {
        let cell = IVec2::new(settings.cell_width as i32, settings.cell_height as i32);
        let raster = Raster::new(IVec2::new(SCREEN_WIDTH, SCREEN_HEIGHT), cell);

        let needed = terminal_size_for(raster.size());
        let actual = terminal::size()?;
        if actual.0 < needed.0 || actual.1 < needed.1 {
            return Err(InitError::SurfaceTooSmall { needed, actual });
        }

        terminal::enable_raw_mode()?;
        // From here on Drop restores the terminal, including on early return
        let mut platform = Self {
            out: BufWriter::new(io::stdout()),
            raster,
            frame_interval: settings.frame_interval(),
            last_present: None,
        };

        platform.out.queue(terminal::EnterAlternateScreen)?;
        platform.out.queue(cursor::Hide)?;
        platform.out.queue(terminal::SetTitle(WINDOW_TITLE))?;
        platform
            .out
            .queue(terminal::Clear(terminal::ClearType::All))?;
        platform.out.flush()?;

        log::info!(
            "Terminal surface ready: {}x{} cells for a {}x{} field",
            needed.0,
            needed.1,
            SCREEN_WIDTH,
            SCREEN_HEIGHT
        );
        Ok(platform)
    }

    fn draw(&mut self) -> io::Result<()> {
        let size = self.raster.size();
        let mut fg = None;
        let mut bg = None;

        for term_row in 0..(size.y + 1) / 2 {
            self.out.queue(cursor::MoveTo(0, term_row as u16))?;
            for col in 0..size.x {
                let top = self.raster.get(col, term_row * 2).unwrap_or(colors::BACKGROUND);
                let bottom = self
                    .raster
                    .get(col, term_row * 2 + 1)
                    .unwrap_or(colors::BACKGROUND);

                if fg != Some(top) {
                    self.out.queue(style::SetForegroundColor(to_color(top)))?;
                    fg = Some(top);
                }
                if bg != Some(bottom) {
                    self.out.queue(style::SetBackgroundColor(to_color(bottom)))?;
                    bg = Some(bottom);
                }
                self.out.queue(Print(HALF_BLOCK))?;
            }
        }

        self.out.queue(style::ResetColor)?;
        self.out.flush()
    }

    /// Hold the frame until the configured interval has passed
    fn pace(&mut self) {
        if let Some(last) = self.last_present {
            let elapsed = last.elapsed();
            if elapsed < self.frame_interval {
                std::thread::sleep(self.frame_interval - elapsed);
            }
        }
        self.last_present = Some(Instant::now());
    }
}

impl Drop for TerminalPlatform {
    fn drop(&mut self) {
        let _ = self.out.execute(style::ResetColor);
        let _ = self.out.execute(cursor::Show);
        let _ = self.out.execute(terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

impl EventSource for TerminalPlatform {
    fn poll_event(&mut self) -> Option<InputEvent> {
        match event::poll(Duration::ZERO) {
            Ok(true) => {}
            Ok(false) => return None,
            Err(err) => {
                log::warn!("Input poll failed: {}", err);
                return None;
            }
        }
        match event::read() {
            Ok(event) => Some(map_event(event)),
            Err(err) => {
                log::warn!("Input read failed: {}", err);
                None
            }
        }
    }
}

impl Surface for TerminalPlatform {
    fn clear(&mut self, color: Rgba) {
        self.raster.clear(color);
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        self.raster.fill_rect(rect, color);
    }

    fn fill_circle(&mut self, center: IVec2, radius: i32, color: Rgba) {
        self.raster.fill_circle(center, radius, color);
    }

    fn present(&mut self) {
        if let Err(err) = self.draw() {
            log::warn!("Present failed, frame dropped: {}", err);
        }
        self.pace();
    }
}

/// Terminal cells (columns, rows) needed to show a raster of `cells`
pub fn terminal_size_for(cells: IVec2) -> (u16, u16) {
    (cells.x as u16, ((cells.y + 1) / 2) as u16)
}

/// Terminal colors are opaque; alpha is dropped
fn to_color(color: Rgba) -> Color {
    Color::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}

/// Map a crossterm event to a raw game event
///
/// Key repeats count as presses; releases are ignored.
pub fn map_event(event: Event) -> InputEvent {
    let Event::Key(KeyEvent {
        code,
        modifiers,
        kind,
        ..
    }) = event
    else {
        return InputEvent::Other;
    };

    if kind == KeyEventKind::Release {
        return InputEvent::Other;
    }

    match code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => InputEvent::Quit,
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => InputEvent::Quit,
        KeyCode::Left => InputEvent::KeyDown(Key::Left),
        KeyCode::Right => InputEvent::KeyDown(Key::Right),
        KeyCode::Char(' ') => InputEvent::KeyDown(Key::Space),
        KeyCode::Char(c) => InputEvent::KeyDown(Key::Char(c)),
        _ => InputEvent::KeyDown(Key::Other),
    }
}
