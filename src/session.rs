//! Drawing session: process-wide configuration owned by the entry point.
//!
//! The session fixes the pen color mode before the first canvas is opened.
//! [`DrawingSession::ensure_color_mode`] may be called any number of times;
//! only the first call switches the mode.

use once_cell::sync::OnceCell;

use crate::color::ColorMode;
use crate::pen::Canvas;

/// Logical canvas width used by both drivers.
pub const CANVAS_WIDTH: u32 = 1000;
/// Logical canvas height used by both drivers.
pub const CANVAS_HEIGHT: u32 = 700;
/// Color mode every session establishes.
pub const SESSION_COLOR_MODE: ColorMode = ColorMode::Byte;

/// Process-wide drawing configuration.
#[derive(Debug)]
pub struct DrawingSession {
    width: u32,
    height: u32,
    color_mode: OnceCell<ColorMode>,
}

impl DrawingSession {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            color_mode: OnceCell::new(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Establish the 0–255 color mode; later calls return the stored mode.
    pub fn ensure_color_mode(&self) -> ColorMode {
        *self.color_mode.get_or_init(|| {
            log::debug!("color mode set to {SESSION_COLOR_MODE:?}");
            SESSION_COLOR_MODE
        })
    }

    /// The mode, if it has been established.
    pub fn color_mode(&self) -> Option<ColorMode> {
        self.color_mode.get().copied()
    }

    /// A fresh canvas; establishes the color mode first.
    pub fn open_canvas(&self) -> Canvas {
        let mode = self.ensure_color_mode();
        Canvas::new(self.width, self.height, mode)
    }
}

impl Default for DrawingSession {
    fn default() -> Self {
        Self::new(CANVAS_WIDTH, CANVAS_HEIGHT)
    }
}
