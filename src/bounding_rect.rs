//! Bounding rectangles of drawn content.

use crate::basics::RectI;
use crate::color::Rgb8;
use crate::pixfmt_rgba::{PixelBuffer, PixelFormat};

/// Smallest inclusive rectangle holding every pixel that differs from the
/// opaque `background`; `None` for a blank image.
pub fn content_bounds(buf: &PixelBuffer, background: Rgb8) -> Option<RectI> {
    let bg = background.opaque();
    let bg = [bg.r, bg.g, bg.b, bg.a];
    let mut bounds: Option<RectI> = None;
    for y in 0..buf.height() {
        for (x, px) in buf.row(y).chunks_exact(4).enumerate() {
            if px != &bg[..] {
                let (x, y) = (x as i32, y as i32);
                match bounds.as_mut() {
                    Some(r) => r.add_point(x, y),
                    None => bounds = Some(RectI::new(x, y, x, y)),
                }
            }
        }
    }
    bounds
}
