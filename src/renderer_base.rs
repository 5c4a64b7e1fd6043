//! Renderer that clips to the pixel buffer before blending.

use crate::basics::{CoverType, RectI};
use crate::color::Rgba8;
use crate::pixfmt_rgba::PixelFormat;

/// Clip-and-delegate wrapper around a pixel format.
pub struct RendererBase<'a, PF: PixelFormat> {
    ren: &'a mut PF,
    clip_box: RectI,
}

impl<'a, PF: PixelFormat> RendererBase<'a, PF> {
    /// Clip box covers the whole buffer.
    pub fn new(ren: &'a mut PF) -> Self {
        let clip_box = RectI::new(0, 0, ren.width() as i32 - 1, ren.height() as i32 - 1);
        Self { ren, clip_box }
    }

    pub fn clip_box(&self) -> &RectI {
        &self.clip_box
    }

    pub fn ren(&self) -> &PF {
        self.ren
    }

    #[inline]
    pub fn inbox(&self, x: i32, y: i32) -> bool {
        self.clip_box.hit_test(x, y)
    }

    pub fn blend_hline(&mut self, x1: i32, y: i32, x2: i32, c: &Rgba8, cover: CoverType) {
        let (x1, x2) = if x1 > x2 { (x2, x1) } else { (x1, x2) };
        if y < self.clip_box.y1 || y > self.clip_box.y2 {
            return;
        }
        if x1 > self.clip_box.x2 || x2 < self.clip_box.x1 {
            return;
        }
        let x1 = x1.max(self.clip_box.x1);
        let x2 = x2.min(self.clip_box.x2);
        self.ren.blend_hline(x1, y, (x2 - x1 + 1) as u32, c, cover);
    }

    /// Blend `covers` starting at `x`, dropping whatever falls outside.
    pub fn blend_solid_hspan(&mut self, x: i32, y: i32, c: &Rgba8, covers: &[CoverType]) {
        if y < self.clip_box.y1 || y > self.clip_box.y2 || covers.is_empty() {
            return;
        }
        let mut x = x;
        let mut covers = covers;
        if x < self.clip_box.x1 {
            let skip = (self.clip_box.x1 - x) as usize;
            if skip >= covers.len() {
                return;
            }
            covers = &covers[skip..];
            x = self.clip_box.x1;
        }
        let room = self.clip_box.x2 - x + 1;
        if room <= 0 {
            return;
        }
        let len = covers.len().min(room as usize);
        self.ren.blend_solid_hspan(x, y, len as u32, c, &covers[..len]);
    }
}
