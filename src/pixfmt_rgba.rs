//! RGBA32 pixel storage and blending.
//!
//! [`PixelBuffer`] owns a tightly packed, top-down, non-premultiplied RGBA
//! image. Blending follows the usual fixed-point rule: the covered alpha is
//! `color.a * cover / 255` and each channel moves toward the source color by
//! that fraction.

use crate::basics::{CoverType, RectI};
use crate::color::{Rgb8, Rgba8};

const BPP: usize = 4;

/// Pixel operations the renderers need. Coordinates are assumed in range;
/// clipping is the renderer's job.
pub trait PixelFormat {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn pixel(&self, x: i32, y: i32) -> Rgba8;
    fn copy_pixel(&mut self, x: i32, y: i32, c: &Rgba8);
    fn blend_hline(&mut self, x: i32, y: i32, len: u32, c: &Rgba8, cover: CoverType);
    fn blend_solid_hspan(&mut self, x: i32, y: i32, len: u32, c: &Rgba8, covers: &[CoverType]);
}

/// An owned RGBA image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// A `width` × `height` image filled with the opaque `background`.
    pub fn new(width: u32, height: u32, background: Rgb8) -> Self {
        let fill = background.opaque();
        let mut data = Vec::with_capacity(width as usize * height as usize * BPP);
        for _ in 0..width as usize * height as usize {
            data.extend_from_slice(&[fill.r, fill.g, fill.b, fill.a]);
        }
        Self {
            width,
            height,
            data,
        }
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn stride(&self) -> usize {
        self.width as usize * BPP
    }

    pub fn row(&self, y: u32) -> &[u8] {
        let start = y as usize * self.stride();
        &self.data[start..start + self.stride()]
    }

    fn offset(&self, x: i32, y: i32) -> usize {
        y as usize * self.stride() + x as usize * BPP
    }

    /// Copy of the inclusive rectangle `r`, which must lie inside the image.
    pub fn crop(&self, r: &RectI) -> PixelBuffer {
        let w = r.width();
        let h = r.height();
        let mut data = Vec::with_capacity(w as usize * h as usize * BPP);
        for y in r.y1..=r.y2 {
            let start = self.offset(r.x1, y);
            data.extend_from_slice(&self.data[start..start + w as usize * BPP]);
        }
        PixelBuffer {
            width: w,
            height: h,
            data,
        }
    }

    #[inline]
    fn blend_pix(p: &mut [u8], c: &Rgba8, alpha: u8) {
        if alpha == 255 {
            p[0] = c.r;
            p[1] = c.g;
            p[2] = c.b;
            p[3] = 255;
        } else if alpha > 0 {
            p[0] = Rgba8::lerp(p[0], c.r, alpha);
            p[1] = Rgba8::lerp(p[1], c.g, alpha);
            p[2] = Rgba8::lerp(p[2], c.b, alpha);
            p[3] = Rgba8::lerp(p[3], 255, alpha);
        }
    }
}

impl PixelFormat for PixelBuffer {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn pixel(&self, x: i32, y: i32) -> Rgba8 {
        let o = self.offset(x, y);
        Rgba8::new(self.data[o], self.data[o + 1], self.data[o + 2], self.data[o + 3])
    }

    fn copy_pixel(&mut self, x: i32, y: i32, c: &Rgba8) {
        let o = self.offset(x, y);
        self.data[o..o + BPP].copy_from_slice(&[c.r, c.g, c.b, c.a]);
    }

    fn blend_hline(&mut self, x: i32, y: i32, len: u32, c: &Rgba8, cover: CoverType) {
        let alpha = Rgba8::mult_cover(c.a, cover);
        let start = self.offset(x, y);
        let end = start + len as usize * BPP;
        for p in self.data[start..end].chunks_exact_mut(BPP) {
            Self::blend_pix(p, c, alpha);
        }
    }

    fn blend_solid_hspan(&mut self, x: i32, y: i32, len: u32, c: &Rgba8, covers: &[CoverType]) {
        let start = self.offset(x, y);
        let end = start + len as usize * BPP;
        for (p, &cover) in self.data[start..end].chunks_exact_mut(BPP).zip(covers) {
            Self::blend_pix(p, c, Rgba8::mult_cover(c.a, cover));
        }
    }
}
