//! Rasterization of a recorded [`Drawing`].
//!
//! Each stroke is mapped to pixel space, outlined with round joins and
//! caps, and filled in its own color. Strokes are rendered one at a time in
//! drawing order so that later strokes cover earlier ones.

use crate::drawing::{Drawing, Stroke};
use crate::math_stroke::MathStroke;
use crate::pixfmt_rgba::{PixelBuffer, PixelFormat};
use crate::rasterizer_scanline_aa::RasterizerScanlineAa;
use crate::renderer_base::RendererBase;
use crate::renderer_scanline::render_scanlines_aa_solid;
use crate::scanline_u::ScanlineU8;
use crate::trans_viewport::TransViewport;

/// Reusable rasterization state.
#[derive(Debug)]
pub struct DrawingRasterizer {
    ras: RasterizerScanlineAa,
    sl: ScanlineU8,
    approx_scale: f64,
}

impl Default for DrawingRasterizer {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawingRasterizer {
    pub fn new() -> Self {
        Self {
            ras: RasterizerScanlineAa::new(),
            sl: ScanlineU8::new(),
            approx_scale: 1.0,
        }
    }

    /// Finer round joins for values above 1.
    pub fn set_approximation_scale(&mut self, s: f64) {
        self.approx_scale = s;
    }

    /// Render `drawing` onto a fresh buffer of the canvas size.
    pub fn rasterize(&mut self, drawing: &Drawing) -> PixelBuffer {
        let mut buf = PixelBuffer::new(drawing.width(), drawing.height(), drawing.background());
        let viewport = TransViewport::new(drawing.width(), drawing.height());
        for stroke in drawing.strokes() {
            self.render_stroke(&mut buf, &viewport, stroke);
        }
        log::debug!(
            "rasterized {} strokes onto {}x{}",
            drawing.strokes().len(),
            buf.width(),
            buf.height()
        );
        buf
    }

    fn render_stroke(&mut self, buf: &mut PixelBuffer, viewport: &TransViewport, stroke: &Stroke) {
        let mut outline = MathStroke::new();
        outline.set_width(stroke.width);
        outline.set_approximation_scale(self.approx_scale);

        let points = viewport.transform_all(&stroke.points);
        // Outlines are already widened; one pixel of slack keeps the
        // antialiased border of the canvas edge intact.
        self.ras.clip_box(-1.0, -1.0, buf.width() as f64 + 1.0, buf.height() as f64 + 1.0);
        for contour in outline.outline(&points) {
            self.ras.add_contour(&contour);
        }

        let mut ren = RendererBase::new(buf);
        render_scanlines_aa_solid(&mut self.ras, &mut self.sl, &mut ren, &stroke.color.opaque());
    }
}

/// Rasterize with default settings.
pub fn rasterize(drawing: &Drawing) -> PixelBuffer {
    DrawingRasterizer::new().rasterize(drawing)
}
