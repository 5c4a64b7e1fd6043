//! Scanline renderers: drain a rasterizer into a clipped renderer.

use crate::color::Rgba8;
use crate::pixfmt_rgba::PixelFormat;
use crate::rasterizer_scanline_aa::{RasterizerScanlineAa, Scanline};
use crate::renderer_base::RendererBase;
use crate::scanline_u::ScanlineU8;

/// Render every swept scanline of `ras` in one solid color.
pub fn render_scanlines_aa_solid<PF: PixelFormat>(
    ras: &mut RasterizerScanlineAa,
    sl: &mut ScanlineU8,
    ren: &mut RendererBase<'_, PF>,
    color: &Rgba8,
) {
    if !ras.rewind_scanlines() {
        return;
    }
    while ras.sweep_scanline(sl) {
        render_scanline_aa_solid(sl, ren, color);
    }
}

fn render_scanline_aa_solid<PF: PixelFormat>(
    sl: &ScanlineU8,
    ren: &mut RendererBase<'_, PF>,
    color: &Rgba8,
) {
    let y = sl.y();
    for span in sl.spans() {
        ren.blend_solid_hspan(span.x, y, color, sl.covers(span));
    }
}
