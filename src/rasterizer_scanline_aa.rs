//! Polygon rasterizer producing anti-aliased scanlines.
//!
//! Contours are fed as floating-point pixel coordinates, clipped by
//! [`RasterizerSlClipDbl`], converted to 24.8 fixed point, and accumulated
//! by [`RasterizerCellsAa`]. Sweeping turns each pixel row of cells into
//! coverage spans under the nonzero rule.

use crate::basics::{PointD, POLY_SUBPIXEL_SHIFT};
use crate::rasterizer_cells_aa::RasterizerCellsAa;
use crate::rasterizer_sl_clip::RasterizerSlClipDbl;

const AA_SHIFT: u32 = 8;
const AA_SCALE: u32 = 1 << AA_SHIFT;
const AA_MASK: u32 = AA_SCALE - 1;

/// Receiver of swept coverage, one pixel row at a time.
pub trait Scanline {
    /// Forget the spans of the previous row.
    fn reset_spans(&mut self);

    /// One pixel of coverage `cover` at `x`.
    fn add_cell(&mut self, x: i32, cover: u32);

    /// `len` pixels of uniform coverage starting at `x`.
    fn add_span(&mut self, x: i32, len: u32, cover: u32);

    /// Close the row at `y`.
    fn finalize(&mut self, y: i32);

    fn num_spans(&self) -> usize;

    fn y(&self) -> i32;
}

/// Anti-aliased polygon rasterizer.
#[derive(Debug)]
pub struct RasterizerScanlineAa {
    outline: RasterizerCellsAa,
    clipper: RasterizerSlClipDbl,
    start: (f64, f64),
    open: bool,
    scan_y: i32,
}

impl Default for RasterizerScanlineAa {
    fn default() -> Self {
        Self::new()
    }
}

impl RasterizerScanlineAa {
    pub fn new() -> Self {
        Self {
            outline: RasterizerCellsAa::new(),
            clipper: RasterizerSlClipDbl::new(),
            start: (0.0, 0.0),
            open: false,
            scan_y: 0,
        }
    }

    pub fn reset(&mut self) {
        self.outline.reset();
        self.open = false;
    }

    /// Restrict cells to the box spanned by the two corners, in pixels.
    ///
    /// Geometry outside the box costs no cells and no rows.
    pub fn clip_box(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.reset();
        self.clipper.clip_box(x1, y1, x2, y2);
    }

    pub fn reset_clipping(&mut self) {
        self.reset();
        self.clipper.reset_clipping();
    }

    /// Close the open contour back to its first vertex.
    pub fn close_polygon(&mut self) {
        if self.open {
            let (x, y) = self.start;
            self.clipper.line_to(&mut self.outline, x, y);
            self.open = false;
        }
    }

    pub fn move_to_d(&mut self, x: f64, y: f64) {
        self.close_polygon();
        self.clipper.move_to(x, y);
        self.start = (x, y);
        self.open = true;
    }

    pub fn line_to_d(&mut self, x: f64, y: f64) {
        self.clipper.line_to(&mut self.outline, x, y);
    }

    /// Add a closed contour; fewer than three points add nothing.
    pub fn add_contour(&mut self, points: &[PointD]) {
        if points.len() < 3 {
            return;
        }
        self.move_to_d(points[0].x, points[0].y);
        for p in &points[1..] {
            self.line_to_d(p.x, p.y);
        }
        self.close_polygon();
    }

    pub fn min_x(&self) -> i32 {
        self.outline.min_x()
    }
    pub fn min_y(&self) -> i32 {
        self.outline.min_y()
    }
    pub fn max_x(&self) -> i32 {
        self.outline.max_x()
    }
    pub fn max_y(&self) -> i32 {
        self.outline.max_y()
    }

    pub fn total_cells(&self) -> usize {
        self.outline.total_cells()
    }

    /// Prepare for sweeping; `false` when nothing was rasterized.
    pub fn rewind_scanlines(&mut self) -> bool {
        self.close_polygon();
        self.outline.sort_cells();
        if self.outline.total_cells() == 0 {
            return false;
        }
        self.scan_y = self.outline.min_y();
        true
    }

    /// Coverage for a doubled, subpixel-scaled area.
    pub fn calculate_alpha(&self, area: i32) -> u32 {
        let cover = (area >> (POLY_SUBPIXEL_SHIFT * 2 + 1 - AA_SHIFT)).unsigned_abs();
        cover.min(AA_MASK)
    }

    /// Emit the next non-empty row into `sl`; `false` once all rows are done.
    pub fn sweep_scanline<SL: Scanline>(&mut self, sl: &mut SL) -> bool {
        while self.scan_y <= self.outline.max_y() {
            let y = self.scan_y;
            self.scan_y += 1;
            sl.reset_spans();

            let cells = self.outline.scanline_cells(y);
            let mut cover: i32 = 0;
            let mut i = 0;
            while i < cells.len() {
                let x = cells[i].x;
                let mut area = 0;
                while i < cells.len() && cells[i].x == x {
                    area += cells[i].area;
                    cover += cells[i].cover;
                    i += 1;
                }

                let mut span_x = x;
                if area != 0 {
                    let alpha = self.calculate_alpha((cover << (POLY_SUBPIXEL_SHIFT + 1)) - area);
                    if alpha != 0 {
                        sl.add_cell(x, alpha);
                    }
                    span_x += 1;
                }

                if let Some(next) = cells.get(i) {
                    if next.x > span_x {
                        let alpha = self.calculate_alpha(cover << (POLY_SUBPIXEL_SHIFT + 1));
                        if alpha != 0 {
                            sl.add_span(span_x, (next.x - span_x) as u32, alpha);
                        }
                    }
                }
            }

            if sl.num_spans() > 0 {
                sl.finalize(y);
                return true;
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanline_u::ScanlineU8;

    fn square(ras: &mut RasterizerScanlineAa, x1: f64, y1: f64, x2: f64, y2: f64) {
        ras.add_contour(&[
            PointD::new(x1, y1),
            PointD::new(x2, y1),
            PointD::new(x2, y2),
            PointD::new(x1, y2),
        ]);
    }

    fn row_covers(ras: &mut RasterizerScanlineAa) -> Vec<(i32, Vec<(i32, u8)>)> {
        let mut sl = ScanlineU8::new();
        let mut rows = Vec::new();
        if ras.rewind_scanlines() {
            while ras.sweep_scanline(&mut sl) {
                let mut px = Vec::new();
                for span in sl.spans() {
                    for (i, c) in sl.covers(span).iter().enumerate() {
                        px.push((span.x + i as i32, *c));
                    }
                }
                rows.push((sl.y(), px));
            }
        }
        rows
    }

    #[test]
    fn test_calculate_alpha() {
        let ras = RasterizerScanlineAa::new();
        let full = 256 << (POLY_SUBPIXEL_SHIFT + 1);
        assert_eq!(ras.calculate_alpha(full), 255);
        assert_eq!(ras.calculate_alpha(-full), 255);
        assert_eq!(ras.calculate_alpha(full / 2), 128);
        assert_eq!(ras.calculate_alpha(0), 0);
        assert_eq!(ras.calculate_alpha(full * 3), 255);
    }


    #[test]
    fn test_square_full_inside_none_outside() {
        let mut ras = RasterizerScanlineAa::new();
        square(&mut ras, 2.0, 1.0, 6.0, 4.0);
        let rows = row_covers(&mut ras);
        let ys: Vec<i32> = rows.iter().map(|(y, _)| *y).collect();
        assert_eq!(ys, vec![1, 2, 3]);
        for (_, px) in &rows {
            let xs: Vec<i32> = px.iter().map(|(x, _)| *x).collect();
            assert_eq!(xs, vec![2, 3, 4, 5]);
            assert!(px.iter().all(|(_, c)| *c == 255));
        }
    }

    #[test]
    fn test_half_pixel_edges_are_partial() {
        let mut ras = RasterizerScanlineAa::new();
        square(&mut ras, 1.5, 0.0, 4.5, 1.0);
        let rows = row_covers(&mut ras);
        assert_eq!(rows.len(), 1);
        let px = &rows[0].1;
        assert_eq!(px.first(), Some(&(1, 128)));
        assert_eq!(px.last(), Some(&(4, 128)));
        assert!(px[1..px.len() - 1].iter().all(|(_, c)| *c == 255));
    }

    #[test]
    fn test_orientation_does_not_matter_for_nonzero() {
        let mut ras = RasterizerScanlineAa::new();
        ras.add_contour(&[
            PointD::new(0.0, 0.0),
            PointD::new(0.0, 2.0),
            PointD::new(2.0, 2.0),
            PointD::new(2.0, 0.0),
        ]);
        let rows = row_covers(&mut ras);
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|(_, px)| px.iter().all(|(_, c)| *c == 255)));
    }

    #[test]
    fn test_overlap_is_union_under_nonzero() {
        let mut ras = RasterizerScanlineAa::new();
        square(&mut ras, 0.0, 0.0, 4.0, 1.0);
        square(&mut ras, 2.0, 0.0, 6.0, 1.0);
        let rows = row_covers(&mut ras);
        let px = &rows[0].1;
        assert_eq!(px.len(), 6);
        assert!(px.iter().all(|(_, c)| *c == 255));
    }

    #[test]
    fn test_empty_rasterizer_has_no_scanlines() {
        let mut ras = RasterizerScanlineAa::new();
        assert!(!ras.rewind_scanlines());
        ras.add_contour(&[PointD::new(0.0, 0.0), PointD::new(5.0, 5.0)]);
        assert!(!ras.rewind_scanlines());
    }

    #[test]
    fn test_clip_box_bounds_huge_square() {
        let mut ras = RasterizerScanlineAa::new();
        ras.clip_box(0.0, 0.0, 10.0, 10.0);
        square(&mut ras, -1.0e7, -1.0e7, 1.0e7, 1.0e7);
        let rows = row_covers(&mut ras);
        assert!(ras.total_cells() <= 40);
        let ys: Vec<i32> = rows.iter().map(|(y, _)| *y).collect();
        assert_eq!(ys, (0..10).collect::<Vec<_>>());
        for (_, px) in &rows {
            let xs: Vec<i32> = px.iter().map(|(x, _)| *x).collect();
            assert_eq!(xs, (0..10).collect::<Vec<_>>());
            assert!(px.iter().all(|(_, c)| *c == 255));
        }
    }

    #[test]
    fn test_contour_outside_clip_box_adds_nothing() {
        let mut ras = RasterizerScanlineAa::new();
        ras.clip_box(0.0, 0.0, 10.0, 10.0);
        square(&mut ras, 2.0, 50.0, 6.0, 5.0e6);
        assert!(!ras.rewind_scanlines());

        ras.reset_clipping();
        square(&mut ras, 2.0, 50.0, 6.0, 60.0);
        assert!(ras.rewind_scanlines());
        assert_eq!((ras.min_y(), ras.max_y()), (50, 60));
    }
}
