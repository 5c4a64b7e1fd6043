//! Edge clipping in front of the cell rasterizer.
//!
//! Edges are clipped in pixel space, before conversion to 24.8 fixed point,
//! so geometry far outside the canvas neither overflows the fixed-point
//! range nor produces cells. Parts of an edge beyond the left or right side
//! of the clip box are moved onto that side rather than dropped: they still
//! carry the cover the rows inside the box need. Parts above or below the
//! box are dropped.

use crate::basics::{poly_coord, RectD};
use crate::clip_liang_barsky::{
    clipping_flags, clipping_flags_y, CLIPPING_FLAGS_X1_CLIPPED, CLIPPING_FLAGS_X2_CLIPPED,
    CLIPPING_FLAGS_X_CLIPPED, CLIPPING_FLAGS_Y1_CLIPPED, CLIPPING_FLAGS_Y2_CLIPPED,
    CLIPPING_FLAGS_Y_CLIPPED,
};
use crate::rasterizer_cells_aa::RasterizerCellsAa;

/// Clipping stage for floating-point pixel coordinates.
#[derive(Debug, Clone, Default)]
pub struct RasterizerSlClipDbl {
    clip_box: Option<RectD>,
    x1: f64,
    y1: f64,
    f1: u32,
}

impl RasterizerSlClipDbl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pass edges through unclipped.
    pub fn reset_clipping(&mut self) {
        self.clip_box = None;
    }

    /// Clip to the rectangle spanned by the two corners.
    pub fn clip_box(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.clip_box = Some(RectD::new(x1.min(x2), y1.min(y2), x1.max(x2), y1.max(y2)));
    }

    pub fn clipping_box(&self) -> Option<&RectD> {
        self.clip_box.as_ref()
    }

    pub fn move_to(&mut self, x: f64, y: f64) {
        self.x1 = x;
        self.y1 = y;
        if let Some(b) = &self.clip_box {
            self.f1 = clipping_flags(x, y, b);
        }
    }

    /// Feed the edge from the current point to `(x2, y2)` into `ras`.
    pub fn line_to(&mut self, ras: &mut RasterizerCellsAa, x2: f64, y2: f64) {
        let Some(b) = self.clip_box else {
            emit(ras, self.x1, self.y1, x2, y2);
            self.x1 = x2;
            self.y1 = y2;
            return;
        };

        let f2 = clipping_flags(x2, y2, &b);
        let (x1, y1, f1) = (self.x1, self.y1, self.f1);
        self.x1 = x2;
        self.y1 = y2;
        self.f1 = f2;

        // Both ends beyond the same horizontal side.
        if (f1 & CLIPPING_FLAGS_Y_CLIPPED) == (f2 & CLIPPING_FLAGS_Y_CLIPPED)
            && (f1 & CLIPPING_FLAGS_Y_CLIPPED) != 0
        {
            return;
        }

        let y_at = |x: f64| y1 + (x - x1) * (y2 - y1) / (x2 - x1);

        match ((f1 & CLIPPING_FLAGS_X_CLIPPED) << 1) | (f2 & CLIPPING_FLAGS_X_CLIPPED) {
            // Visible by x.
            0 => line_clip_y(ras, &b, x1, y1, x2, y2, f1, f2),
            // x2 right of the box.
            1 => {
                let y3 = y_at(b.x2);
                let f3 = clipping_flags_y(y3, &b);
                line_clip_y(ras, &b, x1, y1, b.x2, y3, f1, f3);
                line_clip_y(ras, &b, b.x2, y3, b.x2, y2, f3, f2);
            }
            // x1 right of the box.
            2 => {
                let y3 = y_at(b.x2);
                let f3 = clipping_flags_y(y3, &b);
                line_clip_y(ras, &b, b.x2, y1, b.x2, y3, f1, f3);
                line_clip_y(ras, &b, b.x2, y3, x2, y2, f3, f2);
            }
            3 => line_clip_y(ras, &b, b.x2, y1, b.x2, y2, f1, f2),
            // x2 left of the box.
            4 => {
                let y3 = y_at(b.x1);
                let f3 = clipping_flags_y(y3, &b);
                line_clip_y(ras, &b, x1, y1, b.x1, y3, f1, f3);
                line_clip_y(ras, &b, b.x1, y3, b.x1, y2, f3, f2);
            }
            // Right to left across the box.
            6 => {
                let y3 = y_at(b.x2);
                let y4 = y_at(b.x1);
                let f3 = clipping_flags_y(y3, &b);
                let f4 = clipping_flags_y(y4, &b);
                line_clip_y(ras, &b, b.x2, y1, b.x2, y3, f1, f3);
                line_clip_y(ras, &b, b.x2, y3, b.x1, y4, f3, f4);
                line_clip_y(ras, &b, b.x1, y4, b.x1, y2, f4, f2);
            }
            // x1 left of the box.
            8 => {
                let y3 = y_at(b.x1);
                let f3 = clipping_flags_y(y3, &b);
                line_clip_y(ras, &b, b.x1, y1, b.x1, y3, f1, f3);
                line_clip_y(ras, &b, b.x1, y3, x2, y2, f3, f2);
            }
            // Left to right across the box.
            9 => {
                let y3 = y_at(b.x1);
                let y4 = y_at(b.x2);
                let f3 = clipping_flags_y(y3, &b);
                let f4 = clipping_flags_y(y4, &b);
                line_clip_y(ras, &b, b.x1, y1, b.x1, y3, f1, f3);
                line_clip_y(ras, &b, b.x1, y3, b.x2, y4, f3, f4);
                line_clip_y(ras, &b, b.x2, y4, b.x2, y2, f4, f2);
            }
            12 => line_clip_y(ras, &b, b.x1, y1, b.x1, y2, f1, f2),
            // An endpoint cannot be left and right of the box at once.
            _ => {}
        }
    }
}

#[inline]
fn emit(ras: &mut RasterizerCellsAa, x1: f64, y1: f64, x2: f64, y2: f64) {
    ras.line(poly_coord(x1), poly_coord(y1), poly_coord(x2), poly_coord(y2));
}

/// Clip an edge that is inside the box horizontally against its top and
/// bottom.
#[allow(clippy::too_many_arguments)]
fn line_clip_y(
    ras: &mut RasterizerCellsAa,
    b: &RectD,
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    f1: u32,
    f2: u32,
) {
    let f1 = f1 & CLIPPING_FLAGS_Y_CLIPPED;
    let f2 = f2 & CLIPPING_FLAGS_Y_CLIPPED;

    if (f1 | f2) == 0 {
        emit(ras, x1, y1, x2, y2);
        return;
    }
    if f1 == f2 {
        return;
    }

    let x_at = |y: f64| x1 + (y - y1) * (x2 - x1) / (y2 - y1);
    let (mut tx1, mut ty1, mut tx2, mut ty2) = (x1, y1, x2, y2);
    if f1 & CLIPPING_FLAGS_Y1_CLIPPED != 0 {
        tx1 = x_at(b.y1);
        ty1 = b.y1;
    }
    if f1 & CLIPPING_FLAGS_Y2_CLIPPED != 0 {
        tx1 = x_at(b.y2);
        ty1 = b.y2;
    }
    if f2 & CLIPPING_FLAGS_Y1_CLIPPED != 0 {
        tx2 = x_at(b.y1);
        ty2 = b.y1;
    }
    if f2 & CLIPPING_FLAGS_Y2_CLIPPED != 0 {
        tx2 = x_at(b.y2);
        ty2 = b.y2;
    }
    emit(ras, tx1, ty1, tx2, ty2);
}
