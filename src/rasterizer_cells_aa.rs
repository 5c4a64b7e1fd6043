//! Anti-aliased cell accumulation.
//!
//! Edges in 24.8 fixed point are split at pixel row and column boundaries;
//! every fragment adds to the `cover` (net vertical extent) and `area`
//! (twice the signed area left of the fragment) of the cell it crosses.
//! After [`RasterizerCellsAa::sort_cells`] the cells can be read back one
//! pixel row at a time.

use crate::basics::{POLY_SUBPIXEL_MASK, POLY_SUBPIXEL_SCALE, POLY_SUBPIXEL_SHIFT};

const SCALE: i32 = POLY_SUBPIXEL_SCALE as i32;
const MASK: i32 = POLY_SUBPIXEL_MASK as i32;

/// Coverage accumulated in one pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellAa {
    pub x: i32,
    pub y: i32,
    pub cover: i32,
    pub area: i32,
}

impl CellAa {
    const EMPTY: CellAa = CellAa {
        x: i32::MAX,
        y: i32::MAX,
        cover: 0,
        area: 0,
    };

    #[inline]
    fn is_at(&self, x: i32, y: i32) -> bool {
        self.x == x && self.y == y
    }

    #[inline]
    fn is_blank(&self) -> bool {
        self.cover == 0 && self.area == 0
    }

    #[inline]
    fn add(&mut self, fx_from: i32, fx_to: i32, dy: i32) {
        self.cover += dy;
        self.area += (fx_from + fx_to) * dy;
    }
}

impl Default for CellAa {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// Row range into the sorted cell array.
#[derive(Debug, Clone, Copy, Default)]
struct Row {
    start: usize,
    len: usize,
}

/// Converts edges into cells.
#[derive(Debug, Default)]
pub struct RasterizerCellsAa {
    cells: Vec<CellAa>,
    rows: Vec<Row>,
    curr_cell: CellAa,
    min_x: i32,
    min_y: i32,
    max_x: i32,
    max_y: i32,
    sorted: bool,
}

impl RasterizerCellsAa {
    pub fn new() -> Self {
        Self {
            min_x: i32::MAX,
            min_y: i32::MAX,
            max_x: i32::MIN,
            max_y: i32::MIN,
            ..Self::default()
        }
    }

    /// Discard all cells.
    pub fn reset(&mut self) {
        self.cells.clear();
        self.rows.clear();
        self.curr_cell = CellAa::EMPTY;
        self.min_x = i32::MAX;
        self.min_y = i32::MAX;
        self.max_x = i32::MIN;
        self.max_y = i32::MIN;
        self.sorted = false;
    }

    #[inline]
    pub fn min_x(&self) -> i32 {
        self.min_x
    }
    #[inline]
    pub fn min_y(&self) -> i32 {
        self.min_y
    }
    #[inline]
    pub fn max_x(&self) -> i32 {
        self.max_x
    }
    #[inline]
    pub fn max_y(&self) -> i32 {
        self.max_y
    }

    pub fn total_cells(&self) -> usize {
        self.cells.len()
    }

    pub fn sorted(&self) -> bool {
        self.sorted
    }

    /// Cells of pixel row `y`, ordered by `x`. Only valid once sorted.
    pub fn scanline_cells(&self, y: i32) -> &[CellAa] {
        if !self.sorted || y < self.min_y || y > self.max_y {
            return &[];
        }
        match self.rows.get((y - self.min_y) as usize) {
            Some(row) => &self.cells[row.start..row.start + row.len],
            None => &[],
        }
    }

    fn add_curr_cell(&mut self) {
        if !self.curr_cell.is_blank() {
            self.cells.push(self.curr_cell);
        }
    }

    fn set_curr_cell(&mut self, x: i32, y: i32) {
        if !self.curr_cell.is_at(x, y) {
            self.add_curr_cell();
            self.curr_cell = CellAa {
                x,
                y,
                cover: 0,
                area: 0,
            };
        }
    }

    fn grow_bounds(&mut self, ex: i32, ey: i32) {
        self.min_x = self.min_x.min(ex);
        self.max_x = self.max_x.max(ex);
        self.min_y = self.min_y.min(ey);
        self.max_y = self.max_y.max(ey);
    }

    /// Accumulate a fragment that stays inside pixel row `ey`.
    ///
    /// `x1`, `x2` are absolute 24.8 coordinates; `y1`, `y2` are offsets
    /// within the row, `0..=SCALE`. The current cell must already be the one
    /// containing `x1`.
    fn render_hline(&mut self, ey: i32, x1: i32, y1: i32, x2: i32, y2: i32) {
        let ex1 = x1 >> POLY_SUBPIXEL_SHIFT;
        let ex2 = x2 >> POLY_SUBPIXEL_SHIFT;

        if y1 == y2 {
            self.set_curr_cell(ex2, ey);
            return;
        }

        if ex1 == ex2 {
            self.curr_cell.add(x1 & MASK, x2 & MASK, y2 - y1);
            return;
        }

        let dx = x2 as i64 - x1 as i64;
        let dy = y2 as i64 - y1 as i64;
        // Moving right, a fragment leaves its cell at fx = SCALE and enters
        // the next at 0; moving left it is the other way round.
        let (incr, exit_fx, enter_fx) = if dx > 0 { (1, SCALE, 0) } else { (-1, 0, SCALE) };

        let mut ex = ex1;
        let mut fx_from = x1 & MASK;
        let mut y_from = y1;
        while ex != ex2 {
            let boundary = if incr > 0 { (ex + 1) << POLY_SUBPIXEL_SHIFT } else { ex << POLY_SUBPIXEL_SHIFT };
            let y_at = y1 + ((boundary as i64 - x1 as i64) * dy / dx) as i32;
            self.curr_cell.add(fx_from, exit_fx, y_at - y_from);
            ex += incr;
            self.set_curr_cell(ex, ey);
            fx_from = enter_fx;
            y_from = y_at;
        }
        self.curr_cell.add(fx_from, x2 & MASK, y2 - y_from);
    }

    /// Add the edge `(x1, y1) -> (x2, y2)` in 24.8 fixed point.
    pub fn line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        let ex1 = x1 >> POLY_SUBPIXEL_SHIFT;
        let ex2 = x2 >> POLY_SUBPIXEL_SHIFT;
        let ey1 = y1 >> POLY_SUBPIXEL_SHIFT;
        let ey2 = y2 >> POLY_SUBPIXEL_SHIFT;
        let fy1 = y1 & MASK;
        let fy2 = y2 & MASK;

        self.grow_bounds(ex1, ey1);
        self.grow_bounds(ex2, ey2);
        self.sorted = false;

        self.set_curr_cell(ex1, ey1);

        if ey1 == ey2 {
            self.render_hline(ey1, x1, fy1, x2, fy2);
            return;
        }

        let dx = x2 as i64 - x1 as i64;
        let dy = y2 as i64 - y1 as i64;
        let (incr, exit_fy, enter_fy) = if dy > 0 { (1, SCALE, 0) } else { (-1, 0, SCALE) };

        let mut ey = ey1;
        let mut x_from = x1;
        let mut fy_from = fy1;
        while ey != ey2 {
            let boundary = if incr > 0 { (ey + 1) << POLY_SUBPIXEL_SHIFT } else { ey << POLY_SUBPIXEL_SHIFT };
            let x_at = x1 + ((boundary as i64 - y1 as i64) * dx / dy) as i32;
            self.render_hline(ey, x_from, fy_from, x_at, exit_fy);
            ey += incr;
            self.set_curr_cell(x_at >> POLY_SUBPIXEL_SHIFT, ey);
            x_from = x_at;
            fy_from = enter_fy;
        }
        self.render_hline(ey, x_from, fy_from, x2, fy2);
    }

    /// Flush the current cell and order all cells by row, then column.
    pub fn sort_cells(&mut self) {
        if self.sorted {
            return;
        }
        self.add_curr_cell();
        self.curr_cell = CellAa::EMPTY;

        self.rows.clear();
        if self.cells.is_empty() {
            self.sorted = true;
            return;
        }

        self.cells.sort_unstable_by_key(|c| (c.y, c.x));

        let height = (self.max_y - self.min_y + 1) as usize;
        self.rows.resize(height, Row::default());
        for (i, cell) in self.cells.iter().enumerate() {
            let row = &mut self.rows[(cell.y - self.min_y) as usize];
            if row.len == 0 {
                row.start = i;
            }
            row.len += 1;
        }
        self.sorted = true;
    }
}
