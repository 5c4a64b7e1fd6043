//! Recorded vector drawing: the display list a canvas produces.
//!
//! A [`Drawing`] is the intermediate vector representation handed to export.
//! It can be serialized to SVG or rasterized; both read the same strokes.

use crate::basics::{PointD, RectD};
use crate::color::Rgb8;

/// One connected pen-down polyline in a single color and width.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub color: Rgb8,
    pub width: f64,
    pub points: Vec<PointD>,
}

impl Stroke {
    pub fn new(color: Rgb8, width: f64, start: PointD) -> Self {
        Self {
            color,
            width,
            points: vec![start],
        }
    }

    /// Bounding box of the center line, grown by half the stroke width.
    pub fn bounds(&self) -> Option<RectD> {
        let first = self.points.first()?;
        let mut r = RectD::new(first.x, first.y, first.x, first.y);
        for p in &self.points[1..] {
            r.add_point(p.x, p.y);
        }
        let hw = self.width * 0.5;
        Some(RectD::new(r.x1 - hw, r.y1 - hw, r.x2 + hw, r.y2 + hw))
    }
}

/// Strokes recorded in drawing order on a `width` × `height` canvas whose
/// logical origin is the center.
#[derive(Debug, Clone, PartialEq)]
pub struct Drawing {
    width: u32,
    height: u32,
    background: Rgb8,
    strokes: Vec<Stroke>,
}

impl Drawing {
    pub fn new(width: u32, height: u32, background: Rgb8) -> Self {
        Self {
            width,
            height,
            background,
            strokes: Vec::new(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn background(&self) -> Rgb8 {
        self.background
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    pub(crate) fn push(&mut self, stroke: Stroke) {
        self.strokes.push(stroke);
    }

    pub(crate) fn last_mut(&mut self) -> Option<&mut Stroke> {
        self.strokes.last_mut()
    }

    pub(crate) fn clear(&mut self) {
        self.strokes.clear();
    }

    /// Logical-space bounds of everything drawn, or `None` when empty.
    pub fn bounds(&self) -> Option<RectD> {
        let mut it = self.strokes.iter().filter_map(Stroke::bounds);
        let mut r = it.next()?;
        for b in it {
            r.add_point(b.x1, b.y1);
            r.add_point(b.x2, b.y2);
        }
        Some(r)
    }
}
