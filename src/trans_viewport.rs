//! Logical-to-pixel viewport.
//!
//! The pen works in a centered, y-up space; images are top-down. The
//! viewport maps between the two for a canvas of fixed pixel size.

use crate::basics::PointD;

/// Mapping from logical canvas coordinates to pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransViewport {
    width: f64,
    height: f64,
}

impl TransViewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width as f64,
            height: height as f64,
        }
    }

    pub fn device_width(&self) -> f64 {
        self.width
    }

    pub fn device_height(&self) -> f64 {
        self.height
    }

    /// `(x, y)` → `(x + w/2, h/2 - y)`.
    #[inline]
    pub fn transform(&self, p: PointD) -> PointD {
        PointD::new(p.x + self.width * 0.5, self.height * 0.5 - p.y)
    }

    #[inline]
    pub fn inverse_transform(&self, p: PointD) -> PointD {
        PointD::new(p.x - self.width * 0.5, self.height * 0.5 - p.y)
    }

    /// Transform a whole polyline.
    pub fn transform_all(&self, points: &[PointD]) -> Vec<PointD> {
        points.iter().map(|&p| self.transform(p)).collect()
    }
}
