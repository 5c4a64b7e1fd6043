//! Stroke outlines for polylines with round joins and caps.
//!
//! A stroke of width `w` is the union of one rectangle of width `w` per
//! segment and one disc of diameter `w` per vertex. Every contour is emitted
//! with the same winding, so rasterizing them together under the non-zero
//! rule yields the union without seams.

use crate::basics::{PointD, PI};

/// Generates the contours that make up a stroke outline.
#[derive(Debug, Clone, Copy)]
pub struct MathStroke {
    half_width: f64,
    approx_scale: f64,
}

impl Default for MathStroke {
    fn default() -> Self {
        Self::new()
    }
}

impl MathStroke {
    pub fn new() -> Self {
        Self {
            half_width: 0.5,
            approx_scale: 1.0,
        }
    }

    pub fn set_width(&mut self, w: f64) {
        self.half_width = w.abs() * 0.5;
    }

    pub fn width(&self) -> f64 {
        self.half_width * 2.0
    }

    pub fn set_approximation_scale(&mut self, s: f64) {
        self.approx_scale = s;
    }

    pub fn approximation_scale(&self) -> f64 {
        self.approx_scale
    }

    /// Vertices used to approximate a full round join.
    pub fn disc_steps(&self) -> usize {
        let r = self.half_width;
        let da = (r / (r + 0.125 / self.approx_scale)).acos() * 2.0;
        ((2.0 * PI / da).ceil() as usize).max(3)
    }

    /// Disc of the stroke's half width around `c`, clockwise.
    pub fn round_join(&self, c: PointD) -> Vec<PointD> {
        let n = self.disc_steps();
        let da = 2.0 * PI / n as f64;
        (0..n)
            .map(|i| {
                let a = -(i as f64) * da;
                PointD::new(c.x + a.cos() * self.half_width, c.y + a.sin() * self.half_width)
            })
            .collect()
    }

    /// Rectangle covering the segment `a -> b`, clockwise; `None` when the
    /// segment has no length.
    pub fn segment(&self, a: PointD, b: PointD) -> Option<[PointD; 4]> {
        let d = b - a;
        let len = d.length();
        if len <= f64::EPSILON {
            return None;
        }
        let n = d.perp().scale(self.half_width / len);
        Some([a + n, b + n, b - n, a - n])
    }

    /// All contours for the polyline through `points`. A polyline with
    /// fewer than two points produces nothing.
    pub fn outline(&self, points: &[PointD]) -> Vec<Vec<PointD>> {
        if points.len() < 2 || self.half_width <= 0.0 {
            return Vec::new();
        }
        let mut contours = Vec::with_capacity(points.len() * 2);
        let mut prev: Option<PointD> = None;
        for &p in points {
            if let Some(a) = prev {
                if a == p {
                    continue;
                }
                if let Some(quad) = self.segment(a, p) {
                    contours.push(quad.to_vec());
                }
            }
            contours.push(self.round_join(p));
            prev = Some(p);
        }
        contours
    }
}

/// Twice the signed area of a closed contour; positive is counterclockwise.
pub fn signed_area2(contour: &[PointD]) -> f64 {
    let n = contour.len();
    (0..n)
        .map(|i| {
            let a = contour[i];
            let b = contour[(i + 1) % n];
            a.x * b.y - b.x * a.y
        })
        .sum()
}
