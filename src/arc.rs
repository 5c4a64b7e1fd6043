//! Pen arc flattening.
//!
//! Generates the points a pen passes through while sweeping a circular arc
//! from its current pose. The arc center lies `radius` units to the left of
//! the heading (to the right for a negative radius) and the pen turns by the
//! swept angle, which is how plotter and turtle pens describe arcs.
//!
//! The step angle adapts to the radius the same way the polygon arc
//! generator of the rasterizer does: `da = 2 * acos(r / (r + 0.125 / scale))`,
//! so the chord error stays around an eighth of a pixel.

use crate::basics::{deg2rad, heading_vector, PointD};

/// Arc flattener, yielding the points after the start point.
///
/// The last point is computed directly from the sweep, not accumulated from
/// steps, so the end of the arc carries no rounding drift.
#[derive(Debug, Clone)]
pub struct Arc {
    center: PointD,
    radius: f64,
    start_angle: f64,
    sweep: f64,
    end_heading: f64,
    steps: u32,
    step: u32,
}

impl Arc {
    /// Arc from `start` with pen heading `heading` (degrees), signed
    /// `radius`, and `extent` in degrees.
    pub fn new(start: PointD, heading: f64, radius: f64, extent: f64) -> Self {
        Self::with_approximation_scale(start, heading, radius, extent, 1.0)
    }

    /// Same as [`Arc::new`] with an explicit approximation scale; larger
    /// scales produce more points.
    pub fn with_approximation_scale(
        start: PointD,
        heading: f64,
        radius: f64,
        extent: f64,
        scale: f64,
    ) -> Self {
        let sign = if radius < 0.0 { -1.0 } else { 1.0 };
        let sweep_deg = extent * sign;
        let center = start + heading_vector(heading).perp().scale(radius);
        let to_start = start - center;
        let ra = radius.abs();

        let da = (ra / (ra + 0.125 / scale)).acos() * 2.0;
        let sweep = deg2rad(sweep_deg);
        let steps = ((sweep.abs() / da).ceil() as u32).max(1);

        Self {
            center,
            radius: ra,
            start_angle: to_start.y.atan2(to_start.x),
            sweep,
            end_heading: heading + sweep_deg,
            steps,
            step: 0,
        }
    }

    pub fn center(&self) -> PointD {
        self.center
    }

    /// Heading of the pen once the arc is complete (not normalized).
    pub fn end_heading(&self) -> f64 {
        self.end_heading
    }

    /// Number of points the iterator yields.
    pub fn num_steps(&self) -> u32 {
        self.steps
    }

    pub fn end_point(&self) -> PointD {
        self.point_at(self.sweep)
    }

    fn point_at(&self, theta: f64) -> PointD {
        let a = self.start_angle + theta;
        PointD::new(
            self.center.x + a.cos() * self.radius,
            self.center.y + a.sin() * self.radius,
        )
    }
}

impl Iterator for Arc {
    type Item = PointD;

    fn next(&mut self) -> Option<PointD> {
        if self.step >= self.steps {
            return None;
        }
        self.step += 1;
        if self.step == self.steps {
            return Some(self.end_point());
        }
        Some(self.point_at(self.sweep * self.step as f64 / self.steps as f64))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = (self.steps - self.step) as usize;
        (left, Some(left))
    }
}

impl ExactSizeIterator for Arc {}
