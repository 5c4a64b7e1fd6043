//! The pen surface: a plotter-style drawing model.
//!
//! A pen has a position, a heading and a pen-up/pen-down state. Moving with
//! the pen down leaves a stroke. [`PenSurface`] is the interface drawing code
//! targets; [`Canvas`] is the implementation that records strokes into a
//! [`Drawing`] for export.
//!
//! Conventions: the logical origin is the canvas center, y points up,
//! headings are degrees counterclockwise from +x.

use crate::arc::Arc;
use crate::basics::{heading_vector, normalize_heading, PointD};
use crate::color::{ColorMode, Rgb8};
use crate::drawing::{Drawing, Stroke};

/// Drawing primitives of a pen-based surface.
///
/// Only the required methods touch surface state; `forward`, `turn` and
/// `arc` are expressed through them.
pub trait PenSurface {
    fn position(&self) -> PointD;

    /// Current heading in degrees, in `[0, 360)`.
    fn heading(&self) -> f64;

    fn is_pen_down(&self) -> bool;

    fn set_pen_down(&mut self, down: bool);

    /// Move in a straight line to `(x, y)`, drawing if the pen is down.
    fn move_to(&mut self, x: f64, y: f64);

    /// Set the absolute heading in degrees.
    fn set_heading(&mut self, degrees: f64);

    fn set_color(&mut self, color: Rgb8);

    fn set_line_width(&mut self, width: f64);

    /// Move `distance` units along the current heading.
    fn forward(&mut self, distance: f64) {
        let p = self.position() + heading_vector(self.heading()).scale(distance);
        self.move_to(p.x, p.y);
    }

    /// Turn counterclockwise (left) by `degrees`.
    fn turn(&mut self, degrees: f64) {
        let h = self.heading();
        self.set_heading(h + degrees);
    }

    /// Sweep an arc of `radius` through `extent` degrees; see [`Arc`].
    fn arc(&mut self, radius: f64, extent: f64) {
        let arc = Arc::new(self.position(), self.heading(), radius, extent);
        let end_heading = arc.end_heading();
        for p in arc {
            self.move_to(p.x, p.y);
        }
        self.set_heading(end_heading);
    }
}

impl<S: PenSurface + ?Sized> PenSurface for &mut S {
    fn position(&self) -> PointD {
        (**self).position()
    }
    fn heading(&self) -> f64 {
        (**self).heading()
    }
    fn is_pen_down(&self) -> bool {
        (**self).is_pen_down()
    }
    fn set_pen_down(&mut self, down: bool) {
        (**self).set_pen_down(down)
    }
    fn move_to(&mut self, x: f64, y: f64) {
        (**self).move_to(x, y)
    }
    fn set_heading(&mut self, degrees: f64) {
        (**self).set_heading(degrees)
    }
    fn set_color(&mut self, color: Rgb8) {
        (**self).set_color(color)
    }
    fn set_line_width(&mut self, width: f64) {
        (**self).set_line_width(width)
    }
    fn forward(&mut self, distance: f64) {
        (**self).forward(distance)
    }
    fn turn(&mut self, degrees: f64) {
        (**self).turn(degrees)
    }
    fn arc(&mut self, radius: f64, extent: f64) {
        (**self).arc(radius, extent)
    }
}

// ============================================================================
// Canvas
// ============================================================================

/// A pen surface that records strokes.
///
/// Pen-down movement extends the open stroke; lifting the pen or changing
/// its color or width closes it, so every [`Stroke`] has one style.
#[derive(Debug, Clone)]
pub struct Canvas {
    drawing: Drawing,
    color_mode: ColorMode,
    position: PointD,
    heading: f64,
    pen_down: bool,
    color: Rgb8,
    line_width: f64,
    stroke_open: bool,
}

impl Canvas {
    /// A blank white canvas with the pen at the origin, heading east, down.
    pub fn new(width: u32, height: u32, color_mode: ColorMode) -> Self {
        Self {
            drawing: Drawing::new(width, height, Rgb8::WHITE),
            color_mode,
            position: PointD::ORIGIN,
            heading: 0.0,
            pen_down: true,
            color: Rgb8::BLACK,
            line_width: 1.0,
            stroke_open: false,
        }
    }

    pub fn width(&self) -> u32 {
        self.drawing.width()
    }

    pub fn height(&self) -> u32 {
        self.drawing.height()
    }

    /// Logical half extents `(width / 2, height / 2)`.
    pub fn half_extents(&self) -> (f64, f64) {
        (self.width() as f64 / 2.0, self.height() as f64 / 2.0)
    }

    pub fn drawing(&self) -> &Drawing {
        &self.drawing
    }

    pub fn color_mode(&self) -> ColorMode {
        self.color_mode
    }

    pub fn color(&self) -> Rgb8 {
        self.color
    }

    pub fn line_width(&self) -> f64 {
        self.line_width
    }

    /// Remove every stroke; pose and pen style are kept.
    pub fn clear(&mut self) {
        self.drawing.clear();
        self.stroke_open = false;
    }

    /// Move to the origin and face east, drawing if the pen is down.
    pub fn home(&mut self) {
        self.move_to(0.0, 0.0);
        self.set_heading(0.0);
    }

    fn close_stroke(&mut self) {
        self.stroke_open = false;
    }
}

impl PenSurface for Canvas {
    fn position(&self) -> PointD {
        self.position
    }

    fn heading(&self) -> f64 {
        self.heading
    }

    fn is_pen_down(&self) -> bool {
        self.pen_down
    }

    fn set_pen_down(&mut self, down: bool) {
        if !down {
            self.close_stroke();
        }
        self.pen_down = down;
    }

    fn move_to(&mut self, x: f64, y: f64) {
        let target = PointD::new(x, y);
        if self.pen_down {
            if !self.stroke_open {
                self.drawing
                    .push(Stroke::new(self.color, self.line_width, self.position));
                self.stroke_open = true;
            }
            if let Some(stroke) = self.drawing.last_mut() {
                stroke.points.push(target);
            }
        }
        self.position = target;
    }

    fn set_heading(&mut self, degrees: f64) {
        self.heading = normalize_heading(degrees);
    }

    fn set_color(&mut self, color: Rgb8) {
        if color != self.color {
            self.close_stroke();
        }
        self.color = color;
    }

    fn set_line_width(&mut self, width: f64) {
        if width != self.line_width {
            self.close_stroke();
        }
        self.line_width = width;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas() -> Canvas {
        Canvas::new(200, 100, ColorMode::Byte)
    }

    #[test]
    fn test_new_defaults() {
        let c = canvas();
        assert_eq!(c.position(), PointD::ORIGIN);
        assert_eq!(c.heading(), 0.0);
        assert!(c.is_pen_down());
        assert_eq!(c.color(), Rgb8::BLACK);
        assert_eq!(c.line_width(), 1.0);
        assert!(c.drawing().is_empty());
        assert_eq!(c.half_extents(), (100.0, 50.0));
    }

    #[test]
    fn test_forward_with_pen_down_records_stroke() {
        let mut c = canvas();
        c.forward(10.0);
        c.turn(90.0);
        c.forward(5.0);
        let strokes = c.drawing().strokes();
        assert_eq!(strokes.len(), 1);
        assert_eq!(strokes[0].points.len(), 3);
        let end = c.position();
        assert!((end.x - 10.0).abs() < 1e-12 && (end.y - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_pen_up_moves_without_drawing() {
        let mut c = canvas();
        c.set_pen_down(false);
        c.move_to(30.0, 40.0);
        assert!(c.drawing().is_empty());
        assert_eq!(c.position(), PointD::new(30.0, 40.0));
    }

    #[test]
    fn test_pen_up_splits_strokes() {
        let mut c = canvas();
        c.forward(10.0);
        c.set_pen_down(false);
        c.forward(10.0);
        c.set_pen_down(true);
        c.forward(10.0);
        let strokes = c.drawing().strokes();
        assert_eq!(strokes.len(), 2);
        assert_eq!(strokes[1].points[0], PointD::new(20.0, 0.0));
    }

    #[test]
    fn test_style_change_splits_strokes() {
        let mut c = canvas();
        c.forward(10.0);
        c.set_color(Rgb8::new(255, 0, 0));
        c.forward(10.0);
        c.set_line_width(3.0);
        c.forward(10.0);
        let strokes = c.drawing().strokes();
        assert_eq!(strokes.len(), 3);
        assert_eq!(strokes[1].color, Rgb8::new(255, 0, 0));
        assert_eq!(strokes[2].width, 3.0);
    }

    #[test]
    fn test_same_style_keeps_stroke_open() {
        let mut c = canvas();
        c.forward(10.0);
        c.set_color(Rgb8::BLACK);
        c.set_line_width(1.0);
        c.forward(10.0);
        assert_eq!(c.drawing().strokes().len(), 1);
    }

    #[test]
    fn test_heading_is_normalized() {
        let mut c = canvas();
        c.turn(-90.0);
        assert_eq!(c.heading(), 270.0);
        c.set_heading(720.0);
        assert_eq!(c.heading(), 0.0);
    }

    #[test]
    fn test_arc_end_pose() {
        let mut c = canvas();
        c.arc(50.0, 90.0);
        let p = c.position();
        assert!((p.x - 50.0).abs() < 1e-9 && (p.y - 50.0).abs() < 1e-9);
        assert!((c.heading() - 90.0).abs() < 1e-12);
        assert!(c.drawing().strokes()[0].points.len() > 3);
    }

    #[test]
    fn test_clear_keeps_pose_and_style() {
        let mut c = canvas();
        c.set_color(Rgb8::new(1, 2, 3));
        c.forward(10.0);
        c.turn(45.0);
        c.clear();
        assert!(c.drawing().is_empty());
        assert_eq!(c.position(), PointD::new(10.0, 0.0));
        assert_eq!(c.heading(), 45.0);
        assert_eq!(c.color(), Rgb8::new(1, 2, 3));
        c.forward(1.0);
        assert_eq!(c.drawing().strokes()[0].points[0], PointD::new(10.0, 0.0));
    }

    #[test]
    fn test_home() {
        let mut c = canvas();
        c.set_pen_down(false);
        c.move_to(10.0, 10.0);
        c.turn(30.0);
        c.home();
        assert_eq!(c.position(), PointD::ORIGIN);
        assert_eq!(c.heading(), 0.0);
        assert!(c.drawing().is_empty());
    }

    #[test]
    fn test_surface_through_mut_ref() {
        fn step<S: PenSurface>(mut s: S) {
            s.forward(5.0);
        }
        let mut c = canvas();
        step(&mut c);
        assert_eq!(c.position(), PointD::new(5.0, 0.0));
    }
}
