//! Pen pose snapshots and scoped restoration.
//!
//! [`Pose`] captures position, heading and pen state; [`PoseGuard`] borrows a
//! surface, captures its pose, and puts it back when dropped. Drawing code
//! works through the guard, so the pose is restored on every exit path.

use std::ops::{Deref, DerefMut};

use crate::basics::PointD;
use crate::pen::PenSurface;

/// Snapshot of a pen's drawing state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub position: PointD,
    pub heading: f64,
    pub pen_down: bool,
}

impl Pose {
    pub fn capture<S: PenSurface + ?Sized>(surface: &S) -> Self {
        Self {
            position: surface.position(),
            heading: surface.heading(),
            pen_down: surface.is_pen_down(),
        }
    }

    /// Return the surface to this pose without drawing: lift the pen, move
    /// back, reset the heading, and lower the pen only if it was down.
    pub fn restore<S: PenSurface + ?Sized>(&self, surface: &mut S) {
        surface.set_pen_down(false);
        surface.move_to(self.position.x, self.position.y);
        surface.set_heading(self.heading);
        if self.pen_down {
            surface.set_pen_down(true);
        }
    }
}

/// Exclusive borrow of a surface that restores the captured pose on drop.
pub struct PoseGuard<'a, S: PenSurface + ?Sized> {
    surface: &'a mut S,
    saved: Pose,
}

impl<'a, S: PenSurface + ?Sized> PoseGuard<'a, S> {
    pub fn new(surface: &'a mut S) -> Self {
        let saved = Pose::capture(&*surface);
        Self { surface, saved }
    }

    pub fn saved(&self) -> Pose {
        self.saved
    }
}

impl<S: PenSurface + ?Sized> Deref for PoseGuard<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        self.surface
    }
}

impl<S: PenSurface + ?Sized> DerefMut for PoseGuard<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        self.surface
    }
}

impl<S: PenSurface + ?Sized> Drop for PoseGuard<'_, S> {
    fn drop(&mut self) {
        self.saved.restore(&mut *self.surface);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::ColorMode;
    use crate::pen::Canvas;

    #[test]
    fn test_capture() {
        let mut c = Canvas::new(100, 100, ColorMode::Byte);
        c.set_pen_down(false);
        c.move_to(3.0, 4.0);
        c.set_heading(30.0);
        let pose = Pose::capture(&c);
        assert_eq!(pose.position, PointD::new(3.0, 4.0));
        assert_eq!(pose.heading, 30.0);
        assert!(!pose.pen_down);
    }

    #[test]
    fn test_restore_does_not_draw() {
        let mut c = Canvas::new(100, 100, ColorMode::Byte);
        let pose = Pose::capture(&c);
        c.forward(20.0);
        let strokes = c.drawing().strokes().len();
        pose.restore(&mut c);
        assert_eq!(c.drawing().strokes().len(), strokes);
        assert_eq!(Pose::capture(&c), pose);
    }

    #[test]
    fn test_restore_keeps_pen_up() {
        let mut c = Canvas::new(100, 100, ColorMode::Byte);
        c.set_pen_down(false);
        let pose = Pose::capture(&c);
        c.set_pen_down(true);
        c.forward(5.0);
        pose.restore(&mut c);
        assert!(!c.is_pen_down());
    }

    #[test]
    fn test_guard_restores_on_drop() {
        let mut c = Canvas::new(100, 100, ColorMode::Byte);
        c.set_heading(10.0);
        let before = Pose::capture(&c);
        {
            let mut pen = PoseGuard::new(&mut c);
            assert_eq!(pen.saved(), before);
            pen.forward(30.0);
            pen.turn(77.0);
            pen.set_pen_down(false);
        }
        assert_eq!(Pose::capture(&c), before);
        assert_eq!(c.drawing().strokes().len(), 1);
    }

    #[test]
    fn test_guard_restores_on_early_return() {
        fn bail(surface: &mut Canvas, second: Option<f64>) -> Option<()> {
            let mut pen = PoseGuard::new(surface);
            pen.forward(12.0);
            pen.forward(second?);
            Some(())
        }
        let mut c = Canvas::new(100, 100, ColorMode::Byte);
        let before = Pose::capture(&c);
        assert!(bail(&mut c, None).is_none());
        assert_eq!(Pose::capture(&c), before);
    }
}
