//! A single petal: two mirrored arcs.
//!
//! From the pen's pose the petal starts `size` units out along the heading,
//! so petals placed around a common center radiate outward. The first arc
//! bends left; the turn between the arcs reverses the curvature and the
//! second arc closes the lens shape.

use crate::pen::PenSurface;
use crate::pose::PoseGuard;

/// Turn before the first arc, degrees.
pub const PETAL_TURN: f64 = 60.0;
/// Sweep of each arc, degrees.
pub const PETAL_ARC_SWEEP: f64 = 120.0;
/// Turn between the two arcs, degrees.
pub const PETAL_LOBE_TURN: f64 = 120.0;

/// Draw one petal of arc radius `size` at the surface's current pose.
///
/// Pose-neutral: position, heading and pen state are the same before and
/// after. The current pen color and width are used as they are.
pub fn draw_petal<S: PenSurface + ?Sized>(surface: &mut S, size: f64) {
    let mut pen = PoseGuard::new(surface);

    pen.set_pen_down(false);
    pen.forward(size);
    pen.set_pen_down(true);
    pen.turn(PETAL_TURN);
    pen.arc(size, PETAL_ARC_SWEEP);
    pen.turn(PETAL_LOBE_TURN);
    pen.arc(size, PETAL_ARC_SWEEP);
}
