//! Rosette composition: `n` petals evenly spaced around a center.
//!
//! [`draw`] validates the configuration, draws every petal at an absolute
//! heading slot, and leaves the surface pose exactly as it found it. The
//! pen color and width set for the composition stay on the surface
//! afterwards; callers that draw more on the same surface see them.

use std::ops::RangeInclusive;

use crate::basics::PointD;
use crate::color::Rgb8;
use crate::error::{Result, RosetteError};
use crate::pen::PenSurface;
use crate::petal::draw_petal;
use crate::pose::PoseGuard;

/// Accepted petal counts.
pub const PETAL_COUNT_RANGE: RangeInclusive<u32> = 3..=15;
/// Accepted line widths.
pub const LINE_WIDTH_RANGE: RangeInclusive<u32> = 1..=5;

/// Parameters of one composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompositionConfig {
    pub petal_count: u32,
    /// Arc radius of each petal.
    pub size: u32,
    pub color: Rgb8,
    pub line_width: u32,
    /// Composition center in logical canvas coordinates.
    pub center: (i32, i32),
}

impl CompositionConfig {
    /// Build a validated configuration.
    pub fn new(
        petal_count: u32,
        size: u32,
        color: Rgb8,
        line_width: u32,
        center: (i32, i32),
    ) -> Result<Self> {
        let config = Self {
            petal_count,
            size,
            color,
            line_width,
            center,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check the ranges the composer enforces.
    ///
    /// `size` and `color` are accepted as given.
    pub fn validate(&self) -> Result<()> {
        check_range("petal_count", self.petal_count, &PETAL_COUNT_RANGE)?;
        check_range("line_width", self.line_width, &LINE_WIDTH_RANGE)?;
        Ok(())
    }

    /// Angle between neighbouring petals, degrees.
    pub fn rotation_angle(&self) -> f64 {
        360.0 / self.petal_count as f64
    }

    pub fn center_point(&self) -> PointD {
        PointD::from(self.center)
    }
}

impl std::fmt::Display for CompositionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "petal_count={} size={} color={} line_width={} center=({}, {})",
            self.petal_count, self.size, self.color, self.line_width, self.center.0, self.center.1
        )
    }
}

fn check_range(name: &'static str, value: u32, range: &RangeInclusive<u32>) -> Result<()> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(RosetteError::InvalidParameter {
            name,
            value: value as i64,
            min: *range.start() as i64,
            max: *range.end() as i64,
        })
    }
}

/// Absolute headings of the petals, in drawing order.
///
/// Each heading is `rotation * index`, never a running sum, so the last
/// petal carries no accumulated error.
pub fn petal_headings(petal_count: u32) -> impl Iterator<Item = f64> {
    let rotation = 360.0 / petal_count as f64;
    (0..petal_count).map(move |index| rotation * index as f64)
}

/// Draw a rosette on `surface`.
///
/// Fails with [`RosetteError::InvalidParameter`] before touching the
/// surface when `petal_count` or `line_width` is out of range. On success
/// the pose is restored while the pen color and width keep the
/// composition's values.
pub fn draw<S: PenSurface + ?Sized>(surface: &mut S, config: &CompositionConfig) -> Result<()> {
    config.validate()?;

    let mut pen = PoseGuard::new(surface);
    let center = config.center_point();

    pen.set_pen_down(false);
    pen.move_to(center.x, center.y);
    pen.set_pen_down(true);
    pen.set_line_width(config.line_width as f64);
    pen.set_color(config.color);

    for heading in petal_headings(config.petal_count) {
        pen.set_heading(heading);
        draw_petal(&mut *pen, config.size as f64);
    }

    log::debug!("drew rosette {config}");
    Ok(())
}
