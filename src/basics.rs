//! Foundation types, constants, and angle helpers.
//!
//! Everything else in the crate depends on these: points and rectangles,
//! the fixed-point subpixel constants shared by the rasterizer, and the
//! degree-based angle conventions of the pen model.

use core::ops::{Add, Sub};

// ============================================================================
// Rounding
// ============================================================================

/// Round to the nearest integer, half away from zero.
#[inline]
pub fn iround(v: f64) -> i32 {
    if v < 0.0 {
        (v - 0.5) as i32
    } else {
        (v + 0.5) as i32
    }
}

/// Convert a pixel coordinate to 24.8 fixed point.
#[inline]
pub fn poly_coord(v: f64) -> i32 {
    iround(v * POLY_SUBPIXEL_SCALE as f64)
}

// ============================================================================
// Coverage and subpixel constants
// ============================================================================

/// Anti-aliasing coverage of one pixel, 0 (none) to 255 (full).
pub type CoverType = u8;

pub const COVER_SHIFT: u32 = 8;
pub const COVER_SIZE: u32 = 1 << COVER_SHIFT;
pub const COVER_MASK: u32 = COVER_SIZE - 1;
pub const COVER_FULL: CoverType = COVER_MASK as CoverType;

/// Fractional bits of rasterizer coordinates.
pub const POLY_SUBPIXEL_SHIFT: u32 = 8;
pub const POLY_SUBPIXEL_SCALE: u32 = 1 << POLY_SUBPIXEL_SHIFT;
pub const POLY_SUBPIXEL_MASK: u32 = POLY_SUBPIXEL_SCALE - 1;

// ============================================================================
// Angles
// ============================================================================

pub const PI: f64 = std::f64::consts::PI;

#[inline]
pub fn deg2rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Fold a heading in degrees into `[0, 360)`.
#[inline]
pub fn normalize_heading(deg: f64) -> f64 {
    let h = deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs.
    if h >= 360.0 {
        0.0
    } else {
        h
    }
}

/// Unit vector for a heading in degrees (0 = +x, counterclockwise).
#[inline]
pub fn heading_vector(deg: f64) -> PointD {
    let a = deg2rad(deg);
    PointD::new(a.cos(), a.sin())
}

// ============================================================================
// Point
// ============================================================================

/// A point in logical or pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointD {
    pub x: f64,
    pub y: f64,
}

impl PointD {
    pub const ORIGIN: PointD = PointD { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn scale(self, k: f64) -> Self {
        Self::new(self.x * k, self.y * k)
    }

    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn distance(self, other: PointD) -> f64 {
        (other - self).length()
    }

    /// Left-hand perpendicular (rotated +90°).
    pub fn perp(self) -> Self {
        Self::new(-self.y, self.x)
    }
}

impl Add for PointD {
    type Output = PointD;
    fn add(self, rhs: PointD) -> PointD {
        PointD::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for PointD {
    type Output = PointD;
    fn sub(self, rhs: PointD) -> PointD {
        PointD::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<(f64, f64)> for PointD {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<(i32, i32)> for PointD {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x as f64, y as f64)
    }
}

// ============================================================================
// Rect
// ============================================================================

/// An axis-aligned rectangle defined by two inclusive corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect<T: Copy> {
    pub x1: T,
    pub y1: T,
    pub x2: T,
    pub y2: T,
}

impl<T: Copy + PartialOrd> Rect<T> {
    pub fn new(x1: T, y1: T, x2: T, y2: T) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub fn is_valid(&self) -> bool {
        self.x1 <= self.x2 && self.y1 <= self.y2
    }

    pub fn hit_test(&self, x: T, y: T) -> bool {
        x >= self.x1 && x <= self.x2 && y >= self.y1 && y <= self.y2
    }

    /// Grow to include `(x, y)`.
    pub fn add_point(&mut self, x: T, y: T) {
        if x < self.x1 {
            self.x1 = x;
        }
        if y < self.y1 {
            self.y1 = y;
        }
        if x > self.x2 {
            self.x2 = x;
        }
        if y > self.y2 {
            self.y2 = y;
        }
    }
}

impl Rect<i32> {
    /// Width in pixels (corners are inclusive).
    pub fn width(&self) -> u32 {
        (self.x2 - self.x1 + 1).max(0) as u32
    }

    pub fn height(&self) -> u32 {
        (self.y2 - self.y1 + 1).max(0) as u32
    }
}

pub type RectI = Rect<i32>;
pub type RectD = Rect<f64>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iround() {
        assert_eq!(iround(1.5), 2);
        assert_eq!(iround(-1.5), -2);
        assert_eq!(iround(0.49), 0);
    }

    #[test]
    fn test_poly_coord() {
        assert_eq!(poly_coord(1.0), 256);
        assert_eq!(poly_coord(0.5), 128);
        assert_eq!(poly_coord(-2.0), -512);
    }

    #[test]
    fn test_normalize_heading() {
        assert_eq!(normalize_heading(0.0), 0.0);
        assert_eq!(normalize_heading(360.0), 0.0);
        assert_eq!(normalize_heading(-90.0), 270.0);
        assert_eq!(normalize_heading(725.0), 5.0);
        assert!(normalize_heading(-1e-15) < 360.0);
    }

    #[test]
    fn test_normalize_heading_is_idempotent() {
        for h in [0.0, 51.428_571_428_571_43, 120.0, 359.999] {
            assert_eq!(normalize_heading(normalize_heading(h)), normalize_heading(h));
        }
    }

    #[test]
    fn test_heading_vector() {
        let east = heading_vector(0.0);
        assert!((east.x - 1.0).abs() < 1e-12 && east.y.abs() < 1e-12);
        let north = heading_vector(90.0);
        assert!(north.x.abs() < 1e-12 && (north.y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_point_ops() {
        let a = PointD::new(1.0, 2.0);
        let b = PointD::new(4.0, 6.0);
        assert_eq!(b - a, PointD::new(3.0, 4.0));
        assert_eq!(a + b, PointD::new(5.0, 8.0));
        assert!((a.distance(b) - 5.0).abs() < 1e-12);
        assert_eq!(PointD::new(1.0, 0.0).perp(), PointD::new(0.0, 1.0));
    }

    #[test]
    fn test_rect_add_point() {
        let mut r = RectI::new(5, 5, 5, 5);
        r.add_point(2, 9);
        r.add_point(7, 1);
        assert_eq!(r, RectI::new(2, 1, 7, 9));
        assert_eq!(r.width(), 6);
        assert_eq!(r.height(), 9);
        assert!(r.hit_test(3, 3));
        assert!(!r.hit_test(8, 3));
    }

    #[test]
    fn test_rect_is_valid() {
        assert!(RectD::new(0.0, 0.0, 1.0, 1.0).is_valid());
        assert!(!RectD::new(1.0, 0.0, 0.0, 1.0).is_valid());
    }
}
