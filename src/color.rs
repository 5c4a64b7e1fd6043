//! Color types and the pen color mode.
//!
//! - `Rgb8`: the pen color, three 8-bit channels with no alpha
//! - `Rgba8`: the pixel color of the raster buffer, with fixed-point
//!   blending helpers used by the pixel format
//! - `ColorMode`: the channel range in which pen colors are expressed

use crate::basics::CoverType;

// ============================================================================
// Rgb8
// ============================================================================

/// An opaque pen color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const BLACK: Rgb8 = Rgb8::new(0, 0, 0);
    pub const WHITE: Rgb8 = Rgb8::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Opaque pixel color with the same channels.
    pub const fn opaque(self) -> Rgba8 {
        Rgba8::new(self.r, self.g, self.b, 255)
    }

    /// `#rrggbb`, as used in SVG attributes.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<(u8, u8, u8)> for Rgb8 {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl std::fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.r, self.g, self.b)
    }
}

// ============================================================================
// Rgba8
// ============================================================================

/// 8-bit RGBA pixel color (non-premultiplied).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const BASE_SHIFT: u32 = 8;
    pub const BASE_MASK: u32 = (1 << Self::BASE_SHIFT) - 1;
    pub const BASE_MSB: u32 = 1 << (Self::BASE_SHIFT - 1);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn rgb(&self) -> Rgb8 {
        Rgb8::new(self.r, self.g, self.b)
    }

    /// Fixed-point `a * b / 255`, rounded.
    #[inline]
    pub fn multiply(a: u8, b: u8) -> u8 {
        let t: u32 = a as u32 * b as u32 + Self::BASE_MSB;
        (((t >> Self::BASE_SHIFT) + t) >> Self::BASE_SHIFT) as u8
    }

    /// Scale a channel value by an anti-aliasing cover.
    #[inline]
    pub fn mult_cover(a: u8, cover: CoverType) -> u8 {
        Self::multiply(a, cover)
    }

    /// Interpolate from `p` towards `q` by `a / 255`.
    #[inline]
    pub fn lerp(p: u8, q: u8, a: u8) -> u8 {
        let t = (q as i32 - p as i32) * a as i32 + Self::BASE_MSB as i32 - (p > q) as i32;
        (p as i32 + (((t >> Self::BASE_SHIFT) + t) >> Self::BASE_SHIFT)) as u8
    }
}

// ============================================================================
// ColorMode
// ============================================================================

/// Channel range the pen colors of a session are expressed in.
///
/// The drawing session fixes this to [`ColorMode::Byte`] once, before any
/// canvas is opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Channels in `0.0..=1.0`.
    #[default]
    Unit,
    /// Channels in `0..=255`.
    Byte,
}
