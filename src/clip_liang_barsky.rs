//! Outcodes of a point against a clip box.

use crate::basics::Rect;

pub const CLIPPING_FLAGS_X1_CLIPPED: u32 = 4;
pub const CLIPPING_FLAGS_X2_CLIPPED: u32 = 1;
pub const CLIPPING_FLAGS_Y1_CLIPPED: u32 = 8;
pub const CLIPPING_FLAGS_Y2_CLIPPED: u32 = 2;
pub const CLIPPING_FLAGS_X_CLIPPED: u32 = CLIPPING_FLAGS_X1_CLIPPED | CLIPPING_FLAGS_X2_CLIPPED;
pub const CLIPPING_FLAGS_Y_CLIPPED: u32 = CLIPPING_FLAGS_Y1_CLIPPED | CLIPPING_FLAGS_Y2_CLIPPED;

/// Outcode of `(x, y)`:
///
/// ```text
///        |        |
///  0110  |  0010  | 0011
///        |        |
/// -------+--------+-------- clip_box.y2
///        |        |
///  0100  |  0000  | 0001
///        |        |
/// -------+--------+-------- clip_box.y1
///        |        |
///  1100  |  1000  | 1001
///        |        |
///  clip_box.x1  clip_box.x2
/// ```
#[inline]
pub fn clipping_flags<T: Copy + PartialOrd>(x: T, y: T, clip_box: &Rect<T>) -> u32 {
    clipping_flags_x(x, clip_box) | clipping_flags_y(y, clip_box)
}

#[inline]
pub fn clipping_flags_x<T: Copy + PartialOrd>(x: T, clip_box: &Rect<T>) -> u32 {
    (x > clip_box.x2) as u32 | (((x < clip_box.x1) as u32) << 2)
}

#[inline]
pub fn clipping_flags_y<T: Copy + PartialOrd>(y: T, clip_box: &Rect<T>) -> u32 {
    (((y > clip_box.y2) as u32) << 1) | (((y < clip_box.y1) as u32) << 3)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basics::RectD;

    #[test]
    fn test_flags_around_box() {
        let b = RectD::new(0.0, 0.0, 10.0, 10.0);
        assert_eq!(clipping_flags(5.0, 5.0, &b), 0);
        assert_eq!(clipping_flags(11.0, 5.0, &b), CLIPPING_FLAGS_X2_CLIPPED);
        assert_eq!(clipping_flags(-1.0, 5.0, &b), CLIPPING_FLAGS_X1_CLIPPED);
        assert_eq!(clipping_flags(5.0, 11.0, &b), CLIPPING_FLAGS_Y2_CLIPPED);
        assert_eq!(clipping_flags(5.0, -1.0, &b), CLIPPING_FLAGS_Y1_CLIPPED);
        assert_eq!(clipping_flags(-1.0, 11.0, &b), 0b0110);
        assert_eq!(clipping_flags(11.0, -1.0, &b), 0b1001);
    }

    #[test]
    fn test_edges_are_inside() {
        let b = RectD::new(0.0, 0.0, 10.0, 10.0);
        assert_eq!(clipping_flags(0.0, 10.0, &b), 0);
        assert_eq!(clipping_flags(10.0, 0.0, &b), 0);
    }
}
