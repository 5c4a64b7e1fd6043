//! Unpacked scanline: one coverage byte per pixel.

use crate::basics::CoverType;
use crate::rasterizer_scanline_aa::Scanline;

/// A run of adjacent pixels in a scanline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScanlineSpan {
    pub x: i32,
    pub len: u32,
    /// Index of the first coverage byte in the scanline's cover storage.
    pub cover_offset: usize,
}

/// Scanline storing per-pixel coverage.
///
/// Cells and spans must arrive with increasing `x`; touching runs are
/// merged into one span.
#[derive(Debug, Default)]
pub struct ScanlineU8 {
    y: i32,
    next_x: Option<i32>,
    covers: Vec<CoverType>,
    spans: Vec<ScanlineSpan>,
}

impl ScanlineU8 {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spans(&self) -> &[ScanlineSpan] {
        &self.spans
    }

    /// Coverage bytes of `span`.
    pub fn covers(&self, span: &ScanlineSpan) -> &[CoverType] {
        &self.covers[span.cover_offset..span.cover_offset + span.len as usize]
    }

    fn extend(&mut self, x: i32, len: u32, cover: u32) {
        let cover = cover.min(u8::MAX as u32) as CoverType;
        let start = self.covers.len();
        self.covers.extend(std::iter::repeat(cover).take(len as usize));
        let touching = self.next_x == Some(x);
        match self.spans.last_mut() {
            Some(last) if touching => last.len += len,
            _ => self.spans.push(ScanlineSpan {
                x,
                len,
                cover_offset: start,
            }),
        }
        self.next_x = Some(x + len as i32);
    }
}

impl Scanline for ScanlineU8 {
    fn reset_spans(&mut self) {
        self.next_x = None;
        self.covers.clear();
        self.spans.clear();
    }

    fn add_cell(&mut self, x: i32, cover: u32) {
        self.extend(x, 1, cover);
    }

    fn add_span(&mut self, x: i32, len: u32, cover: u32) {
        if len > 0 {
            self.extend(x, len, cover);
        }
    }

    fn finalize(&mut self, y: i32) {
        self.y = y;
    }

    fn num_spans(&self) -> usize {
        self.spans.len()
    }

    fn y(&self) -> i32 {
        self.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjacent_runs_merge() {
        let mut sl = ScanlineU8::new();
        sl.add_cell(3, 100);
        sl.add_span(4, 3, 255);
        sl.add_cell(7, 40);
        sl.finalize(9);
        assert_eq!(sl.num_spans(), 1);
        assert_eq!(sl.y(), 9);
        let span = sl.spans()[0];
        assert_eq!((span.x, span.len), (3, 5));
        assert_eq!(sl.covers(&span), &[100, 255, 255, 255, 40]);
    }

    #[test]
    fn test_gap_starts_new_span() {
        let mut sl = ScanlineU8::new();
        sl.add_cell(0, 10);
        sl.add_cell(5, 20);
        assert_eq!(sl.num_spans(), 2);
        let second = sl.spans()[1];
        assert_eq!(second.x, 5);
        assert_eq!(sl.covers(&second), &[20]);
    }

    #[test]
    fn test_reset_spans() {
        let mut sl = ScanlineU8::new();
        sl.add_span(0, 4, 255);
        sl.reset_spans();
        assert_eq!(sl.num_spans(), 0);
        sl.add_cell(4, 1);
        assert_eq!(sl.spans()[0].x, 4);
        assert_eq!(sl.spans()[0].cover_offset, 0);
    }
}
