//! Raster encoders.
//!
//! Export holds an optional [`RasterEncoder`]. When the `png` feature is
//! enabled [`default_encoder`] returns a [`PngEncoder`]; without it there is
//! no encoder and export falls back to SVG.

use std::io::Write;

use crate::error::Result;
use crate::pixfmt_rgba::PixelBuffer;

/// Writes a pixel buffer in some raster file format.
pub trait RasterEncoder {
    /// Short format name used in log messages.
    fn name(&self) -> &'static str;

    fn encode(&self, image: &PixelBuffer, out: &mut dyn Write) -> Result<()>;
}

/// 8-bit RGBA PNG output.
#[cfg(feature = "png")]
#[derive(Debug, Clone, Copy, Default)]
pub struct PngEncoder {
    compression: PngCompression,
}

/// Trade-off between file size and encoding time.
#[cfg(feature = "png")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PngCompression {
    #[default]
    Default,
    Fast,
    Best,
}

#[cfg(feature = "png")]
impl PngEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_compression(compression: PngCompression) -> Self {
        Self { compression }
    }
}

#[cfg(feature = "png")]
fn encoding_error(err: png::EncodingError) -> crate::error::RosetteError {
    use crate::error::RosetteError;
    match err {
        png::EncodingError::IoError(e) => RosetteError::Io(e),
        other => RosetteError::Encode(other.to_string()),
    }
}

#[cfg(feature = "png")]
impl RasterEncoder for PngEncoder {
    fn name(&self) -> &'static str {
        "png"
    }

    fn encode(&self, image: &PixelBuffer, out: &mut dyn Write) -> Result<()> {
        use crate::pixfmt_rgba::PixelFormat;

        let mut encoder = png::Encoder::new(out, image.width(), image.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(match self.compression {
            PngCompression::Default => png::Compression::Default,
            PngCompression::Fast => png::Compression::Fast,
            PngCompression::Best => png::Compression::Best,
        });
        let mut writer = encoder.write_header().map_err(encoding_error)?;
        writer.write_image_data(image.data()).map_err(encoding_error)?;
        writer.finish().map_err(encoding_error)?;
        Ok(())
    }
}

/// The encoder compiled into this build, if any.
pub fn default_encoder() -> Option<Box<dyn RasterEncoder>> {
    #[cfg(feature = "png")]
    {
        Some(Box::new(PngEncoder::new()))
    }
    #[cfg(not(feature = "png"))]
    {
        None
    }
}

#[cfg(all(test, feature = "png"))]
mod tests {
    use super::*;
    use crate::color::{Rgb8, Rgba8};
    use crate::pixfmt_rgba::PixelFormat;

    fn decode(bytes: &[u8]) -> (png::OutputInfo, Vec<u8>) {
        let decoder = png::Decoder::new(bytes);
        let mut reader = decoder.read_info().unwrap();
        let mut buf = vec![0; reader.output_buffer_size()];
        let info = reader.next_frame(&mut buf).unwrap();
        buf.truncate(info.buffer_size());
        (info, buf)
    }

    #[test]
    fn test_default_encoder_is_png() {
        let enc = default_encoder().unwrap();
        assert_eq!(enc.name(), "png");
    }

    #[test]
    fn test_png_round_trip_pixels() {
        let mut image = PixelBuffer::new(3, 2, Rgb8::WHITE);
        image.copy_pixel(1, 1, &Rgba8::new(0, 120, 255, 255));
        let mut bytes = Vec::new();
        PngEncoder::new().encode(&image, &mut bytes).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");

        let (info, data) = decode(&bytes);
        assert_eq!((info.width, info.height), (3, 2));
        assert_eq!(info.color_type, png::ColorType::Rgba);
        assert_eq!(data, image.data());
    }

    #[test]
    fn test_encoding_is_deterministic() {
        let image = PixelBuffer::new(16, 16, Rgb8::new(9, 8, 7));
        let mut a = Vec::new();
        let mut b = Vec::new();
        let enc = PngEncoder::with_compression(PngCompression::Best);
        enc.encode(&image, &mut a).unwrap();
        enc.encode(&image, &mut b).unwrap();
        assert_eq!(a, b);
    }
}
