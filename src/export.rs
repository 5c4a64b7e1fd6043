//! Writing a drawing to disk.
//!
//! With a raster encoder the drawing is rasterized, cropped to its content,
//! and encoded to the requested path. Without one the SVG form is written
//! next to it with an `.svg` extension and a warning is logged; the caller
//! still gets `Ok`.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::bounding_rect::content_bounds;
use crate::drawing::Drawing;
use crate::encoder::{default_encoder, RasterEncoder};
use crate::error::Result;
use crate::pixfmt_rgba::{PixelBuffer, PixelFormat};
use crate::raster::DrawingRasterizer;
use crate::svg::{to_svg, SvgMetadata};

/// Export behavior switches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExportOptions {
    /// Crop raster output to the bounding box of non-background pixels.
    pub crop_to_content: bool,
    /// Round-join approximation scale passed to the rasterizer.
    pub approximation_scale: f64,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            crop_to_content: true,
            approximation_scale: 1.0,
        }
    }
}

/// What an export produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// An encoded raster image at `path`.
    Raster { path: PathBuf, width: u32, height: u32 },
    /// No encoder was available; the SVG form was written to `path`.
    VectorFallback { path: PathBuf },
}

impl ExportOutcome {
    pub fn path(&self) -> &Path {
        match self {
            ExportOutcome::Raster { path, .. } | ExportOutcome::VectorFallback { path } => path,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, ExportOutcome::VectorFallback { .. })
    }
}

/// Drawing-to-file exporter.
pub struct ExportPipeline {
    encoder: Option<Box<dyn RasterEncoder>>,
    options: ExportOptions,
}

impl Default for ExportPipeline {
    fn default() -> Self {
        Self::new(default_encoder(), ExportOptions::default())
    }
}

impl std::fmt::Debug for ExportPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExportPipeline")
            .field("encoder", &self.encoder.as_ref().map(|e| e.name()))
            .field("options", &self.options)
            .finish()
    }
}

impl ExportPipeline {
    pub fn new(encoder: Option<Box<dyn RasterEncoder>>, options: ExportOptions) -> Self {
        Self { encoder, options }
    }

    /// A pipeline that always writes SVG.
    pub fn vector_only() -> Self {
        Self::new(None, ExportOptions::default())
    }

    pub fn has_encoder(&self) -> bool {
        self.encoder.is_some()
    }

    pub fn options(&self) -> &ExportOptions {
        &self.options
    }

    /// Rasterize `drawing` and apply the crop setting.
    pub fn render(&self, drawing: &Drawing) -> PixelBuffer {
        let mut rasterizer = DrawingRasterizer::new();
        rasterizer.set_approximation_scale(self.options.approximation_scale);
        let image = rasterizer.rasterize(drawing);
        if !self.options.crop_to_content {
            return image;
        }
        match content_bounds(&image, drawing.background()) {
            Some(r) => image.crop(&r),
            None => image,
        }
    }

    /// Write `drawing` to `path`, creating parent directories.
    pub fn export(&self, drawing: &Drawing, path: &Path) -> Result<ExportOutcome> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let Some(encoder) = self.encoder.as_deref() else {
            return self.export_vector(drawing, path);
        };

        let image = self.render(drawing);
        let file = File::create(path)?;
        if let Err(e) = write_raster(encoder, &image, file) {
            // No truncated image is left at `path`.
            if let Err(rm) = fs::remove_file(path) {
                log::warn!("could not remove partial {}: {rm}", path.display());
            }
            return Err(e);
        }

        log::debug!(
            "wrote {} {}x{} to {}",
            encoder.name(),
            image.width(),
            image.height(),
            path.display()
        );
        Ok(ExportOutcome::Raster {
            path: path.to_path_buf(),
            width: image.width(),
            height: image.height(),
        })
    }

    fn export_vector(&self, drawing: &Drawing, path: &Path) -> Result<ExportOutcome> {
        let svg_path = path.with_extension("svg");
        let title = path.file_stem().and_then(|s| s.to_str());
        let svg = to_svg(
            drawing,
            &SvgMetadata {
                title,
                description: None,
            },
        );
        fs::write(&svg_path, svg)?;
        log::warn!(
            "no raster encoder available; wrote vector drawing to {}",
            svg_path.display()
        );
        Ok(ExportOutcome::VectorFallback { path: svg_path })
    }
}

fn write_raster(encoder: &dyn RasterEncoder, image: &PixelBuffer, file: File) -> Result<()> {
    let mut out = BufWriter::new(file);
    encoder.encode(image, &mut out)?;
    out.flush()?;
    Ok(())
}
