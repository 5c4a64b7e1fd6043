//! # rosette
//!
//! Procedural rosette figures drawn with a plotter-style pen.
//!
//! A rosette is `n` lens-shaped petals spaced evenly around a center point,
//! each petal built from two circular arcs. Drawing code targets the
//! [`pen::PenSurface`] trait; the [`pen::Canvas`] implementation records
//! strokes into a [`drawing::Drawing`], which is then exported as an
//! anti-aliased PNG or, when no raster encoder is compiled in, as SVG.
//!
//! ## Pipeline
//!
//! 1. **Composition**: [`sampler`] draws random [`rosette::CompositionConfig`]s,
//!    or [`fixed`] supplies the built-in list.
//! 2. **Drawing**: [`rosette::draw`] and [`petal::draw_petal`] move the pen;
//!    [`pose::PoseGuard`] restores its pose afterwards.
//! 3. **Rasterization**: strokes are outlined ([`math_stroke`]), converted
//!    to coverage cells ([`rasterizer_cells_aa`]) after clipping to the
//!    canvas ([`rasterizer_sl_clip`]), swept into scanlines
//!    ([`rasterizer_scanline_aa`], [`scanline_u`]), and blended into an RGBA
//!    buffer ([`renderer_scanline`], [`renderer_base`], [`pixfmt_rgba`]).
//! 4. **Export**: [`export::ExportPipeline`] crops and encodes the image, or
//!    writes [`svg`] instead.
//!
//! [`batch::BatchRunner`] ties the stages together for reproducible runs.
//!
//! ```
//! use rosette::color::{ColorMode, Rgb8};
//! use rosette::pen::Canvas;
//! use rosette::rosette::{draw, CompositionConfig};
//!
//! let mut canvas = Canvas::new(1000, 700, ColorMode::Byte);
//! let config = CompositionConfig::new(7, 140, Rgb8::new(0, 120, 255), 2, (-260, 60))?;
//! draw(&mut canvas, &config)?;
//! assert_eq!(canvas.drawing().strokes().len(), 7);
//! # Ok::<(), rosette::error::RosetteError>(())
//! ```

// Foundation
pub mod basics;
pub mod color;
pub mod error;

// Pen model
pub mod arc;
pub mod drawing;
pub mod pen;
pub mod pose;
pub mod session;

// Compositions
pub mod fixed;
pub mod petal;
pub mod rosette;
pub mod sampler;

// Rasterization
pub mod bounding_rect;
pub mod clip_liang_barsky;
pub mod math_stroke;
pub mod pixfmt_rgba;
pub mod raster;
pub mod rasterizer_cells_aa;
pub mod rasterizer_scanline_aa;
pub mod rasterizer_sl_clip;
pub mod renderer_base;
pub mod renderer_scanline;
pub mod scanline_u;
pub mod trans_viewport;

// Output
pub mod batch;
pub mod encoder;
pub mod export;
pub mod svg;

pub use batch::{BatchOptions, BatchReport, BatchRunner};
pub use error::{Result, RosetteError};
pub use export::{ExportOptions, ExportOutcome, ExportPipeline};
pub use rosette::CompositionConfig;
pub use session::DrawingSession;
