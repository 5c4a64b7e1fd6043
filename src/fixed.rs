//! The built-in composition list.

use crate::color::Rgb8;
use crate::error::Result;
use crate::pen::PenSurface;
use crate::rosette::{draw, CompositionConfig};

/// Three rosettes laid out across the default canvas.
pub const FIXED_COMPOSITIONS: [CompositionConfig; 3] = [
    CompositionConfig {
        petal_count: 7,
        size: 140,
        color: Rgb8::new(0, 120, 255),
        line_width: 2,
        center: (-260, 60),
    },
    CompositionConfig {
        petal_count: 10,
        size: 110,
        color: Rgb8::new(255, 105, 0),
        line_width: 3,
        center: (0, -20),
    },
    CompositionConfig {
        petal_count: 3,
        size: 160,
        color: Rgb8::new(60, 200, 120),
        line_width: 4,
        center: (260, 80),
    },
];

/// Draw `compositions` in order onto the same surface. Stops at the first
/// invalid configuration; earlier ones stay drawn.
pub fn draw_fixed<S: PenSurface + ?Sized>(
    surface: &mut S,
    compositions: &[CompositionConfig],
) -> Result<()> {
    for (i, config) in compositions.iter().enumerate() {
        log::info!("[{:03}] {config}", i + 1);
        draw(surface, config)?;
    }
    Ok(())
}
