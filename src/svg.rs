//! SVG serialization of a [`Drawing`].
//!
//! Used as the vector fallback when no raster encoder is available. The
//! document keeps the full canvas size, paints the background, and emits
//! one `<path>` per stroke in drawing order with round caps and joins.
//! Coordinates are mapped through the same viewport as the rasterizer.

use std::fmt::Write;

use crate::drawing::{Drawing, Stroke};
use crate::trans_viewport::TransViewport;

/// Optional `<title>` and `<desc>` for the document.
#[derive(Debug, Clone, Default)]
pub struct SvgMetadata<'a> {
    pub title: Option<&'a str>,
    pub description: Option<&'a str>,
}

fn xml_escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    out
}

/// `d` attribute of a stroke in pixel space; `None` below two points.
fn stroke_path_d(stroke: &Stroke, viewport: &TransViewport) -> Option<String> {
    if stroke.points.len() < 2 {
        return None;
    }
    let mut d = String::new();
    for (i, p) in stroke.points.iter().enumerate() {
        let p = viewport.transform(*p);
        let cmd = if i == 0 { "M" } else { " L" };
        let _ = write!(d, "{cmd} {:.2} {:.2}", p.x, p.y);
    }
    Some(d)
}

/// Serialize `drawing` as a standalone SVG document.
#[must_use]
pub fn to_svg(drawing: &Drawing, metadata: &SvgMetadata<'_>) -> String {
    let (w, h) = (drawing.width(), drawing.height());
    let viewport = TransViewport::new(w, h);
    let mut out = String::new();

    let _ = writeln!(out, r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
    );
    if let Some(title) = metadata.title {
        let _ = writeln!(out, "  <title>{}</title>", xml_escape(title));
    }
    if let Some(description) = metadata.description {
        let _ = writeln!(out, "  <desc>{}</desc>", xml_escape(description));
    }
    let _ = writeln!(
        out,
        r#"  <rect width="100%" height="100%" fill="{}"/>"#,
        drawing.background().to_hex()
    );

    for stroke in drawing.strokes() {
        if let Some(d) = stroke_path_d(stroke, &viewport) {
            let _ = writeln!(
                out,
                r#"  <path d="{d}" fill="none" stroke="{}" stroke-width="{}" stroke-linecap="round" stroke-linejoin="round"/>"#,
                stroke.color.to_hex(),
                stroke.width
            );
        }
    }

    out.push_str("</svg>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{ColorMode, Rgb8};
    use crate::pen::{Canvas, PenSurface};

    #[test]
    fn test_empty_drawing() {
        let c = Canvas::new(1000, 700, ColorMode::Byte);
        let svg = to_svg(c.drawing(), &SvgMetadata::default());
        assert!(svg.starts_with("<?xml"));
        assert!(svg.contains(r#"width="1000" height="700""#));
        assert!(svg.contains(r#"viewBox="0 0 1000 700""#));
        assert!(svg.contains(r##"fill="#ffffff""##));
        assert!(!svg.contains("<path"));
        assert!(!svg.contains("<title>"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_stroke_is_flipped_into_pixel_space() {
        let mut c = Canvas::new(100, 80, ColorMode::Byte);
        c.set_color(Rgb8::new(0, 120, 255));
        c.set_line_width(3.0);
        c.set_pen_down(false);
        c.move_to(-10.0, 10.0);
        c.set_pen_down(true);
        c.move_to(20.0, -5.0);
        let svg = to_svg(c.drawing(), &SvgMetadata::default());
        assert!(svg.contains(r#"d="M 40.00 30.00 L 70.00 45.00""#), "{svg}");
        assert!(svg.contains(r##"stroke="#0078ff""##));
        assert!(svg.contains(r#"stroke-width="3""#));
        assert!(svg.contains(r#"stroke-linecap="round""#));
    }

    #[test]
    fn test_paths_keep_drawing_order() {
        let mut c = Canvas::new(100, 100, ColorMode::Byte);
        c.forward(5.0);
        c.set_color(Rgb8::new(255, 0, 0));
        c.forward(5.0);
        let svg = to_svg(c.drawing(), &SvgMetadata::default());
        let black = svg.find(r##"stroke="#000000""##).unwrap();
        let red = svg.find(r##"stroke="#ff0000""##).unwrap();
        assert!(black < red);
    }

    #[test]
    fn test_metadata_is_escaped() {
        let c = Canvas::new(10, 10, ColorMode::Byte);
        let meta = SvgMetadata {
            title: Some("img_001"),
            description: Some("petals <7> & \"more\""),
        };
        let svg = to_svg(c.drawing(), &meta);
        assert!(svg.contains("<title>img_001</title>"));
        assert!(svg.contains("<desc>petals &lt;7&gt; &amp; &quot;more&quot;</desc>"));
    }
}
