//! Vector annotations (text, axes lines) collected as SVG and rasterized with `resvg`.

use crate::foundation::core::PixelRect;
use crate::foundation::error::{MovieError, MovieResult};
use crate::render::fonts::{font_database, font_resolver};
use std::fmt::Write as _;

/// Horizontal text alignment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    /// Text starts at the anchor point.
    Start,
    /// Text is centred on the anchor point.
    Middle,
    /// Text ends at the anchor point.
    End,
}

impl Anchor {
    fn as_svg(self) -> &'static str {
        match self {
            Anchor::Start => "start",
            Anchor::Middle => "middle",
            Anchor::End => "end",
        }
    }
}

/// SVG document under construction, in figure pixel coordinates.
#[derive(Clone, Debug)]
pub struct SvgOverlay {
    width: u32,
    height: u32,
    body: String,
}

impl SvgOverlay {
    /// Empty overlay covering a `width × height` figure.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            body: String::new(),
        }
    }

    /// Text with its baseline at `y`.
    pub fn text(&mut self, x: f64, y: f64, content: &str, size_px: f64, anchor: Anchor) {
        let _ = writeln!(
            self.body,
            r#"<text x="{x:.2}" y="{y:.2}" font-size="{size_px:.1}" text-anchor="{}">{}</text>"#,
            anchor.as_svg(),
            escape_xml(content)
        );
    }

    /// Text vertically centred on `y`.
    pub fn text_centered_v(&mut self, x: f64, y: f64, content: &str, size_px: f64, anchor: Anchor) {
        self.text(x, y + 0.35 * size_px, content, size_px, anchor);
    }

    /// Text rotated a quarter turn counter-clockwise, centred on `(x, y)`.
    pub fn text_vertical(&mut self, x: f64, y: f64, content: &str, size_px: f64) {
        let _ = writeln!(
            self.body,
            r#"<text x="{x:.2}" y="{y:.2}" font-size="{size_px:.1}" text-anchor="middle" transform="rotate(-90 {x:.2} {y:.2})">{}</text>"#,
            escape_xml(content)
        );
    }

    /// Straight black line.
    pub fn line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, stroke_px: f64) {
        let _ = writeln!(
            self.body,
            r#"<line x1="{x0:.2}" y1="{y0:.2}" x2="{x1:.2}" y2="{y1:.2}" stroke="black" stroke-width="{stroke_px:.2}"/>"#
        );
    }

    /// Black rectangle outline.
    pub fn outline(&mut self, rect: PixelRect, stroke_px: f64) {
        let _ = writeln!(
            self.body,
            r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="none" stroke="black" stroke-width="{stroke_px:.2}"/>"#,
            rect.x0,
            rect.y0,
            rect.width(),
            rect.height()
        );
    }

    /// Complete SVG document.
    pub fn to_svg(&self) -> String {
        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="sans-serif" fill="black">
{body}</svg>"#,
            w = self.width,
            h = self.height,
            body = self.body
        )
    }

    /// Rasterize to premultiplied RGBA8 of the overlay's size.
    pub fn rasterize(&self) -> MovieResult<Vec<u8>> {
        let opts = usvg::Options {
            fontdb: font_database(),
            font_resolver: font_resolver(),
            ..Default::default()
        };
        let tree = usvg::Tree::from_str(&self.to_svg(), &opts)
            .map_err(|e| MovieError::render(format!("parse overlay svg: {e}")))?;

        let mut pixmap = resvg::tiny_skia::Pixmap::new(self.width, self.height)
            .ok_or_else(|| MovieError::render("failed to allocate overlay pixmap"))?;
        resvg::render(
            &tree,
            resvg::tiny_skia::Transform::identity(),
            &mut pixmap.as_mut(),
        );
        Ok(pixmap.take())
    }
}

/// Escape text for use inside SVG character data.
pub fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/overlay.rs"]
mod tests;
