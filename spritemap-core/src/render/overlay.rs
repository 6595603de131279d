use std::{fmt::Write as _, sync::Arc};

use anyhow::Context;

use crate::{
    atlas::model::Atlas,
    foundation::color::{Rgba8, index_hue},
    foundation::core::Canvas,
    foundation::error::{SpritemapError, SpritemapResult},
    render::composite::over_straight_in_place,
};

/// Styling of the debug composite.
#[derive(Clone, Debug, PartialEq)]
pub struct OverlayOptions {
    pub stroke_width: f32,
    pub font_size: f32,
    pub font_family: String,
    pub label_color: Rgba8,
}

impl Default for OverlayOptions {
    fn default() -> Self {
        Self {
            stroke_width: 1.0,
            font_size: 10.0,
            font_family: "sans-serif".to_string(),
            label_color: Rgba8::opaque(0, 0, 0),
        }
    }
}

/// Draws slice outlines and names over the artwork for human review.
///
/// System fonts are loaded once per renderer. When no face matches the requested family, any
/// available face is used; with no fonts at all, labels are silently dropped and outlines still
/// render.
pub struct OverlayRenderer {
    opts: OverlayOptions,
    svg_opts: usvg::Options<'static>,
}

impl OverlayRenderer {
    pub fn new(opts: OverlayOptions) -> Self {
        let mut db = usvg::fontdb::Database::new();
        db.load_system_fonts();
        tracing::debug!(faces = db.len(), "loaded fonts for debug overlay");

        let svg_opts = usvg::Options {
            fontdb: Arc::new(db),
            font_resolver: font_resolver_with_fallback(),
            ..Default::default()
        };
        Self { opts, svg_opts }
    }

    /// Compose `artwork` (placed at the origin, cropped to `canvas`) with one outline and label
    /// per slice. Outline hues are spread evenly by slice index.
    #[tracing::instrument(skip(self, artwork, atlas), fields(slices = atlas.len()))]
    pub fn render(
        &self,
        canvas: Canvas,
        artwork: &image::RgbaImage,
        atlas: &Atlas,
    ) -> SpritemapResult<image::RgbaImage> {
        if canvas.width == 0 || canvas.height == 0 {
            return Err(SpritemapError::validation(
                "debug overlay canvas must be non-empty",
            ));
        }

        let mut out = image::RgbaImage::new(canvas.width, canvas.height);
        image::imageops::replace(&mut out, artwork, 0, 0);

        let svg = overlay_svg(canvas, atlas, &self.opts);
        let tree = usvg::Tree::from_data(svg.as_bytes(), &self.svg_opts)
            .context("parse debug overlay svg")?;

        let mut pixmap = resvg::tiny_skia::Pixmap::new(canvas.width, canvas.height)
            .ok_or_else(|| SpritemapError::image("failed to allocate overlay pixmap"))?;
        resvg::render(
            &tree,
            resvg::tiny_skia::Transform::identity(),
            &mut pixmap.as_mut(),
        );

        over_straight_in_place(&mut out, pixmap.data())?;
        Ok(out)
    }
}

/// SVG document holding the outlines and labels, in canvas pixel space.
pub fn overlay_svg(canvas: Canvas, atlas: &Atlas, opts: &OverlayOptions) -> String {
    let mut svg = String::new();
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = canvas.width,
        h = canvas.height
    );

    let count = atlas.len();
    for (i, slice) in atlas.slices.iter().enumerate() {
        let color = index_hue(i, count).to_hex();
        let _ = writeln!(
            svg,
            r#"  <rect x="{}" y="{}" width="{}" height="{}" fill="none" stroke="{color}" stroke-width="{}"/>"#,
            slice.start.x(),
            slice.start.y(),
            slice.width,
            slice.height,
            opts.stroke_width
        );
        let _ = writeln!(
            svg,
            r#"  <text x="{}" y="{}" font-family="{}" font-size="{}" fill="{}">{}</text>"#,
            slice.start.x(),
            slice.start.y(),
            escape_xml(&opts.font_family),
            opts.font_size,
            opts.label_color.to_hex(),
            escape_xml(&slice.name)
        );
    }

    svg.push_str("</svg>\n");
    svg
}

fn escape_xml(s: &str) -> String {
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

fn font_resolver_with_fallback() -> usvg::FontResolver<'static> {
    use usvg::FontResolver;

    let select_default = FontResolver::default_font_selector();
    FontResolver {
        select_font: Box::new(move |font, fontdb| {
            if let Some(id) = select_default(font, fontdb) {
                return Some(id);
            }
            fontdb.faces().next().map(|f| f.id)
        }),
        select_fallback: FontResolver::default_fallback_selector(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/overlay.rs"]
mod tests;
