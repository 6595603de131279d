use std::path::Path;

use anyhow::Context;

use crate::{
    SpritemapError, SpritemapResult,
    scan::guide::GuideImage,
};

/// Decode an encoded raster (PNG, ...) into straight-alpha RGBA8.
pub fn decode_rgba(bytes: &[u8]) -> SpritemapResult<image::RgbaImage> {
    let dyn_img = image::load_from_memory(bytes)
        .map_err(|e| SpritemapError::image(format!("decode image from memory: {e}")))?;
    Ok(dyn_img.to_rgba8())
}

/// Decode a guide image. Pixels are kept exactly as stored (no premultiplication), since marker
/// classification matches on raw channel values.
pub fn decode_guide(bytes: &[u8]) -> SpritemapResult<GuideImage> {
    let rgba = decode_rgba(bytes)?;
    let (width, height) = rgba.dimensions();
    GuideImage::from_rgba(width, height, rgba.into_raw())
}

pub fn load_guide(path: &Path) -> SpritemapResult<GuideImage> {
    let bytes = read_bytes(path)?;
    decode_guide(&bytes)
}

pub fn load_rgba(path: &Path) -> SpritemapResult<image::RgbaImage> {
    let bytes = read_bytes(path)?;
    decode_rgba(&bytes)
}

/// Encode `img` as PNG at `path`, creating parent directories as needed.
pub fn save_png(path: &Path, img: &image::RgbaImage) -> SpritemapResult<()> {
    ensure_parent_dir(path)?;
    img.save_with_format(path, image::ImageFormat::Png)
        .map_err(|e| SpritemapError::image(format!("write png '{}': {e}", path.display())))
}

pub(crate) fn ensure_parent_dir(path: &Path) -> SpritemapResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

fn read_bytes(path: &Path) -> SpritemapResult<Vec<u8>> {
    std::fs::read(path)
        .with_context(|| format!("read image bytes from '{}'", path.display()))
        .map_err(SpritemapError::from)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
