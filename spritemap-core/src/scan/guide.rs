use crate::{
    foundation::core::{Canvas, PixelPos},
    foundation::error::{SpritemapError, SpritemapResult},
    scan::marker::{GuidePixel, MarkerKind, classify},
};

/// Decoded guide image: straight-alpha RGBA8, row-major, no padding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GuideImage {
    width: u32,
    height: u32,
    rgba: Vec<u8>,
}

impl GuideImage {
    /// Wrap a raw RGBA8 buffer. The buffer must hold exactly `width * height * 4` bytes.
    pub fn from_rgba(width: u32, height: u32, rgba: Vec<u8>) -> SpritemapResult<Self> {
        let expected = (width as usize) * (height as usize) * 4;
        if rgba.len() != expected {
            return Err(SpritemapError::validation(format!(
                "guide buffer for {width}x{height} must be {expected} bytes, got {}",
                rgba.len()
            )));
        }
        Ok(Self {
            width,
            height,
            rgba,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn canvas(&self) -> Canvas {
        Canvas {
            width: self.width,
            height: self.height,
        }
    }

    pub fn rgba(&self) -> &[u8] {
        &self.rgba
    }

    /// Every marker pixel in raster order (row-major, top-to-bottom, left-to-right).
    /// Unclassified pixels are skipped.
    pub fn marker_pixels(&self) -> impl Iterator<Item = GuidePixel> + '_ {
        let width = self.width.max(1) as usize;
        self.rgba
            .chunks_exact(4)
            .enumerate()
            .filter_map(move |(i, px)| {
                let kind = classify(px[0], px[1], px[2], px[3]);
                if kind == MarkerKind::None {
                    return None;
                }
                let pos = PixelPos::new((i % width) as u32, (i / width) as u32);
                Some(GuidePixel { pos, kind })
            })
    }
}
