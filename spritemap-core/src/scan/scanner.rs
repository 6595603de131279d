use crate::{
    foundation::core::PixelPos,
    foundation::error::{SpritemapError, SpritemapResult},
    scan::guide::GuideImage,
    scan::marker::MarkerKind,
};

/// Marker coordinates extracted from a guide image, one raster-ordered sequence per kind.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MarkerSet {
    pub region_starts: Vec<PixelPos>,
    pub region_ends: Vec<PixelPos>,
    pub landmarks: Vec<PixelPos>,
}

impl MarkerSet {
    /// Pairing requires exactly one region end per region start.
    pub fn validate(&self) -> SpritemapResult<()> {
        if self.region_starts.len() != self.region_ends.len() {
            return Err(SpritemapError::MarkerCountMismatch {
                region_start: self.region_starts.len(),
                region_end: self.region_ends.len(),
                landmark: self.landmarks.len(),
            });
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.region_starts.is_empty() && self.region_ends.is_empty() && self.landmarks.is_empty()
    }
}

/// Classify every pixel of `guide` without validating the result.
pub fn scan_markers(guide: &GuideImage) -> MarkerSet {
    let mut out = MarkerSet::default();
    for px in guide.marker_pixels() {
        match px.kind {
            MarkerKind::RegionStart => out.region_starts.push(px.pos),
            MarkerKind::RegionEnd => out.region_ends.push(px.pos),
            MarkerKind::Landmark => out.landmarks.push(px.pos),
            MarkerKind::None => {}
        }
    }
    out
}

/// Classify every pixel of `guide` and check the start/end balance.
#[tracing::instrument(skip(guide), fields(width = guide.width(), height = guide.height()))]
pub fn scan(guide: &GuideImage) -> SpritemapResult<MarkerSet> {
    let markers = scan_markers(guide);
    tracing::debug!(
        region_starts = markers.region_starts.len(),
        region_ends = markers.region_ends.len(),
        landmarks = markers.landmarks.len(),
        "scanned guide image"
    );
    markers.validate()?;
    Ok(markers)
}

#[cfg(test)]
#[path = "../../tests/unit/scan/scanner.rs"]
mod tests;
