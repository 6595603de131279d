use crate::foundation::core::PixelPos;

/// Exact RGBA value marking the top-left corner of a region.
pub const REGION_START_RGBA: [u8; 4] = [255, 0, 0, 255];
/// Exact RGBA value marking the bottom-right corner of a region.
pub const REGION_END_RGBA: [u8; 4] = [0, 255, 0, 255];
/// Exact RGBA value marking a landmark inside a region.
pub const LANDMARK_RGBA: [u8; 4] = [255, 255, 0, 255];

/// Category of a guide-image pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MarkerKind {
    RegionStart,
    RegionEnd,
    Landmark,
    None,
}

/// Classify a single pixel by exact 4-channel match. Near-misses (anti-aliased edges, partial
/// alpha) are `None`.
pub fn classify(r: u8, g: u8, b: u8, a: u8) -> MarkerKind {
    match [r, g, b, a] {
        REGION_START_RGBA => MarkerKind::RegionStart,
        REGION_END_RGBA => MarkerKind::RegionEnd,
        LANDMARK_RGBA => MarkerKind::Landmark,
        _ => MarkerKind::None,
    }
}

/// A classified guide-image coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GuidePixel {
    pub pos: PixelPos,
    pub kind: MarkerKind,
}

#[cfg(test)]
#[path = "../../tests/unit/scan/marker.rs"]
mod tests;
