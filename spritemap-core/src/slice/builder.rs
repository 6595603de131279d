use crate::{
    foundation::core::{Canvas, PixelPos, PixelRect},
    foundation::error::{SpritemapError, SpritemapResult},
    scan::scanner::MarkerSet,
};

/// A paired rectangle and the landmarks inside it, before naming.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawSlice {
    /// Position in processing order (before the final reversal). Auto-generated names use it.
    pub seq: usize,
    pub start: PixelPos,
    pub end: PixelPos,
    /// Sorted by ascending y.
    pub landmarks: Vec<PixelPos>,
}

impl RawSlice {
    pub fn rect(&self) -> PixelRect {
        PixelRect {
            start: self.start,
            end: self.end,
        }
    }
}

/// Pair each region start with a region end and gather the landmarks inside the resulting
/// rectangle.
///
/// Starts are processed nearest-to-bottom-right first. Each start takes the closest remaining end
/// (Manhattan distance) that lies at or below-right of it, ties going to the earliest end in scan
/// order. Landmarks are claimed by the first rectangle that contains them. The emitted list is
/// reversed at the end, so slices near the top-left come first.
#[tracing::instrument(
    skip(markers),
    fields(
        starts = markers.region_starts.len(),
        landmarks = markers.landmarks.len()
    )
)]
pub fn build_slices(markers: MarkerSet, canvas: Canvas) -> SpritemapResult<Vec<RawSlice>> {
    markers.validate()?;

    let MarkerSet {
        mut region_starts,
        region_ends: mut ends,
        landmarks: mut pending_landmarks,
    } = markers;

    // Stable: equal distances keep raster order.
    region_starts.sort_by_key(|&p| canvas.distance_from_bottom_right(p));

    let mut out = Vec::with_capacity(region_starts.len());
    for (seq, start) in region_starts.into_iter().enumerate() {
        let end_idx = nearest_dominating(start, &ends).ok_or_else(|| {
            SpritemapError::UnpairedRegionStart {
                x: start.x(),
                y: start.y(),
            }
        })?;
        let end = ends.remove(end_idx);
        let rect = PixelRect { start, end };

        let (mut landmarks, rest): (Vec<_>, Vec<_>) = pending_landmarks
            .into_iter()
            .partition(|&p| rect.contains(p));
        pending_landmarks = rest;
        // Same-row landmarks end up right-to-left.
        landmarks.reverse();
        landmarks.sort_by_key(|p| p.y());

        out.push(RawSlice {
            seq,
            start,
            end,
            landmarks,
        });
    }

    if !pending_landmarks.is_empty() {
        tracing::debug!(
            count = pending_landmarks.len(),
            "landmarks outside every slice were ignored"
        );
    }

    out.reverse();
    Ok(out)
}

/// Index of the closest candidate at or below-right of `start`; first wins on ties.
fn nearest_dominating(start: PixelPos, candidates: &[PixelPos]) -> Option<usize> {
    let mut best: Option<(usize, u64)> = None;
    for (i, &c) in candidates.iter().enumerate() {
        if !start.dominated_by(c) {
            continue;
        }
        let d = start.manhattan(c);
        if best.is_none_or(|(_, bd)| d < bd) {
            best = Some((i, d));
        }
    }
    best.map(|(i, _)| i)
}

#[cfg(test)]
#[path = "../../tests/unit/slice/builder.rs"]
mod tests;
