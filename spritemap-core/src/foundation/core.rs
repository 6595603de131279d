use crate::foundation::error::{SpritemapError, SpritemapResult};

/// Integer pixel coordinate in guide-image space.
///
/// Serialized as a two-element array `[x, y]`, which is the shape downstream consumers of the
/// mapping file index into.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct PixelPos(pub u32, pub u32);

impl PixelPos {
    /// Build a coordinate from column and row.
    pub fn new(x: u32, y: u32) -> Self {
        Self(x, y)
    }

    /// Column (0 = left edge).
    pub fn x(self) -> u32 {
        self.0
    }

    /// Row (0 = top edge).
    pub fn y(self) -> u32 {
        self.1
    }

    /// Manhattan distance between two coordinates.
    pub fn manhattan(self, other: Self) -> u64 {
        u64::from(self.0.abs_diff(other.0)) + u64::from(self.1.abs_diff(other.1))
    }

    /// `true` when `other` lies at or below-right of `self` on both axes.
    pub fn dominated_by(self, other: Self) -> bool {
        other.0 >= self.0 && other.1 >= self.1
    }
}

impl From<(u32, u32)> for PixelPos {
    fn from((x, y): (u32, u32)) -> Self {
        Self(x, y)
    }
}

/// Dimensions of a raster image in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    /// Distance of a pixel from the canvas' bottom-right corner `(width, height)`.
    pub fn distance_from_bottom_right(self, p: PixelPos) -> u64 {
        p.manhattan(PixelPos(self.width, self.height))
    }
}

/// Inclusive pixel rectangle (`start` top-left, `end` bottom-right).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PixelRect {
    pub start: PixelPos,
    pub end: PixelPos, // inclusive
}

impl PixelRect {
    pub fn new(start: PixelPos, end: PixelPos) -> SpritemapResult<Self> {
        if !start.dominated_by(end) {
            return Err(SpritemapError::validation(format!(
                "rect end ({}, {}) must be at or below-right of start ({}, {})",
                end.0, end.1, start.0, start.1
            )));
        }
        Ok(Self { start, end })
    }

    pub fn width(self) -> u32 {
        self.end.0 - self.start.0 + 1
    }

    pub fn height(self) -> u32 {
        self.end.1 - self.start.1 + 1
    }

    /// Inclusive containment on both axes.
    pub fn contains(self, p: PixelPos) -> bool {
        self.start.0 <= p.0 && p.0 <= self.end.0 && self.start.1 <= p.1 && p.1 <= self.end.1
    }
}

/// Normalize and validate paths relative to an assets root.
///
/// The normalized result uses `/` separators, removes `.` segments, and rejects absolute paths or
/// parent traversals (`..`).
pub fn normalize_rel_path(source: &str) -> SpritemapResult<String> {
    let s = source.replace('\\', "/");
    if s.starts_with('/') {
        return Err(SpritemapError::validation("asset paths must be relative"));
    }

    let mut out = Vec::<&str>::new();
    for part in s.split('/') {
        if part.is_empty() || part == "." {
            continue;
        }
        if part == ".." {
            return Err(SpritemapError::validation(
                "asset paths must not contain '..'",
            ));
        }
        out.push(part);
    }

    if out.is_empty() {
        return Err(SpritemapError::validation(format!(
            "asset path '{source}' must contain a file name"
        )));
    }

    Ok(out.join("/"))
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
