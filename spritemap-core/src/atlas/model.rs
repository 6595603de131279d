use std::collections::{BTreeSet, HashMap};

use crate::foundation::core::{PixelPos, PixelRect};
use crate::foundation::error::{SpritemapError, SpritemapResult};

/// Prefix of names generated for slices that have not been named by hand.
pub const AUTO_NAME_PREFIX: &str = "slice-";

/// A named rectangular region of the artwork plus its landmark points.
///
/// Field order matches the mapping file layout.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Slice {
    pub name: String,
    /// Inclusive top-left corner.
    pub start: PixelPos,
    pub width: u32,
    /// Landmark points inside the rectangle, top to bottom.
    #[serde(default, alias = "yellowPixels")]
    pub landmarks: Vec<PixelPos>,
    pub height: u32,
    /// Inclusive bottom-right corner.
    pub end: PixelPos,
}

impl Slice {
    /// Build a slice, deriving `width`/`height` from the inclusive corners.
    pub fn new(
        name: impl Into<String>,
        start: PixelPos,
        end: PixelPos,
        landmarks: Vec<PixelPos>,
    ) -> Self {
        Self {
            name: name.into(),
            start,
            width: end.x().saturating_sub(start.x()) + 1,
            landmarks,
            height: end.y().saturating_sub(start.y()) + 1,
            end,
        }
    }

    pub fn rect(&self) -> PixelRect {
        PixelRect {
            start: self.start,
            end: self.end,
        }
    }

    /// Inclusive containment test in guide-image space.
    pub fn contains(&self, p: PixelPos) -> bool {
        self.rect().contains(p)
    }

    /// Landmark `i` relative to the slice's top-left corner.
    pub fn local_landmark(&self, i: usize) -> Option<(u32, u32)> {
        let p = self.landmarks.get(i)?;
        Some((
            p.x().checked_sub(self.start.x())?,
            p.y().checked_sub(self.start.y())?,
        ))
    }

    /// `true` while the slice still carries a generated `slice-<n>` name.
    pub fn is_auto_named(&self) -> bool {
        is_auto_name(&self.name)
    }

    fn validate(&self) -> SpritemapResult<()> {
        let ctx = |msg: String| SpritemapError::validation(format!("slice '{}': {msg}", self.name));

        if self.name.trim().is_empty() {
            return Err(SpritemapError::validation("slice name must be non-empty"));
        }
        let rect = PixelRect::new(self.start, self.end).map_err(|e| ctx(e.to_string()))?;
        if rect.width() != self.width || rect.height() != self.height {
            return Err(ctx(format!(
                "size {}x{} does not match corners (expected {}x{})",
                self.width,
                self.height,
                rect.width(),
                rect.height()
            )));
        }
        if let Some(lm) = self.landmarks.iter().find(|p| !rect.contains(**p)) {
            return Err(ctx(format!(
                "landmark ({}, {}) lies outside the slice",
                lm.x(),
                lm.y()
            )));
        }
        if !self.landmarks.windows(2).all(|w| w[0].y() <= w[1].y()) {
            return Err(ctx("landmarks must be ordered top to bottom".to_string()));
        }
        Ok(())
    }
}

pub fn is_auto_name(name: &str) -> bool {
    name.strip_prefix(AUTO_NAME_PREFIX)
        .is_some_and(|n| !n.is_empty() && n.bytes().all(|b| b.is_ascii_digit()))
}

/// The mapping file document.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Atlas {
    #[serde(default)]
    pub slices: Vec<Slice>,
}

/// Name-keyed view over an [`Atlas`].
pub type AtlasIndex<'a> = HashMap<&'a str, &'a Slice>;

impl Atlas {
    pub fn new(slices: Vec<Slice>) -> Self {
        Self { slices }
    }

    pub fn len(&self) -> usize {
        self.slices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    /// First slice called `name`.
    pub fn get(&self, name: &str) -> Option<&Slice> {
        self.slices.iter().find(|s| s.name == name)
    }

    /// Build a name lookup table. On duplicate names the later slice wins.
    pub fn index(&self) -> AtlasIndex<'_> {
        self.slices.iter().map(|s| (s.name.as_str(), s)).collect()
    }

    pub fn auto_named_count(&self) -> usize {
        self.slices.iter().filter(|s| s.is_auto_named()).count()
    }

    /// Check every slice's geometry and that hand-assigned names are unique.
    ///
    /// Generated `slice-<n>` names may repeat: a region added between runs can be given the
    /// placeholder an older region still carries. Those are logged, not rejected.
    pub fn validate(&self) -> SpritemapResult<()> {
        let mut seen = BTreeSet::new();
        for s in &self.slices {
            s.validate()?;
            if seen.insert(s.name.as_str()) {
                continue;
            }
            if s.is_auto_named() {
                tracing::warn!(name = %s.name, "duplicate generated slice name");
            } else {
                return Err(SpritemapError::validation(format!(
                    "duplicate slice name '{}'",
                    s.name
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/atlas/model.rs"]
mod tests;
