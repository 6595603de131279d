use std::collections::HashMap;

use crate::{
    atlas::model::{AUTO_NAME_PREFIX, Atlas, Slice},
    foundation::core::PixelPos,
    slice::builder::RawSlice,
};

/// Names from a previous run, keyed by exact `(start, end)` corners.
#[derive(Clone, Debug, Default)]
pub struct PriorNames {
    by_corners: HashMap<(PixelPos, PixelPos), String>,
}

impl PriorNames {
    /// On duplicate corners the first entry wins.
    pub fn from_atlas(atlas: &Atlas) -> Self {
        let mut by_corners = HashMap::with_capacity(atlas.slices.len());
        for s in &atlas.slices {
            by_corners
                .entry((s.start, s.end))
                .or_insert_with(|| s.name.clone());
        }
        Self { by_corners }
    }

    pub fn get(&self, start: PixelPos, end: PixelPos) -> Option<&str> {
        self.by_corners.get(&(start, end)).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.by_corners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_corners.is_empty()
    }
}

/// Attach names to freshly built slices, keeping list order.
///
/// A slice whose corners match a prior entry exactly keeps that name; the rest are called
/// `slice-<seq>`.
pub fn assign_names(raw: Vec<RawSlice>, prior: &PriorNames) -> Atlas {
    let slices = raw
        .into_iter()
        .map(|r| {
            let name = match prior.get(r.start, r.end) {
                Some(name) => name.to_string(),
                None => format!("{AUTO_NAME_PREFIX}{}", r.seq),
            };
            Slice::new(name, r.start, r.end, r.landmarks)
        })
        .collect();
    Atlas::new(slices)
}

#[cfg(test)]
#[path = "../../tests/unit/atlas/names.rs"]
mod tests;
