/// Convenience result type used across spritemap.
pub type SpritemapResult<T> = Result<T, SpritemapError>;

/// Top-level error taxonomy used by slicer APIs.
#[derive(thiserror::Error, Debug)]
pub enum SpritemapError {
    /// Invalid user-provided data (buffers, paths, hand-edited mappings).
    #[error("validation error: {0}")]
    Validation(String),

    /// The guide image does not carry one region end per region start.
    #[error(
        "invalid guide image: marker count mismatch, region start: {region_start}, landmark: {landmark}, region end: {region_end}"
    )]
    MarkerCountMismatch {
        /// Number of region-start (red) pixels.
        region_start: usize,
        /// Number of region-end (green) pixels.
        region_end: usize,
        /// Number of landmark (yellow) pixels.
        landmark: usize,
    },

    /// A region start has no region end at or below-right of it.
    #[error("invalid guide image: region start at ({x}, {y}) has no region end at or below-right of it")]
    UnpairedRegionStart {
        /// Column of the orphaned region start.
        x: u32,
        /// Row of the orphaned region start.
        y: u32,
    },

    /// Errors while decoding or encoding raster images.
    #[error("image error: {0}")]
    Image(String),

    /// Errors when serializing or deserializing mapping/config documents.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SpritemapError {
    /// Build a [`SpritemapError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SpritemapError::Image`] value.
    pub fn image(msg: impl Into<String>) -> Self {
        Self::Image(msg.into())
    }

    /// Build a [`SpritemapError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Whether this error stems from a malformed guide image (as opposed to IO or config).
    pub fn is_malformed_guide(&self) -> bool {
        matches!(
            self,
            Self::MarkerCountMismatch { .. } | Self::UnpairedRegionStart { .. }
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
