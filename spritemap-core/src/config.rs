use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::{
    foundation::core::normalize_rel_path,
    foundation::error::{SpritemapError, SpritemapResult},
    pipeline::SliceJob,
    render::overlay::OverlayOptions,
};

/// File-level settings for a slicing run.
///
/// Every path except `assets_root` is relative to `assets_root`. The defaults reproduce the
/// layout of the music-video project the tool was written for.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SlicerConfig {
    pub assets_root: PathBuf,
    /// Guide image carrying the colour markers.
    pub guide: String,
    /// Artwork drawn under the debug outlines.
    pub artwork: String,
    /// Mapping file; `.json` selects JSON, anything else YAML.
    pub mapping: String,
    /// Debug composite output. `None` disables it.
    pub debug: Option<String>,
    pub label_font_size: f32,
    pub label_font_family: String,
}

impl Default for SlicerConfig {
    fn default() -> Self {
        Self {
            assets_root: PathBuf::from("src/assets"),
            guide: "illusts/atlas.png".to_string(),
            artwork: "illusts/main.png".to_string(),
            mapping: "atlas.yml".to_string(),
            debug: Some("atlasDisplay.png".to_string()),
            label_font_size: 10.0,
            label_font_family: "sans-serif".to_string(),
        }
    }
}

impl SlicerConfig {
    /// Load a JSON config. A relative `assets_root` is resolved against the config file's
    /// directory.
    pub fn from_path(path: &Path) -> SpritemapResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        let mut cfg: Self = serde_json::from_str(&text).map_err(|e| {
            SpritemapError::serde(format!("parse config '{}': {e}", path.display()))
        })?;
        if cfg.assets_root.is_relative() {
            let base = path.parent().unwrap_or_else(|| Path::new("."));
            cfg.assets_root = base.join(&cfg.assets_root);
        }
        Ok(cfg)
    }

    pub fn validate(&self) -> SpritemapResult<()> {
        if !(self.label_font_size.is_finite() && self.label_font_size > 0.0) {
            return Err(SpritemapError::validation(
                "label_font_size must be finite and > 0",
            ));
        }
        if self.label_font_family.trim().is_empty() {
            return Err(SpritemapError::validation(
                "label_font_family must be non-empty",
            ));
        }
        Ok(())
    }

    /// Resolve into concrete paths under `assets_root`.
    pub fn job(&self) -> SpritemapResult<SliceJob> {
        self.validate()?;
        let resolve = |rel: &str| -> SpritemapResult<PathBuf> {
            Ok(self.assets_root.join(normalize_rel_path(rel)?))
        };

        Ok(SliceJob {
            guide: resolve(&self.guide)?,
            artwork: resolve(&self.artwork)?,
            mapping: resolve(&self.mapping)?,
            debug: self.debug.as_deref().map(resolve).transpose()?,
            overlay: OverlayOptions {
                font_size: self.label_font_size,
                font_family: self.label_font_family.clone(),
                ..OverlayOptions::default()
            },
        })
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
