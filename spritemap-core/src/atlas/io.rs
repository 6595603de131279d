use std::path::Path;

use anyhow::Context;

use crate::{
    assets::decode::ensure_parent_dir,
    atlas::model::Atlas,
    foundation::error::{SpritemapError, SpritemapResult},
};

/// Text encoding of a mapping file, chosen from its extension.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MappingFormat {
    #[default]
    Yaml,
    Json,
}

impl MappingFormat {
    /// `.json` selects JSON; everything else (`.yml`, `.yaml`, no extension) is YAML.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("json") => Self::Json,
            _ => Self::Yaml,
        }
    }
}

pub fn to_text(atlas: &Atlas, format: MappingFormat) -> SpritemapResult<String> {
    match format {
        MappingFormat::Yaml => serde_yaml::to_string(atlas)
            .map_err(|e| SpritemapError::serde(format!("encode mapping yaml: {e}"))),
        MappingFormat::Json => {
            let mut s = serde_json::to_string_pretty(atlas)
                .map_err(|e| SpritemapError::serde(format!("encode mapping json: {e}")))?;
            s.push('\n');
            Ok(s)
        }
    }
}

pub fn from_text(text: &str, format: MappingFormat) -> SpritemapResult<Atlas> {
    match format {
        MappingFormat::Yaml => serde_yaml::from_str(text)
            .map_err(|e| SpritemapError::serde(format!("parse mapping yaml: {e}"))),
        MappingFormat::Json => serde_json::from_str(text)
            .map_err(|e| SpritemapError::serde(format!("parse mapping json: {e}"))),
    }
}

/// Strict load: any IO or parse failure is an error.
pub fn read_atlas(path: &Path) -> SpritemapResult<Atlas> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read mapping '{}'", path.display()))?;
    from_text(&text, MappingFormat::from_path(path))
}

/// Best-effort load of a previous run's mapping. A missing or unreadable file yields an empty
/// atlas, which is the normal state on a first run.
pub fn load_prior(path: &Path) -> Atlas {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no prior mapping, starting fresh");
        return Atlas::default();
    }
    match read_atlas(path) {
        Ok(atlas) => {
            tracing::debug!(path = %path.display(), slices = atlas.len(), "loaded prior mapping");
            atlas
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "ignoring unreadable prior mapping");
            Atlas::default()
        }
    }
}

pub fn write_atlas(path: &Path, atlas: &Atlas) -> SpritemapResult<()> {
    let text = to_text(atlas, MappingFormat::from_path(path))?;
    ensure_parent_dir(path)?;
    std::fs::write(path, text).with_context(|| format!("write mapping '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/atlas/io.rs"]
mod tests;
