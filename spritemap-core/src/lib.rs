//! spritemap slices a colour-coded guide image into a named sprite atlas.
//!
//! A guide image is a sparse raster in which exact colours mark geometry:
//!
//! - pure red `(255, 0, 0, 255)`: top-left corner of a region
//! - pure green `(0, 255, 0, 255)`: bottom-right corner of a region
//! - pure yellow `(255, 255, 0, 255)`: a landmark inside a region
//!
//! # Pipeline overview
//!
//! 1. **Scan**: `GuideImage -> MarkerSet` (exact-match classification, start/end balance check)
//! 2. **Build**: `MarkerSet -> Vec<RawSlice>` (greedy nearest-neighbour pairing, landmark capture)
//! 3. **Name**: `Vec<RawSlice> + previous Atlas -> Atlas` (names survive re-runs by exact corners)
//! 4. **Persist**: write the mapping file, then a debug composite for human review
//!
//! [`run`] performs all four for a [`SliceJob`]; [`slice_guide`] is the in-memory core.
//! Consumers of the mapping load it with [`read_atlas`] and look slices up by name.
#![forbid(unsafe_code)]

mod assets;
mod atlas;
mod config;
mod foundation;
mod pipeline;
mod render;
mod scan;
mod slice;

pub use assets::decode::{decode_guide, decode_rgba, load_guide, load_rgba, save_png};
pub use atlas::io::{MappingFormat, from_text, load_prior, read_atlas, to_text, write_atlas};
pub use atlas::model::{AUTO_NAME_PREFIX, Atlas, AtlasIndex, Slice, is_auto_name};
pub use atlas::names::{PriorNames, assign_names};
pub use config::SlicerConfig;
pub use foundation::color::{Rgba8, index_hue};
pub use foundation::core::{Canvas, PixelPos, PixelRect, normalize_rel_path};
pub use foundation::error::{SpritemapError, SpritemapResult};
pub use pipeline::{RunReport, SliceJob, run, slice_guide};
pub use render::overlay::{OverlayOptions, OverlayRenderer, overlay_svg};
pub use scan::guide::GuideImage;
pub use scan::marker::{
    GuidePixel, LANDMARK_RGBA, MarkerKind, REGION_END_RGBA, REGION_START_RGBA, classify,
};
pub use scan::scanner::{MarkerSet, scan, scan_markers};
pub use slice::builder::{RawSlice, build_slices};
