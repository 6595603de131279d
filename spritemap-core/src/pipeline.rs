use std::{
    fmt,
    path::{Path, PathBuf},
};

use crate::{
    assets::decode::{load_guide, load_rgba, save_png},
    atlas::io::{load_prior, write_atlas},
    atlas::model::Atlas,
    atlas::names::{PriorNames, assign_names},
    foundation::error::SpritemapResult,
    render::overlay::{OverlayOptions, OverlayRenderer},
    scan::guide::GuideImage,
    scan::scanner::scan,
    slice::builder::build_slices,
};

/// Concrete inputs and outputs of one slicing run.
#[derive(Clone, Debug, PartialEq)]
pub struct SliceJob {
    pub guide: PathBuf,
    pub artwork: PathBuf,
    pub mapping: PathBuf,
    pub debug: Option<PathBuf>,
    pub overlay: OverlayOptions,
}

/// Outcome of [`run`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunReport {
    pub slices: usize,
    /// Slices still carrying a generated `slice-<n>` name.
    pub auto_named: usize,
    pub debug_written: bool,
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Generated {} slices, {} unnamed",
            self.slices, self.auto_named
        )
    }
}

/// Scan, pair and name in memory: `guide` + previous mapping -> new mapping.
pub fn slice_guide(guide: &GuideImage, prior: &Atlas) -> SpritemapResult<Atlas> {
    let markers = scan(guide)?;
    let raw = build_slices(markers, guide.canvas())?;
    Ok(assign_names(raw, &PriorNames::from_atlas(prior)))
}

/// Run the whole tool once.
///
/// Guide-image errors abort before anything is written. The mapping is written next; the debug
/// composite comes last and a failure there is logged rather than returned.
#[tracing::instrument(skip(job), fields(guide = %job.guide.display()))]
pub fn run(job: &SliceJob) -> SpritemapResult<RunReport> {
    let guide = load_guide(&job.guide)?;
    let prior = load_prior(&job.mapping);
    let atlas = slice_guide(&guide, &prior)?;

    write_atlas(&job.mapping, &atlas)?;
    tracing::info!(
        path = %job.mapping.display(),
        slices = atlas.len(),
        "wrote mapping"
    );

    let debug_written = match &job.debug {
        Some(path) => match write_debug(job, &guide, &atlas, path) {
            Ok(()) => {
                tracing::info!(path = %path.display(), "wrote debug composite");
                true
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "skipping debug composite");
                false
            }
        },
        None => false,
    };

    Ok(RunReport {
        slices: atlas.len(),
        auto_named: atlas.auto_named_count(),
        debug_written,
    })
}

fn write_debug(
    job: &SliceJob,
    guide: &GuideImage,
    atlas: &Atlas,
    out: &Path,
) -> SpritemapResult<()> {
    let artwork = load_rgba(&job.artwork)?;
    let composite =
        OverlayRenderer::new(job.overlay.clone()).render(guide.canvas(), &artwork, atlas)?;
    save_png(out, &composite)
}
