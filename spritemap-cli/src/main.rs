use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "spritemap", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Slice the guide image and write the mapping file plus a debug composite.
    Slice(SliceArgs),
    /// Load a mapping file, check it, and print its slices.
    Inspect(InspectArgs),
}

#[derive(Parser, Debug)]
struct SliceArgs {
    /// JSON config file. Flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory the other paths are relative to.
    #[arg(long)]
    assets: Option<PathBuf>,

    /// Guide image (relative to the assets directory).
    #[arg(long)]
    guide: Option<String>,

    /// Artwork drawn under the debug outlines (relative to the assets directory).
    #[arg(long)]
    artwork: Option<String>,

    /// Mapping output (relative to the assets directory). `.json` selects JSON, otherwise YAML.
    #[arg(long)]
    out: Option<String>,

    /// Debug composite output (relative to the assets directory).
    #[arg(long)]
    debug_out: Option<String>,

    /// Skip the debug composite.
    #[arg(long, default_value_t = false)]
    no_debug: bool,
}

#[derive(Parser, Debug)]
struct InspectArgs {
    /// Mapping file to read.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Print only this slice.
    #[arg(long)]
    name: Option<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Slice(args) => cmd_slice(args),
        Command::Inspect(args) => cmd_inspect(args),
    }
}

fn cmd_slice(args: SliceArgs) -> anyhow::Result<()> {
    let mut cfg = match &args.config {
        Some(path) => spritemap::SlicerConfig::from_path(path)?,
        None => spritemap::SlicerConfig::default(),
    };
    if let Some(assets) = args.assets {
        cfg.assets_root = assets;
    }
    if let Some(guide) = args.guide {
        cfg.guide = guide;
    }
    if let Some(artwork) = args.artwork {
        cfg.artwork = artwork;
    }
    if let Some(out) = args.out {
        cfg.mapping = out;
    }
    if let Some(debug_out) = args.debug_out {
        cfg.debug = Some(debug_out);
    }
    if args.no_debug {
        cfg.debug = None;
    }

    let job = cfg.job()?;
    tracing::debug!(?job, "resolved slice job");

    let report = spritemap::run(&job)
        .with_context(|| format!("slice guide '{}'", job.guide.display()))?;

    println!("{report}");
    Ok(())
}

fn cmd_inspect(args: InspectArgs) -> anyhow::Result<()> {
    let atlas = spritemap::read_atlas(&args.in_path)?;
    atlas
        .validate()
        .with_context(|| format!("check mapping '{}'", args.in_path.display()))?;

    match args.name {
        Some(name) => {
            let slice = atlas
                .get(&name)
                .with_context(|| format!("no slice named '{name}'"))?;
            print_slice(slice);
        }
        None => {
            for slice in &atlas.slices {
                print_slice(slice);
            }
            println!(
                "{} slices, {} unnamed",
                atlas.len(),
                atlas.auto_named_count()
            );
        }
    }
    Ok(())
}

fn print_slice(slice: &spritemap::Slice) {
    println!(
        "{}: ({}, {}) {}x{}, {} landmarks",
        slice.name,
        slice.start.x(),
        slice.start.y(),
        slice.width,
        slice.height,
        slice.landmarks.len()
    );
    for lm in &slice.landmarks {
        println!("    ({}, {})", lm.x(), lm.y());
    }
}
