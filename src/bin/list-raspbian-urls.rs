use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::{debug, Level};

use goestools_ops::debian::{PackageIndex, Resolver};
use goestools_ops::duration::parse_duration;
use goestools_ops::logging;
use goestools_ops::settings::RaspbianSettings;
use goestools_ops::source::{FileIndexSource, HttpIndexSource, IndexSource, MirrorLocation};

#[derive(Parser, Debug)]
#[command(name = "list-raspbian-urls")]
#[command(about = "Print download URLs for Raspbian packages and their dependencies")]
#[command(version)]
struct Args {
    /// Packages to resolve
    #[arg(required = true, value_name = "PACKAGE")]
    packages: Vec<String>,

    /// Report unknown packages (-v), debug logging (-vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Fail without printing URLs if any package is unknown
    #[arg(long)]
    strict: bool,

    /// Mirror base URL
    #[arg(long)]
    mirror: Option<String>,

    /// Distribution
    #[arg(long)]
    dist: Option<String>,

    /// Archive component
    #[arg(long)]
    component: Option<String>,

    /// Architecture
    #[arg(long)]
    arch: Option<String>,

    /// Read the Packages index from a local file instead of the mirror
    #[arg(long)]
    index_file: Option<PathBuf>,

    /// Also follow Pre-Depends
    #[arg(long)]
    pre_depends: bool,

    /// Optional TOML settings file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Download timeout (e.g., "60s")
    #[arg(long)]
    timeout: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(Level::ERROR, args.verbose, false);

    let mut settings =
        RaspbianSettings::load(args.config.as_deref()).context("Failed to load settings")?;
    if let Some(mirror) = args.mirror {
        settings.mirror = mirror;
    }
    if let Some(dist) = args.dist {
        settings.dist = dist;
    }
    if let Some(component) = args.component {
        settings.component = component;
    }
    if let Some(arch) = args.arch {
        settings.arch = arch;
    }

    let source: Box<dyn IndexSource> = match args.index_file {
        Some(path) => Box::new(FileIndexSource::new(path)),
        None => {
            let timeout = match args.timeout.as_deref() {
                Some(value) => parse_duration(value).context("Invalid --timeout")?,
                None => settings.timeout()?,
            };
            let location = MirrorLocation {
                mirror: settings.mirror().to_string(),
                dist: settings.dist.clone(),
                component: settings.component.clone(),
                arch: settings.arch.clone(),
            };
            Box::new(HttpIndexSource::new(&location, timeout)?)
        }
    };

    let text = source
        .fetch()
        .await
        .with_context(|| format!("Failed to load package index ({})", source.description()))?;
    let index = PackageIndex::parse(&text);
    debug!(packages = index.len(), source = source.description(), "index loaded");

    let resolution = Resolver::new(&index)
        .follow_pre_depends(args.pre_depends)
        .resolve(&args.packages)?;

    if args.strict && !resolution.is_complete() {
        bail!("Unknown packages: {}", resolution.missing.join(", "));
    }

    for url in resolution.urls(settings.mirror()) {
        println!("{url}");
    }

    Ok(())
}
