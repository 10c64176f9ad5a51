use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, Level};

use goestools_ops::circonus::{catalog, provision, ProvisionOptions};
use goestools_ops::duration::parse_duration;
use goestools_ops::logging;
use goestools_ops::settings::CirconusSettings;
use goestools_ops::CirconusClient;

#[derive(Parser, Debug)]
#[command(name = "circonus-configure")]
#[command(about = "Activate goesrecv metrics and provision graphs in Circonus")]
#[command(version)]
struct Args {
    /// Circonus API token (falls back to CIRCONUS_API_TOKEN)
    #[arg(long)]
    api_token: Option<String>,

    /// Host name the check bundle was created for
    #[arg(long)]
    target: String,

    /// Prefix for graph titles
    #[arg(long)]
    prefix: String,

    /// Optional TOML settings file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Circonus API base URL
    #[arg(long)]
    api_url: Option<String>,

    /// Tag category that marks managed graphs
    #[arg(long)]
    tag_category: Option<String>,

    /// Request timeout (e.g., "10s", "500ms")
    #[arg(long)]
    timeout: Option<String>,

    /// Print what would change without changing it
    #[arg(long)]
    dry_run: bool,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(Level::INFO, args.verbose, args.quiet);

    let mut settings =
        CirconusSettings::load(args.config.as_deref()).context("Failed to load settings")?;
    if let Some(token) = args.api_token {
        settings.api_token = Some(token);
    }
    if let Some(api_url) = args.api_url {
        settings.api_url = api_url;
    }
    if let Some(tag_category) = args.tag_category {
        settings.tag_category = tag_category;
    }
    let timeout = match args.timeout.as_deref() {
        Some(value) => parse_duration(value).context("Invalid --timeout")?,
        None => settings.timeout()?,
    };
    debug!(api_url = %settings.api_url, ?timeout, "settings loaded");

    let client = CirconusClient::builder()
        .api_url(&settings.api_url)
        .token(settings.token()?)
        .app_name(&settings.app_name)
        .timeout(timeout)
        .build()
        .context("Failed to create Circonus client")?;

    let options = ProvisionOptions {
        target: args.target,
        prefix: args.prefix,
        tag_category: settings.tag_category,
        dry_run: args.dry_run,
    };

    let mut stdout = std::io::stdout();
    provision(&client, catalog::GRAPHS, &options, &mut stdout)
        .await
        .with_context(|| format!("Failed to provision {}", options.target))?;

    Ok(())
}
