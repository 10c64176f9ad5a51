//! Log initialisation shared by the binaries.
//!
//! Logs go to stderr. Both tools write their results to stdout, and
//! `list-raspbian-urls` output is meant to be piped into a downloader.

use tracing::Level;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

const LEVELS: [Level; 5] = [
    Level::ERROR,
    Level::WARN,
    Level::INFO,
    Level::DEBUG,
    Level::TRACE,
];

/// Level after applying `-v` count and `-q` on top of a binary's default.
pub fn effective_level(default: Level, verbose: u8, quiet: bool) -> Level {
    if quiet {
        return Level::ERROR;
    }
    let base = LEVELS.iter().position(|l| *l == default).unwrap_or(2);
    let index = (base + usize::from(verbose)).min(LEVELS.len() - 1);
    LEVELS[index]
}

/// Install the global subscriber. `RUST_LOG` takes precedence over the flags.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init(default: Level, verbose: u8, quiet: bool) {
    let level = effective_level(default, verbose, quiet);
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level).into())
        .from_env_lossy();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
