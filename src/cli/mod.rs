//! CLI plumbing for the merge-poller binary

mod poll;

pub use poll::run_poll_command;

use clap::Parser;
use merge_poller::config::DEFAULT_CONFIG_FILE;
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Poll a GitHub branch and ask a server to merge it when its tip changes
#[derive(Debug, Parser)]
#[command(name = "merge-poller", version, about)]
pub struct Cli {
    /// Config file holding repository, server, and last-seen commit
    #[arg(long, value_name = "FILE", default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Detect a new commit without recording it or requesting a merge
    #[arg(long)]
    pub dry_run: bool,
}

/// Install the stderr log subscriber
///
/// `RUST_LOG` overrides the level picked by `--verbose`.
pub fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,merge_poller={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}
