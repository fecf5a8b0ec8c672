//! Poll command - one check of the watched branch

use merge_poller::error::Result;
use merge_poller::types::{PollOptions, PollOutcome};
use merge_poller::watch::run_poll;
use std::path::Path;
use tracing::debug;

/// Run the poll command
pub async fn run_poll_command(config_path: &Path, options: PollOptions) -> Result<()> {
    let outcome = run_poll(config_path, options).await?;

    match &outcome {
        PollOutcome::Unchanged { sha } => debug!(sha = %sha, "branch unchanged"),
        PollOutcome::Merged { previous, current } => {
            debug!(previous = %previous, current = %current, "recorded new tip");
        }
        PollOutcome::DryRun { previous, current } => {
            debug!(previous = %previous, current = %current, "dry run, config untouched");
        }
    }

    Ok(())
}
