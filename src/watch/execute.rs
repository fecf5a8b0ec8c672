//! Poll execution - effectful operations
//!
//! Runs one pass of the pipeline against a commit source and a merge
//! trigger. Any error ends the pass immediately.

use crate::config::{Config, load_config, save_config};
use crate::error::Result;
use crate::platform::{CommitSource, GitHubService, MergeServer, MergeTrigger};
use crate::types::{CommitChange, PollOptions, PollOutcome, WATCHED_BRANCH};
use crate::watch::detect::detect_change;
use std::path::Path;
use tracing::{debug, info};

/// Load the config at `config_path` and run one poll against the
/// services it names
pub async fn run_poll(config_path: &Path, options: PollOptions) -> Result<PollOutcome> {
    let config = load_config(config_path)?;
    debug!(?config, "config loaded");

    let source = GitHubService::from_config(&config)?;
    let trigger = MergeServer::from_config(&config)?;

    poll_once(config_path, config, &source, &trigger, options).await
}

/// Run one poll (EFFECTFUL)
///
/// The new tip is written to `config_path` before the merge is
/// requested, so a failed trigger leaves the config already advanced
/// and the next run will not retry that commit.
pub async fn poll_once(
    config_path: &Path,
    mut config: Config,
    source: &dyn CommitSource,
    trigger: &dyn MergeTrigger,
    options: PollOptions,
) -> Result<PollOutcome> {
    let fetched = source.latest_commit_sha(WATCHED_BRANCH).await?;

    let (previous, current) = match detect_change(&config.last_commit_sha, &fetched) {
        CommitChange::Unchanged => {
            info!("No updates in '{WATCHED_BRANCH}' branch.");
            return Ok(PollOutcome::Unchanged { sha: fetched });
        }
        CommitChange::Changed { previous, current } => (previous, current),
    };

    if options.dry_run {
        info!(previous = %previous, "Detected new commit: {current}. Dry run, skipping merge.");
        return Ok(PollOutcome::DryRun { previous, current });
    }

    info!("Detected new commit: {current}. Initiating merge...");

    config.record_commit(&current);
    save_config(config_path, &config)?;

    trigger.trigger_merge().await?;

    info!("Merge request successfully initiated.");
    Ok(PollOutcome::Merged { previous, current })
}
