//! Persistence for the config file.

use super::Config;
use crate::error::{Error, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Config filename used when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "config.yaml";

/// Load the config from disk.
///
/// Unlike most state files, a missing config is an error: without it
/// there is no repository to poll.
pub fn load_config(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("failed to load {}: {e}", path.display())))?;

    let config: Config = serde_yaml::from_str(&content)
        .map_err(|e| Error::Config(format!("failed to parse {}: {e}", path.display())))?;

    debug!(path = %path.display(), "loaded config");
    Ok(config)
}

/// Save the config to disk, overwriting the file in place.
pub fn save_config(path: &Path, config: &Config) -> Result<()> {
    let content = serde_yaml::to_string(config)
        .map_err(|e| Error::Config(format!("failed to encode {}: {e}", path.display())))?;

    fs::write(path, content)
        .map_err(|e| Error::Config(format!("failed to save {}: {e}", path.display())))?;

    debug!(path = %path.display(), sha = %config.last_commit_sha, "saved config");
    Ok(())
}
