//! Change detection - pure comparison of stored and fetched tips

use crate::types::CommitChange;

/// Compare the stored branch tip with the freshly fetched one
pub fn detect_change(stored: &str, fetched: &str) -> CommitChange {
    if stored == fetched {
        CommitChange::Unchanged
    } else {
        CommitChange::Changed {
            previous: stored.to_string(),
            current: fetched.to_string(),
        }
    }
}
