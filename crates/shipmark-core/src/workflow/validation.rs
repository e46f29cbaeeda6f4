//! Checks that run before anything is written

use tracing::{debug, warn};

use crate::error::{Result, WorkflowError};

use super::release::ReleasePlan;

/// Snapshot of the repository taken before a release
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepoState {
    /// Branch HEAD points at; `None` when detached or unborn
    pub branch: Option<String>,
    /// HEAD is detached
    pub head_detached: bool,
    /// No staged, modified or untracked files
    pub is_clean: bool,
    /// The release tag is already taken
    pub tag_exists: bool,
}

/// Outcome of [`validate_release`] when the release may go ahead
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub warnings: Vec<String>,
}

/// Decide whether `plan` can be released from a repository in `state`.
///
/// Blocking problems are collected and returned together as
/// [`WorkflowError::Blocked`].
pub fn validate_release(state: &RepoState, plan: &ReleasePlan) -> Result<ValidationResult> {
    let mut reasons = Vec::new();
    let mut result = ValidationResult::default();

    if state.tag_exists {
        reasons.push(format!("tag {} already exists", plan.tag));
    }

    if !state.is_clean {
        let message = "working tree has uncommitted changes".to_string();
        if plan.require_clean {
            reasons.push(message);
        } else {
            result.warnings.push(message);
        }
    }

    if state.head_detached {
        result
            .warnings
            .push("HEAD is detached; the release commit will not be on a branch".to_string());
    }

    if !reasons.is_empty() {
        warn!(?reasons, "release blocked");
        return Err(WorkflowError::Blocked { reasons }.into());
    }

    debug!(branch = ?state.branch, warnings = result.warnings.len(), "repository ready for release");
    Ok(result)
}
