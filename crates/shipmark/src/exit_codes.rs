//! Exit codes for the CLI

use shipmark_core::error::{ConfigError, GitError, ShipmarkError, WorkflowError};

/// Anything without a more specific code (I/O, prompts, arguments)
pub const ERROR: i32 = 1;
pub const CONFIG_ERROR: i32 = 2;
/// A git operation failed, including a failed release step
pub const GIT_ERROR: i32 = 3;
pub const CHANGELOG_ERROR: i32 = 4;
/// The release was refused before anything was written
pub const VALIDATION_ERROR: i32 = 5;

/// Map a command failure to the process exit code
pub fn for_error(err: &anyhow::Error) -> i32 {
    let shipmark = err.downcast_ref::<ShipmarkError>();
    if let Some(ShipmarkError::Workflow(workflow)) = shipmark {
        return for_workflow(workflow);
    }
    if let Some(workflow) = err.downcast_ref::<WorkflowError>() {
        return for_workflow(workflow);
    }

    match shipmark {
        Some(ShipmarkError::Config(_)) => CONFIG_ERROR,
        Some(ShipmarkError::Git(_)) => GIT_ERROR,
        Some(ShipmarkError::Changelog(_)) => CHANGELOG_ERROR,
        Some(ShipmarkError::Workflow(_)) => unreachable!("handled above"),
        None if err.is::<ConfigError>() => CONFIG_ERROR,
        None if err.is::<GitError>() => GIT_ERROR,
        None => ERROR,
    }
}

fn for_workflow(err: &WorkflowError) -> i32 {
    match err {
        WorkflowError::Step { .. } => GIT_ERROR,
        WorkflowError::EmptyVersion | WorkflowError::Blocked { .. } => VALIDATION_ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shipmark_core::error::ChangelogError;
    use std::path::PathBuf;

    #[test]
    fn test_shipmark_errors_map_by_kind() {
        let missing: ShipmarkError =
            ChangelogError::MissingUnreleased(PathBuf::from("CHANGELOG.md")).into();
        assert_eq!(for_error(&missing.into()), CHANGELOG_ERROR);

        let config: ShipmarkError = ConfigError::Unresolved {
            field: "changelog.release_url",
            placeholder: "{repository}",
        }
        .into();
        assert_eq!(for_error(&config.into()), CONFIG_ERROR);

        let blocked: ShipmarkError = WorkflowError::Blocked {
            reasons: vec!["tag v1.0.0 already exists".into()],
        }
        .into();
        assert_eq!(for_error(&blocked.into()), VALIDATION_ERROR);
    }

    #[test]
    fn test_failed_git_step_is_git_error() {
        let err: ShipmarkError = WorkflowError::Step {
            step: "tag",
            source: GitError::TagExists("v1.0.0".into()),
        }
        .into();
        assert_eq!(for_error(&err.into()), GIT_ERROR);
    }

    #[test]
    fn test_bare_errors_are_downcast() {
        assert_eq!(for_error(&GitError::NoCommits.into()), GIT_ERROR);
        assert_eq!(for_error(&WorkflowError::EmptyVersion.into()), VALIDATION_ERROR);
        assert_eq!(for_error(&anyhow::anyhow!("boom")), ERROR);
    }
}
