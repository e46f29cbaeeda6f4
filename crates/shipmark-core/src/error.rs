//! Error types for Shipmark

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using ShipmarkError
pub type Result<T> = std::result::Result<T, ShipmarkError>;

/// Any failure of a release run
#[derive(Debug, Error)]
pub enum ShipmarkError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Git(#[from] GitError),

    #[error(transparent)]
    Changelog(#[from] ChangelogError),

    #[error(transparent)]
    Workflow(#[from] WorkflowError),
}

/// Problems with `shipmark.toml` / `shipmark.yaml` or the values derived from it
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} is not valid TOML: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("{path} is not valid YAML: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// A key holds a value the release flow cannot use
    #[error("invalid `{field}`: {message}")]
    Invalid { field: &'static str, message: String },

    /// A placeholder in `field` has nothing to be filled with
    #[error("`{field}` uses {placeholder} but it could not be resolved")]
    Unresolved {
        field: &'static str,
        placeholder: &'static str,
    },
}

/// Git failures the release flow distinguishes
#[derive(Debug, Error)]
pub enum GitError {
    #[error("{0} is not inside a git repository")]
    NotARepository(PathBuf),

    #[error("bare repositories have no working tree to release from")]
    BareRepository,

    #[error("cannot tag: the current branch has no commits")]
    NoCommits,

    #[error("{0} is outside the repository working tree")]
    PathOutsideRepository(PathBuf),

    #[error("tag {0} already exists")]
    TagExists(String),

    #[error(transparent)]
    Git2(#[from] git2::Error),
}

/// Failures reading, promoting or writing the changelog
#[derive(Debug, Error)]
pub enum ChangelogError {
    #[error("changelog not found at {0}")]
    FileNotFound(PathBuf),

    #[error("no '## Unreleased' heading found in {0}")]
    MissingUnreleased(PathBuf),

    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Reasons a release run stops
#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("version label cannot be empty")]
    EmptyVersion,

    /// Checked before anything is written
    #[error("release blocked: {}", reasons.join("; "))]
    Blocked { reasons: Vec<String> },

    /// A git step failed after the changelog was written
    #[error("git {step} failed: {source}")]
    Step {
        step: &'static str,
        #[source]
        source: GitError,
    },
}
