//! Configuration types

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration for Shipmark
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Git configuration
    pub git: GitConfig,

    /// Changelog configuration
    pub changelog: ChangelogConfig,
}

/// Git configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GitConfig {
    /// Remote used to resolve the `{repository}` placeholder
    pub remote: String,

    /// Whether to require clean working directory
    pub require_clean: bool,

    /// Commit message template
    pub commit_message: String,

    /// Tag format (e.g., "v{version}")
    pub tag_format: String,

    /// Create annotated tags instead of lightweight ones
    pub annotate_tags: bool,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            remote: "origin".to_string(),
            require_clean: false,
            commit_message: "chore: creating version {version}".to_string(),
            tag_format: "v{version}".to_string(),
            annotate_tags: false,
        }
    }
}

/// Changelog configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangelogConfig {
    /// Changelog file path, relative to the repository root
    pub file: PathBuf,

    /// What to do when the document has no `## Unreleased` heading
    pub on_missing_unreleased: MissingUnreleased,

    /// Release link template, `{version}` and `{repository}` are substituted
    pub release_url: String,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from("CHANGELOG.md"),
            on_missing_unreleased: MissingUnreleased::default(),
            release_url: "{repository}/releases/v{version}".to_string(),
        }
    }
}

/// Policy for a changelog that has no `## Unreleased` heading.
///
/// In every case the link reference is still appended; the policy only
/// decides whether the run is reported or aborted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingUnreleased {
    /// Pass the document through silently
    Ignore,
    /// Pass the document through and log a warning
    #[default]
    Warn,
    /// Abort before anything is written
    Error,
}

impl MissingUnreleased {
    /// Returns the string representation of the policy
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ignore => "ignore",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl std::fmt::Display for MissingUnreleased {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for MissingUnreleased {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ignore" => Ok(Self::Ignore),
            "warn" | "warning" => Ok(Self::Warn),
            "error" | "fail" => Ok(Self::Error),
            _ => Err(format!("Unknown missing-unreleased policy: {}", s)),
        }
    }
}
