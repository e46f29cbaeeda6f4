//! Release planning

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::config::{validate_release_url, Config, MissingUnreleased};
use crate::error::{Result, WorkflowError};

use super::version::{format_commit_message, format_tag, resolve_release_url};

/// What the caller asked for, before configuration is applied
#[derive(Debug, Clone)]
pub struct ReleaseOptions {
    /// Version label to release, used verbatim
    pub version: String,
    /// Date for the changelog heading
    pub date: NaiveDate,
    /// Resolve and report, write nothing
    pub dry_run: bool,
    /// Release even when `git.require_clean` is set and the tree is dirty
    pub allow_dirty: bool,
    /// Changelog file overriding `changelog.file`, used as given
    pub changelog: Option<PathBuf>,
    /// Release link template overriding `changelog.release_url`
    pub release_url: Option<String>,
    /// Policy overriding `changelog.on_missing_unreleased`
    pub on_missing_unreleased: Option<MissingUnreleased>,
}

impl ReleaseOptions {
    pub fn new(version: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            version: version.into(),
            date,
            dry_run: false,
            allow_dirty: false,
            changelog: None,
            release_url: None,
            on_missing_unreleased: None,
        }
    }

    pub fn with_release_url(mut self, template: impl Into<String>) -> Self {
        self.release_url = Some(template.into());
        self
    }

    pub fn with_on_missing_unreleased(mut self, policy: MissingUnreleased) -> Self {
        self.on_missing_unreleased = Some(policy);
        self
    }
}

/// Everything a release run needs, with templates filled in and paths resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleasePlan {
    pub version: String,
    pub date: NaiveDate,
    pub changelog_path: PathBuf,
    pub tag: String,
    pub commit_message: String,
    /// Link target, already resolved for this version
    pub release_url: String,
    pub on_missing_unreleased: MissingUnreleased,
    pub annotate_tag: bool,
    /// A dirty working tree blocks the release
    pub require_clean: bool,
    pub dry_run: bool,
}

impl ReleasePlan {
    /// Resolve a plan.
    ///
    /// `changelog.file` from the config is relative to `root`, the repository
    /// work directory. A changelog given in `options` is used as is; the CLI
    /// makes it absolute against the current directory. `repository` fills
    /// the `{repository}` placeholder.
    pub fn resolve(
        config: &Config,
        options: &ReleaseOptions,
        root: &Path,
        repository: Option<&str>,
    ) -> Result<Self> {
        let version = options.version.trim();
        if version.is_empty() {
            return Err(WorkflowError::EmptyVersion.into());
        }

        let template = options
            .release_url
            .as_deref()
            .unwrap_or(&config.changelog.release_url);
        validate_release_url(template)?;

        let changelog_path = match &options.changelog {
            Some(path) => path.clone(),
            None => root.join(&config.changelog.file),
        };

        let plan = Self {
            version: version.to_string(),
            date: options.date,
            changelog_path,
            tag: format_tag(config, version),
            commit_message: format_commit_message(config, version),
            release_url: resolve_release_url(template, version, repository)?,
            on_missing_unreleased: options
                .on_missing_unreleased
                .unwrap_or(config.changelog.on_missing_unreleased),
            annotate_tag: config.git.annotate_tags,
            require_clean: config.git.require_clean && !options.allow_dirty,
            dry_run: options.dry_run,
        };

        info!(
            version = %plan.version,
            tag = %plan.tag,
            changelog = %plan.changelog_path.display(),
            dry_run = plan.dry_run,
            "release planned"
        );
        debug!(release_url = %plan.release_url, policy = %plan.on_missing_unreleased, "release plan details");
        Ok(plan)
    }

    /// Annotated tag message
    pub fn tag_message(&self) -> String {
        format!("Release {}", self.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    #[test]
    fn test_resolve_plan_defaults() {
        let config = Config::default();
        let options = ReleaseOptions::new("2.1.0", date());
        let plan = ReleasePlan::resolve(
            &config,
            &options,
            Path::new("/repo"),
            Some("https://github.com/acme/widget"),
        )
        .unwrap();

        assert_eq!(plan.tag, "v2.1.0");
        assert_eq!(plan.commit_message, "chore: creating version 2.1.0");
        assert_eq!(plan.release_url, "https://github.com/acme/widget/releases/v2.1.0");
        assert_eq!(plan.changelog_path, PathBuf::from("/repo/CHANGELOG.md"));
        assert_eq!(plan.on_missing_unreleased, MissingUnreleased::Warn);
        assert!(!plan.annotate_tag);
    }

    #[test]
    fn test_options_override_config() {
        let config = Config::default();
        let options = ReleaseOptions::new("2.1.0", date())
            .with_release_url("https://example.com/v{version}")
            .with_on_missing_unreleased(MissingUnreleased::Error);
        let plan = ReleasePlan::resolve(&config, &options, Path::new("/repo"), None).unwrap();

        assert_eq!(plan.release_url, "https://example.com/v2.1.0");
        assert_eq!(plan.on_missing_unreleased, MissingUnreleased::Error);
    }

    #[test]
    fn test_changelog_override_is_not_joined_to_root() {
        let config = Config::default();
        let mut options = ReleaseOptions::new("2.1.0", date())
            .with_release_url("https://example.com/v{version}");
        options.changelog = Some(PathBuf::from("/repo/docs/CHANGES.md"));
        let plan = ReleasePlan::resolve(&config, &options, Path::new("/repo"), None).unwrap();
        assert_eq!(plan.changelog_path, PathBuf::from("/repo/docs/CHANGES.md"));

        options.changelog = Some(PathBuf::from("CHANGES.md"));
        let plan = ReleasePlan::resolve(&config, &options, Path::new("/repo"), None).unwrap();
        assert_eq!(plan.changelog_path, PathBuf::from("CHANGES.md"));
    }

    #[test]
    fn test_allow_dirty_lifts_require_clean() {
        let mut config = Config::default();
        config.git.require_clean = true;
        let mut options = ReleaseOptions::new("2.1.0", date())
            .with_release_url("https://example.com/v{version}");
        let plan = ReleasePlan::resolve(&config, &options, Path::new("/repo"), None).unwrap();
        assert!(plan.require_clean);

        options.allow_dirty = true;
        let plan = ReleasePlan::resolve(&config, &options, Path::new("/repo"), None).unwrap();
        assert!(!plan.require_clean);
    }

    #[test]
    fn test_empty_version_rejected() {
        let config = Config::default();
        let options = ReleaseOptions::new("  ", date());
        let result = ReleasePlan::resolve(&config, &options, Path::new("/repo"), None);
        assert!(matches!(
            result,
            Err(crate::ShipmarkError::Workflow(WorkflowError::EmptyVersion))
        ));
    }

    #[test]
    fn test_unresolvable_repository_rejected() {
        let config = Config::default();
        let options = ReleaseOptions::new("1.0.0", date());
        let result = ReleasePlan::resolve(&config, &options, Path::new("/repo"), None);
        assert!(result.is_err());
    }
}
