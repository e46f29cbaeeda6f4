//! Arguments shared by the changelog commands

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use clap::Args;

use shipmark_core::config::MissingUnreleased;
use shipmark_core::workflow::ReleaseOptions;

/// Overrides for the changelog promotion
#[derive(Debug, Clone, Default, Args)]
pub struct ChangelogArgs {
    /// Release date (YYYY-MM-DD), defaults to today
    #[arg(long, value_name = "DATE")]
    pub date: Option<NaiveDate>,

    /// Changelog file, relative to the current directory (defaults to
    /// `changelog.file` at the repository root)
    #[arg(long, value_name = "FILE")]
    pub changelog: Option<PathBuf>,

    /// Release link template, e.g. https://github.com/org/repo/releases/v{version}
    #[arg(long, value_name = "TEMPLATE")]
    pub release_url: Option<String>,

    /// What to do when there is no '## Unreleased' heading (ignore, warn, error)
    #[arg(long, value_name = "POLICY")]
    pub on_missing: Option<MissingUnreleased>,
}

impl ChangelogArgs {
    /// The release date, reading the local clock when none was given
    pub fn date(&self) -> NaiveDate {
        self.date.unwrap_or_else(|| Local::now().date_naive())
    }

    /// Build release options for a version, resolving `--changelog` against `cwd`
    pub fn to_options(&self, version: &str, cwd: &Path) -> ReleaseOptions {
        let mut options = ReleaseOptions::new(version, self.date());
        options.changelog = self.changelog.as_ref().map(|path| cwd.join(path));
        options.release_url = self.release_url.clone();
        options.on_missing_unreleased = self.on_missing;
        options
    }
}
