//! Core types for Shipmark

use std::path::PathBuf;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Result of a release operation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReleaseResult {
    /// Version label that was released
    pub version: String,
    /// Release date written into the changelog heading
    pub date: NaiveDate,
    /// Tag that was (or would be) created
    pub tag: String,
    /// Changelog file that was updated
    pub changelog: PathBuf,
    /// Resolved release link
    pub release_url: String,
    /// Whether an `## Unreleased` heading was found
    pub unreleased_found: bool,
    /// Commit created for the release, if any
    pub commit: Option<String>,
    /// Whether the tag was created
    pub tagged: bool,
    /// Whether this was a dry run
    pub dry_run: bool,
    /// Any notes or warnings
    pub notes: Vec<String>,
}

impl ReleaseResult {
    /// Create a new release result
    pub fn new(version: impl Into<String>, date: NaiveDate, tag: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            date,
            tag: tag.into(),
            changelog: PathBuf::new(),
            release_url: String::new(),
            unreleased_found: false,
            commit: None,
            tagged: false,
            dry_run: false,
            notes: Vec::new(),
        }
    }

    /// Set the changelog path
    pub fn with_changelog(mut self, path: impl Into<PathBuf>) -> Self {
        self.changelog = path.into();
        self
    }

    /// Set the release link
    pub fn with_release_url(mut self, url: impl Into<String>) -> Self {
        self.release_url = url.into();
        self
    }

    /// Set whether this was a dry run
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Add a note
    pub fn add_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }
}
