//! Unreleased section promotion

use std::path::Path;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use tracing::{debug, info, instrument, warn};

use shipmark_core::config::MissingUnreleased;
use shipmark_core::error::ChangelogError;

use crate::document::ChangelogDocument;
use crate::formatter::{ChangelogFormatter, KeepAChangelogFormatter};

/// Whole-line match for the Unreleased heading, trailing text allowed
static UNRELEASED_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)^## Unreleased.*$").expect("Invalid regex"));

/// Check whether a line (with its terminator) is an `## Unreleased` heading
pub fn is_unreleased_heading(line: &str) -> bool {
    UNRELEASED_REGEX.is_match(line)
}

/// Output of a promotion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Promotion {
    /// The promoted document
    pub document: ChangelogDocument,
    /// Index of the matched `## Unreleased` line in the source document
    pub unreleased_line: Option<usize>,
}

impl Promotion {
    /// Whether an `## Unreleased` heading was found
    pub fn found_unreleased(&self) -> bool {
        self.unreleased_line.is_some()
    }

    /// Apply the missing-heading policy.
    ///
    /// `source` only names the document in logs and errors.
    pub fn check(self, policy: MissingUnreleased, source: &Path) -> Result<Self, ChangelogError> {
        if self.found_unreleased() {
            return Ok(self);
        }

        match policy {
            MissingUnreleased::Ignore => {
                debug!(path = %source.display(), "no Unreleased heading, ignoring");
                Ok(self)
            }
            MissingUnreleased::Warn => {
                warn!(
                    path = %source.display(),
                    "no '## Unreleased' heading found; only the link reference was added"
                );
                Ok(self)
            }
            MissingUnreleased::Error => Err(ChangelogError::MissingUnreleased(source.to_path_buf())),
        }
    }
}

/// Promotes the Unreleased section of a changelog to a dated version
pub struct Promoter {
    formatter: Box<dyn ChangelogFormatter>,
}

impl Promoter {
    /// Create a promoter with the default formatter
    pub fn new() -> Self {
        Self {
            formatter: Box::new(KeepAChangelogFormatter::new()),
        }
    }

    /// Use a custom formatter
    pub fn with_formatter<F: ChangelogFormatter + 'static>(mut self, formatter: F) -> Self {
        self.formatter = Box::new(formatter);
        self
    }

    /// Promote the Unreleased section.
    ///
    /// The first `## Unreleased` line is kept and followed by a blank line and
    /// the new version heading. Every other line passes through unchanged. A
    /// link reference to `release_link` is always appended; the link is
    /// written as given.
    #[instrument(skip(self, document), fields(line_count = document.len()))]
    pub fn promote(
        &self,
        document: &ChangelogDocument,
        version: &str,
        date: NaiveDate,
        release_link: &str,
    ) -> Promotion {
        let mut output = ChangelogDocument::new();
        let mut unreleased_line = None;

        for (index, line) in document.lines().iter().enumerate() {
            output.push_line(line.as_str());

            if unreleased_line.is_none() && is_unreleased_heading(line) {
                debug!(line = index + 1, "found Unreleased heading");
                unreleased_line = Some(index);
                output.push_line("\n");
                output.push_line(self.formatter.version_heading(version, date));
            }
        }

        output.terminate_last_line();
        output.push_line(self.formatter.link_reference(version, release_link));

        info!(
            version,
            date = %date,
            found_unreleased = unreleased_line.is_some(),
            "promoted changelog"
        );

        Promotion {
            document: output,
            unreleased_line,
        }
    }
}

impl Default for Promoter {
    fn default() -> Self {
        Self::new()
    }
}

/// Promote a list of lines with the default formatter.
///
/// `release_url` is a template; `{version}` in it is replaced by `version`.
pub fn promote(lines: &[String], version: &str, today: NaiveDate, release_url: &str) -> Vec<String> {
    let document = ChangelogDocument::from_lines(lines.iter().cloned());
    let link = release_url.replace("{version}", version);
    Promoter::new()
        .promote(&document, version, today, &link)
        .document
        .into_lines()
}
