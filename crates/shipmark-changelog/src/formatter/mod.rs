//! Changelog line formatters

mod keep_a_changelog;

pub use keep_a_changelog::KeepAChangelogFormatter;

use chrono::NaiveDate;

/// Trait for the lines a promotion writes into a changelog
pub trait ChangelogFormatter: Send + Sync {
    /// Heading for a released version, including its terminator
    fn version_heading(&self, version: &str, date: NaiveDate) -> String;

    /// Link-reference definition for a released version, including its terminator
    fn link_reference(&self, version: &str, url: &str) -> String;
}
