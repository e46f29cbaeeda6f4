//! "Keep a Changelog" style lines

use chrono::NaiveDate;

use super::ChangelogFormatter;

/// Formats `## [<version>] - <date>` headings and `[<version>]: <url>` links
#[derive(Debug, Clone, Copy, Default)]
pub struct KeepAChangelogFormatter;

impl KeepAChangelogFormatter {
    /// Create a new formatter
    pub fn new() -> Self {
        Self
    }
}

impl ChangelogFormatter for KeepAChangelogFormatter {
    fn version_heading(&self, version: &str, date: NaiveDate) -> String {
        format!("## [{}] - {}\n", version, date.format("%Y-%m-%d"))
    }

    fn link_reference(&self, version: &str, url: &str) -> String {
        format!("[{}]: {}\n", version, url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_heading() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        let heading = KeepAChangelogFormatter::new().version_heading("2.1.0", date);
        assert_eq!(heading, "## [2.1.0] - 2024-03-05\n");
    }

    #[test]
    fn test_link_reference_uses_label_verbatim() {
        let link = KeepAChangelogFormatter::new()
            .link_reference("nightly build", "https://example.com/vnightly build");
        assert_eq!(link, "[nightly build]: https://example.com/vnightly build\n");
    }
}
