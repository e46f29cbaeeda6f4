//! In-memory changelog document

use std::fmt;

/// A changelog held as an ordered sequence of lines.
///
/// Each line keeps its own terminator, so rendering the document
/// reproduces the source byte for byte.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangelogDocument {
    lines: Vec<String>,
}

impl ChangelogDocument {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Split text into lines, keeping `\n` terminators
    pub fn parse(content: &str) -> Self {
        Self {
            lines: content.split_inclusive('\n').map(str::to_string).collect(),
        }
    }

    /// Create a document from pre-split lines
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Get the lines
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Consume the document, returning its lines
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    /// Number of lines
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the document has no lines
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Append a line verbatim
    pub fn push_line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Ensure the last line ends with a terminator so an appended line
    /// starts on its own line
    pub(crate) fn terminate_last_line(&mut self) {
        if let Some(last) = self.lines.last_mut() {
            if !last.ends_with('\n') {
                last.push('\n');
            }
        }
    }

    /// Render the document back into a single string
    pub fn render(&self) -> String {
        self.lines.concat()
    }
}

impl fmt::Display for ChangelogDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            f.write_str(line)?;
        }
        Ok(())
    }
}
