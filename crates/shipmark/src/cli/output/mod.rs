//! Terminal output for command results
//!
//! Results go to stdout; notes and failures go to stderr so that
//! `shipmark promote` output can be piped.

use std::fmt::Display;
use std::path::Path;

use console::{style, StyledObject};

/// A step that completed
pub fn done(message: impl Display) {
    println!("{} {}", style("✓").green().bold(), message);
}

/// Something the user should know about but that did not stop the run
pub fn note(message: impl Display) {
    eprintln!("{} {}", style("!").yellow().bold(), message);
}

/// The error that ended the run
pub fn failure(message: impl Display) {
    eprintln!("{} {}", style("error:").red().bold(), message);
}

/// One labelled line of a summary
pub fn field(label: &str, value: impl Display) {
    println!("  {:<10} {}", style(label).dim(), value);
}

pub fn version<D>(version: D) -> StyledObject<D> {
    style(version).green().bold()
}

pub fn tag<D>(tag: D) -> StyledObject<D> {
    style(tag).yellow()
}

pub fn path(path: &Path) -> StyledObject<std::path::Display<'_>> {
    style(path.display()).cyan()
}
