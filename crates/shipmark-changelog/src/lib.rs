//! Shipmark Changelog - Unreleased section promotion
//!
//! This crate holds the pure text transformation: a changelog document is
//! promoted in memory and handed back to the caller to write.

pub mod document;
pub mod formatter;
pub mod promoter;

pub use document::ChangelogDocument;
pub use formatter::{ChangelogFormatter, KeepAChangelogFormatter};
pub use promoter::{is_unreleased_heading, promote, Promoter, Promotion};
