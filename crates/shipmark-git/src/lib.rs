//! Shipmark Git - Git operations for release automation
//!
//! This crate wraps `git2` for the steps a release takes: reading the
//! repository state, staging the changelog, committing and tagging.

mod commits;
mod remote;
mod repository;
mod state;
mod tags;
pub mod types;

pub use repository::{GitRepo, Result};
pub use types::{CreatedCommit, CreatedTag};
