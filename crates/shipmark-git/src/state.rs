//! Repository state before a release

use git2::StatusOptions;
use tracing::{debug, instrument};

use shipmark_core::workflow::RepoState;

use crate::repository::{GitRepo, Result};

impl GitRepo {
    /// Everything [`shipmark_core::workflow::validate_release`] needs to know
    /// about the repository for releasing `tag`
    #[instrument(skip(self))]
    pub fn state(&self, tag: &str) -> Result<RepoState> {
        let state = RepoState {
            branch: self.branch()?,
            head_detached: self.repo.head_detached()?,
            is_clean: self.is_clean()?,
            tag_exists: self.tag_exists(tag)?,
        };
        debug!(?state, "read repository state");
        Ok(state)
    }

    /// True when nothing is staged, modified or untracked. Ignored files don't count.
    fn is_clean(&self) -> Result<bool> {
        let mut options = StatusOptions::new();
        options
            .include_untracked(true)
            .recurse_untracked_dirs(true)
            .include_ignored(false);
        Ok(self.repo.statuses(Some(&mut options))?.is_empty())
    }

    fn branch(&self) -> Result<Option<String>> {
        match self.repo.head() {
            Ok(head) if head.is_branch() => Ok(head.shorthand().map(str::to_owned)),
            Ok(_) => Ok(None),
            Err(e) if e.code() == git2::ErrorCode::UnbornBranch => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
