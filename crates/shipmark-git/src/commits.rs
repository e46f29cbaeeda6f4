//! Staging and committing

use std::path::Path;

use tracing::{debug, info, instrument};

use crate::repository::{GitRepo, Result};
use crate::types::CreatedCommit;

impl GitRepo {
    /// Stage a file in the index
    #[instrument(skip(self), fields(path = %path.display()))]
    pub fn stage_path(&self, path: &Path) -> Result<()> {
        let relative = self.relative_path(path)?;
        let mut index = self.repo.index()?;
        index.add_path(&relative)?;
        index.write()?;
        debug!(path = %relative.display(), "staged file");
        Ok(())
    }

    /// Commit the current index on top of HEAD.
    ///
    /// Uses the repository's configured `user.name` / `user.email`.
    #[instrument(skip(self))]
    pub fn commit(&self, message: &str) -> Result<CreatedCommit> {
        let sig = self.repo.signature()?;
        let mut index = self.repo.index()?;
        let tree_id = index.write_tree()?;
        let tree = self.repo.find_tree(tree_id)?;

        let parent = self.head_commit()?;
        let parents: Vec<&git2::Commit<'_>> = parent.iter().collect();

        let oid = self
            .repo
            .commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)?;

        let commit = CreatedCommit {
            id: oid.to_string(),
            summary: message.lines().next().unwrap_or_default().to_string(),
        };
        info!(id = commit.short_id(), "created commit");
        Ok(commit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use git2::Repository;
    use tempfile::TempDir;

    fn setup_repo() -> (TempDir, GitRepo) {
        let temp = TempDir::new().unwrap();
        let repo = Repository::init(temp.path()).unwrap();
        let mut config = repo.config().unwrap();
        config.set_str("user.name", "Test").unwrap();
        config.set_str("user.email", "test@example.com").unwrap();

        let git_repo = GitRepo::open(temp.path()).unwrap();
        (temp, git_repo)
    }

    #[test]
    fn test_first_commit_has_no_parent() {
        let (temp, repo) = setup_repo();
        std::fs::write(temp.path().join("CHANGELOG.md"), "# Changelog\n").unwrap();

        repo.stage_path(Path::new("CHANGELOG.md")).unwrap();
        let commit = repo.commit("chore: creating version 1.0.0").unwrap();

        let head = repo.head_commit().unwrap().unwrap();
        assert_eq!(head.id().to_string(), commit.id);
        assert_eq!(commit.summary, "chore: creating version 1.0.0");
        assert_eq!(head.parent_count(), 0);
        assert_eq!(head.summary(), Some("chore: creating version 1.0.0"));
    }

    #[test]
    fn test_commit_on_top_of_head() {
        let (temp, repo) = setup_repo();
        let file = temp.path().join("CHANGELOG.md");

        std::fs::write(&file, "# Changelog\n").unwrap();
        repo.stage_path(&file).unwrap();
        let first = repo.commit("initial").unwrap();

        std::fs::write(&file, "# Changelog\n\n## [1.0.0] - 2024-03-15\n").unwrap();
        repo.stage_path(&file).unwrap();
        repo.commit("chore: creating version 1.0.0").unwrap();

        let head = repo.head_commit().unwrap().unwrap();
        assert_eq!(head.parent_count(), 1);
        assert_eq!(head.parent_id(0).unwrap().to_string(), first.id);
        assert!(repo.state("v1.0.0").unwrap().is_clean);
    }

    #[test]
    fn test_stage_missing_file_fails() {
        let (_temp, repo) = setup_repo();
        assert!(repo.stage_path(Path::new("missing.md")).is_err());
    }
}
