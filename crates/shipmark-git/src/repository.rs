//! Opening the repository a release runs in

use std::path::{Path, PathBuf};

use git2::Repository;
use tracing::{debug, instrument};

use shipmark_core::error::GitError;

/// Result type for git operations
pub type Result<T> = std::result::Result<T, GitError>;

/// A non-bare repository the release commits and tags in
pub struct GitRepo {
    pub(crate) repo: Repository,
}

impl GitRepo {
    /// Open the repository rooted exactly at `path`
    pub fn open(path: &Path) -> Result<Self> {
        Self::checked(Repository::open(path), path)
    }

    /// Open the repository containing `start`, searching parent directories
    #[instrument(fields(start = %start.display()))]
    pub fn discover(start: &Path) -> Result<Self> {
        Self::checked(Repository::discover(start), start)
    }

    fn checked(opened: std::result::Result<Repository, git2::Error>, path: &Path) -> Result<Self> {
        let repo = opened.map_err(|e| match e.code() {
            git2::ErrorCode::NotFound => GitError::NotARepository(path.to_path_buf()),
            _ => GitError::Git2(e),
        })?;
        if repo.is_bare() {
            return Err(GitError::BareRepository);
        }
        debug!(workdir = ?repo.workdir(), "opened repository");
        Ok(Self { repo })
    }

    /// Root of the working tree
    pub fn workdir(&self) -> &Path {
        // `checked` rejects bare repositories, which are the only ones without one
        self.repo.workdir().unwrap_or_else(|| self.repo.path())
    }

    /// The commit HEAD points at, or `None` on an unborn branch
    pub fn head_commit(&self) -> Result<Option<git2::Commit<'_>>> {
        match self.repo.head() {
            Ok(head) => Ok(Some(head.peel_to_commit()?)),
            Err(e) if matches!(e.code(), git2::ErrorCode::UnbornBranch | git2::ErrorCode::NotFound) => {
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// `path` relative to the working tree, the form the index wants.
    /// Relative paths are taken to be relative to the working tree already.
    pub fn relative_path(&self, path: &Path) -> Result<PathBuf> {
        if path.is_relative() {
            return Ok(path.to_path_buf());
        }

        let workdir = self.workdir();
        if let Ok(relative) = path.strip_prefix(workdir) {
            return Ok(relative.to_path_buf());
        }

        // Symlinked temp dirs (e.g. /var -> /private/var on macOS)
        let outside = || GitError::PathOutsideRepository(path.to_path_buf());
        let workdir = workdir.canonicalize().map_err(|_| outside())?;
        let path = path.canonicalize().map_err(|_| outside())?;
        path.strip_prefix(&workdir)
            .map(Path::to_path_buf)
            .map_err(|_| outside())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn init_repo() -> (TempDir, GitRepo) {
        let temp = TempDir::new().unwrap();
        Repository::init(temp.path()).unwrap();
        let repo = GitRepo::open(temp.path()).unwrap();
        (temp, repo)
    }

    #[test]
    fn test_discover_from_subdirectory() {
        let temp = TempDir::new().unwrap();
        Repository::init(temp.path()).unwrap();

        let subdir = temp.path().join("sub").join("dir");
        std::fs::create_dir_all(&subdir).unwrap();

        let repo = GitRepo::discover(&subdir).unwrap();
        assert_eq!(
            repo.workdir().canonicalize().unwrap(),
            temp.path().canonicalize().unwrap()
        );
    }

    #[test]
    fn test_not_a_repo() {
        let temp = TempDir::new().unwrap();
        assert!(matches!(
            GitRepo::open(temp.path()),
            Err(GitError::NotARepository(_))
        ));
    }

    #[test]
    fn test_bare_repo_rejected() {
        let temp = TempDir::new().unwrap();
        Repository::init_bare(temp.path()).unwrap();
        assert!(matches!(
            GitRepo::open(temp.path()),
            Err(GitError::BareRepository)
        ));
    }

    #[test]
    fn test_head_commit_unborn() {
        let (_temp, repo) = init_repo();
        assert!(repo.head_commit().unwrap().is_none());
    }

    #[test]
    fn test_relative_path() {
        let (temp, repo) = init_repo();
        let file = temp.path().join("CHANGELOG.md");
        std::fs::write(&file, "# Changelog\n").unwrap();

        assert_eq!(repo.relative_path(&file).unwrap(), PathBuf::from("CHANGELOG.md"));
        assert_eq!(
            repo.relative_path(Path::new("docs/CHANGES.md")).unwrap(),
            PathBuf::from("docs/CHANGES.md")
        );
    }

    #[test]
    fn test_relative_path_outside_repo() {
        let (_temp, repo) = init_repo();
        let other = TempDir::new().unwrap();
        let file = other.path().join("CHANGELOG.md");
        std::fs::write(&file, "").unwrap();

        assert!(matches!(
            repo.relative_path(&file),
            Err(GitError::PathOutsideRepository(_))
        ));
    }
}
