//! Remote lookup for the `{repository}` placeholder

use tracing::debug;

use shipmark_core::workflow::repository_url_from_remote;

use crate::repository::{GitRepo, Result};

impl GitRepo {
    /// Browsable repository URL for `remote`.
    ///
    /// `None` when the remote is missing, has no URL, or its URL is not a
    /// hosted SSH/HTTPS location (e.g. a local path).
    pub fn repository_url(&self, remote: &str) -> Result<Option<String>> {
        let url = match self.repo.find_remote(remote) {
            Ok(found) => found.url().map(str::to_owned),
            Err(e) if e.code() == git2::ErrorCode::NotFound => None,
            Err(e) => return Err(e.into()),
        };

        let repository = url.as_deref().and_then(repository_url_from_remote);
        debug!(remote, url = ?url, repository = ?repository, "resolved repository url");
        Ok(repository)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use git2::Repository;
    use tempfile::TempDir;

    #[test]
    fn test_missing_remote_is_none() {
        let temp = TempDir::new().unwrap();
        Repository::init(temp.path()).unwrap();
        let repo = GitRepo::open(temp.path()).unwrap();

        assert_eq!(repo.repository_url("origin").unwrap(), None);
    }

    #[test]
    fn test_ssh_remote() {
        let temp = TempDir::new().unwrap();
        let raw = Repository::init(temp.path()).unwrap();
        raw.remote("origin", "git@github.com:acme/widget.git").unwrap();
        raw.remote("mirror", "/srv/git/widget.git").unwrap();

        let repo = GitRepo::open(temp.path()).unwrap();
        assert_eq!(
            repo.repository_url("origin").unwrap().as_deref(),
            Some("https://github.com/acme/widget")
        );
        assert_eq!(repo.repository_url("mirror").unwrap(), None);
    }
}
