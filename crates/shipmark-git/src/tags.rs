//! Release tags

use tracing::{debug, info, instrument};

use shipmark_core::error::GitError;

use crate::repository::{GitRepo, Result};
use crate::types::CreatedTag;

impl GitRepo {
    /// Whether `refs/tags/<name>` exists
    pub fn tag_exists(&self, name: &str) -> Result<bool> {
        let exists = match self.repo.find_reference(&format!("refs/tags/{}", name)) {
            Ok(_) => true,
            Err(e) if e.code() == git2::ErrorCode::NotFound => false,
            Err(e) => return Err(e.into()),
        };
        debug!(name, exists, "checked tag");
        Ok(exists)
    }

    /// Tag HEAD. Annotated when a message is given, lightweight otherwise.
    /// An existing tag is never moved.
    #[instrument(skip(self, message), fields(annotated = message.is_some()))]
    pub fn create_tag(&self, name: &str, message: Option<&str>) -> Result<CreatedTag> {
        if self.tag_exists(name)? {
            return Err(GitError::TagExists(name.to_string()));
        }
        let head = self.head_commit()?.ok_or(GitError::NoCommits)?;

        match message {
            Some(message) => {
                let tagger = self.repo.signature()?;
                self.repo.tag(name, head.as_object(), &tagger, message, false)?;
            }
            None => {
                self.repo.tag_lightweight(name, head.as_object(), false)?;
            }
        }

        let tag = CreatedTag {
            name: name.to_string(),
            target: head.id().to_string(),
            annotated: message.is_some(),
        };
        info!(commit = %tag.target, "created tag");
        Ok(tag)
    }
}
