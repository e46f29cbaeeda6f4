//! Objects created by a release

/// The release commit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedCommit {
    pub id: String,
    pub summary: String,
}

impl CreatedCommit {
    /// Abbreviated id as git prints it
    pub fn short_id(&self) -> &str {
        self.id.get(..7).unwrap_or(&self.id)
    }
}

/// The release tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedTag {
    pub name: String,
    /// Id of the tagged commit
    pub target: String,
    pub annotated: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_id() {
        let commit = CreatedCommit {
            id: "3f2a9c1d0b".to_string(),
            summary: "chore: creating version 1.0.0".to_string(),
        };
        assert_eq!(commit.short_id(), "3f2a9c1");

        let short = CreatedCommit {
            id: "abc".to_string(),
            summary: String::new(),
        };
        assert_eq!(short.short_id(), "abc");
    }
}
