//! Configuration validation

use tracing::debug;

use crate::error::{ConfigError, Result};

use super::types::Config;

const VERSION: &str = "{version}";

fn invalid(field: &'static str, message: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        field,
        message: message.into(),
    }
}

fn require_version(field: &'static str, template: &str) -> Result<()> {
    if template.contains(VERSION) {
        Ok(())
    } else {
        Err(invalid(field, format!("must contain the {} placeholder", VERSION)).into())
    }
}

/// Check the values a release run depends on
pub fn validate_config(config: &Config) -> Result<()> {
    if config.git.remote.trim().is_empty() {
        return Err(invalid("git.remote", "cannot be empty").into());
    }
    if config.changelog.file.as_os_str().is_empty() {
        return Err(invalid("changelog.file", "cannot be empty").into());
    }

    require_version("git.commit_message", &config.git.commit_message)?;
    require_version("git.tag_format", &config.git.tag_format)?;
    validate_release_url(&config.changelog.release_url)?;

    debug!("configuration is valid");
    Ok(())
}

/// A release link template must place the version somewhere
pub fn validate_release_url(template: &str) -> Result<()> {
    require_version("changelog.release_url", template)
}
