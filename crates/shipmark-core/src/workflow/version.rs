//! Version label templating

use tracing::debug;

use crate::config::Config;
use crate::error::{ConfigError, Result};

/// Format a version tag based on the configuration
pub fn format_tag(config: &Config, version: &str) -> String {
    config.git.tag_format.replace("{version}", version)
}

/// Format the release commit message based on the configuration
pub fn format_commit_message(config: &Config, version: &str) -> String {
    config.git.commit_message.replace("{version}", version)
}

/// Resolve a release link template.
///
/// `{repository}` must be resolvable when the template uses it.
pub fn resolve_release_url(
    template: &str,
    version: &str,
    repository: Option<&str>,
) -> Result<String> {
    let mut url = template.replace("{version}", version);

    if url.contains("{repository}") {
        let repository = repository
            .ok_or(ConfigError::Unresolved {
                field: "changelog.release_url",
                placeholder: "{repository}",
            })?;
        url = url.replace("{repository}", repository.trim_end_matches('/'));
    }

    debug!(template, version, url = %url, "resolved release url");
    Ok(url)
}

/// Derive a browsable repository URL from a git remote URL.
///
/// Handles `git@host:org/repo.git`, `ssh://git@host/org/repo.git` and
/// `https://host/org/repo(.git)`.
pub fn repository_url_from_remote(remote: &str) -> Option<String> {
    let remote = remote.trim();

    let (host, path) = if let Some(rest) = remote.strip_prefix("git@") {
        rest.split_once(':')?
    } else if let Some(rest) = remote
        .strip_prefix("ssh://")
        .or_else(|| remote.strip_prefix("https://"))
        .or_else(|| remote.strip_prefix("http://"))
    {
        let rest = rest.rsplit_once('@').map_or(rest, |(_, host)| host);
        rest.split_once('/')?
    } else {
        return None;
    };

    let host = host.split(':').next().unwrap_or(host);
    let path = path.trim_end_matches('/');
    let path = path.strip_suffix(".git").unwrap_or(path);

    if host.is_empty() || path.is_empty() {
        return None;
    }

    Some(format!("https://{}/{}", host, path))
}
