//! Configuration loading

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::{ConfigError, Result};

use super::defaults::CONFIG_FILE_NAMES;
use super::types::Config;
use super::validation::validate_config;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Toml,
    Yaml,
}

impl Format {
    fn of(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Self::Toml,
            _ => Self::Yaml,
        }
    }

    fn parse(self, path: &Path, content: &str) -> std::result::Result<Config, ConfigError> {
        let path = path.to_path_buf();
        match self {
            Self::Toml => toml::from_str(content).map_err(|source| ConfigError::Toml { path, source }),
            Self::Yaml => {
                serde_yaml::from_str(content).map_err(|source| ConfigError::Yaml { path, source })
            }
        }
    }
}

/// Load and validate a configuration file
pub fn load_config(path: &Path) -> Result<Config> {
    let format = Format::of(path);
    info!(path = %path.display(), ?format, "loading config");

    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config = format.parse(path, &content)?;

    validate_config(&config)?;
    Ok(config)
}

/// Nearest configuration file at or above `start_dir`.
///
/// In each directory the file names are tried in order, first directly and
/// then under `.github/`.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    let found = start_dir
        .ancestors()
        .flat_map(|dir| {
            CONFIG_FILE_NAMES
                .into_iter()
                .flat_map(move |name| [dir.join(name), dir.join(".github").join(name)])
        })
        .find(|candidate| candidate.is_file());

    match &found {
        Some(path) => debug!(path = %path.display(), "found config file"),
        None => debug!(start_dir = %start_dir.display(), "no config file found"),
    }
    found
}

/// Load the nearest configuration, or defaults when there is none.
///
/// A config file that exists but fails to parse or validate is an error.
pub fn load_config_or_default(dir: &Path) -> Result<(Config, Option<PathBuf>)> {
    let Some(path) = find_config(dir) else {
        warn!(dir = %dir.display(), "no config found, using defaults");
        return Ok((Config::default(), None));
    };

    let config = load_config(&path)?;
    Ok((config, Some(path)))
}
