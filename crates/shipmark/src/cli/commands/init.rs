//! Init command

use std::path::{Path, PathBuf};

use clap::{Args, ValueEnum};
use console::style;
use dialoguer::Confirm;
use tracing::info;

use shipmark_core::config::defaults::{CONFIG_TOML, CONFIG_YAML, TOML_TEMPLATE, YAML_TEMPLATE};
use shipmark_core::config::load_config;

use crate::cli::{output, Cli};

/// Configuration file format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ConfigFormat {
    #[default]
    Toml,
    Yaml,
}

impl ConfigFormat {
    fn file_name(self) -> &'static str {
        match self {
            Self::Toml => CONFIG_TOML,
            Self::Yaml => CONFIG_YAML,
        }
    }

    fn template(self) -> &'static str {
        match self {
            Self::Toml => TOML_TEMPLATE,
            Self::Yaml => YAML_TEMPLATE,
        }
    }
}

/// Initialize a new Shipmark configuration
#[derive(Debug, Args)]
pub struct InitCommand {
    /// Force overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,

    /// Never prompt; fail instead of asking to overwrite
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Configuration format
    #[arg(long = "config-format", value_enum, default_value_t = ConfigFormat::Toml)]
    pub config_format: ConfigFormat,

    /// Output file path
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl InitCommand {
    /// Execute the init command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(force = self.force, yes = self.yes, format = ?self.config_format, "executing init command");
        let cwd = std::env::current_dir()?;
        let config_path = self
            .output
            .clone()
            .unwrap_or_else(|| cwd.join(self.config_format.file_name()));

        if config_path.exists() && !self.force && !self.confirm_overwrite(&config_path)? {
            output::note("kept the existing configuration");
            return Ok(());
        }

        write_config(&config_path, self.config_format)?;

        if !cli.quiet {
            output::done(format!("created {}", output::path(&config_path)));
            println!();
            println!("Next steps:");
            println!("  1. Set {} if the repository has no origin remote", style("changelog.release_url").cyan());
            println!("  2. Add a {} heading to your changelog", style("## Unreleased").cyan());
            println!("  3. Run {} to preview a release", style("shipmark release <version> --dry-run").cyan());
        }

        Ok(())
    }
}

impl InitCommand {
    /// Ask before replacing `path`; with `--yes` there is nobody to ask
    fn confirm_overwrite(&self, path: &Path) -> anyhow::Result<bool> {
        if self.yes {
            anyhow::bail!("{} already exists, pass --force to replace it", path.display());
        }
        Ok(Confirm::new()
            .with_prompt(format!("Replace {}?", path.display()))
            .default(false)
            .interact()?)
    }
}

/// Write the template and make sure it loads back
fn write_config(path: &Path, format: ConfigFormat) -> anyhow::Result<()> {
    std::fs::write(path, format.template())?;
    load_config(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shipmark_core::config::{Config, MissingUnreleased};
    use tempfile::TempDir;

    #[test]
    fn test_written_templates_load_as_defaults() {
        let temp = TempDir::new().unwrap();
        let defaults = Config::default();

        for format in [ConfigFormat::Toml, ConfigFormat::Yaml] {
            let path = temp.path().join(format.file_name());
            write_config(&path, format).unwrap();

            let loaded = load_config(&path).unwrap();
            assert_eq!(loaded.git.tag_format, defaults.git.tag_format);
            assert_eq!(loaded.changelog.file, defaults.changelog.file);
            assert_eq!(
                loaded.changelog.on_missing_unreleased,
                MissingUnreleased::Warn
            );
        }
    }

    #[test]
    fn test_format_file_names() {
        assert_eq!(ConfigFormat::Toml.file_name(), "shipmark.toml");
        assert_eq!(ConfigFormat::Yaml.file_name(), "shipmark.yaml");
        assert_eq!(ConfigFormat::default(), ConfigFormat::Toml);
    }
}
