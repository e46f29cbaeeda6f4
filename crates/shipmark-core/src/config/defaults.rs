//! Config file names and the templates `shipmark init` writes

/// TOML config file written by `shipmark init`
pub const CONFIG_TOML: &str = "shipmark.toml";

/// YAML config file written by `shipmark init --config-format yaml`
pub const CONFIG_YAML: &str = "shipmark.yaml";

/// Names looked for in each directory, most preferred first
pub const CONFIG_FILE_NAMES: [&str; 4] = [CONFIG_TOML, CONFIG_YAML, ".shipmark.toml", ".shipmark.yaml"];

/// YAML template with every key at its default
pub const YAML_TEMPLATE: &str = r#"# Shipmark Configuration

git:
  remote: origin
  require_clean: false
  commit_message: "chore: creating version {version}"
  tag_format: "v{version}"
  annotate_tags: false

changelog:
  file: CHANGELOG.md
  on_missing_unreleased: warn
  release_url: "{repository}/releases/v{version}"
"#;

/// TOML template with every key at its default
pub const TOML_TEMPLATE: &str = r#"# Shipmark Configuration

[git]
remote = "origin"
require_clean = false
commit_message = "chore: creating version {version}"
tag_format = "v{version}"
annotate_tags = false

[changelog]
file = "CHANGELOG.md"
on_missing_unreleased = "warn"
release_url = "{repository}/releases/v{version}"
"#;
