//! Promote command

use clap::Args;
use tracing::info;

use shipmark_changelog::{ChangelogDocument, Promoter, Promotion};
use shipmark_core::config::load_config_or_default;
use shipmark_core::workflow::{read_changelog, write_changelog, ReleasePlan};
use shipmark_git::GitRepo;

use super::release::resolve_plan;
use crate::cli::args::ChangelogArgs;
use crate::cli::{output, Cli, OutputFormat};

/// Promote the Unreleased changelog section without touching git
#[derive(Debug, Args)]
pub struct PromoteCommand {
    /// Version to promote the Unreleased section to
    #[arg(id = "promote_version", value_name = "VERSION")]
    pub version: String,

    /// Write back to the changelog (default: print to stdout)
    #[arg(short, long)]
    pub write: bool,

    #[command(flatten)]
    pub changelog: ChangelogArgs,
}

impl PromoteCommand {
    /// Execute the promote command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(version = %self.version, write = self.write, "executing promote command");
        let cwd = std::env::current_dir()?;
        let (config, _) = load_config_or_default(&cwd)?;

        let repo = GitRepo::discover(&cwd).ok();
        let options = self.changelog.to_options(&self.version, &cwd);
        let plan = resolve_plan(&config, &options, repo.as_ref(), &cwd)?;

        let promotion = promote_changelog(&plan, self.write)?;
        let rendered = promotion.document.render();

        match cli.format {
            OutputFormat::Json => {
                let output = serde_json::json!({
                    "version": plan.version,
                    "date": plan.date.to_string(),
                    "changelog": plan.changelog_path.to_string_lossy(),
                    "release_url": plan.release_url,
                    "unreleased_found": promotion.found_unreleased(),
                    "written": self.write,
                    "content": (!self.write).then_some(&rendered),
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
            OutputFormat::Text if !self.write => print!("{}", rendered),
            OutputFormat::Text if !cli.quiet => {
                output::done(format!("updated {}", output::path(&plan.changelog_path)))
            }
            OutputFormat::Text => {}
        }

        Ok(())
    }
}

/// Promote the planned changelog, writing it back when `write` is set
pub(crate) fn promote_changelog(plan: &ReleasePlan, write: bool) -> shipmark_core::Result<Promotion> {
    let content = read_changelog(&plan.changelog_path)?;
    let promotion = Promoter::new()
        .promote(
            &ChangelogDocument::parse(&content),
            &plan.version,
            plan.date,
            &plan.release_url,
        )
        .check(plan.on_missing_unreleased, &plan.changelog_path)?;

    if write {
        write_changelog(&plan.changelog_path, &promotion.document.render())?;
    }
    Ok(promotion)
}
