//! Release command

use std::path::Path;

use clap::Args;
use console::style;
use tracing::{info, warn};

use shipmark_changelog::{ChangelogDocument, Promoter, Promotion};
use shipmark_core::config::{load_config_or_default, Config};
use shipmark_core::error::{GitError, WorkflowError};
use shipmark_core::workflow::{
    read_changelog, validate_release, write_changelog, ReleaseOptions, ReleasePlan,
};
use shipmark_core::ReleaseResult;
use shipmark_git::GitRepo;

use crate::cli::args::ChangelogArgs;
use crate::cli::{output, Cli, OutputFormat};

/// Promote the changelog, commit it and tag the release
#[derive(Debug, Args)]
pub struct ReleaseCommand {
    /// Version to release, used verbatim in the heading, link and tag
    #[arg(id = "release_version", value_name = "VERSION")]
    pub version: String,

    /// Show what would change without writing, committing or tagging
    #[arg(long)]
    pub dry_run: bool,

    /// Only rewrite the changelog, skip stage, commit and tag
    #[arg(long)]
    pub no_git: bool,

    /// Release even if the working directory has uncommitted changes
    #[arg(long)]
    pub allow_dirty: bool,

    #[command(flatten)]
    pub changelog: ChangelogArgs,
}

impl ReleaseCommand {
    /// Execute the release command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(
            version = %self.version,
            dry_run = self.dry_run,
            no_git = self.no_git,
            "executing release command"
        );
        let cwd = std::env::current_dir()?;
        let (config, config_path) = load_config_or_default(&cwd)?;
        let text = !cli.quiet && cli.format == OutputFormat::Text;

        if config_path.is_none() && text {
            output::note(format!(
                "no configuration found, using defaults (run {} to create one)",
                style("shipmark init").cyan()
            ));
        }

        // Without git the repository is still used, when there is one, for `{repository}`
        let repo = if self.no_git {
            GitRepo::discover(&cwd).ok()
        } else {
            Some(GitRepo::discover(&cwd)?)
        };

        let mut options = self.changelog.to_options(&self.version, &cwd);
        options.dry_run = self.dry_run;
        options.allow_dirty = self.allow_dirty;

        let plan = resolve_plan(&config, &options, repo.as_ref(), &cwd)?;
        let git = if self.no_git { None } else { repo.as_ref() };
        let (result, promotion) = run_release(&plan, git)?;

        match cli.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
            OutputFormat::Text if text => print_summary(&result, &promotion),
            OutputFormat::Text => {}
        }

        Ok(())
    }
}

/// Resolve the release plan, reading the repository URL from the configured remote
pub(crate) fn resolve_plan(
    config: &Config,
    options: &ReleaseOptions,
    repo: Option<&GitRepo>,
    cwd: &Path,
) -> anyhow::Result<ReleasePlan> {
    let (root, repository) = match repo {
        Some(repo) => (repo.workdir(), repo.repository_url(&config.git.remote)?),
        None => (cwd, None),
    };

    Ok(ReleasePlan::resolve(
        config,
        options,
        root,
        repository.as_deref(),
    )?)
}

/// Run a planned release.
///
/// With a repository its state is checked first, so a taken tag or a
/// disallowed dirty tree stops the run before the changelog is touched. Then
/// the changelog is promoted and, unless this is a dry run, written back,
/// staged, committed and tagged. A failing git step aborts the run; earlier
/// steps stay applied.
pub(crate) fn run_release(
    plan: &ReleasePlan,
    repo: Option<&GitRepo>,
) -> shipmark_core::Result<(ReleaseResult, Promotion)> {
    let mut warnings = Vec::new();
    if let Some(repo) = repo {
        let state = repo.state(&plan.tag)?;
        warnings = validate_release(&state, plan)?.warnings;
    }

    let content = read_changelog(&plan.changelog_path)?;
    let promotion = Promoter::new()
        .promote(
            &ChangelogDocument::parse(&content),
            &plan.version,
            plan.date,
            &plan.release_url,
        )
        .check(plan.on_missing_unreleased, &plan.changelog_path)?;

    let mut result = ReleaseResult::new(&plan.version, plan.date, &plan.tag)
        .with_changelog(&plan.changelog_path)
        .with_release_url(&plan.release_url)
        .with_dry_run(plan.dry_run);
    result.unreleased_found = promotion.found_unreleased();
    result.notes = warnings;
    if !result.unreleased_found {
        result = result.add_note("no '## Unreleased' heading found; only the link reference was added");
    }

    if plan.dry_run {
        info!(version = %plan.version, "dry run, nothing written");
        return Ok((result, promotion));
    }

    write_changelog(&plan.changelog_path, &promotion.document.render())?;

    let Some(repo) = repo else {
        return Ok((result, promotion));
    };

    repo.stage_path(&plan.changelog_path)
        .map_err(|e| step_failed("stage", e))?;

    let commit = repo
        .commit(&plan.commit_message)
        .map_err(|e| step_failed("commit", e))?;
    result.commit = Some(commit.id);

    let message = plan.annotate_tag.then(|| plan.tag_message());
    repo.create_tag(&plan.tag, message.as_deref())
        .map_err(|e| step_failed("tag", e))?;
    result.tagged = true;

    Ok((result, promotion))
}

fn step_failed(step: &'static str, source: GitError) -> WorkflowError {
    warn!(step, error = %source, "git step failed");
    WorkflowError::Step { step, source }
}

fn print_summary(result: &ReleaseResult, promotion: &Promotion) {
    for note in &result.notes {
        output::note(note);
    }

    output::field("version", output::version(&result.version));
    output::field("date", result.date);
    output::field("tag", output::tag(&result.tag));
    output::field("changelog", output::path(&result.changelog));
    output::field("link", &result.release_url);
    println!();

    if result.dry_run {
        println!("Dry run, nothing written. The changelog would gain:");
        let lines = promotion.document.lines();
        let heading = promotion.unreleased_line.map(|index| &lines[index + 2]);
        for line in heading.into_iter().chain(lines.last()) {
            print!("    {}", line);
        }
        return;
    }

    output::done(format!("updated {}", output::path(&result.changelog)));
    if let Some(id) = &result.commit {
        output::done(format!("committed {}", id.get(..7).unwrap_or(id)));
    }
    if result.tagged {
        output::done(format!("tagged {}", output::tag(&result.tag)));
    }
}
