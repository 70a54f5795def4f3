use anyhow::{Context, Result};
use clap::Parser;

use git_next_version::boundary::BoundaryWarning;
use git_next_version::cli::{run_version_workflow, VersionInputs, VersionOutcome};
use git_next_version::config;
use git_next_version::git::Git2TagStore;
use git_next_version::outputs::OutputTargets;
use git_next_version::ui;

#[derive(clap::Parser)]
#[command(
    name = "git-next-version",
    version,
    about = "Compute the next unused semantic-version tag for a CI pipeline"
)]
struct Args {
    #[arg(long, env = "INPUT_BASEBRANCH", help = "Target branch; 'main' cuts stable releases")]
    base_branch: Option<String>,

    #[arg(
        long,
        env = "INPUT_UPGRADETYPE",
        help = "MAJOR, MINOR or PATCH (default PATCH), used on main"
    )]
    upgrade_type: Option<String>,

    #[arg(long, env = "INPUT_LASTTAG", help = "Most recent stable tag, used on main")]
    last_tag: Option<String>,

    #[arg(
        long,
        env = "INPUT_LASTMAINTAG",
        help = "Most recent stable tag, used on other branches"
    )]
    last_main_tag: Option<String>,

    #[arg(
        long,
        env = "INPUT_LASTDEVELOPTAG",
        help = "Most recent pre-release tag, used on other branches"
    )]
    last_develop_tag: Option<String>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, default_value = ".", help = "Repository whose tags are probed")]
    repo: String,

    #[arg(long, help = "Fetch tags from the configured remote before probing")]
    fetch_tags: bool,

    #[arg(long, help = "Give up after this many taken candidate tags")]
    max_attempts: Option<u64>,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let config = config::load_config(args.config.as_deref()).context("Error loading config")?;

    let store = match Git2TagStore::open(&args.repo) {
        Ok(store) => store,
        Err(e) => {
            ui::display_boundary_warning(&BoundaryWarning::RepositoryUnavailable {
                path: args.repo.clone(),
                reason: e.to_string(),
            });
            Git2TagStore::detached()
        }
    };

    if args.fetch_tags {
        let remote = &config.probe.remote;
        ui::display_status(&format!("Fetching tags from '{}'...", remote));
        match store.fetch_tags(remote) {
            Ok(()) => ui::display_success(&format!("Fetched tags from '{}'", remote)),
            Err(e) => ui::display_boundary_warning(&BoundaryWarning::FetchFailed {
                remote: remote.clone(),
                reason: e.to_string(),
            }),
        }
    }

    let inputs = VersionInputs {
        base_branch: args.base_branch,
        upgrade_type: args.upgrade_type,
        last_tag: args.last_tag,
        last_main_tag: args.last_main_tag,
        last_develop_tag: args.last_develop_tag,
    };
    if let Some(branch) = inputs.base_branch.as_deref() {
        ui::display_status(&format!("Computing next version for branch '{}'", branch));
    }

    let max_attempts = args.max_attempts.or(config.probe.max_attempts);
    let outcome = run_version_workflow(&inputs, &store, max_attempts)
        .context("Failed to compute the next version")?;

    report(&outcome);

    OutputTargets::from_env()
        .publish(&outcome.version, &config.outputs)
        .context("Failed to publish the version")?;
    ui::display_success(&format!("New version: {}", outcome.version));

    Ok(())
}

fn report(outcome: &VersionOutcome) {
    for warning in &outcome.warnings {
        ui::display_boundary_warning(warning);
    }

    let line = if outcome.branch.is_release_branch() {
        "stable release line"
    } else {
        "pre-release line"
    };
    ui::display_status(&format!("Branch '{}' is on the {}", outcome.branch.name, line));

    ui::display_skipped_candidates(&outcome.skipped);
    ui::display_proposed_version(outcome.previous_tag.as_deref(), &outcome.version);
}
