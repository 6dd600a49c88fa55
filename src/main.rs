use anyhow::{Context, Result};
use clap::Parser;

use release_tag::cli::{run_tag_workflow, TagWorkflowArgs};
use release_tag::config;
use release_tag::editor::ExternalEditor;
use release_tag::git::Git2Repository;
use release_tag::ui::{self, TerminalPrompt};
use release_tag::version::FileVersionAccessor;

#[derive(clap::Parser)]
#[command(
    name = "release-tag",
    version,
    about = "Tag a new release from the in-repository version descriptor"
)]
struct Args {
    #[arg(
        long,
        default_value = "no",
        help = "Re-tag even without new commits or an edited version file (y/yes)"
    )]
    force: String,

    #[arg(
        long,
        default_value = "no",
        help = "Push the created tag to the remote (y/yes)"
    )]
    push: String,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, help = "Version descriptor path, relative to the repository root")]
    version_file: Option<String>,

    #[arg(long, help = "Remote to push the tag to")]
    remote: Option<String>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let repo = Git2Repository::open(".").context("Not in a git repository")?;
    let workdir = repo.workdir()?;

    // Load configuration
    let mut config = match config::load_config(args.config.as_deref(), Some(workdir)) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };
    if let Some(version_file) = args.version_file {
        config.project.version_file = version_file;
    }
    if let Some(remote) = args.remote {
        config.remote.name = remote;
    }

    let descriptor = workdir.join(&config.project.version_file);
    let mut versions = FileVersionAccessor::open(&descriptor)
        .with_context(|| format!("Cannot load version from {}", descriptor.display()))?;
    let editor = ExternalEditor::from_env(config.behavior.editor.as_deref());
    match editor.command() {
        Some(command) => log::debug!("Using editor '{}'", command),
        None => log::warn!("No editor configured; set $EDITOR or behavior.editor"),
    }

    let workflow_args = TagWorkflowArgs::from_flags(&args.force, &args.push);
    log::debug!("Running tag workflow with {:?}", workflow_args);

    match run_tag_workflow(
        &workflow_args,
        &config,
        &repo,
        &editor,
        &mut versions,
        &TerminalPrompt::new(),
    ) {
        Ok(outcome) => {
            let scope = if outcome.pushed {
                "published"
            } else {
                "created locally"
            };
            println!("\n{} Tag {} {}\n", console::style("✓").green(), outcome.tag, scope);
            Ok(())
        }
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    }
}
