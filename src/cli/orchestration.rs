//! Release tagging workflow
//!
//! Decides whether the current version needs a new tag, walks the operator
//! through bumping the version descriptor when it does, and creates (and
//! optionally pushes) the annotated tag.

use crate::boundary::Boundary;
use crate::config::Config;
use crate::domain::{commit_suggestion, TagRequest, VersionSnapshot};
use crate::editor::Editor;
use crate::error::Result;
use crate::git::Repository;
use crate::ui::{self, Prompt};
use crate::version::VersionSource;

const EDIT_PROMPT: &str = "Work has been done since last tag, version update is needed. \
Hit Enter to load version info in your editor: ";

/// True for "y" and "yes" in any letter case; everything else is false.
pub fn is_affirmative(value: &str) -> bool {
    matches!(value.to_lowercase().as_str(), "y" | "yes")
}

/// Arguments for the tag workflow
///
/// Decoupled from clap so the workflow can be driven programmatically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TagWorkflowArgs {
    /// Skip the "no work since tag" and "edit aborted" checks and replace an
    /// existing tag of the same name
    pub force: bool,

    /// Push the tag to the configured remote once created
    pub push: bool,
}

impl TagWorkflowArgs {
    /// Build from the operator's raw flag values
    pub fn from_flags(force: &str, push: &str) -> Self {
        TagWorkflowArgs {
            force: is_affirmative(force),
            push: is_affirmative(push),
        }
    }
}

/// Result of a successful tag workflow
#[derive(Debug, Clone, PartialEq)]
pub struct TagOutcome {
    /// The tag that was created
    pub tag: String,

    /// Its annotation message
    pub message: String,

    /// Whether an existing tag was allowed to be replaced
    pub overwrite: bool,

    /// Whether the version descriptor was edited and staged
    pub edited: bool,

    /// Commit command suggested to the operator after staging
    pub commit_suggestion: Option<String>,

    /// Whether the tag was pushed to remote
    pub pushed: bool,
}

/// Main tag workflow
///
/// 1. If the current short version is already tagged, require new commits
///    since that tag and have the operator bump the version descriptor
/// 2. Otherwise assume the descriptor was already bumped
/// 3. Create the annotated tag and optionally push it
///
/// Any error aborts the workflow before the tag is created. Query failures
/// are reported as errors, never as "no tag" or "no commits".
pub fn run_tag_workflow<R, E, V, P>(
    args: &TagWorkflowArgs,
    config: &Config,
    repo: &R,
    editor: &E,
    versions: &mut V,
    prompt: &P,
) -> Result<TagOutcome>
where
    R: Repository,
    E: Editor,
    V: VersionSource,
    P: Prompt,
{
    let mut version = versions.current();
    ui::display_status(&format!(
        "Current version: {} (tag {})",
        version.normal, version.short
    ));

    let mut suggestion = None;
    let already_tagged = repo.tag_exists(&version.short)?;

    if already_tagged {
        // The in-code version is still the last released one.
        let commits = repo.commits_since(&version.short)?;
        if commits.is_empty() {
            if !args.force {
                return Err(Boundary::NoWorkSinceTag {
                    tag: version.short.clone(),
                }
                .into());
            }
            ui::display_warning(&format!(
                "No work done since tag '{}', re-tagging because of --force",
                version.short
            ));
        } else {
            ui::display_commit_summary(&commits, &version.short);
        }

        let (bumped, command) = update_version(args, repo, editor, versions, prompt)?;
        version = bumped;
        suggestion = Some(command);
    } else {
        ui::display_status("Version has already been updated, no need to edit...");
    }

    let request = TagRequest::for_version(&config.project.name, &version, args.force);

    ui::display_status(&format!("Creating tag: {}", request.name));
    repo.create_annotated_tag(&request.name, &request.message, request.overwrite)?;
    ui::display_success(&format!(
        "Created tag {} (\"{}\")",
        request.name, request.message
    ));

    let remote = &config.remote.name;
    if args.push {
        ui::display_status(&format!("Pushing tag: {} to {}", request.name, remote));
        repo.push_tag(remote, &request.name)?;
        ui::display_success(&format!("Pushed tag {} to {}", request.name, remote));
    } else {
        ui::display_manual_push_instruction(&request.name, remote);
    }

    Ok(TagOutcome {
        tag: request.name,
        message: request.message,
        overwrite: request.overwrite,
        edited: already_tagged,
        commit_suggestion: suggestion,
        pushed: args.push,
    })
}

/// Have the operator edit the version descriptor, then stage it.
///
/// Returns the reloaded version and the commit command to suggest.
fn update_version<R, E, V, P>(
    args: &TagWorkflowArgs,
    repo: &R,
    editor: &E,
    versions: &mut V,
    prompt: &P,
) -> Result<(VersionSnapshot, String)>
where
    R: Repository,
    E: Editor,
    V: VersionSource,
    P: Prompt,
{
    let path = versions.descriptor_path().to_path_buf();

    prompt.acknowledge(EDIT_PROMPT)?;
    let code = editor.launch(&path)?;
    log::debug!("Editor exited with {:?}", code);

    // An unchanged file usually means the operator quit without saving.
    if repo.diff_is_empty(&path)? && !args.force {
        return Err(Boundary::EditAborted { path }.into());
    }

    let version = versions.reload()?;
    ui::display_status(&format!("Version is now {} (tag {})", version.normal, version.short));

    repo.stage(&path)?;
    log::debug!("Staged {}", path.display());
    let command = commit_suggestion(&version);
    ui::display_commit_suggestion(&command);

    Ok((version, command))
}
