use crate::error::{NetworkError, ReleaseTagError, Result};
use crate::git::CommitInfo;
use git2::{Oid, Repository as Git2Repo};
use std::path::{Path, PathBuf};

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }

    /// Root of the working tree
    pub fn workdir(&self) -> Result<&Path> {
        self.repo
            .workdir()
            .ok_or_else(|| ReleaseTagError::config("Repository is bare and has no working tree"))
    }

    /// Paths handed to the index and to pathspecs must be workdir-relative.
    fn relative_path(&self, path: &Path) -> Result<PathBuf> {
        if path.is_relative() {
            return Ok(path.to_path_buf());
        }

        let workdir = self.workdir()?;
        path.strip_prefix(workdir)
            .map(Path::to_path_buf)
            .map_err(|_| {
                ReleaseTagError::config(format!(
                    "'{}' is outside the working tree '{}'",
                    path.display(),
                    workdir.display()
                ))
            })
    }

    fn tag_target(&self, tag_name: &str) -> Result<Oid> {
        let reference = self
            .repo
            .find_reference(&format!("refs/tags/{}", tag_name))
            .map_err(|e| ReleaseTagError::tag(format!("Cannot find tag '{}': {}", tag_name, e)))?;

        let commit = reference
            .peel_to_commit()
            .map_err(|e| ReleaseTagError::tag(format!("Cannot peel tag '{}': {}", tag_name, e)))?;

        Ok(commit.id())
    }
}

impl super::Repository for Git2Repository {
    fn tag_exists(&self, tag_name: &str) -> Result<bool> {
        let reference_name = format!("refs/tags/{}", tag_name);

        match self.repo.find_reference(&reference_name) {
            Ok(_) => Ok(true),
            Err(e) if e.code() == git2::ErrorCode::NotFound => Ok(false),
            Err(e) => Err(ReleaseTagError::tag(format!(
                "Cannot look up tag '{}': {}",
                tag_name, e
            ))),
        }
    }

    fn commits_since(&self, tag_name: &str) -> Result<Vec<CommitInfo>> {
        let tag_oid = self.tag_target(tag_name)?;

        let mut revwalk = self.repo.revwalk()?;
        revwalk.push_head()?;
        revwalk.hide(tag_oid)?;

        let mut commits = Vec::new();

        for oid_result in revwalk {
            let oid = oid_result?;
            let commit = self.repo.find_commit(oid)?;

            let message = commit.summary().unwrap_or("(empty message)").to_string();
            let author = commit.author().name().unwrap_or("unknown").to_string();

            commits.push(CommitInfo {
                hash: oid.to_string()[..7].to_string(),
                message,
                author,
            });
        }

        commits.reverse();
        Ok(commits)
    }

    fn diff_is_empty(&self, path: &Path) -> Result<bool> {
        let relative = self.relative_path(path)?;

        let mut options = git2::DiffOptions::new();
        options.pathspec(relative.as_path());

        let diff = self.repo.diff_index_to_workdir(None, Some(&mut options))?;

        Ok(diff.deltas().len() == 0)
    }

    fn stage(&self, path: &Path) -> Result<()> {
        let relative = self.relative_path(path)?;

        let mut index = self.repo.index()?;
        index.add_path(&relative)?;
        index.write()?;

        Ok(())
    }

    fn create_annotated_tag(&self, name: &str, message: &str, overwrite: bool) -> Result<()> {
        let head = self.repo.head()?.peel_to_commit()?;
        let tagger = self
            .repo
            .signature()
            .map_err(|e| ReleaseTagError::config(format!("No git identity configured: {}", e)))?;

        match self
            .repo
            .tag(name, head.as_object(), &tagger, message, overwrite)
        {
            Ok(_) => Ok(()),
            Err(e) if e.code() == git2::ErrorCode::Exists => Err(ReleaseTagError::tag(format!(
                "Tag '{}' already exists; pass --force yes to replace it",
                name
            ))),
            Err(e) => Err(ReleaseTagError::tag(format!(
                "Cannot create tag '{}': {}",
                name, e
            ))),
        }
    }

    fn push_tag(&self, remote: &str, tag_name: &str) -> Result<()> {
        let mut remote_handle = self
            .repo
            .find_remote(remote)
            .map_err(|e| ReleaseTagError::remote(format!("Cannot find remote '{}': {}", remote, e)))?;

        let mut rejection: Option<String> = None;
        let mut callbacks = git2::RemoteCallbacks::new();
        callbacks.credentials(|_url, username_from_url, allowed_types| {
            let username = username_from_url.unwrap_or("git");

            if allowed_types.contains(git2::CredentialType::SSH_KEY) {
                if let Ok(cred) = git2::Cred::ssh_key_from_agent(username) {
                    return Ok(cred);
                }

                if let Some(home) = dirs::home_dir() {
                    for key in ["id_ed25519", "id_rsa", "id_ecdsa"] {
                        let key_path = home.join(".ssh").join(key);
                        if key_path.exists() {
                            return git2::Cred::ssh_key(username, None, &key_path, None);
                        }
                    }
                }
            }

            git2::Cred::default()
        });

        // The remote reports per-ref rejections here rather than failing the push.
        callbacks.push_update_reference(|refname, status| {
            if let Some(status) = status {
                rejection = Some(format!("{}: {}", refname, status));
            }
            Ok(())
        });

        let mut push_options = git2::PushOptions::new();
        push_options.remote_callbacks(callbacks);

        let refspec = format!("refs/tags/{}:refs/tags/{}", tag_name, tag_name);
        let pushed = remote_handle.push(&[refspec.as_str()], Some(&mut push_options));
        drop(push_options);

        match pushed {
            Ok(()) => match rejection {
                Some(reason) => Err(ReleaseTagError::remote(format!(
                    "Remote '{}' rejected tag {}",
                    remote, reason
                ))),
                None => Ok(()),
            },
            Err(e) if e.class() == git2::ErrorClass::Net || e.class() == git2::ErrorClass::Ssh => {
                Err(NetworkError::wrapping(
                    format!("Could not reach remote '{}' to push tag '{}'", remote, tag_name),
                    e,
                )
                .into())
            }
            Err(e) => Err(ReleaseTagError::remote(format!(
                "Failed to push tag '{}' to '{}': {}",
                tag_name, remote, e
            ))),
        }
    }
}
