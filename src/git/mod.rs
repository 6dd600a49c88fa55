//! Git operations abstraction layer
//!
//! The release workflow only talks to git through the [Repository] trait.
//!
//! - [repository::Git2Repository]: the real implementation on top of `git2`
//! - [mock::MockRepository]: an in-memory implementation that records every
//!   mutation, for exercising the workflow without a repository on disk
//!
//! Every method distinguishes a negative answer (`Ok(false)`, an empty list)
//! from a failure to ask the question (`Err`). Callers must never fold the
//! latter into the former.
//!
//! ```rust
//! # use release_tag::git::Repository;
//! # fn example<R: Repository>(repo: &R) -> release_tag::Result<()> {
//! if repo.tag_exists("1.2.0")? {
//!     let commits = repo.commits_since("1.2.0")?;
//!     println!("{} commits since 1.2.0", commits.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::{MockRepository, Mutation};
pub use repository::Git2Repository;

use crate::error::Result;
use std::path::Path;

/// Commit information for the activity summary
#[derive(Debug, Clone, PartialEq)]
pub struct CommitInfo {
    /// The commit hash (shortened)
    pub hash: String,
    /// The commit summary line
    pub message: String,
    /// The commit author
    pub author: String,
}

/// Git operations needed by the release workflow
pub trait Repository {
    /// Does a tag with exactly this name exist?
    ///
    /// # Returns
    /// * `Ok(true)` / `Ok(false)` - The tag does / does not exist
    /// * `Err` - The lookup itself failed
    fn tag_exists(&self, tag_name: &str) -> Result<bool>;

    /// Commits reachable from HEAD but not from the given tag, oldest first.
    ///
    /// # Returns
    /// * `Ok(commits)` - Possibly empty list of commits
    /// * `Err` - If the tag doesn't exist or the history walk fails
    fn commits_since(&self, tag_name: &str) -> Result<Vec<CommitInfo>>;

    /// True if the working tree copy of `path` has no unstaged changes
    fn diff_is_empty(&self, path: &Path) -> Result<bool>;

    /// Add `path` to the index
    fn stage(&self, path: &Path) -> Result<()>;

    /// Create an annotated tag on HEAD.
    ///
    /// # Arguments
    /// * `name` - Tag name
    /// * `message` - Annotation message
    /// * `overwrite` - Replace an existing tag of the same name instead of failing
    fn create_annotated_tag(&self, name: &str, message: &str, overwrite: bool) -> Result<()>;

    /// Push a single tag to a remote
    ///
    /// # Arguments
    /// * `remote` - Name of the remote (e.g., "origin")
    /// * `tag_name` - Tag to publish
    fn push_tag(&self, remote: &str, tag_name: &str) -> Result<()>;
}
