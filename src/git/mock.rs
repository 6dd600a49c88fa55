use crate::error::{ReleaseTagError, Result};
use crate::git::{CommitInfo, Repository};
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

/// A change the workflow asked the repository to make
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    Staged(PathBuf),
    Tagged {
        name: String,
        message: String,
        overwrite: bool,
    },
    Pushed {
        remote: String,
        tag: String,
    },
}

/// Mock repository for testing without actual git operations.
///
/// Queries answer from the configured state; mutations are recorded in order
/// and new tags become visible to later queries.
pub struct MockRepository {
    tags: RefCell<HashSet<String>>,
    commits_since: HashMap<String, Vec<CommitInfo>>,
    dirty_paths: HashSet<PathBuf>,
    broken_tag_lookup: bool,
    mutations: RefCell<Vec<Mutation>>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        MockRepository {
            tags: RefCell::new(HashSet::new()),
            commits_since: HashMap::new(),
            dirty_paths: HashSet::new(),
            broken_tag_lookup: false,
            mutations: RefCell::new(Vec::new()),
        }
    }

    /// Add an existing tag
    pub fn add_tag(&mut self, name: impl Into<String>) {
        self.tags.get_mut().insert(name.into());
    }

    /// Add a commit made after `tag`
    pub fn add_commit_since(&mut self, tag: impl Into<String>, info: CommitInfo) {
        self.commits_since.entry(tag.into()).or_default().push(info);
    }

    /// Mark a path as modified in the working tree
    pub fn mark_dirty(&mut self, path: impl Into<PathBuf>) {
        self.dirty_paths.insert(path.into());
    }

    /// Make every tag lookup fail, as when git itself cannot run
    pub fn break_tag_lookup(&mut self) {
        self.broken_tag_lookup = true;
    }

    /// Every mutation requested so far, in order
    pub fn mutations(&self) -> Vec<Mutation> {
        self.mutations.borrow().clone()
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn tag_exists(&self, tag_name: &str) -> Result<bool> {
        if self.broken_tag_lookup {
            return Err(ReleaseTagError::tag(format!(
                "Cannot look up tag '{}': repository unavailable",
                tag_name
            )));
        }
        Ok(self.tags.borrow().contains(tag_name))
    }

    fn commits_since(&self, tag_name: &str) -> Result<Vec<CommitInfo>> {
        if !self.tags.borrow().contains(tag_name) {
            return Err(ReleaseTagError::tag(format!(
                "Cannot find tag '{}'",
                tag_name
            )));
        }
        Ok(self
            .commits_since
            .get(tag_name)
            .cloned()
            .unwrap_or_default())
    }

    fn diff_is_empty(&self, path: &Path) -> Result<bool> {
        Ok(!self.dirty_paths.contains(path))
    }

    fn stage(&self, path: &Path) -> Result<()> {
        self.mutations
            .borrow_mut()
            .push(Mutation::Staged(path.to_path_buf()));
        Ok(())
    }

    fn create_annotated_tag(&self, name: &str, message: &str, overwrite: bool) -> Result<()> {
        let mut tags = self.tags.borrow_mut();
        if tags.contains(name) && !overwrite {
            return Err(ReleaseTagError::tag(format!(
                "Tag '{}' already exists; pass --force yes to replace it",
                name
            )));
        }
        tags.insert(name.to_string());

        self.mutations.borrow_mut().push(Mutation::Tagged {
            name: name.to_string(),
            message: message.to_string(),
            overwrite,
        });
        Ok(())
    }

    fn push_tag(&self, remote: &str, tag_name: &str) -> Result<()> {
        if !self.tags.borrow().contains(tag_name) {
            return Err(ReleaseTagError::remote(format!(
                "No tag '{}' to push",
                tag_name
            )));
        }
        self.mutations.borrow_mut().push(Mutation::Pushed {
            remote: remote.to_string(),
            tag: tag_name.to_string(),
        });
        Ok(())
    }
}
