use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{Version, VersionSnapshot};
use crate::error::{ReleaseTagError, Result};

/// Source of the version being released.
///
/// The underlying descriptor can be rewritten behind our back (by the
/// operator's editor), so `current` only reports what was last read and
/// `reload` must be called to observe a change.
pub trait VersionSource {
    /// Path of the version descriptor the operator edits
    fn descriptor_path(&self) -> &Path;

    /// Renderings as of the last read
    fn current(&self) -> VersionSnapshot;

    /// Re-read the descriptor and return the fresh renderings
    fn reload(&mut self) -> Result<VersionSnapshot>;
}

/// Version source backed by a TOML descriptor file:
///
/// ```toml
/// major = 1
/// minor = 2
/// patch = 0
/// release = "final"
/// serial = 0
/// ```
pub struct FileVersionAccessor {
    path: PathBuf,
    snapshot: VersionSnapshot,
}

impl FileVersionAccessor {
    /// Open and read a version descriptor.
    ///
    /// # Returns
    /// * `Ok(FileVersionAccessor)` - The descriptor was read and parsed
    /// * `Err` - If the file is missing or is not a valid descriptor
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let snapshot = read_descriptor(&path)?.snapshot();
        log::debug!(
            "Read version {} from {}",
            snapshot.short,
            path.display()
        );
        Ok(FileVersionAccessor { path, snapshot })
    }
}

impl VersionSource for FileVersionAccessor {
    fn descriptor_path(&self) -> &Path {
        &self.path
    }

    fn current(&self) -> VersionSnapshot {
        self.snapshot.clone()
    }

    fn reload(&mut self) -> Result<VersionSnapshot> {
        self.snapshot = read_descriptor(&self.path)?.snapshot();
        log::debug!(
            "Reloaded version {} from {}",
            self.snapshot.short,
            self.path.display()
        );
        Ok(self.snapshot.clone())
    }
}

/// Parse a version descriptor from disk
pub fn read_descriptor(path: &Path) -> Result<Version> {
    let contents = fs::read_to_string(path).map_err(|e| {
        ReleaseTagError::version(format!("Cannot read '{}': {}", path.display(), e))
    })?;

    toml::from_str(&contents).map_err(|e| {
        ReleaseTagError::version(format!("Invalid descriptor '{}': {}", path.display(), e))
    })
}
