use std::fmt;
use std::path::PathBuf;

/// Conditions under which tagging would produce a tag identical to the last one.
/// Both are recoverable by doing the work or re-running with `--force yes`.
#[derive(Debug, Clone, PartialEq)]
pub enum Boundary {
    /// The current version is already tagged and nothing was committed since
    NoWorkSinceTag { tag: String },
    /// The editor exited without leaving a change in the version descriptor
    EditAborted { path: PathBuf },
}

impl fmt::Display for Boundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Boundary::NoWorkSinceTag { tag } => {
                write!(
                    f,
                    "No work done since last tag '{}'! Commit something or pass --force yes to re-tag",
                    tag
                )
            }
            Boundary::EditAborted { path } => {
                write!(
                    f,
                    "You seem to have aborted the edit of '{}', so I'm aborting too",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for Boundary {}
