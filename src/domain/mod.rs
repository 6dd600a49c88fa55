//! Domain logic - version renderings and tag naming, independent of git

pub mod tag;
pub mod version;

pub use tag::{commit_suggestion, TagRequest};
pub use version::{Version, VersionForm, VersionSnapshot};
