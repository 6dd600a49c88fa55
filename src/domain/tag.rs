use crate::domain::version::{VersionForm, VersionSnapshot};

/// An annotated tag about to be created
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagRequest {
    pub name: String,
    pub message: String,
    pub overwrite: bool,
}

impl TagRequest {
    /// Build the tag for a version snapshot.
    ///
    /// The name is always the short rendering and the annotation always
    /// carries the verbose rendering, prefixed by the project name.
    pub fn for_version(project: &str, version: &VersionSnapshot, overwrite: bool) -> Self {
        let verbose = version.render(VersionForm::Verbose);
        let message = if project.is_empty() {
            verbose.to_string()
        } else {
            format!("{} {}", project, verbose)
        };

        TagRequest {
            name: version.render(VersionForm::Short).to_string(),
            message,
            overwrite,
        }
    }
}

/// Suggested command for committing a bumped version descriptor
pub fn commit_suggestion(version: &VersionSnapshot) -> String {
    format!(
        "git commit -m \"Cut {}\"",
        version.render(VersionForm::Normal)
    )
}
