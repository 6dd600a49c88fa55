use serde::{Deserialize, Serialize};
use std::fmt;

fn default_release() -> String {
    "final".to_string()
}

/// Version as stored in the version descriptor.
///
/// Holds numeric components plus a release type ("final", "beta",
/// "release candidate", ...) and a serial number within that release type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    #[serde(default = "default_release")]
    pub release: String,
    #[serde(default)]
    pub serial: u32,
}

/// The renderings a version can be asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionForm {
    /// "1.2"
    Branch,
    /// "1.2.0", "1.3rc1" - used as the tag name
    Short,
    /// "1.2", "1.3 beta 1" - used in display and commit messages
    Normal,
    /// "1.2 final" - used in tag annotations
    Verbose,
}

impl Version {
    /// Create a final release version
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Version {
            major,
            minor,
            patch,
            release: default_release(),
            serial: 0,
        }
    }

    /// Create a pre-release version (e.g. "beta", 2)
    pub fn pre_release(
        major: u32,
        minor: u32,
        patch: u32,
        release: impl Into<String>,
        serial: u32,
    ) -> Self {
        Version {
            major,
            minor,
            patch,
            release: release.into(),
            serial,
        }
    }

    pub fn is_final(&self) -> bool {
        self.release == "final"
    }

    /// Initials of the release type words: "release candidate" -> "rc"
    fn release_initials(&self) -> String {
        self.release
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .collect()
    }

    fn branch(&self) -> String {
        format!("{}.{}", self.major, self.minor)
    }

    /// Branch plus the patch component when it is non-zero, followed by the
    /// long pre-release qualifier.
    fn human(&self) -> String {
        let mut v = self.branch();
        if self.patch != 0 {
            v.push_str(&format!(".{}", self.patch));
        }
        if !self.is_final() {
            if self.serial != 0 {
                v.push_str(&format!(" {} {}", self.release, self.serial));
            } else {
                v.push_str(&format!(" pre-{}", self.release));
            }
        }
        v
    }

    /// Render the version in the requested form
    pub fn render(&self, form: VersionForm) -> String {
        match form {
            VersionForm::Branch => self.branch(),
            VersionForm::Short => {
                let mut v = self.branch();
                if self.patch != 0 || self.is_final() {
                    v.push_str(&format!(".{}", self.patch));
                }
                if !self.is_final() {
                    v.push_str(&self.release_initials());
                    if self.serial != 0 {
                        v.push_str(&self.serial.to_string());
                    }
                }
                v
            }
            VersionForm::Normal => self.human(),
            VersionForm::Verbose => {
                let mut v = self.human();
                if self.is_final() {
                    v.push_str(" final");
                }
                v
            }
        }
    }

    /// Render every form at once
    pub fn snapshot(&self) -> VersionSnapshot {
        VersionSnapshot {
            branch: self.render(VersionForm::Branch),
            short: self.render(VersionForm::Short),
            normal: self.render(VersionForm::Normal),
            verbose: self.render(VersionForm::Verbose),
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render(VersionForm::Normal))
    }
}

/// Immutable set of renderings read at one point in time.
///
/// A new snapshot must be taken after anything that may have rewritten the
/// version descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionSnapshot {
    pub branch: String,
    pub short: String,
    pub normal: String,
    pub verbose: String,
}

impl VersionSnapshot {
    pub fn render(&self, form: VersionForm) -> &str {
        match form {
            VersionForm::Branch => &self.branch,
            VersionForm::Short => &self.short,
            VersionForm::Normal => &self.normal,
            VersionForm::Verbose => &self.verbose,
        }
    }
}

impl From<&Version> for VersionSnapshot {
    fn from(version: &Version) -> Self {
        version.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_final_release_renderings() {
        let v = Version::new(1, 2, 0);
        assert_eq!(v.render(VersionForm::Branch), "1.2");
        assert_eq!(v.render(VersionForm::Short), "1.2.0");
        assert_eq!(v.render(VersionForm::Normal), "1.2");
        assert_eq!(v.render(VersionForm::Verbose), "1.2 final");
    }

    #[test]
    fn test_patch_release_renderings() {
        let v = Version::new(1, 2, 1);
        assert_eq!(v.render(VersionForm::Short), "1.2.1");
        assert_eq!(v.render(VersionForm::Normal), "1.2.1");
        assert_eq!(v.render(VersionForm::Verbose), "1.2.1 final");
    }

    #[test]
    fn test_release_candidate_renderings() {
        let v = Version::pre_release(1, 3, 0, "release candidate", 1);
        assert_eq!(v.render(VersionForm::Short), "1.3rc1");
        assert_eq!(v.render(VersionForm::Normal), "1.3 release candidate 1");
        assert_eq!(v.render(VersionForm::Verbose), "1.3 release candidate 1");
    }

    #[test]
    fn test_pre_release_without_serial() {
        let v = Version::pre_release(0, 9, 0, "beta", 0);
        assert_eq!(v.render(VersionForm::Short), "0.9b");
        assert_eq!(v.render(VersionForm::Normal), "0.9 pre-beta");
        assert_eq!(v.render(VersionForm::Verbose), "0.9 pre-beta");
    }

    #[test]
    fn test_pre_release_with_patch() {
        let v = Version::pre_release(2, 0, 3, "alpha", 2);
        assert_eq!(v.render(VersionForm::Short), "2.0.3a2");
        assert_eq!(v.render(VersionForm::Normal), "2.0.3 alpha 2");
    }

    #[test]
    fn test_snapshot_matches_render() {
        let v = Version::new(1, 3, 0);
        let snapshot = VersionSnapshot::from(&v);
        for form in [
            VersionForm::Branch,
            VersionForm::Short,
            VersionForm::Normal,
            VersionForm::Verbose,
        ] {
            assert_eq!(snapshot.render(form), v.render(form));
        }
    }

    #[test]
    fn test_deserialize_defaults_to_final() {
        let v: Version = toml::from_str("major = 1\nminor = 4\npatch = 2\n").unwrap();
        assert_eq!(v, Version::new(1, 4, 2));
        assert!(v.is_final());
    }

    #[test]
    fn test_display_uses_normal_form() {
        assert_eq!(Version::new(1, 2, 0).to_string(), "1.2");
    }
}
