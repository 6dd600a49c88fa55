use std::fs;

use release_tag::version::{FileVersionAccessor, VersionSource};
use release_tag::ReleaseTagError;
use tempfile::TempDir;

#[test]
fn test_reload_observes_external_edit() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("version.toml");
    fs::write(&path, "major = 1\nminor = 2\npatch = 0\n").unwrap();

    let mut versions = FileVersionAccessor::open(&path).unwrap();
    let before = versions.current();
    assert_eq!(before.short, "1.2.0");
    assert_eq!(before.verbose, "1.2 final");

    fs::write(
        &path,
        "major = 1\nminor = 3\npatch = 0\nrelease = \"release candidate\"\nserial = 1\n",
    )
    .unwrap();

    // Nothing changes until the descriptor is reloaded
    assert_eq!(versions.current(), before);

    let after = versions.reload().unwrap();
    assert_eq!(after.short, "1.3rc1");
    assert_eq!(after.normal, "1.3 release candidate 1");
    assert_eq!(versions.current(), after);
    assert_eq!(versions.descriptor_path(), path.as_path());
}

#[test]
fn test_missing_descriptor_is_an_error() {
    let dir = TempDir::new().unwrap();
    let result = FileVersionAccessor::open(dir.path().join("version.toml"));
    assert!(matches!(result, Err(ReleaseTagError::Version(_))));
}

#[test]
fn test_malformed_descriptor_on_reload_keeps_error_distinct() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("version.toml");
    fs::write(&path, "major = 1\nminor = 2\npatch = 0\n").unwrap();
    let mut versions = FileVersionAccessor::open(&path).unwrap();

    fs::write(&path, "major = \"one\"\n").unwrap();
    let err = versions.reload().unwrap_err();
    assert!(err.to_string().contains("Invalid descriptor"));
    assert!(!err.is_precondition());
}
