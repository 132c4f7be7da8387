// tests/resolver_test.rs
//
// End-to-end resolution against real git repositories created in temp dirs.

use std::fs;
use std::path::Path;

use git2::{Repository, Signature};
use serial_test::serial;
use tempfile::TempDir;

use release_resolve::git::{GitTagSource, TagSource};
use release_resolve::nightly::TagQuery;
use release_resolve::version::Version;
use release_resolve::{resolver, ReleaseError};

/// Initializes a repository with one commit and the given lightweight tags.
fn init_repo_with_tags(dir: &TempDir, tags: &[&str]) {
    let repo = Repository::init(dir.path()).unwrap();
    let sig = Signature::now("tester", "tester@example.com").unwrap();
    let tree_id = {
        let mut index = repo.index().unwrap();
        index.write_tree().unwrap()
    };
    let tree = repo.find_tree(tree_id).unwrap();
    let oid = repo
        .commit(Some("HEAD"), &sig, &sig, "initial commit", &tree, &[])
        .unwrap();
    let commit = repo.find_commit(oid).unwrap();
    for tag in tags {
        repo.tag_lightweight(tag, commit.as_object(), false).unwrap();
    }
}

fn write_manifest(dir: &TempDir, version: &str) -> std::path::PathBuf {
    let path = dir.path().join("package.json");
    fs::write(
        &path,
        format!(r#"{{"name": "demo", "version": "{}"}}"#, version),
    )
    .unwrap();
    path
}

#[test]
fn test_git_tag_source_glob_scoping() {
    let dir = TempDir::new().unwrap();
    init_repo_with_tags(
        &dir,
        &[
            "v1.2.4-nightly.0",
            "v1.2.4-nightly.2",
            "v1.2.5-nightly.7",
            "v1.2.4",
        ],
    );

    let source = GitTagSource::discover_at(dir.path()).unwrap();
    let mut tags = source.tags_matching("v1.2.4-nightly.*").unwrap();
    tags.sort();
    assert_eq!(tags, vec!["v1.2.4-nightly.0", "v1.2.4-nightly.2"]);
}

#[test]
fn test_nightly_resolution_against_real_repository() {
    let dir = TempDir::new().unwrap();
    init_repo_with_tags(&dir, &["v1.2.4-nightly.0", "v1.2.4-nightly.2"]);
    let manifest = write_manifest(&dir, "1.2.3");

    let source = GitTagSource::discover_at(dir.path()).unwrap();
    let release = resolver::resolve(
        true,
        None,
        &manifest,
        Some(&source as &dyn TagSource),
    )
    .unwrap();

    assert_eq!(release.release_tag, "v1.2.4-nightly.3");
    assert_eq!(release.release_version, "1.2.4-nightly.3");
    assert_eq!(release.npm_tag, "nightly");
}

#[test]
fn test_nightly_resolution_first_build() {
    let dir = TempDir::new().unwrap();
    init_repo_with_tags(&dir, &[]);
    let manifest = write_manifest(&dir, "0.3.9");

    let source = GitTagSource::discover_at(dir.path()).unwrap();
    let query = TagQuery::scan(Some(&source), &Version::new(0, 3, 10));
    assert_eq!(query, TagQuery::Empty);

    let release =
        resolver::resolve(true, None, &manifest, Some(&source as &dyn TagSource)).unwrap();
    assert_eq!(release.release_tag, "v0.3.10-nightly.0");
}

#[test]
fn test_nightly_resolution_without_repository() {
    // A plain directory with no .git: the count starts at zero.
    let dir = TempDir::new().unwrap();
    let manifest = write_manifest(&dir, "1.2.3");

    assert!(GitTagSource::discover_at(dir.path()).is_err());

    let release = resolver::resolve(true, None, &manifest, None).unwrap();
    assert_eq!(release.release_tag, "v1.2.4-nightly.0");
    assert_eq!(release.npm_tag, "nightly");
}

#[test]
fn test_manual_mode_ignores_repository_state() {
    let dir = TempDir::new().unwrap();
    init_repo_with_tags(&dir, &["v9.9.9-nightly.9"]);
    let manifest = write_manifest(&dir, "1.2.3");

    let source = GitTagSource::discover_at(dir.path()).unwrap();
    let release = resolver::resolve(
        false,
        Some("2.0.0"),
        &manifest,
        Some(&source as &dyn TagSource),
    )
    .unwrap();

    assert_eq!(release.release_tag, "v2.0.0");
    assert_eq!(release.npm_tag, "latest");
}

#[test]
fn test_missing_manifest_is_fatal_in_nightly_mode() {
    let dir = TempDir::new().unwrap();
    init_repo_with_tags(&dir, &[]);

    let source = GitTagSource::discover_at(dir.path()).unwrap();
    let err = resolver::resolve(
        true,
        None,
        &dir.path().join("package.json"),
        Some(&source as &dyn TagSource),
    )
    .unwrap_err();
    assert!(matches!(err, ReleaseError::Io(_)));
}

#[test]
#[serial]
fn test_discover_from_working_directory() {
    let dir = TempDir::new().unwrap();
    init_repo_with_tags(&dir, &["v0.1.2-nightly.0"]);
    write_manifest(&dir, "0.1.1");

    let original = std::env::current_dir().unwrap();
    std::env::set_current_dir(dir.path()).unwrap();

    let result = (|| {
        let source = GitTagSource::discover()?;
        resolver::resolve(
            true,
            None,
            Path::new("package.json"),
            Some(&source as &dyn TagSource),
        )
    })();

    std::env::set_current_dir(original).unwrap();

    let release = result.unwrap();
    assert_eq!(release.release_tag, "v0.1.2-nightly.1");
}
