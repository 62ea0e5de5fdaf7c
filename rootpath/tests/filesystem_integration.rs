//! Integration tests for the filesystem helpers on `AbsolutePath`.
//!
//! Every test works inside its own temporary directory, so they run in
//! parallel. They are Unix-only because the temporary directory must be
//! expressible as a `/`-rooted path.

#![cfg(unix)]

mod common;

use chrono::{Duration, Local, TimeZone};
use common::{build_tree, names, temp_root};
use rootpath::path::fs::{delete_directories, delete_files, where_directory_exists, where_file_exists};
use rootpath::{AbsolutePath, EntryKind, SearchDepth};

#[test]
fn test_layered_enumeration() {
    let (_dir, root) = temp_root();
    build_tree(
        &root,
        &[
            "top.db3",
            "notes.txt",
            "alpha/a.db3",
            "alpha/deep/x.db3",
            "beta/b.db3",
            "beta/deeper/still/y.db3",
        ],
    );

    assert_eq!(names(&root.files("*.db3", 1).unwrap()), vec!["top.db3"]);
    assert_eq!(
        names(&root.files("*.db3", 2).unwrap()),
        vec!["top.db3", "a.db3", "b.db3"]
    );
    assert_eq!(
        names(&root.files("*.db3", 3).unwrap()),
        vec!["top.db3", "a.db3", "b.db3", "x.db3"]
    );
    assert_eq!(names(&root.files("*.db3", usize::MAX).unwrap()).len(), 5);

    assert_eq!(
        names(&root.directories("*", 2).unwrap()),
        vec!["alpha", "beta", "deep", "deeper"]
    );
    assert_eq!(names(&root.directories("dee*", 3).unwrap()), vec!["deep", "deeper"]);
}

#[test]
fn test_contains_with_wildcards() {
    let (_dir, root) = temp_root();
    build_tree(&root, &["a/b/c/report-01.csv"]);

    assert!(!root.contains_file("report-??.csv", SearchDepth::TopDirectoryOnly).unwrap());
    assert!(root.contains_file("report-??.csv", SearchDepth::AllDirectories).unwrap());
    assert!(!root.contains_file("report-?.csv", SearchDepth::AllDirectories).unwrap());
    assert!(root.contains_directory("?", SearchDepth::AllDirectories).unwrap());
    assert!(!root.contains_directory("report*", SearchDepth::AllDirectories).unwrap());
}

#[test]
fn test_touch_updates_existing_file() {
    let (_dir, root) = temp_root();
    let file = root.join("stamp").unwrap();
    std::fs::write(file.as_path(), b"payload").unwrap();

    let when = Local.with_ymd_and_hms(2020, 2, 29, 12, 0, 0).unwrap();
    file.touch_file(Some(when), false).unwrap();

    let metadata = file.metadata().unwrap();
    let modified: chrono::DateTime<Local> = metadata.modified().unwrap().into();
    assert_eq!(modified, when);
    // Content is preserved
    assert_eq!(std::fs::read(file.as_path()).unwrap(), b"payload");
}

#[test]
fn test_touch_defaults_to_now() {
    let (_dir, root) = temp_root();
    let file = root.join("fresh").unwrap();
    let before = Local::now() - Duration::seconds(2);

    file.touch_file(None, false).unwrap();

    let modified: chrono::DateTime<Local> = file.metadata().unwrap().modified().unwrap().into();
    assert!(modified >= before);
}

#[test]
fn test_existence_by_kind() {
    let (_dir, root) = temp_root();
    build_tree(&root, &["dir/file"]);
    let dir = root.join("dir").unwrap();
    let file = dir.join("file").unwrap();

    assert!(dir.exists(EntryKind::Directory));
    assert!(!dir.exists(EntryKind::File));
    assert!(file.exists(EntryKind::File));
    assert_eq!(file.existing(EntryKind::File), Some(&file));
    assert_eq!(file.existing(EntryKind::Directory), None);
}

#[test]
fn test_bulk_filters_and_deletes() {
    let (_dir, root) = temp_root();
    build_tree(&root, &["one.tmp", "two.tmp", "keep/me.txt", "drop/x.tmp"]);

    let candidates: Vec<AbsolutePath> = ["one.tmp", "two.tmp", "missing.tmp", "keep", "drop"]
        .iter()
        .map(|name| root.join(name).unwrap())
        .collect();

    let files: Vec<_> = where_file_exists(candidates.clone()).collect();
    assert_eq!(names(&files), vec!["one.tmp", "two.tmp"]);
    let dirs: Vec<_> = where_directory_exists(candidates).collect();
    assert_eq!(names(&dirs), vec!["keep", "drop"]);

    delete_files(&files).unwrap();
    delete_directories(&dirs[1..]).unwrap();

    assert_eq!(names(&root.files("*", usize::MAX).unwrap()), vec!["me.txt"]);
    assert_eq!(names(&root.directories("*", usize::MAX).unwrap()), vec!["keep"]);
}

#[test]
fn test_delete_read_only_file() {
    use std::os::unix::fs::PermissionsExt;

    let (_dir, root) = temp_root();
    build_tree(&root, &["locked/file.db3"]);
    let file = root.join("locked/file.db3").unwrap();
    std::fs::set_permissions(file.as_path(), std::fs::Permissions::from_mode(0o444)).unwrap();

    file.delete_file().unwrap();
    assert!(!file.file_exists());
    root.join("locked").unwrap().delete_directory().unwrap();
}

#[test]
fn test_create_or_clean_is_repeatable() {
    let (_dir, root) = temp_root();
    let work = root.join("work").unwrap();

    for _ in 0..3 {
        work.create_or_clean_directory().unwrap();
        build_tree(&work, &["a/b", "c"]);
        assert_eq!(work.files("*", usize::MAX).unwrap().len(), 2);
    }

    work.create_or_clean_directory().unwrap();
    assert!(work.files("*", usize::MAX).unwrap().is_empty());
    assert!(work.directories("*", usize::MAX).unwrap().is_empty());
}
