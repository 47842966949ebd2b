//! Integration tests for tree browsing, the file catalog and metadata.

mod helpers;

use std::collections::BTreeSet;

use filescope_core::error::ErrorKind;
use filescope_entity::FileKind;

fn sample() -> helpers::TestApp {
    let app = helpers::TestApp::new();
    app.mkdir("docs/archive")
        .mkdir("media")
        .touch("docs/report.txt", 100)
        .touch("docs/report_txt", 24)
        .touch("docs/archive/old.tar.gz", 10)
        .touch("media/photo.jpg", 2048)
        .touch(".bashrc", 1);
    app
}

#[test]
fn test_expanded_nodes_resolve_back_to_real_paths() {
    let app = sample();
    let mut tree = app.tree();
    let root = tree.set_root(app.root());

    let expanded = tree.expand_to_depth(root, 10).unwrap();
    assert_eq!(expanded, 4);

    for id in tree.children(root).unwrap().iter().map(|n| n.id) {
        let path = tree.resolve(id).unwrap();
        assert!(path.is_dir());
        assert_eq!(path.parent().unwrap(), app.root());
    }

    let docs = tree.children(root).unwrap()[0].id;
    let archive = tree.children(docs).unwrap()[0].id;
    assert_eq!(tree.resolve(archive).unwrap(), app.path("docs/archive"));
    assert_eq!(tree.resolve(root).unwrap(), app.root());
}

#[test]
fn test_expand_only_lists_directories() {
    let app = sample();
    let mut tree = app.tree();
    let root = tree.set_root(app.root());
    let report = tree.expand(root).unwrap();

    assert_eq!(report.added.len(), 2);
    assert!(report.skipped.is_empty());
    let labels: Vec<String> = tree
        .children(root)
        .unwrap()
        .iter()
        .map(|n| n.label.clone())
        .collect();
    assert_eq!(labels, vec!["docs", "media"]);
    assert!(tree.children(root).unwrap().iter().all(|n| !n.children_loaded));
}

#[test]
fn test_stale_handle_after_root_change() {
    let app = sample();
    let mut tree = app.tree();
    let root = tree.set_root(app.root());
    tree.expand(root).unwrap();
    let docs = tree.children(root).unwrap()[0].id;

    tree.set_root(app.path("media"));
    assert_eq!(tree.resolve(docs).unwrap_err().kind, ErrorKind::BrokenReference);
}

#[test]
fn test_catalog_lists_files_and_extensions() {
    let app = sample();
    let listing = app.catalog().list_files(&app.path("docs")).unwrap();
    assert_eq!(listing.names, vec!["report.txt", "report_txt"]);

    let expected: BTreeSet<String> = ["txt".to_string()].into();
    assert_eq!(listing.extensions, expected);
    assert_eq!(listing.skipped, 0);

    let root_listing = app.catalog().list_files(app.root()).unwrap();
    assert_eq!(root_listing.names, vec![".bashrc"]);
    assert!(root_listing.extensions.contains("bashrc"));
}

#[test]
fn test_extension_filter_is_a_suffix_match() {
    let app = sample();
    let names = app
        .catalog()
        .filter_by_extension(&app.path("docs"), "txt")
        .unwrap();
    assert_eq!(names, vec!["report.txt", "report_txt"]);

    let names = app
        .catalog()
        .filter_by_extension(&app.path("docs"), ".txt")
        .unwrap();
    assert_eq!(names, vec!["report.txt"]);
}

#[test]
fn test_summary_adds_sizes() {
    let app = sample();
    let summary = app.catalog().summary(&app.path("docs")).unwrap();
    assert_eq!(summary.file_count, 2);
    assert_eq!(summary.total_bytes, 124);
}

#[test]
fn test_catalog_of_missing_dir() {
    let app = sample();
    let err = app.catalog().list_files(&app.path("nope")).unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
}

#[test]
fn test_inspect_regular_file() {
    let app = sample();
    let entry = app.inspector().inspect(&app.path("media/photo.jpg")).unwrap();
    assert_eq!(entry.name, "photo.jpg");
    assert_eq!(entry.size_bytes, 2048);
    assert!(entry.kind.contains(FileKind::Regular));
    assert!(entry.created_at <= chrono::Utc::now());
}

#[test]
fn test_inspect_vanished_file() {
    let app = sample();
    let path = app.path("media/photo.jpg");
    std::fs::remove_file(&path).unwrap();
    let err = app.inspector().inspect(&path).unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
}
