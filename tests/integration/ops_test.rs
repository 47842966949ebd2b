//! Integration tests for file operations and drive queries.

mod helpers;

use filescope_core::error::ErrorKind;
use filescope_service::FileOps;

#[test]
fn test_delete_then_catalog() {
    let app = helpers::TestApp::new();
    app.touch("a.txt", 1).touch("b.txt", 1);

    app.ops().delete(&app.path("a.txt")).unwrap();
    let listing = app.catalog().list_files(app.root()).unwrap();
    assert_eq!(listing.names, vec!["b.txt"]);
}

#[test]
fn test_delete_nonexistent_is_not_found() {
    let app = helpers::TestApp::new();
    app.touch("keep.txt", 3);
    let before = app.catalog().list_files(app.root()).unwrap();

    let err = app.ops().delete(&app.path("ghost.txt")).unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
    assert_eq!(app.catalog().list_files(app.root()).unwrap(), before);
}

#[test]
fn test_rename_moves_content() {
    let app = helpers::TestApp::new();
    app.mkdir("out").touch("draft.txt", 42);

    app.ops()
        .rename(&app.path("draft.txt"), &app.path("out/final.txt"))
        .unwrap();
    assert!(!app.path("draft.txt").exists());
    let entry = app.inspector().inspect(&app.path("out/final.txt")).unwrap();
    assert_eq!(entry.size_bytes, 42);
}

#[test]
fn test_rename_missing_source() {
    let app = helpers::TestApp::new();
    let err = app
        .ops()
        .rename(&app.path("nope"), &app.path("still-nope"))
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
}

#[test]
fn test_change_extension_keeps_size() {
    let app = helpers::TestApp::new();
    app.touch("notes.txt", 7);

    let old = app.path("notes.txt");
    let new = FileOps::with_extension(&old, ".md");
    app.ops().change_extension(&old, &new).unwrap();

    let listing = app.catalog().list_files(app.root()).unwrap();
    assert_eq!(listing.names, vec!["notes.md"]);
    assert_eq!(app.inspector().inspect(&new).unwrap().size_bytes, 7);
}

#[test]
fn test_drive_info_for_scratch_dir() {
    let app = helpers::TestApp::new();
    let info = app.drives().drive_info(app.root()).unwrap();
    assert!(info.total_bytes > 0);
    assert!(info.used_bytes <= info.total_bytes);
    assert!(info.summary().starts_with("Total: "));
    assert!(!app.drives().list_roots().is_empty());
}
