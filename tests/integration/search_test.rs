//! Integration tests for the recursive search engine.

mod helpers;

use std::collections::BTreeSet;
use std::path::PathBuf;

use chrono::Local;
use futures::StreamExt;

use filescope_entity::SearchCriteria;

fn sample() -> helpers::TestApp {
    let app = helpers::TestApp::new();
    app.touch("a.txt", 1024)
        .touch("b.txt", 1023)
        .touch("nested/c.txt", 1024)
        .touch("nested/deeper/d.log", 5)
        .touch("nested/deeper/e.TXT", 1024)
        .mkdir("empty");
    app
}

fn found(app: &helpers::TestApp, criteria: &SearchCriteria) -> BTreeSet<PathBuf> {
    app.search().search(app.root(), criteria).matches().collect()
}

#[test]
fn test_no_criteria_returns_every_file_once() {
    let app = sample();
    let paths: Vec<PathBuf> = app
        .search()
        .search(app.root(), &SearchCriteria::any())
        .matches()
        .collect();
    let unique: BTreeSet<&PathBuf> = paths.iter().collect();
    assert_eq!(paths.len(), 5);
    assert_eq!(unique.len(), 5);
}

#[test]
fn test_exact_size_is_exact() {
    let app = sample();
    let hits = found(&app, &SearchCriteria::any().with_size(1024));
    assert_eq!(hits.len(), 3);
    assert!(!hits.contains(&app.path("b.txt")));

    let hits = found(&app, &SearchCriteria::any().with_size(1023));
    assert_eq!(hits, BTreeSet::from([app.path("b.txt")]));
}

#[cfg(not(windows))]
#[test]
fn test_glob_and_size_are_anded() {
    let app = sample();
    let criteria = SearchCriteria::parse(Some("*.txt"), Some("1024"), None);
    let hits = found(&app, &criteria);
    assert_eq!(
        hits,
        BTreeSet::from([app.path("a.txt"), app.path("nested/c.txt")])
    );
}

#[test]
fn test_created_today() {
    let app = sample();
    let today = Local::now().date_naive().format("%Y-%m-%d").to_string();
    let criteria = SearchCriteria::parse(Some("*.log"), None, Some(today.as_str()));
    assert_eq!(
        found(&app, &criteria),
        BTreeSet::from([app.path("nested/deeper/d.log")])
    );

    let criteria = SearchCriteria::parse(None, None, Some("1999-01-01"));
    assert!(found(&app, &criteria).is_empty());
}

#[test]
fn test_invalid_input_matches_nothing() {
    let app = sample();
    for criteria in [
        SearchCriteria::parse(None, Some("1kb"), None),
        SearchCriteria::parse(None, None, Some("2024-13-40")),
        SearchCriteria::parse(Some("[z-a]*"), None, None),
    ] {
        assert!(found(&app, &criteria).is_empty());
    }
}

#[test]
fn test_brackets_and_braces_match_literally() {
    let app = sample();
    app.touch("data{1}.csv", 3).touch("[draft", 3).touch("x y.txt", 3);

    let hits = found(&app, &SearchCriteria::parse(Some("data{1}.csv"), None, None));
    assert_eq!(hits, BTreeSet::from([app.path("data{1}.csv")]));

    let hits = found(&app, &SearchCriteria::parse(Some("[draft"), None, None));
    assert_eq!(hits, BTreeSet::from([app.path("[draft")]));

    let hits = found(&app, &SearchCriteria::parse(Some("x y.*"), None, None));
    assert_eq!(hits, BTreeSet::from([app.path("x y.txt")]));
}

#[test]
fn test_blank_input_is_a_wildcard() {
    let app = sample();
    let criteria = SearchCriteria::parse(Some("  "), Some(""), None);
    assert_eq!(found(&app, &criteria).len(), 5);
}

#[test]
fn test_missing_root_yields_skip_only() {
    let app = sample();
    let outcomes: Vec<_> = app
        .search()
        .search(app.path("nope"), &SearchCriteria::any())
        .collect();
    assert_eq!(outcomes.len(), 1);
    assert!(outcomes[0].skipped().is_some());
}

#[cfg(unix)]
#[test]
fn test_symlinked_directory_is_not_descended() {
    let app = sample();
    std::os::unix::fs::symlink(app.path("nested"), app.path("loop")).unwrap();
    assert_eq!(found(&app, &SearchCriteria::any()).len(), 5);
}

#[tokio::test]
async fn test_background_search_matches_sync_search() {
    let app = sample();
    let criteria = SearchCriteria::any().with_size(1024);
    let expected = found(&app, &criteria);

    let streamed: BTreeSet<PathBuf> = app.search().spawn(app.root(), &criteria).collect().await;
    assert_eq!(streamed, expected);
}

#[tokio::test]
async fn test_dropping_handle_does_not_hang() {
    let app = sample();
    let mut handle = app.search().spawn(app.root(), &SearchCriteria::any());
    assert!(handle.next().await.is_some());
    drop(handle);

    let mut handle = app.search().spawn(app.root(), &SearchCriteria::any());
    while handle.next().await.is_some() {}
    assert_eq!(handle.finish().await.unwrap(), 5);
}
