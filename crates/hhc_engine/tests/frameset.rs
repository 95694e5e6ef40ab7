use std::fs;

use hhc_core::{INDEX_FILE, WELCOME_FILE};
use hhc_engine::{FramesetGenerator, SitemapSet};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

#[test]
fn writes_welcome_and_index_with_contents_pane() {
    hhc_logging::initialize_for_tests();
    let temp = TempDir::new().unwrap();
    let pages = SitemapSet {
        contents: Some(temp.path().join("docs").join("toc.hhc.htm")),
        index: None,
    };

    let artifacts = FramesetGenerator::new(temp.path()).generate(&pages).unwrap();
    assert_eq!(artifacts.navigation_source, "docs/toc.hhc.htm");
    assert_eq!(artifacts.welcome, temp.path().join(WELCOME_FILE));
    assert_eq!(artifacts.index, temp.path().join(INDEX_FILE));

    let index = fs::read_to_string(&artifacts.index).unwrap();
    assert!(index.contains(r#"src="docs/toc.hhc.htm""#));
}

#[test]
fn page_outside_root_falls_back_to_welcome() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("root");
    fs::create_dir(&root).unwrap();
    let pages = SitemapSet {
        contents: Some(temp.path().join("elsewhere.hhc.htm")),
        index: None,
    };

    let artifacts = FramesetGenerator::new(&root).generate(&pages).unwrap();
    assert_eq!(artifacts.navigation_source, WELCOME_FILE);
}

#[test]
fn existing_files_are_overwritten() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(INDEX_FILE), "stale").unwrap();
    fs::write(temp.path().join(WELCOME_FILE), "stale").unwrap();

    FramesetGenerator::new(temp.path())
        .generate(&SitemapSet::default())
        .unwrap();
    assert_ne!(fs::read_to_string(temp.path().join(INDEX_FILE)).unwrap(), "stale");
    assert_ne!(fs::read_to_string(temp.path().join(WELCOME_FILE)).unwrap(), "stale");
}
