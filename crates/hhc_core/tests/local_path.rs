use std::path::Path;

use hhc_core::resolve_local;
use pretty_assertions::assert_eq;

const DIR: &str = "/books/manual";

#[test]
fn plain_relative_path_is_unchanged() {
    assert_eq!(resolve_local("ch1.html", Path::new(DIR)), "ch1.html");
}

#[test]
fn dot_segments_are_collapsed() {
    assert_eq!(
        resolve_local("./html/../ch1.html", Path::new(DIR)),
        "ch1.html"
    );
}

#[test]
fn backslashes_become_slashes() {
    assert_eq!(
        resolve_local(r"html\sub\page.htm", Path::new(DIR)),
        "html/sub/page.htm"
    );
}

#[test]
fn anchors_survive() {
    assert_eq!(
        resolve_local("html/ch2.htm#intro", Path::new(DIR)),
        "html/ch2.htm#intro"
    );
}

#[test]
fn escaping_path_falls_back_to_raw_value() {
    assert_eq!(
        resolve_local("../shared/page.htm", Path::new(DIR)),
        "../shared/page.htm"
    );
}

#[test]
fn absolute_path_is_kept() {
    assert_eq!(resolve_local("/abs/page.htm", Path::new(DIR)), "/abs/page.htm");
}

#[test]
fn urls_are_kept_verbatim() {
    assert_eq!(
        resolve_local("http://example.com/a.htm", Path::new(DIR)),
        "http://example.com/a.htm"
    );
    assert_eq!(
        resolve_local("mk:@MSITStore:help.chm::/a.htm", Path::new(DIR)),
        "mk:@MSITStore:help.chm::/a.htm"
    );
}

#[test]
fn relative_source_dir_is_supported() {
    assert_eq!(resolve_local("a/./b.htm", Path::new("")), "a/b.htm");
    assert_eq!(resolve_local("../b.htm", Path::new("")), "../b.htm");
}

#[test]
fn path_that_normalizes_to_the_directory_itself_is_raw() {
    assert_eq!(resolve_local("./", Path::new(DIR)), "./");
}
