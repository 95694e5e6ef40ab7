use std::path::PathBuf;

use hhc_core::{FileOutcome, RunSummary, SitemapKind};
use pretty_assertions::assert_eq;

#[test]
fn fresh_summary_warns_about_both_missing_files() {
    let summary = RunSummary::new("/chm");
    let warnings = summary.warnings();
    assert_eq!(warnings.len(), 2);
    assert!(warnings[0].contains(".hhc table of contents"));
    assert!(warnings[1].contains(".hhk keyword index"));
    assert!(!summary.is_success());
}

#[test]
fn converted_files_produce_no_warning() {
    let mut summary = RunSummary::new("/chm");
    summary.set_outcome(
        SitemapKind::Contents,
        FileOutcome::Converted {
            source: PathBuf::from("/chm/a.hhc"),
            output: PathBuf::from("/chm/a.hhc.htm"),
            encoding: "UTF-8".into(),
        },
    );
    summary.set_outcome(
        SitemapKind::Index,
        FileOutcome::Failed {
            source: PathBuf::from("/chm/a.hhk"),
            reason: "permission denied".into(),
        },
    );
    summary.entry_page = Some(PathBuf::from("/chm/index.htm"));

    assert_eq!(summary.converted_count(), 1);
    assert_eq!(
        summary.outcome(SitemapKind::Contents).output(),
        Some(PathBuf::from("/chm/a.hhc.htm").as_path())
    );
    let warnings = summary.warnings();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("permission denied"));
    assert!(summary.is_success());
}
