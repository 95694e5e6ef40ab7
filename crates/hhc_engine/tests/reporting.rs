//! Missing sitemaps are reported once per run. Own test binary so the
//! capturing logger is the only one installed.
use std::path::Path;
use std::sync::Mutex;

use hhc_engine::Converter;
use log::{Level, LevelFilter, Log, Metadata, Record};
use tempfile::TempDir;

struct WarningCapture {
    lines: Mutex<Vec<String>>,
}

impl Log for WarningCapture {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= Level::Warn
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            if let Ok(mut lines) = self.lines.lock() {
                lines.push(record.args().to_string());
            }
        }
    }

    fn flush(&self) {}
}

static CAPTURE: WarningCapture = WarningCapture {
    lines: Mutex::new(Vec::new()),
};

fn count(lines: &[String], needle: &str) -> usize {
    lines.iter().filter(|line| line.contains(needle)).count()
}

#[test]
fn each_missing_sitemap_is_warned_about_once() {
    log::set_logger(&CAPTURE).unwrap();
    log::set_max_level(LevelFilter::Warn);

    let temp = TempDir::new().unwrap();
    let summary = Converter::default().run(Path::new(temp.path())).unwrap();
    assert_eq!(summary.warnings().len(), 2);

    let lines = CAPTURE.lines.lock().unwrap().clone();
    assert_eq!(lines.len(), 2, "{lines:?}");
    assert_eq!(count(&lines, "table of contents"), 1, "{lines:?}");
    assert_eq!(count(&lines, "keyword index"), 1, "{lines:?}");
}
