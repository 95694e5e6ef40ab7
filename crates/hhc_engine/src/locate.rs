use std::path::{Path, PathBuf};

use hhc_core::SitemapKind;
use hhc_logging::{hhc_debug, hhc_warn};
use walkdir::WalkDir;

/// At most one file per sitemap kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SitemapSet {
    pub contents: Option<PathBuf>,
    pub index: Option<PathBuf>,
}

impl SitemapSet {
    pub fn get(&self, kind: SitemapKind) -> Option<&Path> {
        self.slot(kind).as_deref()
    }

    pub fn set(&mut self, kind: SitemapKind, path: PathBuf) {
        *self.slot_mut(kind) = Some(path);
    }

    /// Fill empty slots from `other`.
    pub fn or(mut self, other: SitemapSet) -> Self {
        if self.contents.is_none() {
            self.contents = other.contents;
        }
        if self.index.is_none() {
            self.index = other.index;
        }
        self
    }

    fn slot(&self, kind: SitemapKind) -> &Option<PathBuf> {
        match kind {
            SitemapKind::Contents => &self.contents,
            SitemapKind::Index => &self.index,
        }
    }

    fn slot_mut(&mut self, kind: SitemapKind) -> &mut Option<PathBuf> {
        match kind {
            SitemapKind::Contents => &mut self.contents,
            SitemapKind::Index => &mut self.index,
        }
    }
}

/// First `.hhc` and first `.hhk` under `root`, in file-name order.
pub fn locate_sources(root: &Path) -> SitemapSet {
    scan(root, SitemapKind::from_source_path)
}

/// First `*.hhc.htm` and `*.hhk.htm` pages under `root`, in file-name order.
pub fn locate_converted(root: &Path) -> SitemapSet {
    scan(root, SitemapKind::from_output_path)
}

fn scan(root: &Path, classify: fn(&Path) -> Option<SitemapKind>) -> SitemapSet {
    let mut found = SitemapSet::default();
    let entries = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                hhc_warn!("skipping unreadable entry under {}: {}", root.display(), err);
                None
            }
        });

    for entry in entries {
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(kind) = classify(entry.path()) else {
            continue;
        };
        let slot = found.slot_mut(kind);
        if slot.is_none() {
            hhc_debug!("found {} at {}", kind, entry.path().display());
            *slot = Some(entry.into_path());
        } else {
            hhc_debug!("ignoring additional {} at {}", kind, entry.path().display());
        }
    }
    found
}
