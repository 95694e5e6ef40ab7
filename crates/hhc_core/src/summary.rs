use std::path::{Path, PathBuf};

use crate::kind::SitemapKind;

/// Result of converting (or looking for) one sitemap file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FileOutcome {
    #[default]
    NotFound,
    Converted {
        source: PathBuf,
        output: PathBuf,
        encoding: String,
    },
    Failed {
        source: PathBuf,
        reason: String,
    },
}

impl FileOutcome {
    pub fn output(&self) -> Option<&Path> {
        match self {
            FileOutcome::Converted { output, .. } => Some(output),
            _ => None,
        }
    }
}

/// Everything a run produced, for the final report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub root: PathBuf,
    pub contents: FileOutcome,
    pub index: FileOutcome,
    /// `src` of the navigation pane, relative to `root`.
    pub navigation_source: Option<String>,
    pub entry_page: Option<PathBuf>,
    pub frameset_error: Option<String>,
}

impl RunSummary {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            contents: FileOutcome::NotFound,
            index: FileOutcome::NotFound,
            navigation_source: None,
            entry_page: None,
            frameset_error: None,
        }
    }

    pub fn outcome(&self, kind: SitemapKind) -> &FileOutcome {
        match kind {
            SitemapKind::Contents => &self.contents,
            SitemapKind::Index => &self.index,
        }
    }

    pub fn set_outcome(&mut self, kind: SitemapKind, outcome: FileOutcome) {
        match kind {
            SitemapKind::Contents => self.contents = outcome,
            SitemapKind::Index => self.index = outcome,
        }
    }

    pub fn converted_count(&self) -> usize {
        SitemapKind::ALL
            .into_iter()
            .filter(|kind| self.outcome(*kind).output().is_some())
            .count()
    }

    /// The run is usable once the frameset exists, whatever happened per file.
    pub fn is_success(&self) -> bool {
        self.entry_page.is_some()
    }

    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        for kind in SitemapKind::ALL {
            match self.outcome(kind) {
                FileOutcome::NotFound => warnings.push(format!(
                    "no .{} {kind} found under {}",
                    kind.extension(),
                    self.root.display()
                )),
                FileOutcome::Failed { source, reason } => warnings.push(format!(
                    "{kind} {} was not converted: {reason}",
                    source.display()
                )),
                FileOutcome::Converted { .. } => {}
            }
        }
        if let Some(err) = &self.frameset_error {
            warnings.push(format!("frameset not written: {err}"));
        }
        warnings
    }
}
