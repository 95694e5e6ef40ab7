use std::ffi::OsStr;
use std::fmt;
use std::path::{Path, PathBuf};

/// Suffix appended to the stem of a converted `.hhc` file.
pub const CONTENTS_SUFFIX: &str = ".hhc.htm";
/// Suffix appended to the stem of a converted `.hhk` file.
pub const INDEX_SUFFIX: &str = ".hhk.htm";

/// The two sitemap sidecars a decompiled CHM carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SitemapKind {
    /// `.hhc` table of contents (tree).
    Contents,
    /// `.hhk` keyword index (flat or lightly grouped).
    Index,
}

impl SitemapKind {
    pub const ALL: [SitemapKind; 2] = [SitemapKind::Contents, SitemapKind::Index];

    pub fn extension(self) -> &'static str {
        match self {
            SitemapKind::Contents => "hhc",
            SitemapKind::Index => "hhk",
        }
    }

    pub fn output_suffix(self) -> &'static str {
        match self {
            SitemapKind::Contents => CONTENTS_SUFFIX,
            SitemapKind::Index => INDEX_SUFFIX,
        }
    }

    /// Classify a source file by its extension, ignoring ASCII case.
    pub fn from_source_path(path: &Path) -> Option<Self> {
        let ext = path.extension().and_then(OsStr::to_str)?;
        Self::ALL
            .into_iter()
            .find(|kind| ext.eq_ignore_ascii_case(kind.extension()))
    }

    /// Classify a previously emitted page (`*.hhc.htm` / `*.hhk.htm`).
    pub fn from_output_path(path: &Path) -> Option<Self> {
        let name = path.file_name().and_then(OsStr::to_str)?;
        Self::ALL
            .into_iter()
            .find(|kind| ends_with_ignore_ascii_case(name, kind.output_suffix()))
    }

    /// `dir/stem.ext` -> `dir/stem.hhc.htm` (or `.hhk.htm`).
    pub fn output_path(self, source: &Path) -> PathBuf {
        let mut name = source
            .file_stem()
            .map(OsStr::to_os_string)
            .unwrap_or_default();
        name.push(self.output_suffix());
        source.with_file_name(name)
    }
}

impl fmt::Display for SitemapKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SitemapKind::Contents => write!(f, "table of contents"),
            SitemapKind::Index => write!(f, "keyword index"),
        }
    }
}

fn ends_with_ignore_ascii_case(name: &str, suffix: &str) -> bool {
    let name = name.as_bytes();
    let suffix = suffix.as_bytes();
    name.len() > suffix.len() && name[name.len() - suffix.len()..].eq_ignore_ascii_case(suffix)
}
