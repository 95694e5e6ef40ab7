use std::io;
use std::path::PathBuf;

use hhc_core::SitemapKind;
use thiserror::Error;

use crate::persist::PersistError;
use crate::sitemap::RenderStats;

/// A sitemap file read and decoded into text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    pub path: PathBuf,
    pub kind: SitemapKind,
    pub encoding_label: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedPage {
    pub source: PathBuf,
    pub output: PathBuf,
    pub kind: SitemapKind,
    pub encoding_label: String,
    pub stats: RenderStats,
}

/// Failure converting a single file; other files are unaffected.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("not a .hhc or .hhk file: {0}")]
    UnsupportedFile(PathBuf),
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write page for {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: PersistError,
    },
}

/// Problems with the target directory itself; nothing is converted.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("path does not exist: {0}")]
    MissingRoot(PathBuf),
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),
    #[error("cannot resolve {path}: {source}")]
    Resolve {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
