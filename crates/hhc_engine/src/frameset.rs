use std::path::{Path, PathBuf};

use hhc_core::{render_frameset, render_welcome, SitemapKind, INDEX_FILE, WELCOME_FILE};
use hhc_logging::{hhc_info, hhc_warn};
use thiserror::Error;

use crate::locate::SitemapSet;
use crate::persist::{AtomicFileWriter, PersistError};

#[derive(Debug, Error)]
pub enum FramesetError {
    #[error("failed to write {file}: {source}")]
    Write {
        file: &'static str,
        #[source]
        source: PersistError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FramesetArtifacts {
    pub welcome: PathBuf,
    pub index: PathBuf,
    /// `src` of the navigation pane, relative to the root.
    pub navigation_source: String,
}

/// Writes `welcome.htm` and the two-pane `index.htm` at the root.
pub struct FramesetGenerator {
    root: PathBuf,
}

impl FramesetGenerator {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Always rewrites both files. The navigation pane shows the converted
    /// contents page when there is one under the root, else `welcome.htm`.
    pub fn generate(&self, pages: &SitemapSet) -> Result<FramesetArtifacts, FramesetError> {
        let writer = AtomicFileWriter::new(self.root.clone());

        let welcome = writer
            .write(WELCOME_FILE, &render_welcome())
            .map_err(|source| FramesetError::Write {
                file: WELCOME_FILE,
                source,
            })?;

        let navigation_source = match pages
            .get(SitemapKind::Contents)
            .and_then(|page| self.relative_src(page))
        {
            Some(src) => src,
            None => {
                hhc_warn!(
                    "no converted table of contents found; navigation pane falls back to {}",
                    WELCOME_FILE
                );
                WELCOME_FILE.to_string()
            }
        };
        if pages.get(SitemapKind::Index).is_none() {
            hhc_warn!("no converted keyword index found");
        }

        let index = writer
            .write(INDEX_FILE, &render_frameset(&navigation_source))
            .map_err(|source| FramesetError::Write {
                file: INDEX_FILE,
                source,
            })?;
        hhc_info!("frameset written: {}", index.display());

        Ok(FramesetArtifacts {
            welcome,
            index,
            navigation_source,
        })
    }

    fn relative_src(&self, page: &Path) -> Option<String> {
        let rel = page.strip_prefix(&self.root).ok()?;
        let src = rel
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        (!src.is_empty()).then_some(src)
    }
}
