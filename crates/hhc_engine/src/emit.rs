use std::path::{Path, PathBuf};

use hhc_core::{render_page, SitemapKind};

use crate::persist::{AtomicFileWriter, PersistError};

/// Writes a converted fragment as `<stem>.hhc.htm` / `<stem>.hhk.htm` beside its source.
#[derive(Debug, Default, Clone, Copy)]
pub struct PageEmitter;

impl PageEmitter {
    pub fn emit(
        &self,
        source: &Path,
        kind: SitemapKind,
        fragment: &str,
    ) -> Result<PathBuf, PersistError> {
        let output = kind.output_path(source);
        let file_name = output
            .file_name()
            .ok_or_else(|| PersistError::NoFileName(output.clone()))?;
        let writer = AtomicFileWriter::new(parent_dir(source));
        writer.write(file_name, &render_page(fragment))
    }
}

/// Directory containing `path`; `.` for a bare file name.
pub(crate) fn parent_dir(path: &Path) -> PathBuf {
    path.parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}
