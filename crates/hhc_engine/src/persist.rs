use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;

/// Mode of every written page: readable by a web server running as another user.
#[cfg(unix)]
const PAGE_MODE: u32 = 0o644;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("{} is not an existing directory", .0.display())]
    MissingDir(PathBuf),
    #[error("{} has no file name", .0.display())]
    NoFileName(PathBuf),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Replaces pages inside one existing directory via a temp file and a rename,
/// so a browser never loads a half-written page.
pub struct AtomicFileWriter {
    dir: PathBuf,
}

impl AtomicFileWriter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The directory is never created: pages live beside their source or at
    /// the already validated root.
    pub fn write(&self, file_name: impl AsRef<Path>, content: &str) -> Result<PathBuf, PersistError> {
        if !self.dir.is_dir() {
            return Err(PersistError::MissingDir(self.dir.clone()));
        }
        let target = self.dir.join(file_name);
        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(content.as_bytes())?;
        tmp.as_file_mut().sync_all()?;
        set_page_mode(tmp.as_file())?;
        tmp.persist(&target).map_err(|e| PersistError::Io(e.error))?;
        Ok(target)
    }
}

#[cfg(unix)]
fn set_page_mode(file: &File) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    file.set_permissions(std::fs::Permissions::from_mode(PAGE_MODE))
}

#[cfg(not(unix))]
fn set_page_mode(_file: &File) -> io::Result<()> {
    Ok(())
}
