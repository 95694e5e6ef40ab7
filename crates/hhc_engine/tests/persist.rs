use std::fs;

use hhc_engine::{AtomicFileWriter, PersistError};
use tempfile::TempDir;

#[test]
fn rerun_replaces_page_without_leftovers() {
    let temp = TempDir::new().unwrap();
    let writer = AtomicFileWriter::new(temp.path());

    let page = writer.write("toc.hhc.htm", "<ul>old</ul>").unwrap();
    assert_eq!(page, temp.path().join("toc.hhc.htm"));
    writer.write("toc.hhc.htm", "<ul>new</ul>").unwrap();

    assert_eq!(fs::read_to_string(&page).unwrap(), "<ul>new</ul>");
    let names: Vec<_> = fs::read_dir(temp.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name())
        .collect();
    assert_eq!(names, vec!["toc.hhc.htm"]);
}

#[test]
fn missing_directory_is_not_created() {
    let temp = TempDir::new().unwrap();
    let gone = temp.path().join("book");

    let err = AtomicFileWriter::new(&gone)
        .write("welcome.htm", "hi")
        .unwrap_err();
    assert!(matches!(err, PersistError::MissingDir(ref dir) if *dir == gone));
    assert!(!gone.exists());
}

#[test]
fn file_in_place_of_directory_is_rejected() {
    let temp = TempDir::new().unwrap();
    let not_dir = temp.path().join("toc.hhc");
    fs::write(&not_dir, "x").unwrap();

    let err = AtomicFileWriter::new(&not_dir)
        .write("index.htm", "data")
        .unwrap_err();
    assert!(matches!(err, PersistError::MissingDir(_)));
    assert!(!temp.path().join("index.htm").exists());
}

#[cfg(unix)]
#[test]
fn pages_are_world_readable() {
    use std::os::unix::fs::PermissionsExt;

    let temp = TempDir::new().unwrap();
    let page = AtomicFileWriter::new(temp.path())
        .write("index.htm", "<html></html>")
        .unwrap();
    let mode = fs::metadata(&page).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o644);
}
