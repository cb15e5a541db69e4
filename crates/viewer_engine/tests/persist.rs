use std::fs;

use tempfile::TempDir;
use viewer_engine::{ensure_storage_dir, AtomicFileWriter, StorageError};

#[test]
fn creates_missing_storage_dir() {
    let temp = TempDir::new().unwrap();
    let new_dir = temp.path().join("store");
    assert!(!new_dir.exists());
    ensure_storage_dir(&new_dir).unwrap();
    assert!(new_dir.is_dir());
}

#[test]
fn atomic_write_replaces_existing_record() {
    let temp = TempDir::new().unwrap();
    let writer = AtomicFileWriter::new(temp.path().to_path_buf());

    let first = writer.write("record.json", "{\"a\":1}").unwrap();
    assert_eq!(first.file_name().unwrap(), "record.json");
    assert_eq!(fs::read_to_string(&first).unwrap(), "{\"a\":1}");

    let second = writer.write("record.json", "{\"a\":2}").unwrap();
    assert_eq!(first, second);
    assert_eq!(fs::read_to_string(&second).unwrap(), "{\"a\":2}");
    assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 1);
}

#[test]
fn storage_dir_that_is_a_file_is_unavailable() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("not_a_dir");
    fs::write(&file_path, "x").unwrap();

    let writer = AtomicFileWriter::new(file_path.clone());
    let err = writer.write("record.json", "{}").unwrap_err();
    assert!(matches!(
        StorageError::from(err),
        StorageError::Unavailable(_)
    ));
    assert!(!file_path.with_file_name("record.json").exists());
}
