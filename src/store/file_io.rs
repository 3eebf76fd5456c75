//! Snapshot file I/O with atomic writes
//!
//! Reads and writes the JSON snapshot document without corrupting it on
//! failure: writes go to a temp file in the same directory, then rename.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::CostwiseError;

/// Read JSON from a file, returning a default value if the file doesn't exist
pub fn read_json<T, P>(path: P) -> Result<T, CostwiseError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(T::default());
    }

    let file = File::open(path)
        .map_err(|e| CostwiseError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .map_err(|e| CostwiseError::Storage(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Write JSON to a file atomically (write to temp, then rename)
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), CostwiseError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            CostwiseError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Temp file in the same directory so the rename stays on one filesystem
    let temp_path = path.with_extension("json.tmp");

    let file = File::create(&temp_path)
        .map_err(|e| CostwiseError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| CostwiseError::Storage(format!("Failed to serialize data: {}", e)))?;

    writer
        .flush()
        .map_err(|e| CostwiseError::Storage(format!("Failed to flush temp file: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        CostwiseError::Storage(format!("Failed to replace {}: {}", path.display(), e))
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    struct Doc {
        value: i64,
    }

    #[test]
    fn test_read_missing_file_yields_default() {
        let temp_dir = TempDir::new().unwrap();
        let doc: Doc = read_json(temp_dir.path().join("missing.json")).unwrap();
        assert_eq!(doc, Doc::default());
    }

    #[test]
    fn test_write_then_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("doc.json");

        write_json_atomic(&path, &Doc { value: 42 }).unwrap();
        let doc: Doc = read_json(&path).unwrap();
        assert_eq!(doc.value, 42);

        // No stray temp file left behind
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("doc.json");

        write_json_atomic(&path, &Doc { value: 7 }).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_malformed_file_is_a_storage_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.json");
        std::fs::write(&path, "not json").unwrap();

        let err = read_json::<Doc, _>(&path).unwrap_err();
        assert!(matches!(err, CostwiseError::Storage(_)));
    }
}
