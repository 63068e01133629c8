//! File I/O for collection files
//!
//! Strict JSON reads (a missing or corrupt file is an error, never an empty
//! default) and atomic writes so a failed save cannot corrupt a collection.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::ShelfError;

/// Read JSON from a file. Fails with a storage error if the file is missing,
/// unreadable, or malformed: callers treat any of these as fatal, since a
/// silently-substituted empty collection would be saved back over the real
/// data at exit.
pub fn read_json_strict<T, P>(path: P) -> Result<T, ShelfError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Err(ShelfError::Storage(format!(
            "Collection file not found: {}",
            path.display()
        )));
    }

    let file = File::open(path)
        .map_err(|e| ShelfError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .map_err(|e| ShelfError::Storage(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Write JSON to a file atomically (write to temp, then rename).
///
/// The collection file is either fully replaced or left untouched; a
/// subsequent load never observes a partial write.
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), ShelfError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            ShelfError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Temp file in the same directory, so the rename stays atomic
    let temp_path = path.with_extension("json.tmp");

    let file = File::create(&temp_path)
        .map_err(|e| ShelfError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| ShelfError::Storage(format!("Failed to serialize data: {}", e)))?;

    writer
        .flush()
        .map_err(|e| ShelfError::Storage(format!("Failed to flush data: {}", e)))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| ShelfError::Storage(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        ShelfError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}
