//! Album collection store
//!
//! Loads and saves the ordered album collection. Order is significant: an
//! album's position in the file is its identity for every index-based menu
//! command, so load and save both preserve it exactly. Duplicate albums by
//! value are permitted.

use std::path::PathBuf;

use crate::error::ShelfResult;
use crate::models::Album;

use super::file_io::{read_json_strict, write_json_atomic};

/// Store for the album collection file
pub struct AlbumStore {
    path: PathBuf,
}

impl AlbumStore {
    /// Create a store backed by the given file
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Load the full album collection, in file order
    pub fn load(&self) -> ShelfResult<Vec<Album>> {
        read_json_strict(&self.path)
    }

    /// Save the full album collection, all-or-nothing
    pub fn save(&self, albums: &[Album]) -> ShelfResult<()> {
        write_json_atomic(&self.path, &albums)
    }
}
