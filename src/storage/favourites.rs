//! Favourites collection store (single-user mode)
//!
//! The earlier single-user library shape keeps one shared favourites list in
//! its own collection file, with the same record format as the album
//! collection.

use std::path::PathBuf;

use crate::error::ShelfResult;
use crate::models::Album;

use super::file_io::{read_json_strict, write_json_atomic};

/// Store for the standalone favourites file
pub struct FavouritesStore {
    path: PathBuf,
}

impl FavouritesStore {
    /// Create a store backed by the given file
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Load the favourites list, in file order
    pub fn load(&self) -> ShelfResult<Vec<Album>> {
        read_json_strict(&self.path)
    }

    /// Save the favourites list, all-or-nothing
    pub fn save(&self, favourites: &[Album]) -> ShelfResult<()> {
        write_json_atomic(&self.path, &favourites)
    }
}
