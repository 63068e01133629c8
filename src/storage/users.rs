//! User collection store
//!
//! Loads and saves the user accounts for the multi-user library. Each
//! user's favourites are persisted inline as full album copies.

use std::path::PathBuf;

use crate::error::ShelfResult;
use crate::models::User;

use super::file_io::{read_json_strict, write_json_atomic};

/// Store for the user collection file
pub struct UserStore {
    path: PathBuf,
}

impl UserStore {
    /// Create a store backed by the given file
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Load all user accounts, in file order
    pub fn load(&self) -> ShelfResult<Vec<User>> {
        read_json_strict(&self.path)
    }

    /// Save all user accounts, all-or-nothing
    pub fn save(&self, users: &[User]) -> ShelfResult<()> {
        write_json_atomic(&self.path, &users)
    }
}
