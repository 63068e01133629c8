//! Path management for albumshelf
//!
//! Resolves where the collection files live on disk.
//!
//! ## Path Resolution Order
//!
//! 1. `ALBUMSHELF_DATA_DIR` environment variable (if set)
//! 2. The platform project directory (e.g. `~/.config/albumshelf` on Linux,
//!    `%APPDATA%\albumshelf` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::ShelfError;

/// Manages all paths used by albumshelf
#[derive(Debug, Clone)]
pub struct LibraryPaths {
    /// Base directory for all albumshelf data
    base_dir: PathBuf,
}

impl LibraryPaths {
    /// Create a new LibraryPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined for the
    /// current platform and no override is set.
    pub fn new() -> Result<Self, ShelfError> {
        let base_dir = if let Ok(custom) = std::env::var("ALBUMSHELF_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            let dirs = ProjectDirs::from("", "", "albumshelf").ok_or_else(|| {
                ShelfError::Config("Could not determine a data directory for this platform".into())
            })?;
            dirs.config_dir().to_path_buf()
        };

        Ok(Self { base_dir })
    }

    /// Create LibraryPaths with an explicit base directory (CLI override, tests)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory holding the collection files
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("settings.json")
    }

    /// Get the path to the album collection
    pub fn albums_file(&self) -> PathBuf {
        self.data_dir().join("albums.json")
    }

    /// Get the path to the user collection (multi-user mode)
    pub fn users_file(&self) -> PathBuf {
        self.data_dir().join("users.json")
    }

    /// Get the path to the favourites collection (single-user mode)
    pub fn favourites_file(&self) -> PathBuf {
        self.data_dir().join("favourites.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), ShelfError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| ShelfError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| ShelfError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if albumshelf has been initialized (album collection exists)
    pub fn is_initialized(&self) -> bool {
        self.albums_file().exists()
    }
}
