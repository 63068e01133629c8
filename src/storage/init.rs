//! Storage initialization
//!
//! Handles first-run setup. Loading a collection is strict and a missing
//! file is fatal, so a fresh installation creates empty collection files
//! for the configured mode before the first load.

use crate::config::{LibraryMode, LibraryPaths};
use crate::error::ShelfError;
use crate::models::{Album, User};

use super::file_io::write_json_atomic;

/// Initialize storage for a fresh installation
///
/// Creates empty collection files for whichever collections the configured
/// mode uses. Existing files are left untouched.
pub fn initialize_storage(paths: &LibraryPaths, mode: LibraryMode) -> Result<(), ShelfError> {
    paths.ensure_directories()?;

    if !paths.albums_file().exists() {
        write_json_atomic(paths.albums_file(), &Vec::<Album>::new())?;
    }

    match mode {
        LibraryMode::MultiUser => {
            if !paths.users_file().exists() {
                write_json_atomic(paths.users_file(), &Vec::<User>::new())?;
            }
        }
        LibraryMode::SingleUser => {
            if !paths.favourites_file().exists() {
                write_json_atomic(paths.favourites_file(), &Vec::<Album>::new())?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_multi_user_init_creates_albums_and_users() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LibraryPaths::with_base_dir(temp_dir.path().to_path_buf());

        initialize_storage(&paths, LibraryMode::MultiUser).unwrap();

        assert!(paths.albums_file().exists());
        assert!(paths.users_file().exists());
        assert!(!paths.favourites_file().exists());
    }

    #[test]
    fn test_single_user_init_creates_albums_and_favourites() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LibraryPaths::with_base_dir(temp_dir.path().to_path_buf());

        initialize_storage(&paths, LibraryMode::SingleUser).unwrap();

        assert!(paths.albums_file().exists());
        assert!(paths.favourites_file().exists());
        assert!(!paths.users_file().exists());
    }

    #[test]
    fn test_init_leaves_existing_files_untouched() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LibraryPaths::with_base_dir(temp_dir.path().to_path_buf());
        paths.ensure_directories().unwrap();

        let seeded = r#"[{"Title": "Vespertine", "Artist": "Bjork", "Year": 2001, "Genres": []}]"#;
        std::fs::write(paths.albums_file(), seeded).unwrap();

        initialize_storage(&paths, LibraryMode::MultiUser).unwrap();

        let raw = std::fs::read_to_string(paths.albums_file()).unwrap();
        assert!(raw.contains("Vespertine"));
    }
}
