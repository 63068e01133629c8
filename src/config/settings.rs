//! User settings for albumshelf
//!
//! Manages the library mode (which collections exist on disk) and the
//! runtime display options for album rendering.

use serde::{Deserialize, Serialize};

use super::paths::LibraryPaths;
use crate::error::ShelfError;

/// Which collection set the library operates on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LibraryMode {
    /// Albums + user accounts, with a login gate (default)
    #[default]
    MultiUser,
    /// Albums + one shared favourites list, no accounts
    SingleUser,
}

impl LibraryMode {
    /// Parse a mode name from the CLI
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "multi" | "multiuser" | "multi-user" => Some(Self::MultiUser),
            "single" | "singleuser" | "single-user" => Some(Self::SingleUser),
            _ => None,
        }
    }
}

/// Toggles controlling how albums are rendered.
///
/// Read at render time; changing them mid-run affects every album printed
/// from that point onward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayOptions {
    /// Render the genre list after the title
    pub show_genre: bool,
    /// Render the release year after the title
    pub show_year: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            show_genre: true,
            show_year: true,
        }
    }
}

/// User settings for albumshelf
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Which collection set exists on disk
    #[serde(default)]
    pub library_mode: LibraryMode,

    /// Album rendering toggles
    #[serde(default)]
    pub display: DisplayOptions,
}

fn default_schema_version() -> u32 {
    1
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            library_mode: LibraryMode::default(),
            display: DisplayOptions::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if no file exists yet
    pub fn load_or_create(paths: &LibraryPaths) -> Result<Self, ShelfError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| ShelfError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents)
                .map_err(|e| ShelfError::Config(format!("Failed to parse settings file: {}", e)))?;

            Ok(settings)
        } else {
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &LibraryPaths) -> Result<(), ShelfError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ShelfError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| ShelfError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.library_mode, LibraryMode::MultiUser);
        assert!(settings.display.show_genre);
        assert!(settings.display.show_year);
    }

    #[test]
    fn test_load_without_file_returns_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LibraryPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings.library_mode, LibraryMode::MultiUser);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LibraryPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.library_mode = LibraryMode::SingleUser;
        settings.display.show_year = false;

        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.library_mode, LibraryMode::SingleUser);
        assert!(!loaded.display.show_year);
        assert!(loaded.display.show_genre);
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!(LibraryMode::parse("multi"), Some(LibraryMode::MultiUser));
        assert_eq!(LibraryMode::parse("Single-User"), Some(LibraryMode::SingleUser));
        assert_eq!(LibraryMode::parse("shared"), None);
    }
}
