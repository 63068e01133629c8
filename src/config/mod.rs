//! Configuration module for albumshelf
//!
//! This module provides configuration management including:
//! - Data directory resolution
//! - User settings persistence (library mode, display options)

pub mod paths;
pub mod settings;

pub use paths::LibraryPaths;
pub use settings::{DisplayOptions, LibraryMode, Settings};
