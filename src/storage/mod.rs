//! Storage layer for albumshelf
//!
//! JSON collection files with strict loads and atomic writes. Which
//! collections exist is configuration, not hardcoded logic: the multi-user
//! library persists albums + users, the single-user shape persists albums +
//! a standalone favourites list.

pub mod albums;
pub mod favourites;
pub mod file_io;
pub mod init;
pub mod users;

pub use albums::AlbumStore;
pub use favourites::FavouritesStore;
pub use file_io::{read_json_strict, write_json_atomic};
pub use init::initialize_storage;
pub use users::UserStore;

use crate::config::{LibraryMode, LibraryPaths};
use crate::error::ShelfResult;
use crate::models::{Album, User};

/// The full persisted state of one library, loaded at startup and written
/// back once at graceful exit.
#[derive(Debug, Clone, PartialEq)]
pub enum LibraryData {
    /// Albums plus user accounts (each carrying their own favourites)
    MultiUser { albums: Vec<Album>, users: Vec<User> },
    /// Albums plus one shared favourites list
    SingleUser {
        albums: Vec<Album>,
        favourites: Vec<Album>,
    },
}

impl LibraryData {
    /// The album collection, whichever shape the library has
    pub fn albums(&self) -> &Vec<Album> {
        match self {
            Self::MultiUser { albums, .. } => albums,
            Self::SingleUser { albums, .. } => albums,
        }
    }
}

/// Storage coordinator owning the per-collection stores for one mode
pub struct Storage {
    mode: LibraryMode,
    albums: AlbumStore,
    users: UserStore,
    favourites: FavouritesStore,
}

impl Storage {
    /// Create a new Storage instance for the configured mode
    pub fn new(paths: &LibraryPaths, mode: LibraryMode) -> Self {
        Self {
            mode,
            albums: AlbumStore::new(paths.albums_file()),
            users: UserStore::new(paths.users_file()),
            favourites: FavouritesStore::new(paths.favourites_file()),
        }
    }

    /// Load every collection the mode requires. Any missing or corrupt file
    /// fails the whole load; callers abort the run.
    pub fn load_all(&self) -> ShelfResult<LibraryData> {
        match self.mode {
            LibraryMode::MultiUser => Ok(LibraryData::MultiUser {
                albums: self.albums.load()?,
                users: self.users.load()?,
            }),
            LibraryMode::SingleUser => Ok(LibraryData::SingleUser {
                albums: self.albums.load()?,
                favourites: self.favourites.load()?,
            }),
        }
    }

    /// Write every collection back to disk, each one all-or-nothing
    pub fn save_all(&self, data: &LibraryData) -> ShelfResult<()> {
        match data {
            LibraryData::MultiUser { albums, users } => {
                self.albums.save(albums)?;
                self.users.save(users)?;
            }
            LibraryData::SingleUser { albums, favourites } => {
                self.albums.save(albums)?;
                self.favourites.save(favourites)?;
            }
        }
        Ok(())
    }
}
