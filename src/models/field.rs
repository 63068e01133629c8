//! Album field selection
//!
//! A closed enumeration of the album attributes the operator may filter or
//! sort by. This replaces reflective property lookup with a fixed dispatch
//! surface: free-text field names never reach the query engine from the
//! menu, and programmatic callers get `UnknownField` for anything outside
//! the set.

use std::fmt;

use crate::error::{ShelfError, ShelfResult};

/// The album attributes available for filtering and sorting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlbumField {
    Title,
    Artist,
    Year,
    Genres,
}

impl AlbumField {
    /// All fields, in menu order
    pub const ALL: [AlbumField; 4] = [Self::Title, Self::Artist, Self::Year, Self::Genres];

    /// Map a numeric menu choice ("1".."4") to a field
    pub fn from_menu_choice(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(Self::Title),
            "2" => Some(Self::Artist),
            "3" => Some(Self::Year),
            "4" => Some(Self::Genres),
            _ => None,
        }
    }

    /// Parse a field by name (case-insensitive). This is the programmatic
    /// contract surface; unrecognized names fail with `UnknownField`.
    pub fn parse(name: &str) -> ShelfResult<Self> {
        match name.to_lowercase().as_str() {
            "title" => Ok(Self::Title),
            "artist" => Ok(Self::Artist),
            "year" => Ok(Self::Year),
            "genres" | "genre" => Ok(Self::Genres),
            other => Err(ShelfError::UnknownField(other.to_string())),
        }
    }
}

impl fmt::Display for AlbumField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Title => write!(f, "Title"),
            Self::Artist => write!(f, "Artist"),
            Self::Year => write!(f, "Year"),
            Self::Genres => write!(f, "Genres"),
        }
    }
}
