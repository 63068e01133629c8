//! Favourites curation
//!
//! Index-validated add and remove on a favourites list. Every operation
//! either fully applies or rejects the index and mutates nothing.

use crate::error::{ShelfError, ShelfResult};
use crate::models::Album;

/// Add the album at `album_index` in the catalog to the favourites list.
///
/// The entry appended is a copy of the referenced album, matching the
/// denormalized persisted shape. Out-of-range indices are rejected without
/// mutating the list.
pub fn add_favourite(
    favourites: &mut Vec<Album>,
    albums: &[Album],
    album_index: usize,
) -> ShelfResult<()> {
    let album = albums.get(album_index).ok_or_else(|| {
        ShelfError::invalid_input(format!("No album at index {}", album_index))
    })?;
    favourites.push(album.clone());
    Ok(())
}

/// Remove the favourite at `favourite_index`, leaving the order of the
/// remaining entries unchanged.
pub fn remove_favourite(favourites: &mut Vec<Album>, favourite_index: usize) -> ShelfResult<Album> {
    if favourite_index >= favourites.len() {
        return Err(ShelfError::invalid_input(format!(
            "No favourite at index {}",
            favourite_index
        )));
    }
    Ok(favourites.remove(favourite_index))
}
