//! Query engine
//!
//! Filter and sort operations over the in-memory album collection, keyed by
//! the closed `AlbumField` set.

use std::cmp::Ordering;

use crate::models::{Album, AlbumField};

/// Filter albums by a field value, case-insensitively.
///
/// Returns the indices of the matching albums within `albums`, in their
/// original relative order. Results are indices rather than copies because
/// the menu's index namespace is the full collection: "add to favourites by
/// index" must keep working against a filtered display.
///
/// Genre matching has a deliberate side effect on the underlying records:
/// when the matched genre is not already an album's primary genre, it is
/// swapped into first position on that album, and the new order persists for
/// the rest of the run and across save/reload. Title, artist, and year
/// filtering never mutate anything.
pub fn filter_albums(albums: &mut [Album], field: AlbumField, value: &str) -> Vec<usize> {
    match field {
        AlbumField::Genres => {
            let mut matches = Vec::new();
            for (i, album) in albums.iter_mut().enumerate() {
                if let Some(pos) = album.find_genre(value) {
                    album.promote_genre(pos);
                    matches.push(i);
                }
            }
            matches
        }
        _ => {
            let wanted = value.to_lowercase();
            albums
                .iter()
                .enumerate()
                .filter(|(_, album)| field_text(album, field).to_lowercase() == wanted)
                .map(|(i, _)| i)
                .collect()
        }
    }
}

/// Sort albums ascending by a field, returning the new ordering.
///
/// The sort is stable: albums with equal keys keep their prior relative
/// order, so re-sorting already-sorted output changes nothing. Ordering by
/// genre uses each album's first genre, which makes a prior genre filter
/// (with its promotion side effect) meaningful before a genre sort. An album
/// with no genres sorts with the empty-string key, ahead of any named genre.
pub fn sort_albums(albums: &[Album], field: AlbumField) -> Vec<Album> {
    let mut sorted = albums.to_vec();
    match field {
        AlbumField::Year => sorted.sort_by(|a, b| a.year.cmp(&b.year)),
        AlbumField::Title => sorted.sort_by(|a, b| a.title.cmp(&b.title)),
        AlbumField::Artist => sorted.sort_by(|a, b| a.artist.cmp(&b.artist)),
        AlbumField::Genres => sorted.sort_by(|a, b| cmp_first_genre(a, b)),
    }
    sorted
}

fn cmp_first_genre(a: &Album, b: &Album) -> Ordering {
    let ka = a.genres.first().map(String::as_str).unwrap_or("");
    let kb = b.genres.first().map(String::as_str).unwrap_or("");
    ka.cmp(kb)
}

/// The textual form of a single-valued field, as used for filter matching
fn field_text(album: &Album, field: AlbumField) -> String {
    match field {
        AlbumField::Title => album.title.clone(),
        AlbumField::Artist => album.artist.clone(),
        AlbumField::Year => album.year.to_string(),
        AlbumField::Genres => album.genres.join(", "),
    }
}
