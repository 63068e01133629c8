//! Album model
//!
//! Represents one record in the album catalog. Field names are serialized
//! in the capitalized form the collection files have always used, so
//! hand-edited fixtures stay loadable.

use serde::{Deserialize, Deserializer, Serialize};

use crate::config::DisplayOptions;

/// A music album record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Album {
    /// Album title, trimmed on construction
    #[serde(rename = "Title", deserialize_with = "trimmed")]
    pub title: String,

    /// Artist name, trimmed on construction
    #[serde(rename = "Artist", deserialize_with = "trimmed")]
    pub artist: String,

    /// Release year
    #[serde(rename = "Year")]
    pub year: i32,

    /// Genres in significance order. Never null; may be empty. The first
    /// entry is the album's primary genre and is the sort key when ordering
    /// by genre.
    #[serde(rename = "Genres")]
    pub genres: Vec<String>,
}

/// Trim whitespace while deserializing, so padded values in a hand-edited
/// collection file load in the same normalized form `Album::new` produces.
fn trimmed<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(raw.trim().to_string())
}

impl Album {
    /// Create a new album, trimming title and artist
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        year: i32,
        genres: Vec<String>,
    ) -> Self {
        Self {
            title: title.into().trim().to_string(),
            artist: artist.into().trim().to_string(),
            year,
            genres,
        }
    }

    /// Swap the genre at `index` into the primary (first) position.
    ///
    /// This is the genre-filter side effect: when a filter matches a
    /// non-first genre, that genre is promoted in place on this record, and
    /// the new order persists across save/reload. Only the query engine's
    /// genre filter calls this.
    ///
    /// Out-of-range indices are ignored.
    pub fn promote_genre(&mut self, index: usize) {
        if index > 0 && index < self.genres.len() {
            self.genres.swap(0, index);
        }
    }

    /// Position of the first genre case-insensitively equal to `value`
    pub fn find_genre(&self, value: &str) -> Option<usize> {
        let wanted = value.to_lowercase();
        self.genres.iter().position(|g| g.to_lowercase() == wanted)
    }

    /// Render this album as a single line, honoring the display options:
    /// `Artist - Title`, plus ` (Year)` and ` [Genre, Genre]` when enabled.
    pub fn format_line(&self, options: &DisplayOptions) -> String {
        let mut line = format!("{} - {}", self.artist, self.title);
        if options.show_year {
            line.push_str(&format!(" ({})", self.year));
        }
        if options.show_genre {
            line.push_str(&format!(" [{}]", self.genres.join(", ")));
        }
        line
    }
}
