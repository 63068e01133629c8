//! Album display formatting
//!
//! Numbered album listings for terminal output. Two index namespaces exist:
//! a plain listing numbers entries by their own position, while a filtered
//! listing numbers each entry by its index in the full collection so the
//! printed numbers remain valid for add-to-favourites.

use crate::config::DisplayOptions;
use crate::models::Album;

/// Format a list of albums, numbered by their position in the list
pub fn format_album_list(albums: &[Album], options: &DisplayOptions) -> String {
    if albums.is_empty() {
        return "No albums to display.".to_string();
    }

    let mut output = String::new();
    for (i, album) in albums.iter().enumerate() {
        output.push_str(&format!("{}: {}\n", i, album.format_line(options)));
    }
    output
}

/// Format a filtered subset, numbering each album by its index in the full
/// collection
pub fn format_filtered_list(
    albums: &[Album],
    indices: &[usize],
    options: &DisplayOptions,
) -> String {
    if indices.is_empty() {
        return "No albums to display.".to_string();
    }

    let mut output = String::new();
    for &i in indices {
        output.push_str(&format!("{}: {}\n", i, albums[i].format_line(options)));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Album> {
        vec![
            Album::new("A", "Z", 2000, vec!["Rock".into()]),
            Album::new("B", "Y", 1990, vec!["Jazz".into()]),
        ]
    }

    fn bare() -> DisplayOptions {
        DisplayOptions {
            show_genre: false,
            show_year: false,
        }
    }

    #[test]
    fn test_empty_list_message() {
        assert_eq!(
            format_album_list(&[], &DisplayOptions::default()),
            "No albums to display."
        );
    }

    #[test]
    fn test_numbered_by_position() {
        let out = format_album_list(&catalog(), &bare());
        assert_eq!(out, "0: Z - A\n1: Y - B\n");
    }

    #[test]
    fn test_filtered_keeps_original_indices() {
        let albums = catalog();
        let out = format_filtered_list(&albums, &[1], &bare());
        assert_eq!(out, "1: Y - B\n");
    }

    #[test]
    fn test_options_flow_through() {
        let albums = catalog();
        let out = format_album_list(&albums, &DisplayOptions::default());
        assert!(out.contains("0: Z - A (2000) [Rock]"));
    }
}
