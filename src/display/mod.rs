//! Terminal output formatting for albumshelf

pub mod album;

pub use album::{format_album_list, format_filtered_list};
