//! Core data models for albumshelf
//!
//! The album catalog entry, the user account, and the closed field set the
//! operator may query by.

pub mod album;
pub mod field;
pub mod user;

pub use album::Album;
pub use field::AlbumField;
pub use user::User;
