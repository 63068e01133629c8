//! albumshelf - menu-driven music album catalog manager
//!
//! This library provides the core functionality for the albumshelf CLI: a
//! small personal catalog of music albums with per-user favourites lists,
//! persisted as hand-editable JSON collection files.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Data directory resolution and user settings
//! - `error`: Custom error types
//! - `models`: Core data models (albums, users, the queryable field set)
//! - `storage`: JSON collection file storage layer
//! - `services`: Business logic (query engine, sessions, favourites)
//! - `display`: Terminal output formatting
//! - `menu`: The interactive menu loops

pub mod config;
pub mod display;
pub mod error;
pub mod menu;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{ShelfError, ShelfResult};
