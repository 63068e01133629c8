//! Business logic layer for albumshelf
//!
//! The query engine, the session manager, and favourites curation. Each
//! operation works over the in-memory collections owned by the menu loop.

pub mod favourites;
pub mod query;
pub mod session;

pub use favourites::{add_favourite, remove_favourite};
pub use query::{filter_albums, sort_albums};
pub use session::{login, signup, Session};
