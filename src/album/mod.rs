//! # Album Catalogue
//!
//! The record store for album entries and the validation step that turns
//! raw request bodies into typed values.
//!
//! # Operations
//!
//! - `list` - Snapshot of every album in insertion order
//! - `get` - First album with a matching id
//! - `insert` - Append a new album
//! - `update` - Overwrite title, artist and price of an album
//! - `delete` - Remove an album

pub mod errors;
pub mod model;
pub mod store;
pub mod validate;

pub use errors::{StoreError, StoreResult, ValidationError};
pub use model::{seed_albums, Album, AlbumFields};
pub use store::{AlbumRepository, DuplicatePolicy, InMemoryAlbumStore, StoreConfig};
pub use validate::{parse_album_fields, parse_new_album};
