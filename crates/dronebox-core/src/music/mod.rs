pub mod catalog;
pub mod library;
pub mod pitch;
mod player;
mod song;

pub use catalog::{CatalogEntry, catalog, write_ndjson};
pub use library::{builtin_songs, find_song};
pub use player::*;
pub use song::*;
