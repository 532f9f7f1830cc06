//! Word lists
//!
//! Bundled word banks compiled into the binary plus loading from disk.

mod embedded;
pub mod loader;

pub use embedded::{ENGLISH, ENGLISH_COUNT};
pub use loader::{DictionaryError, load};
