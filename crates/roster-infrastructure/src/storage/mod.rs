//! Storage layer: atomic file writes and the durable key-value store.

mod atomic_file;
mod key_value;

pub use atomic_file::AtomicFile;
pub use key_value::{FileKeyValueStore, InMemoryKeyValueStore, KeyValueStore};
