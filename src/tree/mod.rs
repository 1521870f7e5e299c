//! Tree model and filesystem walking
//!
//! This module owns the immutable in-memory representation of a directory
//! subtree and the walker that materializes it from the real filesystem.
//! Rendering (see [`crate::output`]) operates purely on the model and never
//! touches storage.

mod config;
mod entry;
mod utils;
mod walker;

// Re-export public types
pub use config::WalkerConfig;
pub use entry::{DirectoryEntry, Entry, FileEntry};
pub use walker::TreeWalker;
