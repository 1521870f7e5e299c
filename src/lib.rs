//! Canopy - a tree command that shows per-file and aggregated directory sizes

pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use output::{Canvas, Report, print_json, render_tree};
pub use tree::{DirectoryEntry, Entry, FileEntry, TreeWalker, WalkerConfig};
