//! TreeWalker - materializes the tree model from the filesystem

use std::fs;
use std::io;
use std::path::Path;

use super::config::WalkerConfig;
use super::entry::{DirectoryEntry, Entry, FileEntry};
use super::utils::should_ignore_path;

/// Walks a directory subtree and builds an immutable [`Entry`] model.
///
/// The walker is the only component that touches storage; rendering operates
/// purely on the returned model. Symlinks are skipped entirely to prevent
/// cycles.
pub struct TreeWalker {
    config: WalkerConfig,
}

impl TreeWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    /// Walk `root` and build the tree model.
    ///
    /// Returns `Ok(None)` if the path does not exist, so callers can
    /// distinguish "nothing to render" from an empty directory (which still
    /// renders a header line). A plain-file root yields `Entry::File`.
    ///
    /// An unreadable entry below the root is skipped with a warning on
    /// stderr; only a failure to read the root itself is an error.
    pub fn walk(&self, root: &Path) -> io::Result<Option<Entry>> {
        if !root.exists() {
            return Ok(None);
        }

        if root.is_file() {
            let size = fs::metadata(root)?.len();
            return Ok(Some(Entry::File(FileEntry::new(entry_name(root), size))));
        }

        let dir = self.walk_dir(root)?;
        Ok(Some(Entry::Directory(dir)))
    }

    fn walk_dir(&self, path: &Path) -> io::Result<DirectoryEntry> {
        let mut entries: Vec<fs::DirEntry> = fs::read_dir(path)?.filter_map(|e| e.ok()).collect();
        if self.config.sort {
            entries.sort_by_key(|e| e.file_name());
        }

        // Children are collected in full before the entry is constructed, so
        // every DirectoryEntry handed out is complete and immutable.
        let mut files = Vec::new();
        let mut subdirectories = Vec::new();

        for entry in entries {
            let entry_path = entry.path();

            if entry_path.is_symlink() {
                continue;
            }
            if should_ignore_path(&entry_path, &self.config.ignore_patterns) {
                continue;
            }

            if entry_path.is_dir() {
                match self.walk_dir(&entry_path) {
                    Ok(sub) => subdirectories.push(sub),
                    Err(e) => {
                        eprintln!("canopy: skipping '{}': {}", entry_path.display(), e);
                    }
                }
            } else if entry_path.is_file() {
                match entry.metadata() {
                    Ok(meta) => files.push(FileEntry::new(entry_name(&entry_path), meta.len())),
                    Err(e) => {
                        eprintln!("canopy: skipping '{}': {}", entry_path.display(), e);
                    }
                }
            }
        }

        Ok(DirectoryEntry::new(entry_name(path), files, subdirectories))
    }
}

fn entry_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| ".".to_string())
}
