//! Immutable tree model types

use serde::Serialize;

/// A regular file: its name and size in bytes.
///
/// Built once when the walker discovers the file; never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileEntry {
    pub name: String,
    pub size_bytes: u64,
}

impl FileEntry {
    pub fn new(name: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            name: name.into(),
            size_bytes,
        }
    }

    /// One-line label: `<name> <size> bytes`.
    pub fn label(&self) -> String {
        format!("{} {} bytes", self.name, self.size_bytes)
    }
}

/// A directory with its direct files and subdirectories.
///
/// Both child sequences keep the order the walker produced them in; the
/// renderer never reorders. A `DirectoryEntry` is constructed only once its
/// full child sequence is known, so no partially-built node ever escapes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectoryEntry {
    pub name: String,
    pub files: Vec<FileEntry>,
    pub subdirectories: Vec<DirectoryEntry>,
}

impl DirectoryEntry {
    pub fn new(
        name: impl Into<String>,
        files: Vec<FileEntry>,
        subdirectories: Vec<DirectoryEntry>,
    ) -> Self {
        Self {
            name: name.into(),
            files,
            subdirectories,
        }
    }

    /// Total bytes in this directory: direct files plus every subdirectory,
    /// recursively.
    pub fn total_size(&self) -> u64 {
        let file_bytes: u64 = self.files.iter().map(|f| f.size_bytes).sum();
        let dir_bytes: u64 = self.subdirectories.iter().map(Self::total_size).sum();
        file_bytes + dir_bytes
    }

    /// Number of rows this directory's contents occupy below its own header
    /// row once rendered.
    ///
    /// Each direct file takes one row; each subdirectory takes one header row
    /// plus its own span. This is exactly how far a continuation bar must
    /// reach for the next sibling's connector to still attach to the parent.
    pub fn row_span(&self) -> usize {
        self.files.len()
            + self
                .subdirectories
                .iter()
                .map(|d| 1 + d.row_span())
                .sum::<usize>()
    }

    /// Header line: `<name> <total size> bytes`.
    pub fn header(&self) -> String {
        format!("{} {} bytes", self.name, self.total_size())
    }
}

/// Either node kind. The root of a walk may be a plain file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Entry {
    File(FileEntry),
    Directory(DirectoryEntry),
}

impl Entry {
    pub fn name(&self) -> &str {
        match self {
            Entry::File(file) => &file.name,
            Entry::Directory(dir) => &dir.name,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, Entry::Directory(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dir(name: &str, files: Vec<FileEntry>, subs: Vec<DirectoryEntry>) -> DirectoryEntry {
        DirectoryEntry::new(name, files, subs)
    }

    #[test]
    fn test_total_size_sums_direct_files() {
        let d = dir(
            "root",
            vec![FileEntry::new("a", 1), FileEntry::new("b", 2)],
            vec![],
        );
        assert_eq!(d.total_size(), 3);
    }

    #[test]
    fn test_total_size_recurses_independent_of_shape() {
        // Same files, two different nestings - totals must agree.
        let flat = dir(
            "root",
            vec![
                FileEntry::new("a", 10),
                FileEntry::new("b", 20),
                FileEntry::new("c", 30),
            ],
            vec![],
        );
        let nested = dir(
            "root",
            vec![FileEntry::new("a", 10)],
            vec![dir(
                "mid",
                vec![FileEntry::new("b", 20)],
                vec![dir("leaf", vec![FileEntry::new("c", 30)], vec![])],
            )],
        );
        assert_eq!(flat.total_size(), 60);
        assert_eq!(nested.total_size(), 60);
    }

    #[test]
    fn test_total_size_empty_directory_is_zero() {
        assert_eq!(dir("empty", vec![], vec![]).total_size(), 0);
    }

    #[test]
    fn test_row_span_counts_files_and_subdir_headers() {
        // Two files: span 2.
        let d = dir(
            "root",
            vec![FileEntry::new("a", 1), FileEntry::new("b", 1)],
            vec![],
        );
        assert_eq!(d.row_span(), 2);

        // One subdir holding one file: 1 header + 1 file = 2.
        let d = dir(
            "root",
            vec![],
            vec![dir("sub", vec![FileEntry::new("a", 1)], vec![])],
        );
        assert_eq!(d.row_span(), 2);
    }

    #[test]
    fn test_row_span_empty_directory_is_zero() {
        assert_eq!(dir("empty", vec![], vec![]).row_span(), 0);
    }

    #[test]
    fn test_row_span_deep_chain() {
        // a/b/c, each level empty but for the next: spans 3, 2, 1, 0 inward.
        let chain = dir(
            "a",
            vec![],
            vec![dir("b", vec![], vec![dir("c", vec![], vec![])])],
        );
        assert_eq!(chain.row_span(), 2);
        assert_eq!(chain.subdirectories[0].row_span(), 1);
    }

    #[test]
    fn test_labels() {
        assert_eq!(FileEntry::new("a.txt", 10).label(), "a.txt 10 bytes");
        let d = dir("root", vec![FileEntry::new("a.txt", 10)], vec![]);
        assert_eq!(d.header(), "root 10 bytes");
    }

    #[test]
    fn test_entry_helpers() {
        let file = Entry::File(FileEntry::new("a", 1));
        let directory = Entry::Directory(dir("d", vec![], vec![]));
        assert_eq!(file.name(), "a");
        assert_eq!(directory.name(), "d");
        assert!(!file.is_dir());
        assert!(directory.is_dir());
    }

    #[test]
    fn test_serialization_is_tagged() {
        let entry = Entry::Directory(dir("root", vec![FileEntry::new("a", 1)], vec![]));
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["type"], "directory");
        assert_eq!(json["files"][0]["name"], "a");
        assert_eq!(json["files"][0]["size_bytes"], 1);
    }
}
