//! Trailing summary line

use std::fmt;
use std::io::{self, Write};

use termcolor::{ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::tree::{DirectoryEntry, Entry};

/// Directory, file, and byte totals for a walked tree.
///
/// Computed from the model - no second walk. The root directory itself is
/// not counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub directories: usize,
    pub files: usize,
    pub bytes: u64,
}

impl Report {
    pub fn from_entry(entry: &Entry) -> Self {
        match entry {
            Entry::File(file) => Self {
                directories: 0,
                files: 1,
                bytes: file.size_bytes,
            },
            Entry::Directory(dir) => {
                let (directories, files) = count_dir(dir);
                Self {
                    directories,
                    files,
                    bytes: dir.total_size(),
                }
            }
        }
    }

    /// Print the summary after the tree, bold when color is enabled.
    pub fn print(&self, use_color: bool) -> io::Result<()> {
        let choice = if use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        let mut stdout = StandardStream::stdout(choice);
        writeln!(stdout)?;
        stdout.set_color(ColorSpec::new().set_bold(true))?;
        write!(stdout, "{}", self)?;
        stdout.reset()?;
        writeln!(stdout)?;
        Ok(())
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} directories, {} files, {} bytes",
            self.directories, self.files, self.bytes
        )
    }
}

fn count_dir(dir: &DirectoryEntry) -> (usize, usize) {
    let mut directories = 0;
    let mut files = dir.files.len();
    for sub in &dir.subdirectories {
        let (d, f) = count_dir(sub);
        directories += d + 1;
        files += f;
    }
    (directories, files)
}
