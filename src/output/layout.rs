//! Recursive tree layout engine
//!
//! Walks the tree model depth-first in pre-order, assigns each entry a row,
//! and writes its label plus connector glyphs onto a [`Canvas`]. Column
//! offset encodes depth (3 columns per level: a two-column connector plus one
//! space); row offset encodes vertical position among siblings. After a
//! non-last subdirectory, its `├─` is extended downward with `│` bars through
//! every row the subtree occupies, so the next sibling's connector still
//! reads as attached to the common parent.

use crate::tree::{DirectoryEntry, Entry};

use super::canvas::Canvas;

/// Columns each nesting level indents by.
const INDENT: usize = 3;

/// Render a tree model to its text form.
///
/// A plain-file root renders as its one-line label with no canvas involved;
/// a directory root is laid out on a fresh canvas starting at `(0, 0)` and
/// serialized. Rendering is pure: the same model always yields byte-identical
/// output.
pub fn render_tree(entry: &Entry) -> String {
    match entry {
        Entry::File(file) => file.label(),
        Entry::Directory(dir) => {
            let mut canvas = Canvas::new();
            render_directory(dir, &mut canvas, 0, 0);
            canvas.to_text()
        }
    }
}

/// Lay out `dir` with its header row at `(row_offset, col_offset)`.
fn render_directory(
    dir: &DirectoryEntry,
    canvas: &mut Canvas,
    row_offset: usize,
    col_offset: usize,
) {
    canvas.write(row_offset, col_offset, &dir.header());

    // First row below the header, relative to row_offset.
    let mut row_cursor = 1;

    for (i, sub) in dir.subdirectories.iter().enumerate() {
        render_directory(sub, canvas, row_offset + row_cursor, col_offset + INDENT);

        // Files always render after subdirectories, so a subdirectory is the
        // last visual child only when it is the last subdirectory and there
        // are no files.
        let is_last = i == dir.subdirectories.len() - 1 && dir.files.is_empty();
        if is_last {
            canvas.write(row_offset + row_cursor, col_offset, "└─");
        } else {
            canvas.write(row_offset + row_cursor, col_offset, "├─");
            // Extend the branch through every row the subtree occupies.
            for _ in 0..sub.row_span() {
                row_cursor += 1;
                canvas.write(row_offset + row_cursor, col_offset, "│");
            }
        }
        row_cursor += 1;
    }

    for (j, file) in dir.files.iter().enumerate() {
        let connector = if j == dir.files.len() - 1 {
            "└─"
        } else {
            "├─"
        };
        canvas.write(row_offset + row_cursor, col_offset, connector);
        canvas.write(row_offset + row_cursor, col_offset + INDENT, &file.label());
        row_cursor += 1;
    }
}
