//! JSON output formatting

use std::io;

use crate::tree::Entry;

/// Print the tree model as pretty-printed JSON to stdout.
///
/// Serializes the model, not the rendered canvas, so sizes stay structured
/// fields instead of formatted labels.
pub fn print_json(entry: &Entry) -> io::Result<()> {
    let json = serde_json::to_string_pretty(entry).map_err(io::Error::other)?;
    println!("{}", json);
    Ok(())
}
