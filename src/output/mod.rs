//! Rendering the tree model
//!
//! This module turns a [`crate::tree::Entry`] into output:
//!
//! - `canvas` - sparse auto-growing character grid the layout writes into
//! - `layout` - recursive layout engine and the `render_tree` entry point
//! - `json` - JSON serialization of the model
//! - `report` - trailing directory/file/byte summary line

mod canvas;
mod json;
mod layout;
mod report;

// Re-export public types and functions
pub use canvas::Canvas;
pub use json::print_json;
pub use layout::render_tree;
pub use report::Report;
