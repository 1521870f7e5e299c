//! Configuration types for the tree walker

/// Configuration for tree walking behavior.
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Skip entries whose name matches one of these glob patterns.
    pub ignore_patterns: Vec<String>,
    /// Sort each directory's children by name before building the entry.
    /// Raw `read_dir` order is filesystem-dependent; sorting happens here,
    /// at input construction - the renderer always keeps the order it is
    /// given.
    pub sort: bool,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            ignore_patterns: Vec::new(),
            sort: true,
        }
    }
}
