//! Configuration for directory traversal.

use serde::{Deserialize, Serialize};

/// Options controlling how [`Files`](super::Files) walks its roots.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalkConfig {
    /// Whether to descend into symbolic links that point at directories.
    ///
    /// When disabled, such links are neither yielded nor walked. No cycle
    /// detection is done when enabled.
    pub follow_symlinks: bool,

    /// Maximum directory depth to descend to (`None` = unlimited).
    ///
    /// Depth 0 yields only the files directly inside each root.
    pub max_depth: Option<usize>,

    /// Whether to visit each directory's entries in file name order.
    ///
    /// When disabled, entries come in whatever order the host lists them.
    pub sort_by_name: bool,
}

impl WalkConfig {
    /// Create a new configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable following directory symlinks.
    #[must_use]
    pub fn with_follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }

    /// Set the maximum depth.
    #[must_use]
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Enable or disable name-ordered traversal.
    #[must_use]
    pub fn with_sort_by_name(mut self, sort: bool) -> Self {
        self.sort_by_name = sort;
        self
    }

    /// Whether subdirectories at `depth` should be entered.
    pub(crate) fn allows_depth(&self, depth: usize) -> bool {
        self.max_depth.is_none_or(|max| depth <= max)
    }
}
