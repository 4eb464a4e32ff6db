//! Traversal sources.

pub mod config;
pub mod files;

pub use config::WalkConfig;
pub use files::{Files, FilesIter};
