//! # honq - Hierarchical Operating system Notation Query
//!
//! Easy filtering for getting the files you want. Iterate over [`Files`],
//! optionally chaining filters, without writing the directory walk
//! yourself.
//!
//! Results are [`Item`]s holding the full path and the base name. End a
//! query with `.full()` to get just the full paths.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use honq::prelude::*;
//!
//! fn main() -> HonqResult<()> {
//!     // Every file under C:/CoolStuff.
//!     for path in &Files::new(["C:/CoolStuff"]).full() {
//!         println!("{path}");
//!     }
//!
//!     // Only songs 1 to 3. Patterns are regular expressions.
//!     let songs = Files::new(["C:/CoolStuff"]).like(["song[1-3]"])?.full();
//!
//!     // Skip folders named exactly "temp", but not "temporal".
//!     let kept = Files::new(["C:/CoolStuff"]).skip_folders_exact(["temp"])?.full();
//!
//!     // Case is ignored by default.
//!     set_ignore_case(false);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - **honq-core**: the [`Item`] record, the [`Stream`] trait, settings and errors
//! - **honq-query**: the traversal source, pattern filters and mapping stages

#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// Re-export all public APIs from sub-crates
pub use honq_core as core;
pub use honq_query as query;

pub use honq_core::{HonqError, Item, Result, Stream, settings};
pub use honq_query::{Files, ItemStream, StreamExt, WalkConfig};

/// Prelude module for convenient imports.
///
/// This module re-exports the most commonly used types and traits
/// from all honq crates.
pub mod prelude {
    pub use honq_query::prelude::*;
}

/// Version information for honq.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
