//! # honq core
//!
//! Shared building blocks for the honq file query layer:
//!
//! - **Data structures**: the [`Item`] record of full path and base name
//! - **Core traits**: the re-iterable [`Stream`] contract every stage implements
//! - **Settings**: the process-wide case-sensitivity default
//! - **Error handling**: [`HonqError`] and the crate [`Result`] alias
//!
//! The stages themselves (directory traversal, pattern filters, mapping)
//! live in `honq-query`.

#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod prelude;

pub mod error;
pub mod settings;
pub mod traits;
pub mod types;

pub use error::{HonqError, Result};
pub use traits::{BoxIter, Stream};
pub use types::Item;

/// Version information for the honq core library.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
