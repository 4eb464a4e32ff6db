//! Prelude module for convenient imports.
//!
//! ```rust
//! use honq_core::prelude::*;
//!
//! let items = vec![Item::new("docs/readme.md", "readme")];
//! assert_eq!(items.iter_stream().count(), 1);
//! ```

pub use crate::error::{HonqError, Result};
pub use crate::settings::{ignore_case, set_ignore_case};
pub use crate::traits::{BoxIter, Stream};
pub use crate::types::Item;
