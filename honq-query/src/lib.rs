//! Directory traversal and lazy filtering stages for honq.
//!
//! A query starts at [`Files`], which walks one or more root folders, and
//! is refined by chaining filters and transforms onto it:
//!
//! - **Sources**: [`Files`] and its [`WalkConfig`]
//! - **Filters**: [`Like`] stages built by `like`, `not_like`, `types`,
//!   `not_types` and their exact variants
//! - **Transforms**: [`Map`] stages built by `f_slash`, `b_slash`,
//!   `lower`, `full`, `paths` and `map`
//!
//! Nothing touches the filesystem until the final stage is iterated, and
//! every iteration walks the folders again.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use honq_query::prelude::*;
//!
//! fn main() -> honq_core::Result<()> {
//!     // Every .jpg and .jpeg under C:/CoolStuff, skipping any folder
//!     // with "temp" in its name.
//!     let query = Files::new(["C:/CoolStuff"])
//!         .skip_folders(["temp"])?
//!         .types(["jpg", "jpeg"])?
//!         .full();
//!
//!     for path in &query {
//!         println!("{path}");
//!     }
//!     Ok(())
//! }
//! ```

#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod chain;
pub mod filter;
pub mod map;
pub mod source;

pub use chain::{ItemStream, StreamExt};
pub use filter::{Like, MatchTarget, PatternSet};
pub use map::{ItemMap, Map};
pub use source::{Files, FilesIter, WalkConfig};

/// Re-export commonly used types and traits.
pub mod prelude {
    pub use crate::chain::{ItemStream, StreamExt};
    pub use crate::filter::{Like, MatchTarget, PatternSet};
    pub use crate::map::{ItemMap, Map};
    pub use crate::source::{Files, WalkConfig};

    pub use honq_core::{
        HonqError, Item, Result as HonqResult, Stream,
        settings::{ignore_case, set_ignore_case},
    };
}
