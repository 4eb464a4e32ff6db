//! Core traits for honq.

pub mod stream;

pub use stream::{BoxIter, Stream};
