//! Pattern filtering.
//!
//! Patterns are regular expressions. A list of them is compiled once into
//! a [`PatternSet`], which is then used either by a [`Like`] stage to keep
//! or drop items, or by [`Files`](crate::Files) to decide which folders
//! not to descend into.

pub mod like;
pub mod pattern;

pub use like::{Like, MatchTarget};
pub use pattern::PatternSet;

/// Turn file extensions into end-anchored patterns on the full path.
///
/// `jpg` becomes `\.jpg$`. Extensions are regex fragments, so `jpe?g`
/// works as well.
pub fn extension_patterns<I, S>(extensions: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    extensions
        .into_iter()
        .map(|ext| format!(r"\.{}$", ext.as_ref()))
        .collect()
}
