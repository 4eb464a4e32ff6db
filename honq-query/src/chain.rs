//! The chainable vocabulary shared by every stage.
//!
//! Each method consumes the receiver and returns a new stage wrapping it,
//! so a pipeline reads left to right:
//!
//! ```rust,no_run
//! use honq_query::prelude::*;
//!
//! # fn main() -> honq_core::Result<()> {
//! let songs = Files::new(["music"]).like(["song[1-3]"])?.lower().full();
//! # Ok(())
//! # }
//! ```
//!
//! Pattern methods use the process-wide case setting at the moment they
//! are called. [`ItemStream::full`] and [`ItemStream::paths`] end the
//! item-shaped part of a pipeline: the projected stream yields plain
//! paths, so none of the item filters (and no second projection) can
//! follow.

use crate::filter::{Like, MatchTarget, PatternSet, extension_patterns};
use crate::map::{self, ItemMap, Map};
use honq_core::{Item, Result, Stream, settings};
use std::path::PathBuf;

/// Generic combinators available on every stream.
pub trait StreamExt: Stream + Sized {
    /// Transform every value with `func`.
    fn map<F, T>(self, func: F) -> Map<Self, F>
    where
        F: Fn(Self::Item) -> T,
    {
        Map::new(self, func)
    }
}

impl<S: Stream> StreamExt for S {}

/// Filters and transforms for streams of [`Item`]s.
pub trait ItemStream: Stream<Item = Item> + Sized {
    /// Keep items whose base name contains a match for any pattern.
    fn like<I, S>(self, patterns: I) -> Result<Like<Self>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        pattern_filter(self, "like", patterns, false, MatchTarget::BaseName, false)
    }

    /// Keep items whose whole base name matches any pattern.
    fn like_exact<I, S>(self, patterns: I) -> Result<Like<Self>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        pattern_filter(self, "like_exact", patterns, true, MatchTarget::BaseName, false)
    }

    /// Drop items whose base name contains a match for any pattern.
    fn not_like<I, S>(self, patterns: I) -> Result<Like<Self>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        pattern_filter(self, "not_like", patterns, false, MatchTarget::BaseName, true)
    }

    /// Drop items whose whole base name matches any pattern.
    fn not_like_exact<I, S>(self, patterns: I) -> Result<Like<Self>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        pattern_filter(self, "not_like_exact", patterns, true, MatchTarget::BaseName, true)
    }

    /// Keep items whose full path ends in `.<ext>` for one of `extensions`.
    fn types<I, S>(self, extensions: I) -> Result<Like<Self>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = extension_patterns(extensions);
        pattern_filter(self, "types", patterns, false, MatchTarget::FullPath, false)
    }

    /// Drop items whose full path ends in `.<ext>` for one of `extensions`.
    fn not_types<I, S>(self, extensions: I) -> Result<Like<Self>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = extension_patterns(extensions);
        pattern_filter(self, "not_types", patterns, false, MatchTarget::FullPath, true)
    }

    /// Use `/` as the only separator.
    fn f_slash(self) -> ItemMap<Self> {
        Map::new(self, map::forward_slashes as fn(Item) -> Item)
    }

    /// Use `\` as the only separator.
    fn b_slash(self) -> ItemMap<Self> {
        Map::new(self, map::back_slashes as fn(Item) -> Item)
    }

    /// Lower-case the full path and the base name.
    fn lower(self) -> ItemMap<Self> {
        Map::new(self, map::lower_case as fn(Item) -> Item)
    }

    /// Project each item to its full path.
    fn full(self) -> Map<Self, fn(Item) -> String> {
        Map::new(self, map::full_path as fn(Item) -> String)
    }

    /// Project each item to its full path as a [`PathBuf`].
    fn paths(self) -> Map<Self, fn(Item) -> PathBuf> {
        Map::new(self, map::path_buf as fn(Item) -> PathBuf)
    }
}

impl<S: Stream<Item = Item>> ItemStream for S {}

fn pattern_filter<St, I, S>(
    upstream: St,
    context: &str,
    patterns: I,
    exact: bool,
    target: MatchTarget,
    invert: bool,
) -> Result<Like<St>>
where
    St: Stream<Item = Item>,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let patterns = PatternSet::compile_for(context, patterns, exact, settings::case_sensitive())?;
    Ok(Like::new(upstream, patterns, target, invert))
}
