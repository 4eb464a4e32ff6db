//! The pattern filter stage.

use super::PatternSet;
use honq_core::{BoxIter, Item, Stream};

/// Which field of an [`Item`] a pattern filter tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchTarget {
    /// The file name without its extension.
    #[default]
    BaseName,

    /// The full path, including the extension.
    FullPath,
}

impl MatchTarget {
    fn select(self, item: &Item) -> &str {
        match self {
            Self::BaseName => &item.base_name,
            Self::FullPath => &item.full_path,
        }
    }
}

/// Keeps the upstream items that match a [`PatternSet`], or, when
/// inverted, the ones that do not.
///
/// Order is preserved and nothing is deduplicated.
#[derive(Debug, Clone)]
pub struct Like<S> {
    upstream: S,
    patterns: PatternSet,
    target: MatchTarget,
    invert: bool,
}

impl<S> Like<S>
where
    S: Stream<Item = Item>,
{
    /// Wrap `upstream` with a filter on `target`.
    pub fn new(upstream: S, patterns: PatternSet, target: MatchTarget, invert: bool) -> Self {
        Self {
            upstream,
            patterns,
            target,
            invert,
        }
    }

    /// Whether `item` passes this filter.
    #[must_use]
    pub fn keeps(&self, item: &Item) -> bool {
        self.patterns.is_match(self.target.select(item)) != self.invert
    }

    /// The compiled patterns.
    #[must_use]
    pub fn patterns(&self) -> &PatternSet {
        &self.patterns
    }

    /// The field being tested.
    #[must_use]
    pub fn target(&self) -> MatchTarget {
        self.target
    }

    /// Whether matches are dropped rather than kept.
    #[must_use]
    pub fn is_inverted(&self) -> bool {
        self.invert
    }

    /// The wrapped stage.
    #[must_use]
    pub fn upstream(&self) -> &S {
        &self.upstream
    }
}

impl<S> Stream for Like<S>
where
    S: Stream<Item = Item>,
{
    type Item = Item;

    fn iter_stream<'a>(&'a self) -> BoxIter<'a, Item>
    where
        Item: 'a,
    {
        Box::new(
            self.upstream
                .iter_stream()
                .filter(move |item| self.keeps(item)),
        )
    }
}

impl<'a, S> IntoIterator for &'a Like<S>
where
    S: Stream<Item = Item>,
{
    type Item = Item;
    type IntoIter = BoxIter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_stream()
    }
}
