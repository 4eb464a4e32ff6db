//! The mapping stage and the built-in transforms.

use honq_core::{BoxIter, Item, Stream};
use std::fmt;
use std::path::PathBuf;

/// Applies a transform to every upstream value.
///
/// The transform runs lazily, once per value per pass. It never filters
/// and keeps no state between values.
#[derive(Clone)]
pub struct Map<S, F> {
    upstream: S,
    func: F,
}

/// A mapping stage that keeps the [`Item`] shape.
pub type ItemMap<S> = Map<S, fn(Item) -> Item>;

impl<S, F> Map<S, F> {
    /// Wrap `upstream`, transforming each value with `func`.
    pub fn new(upstream: S, func: F) -> Self {
        Self { upstream, func }
    }

    /// The wrapped stage.
    #[must_use]
    pub fn upstream(&self) -> &S {
        &self.upstream
    }
}

impl<S, F, T> Stream for Map<S, F>
where
    S: Stream,
    F: Fn(S::Item) -> T,
{
    type Item = T;

    fn iter_stream<'a>(&'a self) -> BoxIter<'a, T>
    where
        T: 'a,
    {
        Box::new(self.upstream.iter_stream().map(&self.func))
    }
}

impl<'a, S, F, T> IntoIterator for &'a Map<S, F>
where
    S: Stream,
    F: Fn(S::Item) -> T,
    T: 'a,
{
    type Item = T;
    type IntoIter = BoxIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_stream()
    }
}

impl<S: fmt::Debug, F> fmt::Debug for Map<S, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Map")
            .field("upstream", &self.upstream)
            .field("func", &std::any::type_name::<F>())
            .finish()
    }
}

/// Rewrite `\` to `/` in both fields.
pub fn forward_slashes(item: Item) -> Item {
    item.map_fields(|field| field.replace('\\', "/"))
}

/// Rewrite `/` to `\` in both fields.
pub fn back_slashes(item: Item) -> Item {
    item.map_fields(|field| field.replace('/', "\\"))
}

/// Lower-case both fields.
pub fn lower_case(item: Item) -> Item {
    item.map_fields(str::to_lowercase)
}

/// Keep only the full path.
pub fn full_path(item: Item) -> String {
    item.full_path
}

/// Keep only the full path, as a [`PathBuf`].
pub fn path_buf(item: Item) -> PathBuf {
    PathBuf::from(item.full_path)
}
