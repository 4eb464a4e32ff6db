//! The stream contract shared by every pipeline stage.
//!
//! A stream is not an iterator. It is a recipe for producing one: each
//! call to [`Stream::iter_stream`] starts from scratch and pulls from its
//! upstream on demand, so iterating a pipeline twice walks the
//! filesystem twice.

/// Boxed iterator handed out by [`Stream::iter_stream`].
pub type BoxIter<'a, T> = Box<dyn Iterator<Item = T> + 'a>;

/// A re-iterable, lazy source of values.
///
/// Stages own their upstream and borrow it while iterating. Nothing is
/// buffered ahead of the consumer.
///
/// # Examples
///
/// ```rust
/// use honq_core::traits::Stream;
/// use honq_core::types::Item;
///
/// let fixed = vec![Item::new("a/b.txt", "b"), Item::new("a/c.md", "c")];
///
/// let names: Vec<_> = fixed.iter_stream().map(|item| item.base_name).collect();
/// assert_eq!(names, ["b", "c"]);
///
/// // A second pass starts over.
/// assert_eq!(fixed.iter_stream().count(), 2);
/// ```
pub trait Stream {
    /// The type of value this stream yields.
    type Item;

    /// Start a fresh pass over the stream.
    fn iter_stream<'a>(&'a self) -> BoxIter<'a, Self::Item>
    where
        Self::Item: 'a;
}

/// A fixed, in-memory list of values.
///
/// Useful as an upstream for filters when the values do not come from
/// the filesystem.
impl<T: Clone> Stream for Vec<T> {
    type Item = T;

    fn iter_stream<'a>(&'a self) -> BoxIter<'a, T>
    where
        T: 'a,
    {
        Box::new(self.as_slice().iter().cloned())
    }
}

impl<S: Stream + ?Sized> Stream for &S {
    type Item = S::Item;

    fn iter_stream<'a>(&'a self) -> BoxIter<'a, S::Item>
    where
        S::Item: 'a,
    {
        (**self).iter_stream()
    }
}

impl<S: Stream + ?Sized> Stream for Box<S> {
    type Item = S::Item;

    fn iter_stream<'a>(&'a self) -> BoxIter<'a, S::Item>
    where
        S::Item: 'a,
    {
        (**self).iter_stream()
    }
}
