/*!
Lazy, resettable pull streams.

A [`Stream`](trait.Stream.html) is a cursor over a finite sequence. Unlike
`std::iter::Iterator`, advancing and reading are separate operations: `next`
moves the cursor and reports whether an element was produced, and `value`
reads the element under the cursor as many times as needed. A stream can
also be rewound with `reset` and fully materialized with `collect` without
disturbing its cursor.

Three streams are provided:

* [`Slice`](struct.Slice.html) walks a fixed collection.
* [`Map`](struct.Map.html) transforms each element of another stream.
* [`Filter`](struct.Filter.html) skips the elements of another stream that a
  predicate rejects.

`Map` and `Filter` only rely on the `Stream` contract of their source, so
they nest freely. The free functions [`map`](fn.map.html),
[`filter`](fn.filter.html) and [`reduce`](fn.reduce.html) are shortcuts that
build such a pipeline over a slice and drive it to completion.

# Example

```rust
use optio::stream::{IntoStream, Stream};

let words = vec!["hey", "train", "trample", "after", "say"];
let mut stream = words
    .into_stream()
    .filter(|w: &&str| w.len() > 3)
    .filter(|w: &&str| w.starts_with("tr"));

let mut found = vec![];
while stream.next() {
    found.push(stream.value());
}
assert_eq!(found, vec!["train", "trample"]);

// Rewinding replays the same sequence, and collecting never moves the cursor.
stream.reset();
assert_eq!(stream.collect(), vec!["train", "trample"]);
assert!(stream.next());
assert_eq!(stream.value(), "train");
```

# Thread safety

Streams carry unsynchronized cursor state. `next` and `reset` take `&mut self`,
so sharing a stream across threads requires external synchronization.
*/

pub use self::adapters::{Filter, Map};
pub use self::pipeline::{filter, map, reduce};
pub use self::slice::Slice;

mod adapters;
mod pipeline;
mod slice;
#[cfg(test)]
mod tests;

/// A resettable cursor over a finite sequence.
///
/// A stream is in one of three states:
///
/// * *Fresh*: `next` has not produced anything since construction or the last
///   `reset`. `value` returns `Item::default()`.
/// * *Active*: the last `next` returned `true`. `value` returns the element
///   it produced.
/// * *Exhausted*: the last `next` returned `false`. `value` keeps returning
///   the last element produced, and every further `next` returns `false`
///   until `reset`.
pub trait Stream {
    /// The type of the elements produced by this stream.
    type Item;

    /// Advance the cursor by one element.
    ///
    /// Returns `true` if an element was produced. Once this returns `false`,
    /// it keeps returning `false` with no side effects until `reset` is
    /// called.
    fn next(&mut self) -> bool;

    /// The element produced by the most recent successful `next`.
    ///
    /// Before any element has been produced this is `Item::default()`. This
    /// never advances the cursor.
    fn value(&self) -> Self::Item;

    /// Rewind to the start of the original source.
    ///
    /// Composed streams reset their sources too. After a reset the stream
    /// behaves exactly like a freshly constructed one.
    fn reset(&mut self);

    /// Materialize every element of this stream, in order.
    ///
    /// This is computed from the full materialization of the source and not
    /// from the cursor, so the result is always the whole sequence, even
    /// after some elements were pulled with `next`. The cursor is left
    /// untouched.
    fn collect(&self) -> Vec<Self::Item>;

    /// Borrow this stream as a standard iterator.
    ///
    /// The iterator pulls with `next` and `value`, starting from the current
    /// cursor position, and moves the cursor as it goes.
    fn iter(&mut self) -> Iter<'_, Self>
    where
        Self: Sized,
    {
        Iter(self)
    }

    /// Lazily transform every element of this stream with `f`.
    ///
    /// The returned stream starts fresh: this stream is reset first.
    fn map<K, F>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Item) -> K,
    {
        Map::new(self, f)
    }

    /// Lazily keep only the elements of this stream accepted by `pred`.
    ///
    /// The returned stream starts fresh: this stream is reset first.
    fn filter<P>(self, pred: P) -> Filter<Self, P>
    where
        Self: Sized,
        Self::Item: Default,
        P: Fn(&Self::Item) -> bool,
    {
        Filter::new(self, pred)
    }
}

impl<'a, S: Stream + ?Sized> Stream for &'a mut S {
    type Item = S::Item;

    fn next(&mut self) -> bool {
        (**self).next()
    }

    fn value(&self) -> S::Item {
        (**self).value()
    }

    fn reset(&mut self) {
        (**self).reset()
    }

    fn collect(&self) -> Vec<S::Item> {
        (**self).collect()
    }
}

impl<S: Stream + ?Sized> Stream for Box<S> {
    type Item = S::Item;

    fn next(&mut self) -> bool {
        (**self).next()
    }

    fn value(&self) -> S::Item {
        (**self).value()
    }

    fn reset(&mut self) {
        (**self).reset()
    }

    fn collect(&self) -> Vec<S::Item> {
        (**self).collect()
    }
}

/// Types that can be converted into a stream.
///
/// This is analogous to `IntoIterator`. Every stream converts into itself,
/// and collections convert into a [`Slice`](struct.Slice.html) stream over
/// their elements.
pub trait IntoStream {
    /// The type of the elements produced by the stream.
    type Item;
    /// The type of the stream to be constructed.
    type Into: Stream<Item = Self::Item>;

    /// Construct a stream from `self`.
    fn into_stream(self) -> Self::Into;
}

impl<S: Stream> IntoStream for S {
    type Item = S::Item;
    type Into = S;

    fn into_stream(self) -> S {
        self
    }
}

impl<'a, T: Clone + Default> IntoStream for &'a [T] {
    type Item = T;
    type Into = Slice<T>;

    fn into_stream(self) -> Slice<T> {
        Slice::new(self)
    }
}

impl<'a, T: Clone + Default> IntoStream for &'a Vec<T> {
    type Item = T;
    type Into = Slice<T>;

    fn into_stream(self) -> Slice<T> {
        Slice::new(&**self)
    }
}

impl<T: Clone + Default> IntoStream for Vec<T> {
    type Item = T;
    type Into = Slice<T>;

    fn into_stream(self) -> Slice<T> {
        Slice::new(self)
    }
}

/// A standard iterator that drives a borrowed stream.
///
/// This is created by [`Stream::iter`](trait.Stream.html#method.iter).
#[derive(Debug)]
pub struct Iter<'s, S: ?Sized>(&'s mut S);

impl<'s, S: Stream + ?Sized> Iterator for Iter<'s, S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        if self.0.next() {
            Some(self.0.value())
        } else {
            None
        }
    }
}
