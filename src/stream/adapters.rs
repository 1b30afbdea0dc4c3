use std::fmt;

use crate::stream::{IntoStream, Stream};

/// A stream that lazily transforms the elements of another stream.
///
/// Each `next` advances the source by exactly one element, and `value`
/// applies the transform to the source's current value. The transform runs
/// every time `value` is called, so it should be cheap and free of side
/// effects.
///
/// # Example
///
/// ```rust
/// use optio::stream::{Map, Stream};
///
/// let mut lengths = Map::new(vec!["abc", "defg", "hijkl"], |s: &str| s.len());
/// assert_eq!(lengths.collect(), vec![3, 4, 5]);
///
/// assert!(lengths.next());
/// assert_eq!(lengths.value(), 3);
/// ```
pub struct Map<S, F> {
    source: S,
    f: F,
    produced: bool,
}

impl<S: Stream, F> Map<S, F> {
    /// Create a fresh stream that transforms `source` with `f`.
    ///
    /// `source` may be any stream or collection. A stream is reset first, so
    /// the new stream always starts from the beginning of its source.
    pub fn new<I, K>(source: I, f: F) -> Map<S, F>
    where
        I: IntoStream<Into = S>,
        F: Fn(S::Item) -> K,
    {
        let mut source = source.into_stream();
        source.reset();
        Map { source, f, produced: false }
    }

    /// The stream this one reads from.
    pub fn source(&self) -> &S {
        &self.source
    }
}

impl<S, F, K> Stream for Map<S, F>
where
    S: Stream,
    F: Fn(S::Item) -> K,
    K: Default,
{
    type Item = K;

    fn next(&mut self) -> bool {
        let more = self.source.next();
        self.produced |= more;
        more
    }

    fn value(&self) -> K {
        if !self.produced {
            return K::default();
        }
        (self.f)(self.source.value())
    }

    fn reset(&mut self) {
        self.source.reset();
        self.produced = false;
    }

    fn collect(&self) -> Vec<K> {
        self.source.collect().into_iter().map(&self.f).collect()
    }
}

impl<S: fmt::Debug, F> fmt::Debug for Map<S, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Map")
            .field("source", &self.source)
            .field("produced", &self.produced)
            .finish()
    }
}

/// A stream that lazily skips the elements of another stream rejected by a
/// predicate.
///
/// A single `next` may pull any number of elements from the source: it stops
/// at the first accepted element, or when the source is exhausted. `value`
/// is the last accepted element, which is kept after exhaustion.
///
/// # Example
///
/// ```rust
/// use optio::stream::{Filter, Stream};
///
/// let mut odd = Filter::new(vec![1, 2, 3, 4, 5], |n: &i32| n % 2 == 1);
/// assert_eq!(odd.collect(), vec![1, 3, 5]);
///
/// let mut seen = vec![];
/// while odd.next() {
///     seen.push(odd.value());
/// }
/// assert_eq!(seen, vec![1, 3, 5]);
/// assert_eq!(odd.value(), 5);
/// ```
pub struct Filter<S: Stream, P> {
    source: S,
    pred: P,
    value: S::Item,
}

impl<S, P> Filter<S, P>
where
    S: Stream,
    S::Item: Default,
{
    /// Create a fresh stream over the elements of `source` accepted by
    /// `pred`.
    ///
    /// `source` may be any stream or collection. A stream is reset first, so
    /// the new stream always starts from the beginning of its source.
    pub fn new<I>(source: I, pred: P) -> Filter<S, P>
    where
        I: IntoStream<Into = S>,
        P: Fn(&S::Item) -> bool,
    {
        let mut source = source.into_stream();
        source.reset();
        Filter { source, pred, value: Default::default() }
    }

    /// The stream this one reads from.
    pub fn source(&self) -> &S {
        &self.source
    }
}

impl<S, P> Stream for Filter<S, P>
where
    S: Stream,
    S::Item: Clone + Default,
    P: Fn(&S::Item) -> bool,
{
    type Item = S::Item;

    fn next(&mut self) -> bool {
        while self.source.next() {
            let candidate = self.source.value();
            if (self.pred)(&candidate) {
                self.value = candidate;
                return true;
            }
        }
        false
    }

    fn value(&self) -> S::Item {
        self.value.clone()
    }

    fn reset(&mut self) {
        self.source.reset();
        self.value = Default::default();
    }

    fn collect(&self) -> Vec<S::Item> {
        let pred = &self.pred;
        self.source.collect().into_iter().filter(|item| pred(item)).collect()
    }
}

impl<S, P> fmt::Debug for Filter<S, P>
where
    S: Stream + fmt::Debug,
    S::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Filter")
            .field("source", &self.source)
            .field("value", &self.value)
            .finish()
    }
}
