use crate::stream::Stream;

/// A stream over a fixed, ordered collection.
///
/// The collection is owned by the stream; building one from a slice copies
/// the elements once. `collect` returns a copy of the whole collection.
///
/// # Example
///
/// ```rust
/// use optio::stream::{Slice, Stream};
///
/// let mut stream = Slice::new(vec![1, 2]);
/// assert_eq!(stream.value(), 0);
/// assert!(stream.next());
/// assert!(stream.next());
/// assert!(!stream.next());
/// assert_eq!(stream.value(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct Slice<T> {
    items: Vec<T>,
    value: T,
    index: usize,
}

impl<T: Clone + Default> Slice<T> {
    /// Create a fresh stream over `items`.
    pub fn new<I: Into<Vec<T>>>(items: I) -> Slice<T> {
        Slice { items: items.into(), value: T::default(), index: 0 }
    }

    /// The number of elements in the underlying collection.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if and only if the underlying collection is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The underlying collection.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T: Clone + Default> Stream for Slice<T> {
    type Item = T;

    fn next(&mut self) -> bool {
        match self.items.get(self.index) {
            None => false,
            Some(item) => {
                self.value = item.clone();
                self.index += 1;
                true
            }
        }
    }

    fn value(&self) -> T {
        self.value.clone()
    }

    fn reset(&mut self) {
        log::trace!(
            "resetting slice stream after {} of {} items",
            self.index,
            self.items.len()
        );
        self.value = T::default();
        self.index = 0;
    }

    fn collect(&self) -> Vec<T> {
        self.items.clone()
    }
}

impl<T: Clone + Default> Default for Slice<T> {
    fn default() -> Slice<T> {
        Slice::new(vec![])
    }
}

impl<T: Clone + Default> From<Vec<T>> for Slice<T> {
    fn from(items: Vec<T>) -> Slice<T> {
        Slice::new(items)
    }
}
