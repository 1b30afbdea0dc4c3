/*!
Small helpers over ordered collections.

These functions never fail. An empty input plays the role of an absent
collection and simply produces an empty (or default) result.
*/

use crate::func::{SilentConsumer, SilentPredicate};

/// Overwrite every slot of `items` with a clone of `value`.
pub fn fill<T: Clone>(items: &mut [T], value: T) {
    for slot in items.iter_mut() {
        *slot = value.clone();
    }
}

/// An owned copy of `items`.
pub fn copy<T: Clone>(items: &[T]) -> Vec<T> {
    items.to_vec()
}

/// A copy of `items` without the element at `idx`.
///
/// An index out of range, or removing the only element, gives an empty
/// vector.
///
/// ```rust
/// use optio::array::cut;
///
/// assert_eq!(cut(&[1, 2, 3], 1), vec![1, 3]);
/// assert_eq!(cut(&[1, 2, 3], 3), Vec::<i32>::new());
/// ```
pub fn cut<T: Clone>(items: &[T], idx: usize) -> Vec<T> {
    if idx >= items.len() {
        return vec![];
    }
    let mut out = Vec::with_capacity(items.len() - 1);
    out.extend_from_slice(&items[..idx]);
    out.extend_from_slice(&items[idx + 1..]);
    out
}

/// Concatenate all of `arrays` in order.
///
/// Duplicates are kept; this is a union of sequences, not of sets.
pub fn union<T: Clone>(arrays: &[&[T]]) -> Vec<T> {
    let len = arrays.iter().map(|a| a.len()).sum();
    let mut out = Vec::with_capacity(len);
    for array in arrays {
        out.extend_from_slice(array);
    }
    out
}

/// Run `consumer` on every element of `items`, in order.
pub fn for_each<T: 'static>(items: &[T], consumer: &SilentConsumer<T>) {
    for item in items {
        consumer.accept(item);
    }
}

/// The largest element across all of `arrays`.
///
/// Returns `T::default()` when every array is empty. Elements that are not
/// comparable (like `NaN`) never replace the current maximum.
pub fn max<T: PartialOrd + Clone + Default>(arrays: &[&[T]]) -> T {
    extreme(arrays, |candidate, best| candidate > best)
}

/// The smallest element across all of `arrays`.
///
/// Returns `T::default()` when every array is empty. Elements that are not
/// comparable (like `NaN`) never replace the current minimum.
pub fn min<T: PartialOrd + Clone + Default>(arrays: &[&[T]]) -> T {
    extreme(arrays, |candidate, best| candidate < best)
}

fn extreme<T, F>(arrays: &[&[T]], better: F) -> T
where
    T: Clone + Default,
    F: Fn(&T, &T) -> bool,
{
    let mut all = arrays.iter().flat_map(|a| a.iter());
    let mut best = match all.next() {
        None => return T::default(),
        Some(first) => first,
    };
    for item in all {
        if better(item, best) {
            best = item;
        }
    }
    best.clone()
}

/// The index of the first element of `items` accepted by `pred`.
pub fn find<T: 'static>(
    items: &[T],
    pred: &SilentPredicate<T>,
) -> Option<usize> {
    items.iter().position(|item| pred.test(item))
}

/// Find the first element accepted by `pred` and return its index along
/// with a copy of `items` that leaves it out.
///
/// Returns `None` when nothing matches, in which case `items` is the
/// unchanged collection.
///
/// ```rust
/// use optio::array::find_and_cut;
/// use optio::func::SilentPredicate;
///
/// let big = SilentPredicate::new(|n: &i32| *n > 2);
/// assert_eq!(find_and_cut(&[1, 5, 2, 7], &big), Some((1, vec![1, 2, 7])));
/// assert_eq!(find_and_cut(&[1, 2], &big), None);
/// ```
pub fn find_and_cut<T: Clone + 'static>(
    items: &[T],
    pred: &SilentPredicate<T>,
) -> Option<(usize, Vec<T>)> {
    find(items, pred).map(|idx| (idx, cut(items, idx)))
}
