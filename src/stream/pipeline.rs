use crate::stream::{Filter, Map, Slice, Stream};

/// Transform every element of `items` with `f`.
///
/// The result has the same length and order as `items`.
///
/// ```rust
/// let lengths = optio::stream::map(&["abc", "defg", "hijkl"], |s: &str| s.len());
/// assert_eq!(lengths, vec![3, 4, 5]);
/// ```
pub fn map<T, K, F>(items: &[T], f: F) -> Vec<K>
where
    T: Clone + Default,
    K: Default,
    F: Fn(T) -> K,
{
    Map::new(items, f).collect()
}

/// Keep the elements of `items` accepted by `pred`, in order.
///
/// An empty input, or a predicate that rejects everything, gives an empty
/// result.
///
/// ```rust
/// let odd = optio::stream::filter(&[1, 2, 3, 4, 5], |n: &i32| n % 2 == 1);
/// assert_eq!(odd, vec![1, 3, 5]);
/// ```
pub fn filter<T, P>(items: &[T], pred: P) -> Vec<T>
where
    T: Clone + Default,
    P: Fn(&T) -> bool,
{
    Filter::new(items, pred).collect()
}

/// Fold `items` into a single value, starting from `K::default()`.
///
/// Each element is combined in order with `acc = f(acc, element)`. An empty
/// input returns `K::default()` without calling `f`.
///
/// ```rust
/// let sum = optio::stream::reduce(&[3, 4, 5, 6], |acc: i32, n: i32| acc + n);
/// assert_eq!(sum, 18);
///
/// let total_len = optio::stream::reduce(&[] as &[&str], |acc: usize, s: &str| {
///     acc + s.len()
/// });
/// assert_eq!(total_len, 0);
/// ```
pub fn reduce<T, K, F>(items: &[T], f: F) -> K
where
    T: Clone + Default,
    K: Default,
    F: Fn(K, T) -> K,
{
    let mut stream = Slice::new(items);
    let mut acc = K::default();
    while stream.next() {
        acc = f(acc, stream.value());
    }
    acc
}
