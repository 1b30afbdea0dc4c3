/*!
Set operations over ordered collections.

Inputs are plain slices that may contain duplicates. Outputs preserve the
order in which elements appear in the inputs and report each element at most
once (except for `symmetric_difference`, which is the concatenation of two
such results).

Membership uses `Eq + Hash`. Floating point numbers are neither, so they can
be wrapped in [`FloatKey`](struct.FloatKey.html).

# Example

```rust
use optio::set::{symmetric_difference, FloatKey};

let a: Vec<FloatKey> = [1.0, 3.2, 5.0, 6.0, 11.5, 11.5, 13.0]
    .iter().cloned().map(FloatKey).collect();
let b: Vec<FloatKey> = [2.8, 4.0, 7.0, 11.5, 13.0]
    .iter().cloned().map(FloatKey).collect();

let got: Vec<f64> = symmetric_difference(&a, &b).into_iter().map(|k| k.0).collect();
assert_eq!(got, vec![1.0, 3.2, 5.0, 6.0, 2.8, 4.0, 7.0]);
```
*/

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use fnv::FnvHashSet;

use crate::array;

/// The elements of `second` that also appear in `first`, in the order of
/// `second`, each reported once.
pub fn intersection<T>(first: &[T], second: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    if first.is_empty() || second.is_empty() {
        return vec![];
    }
    let mut pending: FnvHashSet<&T> = first.iter().collect();
    let mut out = vec![];
    for item in second {
        if pending.remove(item) {
            out.push(item.clone());
        }
    }
    out
}

/// The elements of `first` that do not appear in `second`, in the order of
/// `first`, each reported once.
pub fn difference<T>(first: &[T], second: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let mut seen: FnvHashSet<&T> = second.iter().collect();
    let mut out = vec![];
    for item in first {
        if seen.insert(item) {
            out.push(item.clone());
        }
    }
    out
}

/// `difference(first, second)` followed by `difference(second, first)`.
pub fn symmetric_difference<T>(first: &[T], second: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let left = difference(first, second);
    let right = difference(second, first);
    array::union(&[&left[..], &right[..]])
}

/// An `f64` that can be used as a set element.
///
/// Equality and hashing use the bit pattern of the number, with `-0.0`
/// treated as `0.0`. As a consequence a `NaN` is equal to itself when both
/// have the same bits.
#[derive(Clone, Copy, Debug, Default)]
pub struct FloatKey(pub f64);

impl FloatKey {
    fn bits(&self) -> u64 {
        if self.0 == 0.0 {
            0
        } else {
            self.0.to_bits()
        }
    }
}

impl PartialEq for FloatKey {
    fn eq(&self, other: &FloatKey) -> bool {
        self.bits() == other.bits()
    }
}

impl Eq for FloatKey {}

impl Hash for FloatKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bits().hash(state)
    }
}

impl PartialOrd for FloatKey {
    fn partial_cmp(&self, other: &FloatKey) -> Option<Ordering> {
        if self == other {
            return Some(Ordering::Equal);
        }
        self.0.partial_cmp(&other.0)
    }
}

impl From<f64> for FloatKey {
    fn from(n: f64) -> FloatKey {
        FloatKey(n)
    }
}
