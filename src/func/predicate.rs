use std::fmt;
use std::sync::Arc;

use crate::error::Error;
use crate::func::{absorb, ErrorHandler};

/// The boolean algebra shared by every predicate flavor.
///
/// Each operation consumes its operands and returns a new predicate that
/// closes over them. The operands themselves are never modified, so cloning a
/// predicate before combining it is enough to keep using the original.
///
/// For fallible predicates an error always wins: the first error met on the
/// evaluation path is returned with no boolean result. `and` and `or` short
/// circuit, so the right hand side is evaluated only when the left hand side
/// succeeded and did not already decide the outcome. `xor` and `xnor` always
/// need both sides, but still never evaluate the right hand side after the
/// left hand side failed.
pub trait PredicateAlgebra: Sized {
    /// The logical complement of this predicate.
    fn negate(self) -> Self;

    /// True when both predicates are true. `other` is only evaluated when
    /// `self` is true.
    fn and(self, other: Self) -> Self;

    /// True when either predicate is true. `other` is only evaluated when
    /// `self` is false.
    fn or(self, other: Self) -> Self;

    /// True when exactly one predicate is true.
    fn xor(self, other: Self) -> Self;

    /// True when both predicates agree.
    fn xnor(self, other: Self) -> Self;
}

/// A predicate over one value that cannot fail.
pub struct SilentPredicate<T>(Arc<dyn Fn(&T) -> bool + Send + Sync>);

impl<T: 'static> SilentPredicate<T> {
    /// Wrap a function as a silent predicate.
    pub fn new<F>(f: F) -> SilentPredicate<T>
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        SilentPredicate(Arc::new(f))
    }

    /// Evaluate this predicate.
    pub fn test(&self, value: &T) -> bool {
        (self.0)(value)
    }

    /// Convert this predicate into a fallible one that never fails.
    pub fn to_predicate<E: 'static>(self) -> Predicate<T, E> {
        Predicate::new(move |v| Ok(self.test(v)))
    }
}

impl<T: 'static> PredicateAlgebra for SilentPredicate<T> {
    fn negate(self) -> Self {
        SilentPredicate::new(move |v| !self.test(v))
    }

    fn and(self, other: Self) -> Self {
        SilentPredicate::new(move |v| self.test(v) && other.test(v))
    }

    fn or(self, other: Self) -> Self {
        SilentPredicate::new(move |v| self.test(v) || other.test(v))
    }

    fn xor(self, other: Self) -> Self {
        SilentPredicate::new(move |v| {
            let left = self.test(v);
            let right = other.test(v);
            left != right
        })
    }

    fn xnor(self, other: Self) -> Self {
        SilentPredicate::new(move |v| {
            let left = self.test(v);
            let right = other.test(v);
            left == right
        })
    }
}

impl<T> Clone for SilentPredicate<T> {
    fn clone(&self) -> SilentPredicate<T> {
        SilentPredicate(self.0.clone())
    }
}

impl<T> fmt::Debug for SilentPredicate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SilentPredicate(..)")
    }
}

/// A predicate over one value that may fail with an error of type `E`.
pub struct Predicate<T, E = Error>(
    Arc<dyn Fn(&T) -> Result<bool, E> + Send + Sync>,
);

impl<T: 'static, E: 'static> Predicate<T, E> {
    /// Wrap a fallible function as a predicate.
    pub fn new<F>(f: F) -> Predicate<T, E>
    where
        F: Fn(&T) -> Result<bool, E> + Send + Sync + 'static,
    {
        Predicate(Arc::new(f))
    }

    /// Evaluate this predicate.
    pub fn test(&self, value: &T) -> Result<bool, E> {
        (self.0)(value)
    }

    /// Convert this predicate into a silent one.
    ///
    /// Whenever evaluation fails, the error is passed to `handler` (if one
    /// is given) and the silent predicate answers `false`. Successful
    /// results are forwarded unchanged.
    pub fn to_silent_predicate(
        self,
        handler: Option<ErrorHandler<E>>,
    ) -> SilentPredicate<T> {
        SilentPredicate::new(move |v| match self.test(v) {
            Ok(result) => result,
            Err(err) => {
                absorb(handler.as_ref(), err, "silent predicate");
                false
            }
        })
    }
}

impl<T: 'static, E: 'static> PredicateAlgebra for Predicate<T, E> {
    fn negate(self) -> Self {
        Predicate::new(move |v| self.test(v).map(|result| !result))
    }

    fn and(self, other: Self) -> Self {
        Predicate::new(move |v| {
            if !self.test(v)? {
                return Ok(false);
            }
            other.test(v)
        })
    }

    fn or(self, other: Self) -> Self {
        Predicate::new(move |v| {
            if self.test(v)? {
                return Ok(true);
            }
            other.test(v)
        })
    }

    fn xor(self, other: Self) -> Self {
        Predicate::new(move |v| {
            let left = self.test(v)?;
            let right = other.test(v)?;
            Ok(left != right)
        })
    }

    fn xnor(self, other: Self) -> Self {
        Predicate::new(move |v| {
            let left = self.test(v)?;
            let right = other.test(v)?;
            Ok(left == right)
        })
    }
}

impl<T, E> Clone for Predicate<T, E> {
    fn clone(&self) -> Predicate<T, E> {
        Predicate(self.0.clone())
    }
}

impl<T, E> fmt::Debug for Predicate<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Predicate(..)")
    }
}

/// A predicate over a pair of values that cannot fail.
pub struct SilentBiPredicate<T, V>(Arc<dyn Fn(&T, &V) -> bool + Send + Sync>);

impl<T: 'static, V: 'static> SilentBiPredicate<T, V> {
    /// Wrap a function as a silent two-argument predicate.
    pub fn new<F>(f: F) -> SilentBiPredicate<T, V>
    where
        F: Fn(&T, &V) -> bool + Send + Sync + 'static,
    {
        SilentBiPredicate(Arc::new(f))
    }

    /// Evaluate this predicate.
    pub fn test(&self, first: &T, second: &V) -> bool {
        (self.0)(first, second)
    }

    /// Convert this predicate into a fallible one that never fails.
    pub fn to_predicate<E: 'static>(self) -> BiPredicate<T, V, E> {
        BiPredicate::new(move |a, b| Ok(self.test(a, b)))
    }
}

impl<T: 'static, V: 'static> PredicateAlgebra for SilentBiPredicate<T, V> {
    fn negate(self) -> Self {
        SilentBiPredicate::new(move |a, b| !self.test(a, b))
    }

    fn and(self, other: Self) -> Self {
        SilentBiPredicate::new(move |a, b| self.test(a, b) && other.test(a, b))
    }

    fn or(self, other: Self) -> Self {
        SilentBiPredicate::new(move |a, b| self.test(a, b) || other.test(a, b))
    }

    fn xor(self, other: Self) -> Self {
        SilentBiPredicate::new(move |a, b| {
            let left = self.test(a, b);
            let right = other.test(a, b);
            left != right
        })
    }

    fn xnor(self, other: Self) -> Self {
        SilentBiPredicate::new(move |a, b| {
            let left = self.test(a, b);
            let right = other.test(a, b);
            left == right
        })
    }
}

impl<T, V> Clone for SilentBiPredicate<T, V> {
    fn clone(&self) -> SilentBiPredicate<T, V> {
        SilentBiPredicate(self.0.clone())
    }
}

impl<T, V> fmt::Debug for SilentBiPredicate<T, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SilentBiPredicate(..)")
    }
}

/// A predicate over a pair of values that may fail with an error of type
/// `E`.
pub struct BiPredicate<T, V, E = Error>(
    Arc<dyn Fn(&T, &V) -> Result<bool, E> + Send + Sync>,
);

impl<T: 'static, V: 'static, E: 'static> BiPredicate<T, V, E> {
    /// Wrap a fallible function as a two-argument predicate.
    pub fn new<F>(f: F) -> BiPredicate<T, V, E>
    where
        F: Fn(&T, &V) -> Result<bool, E> + Send + Sync + 'static,
    {
        BiPredicate(Arc::new(f))
    }

    /// Evaluate this predicate.
    pub fn test(&self, first: &T, second: &V) -> Result<bool, E> {
        (self.0)(first, second)
    }

    /// Convert this predicate into a silent one.
    ///
    /// See `Predicate::to_silent_predicate`.
    pub fn to_silent_predicate(
        self,
        handler: Option<ErrorHandler<E>>,
    ) -> SilentBiPredicate<T, V> {
        SilentBiPredicate::new(move |a, b| match self.test(a, b) {
            Ok(result) => result,
            Err(err) => {
                absorb(handler.as_ref(), err, "silent bi-predicate");
                false
            }
        })
    }
}

impl<T: 'static, V: 'static, E: 'static> PredicateAlgebra
    for BiPredicate<T, V, E>
{
    fn negate(self) -> Self {
        BiPredicate::new(move |a, b| self.test(a, b).map(|result| !result))
    }

    fn and(self, other: Self) -> Self {
        BiPredicate::new(move |a, b| {
            if !self.test(a, b)? {
                return Ok(false);
            }
            other.test(a, b)
        })
    }

    fn or(self, other: Self) -> Self {
        BiPredicate::new(move |a, b| {
            if self.test(a, b)? {
                return Ok(true);
            }
            other.test(a, b)
        })
    }

    fn xor(self, other: Self) -> Self {
        BiPredicate::new(move |a, b| {
            let left = self.test(a, b)?;
            let right = other.test(a, b)?;
            Ok(left != right)
        })
    }

    fn xnor(self, other: Self) -> Self {
        BiPredicate::new(move |a, b| {
            let left = self.test(a, b)?;
            let right = other.test(a, b)?;
            Ok(left == right)
        })
    }
}

impl<T, V, E> Clone for BiPredicate<T, V, E> {
    fn clone(&self) -> BiPredicate<T, V, E> {
        BiPredicate(self.0.clone())
    }
}

impl<T, V, E> fmt::Debug for BiPredicate<T, V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BiPredicate(..)")
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    use super::*;

    /// A fallible predicate that counts its calls and answers `answer`.
    fn counted(
        answer: Result<bool, &'static str>,
    ) -> (Predicate<i32, &'static str>, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let p = Predicate::new(move |_: &i32| {
            counter.fetch_add(1, Ordering::SeqCst);
            answer
        });
        (p, calls)
    }

    fn calls(counter: &Arc<AtomicUsize>) -> usize {
        counter.load(Ordering::SeqCst)
    }

    #[test]
    fn silent_truth_tables() {
        let t = SilentPredicate::new(|_: &i32| true);
        let f = SilentPredicate::new(|_: &i32| false);
        let cases = vec![
            (t.clone(), t.clone(), true, true, false, true),
            (t.clone(), f.clone(), false, true, true, false),
            (f.clone(), t.clone(), false, true, true, false),
            (f.clone(), f.clone(), false, false, false, true),
        ];
        for (p, q, and, or, xor, xnor) in cases {
            assert_eq!(p.clone().and(q.clone()).test(&0), and);
            assert_eq!(p.clone().or(q.clone()).test(&0), or);
            assert_eq!(p.clone().xor(q.clone()).test(&0), xor);
            assert_eq!(p.clone().xnor(q.clone()).test(&0), xnor);
            assert_eq!(p.clone().negate().test(&0), !p.test(&0));
        }
    }

    #[test]
    fn silent_and_or_short_circuit() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counted = |answer: bool| {
            let counter = calls.clone();
            SilentPredicate::new(move |_: &i32| {
                counter.fetch_add(1, Ordering::SeqCst);
                answer
            })
        };

        assert!(!counted(false).and(counted(true)).test(&0));
        assert_eq!(calls.swap(0, Ordering::SeqCst), 1);
        assert!(counted(true).and(counted(true)).test(&0));
        assert_eq!(calls.swap(0, Ordering::SeqCst), 2);

        assert!(counted(true).or(counted(false)).test(&0));
        assert_eq!(calls.swap(0, Ordering::SeqCst), 1);
        assert!(!counted(false).or(counted(false)).test(&0));
        assert_eq!(calls.swap(0, Ordering::SeqCst), 2);

        assert!(counted(true).xor(counted(false)).test(&0));
        assert_eq!(calls.swap(0, Ordering::SeqCst), 2);
    }

    #[test]
    fn silent_bi_and_or_short_circuit() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counted = |answer: bool| {
            let counter = calls.clone();
            SilentBiPredicate::new(move |_: &i32, _: &u8| {
                counter.fetch_add(1, Ordering::SeqCst);
                answer
            })
        };

        assert!(!counted(false).and(counted(true)).test(&0, &0));
        assert_eq!(calls.swap(0, Ordering::SeqCst), 1);
        assert!(counted(true).or(counted(false)).test(&0, &0));
        assert_eq!(calls.swap(0, Ordering::SeqCst), 1);
        assert!(counted(false).xnor(counted(false)).test(&0, &0));
        assert_eq!(calls.swap(0, Ordering::SeqCst), 2);
    }

    #[test]
    fn silent_composition_keeps_operands() {
        let even = SilentPredicate::new(|n: &i32| n % 2 == 0);
        let small = SilentPredicate::new(|n: &i32| *n < 10);
        let even_and_small = even.clone().and(small.clone());
        assert!(even_and_small.test(&4));
        assert!(!even_and_small.test(&12));
        assert!(even.test(&12));
        assert!(!small.test(&12));
    }

    #[test]
    fn and_short_circuits() {
        let (p, p_calls) = counted(Ok(false));
        let (q, q_calls) = counted(Ok(true));
        assert_eq!(p.and(q).test(&1), Ok(false));
        assert_eq!(calls(&p_calls), 1);
        assert_eq!(calls(&q_calls), 0);

        let (p, _) = counted(Ok(true));
        let (q, q_calls) = counted(Ok(true));
        assert_eq!(p.and(q).test(&1), Ok(true));
        assert_eq!(calls(&q_calls), 1);
    }

    #[test]
    fn and_stops_at_first_error() {
        let (p, _) = counted(Err("left"));
        let (q, q_calls) = counted(Ok(true));
        assert_eq!(p.and(q).test(&1), Err("left"));
        assert_eq!(calls(&q_calls), 0);

        let (p, _) = counted(Ok(true));
        let (q, _) = counted(Err("right"));
        assert_eq!(p.and(q).test(&1), Err("right"));
    }

    #[test]
    fn or_short_circuits() {
        let (p, _) = counted(Ok(true));
        let (q, q_calls) = counted(Ok(false));
        assert_eq!(p.or(q).test(&1), Ok(true));
        assert_eq!(calls(&q_calls), 0);

        let (p, _) = counted(Ok(false));
        let (q, q_calls) = counted(Ok(false));
        assert_eq!(p.or(q).test(&1), Ok(false));
        assert_eq!(calls(&q_calls), 1);

        let (p, _) = counted(Err("left"));
        let (q, q_calls) = counted(Ok(true));
        assert_eq!(p.or(q).test(&1), Err("left"));
        assert_eq!(calls(&q_calls), 0);

        let (p, _) = counted(Ok(false));
        let (q, _) = counted(Err("right"));
        assert_eq!(p.or(q).test(&1), Err("right"));
    }

    #[test]
    fn xor_xnor_evaluate_both() {
        let (p, p_calls) = counted(Ok(true));
        let (q, q_calls) = counted(Ok(false));
        assert_eq!(p.clone().xor(q.clone()).test(&1), Ok(true));
        assert_eq!(p.xnor(q).test(&1), Ok(false));
        assert_eq!(calls(&p_calls), 2);
        assert_eq!(calls(&q_calls), 2);
    }

    #[test]
    fn xor_xnor_errors() {
        let (p, _) = counted(Err("left"));
        let (q, q_calls) = counted(Ok(true));
        assert_eq!(p.clone().xor(q.clone()).test(&1), Err("left"));
        assert_eq!(p.xnor(q).test(&1), Err("left"));
        assert_eq!(calls(&q_calls), 0);

        let (p, _) = counted(Ok(true));
        let (q, _) = counted(Err("right"));
        assert_eq!(p.clone().xor(q.clone()).test(&1), Err("right"));
        assert_eq!(p.xnor(q).test(&1), Err("right"));
    }

    #[test]
    fn negate_passes_errors_through() {
        let (p, _) = counted(Ok(true));
        assert_eq!(p.negate().test(&1), Ok(false));
        let (p, _) = counted(Err("boom"));
        assert_eq!(p.negate().test(&1), Err("boom"));
    }

    #[test]
    fn to_silent_predicate_reports_errors() {
        let seen = Arc::new(Mutex::new(vec![]));
        let sink = seen.clone();
        let handler = ErrorHandler::new(move |e: &'static str| {
            sink.lock().unwrap().push(e)
        });

        let (p, _) = counted(Err("boom"));
        let silent = p.to_silent_predicate(Some(handler.clone()));
        assert!(!silent.test(&1));
        assert_eq!(*seen.lock().unwrap(), vec!["boom"]);

        let (p, _) = counted(Ok(true));
        let silent = p.to_silent_predicate(Some(handler));
        assert!(silent.test(&1));
        assert_eq!(seen.lock().unwrap().len(), 1);
    }

    #[test]
    fn to_silent_predicate_without_handler() {
        let (p, _) = counted(Err("boom"));
        assert!(!p.negate().to_silent_predicate(None).test(&1));
    }

    #[test]
    fn to_predicate_never_fails() {
        let odd = SilentPredicate::new(|n: &i32| n % 2 == 1);
        let p: Predicate<i32> = odd.to_predicate();
        assert_eq!(p.test(&3).unwrap(), true);
        assert_eq!(p.test(&4).unwrap(), false);
    }

    #[test]
    fn bi_predicates() {
        let longer = SilentBiPredicate::new(|s: &String, n: &usize| s.len() > *n);
        let starts_upper = SilentBiPredicate::new(|s: &String, _: &usize| {
            s.chars().next().map_or(false, |c| c.is_uppercase())
        });
        let both = longer.clone().and(starts_upper.clone());
        assert!(both.test(&"Hello".to_string(), &3));
        assert!(!both.test(&"hello".to_string(), &3));
        let hello = "hello".to_string();
        assert!(longer.clone().xor(starts_upper.clone()).test(&hello, &3));
        assert!(longer.xnor(starts_upper).negate().test(&hello, &3));
    }

    #[test]
    fn bi_predicate_errors() {
        let seen = Arc::new(AtomicUsize::new(0));
        let counter = seen.clone();
        let divides = BiPredicate::new(|a: &i32, b: &i32| {
            if *b == 0 {
                return Err(Error::msg("division by zero"));
            }
            Ok(a % b == 0)
        });
        let never = BiPredicate::new(move |_: &i32, _: &i32| {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(false)
        });

        let either = divides.clone().or(never.clone());
        assert_eq!(either.test(&6, &3).unwrap(), true);
        assert!(either.test(&6, &0).is_err());
        assert_eq!(seen.load(Ordering::SeqCst), 0);
        assert_eq!(either.test(&7, &3).unwrap(), false);
        assert_eq!(seen.load(Ordering::SeqCst), 1);

        let handled = Arc::new(AtomicUsize::new(0));
        let bump = handled.clone();
        let silent = divides.and(never).to_silent_predicate(Some(
            ErrorHandler::new(move |_| {
                bump.fetch_add(1, Ordering::SeqCst);
            }),
        ));
        assert!(!silent.test(&1, &0));
        assert_eq!(handled.load(Ordering::SeqCst), 1);

        let back = SilentBiPredicate::new(|a: &i32, b: &i32| a < b)
            .to_predicate::<Error>();
        assert_eq!(back.test(&1, &2).unwrap(), true);
    }
}
