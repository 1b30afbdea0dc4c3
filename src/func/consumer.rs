use std::fmt;
use std::sync::Arc;

use crate::error::Error;
use crate::func::{absorb, ErrorHandler};

/// Sequential composition shared by every consumer flavor.
pub trait ConsumerAlgebra: Sized {
    /// Returns a consumer that runs `self` and then `after` with the same
    /// arguments.
    ///
    /// For fallible consumers, a failure of `self` is returned immediately
    /// and `after` does not run.
    fn and_then(self, after: Self) -> Self;

    /// Like `and_then`, but an absent `after` returns `self` unchanged.
    fn and_then_opt(self, after: Option<Self>) -> Self {
        match after {
            None => self,
            Some(after) => self.and_then(after),
        }
    }
}

/// A consumer of one value that cannot fail.
pub struct SilentConsumer<T>(Arc<dyn Fn(&T) + Send + Sync>);

impl<T: 'static> SilentConsumer<T> {
    /// Wrap a function as a silent consumer.
    pub fn new<F>(f: F) -> SilentConsumer<T>
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        SilentConsumer(Arc::new(f))
    }

    /// A consumer that does nothing.
    pub fn empty() -> SilentConsumer<T> {
        SilentConsumer::new(|_| {})
    }

    /// Run this consumer.
    pub fn accept(&self, value: &T) {
        (self.0)(value)
    }

    /// Convert this consumer into a fallible one that never fails.
    pub fn to_consumer<E: 'static>(self) -> Consumer<T, E> {
        Consumer::new(move |v| {
            self.accept(v);
            Ok(())
        })
    }
}

impl<T: 'static> ConsumerAlgebra for SilentConsumer<T> {
    fn and_then(self, after: Self) -> Self {
        SilentConsumer::new(move |v| {
            self.accept(v);
            after.accept(v);
        })
    }
}

impl<T> Clone for SilentConsumer<T> {
    fn clone(&self) -> SilentConsumer<T> {
        SilentConsumer(self.0.clone())
    }
}

impl<T> fmt::Debug for SilentConsumer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SilentConsumer(..)")
    }
}

/// A consumer of one value that may fail with an error of type `E`.
///
/// Chains built with `and_then` fail fast: the first failing link returns its
/// error and the links after it are skipped for that call.
///
/// # Example
///
/// ```rust
/// use std::sync::{Arc, Mutex};
/// use optio::Error;
/// use optio::func::{Consumer, ConsumerAlgebra};
///
/// let log = Arc::new(Mutex::new(vec![]));
/// let sink = log.clone();
/// let record = Consumer::new(move |n: &i32| {
///     sink.lock().unwrap().push(*n);
///     Ok(())
/// });
/// let reject_negative = Consumer::new(|n: &i32| {
///     if *n < 0 {
///         return Err(Error::msg("negative"));
///     }
///     Ok(())
/// });
///
/// let chain = Consumer::empty()
///     .and_then(reject_negative)
///     .and_then(record);
/// assert!(chain.accept(&3).is_ok());
/// assert!(chain.accept(&-3).is_err());
/// assert_eq!(*log.lock().unwrap(), vec![3]);
/// ```
pub struct Consumer<T, E = Error>(Arc<dyn Fn(&T) -> Result<(), E> + Send + Sync>);

impl<T: 'static, E: 'static> Consumer<T, E> {
    /// Wrap a fallible function as a consumer.
    pub fn new<F>(f: F) -> Consumer<T, E>
    where
        F: Fn(&T) -> Result<(), E> + Send + Sync + 'static,
    {
        Consumer(Arc::new(f))
    }

    /// A consumer that does nothing and always succeeds.
    ///
    /// This is the identity of `and_then`, which makes it a convenient seed
    /// when building a chain.
    pub fn empty() -> Consumer<T, E> {
        Consumer::new(|_| Ok(()))
    }

    /// Run this consumer.
    pub fn accept(&self, value: &T) -> Result<(), E> {
        (self.0)(value)
    }

    /// Convert this consumer into a silent one.
    ///
    /// A failure is passed to `handler` when one is given and is otherwise
    /// dropped. Conversion applies to the consumer as a whole: if `self` is a
    /// chain, the chain stops at its first failing link as usual and that
    /// link's error is what the handler sees.
    pub fn to_silent_consumer(
        self,
        handler: Option<ErrorHandler<E>>,
    ) -> SilentConsumer<T> {
        SilentConsumer::new(move |v| {
            if let Err(err) = self.accept(v) {
                absorb(handler.as_ref(), err, "silent consumer");
            }
        })
    }
}

impl<T: 'static, E: 'static> ConsumerAlgebra for Consumer<T, E> {
    fn and_then(self, after: Self) -> Self {
        Consumer::new(move |v| {
            self.accept(v)?;
            after.accept(v)
        })
    }
}

impl<T, E> Clone for Consumer<T, E> {
    fn clone(&self) -> Consumer<T, E> {
        Consumer(self.0.clone())
    }
}

impl<T, E> fmt::Debug for Consumer<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Consumer(..)")
    }
}

/// A consumer of a pair of values that cannot fail.
pub struct SilentBiConsumer<T, V>(Arc<dyn Fn(&T, &V) + Send + Sync>);

impl<T: 'static, V: 'static> SilentBiConsumer<T, V> {
    /// Wrap a function as a silent two-argument consumer.
    pub fn new<F>(f: F) -> SilentBiConsumer<T, V>
    where
        F: Fn(&T, &V) + Send + Sync + 'static,
    {
        SilentBiConsumer(Arc::new(f))
    }

    /// A consumer that does nothing.
    pub fn empty() -> SilentBiConsumer<T, V> {
        SilentBiConsumer::new(|_, _| {})
    }

    /// Run this consumer.
    pub fn accept(&self, first: &T, second: &V) {
        (self.0)(first, second)
    }

    /// Convert this consumer into a fallible one that never fails.
    pub fn to_consumer<E: 'static>(self) -> BiConsumer<T, V, E> {
        BiConsumer::new(move |a, b| {
            self.accept(a, b);
            Ok(())
        })
    }
}

impl<T: 'static, V: 'static> ConsumerAlgebra for SilentBiConsumer<T, V> {
    fn and_then(self, after: Self) -> Self {
        SilentBiConsumer::new(move |a, b| {
            self.accept(a, b);
            after.accept(a, b);
        })
    }
}

impl<T, V> Clone for SilentBiConsumer<T, V> {
    fn clone(&self) -> SilentBiConsumer<T, V> {
        SilentBiConsumer(self.0.clone())
    }
}

impl<T, V> fmt::Debug for SilentBiConsumer<T, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SilentBiConsumer(..)")
    }
}

/// A consumer of a pair of values that may fail with an error of type `E`.
pub struct BiConsumer<T, V, E = Error>(
    Arc<dyn Fn(&T, &V) -> Result<(), E> + Send + Sync>,
);

impl<T: 'static, V: 'static, E: 'static> BiConsumer<T, V, E> {
    /// Wrap a fallible function as a two-argument consumer.
    pub fn new<F>(f: F) -> BiConsumer<T, V, E>
    where
        F: Fn(&T, &V) -> Result<(), E> + Send + Sync + 'static,
    {
        BiConsumer(Arc::new(f))
    }

    /// A consumer that does nothing and always succeeds.
    pub fn empty() -> BiConsumer<T, V, E> {
        BiConsumer::new(|_, _| Ok(()))
    }

    /// Run this consumer.
    pub fn accept(&self, first: &T, second: &V) -> Result<(), E> {
        (self.0)(first, second)
    }

    /// Convert this consumer into a silent one.
    ///
    /// See `Consumer::to_silent_consumer`.
    pub fn to_silent_consumer(
        self,
        handler: Option<ErrorHandler<E>>,
    ) -> SilentBiConsumer<T, V> {
        SilentBiConsumer::new(move |a, b| {
            if let Err(err) = self.accept(a, b) {
                absorb(handler.as_ref(), err, "silent bi-consumer");
            }
        })
    }
}

impl<T: 'static, V: 'static, E: 'static> ConsumerAlgebra
    for BiConsumer<T, V, E>
{
    fn and_then(self, after: Self) -> Self {
        BiConsumer::new(move |a, b| {
            self.accept(a, b)?;
            after.accept(a, b)
        })
    }
}

impl<T, V, E> Clone for BiConsumer<T, V, E> {
    fn clone(&self) -> BiConsumer<T, V, E> {
        BiConsumer(self.0.clone())
    }
}

impl<T, V, E> fmt::Debug for BiConsumer<T, V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BiConsumer(..)")
    }
}
