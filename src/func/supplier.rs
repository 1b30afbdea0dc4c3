use std::fmt;
use std::sync::Arc;

use crate::error::Error;
use crate::func::{absorb, ErrorHandler};

/// A producer of values that cannot fail.
pub struct SilentSupplier<T>(Arc<dyn Fn() -> T + Send + Sync>);

impl<T: 'static> SilentSupplier<T> {
    /// Wrap a function as a silent supplier.
    pub fn new<F>(f: F) -> SilentSupplier<T>
    where
        F: Fn() -> T + Send + Sync + 'static,
    {
        SilentSupplier(Arc::new(f))
    }

    /// Produce a value.
    pub fn get(&self) -> T {
        (self.0)()
    }

    /// Convert this supplier into a fallible one that never fails.
    pub fn to_supplier<E: 'static>(self) -> Supplier<T, E> {
        Supplier::new(move || Ok(self.get()))
    }
}

impl<T> Clone for SilentSupplier<T> {
    fn clone(&self) -> SilentSupplier<T> {
        SilentSupplier(self.0.clone())
    }
}

impl<T> fmt::Debug for SilentSupplier<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SilentSupplier(..)")
    }
}

/// A producer of values that may fail with an error of type `E`.
pub struct Supplier<T, E = Error>(Arc<dyn Fn() -> Result<T, E> + Send + Sync>);

impl<T: 'static, E: 'static> Supplier<T, E> {
    /// Wrap a fallible function as a supplier.
    pub fn new<F>(f: F) -> Supplier<T, E>
    where
        F: Fn() -> Result<T, E> + Send + Sync + 'static,
    {
        Supplier(Arc::new(f))
    }

    /// Produce a value.
    pub fn get(&self) -> Result<T, E> {
        (self.0)()
    }

    /// Convert this supplier into a silent one.
    ///
    /// On failure the error goes to `handler` (if any) and the silent
    /// supplier produces `T::default()`.
    pub fn to_silent_supplier(
        self,
        handler: Option<ErrorHandler<E>>,
    ) -> SilentSupplier<T>
    where
        T: Default,
    {
        SilentSupplier::new(move || match self.get() {
            Ok(value) => value,
            Err(err) => {
                absorb(handler.as_ref(), err, "silent supplier");
                T::default()
            }
        })
    }
}

impl<T, E> Clone for Supplier<T, E> {
    fn clone(&self) -> Supplier<T, E> {
        Supplier(self.0.clone())
    }
}

impl<T, E> fmt::Debug for Supplier<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Supplier(..)")
    }
}

/// A producer of pairs that cannot fail.
pub struct SilentBiSupplier<T, V>(Arc<dyn Fn() -> (T, V) + Send + Sync>);

impl<T: 'static, V: 'static> SilentBiSupplier<T, V> {
    /// Wrap a function as a silent pair supplier.
    pub fn new<F>(f: F) -> SilentBiSupplier<T, V>
    where
        F: Fn() -> (T, V) + Send + Sync + 'static,
    {
        SilentBiSupplier(Arc::new(f))
    }

    /// Produce a pair.
    pub fn get(&self) -> (T, V) {
        (self.0)()
    }

    /// Convert this supplier into a fallible one that never fails.
    pub fn to_supplier<E: 'static>(self) -> BiSupplier<T, V, E> {
        BiSupplier::new(move || Ok(self.get()))
    }
}

impl<T, V> Clone for SilentBiSupplier<T, V> {
    fn clone(&self) -> SilentBiSupplier<T, V> {
        SilentBiSupplier(self.0.clone())
    }
}

impl<T, V> fmt::Debug for SilentBiSupplier<T, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SilentBiSupplier(..)")
    }
}

/// A producer of pairs that may fail with an error of type `E`.
pub struct BiSupplier<T, V, E = Error>(
    Arc<dyn Fn() -> Result<(T, V), E> + Send + Sync>,
);

impl<T: 'static, V: 'static, E: 'static> BiSupplier<T, V, E> {
    /// Wrap a fallible function as a pair supplier.
    pub fn new<F>(f: F) -> BiSupplier<T, V, E>
    where
        F: Fn() -> Result<(T, V), E> + Send + Sync + 'static,
    {
        BiSupplier(Arc::new(f))
    }

    /// Produce a pair.
    pub fn get(&self) -> Result<(T, V), E> {
        (self.0)()
    }

    /// Convert this supplier into a silent one.
    ///
    /// On failure the error goes to `handler` (if any) and the default pair
    /// is produced.
    pub fn to_silent_supplier(
        self,
        handler: Option<ErrorHandler<E>>,
    ) -> SilentBiSupplier<T, V>
    where
        T: Default,
        V: Default,
    {
        SilentBiSupplier::new(move || match self.get() {
            Ok(pair) => pair,
            Err(err) => {
                absorb(handler.as_ref(), err, "silent bi-supplier");
                (T::default(), V::default())
            }
        })
    }
}

impl<T, V, E> Clone for BiSupplier<T, V, E> {
    fn clone(&self) -> BiSupplier<T, V, E> {
        BiSupplier(self.0.clone())
    }
}

impl<T, V, E> fmt::Debug for BiSupplier<T, V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BiSupplier(..)")
    }
}
