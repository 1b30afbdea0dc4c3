/*!
Composable predicates, consumers and suppliers.

Every family comes in fallible and silent flavors. Fallible values return a
`Result` and propagate the first error they meet. Silent values cannot fail;
they are obtained from fallible ones through an explicit conversion that
takes an optional [`ErrorHandler`](struct.ErrorHandler.html). That conversion
is the only place where an error can be recovered from.

All values in this module are cheap to clone (they share the wrapped
function) and are `Send + Sync`. Combinators consume their operands and
return a new value; clone an operand first to keep using it.

# Example

```rust
use optio::func::{Predicate, PredicateAlgebra, SilentPredicate};

let even = SilentPredicate::new(|n: &i32| n % 2 == 0);
let big = SilentPredicate::new(|n: &i32| *n > 10);

let even_and_big = even.clone().and(big.clone());
assert!(even_and_big.test(&12));
assert!(!even_and_big.test(&8));

let odd_or_big = even.negate().or(big);
assert!(odd_or_big.test(&3));

// Switch to the fallible flavor and back.
let fallible: Predicate<i32> = odd_or_big.to_predicate();
assert_eq!(fallible.test(&4).unwrap(), false);
```
*/

use std::fmt;
use std::sync::Arc;

pub use self::consumer::{
    BiConsumer, Consumer, ConsumerAlgebra, SilentBiConsumer, SilentConsumer,
};
pub use self::predicate::{
    BiPredicate, Predicate, PredicateAlgebra, SilentBiPredicate,
    SilentPredicate,
};
pub use self::supplier::{
    BiSupplier, SilentBiSupplier, SilentSupplier, Supplier,
};

mod consumer;
mod predicate;
mod supplier;

/// A sink for errors absorbed by a silent conversion.
///
/// Handlers are only ever passed to `to_silent_*` conversions. Passing
/// `None` instead of a handler is legal and means the error is dropped.
pub struct ErrorHandler<E>(Arc<dyn Fn(E) + Send + Sync>);

impl<E> ErrorHandler<E> {
    /// Create a handler from a function that receives each absorbed error.
    pub fn new<F>(f: F) -> ErrorHandler<E>
    where
        F: Fn(E) + Send + Sync + 'static,
    {
        ErrorHandler(Arc::new(f))
    }

    /// Pass an error to this handler.
    pub fn handle(&self, err: E) {
        (self.0)(err)
    }
}

impl<E> Clone for ErrorHandler<E> {
    fn clone(&self) -> ErrorHandler<E> {
        ErrorHandler(self.0.clone())
    }
}

impl<E> fmt::Debug for ErrorHandler<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ErrorHandler(..)")
    }
}

/// Route an error to `handler`, or drop it when there is none.
fn absorb<E>(handler: Option<&ErrorHandler<E>>, err: E, origin: &str) {
    match handler {
        Some(handler) => handler.handle(err),
        None => log::debug!("{} discarded an error: no handler", origin),
    }
}
