/*!
Crate `optio` is a small toolkit of functional building blocks: composable
predicates and consumers with explicit or silent error handling, lazy
resettable streams with map/filter/reduce, and set/array helpers over plain
slices.

# Overview

* [`func`](func/index.html) holds the combinator algebra. Predicates and
  consumers come in four flavors each (one or two arguments, fallible or
  silent). Predicates combine with `negate`, `and`, `or`, `xor` and `xnor`;
  consumers chain with `and_then`. A fallible value becomes silent only
  through an explicit conversion that routes errors to an optional
  [`ErrorHandler`](func/struct.ErrorHandler.html).
* [`stream`](stream/index.html) holds the [`Stream`](stream/trait.Stream.html)
  trait, a pull-based cursor with `next`, `value`, `reset` and `collect`, and
  its three implementations: `Slice`, `Map` and `Filter`.
* [`array`](array/index.html) and [`set`](set/index.html) are helpers over
  fixed collections.

# Example: fail-fast pipelines

```rust
use std::sync::{Arc, Mutex};

use optio::Error;
use optio::func::{Consumer, ConsumerAlgebra, ErrorHandler};
use optio::stream;

let parse: Consumer<String> = Consumer::new(|s: &String| {
    s.parse::<i32>()?;
    Ok(())
});
let short = Consumer::new(|s: &String| {
    if s.len() > 3 {
        return Err(Error::msg(format!("{} is too long", s)));
    }
    Ok(())
});

let errors = Arc::new(Mutex::new(vec![]));
let sink = errors.clone();
let check = Consumer::empty()
    .and_then(parse)
    .and_then(short)
    .to_silent_consumer(Some(ErrorHandler::new(move |e: Error| {
        sink.lock().unwrap().push(e.to_string())
    })));

let inputs: Vec<String> =
    vec!["12".into(), "x".into(), "12345".into()];
for input in &inputs {
    check.accept(input);
}
assert_eq!(errors.lock().unwrap().len(), 2);

let lengths = stream::map(&inputs, |s: String| s.len());
assert_eq!(lengths, vec![2, 1, 5]);
```

# Error handling

Fallible combinators are generic over their error type. The crate's own
[`Error`](enum.Error.html) is the default, which can carry a message or wrap
any other error so that `?` works inside closures. This crate never creates
errors itself: every error comes from caller code.

# Logging

Events are emitted through the [`log`](https://docs.rs/log) facade. Silent
conversions log at `debug` level when they drop an error because no handler
was given, and slice streams log resets at `trace` level.
*/

#![deny(missing_docs)]

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

pub use crate::error::{Error, Result};
pub use crate::stream::{IntoStream, Stream};

pub mod array;
mod error;
pub mod func;
pub mod set;
pub mod stream;
