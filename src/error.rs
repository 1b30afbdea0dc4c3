use std::error;
use std::fmt;

/// A `Result` type alias for this crate's `Error` type.
pub type Result<T> = std::result::Result<T, Error>;

/// The error reported by caller-supplied predicates, consumers and suppliers.
///
/// This crate never produces errors on its own. Every fallible combinator is
/// generic over its error type, and `Error` is the default choice for that
/// type parameter. It can either carry a plain message or wrap any other
/// error, so that `?` works inside fallible closures.
///
/// # Example
///
/// ```rust
/// use optio::Error;
/// use optio::func::Predicate;
///
/// let positive = Predicate::new(|n: &i32| {
///     if *n == 0 {
///         return Err(Error::msg("zero has no sign"));
///     }
///     Ok(*n > 0)
/// });
///
/// assert_eq!(positive.test(&5).unwrap(), true);
/// assert!(positive.test(&0).is_err());
/// ```
#[derive(Debug)]
pub enum Error {
    /// A failure described only by a message.
    Message(String),
    /// A failure caused by another error.
    Other(Box<dyn error::Error + Send + Sync + 'static>),
}

impl Error {
    /// Create an error from a message.
    pub fn msg<M: Into<String>>(message: M) -> Error {
        Error::Message(message.into())
    }

    /// Wrap an arbitrary error.
    pub fn other<E>(err: E) -> Error
    where
        E: error::Error + Send + Sync + 'static,
    {
        Error::Other(Box::new(err))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Error::Message(ref msg) => write!(f, "{}", msg),
            Error::Other(ref err) => write!(f, "{}", err),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            Error::Message(_) => None,
            Error::Other(ref err) => Some(&**err),
        }
    }
}

impl From<std::io::Error> for Error {
    #[inline]
    fn from(err: std::io::Error) -> Error {
        Error::other(err)
    }
}

impl From<std::num::ParseIntError> for Error {
    #[inline]
    fn from(err: std::num::ParseIntError) -> Error {
        Error::other(err)
    }
}

impl From<std::num::ParseFloatError> for Error {
    #[inline]
    fn from(err: std::num::ParseFloatError) -> Error {
        Error::other(err)
    }
}

impl From<String> for Error {
    #[inline]
    fn from(msg: String) -> Error {
        Error::Message(msg)
    }
}

impl<'a> From<&'a str> for Error {
    #[inline]
    fn from(msg: &'a str) -> Error {
        Error::msg(msg)
    }
}
