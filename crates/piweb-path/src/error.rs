//! Error types for the piweb-path library.

/// Errors raised by path operations and the round-trip codec.
///
/// Every variant describes a violated calling contract. Nothing here is
/// transient, so callers should fix the input rather than retry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// An argument was outside the range the operation accepts.
    #[error("Invalid argument `{argument}`: {message}")]
    InvalidArgument {
        /// Name of the offending parameter
        argument: &'static str,
        /// What the accepted range is
        message: String,
    },

    /// Direct element access past the end of a path.
    #[error("Index {index} is out of range for a path with {len} elements")]
    IndexOutOfRange {
        /// Requested element index
        index: usize,
        /// Number of elements in the path
        len: usize,
    },

    /// A round-trip or structure string could not be parsed.
    #[error("Cannot parse path {input:?}: {message}")]
    Parse {
        /// The text that failed to parse
        input: String,
        /// What went wrong
        message: String,
    },
}

/// Convenience `Result` type alias for path operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Creates a new invalid-argument error.
    pub fn invalid_argument<S: Into<String>>(argument: &'static str, message: S) -> Self {
        Error::InvalidArgument {
            argument,
            message: message.into(),
        }
    }

    /// Creates a new parse error for the given input.
    pub fn parse<I, M>(input: I, message: M) -> Self
    where
        I: Into<String>,
        M: Into<String>,
    {
        Error::Parse {
            input: input.into(),
            message: message.into(),
        }
    }
}
