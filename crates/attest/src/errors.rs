#[derive(Debug, thiserror::Error)]
pub enum AssertError {
    #[error("{message}")]
    AssertionFailed { message: String },

    #[error("{message}")]
    InvalidArgumentType { message: String },
}

impl AssertError {
    /// The kind that raised this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            AssertError::AssertionFailed { .. } => ErrorKind::Generic,
            AssertError::InvalidArgumentType { .. } => ErrorKind::InvalidArgumentType,
        }
    }

    /// The failure message given at the assertion site.
    pub fn message(&self) -> &str {
        match self {
            AssertError::AssertionFailed { message } => message,
            AssertError::InvalidArgumentType { message } => message,
        }
    }
}

/// Recognized error kinds an assertion may raise.
///
/// A closed enumeration instead of runtime inspection of arbitrary error
/// values: every kind can construct its error from a message, so a `Some`
/// kind passed to [`ensure`](crate::checks::ensure) is valid by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Generic assertion failure.
    Generic,
    /// An argument failed a type check.
    InvalidArgumentType,
}

impl ErrorKind {
    /// Construct an [`AssertError`] of this kind from a message.
    pub fn raise(self, message: impl Into<String>) -> AssertError {
        let message = message.into();
        match self {
            ErrorKind::Generic => AssertError::AssertionFailed { message },
            ErrorKind::InvalidArgumentType => AssertError::InvalidArgumentType { message },
        }
    }
}
