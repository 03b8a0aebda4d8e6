use thiserror::Error;

/// The error raised when a [`Function`] cannot be constructed, or when a
/// value cannot be coerced to the WebAssembly type a signature asks for.
///
/// Every construction failure (a missing `parameters` or `results`
/// sequence, a non-string or unknown type token, a non-callable target)
/// is reported with this single kind. Only the message differs and it is
/// meant for humans, not for matching.
///
/// [`Function`]: crate::Function
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("TypeError: {message}")]
pub struct TypeError {
    message: String,
}

impl TypeError {
    /// Creates a new `TypeError` with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The human readable message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// An error raised while calling a [`Function`].
///
/// [`Function`]: crate::Function
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RuntimeError {
    /// An argument or a return value could not be coerced to the
    /// signature's type.
    #[error(transparent)]
    Type(#[from] TypeError),

    /// The host callable reported a failure.
    #[error("{0}")]
    User(String),
}

impl RuntimeError {
    /// Creates a new generic `RuntimeError` with the given `message`.
    ///
    /// # Example
    /// ```
    /// let trap = hostfn::RuntimeError::new("unreachable");
    /// assert_eq!("unreachable", trap.message());
    /// ```
    pub fn new<I: Into<String>>(message: I) -> Self {
        Self::User(message.into())
    }

    /// Returns a reference the `message` stored in this error.
    pub fn message(&self) -> &str {
        match self {
            Self::Type(err) => err.message(),
            Self::User(message) => message,
        }
    }
}
