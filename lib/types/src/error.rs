//! The possible errors when reading type tokens
use thiserror::Error;

/// The error returned when a string does not name a recognized
/// value type.
///
/// Matching is exact: tokens are case-sensitive and are not trimmed.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
#[error("unknown value type `{token}`")]
pub struct ParseTypeError {
    token: String,
}

impl ParseTypeError {
    /// Creates a new error for the given token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// The token that failed to parse.
    pub fn token(&self) -> &str {
        &self.token
    }
}
