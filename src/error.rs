//! Error types for the randchars library.

use thiserror::Error;

/// Errors produced by pool building, generation, shuffling and selection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The generation request can never be satisfied. Raised before any
    /// randomness is consumed.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    /// A structural argument is malformed (repeat count, empty collection).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Error::InvalidConfiguration(msg.into())
    }

    pub(crate) fn argument(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }
}
