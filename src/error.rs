use thiserror::Error;

/// Errors returned by the sponge engine.
///
/// All of them describe misuse by the caller. None are transient, so nothing
/// in this crate retries on them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The requested security level is not one of 128, 224, 256, 288, 384 or 512.
    #[error("bit length must be one of 128, 224, 256, 288, 384, or 512, got {0}")]
    InvalidParameter(usize),
    /// The operation is not allowed in the current sponge mode.
    #[error("invalid sponge state: {0}")]
    InvalidState(&'static str),
    /// An output length or buffer does not fit the request.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
