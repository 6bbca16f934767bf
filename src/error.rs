//! Error types shared by every module of the crate.
//!
//! All failures are synchronous and deterministic: retrying an operation
//! with the same inputs always yields the same error. None of the variants
//! carry key material, plaintext, or scalars.

use thiserror::Error;

/// Errors that can occur in encoding, curve, and protocol operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The coordinates do not satisfy the curve equation, or a coordinate
    /// is not a canonical field element.
    #[error("point is not on the curve")]
    InvalidPoint,

    /// No `y` coordinate exists for the requested `x`.
    #[error("no square root exists for the given x coordinate")]
    NoSquareRoot,

    /// A byte buffer has the wrong length for the structure it encodes.
    #[error("malformed {what}: expected {expected} bytes, got {actual}")]
    MalformedInput {
        /// Structure being decoded.
        what: &'static str,
        /// Expected (or minimum) length.
        expected: usize,
        /// Actual length.
        actual: usize,
    },

    /// The authentication tag of a cryptogram did not match.
    #[error("invalid passphrase or corrupted data")]
    AuthenticationFailure,

    /// An argument lies outside the domain of the function.
    #[error("domain error: {0}")]
    DomainError(&'static str),
}

/// Result type for fallible operations of this crate.
pub type Result<T> = std::result::Result<T, Error>;
