//! Keccak message authentication code with extendable output.
//!
//! The public API is re-exported from the internal `core` module.

pub(crate) mod core;

pub use self::core::{digest, kmacxof256, tag};
