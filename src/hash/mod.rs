//! Hash algorithms exposed by the crate.
//!
//! Everything here is built on one permutation, Keccak-f[1600]:
//!
//! - `keccak`
//!   The permutation itself and its reference tables.
//!
//! - `shake`
//!   The sponge construction and the SHAKE256 / cSHAKE256 extendable-output
//!   functions, plus SHA3-256.

pub mod keccak;
pub mod shake;

/// Re-export of the hash entry points.
pub use shake::{cshake256, sha3_256, shake256};
