//! Byte-string encodings.
//!
//! This module groups the encoding primitives used across the crate:
//!
//! - `nist`
//!   The byte-oriented encodings of NIST SP 800-185 (`left_encode`,
//!   `right_encode`, `encode_string`, `bytepad`, `substring`). They make
//!   concatenations of variable-length strings unambiguous and underlie
//!   cSHAKE and KMAC.
//!
//! - `fixed`
//!   Fixed-width big-endian encoding of non-negative big integers, used for
//!   curve coordinates, scalars, and signatures.

pub(crate) mod fixed;
mod nist;

pub use nist::*;
