//! Keccak sponge and the SHAKE family of functions.
//!
//! - `sponge`
//!   The generic absorb / pad / squeeze engine over Keccak-f[1600].
//!
//! - `core`
//!   SHAKE256 and cSHAKE256 as defined in FIPS 202 and NIST SP 800-185,
//!   plus the fixed-length SHA3-256 hash sharing the same capacity.

pub mod core;
pub mod sponge;

pub use self::core::{cshake256, sha3_256, shake256};
pub use sponge::{CAPACITY_BITS, RATE_BYTES, sponge};
