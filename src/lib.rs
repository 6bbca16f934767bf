//! Keccak-based cryptography over the Ed448-Goldilocks curve.
//!
//! This crate provides a small, self-contained suite built from two
//! foundations: the Keccak-f[1600] permutation and the Edwards curve
//! Ed448-Goldilocks. Everything above them is derived from KMACXOF256.
//!
//! The focus is on **clarity, predictability, and auditability** rather
//! than raw speed. Curve arithmetic uses arbitrary-precision integers in
//! affine coordinates and is not constant time.
//!
//! # Module overview
//!
//! - `encoding`  
//!   NIST SP 800-185 string encodings (`left_encode`, `right_encode`,
//!   `encode_string`, `bytepad`, `substring`) used to frame the inputs of
//!   cSHAKE and KMAC.
//!
//! - `hash`  
//!   The Keccak-f[1600] permutation, the sponge construction, and the
//!   SHAKE256 / cSHAKE256 extendable-output functions, plus SHA3-256.
//!
//! - `mac`  
//!   KMACXOF256, together with the 512-bit digest and authentication tag
//!   built on it.
//!
//! - `keys`  
//!   Ed448 field, scalar, and point arithmetic, and key pairs derived
//!   deterministically from a passphrase.
//!
//! - `encryption`  
//!   Passphrase-based and public-key authenticated encryption sharing the
//!   `ephemeral || ciphertext || tag` cryptogram layout.
//!
//! - `signatures`  
//!   Deterministic Schnorr signatures over Ed448.
//!
//! - `error`  
//!   The crate-wide [`Error`] type and [`Result`] alias.
//!
//! # Design goals
//!
//! - Minimal and explicit APIs
//! - Stable, well-defined byte encodings
//! - Secret intermediate buffers wiped after use
//! - No global mutable state; curve constants are computed once and
//!   never change
//!
//! The library installs no `tracing` subscriber. Protocol-level events
//! are emitted at `debug` and `warn` and carry lengths only.

pub mod encoding;
pub mod encryption;
pub mod error;
pub mod hash;
pub mod keys;
pub mod mac;
pub mod signatures;

pub use error::{Error, Result};
