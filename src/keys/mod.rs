//! Asymmetric key material.
//!
//! ## Ed448
//!
//! The `ed448` module implements the Ed448-Goldilocks Edwards curve over
//! the field 𝔽ₚ where `p = 2⁴⁴⁸ − 2²²⁴ − 1`, and the passphrase-derived
//! key pairs used by the public-key encryption and signature schemes of
//! this crate.
pub mod ed448;
