//! Schnorr signatures over Ed448 with KMACXOF256 as the hash.
//!
//! Signing with secret `s` (public `V = G·s`):
//!
//! ```text
//! k = 4 · int(KMACXOF256(s, m, 512, "N")) mod r
//! U = G·k
//! h = int(KMACXOF256(U.x, m, 512, "T"))
//! z = (k − h·s) mod r
//! ```
//!
//! Verification recomputes `U' = G·z + V·h` and accepts iff
//! `int(KMACXOF256(U'.x, m, 512, "T")) == h`.
//!
//! The nonce `k` is derived from the secret and the message, so signing is
//! deterministic and needs no randomness.

pub(crate) mod core;

pub use self::core::{SIGNATURE_LEN, Signature, sign, sign_with_keypair, verify};
