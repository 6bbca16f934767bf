//! Authenticated encryption built on KMACXOF256.
//!
//! Two schemes share one cryptogram layout, `ephemeral || ciphertext || tag`:
//!
//! - `symmetric`: passphrase-only encryption. The ephemeral field is a
//!   random [`NONCE_LEN`]-byte nonce that salts the key derivation.
//! - `ecies`: public-key encryption to an Ed448 key. The ephemeral field
//!   is the encoded point `Z = G·k` from which the recipient recomputes the
//!   shared secret.
//!
//! Each message gets fresh randomness, so encrypting the same plaintext
//! twice produces unrelated cryptograms. Decryption verifies the tag in
//! constant time and never releases plaintext that fails authentication.

mod cryptogram;

/// Public-key (ECIES-style) encryption over Ed448.
pub mod ecies;

/// Passphrase-based encryption.
pub mod symmetric;

pub use cryptogram::TAG_LEN;
pub use symmetric::NONCE_LEN;
