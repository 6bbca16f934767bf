//! Passphrase-based authenticated encryption.
//!
//! ```text
//! z       <- 64 random bytes
//! ke || ka = KMACXOF256(z || pw, "", 1024, "S")
//! c        = KMACXOF256(ke, "", 8|m|, "SKE") XOR m
//! t        = KMACXOF256(ka, m, 512, "SKA")
//! output   = z || c || t
//! ```

pub(crate) mod core;

pub use self::core::{NONCE_LEN, decrypt, encrypt, encrypt_with_rng};
