//! Public-key encryption to an Ed448 key.
//!
//! ```text
//! k        = random scalar
//! W        = V·k,   Z = G·k
//! ke || ka = KMACXOF256(W.x, "", 1024, "PK")
//! c        = KMACXOF256(ke, "", 8|m|, "PKE") XOR m
//! t        = KMACXOF256(ka, m, 512, "PKA")
//! output   = Z || c || t
//! ```
//!
//! The recipient recomputes `W = Z·s` from its secret scalar `s`, which
//! equals `V·k` because `V = G·s`.

pub(crate) mod core;

pub use self::core::{decrypt, decrypt_with_keypair, encrypt, encrypt_with_rng};
