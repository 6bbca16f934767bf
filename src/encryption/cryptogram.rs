//! Shared layout and building blocks of the KMAC-based cryptograms.
//!
//! Both encryption schemes emit
//!
//! ```text
//! ephemeral || ciphertext || tag
//! ```
//!
//! where the ciphertext is the message XORed with a KMACXOF256 keystream
//! and the tag is a 512-bit KMACXOF256 over the plaintext.

use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

use crate::error::{Error, Result};
use crate::mac::kmac::core::{kmacxof256_array, kmacxof256_bytes};

/// Length in bytes of an authentication tag.
pub const TAG_LEN: usize = 64;

/// Length in bytes of each half of the derived `ke || ka` key material.
pub(crate) const KEY_HALF_LEN: usize = 64;

/// Derived `ke || ka`.
pub(crate) type KeyMaterial = Zeroizing<[u8; 2 * KEY_HALF_LEN]>;

/// Borrowed view over a cryptogram split into its three fields.
pub(crate) struct Cryptogram<'a> {
    pub(crate) ephemeral: &'a [u8],
    pub(crate) ciphertext: &'a [u8],
    pub(crate) tag: &'a [u8],
}

impl<'a> Cryptogram<'a> {
    /// Splits `bytes` given the length of its ephemeral prefix.
    ///
    /// # Errors
    ///
    /// [`Error::MalformedInput`] if `bytes` cannot hold the prefix and a tag.
    pub(crate) fn parse(bytes: &'a [u8], ephemeral_len: usize) -> Result<Self> {
        let min_len = ephemeral_len + TAG_LEN;
        if bytes.len() < min_len {
            return Err(Error::MalformedInput {
                what: "cryptogram",
                expected: min_len,
                actual: bytes.len(),
            });
        }

        let (ephemeral, rest) = bytes.split_at(ephemeral_len);
        let (ciphertext, tag) = rest.split_at(rest.len() - TAG_LEN);

        Ok(Self {
            ephemeral,
            ciphertext,
            tag,
        })
    }

    pub(crate) fn assemble(ephemeral: &[u8], ciphertext: &[u8], tag: &[u8]) -> Vec<u8> {
        let mut out = Vec::with_capacity(ephemeral.len() + ciphertext.len() + tag.len());
        out.extend_from_slice(ephemeral);
        out.extend_from_slice(ciphertext);
        out.extend_from_slice(tag);

        out
    }
}

/// `KMACXOF256(key, "", 1024, custom)`, returned as `ke || ka`.
pub(crate) fn derive_keys(key: &[u8], custom: &[u8]) -> KeyMaterial {
    Zeroizing::new(kmacxof256_array(key, b"", custom))
}

/// Splits key material into the encryption and authentication halves.
pub(crate) fn split_keys(keys: &KeyMaterial) -> (&[u8], &[u8]) {
    keys.split_at(KEY_HALF_LEN)
}

/// XORs `data` with `KMACXOF256(key, "", 8·|data|, custom)`.
pub(crate) fn apply_keystream(key: &[u8], data: &[u8], custom: &[u8]) -> Vec<u8> {
    let keystream = Zeroizing::new(kmacxof256_bytes(key, b"", data.len(), custom));

    data.iter().zip(keystream.iter()).map(|(d, k)| d ^ k).collect()
}

/// `KMACXOF256(key, message, 512, custom)`.
pub(crate) fn authenticate(key: &[u8], message: &[u8], custom: &[u8]) -> [u8; TAG_LEN] {
    kmacxof256_array(key, message, custom)
}

/// Constant-time tag comparison.
pub(crate) fn tags_match(expected: &[u8], received: &[u8]) -> bool {
    expected.ct_eq(received).into()
}
