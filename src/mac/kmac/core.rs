//! KMACXOF256 (NIST SP 800-185).
//!
//! KMACXOF256 is cSHAKE256 with function name `"KMAC"` over the input
//!
//! ```text
//! bytepad(encode_string(K), 136) || X || right_encode(0)
//! ```
//!
//! Encoding `0` as the output length makes the function an XOF: shorter
//! outputs are prefixes of longer ones.
//!
//! The same primitive serves as a fixed-length MAC, a keystream generator,
//! and a deterministic key-derivation function in the protocol layer.

use zeroize::Zeroizing;

use crate::encoding::{bytepad_unchecked, encode_string, right_encode};
use crate::error::Result;
use crate::hash::shake::RATE_BYTES;
use crate::hash::shake::core::cshake256_bytes;
use crate::hash::shake::sponge::output_len;

/// cSHAKE function name reserved for KMAC.
const FUNCTION_NAME: &[u8] = b"KMAC";

/// Customization string of the plain hash.
const DIGEST_CUSTOM: &[u8] = b"D";

/// Customization string of the authentication tag.
const TAG_CUSTOM: &[u8] = b"T";

/// Computes KMACXOF256 of `data` under `key` with customization `custom`.
///
/// # Errors
///
/// Returns [`crate::Error::DomainError`] if `output_bits` is not a multiple of 8.
pub fn kmacxof256(key: &[u8], data: &[u8], output_bits: usize, custom: &[u8]) -> Result<Vec<u8>> {
    Ok(kmacxof256_bytes(key, data, output_len(output_bits)?, custom))
}

/// Computes the 512-bit cryptographic hash of `data`: KMACXOF256 under the
/// empty key with customization `"D"`.
pub fn digest(data: &[u8]) -> [u8; 64] {
    kmacxof256_array(b"", data, DIGEST_CUSTOM)
}

/// Computes the 512-bit authentication tag of `data` under `passphrase`:
/// KMACXOF256 with customization `"T"`.
pub fn tag(passphrase: &[u8], data: &[u8]) -> [u8; 64] {
    kmacxof256_array(passphrase, data, TAG_CUSTOM)
}

pub(crate) fn kmacxof256_bytes(key: &[u8], data: &[u8], out_len: usize, custom: &[u8]) -> Vec<u8> {
    let key_block = Zeroizing::new(bytepad_unchecked(&encode_string(key), RATE_BYTES));
    let trailer = right_encode(0);

    // Holds the key material until the sponge has absorbed it.
    let mut input = Zeroizing::new(Vec::with_capacity(key_block.len() + data.len() + trailer.len()));
    input.extend_from_slice(&key_block);
    input.extend_from_slice(data);
    input.extend_from_slice(&trailer);

    cshake256_bytes(&input, out_len, FUNCTION_NAME, custom)
}

pub(crate) fn kmacxof256_array<const N: usize>(key: &[u8], data: &[u8], custom: &[u8]) -> [u8; N] {
    let bytes = kmacxof256_bytes(key, data, N, custom);

    let mut out = [0u8; N];
    out.copy_from_slice(&bytes);

    out
}
