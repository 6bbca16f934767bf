//! SHAKE256, cSHAKE256, and SHA3-256.
//!
//! All three share the capacity of 512 bits (rate of 136 bytes) and differ
//! only in their domain-separation suffix and, for cSHAKE, in the encoded
//! prefix block.

use super::sponge::{RATE_BYTES, absorb_squeeze, output_len};
use crate::encoding::{bytepad_unchecked, encode_string};
use crate::error::Result;

/// SHAKE suffix `1111`, followed by the first padding bit.
const SHAKE_SUFFIX: u8 = 0x1F;

/// cSHAKE suffix `00`, followed by the first padding bit.
const CSHAKE_SUFFIX: u8 = 0x04;

/// SHA-3 suffix `01`, followed by the first padding bit.
const SHA3_SUFFIX: u8 = 0x06;

/// Computes SHAKE256 of `input`, returning `output_bits / 8` bytes.
///
/// # Errors
///
/// Returns [`crate::Error::DomainError`] if `output_bits` is not a multiple of 8.
pub fn shake256(input: &[u8], output_bits: usize) -> Result<Vec<u8>> {
    Ok(shake256_bytes(input, output_len(output_bits)?))
}

/// Computes cSHAKE256 with function name `name` and customization `custom`.
///
/// When both strings are empty this is exactly [`shake256`].
///
/// # Errors
///
/// Returns [`crate::Error::DomainError`] if `output_bits` is not a multiple of 8.
pub fn cshake256(input: &[u8], output_bits: usize, name: &[u8], custom: &[u8]) -> Result<Vec<u8>> {
    Ok(cshake256_bytes(input, output_len(output_bits)?, name, custom))
}

/// Computes the 32-byte SHA3-256 digest of `input`.
pub fn sha3_256(input: &[u8]) -> [u8; 32] {
    let digest = absorb_squeeze(&with_suffix(&[input], SHA3_SUFFIX), 32, RATE_BYTES);

    let mut out = [0u8; 32];
    out.copy_from_slice(&digest);

    out
}

pub(crate) fn shake256_bytes(input: &[u8], out_len: usize) -> Vec<u8> {
    absorb_squeeze(&with_suffix(&[input], SHAKE_SUFFIX), out_len, RATE_BYTES)
}

pub(crate) fn cshake256_bytes(input: &[u8], out_len: usize, name: &[u8], custom: &[u8]) -> Vec<u8> {
    if name.is_empty() && custom.is_empty() {
        return shake256_bytes(input, out_len);
    }

    let mut prefix = encode_string(name);
    prefix.extend_from_slice(&encode_string(custom));
    let prefix = bytepad_unchecked(&prefix, RATE_BYTES);

    absorb_squeeze(&with_suffix(&[prefix.as_slice(), input], CSHAKE_SUFFIX), out_len, RATE_BYTES)
}

/// Concatenates `parts` and appends the suffix byte.
fn with_suffix(parts: &[&[u8]], suffix: u8) -> Vec<u8> {
    let len = parts.iter().map(|p| p.len()).sum::<usize>() + 1;

    let mut out = Vec::with_capacity(len);
    for part in parts {
        out.extend_from_slice(part);
    }
    out.push(suffix);

    out
}
